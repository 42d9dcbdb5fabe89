use sea_orm::DatabaseConnection;
use time::Duration;
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    config::Config,
    data::user::UserRepository,
    error::AppError,
    model::user::CreateUserParam,
    util::{code::generate_code, password::hash_password},
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Initializes the session store on top of the application database.
///
/// Sessions are stored in the same Sqlite database as the application data and
/// expire after seven days of inactivity.
///
/// # Arguments
/// - `db` - Database connection pool
///
/// # Returns
/// - `Ok(SessionManagerLayer)` - Session layer ready to be applied to the router
/// - `Err(AppError)` - Failed to run the session store migration
pub async fn connect_to_session(
    db: &DatabaseConnection,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool().clone();

    let store = SqliteStore::new(pool);
    store.migrate().await?;

    Ok(SessionManagerLayer::new(store).with_expiry(Expiry::OnInactivity(Duration::days(7))))
}

/// Seeds a teacher account on first startup.
///
/// When no teacher exists in the database (fresh install), creates one with a
/// generated password and logs the credentials once so the operator can log in
/// and change them. Does nothing when a teacher already exists.
///
/// # Arguments
/// - `db` - Database connection pool
///
/// # Returns
/// - `Ok(())` - A teacher exists or was created
/// - `Err(AppError)` - Database error while checking or seeding
pub async fn seed_first_teacher(db: &DatabaseConnection) -> Result<(), AppError> {
    let user_repo = UserRepository::new(db);

    if user_repo.teacher_exists().await? {
        return Ok(());
    }

    let password = generate_code(12);
    let (hash, salt) = hash_password(&password);

    user_repo
        .create(CreateUserParam {
            username: "teacher".to_string(),
            password_hash: hash,
            password_salt: salt,
            display_name: "Teacher".to_string(),
            role: entity::user::UserRole::Teacher,
        })
        .await?;

    tracing::info!(
        "No teacher account found, created one. Username: teacher Password: {}",
        password
    );

    Ok(())
}
