//! Class service: teacher-owned classes, join codes, and the roster.

use sea_orm::DatabaseConnection;

use crate::{
    model::{
        class::{ClassDto, CreateClassDto, JoinClassDto, RosterEntryDto, UpdateClassDto},
        user::{CreateStudentDto, UserDto},
    },
    server::{
        data::{class::ClassRepository, user::UserRepository},
        error::AppError,
        model::{
            class::{CreateClassParam, UpdateClassParam},
            user::{CreateUserParam, User},
        },
        service::auth::validate_password,
        util::{code::generate_code, password::hash_password},
    },
};

/// Length of class join codes handed to students.
const JOIN_CODE_LENGTH: usize = 6;

pub struct ClassService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ClassService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a class owned by the calling teacher with a fresh join code.
    pub async fn create(&self, teacher: &User, dto: CreateClassDto) -> Result<ClassDto, AppError> {
        let repo = ClassRepository::new(self.db);

        if dto.name.trim().is_empty() {
            return Err(AppError::BadRequest("Class name is required".to_string()));
        }

        let join_code = self.unique_join_code(&repo).await?;

        let class = repo
            .create(CreateClassParam {
                name: dto.name.trim().to_string(),
                join_code,
                teacher_id: teacher.id,
            })
            .await?;

        Ok(class.into_dto())
    }

    pub async fn get_all(&self, teacher: &User) -> Result<Vec<ClassDto>, AppError> {
        let repo = ClassRepository::new(self.db);

        let classes = repo.get_by_teacher(teacher.id).await?;

        Ok(classes.into_iter().map(|class| class.into_dto()).collect())
    }

    pub async fn get_by_id(&self, teacher: &User, id: i32) -> Result<ClassDto, AppError> {
        let class = self.owned_class(teacher, id).await?;

        Ok(class.into_dto())
    }

    pub async fn update(
        &self,
        teacher: &User,
        id: i32,
        dto: UpdateClassDto,
    ) -> Result<ClassDto, AppError> {
        let repo = ClassRepository::new(self.db);

        self.owned_class(teacher, id).await?;

        if dto.name.trim().is_empty() {
            return Err(AppError::BadRequest("Class name is required".to_string()));
        }

        let class = repo
            .update(
                id,
                UpdateClassParam {
                    name: dto.name.trim().to_string(),
                    archived: dto.archived,
                },
            )
            .await?;

        Ok(class.into_dto())
    }

    pub async fn delete(&self, teacher: &User, id: i32) -> Result<(), AppError> {
        let repo = ClassRepository::new(self.db);

        self.owned_class(teacher, id).await?;
        repo.delete(id).await?;

        Ok(())
    }

    /// Replaces a class's join code, invalidating the old one.
    pub async fn regenerate_join_code(&self, teacher: &User, id: i32) -> Result<ClassDto, AppError> {
        let repo = ClassRepository::new(self.db);

        self.owned_class(teacher, id).await?;
        let join_code = self.unique_join_code(&repo).await?;
        let class = repo.set_join_code(id, &join_code).await?;

        Ok(class.into_dto())
    }

    pub async fn get_roster(&self, teacher: &User, id: i32) -> Result<Vec<RosterEntryDto>, AppError> {
        let repo = ClassRepository::new(self.db);

        self.owned_class(teacher, id).await?;
        let roster = repo.get_roster(id).await?;

        Ok(roster.into_iter().map(|entry| entry.into_dto()).collect())
    }

    /// Creates a student account and enrolls it in the class.
    pub async fn create_student(
        &self,
        teacher: &User,
        class_id: i32,
        dto: CreateStudentDto,
    ) -> Result<UserDto, AppError> {
        let class_repo = ClassRepository::new(self.db);
        let user_repo = UserRepository::new(self.db);

        self.owned_class(teacher, class_id).await?;

        let username = dto.username.trim().to_string();
        if username.is_empty() {
            return Err(AppError::BadRequest("Username is required".to_string()));
        }
        validate_password(&dto.password)?;

        if user_repo.username_taken(&username).await? {
            return Err(AppError::BadRequest("Username is already taken".to_string()));
        }

        let (password_hash, password_salt) = hash_password(&dto.password);

        let student = user_repo
            .create(CreateUserParam {
                username,
                password_hash,
                password_salt,
                display_name: dto.display_name.trim().to_string(),
                role: entity::user::UserRole::Student,
            })
            .await?;

        class_repo.add_student(class_id, student.id).await?;

        Ok(student.into_dto())
    }

    pub async fn remove_student(
        &self,
        teacher: &User,
        class_id: i32,
        student_id: i32,
    ) -> Result<(), AppError> {
        let repo = ClassRepository::new(self.db);

        self.owned_class(teacher, class_id).await?;
        repo.remove_student(class_id, student_id).await?;

        Ok(())
    }

    /// Joins the calling student to a class by join code.
    ///
    /// Joining a class the student is already in succeeds without change.
    /// Unknown and archived codes are indistinguishable to the caller.
    pub async fn join(&self, student: &User, dto: JoinClassDto) -> Result<ClassDto, AppError> {
        let repo = ClassRepository::new(self.db);

        let code = dto.code.trim().to_uppercase();

        let Some(class) = repo.find_by_join_code(&code).await? else {
            return Err(AppError::NotFound("Class not found".to_string()));
        };

        if class.archived {
            return Err(AppError::NotFound("Class not found".to_string()));
        }

        repo.add_student(class.id, student.id).await?;

        Ok(class.into_dto())
    }

    /// Gets all classes the calling student has joined.
    pub async fn get_joined(&self, student: &User) -> Result<Vec<ClassDto>, AppError> {
        let repo = ClassRepository::new(self.db);

        let classes = repo.get_by_student(student.id).await?;

        Ok(classes.into_iter().map(|class| class.into_dto()).collect())
    }

    /// Loads a class and checks the caller owns it. Classes owned by other
    /// teachers read as not found.
    async fn owned_class(
        &self,
        teacher: &User,
        id: i32,
    ) -> Result<crate::server::model::class::Class, AppError> {
        let repo = ClassRepository::new(self.db);

        let Some(class) = repo.get_by_id(id).await? else {
            return Err(AppError::NotFound("Class not found".to_string()));
        };

        if class.teacher_id != teacher.id {
            return Err(AppError::NotFound("Class not found".to_string()));
        }

        Ok(class)
    }

    async fn unique_join_code(
        &self,
        repo: &ClassRepository<'_, DatabaseConnection>,
    ) -> Result<String, AppError> {
        // Collisions are rare at this code length; retry a handful of times
        // rather than looping forever on a pathological database.
        for _ in 0..10 {
            let code = generate_code(JOIN_CODE_LENGTH);
            if !repo.join_code_taken(&code).await? {
                return Ok(code);
            }
        }

        Err(AppError::InternalError(
            "Failed to generate a unique join code".to_string(),
        ))
    }
}
