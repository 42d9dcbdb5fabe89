use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// `DATABASE_URL` is the only variable without a default; everything else
    /// (such as `BIND_ADDR`) falls back to a built-in value.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
}
