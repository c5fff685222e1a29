//! Shared error types for configuration and process setup

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SharedError {
    #[error("Missing required environment variable: {key}")]
    MissingEnv { key: String },

    #[error("Invalid configuration: {field} = {value}")]
    InvalidConfig { field: String, value: String },

    #[error("Failed to load env file {path}: {message}")]
    EnvFile { path: String, message: String },
}

pub type SharedResult<T> = Result<T, SharedError>;
