use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    // Password errors
    #[error("Stored value is not a bcrypt hash")]
    InvalidHashFormat,

    #[error("Password hashing failed: {0}")]
    Hash(String),
}

pub type Result<T> = std::result::Result<T, Error>;
