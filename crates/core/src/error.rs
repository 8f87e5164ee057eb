/// Boxed source for failures raised by a backing store driver.
pub type StorageSource = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, thiserror::Error)]
pub enum TutorialError {
    #[error("{0}")]
    Validation(String),
    #[error("Not found Tutorial with id={0}")]
    NotFound(String),
    #[error("storage failure: {0}")]
    Storage(#[source] StorageSource),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl TutorialError {
    /// Wraps any driver error as a storage failure.
    pub fn storage(err: impl Into<StorageSource>) -> Self {
        Self::Storage(err.into())
    }
}

impl From<mongodb::error::Error> for TutorialError {
    fn from(err: mongodb::error::Error) -> Self {
        Self::Storage(Box::new(err))
    }
}

pub type TutorialResult<T> = std::result::Result<T, TutorialError>;
