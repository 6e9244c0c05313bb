use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Invalid album id {0:?}: expected an integer")]
    InvalidId(String),
}
