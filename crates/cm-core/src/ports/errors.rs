use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AppDirsError {
    #[error("platform data directory is unavailable")]
    DataDirUnavailable,
}
