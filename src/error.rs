use thiserror::Error;

#[derive(Debug, Error)]
pub enum WasteError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Unknown print type: {0}")]
    UnknownPrintType(String),
}

impl From<WasteError> for String {
    fn from(err: WasteError) -> Self {
        err.to_string()
    }
}
