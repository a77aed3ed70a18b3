//! Domain error types.

/// Top-level error type for dessertdash.
#[derive(Debug, thiserror::Error)]
pub enum DessertError {
    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("missing config key [{section}] {key}")]
    ConfigMissing { section: String, key: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error("data error: {reason}")]
    Data { reason: String },

    #[error("no menu item with id {id}")]
    UnknownItem { id: u32 },

    #[error("no bakery with id {id}")]
    UnknownBakery { id: u32 },

    #[error("please select a file first")]
    NoFileSelected,

    #[error("unsupported file type for {file}: only CSV files are allowed")]
    UnsupportedFileType { file: String },

    #[error("forecast request failed: {reason}")]
    ForecastRequest { reason: String },

    #[error("forecast service returned {status}: {message}")]
    ForecastRejected { status: u16, message: String },

    #[error("invalid response format: {reason}")]
    InvalidResponse { reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl DessertError {
    /// Process exit status for this error's category.
    pub fn exit_status(&self) -> u8 {
        match self {
            DessertError::Io(_) => 1,
            DessertError::ConfigParse { .. }
            | DessertError::ConfigMissing { .. }
            | DessertError::ConfigInvalid { .. } => 2,
            DessertError::Data { .. } => 3,
            DessertError::ForecastRequest { .. }
            | DessertError::ForecastRejected { .. }
            | DessertError::InvalidResponse { .. } => 4,
            DessertError::UnknownItem { .. }
            | DessertError::UnknownBakery { .. }
            | DessertError::NoFileSelected
            | DessertError::UnsupportedFileType { .. } => 5,
        }
    }
}

impl From<&DessertError> for std::process::ExitCode {
    fn from(err: &DessertError) -> Self {
        std::process::ExitCode::from(err.exit_status())
    }
}
