use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlanError {
    #[error("Invalid input: {reason}")]
    InvalidInput { reason: String },

    #[error("Employee '{id}' not found")]
    EmployeeNotFound { id: String },

    #[error("Client '{id}' not found")]
    ClientNotFound { id: String },

    #[error("Invalid predictor config: {reason}")]
    Config { reason: String },

    #[error("Cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl PlanError {
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidInput { reason: reason.into() }
    }

    /// Read a whole file, keeping the path in the error.
    pub(crate) fn read_file(path: &std::path::Path) -> PlanResult<String> {
        std::fs::read_to_string(path).map_err(|source| Self::Io {
            path: path.display().to_string(),
            source,
        })
    }

    /// True for every error that means "the caller's selection could not
    /// be resolved into a usable record".
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::InvalidInput { .. } | Self::EmployeeNotFound { .. } | Self::ClientNotFound { .. }
        )
    }
}

pub type PlanResult<T> = Result<T, PlanError>;
