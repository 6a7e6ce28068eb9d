//! Domain error types.

/// Top-level error type for tickbench.
#[derive(Debug, thiserror::Error)]
pub enum TickbenchError {
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

    #[error("window size must be at least 1, got {0}")]
    InvalidWindowSize(usize),

    #[error("invalid benchmark configuration: {reason}")]
    InvalidBenchmark { reason: String },

    #[error("tick source error: {reason}")]
    DataSource { reason: String },

    #[error("malformed tick on line {line}: {reason}")]
    MalformedTick { line: u64, reason: String },

    #[error("tick source has {available} ticks, benchmark requested {requested}")]
    InsufficientTicks { requested: usize, available: usize },

    #[error("report error: {reason}")]
    Report { reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<&TickbenchError> for std::process::ExitCode {
    fn from(err: &TickbenchError) -> Self {
        let code: u8 = match err {
            TickbenchError::Io(_) => 1,
            TickbenchError::ConfigParse { .. }
            | TickbenchError::ConfigMissing { .. }
            | TickbenchError::ConfigInvalid { .. }
            | TickbenchError::InvalidWindowSize(_)
            | TickbenchError::InvalidBenchmark { .. } => 2,
            TickbenchError::DataSource { .. } | TickbenchError::MalformedTick { .. } => 3,
            TickbenchError::InsufficientTicks { .. } => 4,
            TickbenchError::Report { .. } => 5,
        };
        std::process::ExitCode::from(code)
    }
}
