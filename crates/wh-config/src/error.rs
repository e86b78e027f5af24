use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config line {line}: {message}")]
    Parse { line: u64, message: String },

    #[error("config read error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
