use thiserror::Error;

pub type Result<T> = std::result::Result<T, ProcessingError>;

#[derive(Error, Debug)]
pub enum ProcessingError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid data format: {0}")]
    InvalidFormat(String),

    #[error("Station '{name}' at byte {offset} was not seen during discovery")]
    UnknownStation { name: String, offset: usize },

    #[error("More than {limit} distinct stations discovered")]
    TooManyStations { limit: usize },

    #[error("Stations '{first}' and '{second}' share the same name hash")]
    HashCollision { first: String, second: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Settings error: {0}")]
    Settings(#[from] config::ConfigError),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Thread pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
