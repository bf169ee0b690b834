use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid grid size {width}x{height}")]
    InvalidGrid { width: i32, height: i32 },

    #[error("Snake length {length} does not fit a grid {width} cells wide")]
    InvalidSnakeLength { length: usize, width: i32 },

    #[error("Invalid tick interval: {0}")]
    InvalidInterval(String),
}

#[derive(Error, Debug)]
pub enum SaveError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
