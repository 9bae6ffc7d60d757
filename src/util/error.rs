/// Error type for cityscene-rs operations.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneError {
    /// Retrieving or decoding the scene layout failed. Retryable.
    FetchFailure(String),
    /// The bounding box is empty or inverted (north <= south or east <= west).
    InvalidBounds {
        north: f64,
        south: f64,
        east: f64,
        west: f64,
    },
    /// A configuration value is out of range (e.g., an inverted height range).
    InvalidConfig(String),
    /// File I/O or serialization error.
    IoError(String),
    /// CSV writing error.
    CsvError(String),
}

impl SceneError {
    /// Whether the caller may recover by issuing the same request again.
    pub fn is_retryable(&self) -> bool {
        matches!(self, SceneError::FetchFailure(_))
    }
}

impl std::fmt::Display for SceneError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SceneError::FetchFailure(msg) => write!(f, "Layout fetch failed: {}", msg),
            SceneError::InvalidBounds {
                north,
                south,
                east,
                west,
            } => write!(
                f,
                "Invalid bounds: north={} south={} east={} west={}",
                north, south, east, west
            ),
            SceneError::InvalidConfig(msg) => write!(f, "Invalid config: {}", msg),
            SceneError::IoError(msg) => write!(f, "IO error: {}", msg),
            SceneError::CsvError(msg) => write!(f, "CSV error: {}", msg),
        }
    }
}

impl std::error::Error for SceneError {}
