use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImageError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },
    #[error("No images found for \"{0}\"")]
    NoResults(String),
    #[error("JSON parse error: {0}")]
    JsonParse(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Unknown city id: {0}")]
    UnknownCity(String),
}

impl From<reqwest::Error> for ImageError {
    fn from(e: reqwest::Error) -> Self {
        ImageError::Network(e.to_string())
    }
}
