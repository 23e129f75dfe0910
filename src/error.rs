use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlacesError {
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// Details are logged where the failure happens, not carried here
    #[error("Invalid response from Google Places API")]
    ResponseFormat,
}

pub type Result<T> = std::result::Result<T, PlacesError>;
