//! Thin client for the Google Places nearby-search API

pub mod config;
pub mod error;
pub mod models;
pub mod places;
pub mod walking;

pub use config::Config;
pub use error::{PlacesError, Result};
pub use models::{Geometry, LatLng, Photo, Place, SearchResult};
pub use places::{GooglePlacesClient, PlaceSearch, SearchParams, DEFAULT_PHOTO_MAX_WIDTH};
pub use walking::calculate_walking_time_minutes;
