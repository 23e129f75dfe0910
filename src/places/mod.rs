pub mod google;
pub mod traits;
pub mod types;

pub use google::{GooglePlacesClient, DEFAULT_PHOTO_MAX_WIDTH};
pub use traits::PlaceSearch;
pub use types::SearchParams;
