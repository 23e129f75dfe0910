use crate::models::Place;

pub const DEFAULT_RADIUS_METERS: u32 = 5000;
pub const DEFAULT_PLACE_TYPE: &str = "restaurant";

/// Search parameters for a nearby search
#[derive(Debug, Clone, PartialEq)]
pub struct SearchParams {
    pub latitude: f64,
    pub longitude: f64,
    /// Search radius in meters
    pub radius: u32,
    /// Upstream place type, e.g. "restaurant" or "cafe"
    pub place_type: String,
    /// Minimum price level (0-4)
    pub min_price: Option<u8>,
    /// Maximum price level (0-4)
    pub max_price: Option<u8>,
    pub min_rating: Option<f64>,
    /// Continuation token from a previous page. When set, location, radius
    /// and type are not sent.
    pub page_token: Option<String>,
}

impl SearchParams {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            radius: DEFAULT_RADIUS_METERS,
            place_type: DEFAULT_PLACE_TYPE.to_string(),
            min_price: None,
            max_price: None,
            min_rating: None,
            page_token: None,
        }
    }

    pub fn with_radius(mut self, radius: u32) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_type(mut self, place_type: impl Into<String>) -> Self {
        self.place_type = place_type.into();
        self
    }

    pub fn with_price_range(mut self, min_price: Option<u8>, max_price: Option<u8>) -> Self {
        self.min_price = min_price;
        self.max_price = max_price;
        self
    }

    pub fn with_min_rating(mut self, min_rating: f64) -> Self {
        self.min_rating = Some(min_rating);
        self
    }

    pub fn with_page_token(mut self, token: impl Into<String>) -> Self {
        self.page_token = Some(token.into());
        self
    }

    /// Same search and filters, pointed at the page behind `token`
    pub fn next_page(&self, token: impl Into<String>) -> Self {
        self.clone().with_page_token(token)
    }

    /// Drop places outside the price and rating bounds.
    ///
    /// Bounds are applied in order: min price, max price, min rating. A place
    /// without the relevant field never passes a bound that is set.
    pub fn apply_filters(&self, places: Vec<Place>) -> Vec<Place> {
        let mut places = places;

        if let Some(min_price) = self.min_price {
            places.retain(|p| p.price_level.map_or(false, |level| level >= min_price));
        }

        if let Some(max_price) = self.max_price {
            places.retain(|p| p.price_level.map_or(false, |level| level <= max_price));
        }

        if let Some(min_rating) = self.min_rating {
            places.retain(|p| p.rating.map_or(false, |rating| rating >= min_rating));
        }

        places
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Geometry, LatLng};

    fn place(id: &str, price_level: Option<u8>, rating: Option<f64>) -> Place {
        Place {
            place_id: id.to_string(),
            name: format!("Place {}", id),
            formatted_address: "Somewhere".to_string(),
            types: vec!["restaurant".to_string()],
            price_level,
            rating,
            user_ratings_total: None,
            geometry: Geometry {
                location: LatLng { lat: 0.0, lng: 0.0 },
            },
            photos: None,
            website: None,
            url: None,
        }
    }

    fn sample() -> Vec<Place> {
        vec![
            place("a", Some(1), Some(4.5)),
            place("b", None, Some(4.9)),
            place("c", Some(3), None),
            place("d", Some(2), Some(3.8)),
            place("e", Some(4), Some(4.1)),
        ]
    }

    fn ids(places: &[Place]) -> Vec<&str> {
        places.iter().map(|p| p.place_id.as_str()).collect()
    }

    #[test]
    fn test_defaults() {
        let params = SearchParams::new(1.0, 2.0);
        assert_eq!(params.radius, 5000);
        assert_eq!(params.place_type, "restaurant");
        assert!(params.page_token.is_none());
    }

    #[test]
    fn test_no_filters_keeps_order() {
        let params = SearchParams::new(0.0, 0.0);
        assert_eq!(ids(&params.apply_filters(sample())), vec!["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn test_min_price_excludes_missing_level() {
        let params = SearchParams::new(0.0, 0.0).with_price_range(Some(2), None);
        let filtered = params.apply_filters(sample());
        assert_eq!(ids(&filtered), vec!["c", "d", "e"]);
        assert!(filtered.iter().all(|p| p.price_level.unwrap() >= 2));
    }

    #[test]
    fn test_max_price_excludes_missing_level() {
        let params = SearchParams::new(0.0, 0.0).with_price_range(None, Some(2));
        assert_eq!(ids(&params.apply_filters(sample())), vec!["a", "d"]);
    }

    #[test]
    fn test_zero_price_bound_still_requires_level() {
        let params = SearchParams::new(0.0, 0.0).with_price_range(Some(0), None);
        assert_eq!(ids(&params.apply_filters(sample())), vec!["a", "c", "d", "e"]);
    }

    #[test]
    fn test_min_rating_excludes_missing_rating() {
        let params = SearchParams::new(0.0, 0.0).with_min_rating(4.1);
        assert_eq!(ids(&params.apply_filters(sample())), vec!["a", "b", "e"]);
    }

    #[test]
    fn test_combined_filters() {
        let params = SearchParams::new(0.0, 0.0)
            .with_price_range(Some(1), Some(3))
            .with_min_rating(4.0);
        assert_eq!(ids(&params.apply_filters(sample())), vec!["a"]);
    }

    #[test]
    fn test_next_page_keeps_filters() {
        let params = SearchParams::new(1.0, 2.0)
            .with_price_range(Some(1), None)
            .with_min_rating(4.0);
        let next = params.next_page("token-2");
        assert_eq!(next.page_token.as_deref(), Some("token-2"));
        assert_eq!(next.min_price, Some(1));
        assert_eq!(next.min_rating, Some(4.0));
        assert!(params.page_token.is_none());
    }
}
