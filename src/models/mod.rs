use serde::{Deserialize, Serialize};

/// Latitude/longitude pair as returned by the upstream API
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// Geographic position of a place
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Geometry {
    pub location: LatLng,
}

/// Reference to a place photo, resolved through the photo endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Photo {
    pub photo_reference: String,
    pub height: u32,
    pub width: u32,
}

/// A single point of interest returned by nearby search
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Place {
    pub place_id: String,
    pub name: String,
    pub formatted_address: String,
    pub types: Vec<String>,
    /// Relative cost, 0 (free) to 4 (very expensive)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_level: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_ratings_total: Option<u32>,
    pub geometry: Geometry,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photos: Option<Vec<Photo>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    /// Google Maps URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Place {
    pub fn location(&self) -> LatLng {
        self.geometry.location
    }
}

/// One page of nearby search results
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchResult {
    pub results: Vec<Place>,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
}

impl SearchResult {
    pub fn has_next_page(&self) -> bool {
        self.next_page_token.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn minimal_place() -> serde_json::Value {
        json!({
            "place_id": "p1",
            "name": "Noodle Bar",
            "formatted_address": "1 Main St",
            "types": ["restaurant", "food"],
            "geometry": { "location": { "lat": 1.3, "lng": 103.8 } }
        })
    }

    #[test]
    fn test_minimal_place_decodes() {
        let place: Place = serde_json::from_value(minimal_place()).unwrap();
        assert_eq!(place.place_id, "p1");
        assert_eq!(place.location(), LatLng { lat: 1.3, lng: 103.8 });
        assert!(place.price_level.is_none());
        assert!(place.photos.is_none());
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let mut value = minimal_place();
        value["business_status"] = json!("OPERATIONAL");
        value["vicinity"] = json!("Main St");
        assert!(serde_json::from_value::<Place>(value).is_ok());
    }

    #[test]
    fn test_missing_geometry_rejected() {
        let mut value = minimal_place();
        value.as_object_mut().unwrap().remove("geometry");
        assert!(serde_json::from_value::<Place>(value).is_err());
    }

    #[test]
    fn test_wrong_primitive_type_rejected() {
        let mut value = minimal_place();
        value["rating"] = json!("4.5");
        assert!(serde_json::from_value::<Place>(value).is_err());

        let mut value = minimal_place();
        value["types"] = json!("restaurant");
        assert!(serde_json::from_value::<Place>(value).is_err());
    }

    #[test]
    fn test_malformed_photo_rejected() {
        let mut value = minimal_place();
        value["photos"] = json!([{ "photo_reference": "abc", "height": 100 }]);
        assert!(serde_json::from_value::<Place>(value).is_err());
    }

    #[test]
    fn test_search_result_without_token() {
        let result: SearchResult = serde_json::from_value(json!({
            "results": [minimal_place()],
            "status": "OK"
        }))
        .unwrap();
        assert_eq!(result.results.len(), 1);
        assert!(!result.has_next_page());
    }
}
