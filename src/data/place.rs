//! Static place data
//!
//! This module contains the static list of named cities the CLI can select
//! by id, with the original deployment's hardcoded location (Durgapur, West
//! Bengal) as the default.

use super::Place;

/// Static array of selectable places
pub static PLACES: [Place; 9] = [
    Place {
        id: "durgapur",
        name: "Durgapur",
        region: "West Bengal",
        latitude: 23.5204,
        longitude: 87.3119,
    },
    Place {
        id: "kolkata",
        name: "Kolkata",
        region: "West Bengal",
        latitude: 22.5726,
        longitude: 88.3639,
    },
    Place {
        id: "delhi",
        name: "New Delhi",
        region: "Delhi",
        latitude: 28.6139,
        longitude: 77.2090,
    },
    Place {
        id: "mumbai",
        name: "Mumbai",
        region: "Maharashtra",
        latitude: 19.0760,
        longitude: 72.8777,
    },
    Place {
        id: "chennai",
        name: "Chennai",
        region: "Tamil Nadu",
        latitude: 13.0827,
        longitude: 80.2707,
    },
    Place {
        id: "bengaluru",
        name: "Bengaluru",
        region: "Karnataka",
        latitude: 12.9716,
        longitude: 77.5946,
    },
    Place {
        id: "hyderabad",
        name: "Hyderabad",
        region: "Telangana",
        latitude: 17.3850,
        longitude: 78.4867,
    },
    Place {
        id: "pune",
        name: "Pune",
        region: "Maharashtra",
        latitude: 18.5204,
        longitude: 73.8567,
    },
    Place {
        id: "asansol",
        name: "Asansol",
        region: "West Bengal",
        latitude: 23.6839,
        longitude: 86.9523,
    },
];

/// Returns all selectable places
pub fn all_places() -> &'static [Place] {
    &PLACES
}

/// Get a place by its ID
///
/// # Arguments
///
/// * `id` - The unique identifier for the place (e.g., "durgapur", "kolkata")
///
/// # Returns
///
/// Returns `Some(&Place)` if found, `None` otherwise
pub fn get_place_by_id(id: &str) -> Option<&'static Place> {
    PLACES.iter().find(|place| place.id == id)
}

/// The place used when the caller selects nothing
pub fn default_place() -> &'static Place {
    &PLACES[0]
}
