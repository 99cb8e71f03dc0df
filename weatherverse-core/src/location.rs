//! Static landmark table keyed by lowercase city name.

use std::{collections::HashMap, sync::LazyLock};

use crate::model::{Coordinates, LocationRecord};

/// Cities offered as quick picks by front-ends.
pub const POPULAR_CITIES: &[&str] =
    &["Mumbai", "Paris", "New York", "Tokyo", "London", "Dubai", "Sydney"];

const fn record(
    display_name: &'static str,
    landmark_id: &'static str,
    description: &'static str,
    lat: f64,
    lon: f64,
) -> LocationRecord {
    LocationRecord { display_name, landmark_id, description, coordinates: Coordinates { lat, lon } }
}

const ENTRIES: &[(&str, LocationRecord)] = &[
    // Landmark cities
    ("mumbai", record("Gateway of India", "gateway", "Iconic archway overlooking the Arabian Sea", 18.9220, 72.8347)),
    ("paris", record("Eiffel Tower", "eiffel", "Iron lattice tower on the Champ de Mars", 48.8566, 2.3522)),
    ("new york", record("Statue of Liberty", "liberty", "Neoclassical sculpture on Liberty Island", 40.6892, -74.0445)),
    ("tokyo", record("Tokyo Tower", "tokyo", "Communications and observation tower", 35.6586, 139.7454)),
    ("london", record("Big Ben", "bigben", "Great bell of the Great Clock of Westminster", 51.5007, -0.1246)),
    ("dubai", record("Burj Khalifa", "burj", "World's tallest building and structure", 25.1972, 55.2744)),
    ("sydney", record("Sydney Opera House", "opera", "Multi-venue performing arts centre", -33.8568, 151.2153)),
    // More world cities
    ("rome", record("Colosseum", "colosseum", "Ancient amphitheatre in the centre of Rome", 41.8902, 12.4922)),
    ("beijing", record("Forbidden City", "forbidden", "Imperial palace complex of the Ming and Qing dynasties", 39.9163, 116.3972)),
    ("cairo", record("Pyramids of Giza", "pyramids", "Ancient pyramid complex on the Giza Plateau", 29.9792, 31.1342)),
    ("rio de janeiro", record("Christ the Redeemer", "redeemer", "Art Deco statue on Corcovado mountain", -22.9519, -43.2105)),
    ("moscow", record("Red Square", "redsquare", "Historic city square beside the Kremlin", 55.7539, 37.6208)),
    ("singapore", record("Marina Bay Sands", "marinabay", "Integrated resort fronting Marina Bay", 1.2834, 103.8607)),
    ("san francisco", record("Golden Gate Bridge", "goldengate", "Suspension bridge spanning the Golden Gate strait", 37.8199, -122.4783)),
    ("los angeles", record("Hollywood Sign", "hollywood", "Landmark sign in the Hollywood Hills", 34.1341, -118.3215)),
    ("barcelona", record("Sagrada Familia", "sagrada", "Unfinished basilica designed by Antoni Gaudi", 41.4036, 2.1744)),
    ("istanbul", record("Hagia Sophia", "hagiasophia", "Byzantine cathedral turned mosque", 41.0086, 28.9802)),
    ("toronto", record("CN Tower", "cntower", "Concrete communications and observation tower", 43.6426, -79.3871)),
    // Indian cities
    ("delhi", record("India Gate", "indiagate", "War memorial astride the Kartavya Path", 28.6129, 77.2295)),
    ("agra", record("Taj Mahal", "tajmahal", "Ivory-white marble mausoleum on the Yamuna", 27.1751, 78.0421)),
    ("hyderabad", record("Charminar", "charminar", "Sixteenth-century mosque and monument", 17.3616, 78.4747)),
    ("kolkata", record("Victoria Memorial", "victoria", "Marble memorial hall and museum", 22.5448, 88.3426)),
    ("chennai", record("Marina Beach", "marina", "Natural urban beach along the Bay of Bengal", 13.0500, 80.2824)),
    ("bangalore", record("Vidhana Soudha", "vidhana", "Seat of the state legislature of Karnataka", 12.9791, 77.5913)),
    ("jaipur", record("Hawa Mahal", "hawamahal", "Palace of winds in pink sandstone", 26.9239, 75.8267)),
    ("amritsar", record("Golden Temple", "goldentemple", "Holiest gurdwara of Sikhism", 31.6200, 74.8765)),
    // Indian states
    ("andhra pradesh", record("Tirumala Temple", "tirumala", "Hill shrine of Lord Venkateswara", 13.6833, 79.3474)),
    ("telangana", record("Golconda Fort", "golconda", "Fortified citadel of the Qutb Shahi dynasty", 17.3833, 78.4011)),
    ("kerala", record("Alleppey Backwaters", "backwaters", "Network of lagoons and canals", 9.4981, 76.3388)),
    ("karnataka", record("Mysore Palace", "mysore", "Historical palace and royal residence", 12.3052, 76.6552)),
    ("tamil nadu", record("Meenakshi Temple", "meenakshi", "Historic temple on the bank of the Vaigai", 9.9195, 78.1193)),
    ("goa", record("Basilica of Bom Jesus", "bomjesus", "Baroque church holding the relics of St. Francis Xavier", 15.5009, 73.9116)),
    ("gujarat", record("Statue of Unity", "unity", "World's tallest statue on the Narmada river", 21.8380, 73.7191)),
    // Andhra Pradesh and Telangana districts
    ("anantapur", record("Lepakshi Temple", "lepakshi", "Vijayanagara temple with the hanging pillar", 13.8036, 77.6094)),
    ("visakhapatnam", record("RK Beach", "rkbeach", "Beach along the Bay of Bengal", 17.7145, 83.3230)),
    ("vijayawada", record("Kanaka Durga Temple", "kanakadurga", "Hilltop temple on Indrakeeladri", 16.5158, 80.6053)),
    ("guntur", record("Amaravati Stupa", "amaravati", "Ruined Buddhist stupa of the Satavahana era", 16.5728, 80.3575)),
    ("warangal", record("Thousand Pillar Temple", "thousandpillar", "Kakatiya-era temple of carved pillars", 18.0037, 79.5748)),
    ("kurnool", record("Belum Caves", "belum", "Second largest cave system on the Indian subcontinent", 15.1022, 78.1111)),
    // Generic fragment
    ("village", record("Rural India", "village", "Fields, wells and temples of an Indian village", 20.5937, 78.9629)),
];

static LOCATIONS: LazyLock<HashMap<&'static str, LocationRecord>> =
    LazyLock::new(|| ENTRIES.iter().map(|(key, rec)| (*key, rec.clone())).collect());

/// Look up a city by exact (trimmed, case-insensitive) name.
pub fn resolve(city: &str) -> Option<&'static LocationRecord> {
    let key = city.trim().to_lowercase();
    LOCATIONS.get(key.as_str())
}

/// Every known record, ordered by lookup key.
pub fn all_locations() -> Vec<(&'static str, &'static LocationRecord)> {
    let mut all: Vec<_> = LOCATIONS.iter().map(|(k, v)| (*k, v)).collect();
    all.sort_by_key(|(k, _)| *k);
    all
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_ignores_case_and_whitespace() {
        let plain = resolve("paris").expect("paris is known");
        assert_eq!(resolve(" Paris "), Some(plain));
        assert_eq!(resolve("PARIS"), Some(plain));
        assert_eq!(plain.display_name, "Eiffel Tower");
    }

    #[test]
    fn every_key_resolves_to_its_record() {
        for (key, rec) in ENTRIES {
            assert_eq!(resolve(key), Some(rec), "key {key}");
            assert_eq!(resolve(&format!("  {}  ", key.to_uppercase())), Some(rec));
        }
    }

    #[test]
    fn mumbai_is_gateway_of_india() {
        let rec = resolve("Mumbai").unwrap();
        assert_eq!(rec.display_name, "Gateway of India");
        assert_eq!(rec.landmark_id, "gateway");
        assert_eq!(rec.coordinates, Coordinates { lat: 18.9220, lon: 72.8347 });
    }

    #[test]
    fn unknown_names_are_not_found() {
        assert!(resolve("Nonexistent Town").is_none());
        assert!(resolve("").is_none());
        // No partial matching.
        assert!(resolve("par").is_none());
        assert!(resolve("new york city").is_none());
    }

    #[test]
    fn keys_are_unique_and_lowercase() {
        assert_eq!(LOCATIONS.len(), ENTRIES.len());
        for (key, _) in ENTRIES {
            assert_eq!(*key, key.trim().to_lowercase());
        }
    }

    #[test]
    fn popular_cities_all_resolve() {
        for city in POPULAR_CITIES {
            assert!(resolve(city).is_some(), "{city} should be in the table");
        }
    }

    #[test]
    fn all_locations_is_sorted() {
        let all = all_locations();
        assert_eq!(all.len(), ENTRIES.len());
        assert!(all.windows(2).all(|w| w[0].0 < w[1].0));
    }
}
