//! Place cards: a handful of famous landmarks, and generated text for everything else.

use std::{collections::HashMap, sync::LazyLock};

use rand::{Rng, seq::SliceRandom};

use crate::model::PlaceInfoRecord;

const IMAGE_BASE_URL: &str = "https://images.unsplash.com/photo-";

struct Landmark {
    name: &'static str,
    image_id: &'static str,
    fact: &'static str,
    description: &'static str,
}

const LANDMARKS: &[(&str, Landmark)] = &[
    (
        "mumbai",
        Landmark {
            name: "Gateway of India",
            image_id: "1570168007204-dfb528c6958f",
            fact: "The Gateway of India was built to commemorate the visit of King George V and Queen Mary to Mumbai in 1911.",
            description: "Iconic archway overlooking the Arabian Sea, built in Indo-Saracenic style architecture.",
        },
    ),
    (
        "paris",
        Landmark {
            name: "Eiffel Tower",
            image_id: "1511739001486-6bfe10ce785f",
            fact: "The Eiffel Tower was originally intended to be a temporary structure for the 1889 World's Fair.",
            description: "Iron lattice tower on the Champ de Mars, standing 324 meters tall as Paris' most iconic landmark.",
        },
    ),
    (
        "new york",
        Landmark {
            name: "Statue of Liberty",
            image_id: "1548013146-72479768bada",
            fact: "The Statue of Liberty was a gift from France to the United States, designed by Frédéric Auguste Bartholdi.",
            description: "Neoclassical sculpture on Liberty Island, symbolizing freedom and democracy.",
        },
    ),
    (
        "tokyo",
        Landmark {
            name: "Tokyo Tower",
            image_id: "1540959733332-eab4deabeeaf",
            fact: "Tokyo Tower was inspired by the Eiffel Tower but is painted orange and white for air safety regulations.",
            description: "Communications and observation tower, standing 333 meters tall in the heart of Tokyo.",
        },
    ),
    (
        "london",
        Landmark {
            name: "Big Ben",
            image_id: "1513635269975-59663e0ac1ad",
            fact: "Big Ben is actually the nickname for the Great Bell of the Great Clock of Westminster, not the tower itself.",
            description: "Great bell of the Great Clock of Westminster, located at the north end of the Houses of Parliament.",
        },
    ),
    (
        "dubai",
        Landmark {
            name: "Burj Khalifa",
            image_id: "1512453979798-5ea266f8880c",
            fact: "Burj Khalifa is the world's tallest building at 828 meters, with 163 floors and the world's highest outdoor observation deck.",
            description: "World's tallest building and structure, featuring stunning architecture and panoramic city views.",
        },
    ),
    (
        "sydney",
        Landmark {
            name: "Sydney Opera House",
            image_id: "1506973035872-a4ec16b8e8d9",
            fact: "The Sydney Opera House was designed by Danish architect Jørn Utzon and took 14 years to complete.",
            description: "Multi-venue performing arts centre, famous for its distinctive sail-like roof design.",
        },
    ),
];

static PLACES: LazyLock<HashMap<&'static str, PlaceInfoRecord>> = LazyLock::new(|| {
    LANDMARKS
        .iter()
        .map(|(key, lm)| {
            let record = PlaceInfoRecord {
                name: lm.name.to_string(),
                description: lm.description.to_string(),
                image_url: Some(format!("{IMAGE_BASE_URL}{}?w=800&h=600&fit=crop", lm.image_id)),
                fact: Some(lm.fact.to_string()),
            };
            (*key, record)
        })
        .collect()
});

const INDIAN_STATES: &[&str] = &[
    "andhra pradesh", "telangana", "karnataka", "tamil nadu", "kerala",
    "maharashtra", "gujarat", "rajasthan", "madhya pradesh", "uttar pradesh",
    "bihar", "west bengal", "odisha", "jharkhand", "chhattisgarh",
    "himachal pradesh", "uttarakhand", "punjab", "haryana", "delhi",
    "jammu and kashmir", "assam", "manipur", "meghalaya", "nagaland",
    "tripura", "arunachal pradesh", "mizoram", "sikkim", "goa",
];

const VILLAGE_INDICATORS: &[&str] =
    &["village", "gram", "palli", "pura", "nagar", "pur", "abad", "garh"];

const TELUGU_PATTERNS: &[&str] = &["palli", "gudem", "pet", "peta", "nagar", "colony"];

// `{}` is replaced by the place name.
const GENERIC_FACTS: &[&str] = &[
    "{} has a rich cultural heritage that spans generations, with traditions passed down through families.",
    "The local cuisine of {} features unique flavors and traditional cooking methods that reflect the region's agricultural bounty.",
    "{} is known for its warm hospitality and close-knit community where everyone knows their neighbors.",
    "The landscape around {} showcases the natural beauty of the region, with scenic views that change with the seasons.",
    "{} has a fascinating history that includes stories of resilience, growth, and community spirit.",
    "Local festivals and celebrations in {} bring the community together and showcase regional traditions.",
    "The people of {} are known for their hard work and dedication to preserving their cultural identity.",
    "{} offers a peaceful escape from city life, with its serene environment and traditional way of living.",
];

const VILLAGE_FACTS: &[&str] = &[
    "{} is a charming village that embodies the essence of rural India, with its traditional architecture and agricultural lifestyle.",
    "The village of {} is known for its traditional farming practices and sustainable living methods passed down through generations.",
    "{} showcases the beauty of Indian village life, with its community wells, temple gatherings, and traditional festivals.",
    "In {}, you'll find the heart of India's rural culture, where ancient traditions meet modern aspirations.",
    "The village of {} is a testament to India's agricultural heritage and the strength of its rural communities.",
];

pub const GENERIC_DESCRIPTIONS: &[&str] = &[
    "A vibrant community with rich cultural traditions and warm hospitality.",
    "A place where history meets modernity, creating a unique cultural tapestry.",
    "A location known for its distinctive character and local traditions.",
    "A community that celebrates its heritage while embracing the future.",
    "A place with its own unique charm and cultural significance.",
];

pub const VILLAGE_DESCRIPTIONS: &[&str] = &[
    "A traditional Indian village known for its agricultural heritage and close-knit community.",
    "A peaceful rural settlement where traditional farming and cultural practices thrive.",
    "A charming village that represents the authentic rural lifestyle of India.",
    "A community where ancient traditions and modern aspirations coexist harmoniously.",
    "A village that showcases the beauty and simplicity of rural Indian life.",
];

// Both themes draw from the same stock photos.
const STOCK_IMAGE_IDS: &[&str] = &[
    "1570168007204-dfb528c6958f",
    "1548013146-72479768bada",
    "1511739001486-6bfe10ce785f",
    "1540959733332-eab4deabeeaf",
    "1513635269975-59663e0ac1ad",
    "1512453979798-5ea266f8880c",
    "1506973035872-a4ec16b8e8d9",
    "1449824913935-59a10b8d2000",
];

/// Substring heuristic for "this is probably an Indian village or town".
///
/// False positives are expected: anything containing "pur" or "nagar" matches.
pub fn is_indian_village(name: &str) -> bool {
    let lower = name.to_lowercase();
    let contains_any = |needles: &[&str]| needles.iter().any(|n| lower.contains(n));

    contains_any(INDIAN_STATES) || contains_any(VILLAGE_INDICATORS) || contains_any(TELUGU_PATTERNS)
}

/// Landmark card for a famous city, or a generated one for anything else.
pub fn resolve_place_info<R: Rng + ?Sized>(city: &str, rng: &mut R) -> PlaceInfoRecord {
    let trimmed = city.trim();
    if let Some(record) = PLACES.get(trimmed.to_lowercase().as_str()) {
        return record.clone();
    }

    generate(trimmed, is_indian_village(trimmed), rng)
}

fn generate<R: Rng + ?Sized>(name: &str, village: bool, rng: &mut R) -> PlaceInfoRecord {
    let (facts, descriptions) = if village {
        (VILLAGE_FACTS, VILLAGE_DESCRIPTIONS)
    } else {
        (GENERIC_FACTS, GENERIC_DESCRIPTIONS)
    };

    let fact = facts.choose(rng).map(|t| t.replace("{}", name));
    let description = descriptions.choose(rng).copied().unwrap_or_default().to_string();
    let image_url = STOCK_IMAGE_IDS.choose(rng).map(|id| {
        format!("{IMAGE_BASE_URL}{id}?w=800&h=600&fit=crop&q={}", urlencoding::encode(name))
    });

    PlaceInfoRecord { name: name.to_string(), description, image_url, fact }
}
