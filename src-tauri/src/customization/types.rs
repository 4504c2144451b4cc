use serde::{Deserialize, Serialize};

/// Dog breeds with artwork available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Breed {
    Shiba,
    #[serde(rename = "Golden Retriever")]
    GoldenRetriever,
    Husky,
    Poodle,
}

impl Breed {
    pub const ALL: [Breed; 4] = [
        Breed::Shiba,
        Breed::GoldenRetriever,
        Breed::Husky,
        Breed::Poodle,
    ];
}

/// Wearable accessories. Several can be worn at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Accessory {
    #[serde(alias = "bandana")]
    Scarf,
    Glasses,
    Hat,
    BowTie,
}

impl Accessory {
    pub const ALL: [Accessory; 4] = [
        Accessory::Scarf,
        Accessory::Glasses,
        Accessory::Hat,
        Accessory::BowTie,
    ];
}

/// Scene drawn behind the dog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Background {
    ParkDay,
    CozyRoom,
    StarryNight,
    SunsetHills,
}

impl Background {
    pub const ALL: [Background; 4] = [
        Background::ParkDay,
        Background::CozyRoom,
        Background::StarryNight,
        Background::SunsetHills,
    ];
}

/// Everything the user can change about their dog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DogCustomization {
    pub name: String,
    pub breed: Breed,
    /// Accent color as `#rrggbb`
    pub color: String,
    pub accessories: Vec<Accessory>,
    pub background: Background,
}

impl DogCustomization {
    /// Used whenever nothing valid can be loaded.
    pub fn fallback() -> Self {
        Self {
            name: "MoodPup".to_string(),
            breed: Breed::Shiba,
            color: "#ec4899".to_string(),
            accessories: Vec::new(),
            background: Background::ParkDay,
        }
    }
}
