//! Dog appearance: validation of stored values and randomized first-run looks.

mod types;

pub use types::*;

use rand::seq::IndexedRandom;
use rand::Rng;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, info};

/// Preference key the customization is stored under.
pub const STORE_KEY: &str = "dogCustomization";

/// Names offered to first-time users.
const NAMES: [&str; 8] = [
    "Buddy", "Lucy", "Max", "Daisy", "Charlie", "Sadie", "Cooper", "Luna",
];

/// At most this many accessories are picked at random.
const MAX_RANDOM_ACCESSORIES: usize = 2;

/// Build a customization from a stored JSON value.
///
/// Each field is checked on its own; an invalid field is replaced by the
/// fallback's value while valid fields are kept. Unknown accessories are
/// dropped.
pub fn sanitize(stored: &Value) -> DogCustomization {
    let fallback = DogCustomization::fallback();

    let name = stored
        .get("name")
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or(fallback.name);

    let breed = parse_field(stored, "breed").unwrap_or(fallback.breed);

    let color = stored
        .get("color")
        .and_then(Value::as_str)
        .filter(|c| c.starts_with('#'))
        .map(str::to_string)
        .unwrap_or(fallback.color);

    let accessories = match stored.get("accessories").and_then(Value::as_array) {
        Some(items) => {
            let mut accessories: Vec<Accessory> = Vec::new();
            for item in items {
                match serde_json::from_value::<Accessory>(item.clone()) {
                    Ok(acc) if !accessories.contains(&acc) => accessories.push(acc),
                    Ok(_) => {}
                    Err(_) => debug!("Dropping unknown accessory {}", item),
                }
            }
            accessories
        }
        None => fallback.accessories,
    };

    let background = parse_field(stored, "background").unwrap_or(fallback.background);

    DogCustomization {
        name,
        breed,
        color,
        accessories,
        background,
    }
}

fn parse_field<T: DeserializeOwned>(stored: &Value, key: &str) -> Option<T> {
    stored
        .get(key)
        .and_then(|v| serde_json::from_value(v.clone()).ok())
}

/// A random look for a first-time user.
pub fn randomize<R: Rng>(rng: &mut R) -> DogCustomization {
    let fallback = DogCustomization::fallback();

    let name = NAMES
        .choose(rng)
        .map(|n| n.to_string())
        .unwrap_or(fallback.name);
    let breed = *Breed::ALL.choose(rng).unwrap_or(&fallback.breed);
    let color = format!("#{:06x}", rng.random_range(0..=0xff_ffffu32));
    let count = rng.random_range(0..=MAX_RANDOM_ACCESSORIES);
    let accessories = Accessory::ALL.choose_multiple(rng, count).copied().collect();
    let background = *Background::ALL.choose(rng).unwrap_or(&fallback.background);

    DogCustomization {
        name,
        breed,
        color,
        accessories,
        background,
    }
}

/// Decide what to show given whatever the store returned.
///
/// Returns the customization and whether it should be written back (true for
/// a freshly randomized first-run look).
pub fn resolve<R: Rng>(stored: Option<&Value>, rng: &mut R) -> (DogCustomization, bool) {
    match stored {
        Some(value) => {
            info!("Loaded stored dog customization");
            (sanitize(value), false)
        }
        None => {
            let random = randomize(rng);
            info!(
                "No stored customization, randomized a {:?} named {}",
                random.breed, random.name
            );
            (random, true)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_valid_value_round_trips() {
        let custom = DogCustomization {
            name: "Biscuit".to_string(),
            breed: Breed::GoldenRetriever,
            color: "#112233".to_string(),
            accessories: vec![Accessory::Hat, Accessory::BowTie],
            background: Background::StarryNight,
        };
        let value = serde_json::to_value(&custom).unwrap();
        assert_eq!(value["breed"], "Golden Retriever");
        assert_eq!(value["accessories"], json!(["hat", "bow_tie"]));
        assert_eq!(sanitize(&value), custom);
    }

    #[test]
    fn test_invalid_fields_fall_back_individually() {
        let value = json!({
            "name": 42,
            "breed": "Corgi",
            "color": "red",
            "accessories": "hat",
            "background": "moon_base"
        });
        assert_eq!(sanitize(&value), DogCustomization::fallback());

        let partly_valid = json!({
            "name": "Rex",
            "breed": "Husky",
            "color": "blue"
        });
        let custom = sanitize(&partly_valid);
        assert_eq!(custom.name, "Rex");
        assert_eq!(custom.breed, Breed::Husky);
        assert_eq!(custom.color, "#ec4899");
        assert!(custom.accessories.is_empty());
        assert_eq!(custom.background, Background::ParkDay);
    }

    #[test]
    fn test_unknown_and_duplicate_accessories_dropped() {
        let value = json!({ "accessories": ["hat", "jetpack", "hat", "bandana", 7] });
        let custom = sanitize(&value);
        assert_eq!(custom.accessories, vec![Accessory::Hat, Accessory::Scarf]);
    }

    #[test]
    fn test_non_object_value_is_fallback() {
        assert_eq!(sanitize(&json!("garbage")), DogCustomization::fallback());
        assert_eq!(sanitize(&Value::Null), DogCustomization::fallback());
    }

    #[test]
    fn test_randomized_looks_are_valid() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let custom = randomize(&mut rng);
            assert!(NAMES.contains(&custom.name.as_str()));
            assert!(custom.color.starts_with('#'));
            assert_eq!(custom.color.len(), 7);
            assert!(custom.accessories.len() <= MAX_RANDOM_ACCESSORIES);
            let unique: HashSet<_> = custom.accessories.iter().collect();
            assert_eq!(unique.len(), custom.accessories.len());

            // A randomized look survives its own validation unchanged
            let value = serde_json::to_value(&custom).unwrap();
            assert_eq!(sanitize(&value), custom);
        }
    }

    #[test]
    fn test_resolve_policy() {
        let mut rng = StdRng::seed_from_u64(1);

        let (_, needs_save) = resolve(None, &mut rng);
        assert!(needs_save);

        let stored = json!({ "name": "Pip", "breed": "Poodle" });
        let (custom, needs_save) = resolve(Some(&stored), &mut rng);
        assert!(!needs_save);
        assert_eq!(custom.name, "Pip");
        assert_eq!(custom.breed, Breed::Poodle);
    }
}
