//! Loading and validation of profile and menu JSON records.
//!
//! Two external collaborators hand this system JSON:
//! - the profile store keeps the diner's `Profile` as an opaque record;
//! - the menu parser turns raw text or a photo into structured dish records.
//!
//! Both are consumed here as flat files. The parser's output comes in two
//! shapes in the wild — a bare array of dishes, or a `{"dishes": [...]}`
//! envelope — and both are accepted.

use crate::error::{MenuDataError, Result};
use crate::types::{Dish, Profile};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Menu file shapes accepted by [`load_menu`].
#[derive(Deserialize)]
#[serde(untagged)]
enum MenuFile {
    Bare(Vec<Dish>),
    Enveloped { dishes: Vec<Dish> },
}

/// Load a preference profile from a JSON file.
///
/// Missing collections are not an error; they normalize to empty lists via
/// the serde defaults on [`Profile`].
pub fn load_profile(path: &Path) -> Result<Profile> {
    let data = fs::read_to_string(path)?;
    let profile = serde_json::from_str(&data)?;
    Ok(profile)
}

/// Persist a preference profile as pretty-printed JSON.
pub fn save_profile(path: &Path, profile: &Profile) -> Result<()> {
    let data = serde_json::to_string_pretty(profile)?;
    fs::write(path, data)?;
    Ok(())
}

/// Load and validate a parsed menu from a JSON file.
///
/// A record missing any required field (name, ingredients, category,
/// calories, allergens, tags) rejects the whole batch with a descriptive
/// error, as does a dish that fails [`validate_menu`].
pub fn load_menu(path: &Path) -> Result<Vec<Dish>> {
    let data = fs::read_to_string(path)?;
    let dishes = parse_menu_json(&data)?;
    Ok(dishes)
}

/// Parse a menu from a JSON string. Accepts a bare dish array or the
/// parser collaborator's `{"dishes": [...]}` envelope.
pub fn parse_menu_json(data: &str) -> Result<Vec<Dish>> {
    let file: MenuFile = serde_json::from_str(data)?;
    let dishes = match file {
        MenuFile::Bare(dishes) => dishes,
        MenuFile::Enveloped { dishes } => dishes,
    };
    validate_menu(&dishes)?;
    Ok(dishes)
}

/// Validate an already-deserialized menu batch.
///
/// Serde enforces field presence; this catches values that deserialize but
/// are unusable downstream. The first bad dish fails the batch.
pub fn validate_menu(dishes: &[Dish]) -> Result<()> {
    for (index, dish) in dishes.iter().enumerate() {
        if dish.name.trim().is_empty() {
            return Err(MenuDataError::InvalidDish {
                index,
                name: dish.name.clone(),
                reason: "dish name is blank".to_string(),
            });
        }
        if dish.category.trim().is_empty() {
            return Err(MenuDataError::InvalidDish {
                index,
                name: dish.name.clone(),
                reason: "dish category is blank".to_string(),
            });
        }
    }
    Ok(())
}
