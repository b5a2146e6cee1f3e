//! # Menu Data Crate
//!
//! Domain types and JSON boundary handling for the recommendation engine.
//!
//! ## Main Components
//!
//! - **types**: Core domain records (Profile, Dish)
//! - **loader**: Load/save profile and menu JSON, whole-batch validation
//! - **error**: Error types for the data boundary
//!
//! ## Example Usage
//!
//! ```ignore
//! use menu_data::{load_menu, load_profile};
//! use std::path::Path;
//!
//! let profile = load_profile(Path::new("profile.json"))?;
//! let menu = load_menu(Path::new("menu.json"))?;
//!
//! println!("{} dishes on the menu", menu.len());
//! ```

// Public modules
pub mod error;
pub mod loader;
pub mod types;

// Re-export commonly used items for convenience
pub use error::{MenuDataError, Result};
pub use loader::{load_menu, load_profile, parse_menu_json, save_profile, validate_menu};
pub use types::{Dish, Profile};
