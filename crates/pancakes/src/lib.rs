//! Pancakes domain module.
//!
//! Ingredients, the pancake value object that orders are made of, and the
//! static menu of predefined recipes.

pub mod ingredient;
pub mod menu;
pub mod pancake;

pub use ingredient::Ingredient;
pub use menu::PancakeMenu;
pub use pancake::{PLAIN_PANCAKE_LABEL, Pancake};
