use core::str::FromStr;
use serde::{Deserialize, Serialize};

use pancakelab_core::DomainError;

/// Pancake ingredient.
///
/// Declaration order is the canonical order used when normalizing a
/// pancake's ingredient list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ingredient {
    DarkChocolate,
    MilkChocolate,
    Mustard,
    WhippedCream,
    Hazelnuts,
}

impl Ingredient {
    pub const ALL: [Ingredient; 5] = [
        Ingredient::DarkChocolate,
        Ingredient::MilkChocolate,
        Ingredient::Mustard,
        Ingredient::WhippedCream,
        Ingredient::Hazelnuts,
    ];

    /// Human-readable name, as printed in pancake labels.
    pub fn name(self) -> &'static str {
        match self {
            Ingredient::DarkChocolate => "dark chocolate",
            Ingredient::MilkChocolate => "milk chocolate",
            Ingredient::Mustard => "mustard",
            Ingredient::WhippedCream => "whipped cream",
            Ingredient::Hazelnuts => "hazelnuts",
        }
    }
}

impl core::fmt::Display for Ingredient {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Ingredient {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Ingredient::ALL
            .into_iter()
            .find(|i| i.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| DomainError::validation(format!("unknown ingredient '{wanted}'")))
    }
}
