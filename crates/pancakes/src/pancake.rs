use serde::Serialize;

use pancakelab_core::{DomainResult, ValueObject};

use crate::ingredient::Ingredient;

/// Label of a pancake without any ingredients.
pub const PLAIN_PANCAKE_LABEL: &str = "Just plain delicious pancake!";

/// An orderable pancake, identified by its ingredients.
///
/// Ingredients are sorted at construction, so equality, hashing, ordering
/// and the label never depend on the order they were supplied in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Pancake {
    ingredients: Vec<Ingredient>,
    label: String,
}

impl Pancake {
    /// Build a pancake from any ingredient list, including an empty one.
    pub fn new(ingredients: impl IntoIterator<Item = Ingredient>) -> Self {
        let mut ingredients: Vec<Ingredient> = ingredients.into_iter().collect();
        ingredients.sort_unstable();
        let label = Self::label_for(&ingredients);
        Self { ingredients, label }
    }

    /// A pancake with no toppings.
    pub fn plain() -> Self {
        Self::new([])
    }

    /// Build a pancake from ingredient display names (e.g. `"dark chocolate"`).
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> DomainResult<Self> {
        let ingredients = names
            .iter()
            .map(|name| name.as_ref().parse::<Ingredient>())
            .collect::<DomainResult<Vec<_>>>()?;
        Ok(Self::new(ingredients))
    }

    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_plain(&self) -> bool {
        self.ingredients.is_empty()
    }

    fn label_for(sorted: &[Ingredient]) -> String {
        if sorted.is_empty() {
            return PLAIN_PANCAKE_LABEL.to_string();
        }
        let names: Vec<&str> = sorted.iter().map(|i| i.name()).collect();
        format!("Delicious pancake with {}!", names.join(", "))
    }
}

impl ValueObject for Pancake {}

impl core::fmt::Display for Pancake {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pancakelab_core::DomainError;
    use proptest::prelude::*;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of(p: &Pancake) -> u64 {
        let mut h = DefaultHasher::new();
        p.hash(&mut h);
        h.finish()
    }

    #[test]
    fn plain_pancake_has_fixed_label() {
        let p = Pancake::new(Vec::new());
        assert!(p.is_plain());
        assert_eq!(p.label(), PLAIN_PANCAKE_LABEL);
        assert_eq!(p, Pancake::plain());
    }

    #[test]
    fn label_lists_ingredients_in_canonical_order() {
        let p = Pancake::new([Ingredient::Hazelnuts, Ingredient::MilkChocolate]);
        assert_eq!(p.label(), "Delicious pancake with milk chocolate, hazelnuts!");
        assert_eq!(p.to_string(), p.label());
    }

    #[test]
    fn single_ingredient_label() {
        let p = Pancake::new([Ingredient::DarkChocolate]);
        assert_eq!(p.label(), "Delicious pancake with dark chocolate!");
    }

    #[test]
    fn duplicate_ingredients_are_kept() {
        let double = Pancake::new([Ingredient::Mustard, Ingredient::Mustard]);
        let single = Pancake::new([Ingredient::Mustard]);
        assert_ne!(double, single);
        assert_eq!(double.label(), "Delicious pancake with mustard, mustard!");
    }

    #[test]
    fn from_names_parses_ingredients() {
        let p = Pancake::from_names(&["whipped cream", "dark chocolate"]).unwrap();
        assert_eq!(
            p,
            Pancake::new([Ingredient::DarkChocolate, Ingredient::WhippedCream])
        );
    }

    #[test]
    fn from_names_rejects_unknown_ingredient() {
        let err = Pancake::from_names(&["dark chocolate", "anchovies"]).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn serializes_ingredients_and_label() {
        let p = Pancake::new([Ingredient::MilkChocolate]);
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json["ingredients"], serde_json::json!(["milk_chocolate"]));
        assert_eq!(json["label"], "Delicious pancake with milk chocolate!");
    }

    fn ingredient_lists() -> impl Strategy<Value = (Vec<Ingredient>, Vec<Ingredient>)> {
        prop::collection::vec(prop::sample::select(Ingredient::ALL.to_vec()), 0..8)
            .prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle()))
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: input order never affects identity.
        #[test]
        fn identity_ignores_input_order((original, shuffled) in ingredient_lists()) {
            let a = Pancake::new(original);
            let b = Pancake::new(shuffled);

            prop_assert_eq!(&a, &b);
            prop_assert_eq!(hash_of(&a), hash_of(&b));
            prop_assert_eq!(a.label(), b.label());
        }
    }
}
