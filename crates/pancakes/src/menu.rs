use std::collections::HashMap;

use crate::pancake::Pancake;

/// Static menu of predefined pancakes, looked up by exact label.
#[derive(Debug, Clone)]
pub struct PancakeMenu {
    entries: HashMap<String, Pancake>,
}

impl PancakeMenu {
    /// Menu with the house recipes.
    pub fn new() -> Self {
        use crate::ingredient::Ingredient::*;

        Self::with_pancakes([
            Pancake::new([DarkChocolate]),
            Pancake::new([DarkChocolate, WhippedCream, Hazelnuts]),
            Pancake::new([DarkChocolate, WhippedCream]),
            Pancake::new([MilkChocolate, Hazelnuts]),
            Pancake::new([MilkChocolate]),
        ])
    }

    /// Menu with exactly the given pancakes. Later duplicates replace earlier ones.
    pub fn with_pancakes(pancakes: impl IntoIterator<Item = Pancake>) -> Self {
        let entries = pancakes
            .into_iter()
            .map(|p| (p.label().to_string(), p))
            .collect();
        Self { entries }
    }

    pub fn find_by_label(&self, label: &str) -> Option<Pancake> {
        self.entries.get(label).cloned()
    }

    /// Labels on the menu, sorted.
    pub fn labels(&self) -> Vec<&str> {
        let mut labels: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        labels.sort_unstable();
        labels
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for PancakeMenu {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingredient::Ingredient;

    #[test]
    fn house_menu_has_five_recipes() {
        let menu = PancakeMenu::new();
        assert_eq!(menu.len(), 5);
        assert!(
            menu.labels()
                .contains(&"Delicious pancake with dark chocolate, whipped cream, hazelnuts!")
        );
    }

    #[test]
    fn finds_pancake_by_exact_label() {
        let menu = PancakeMenu::new();
        let found = menu
            .find_by_label("Delicious pancake with milk chocolate, hazelnuts!")
            .unwrap();
        assert_eq!(
            found,
            Pancake::new([Ingredient::Hazelnuts, Ingredient::MilkChocolate])
        );
    }

    #[test]
    fn lookup_is_exact() {
        let menu = PancakeMenu::new();
        assert!(menu.find_by_label("delicious pancake with milk chocolate!").is_none());
        assert!(menu.find_by_label("").is_none());
    }

    #[test]
    fn custom_menu_only_contains_given_pancakes() {
        let menu = PancakeMenu::with_pancakes([Pancake::plain()]);
        assert_eq!(menu.labels(), vec![crate::PLAIN_PANCAKE_LABEL]);
    }
}
