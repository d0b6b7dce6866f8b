//! Settings for the demo binary, read from the environment.

/// Demo settings.
///
/// - `PANCAKELAB_BUILDING` / `PANCAKELAB_ROOM`: delivery address (default 1/1).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub building: i64,
    pub room: i64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            building: 1,
            room: 1,
        }
    }
}

impl ServiceConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Unparseable values fall back to the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            building: number_or(&lookup, "PANCAKELAB_BUILDING", defaults.building),
            room: number_or(&lookup, "PANCAKELAB_ROOM", defaults.room),
        }
    }
}

fn number_or(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: i64) -> i64 {
    match lookup(key) {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(key, value = %raw, default, "invalid number; using default");
            default
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        assert_eq!(ServiceConfig::from_lookup(|_| None), ServiceConfig::default());
    }

    #[test]
    fn reads_address() {
        let config = ServiceConfig::from_lookup(lookup_from(&[
            ("PANCAKELAB_BUILDING", "10"),
            ("PANCAKELAB_ROOM", " 20 "),
        ]));
        assert_eq!(config.building, 10);
        assert_eq!(config.room, 20);
    }

    #[test]
    fn invalid_numbers_fall_back() {
        let config = ServiceConfig::from_lookup(lookup_from(&[("PANCAKELAB_ROOM", "twelve")]));
        assert_eq!(config.room, 1);
    }
}
