//! Read-only access to named configuration variables.

use std::collections::HashMap;

/// Source of named string variables, usually the process environment.
///
/// The config loaders only ever read through this trait, which keeps them free
/// of process-global state and lets tests supply a plain map.
pub trait EnvSource: Send + Sync {
    /// Returns the value of `key`, or `None` when the variable is unset.
    ///
    /// A variable set to the empty string is present and returns `Some("")`.
    fn get(&self, key: &str) -> Option<String>;
}

impl EnvSource for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}

impl<T: EnvSource + ?Sized> EnvSource for &T {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_source_distinguishes_empty_from_unset() {
        let mut vars = HashMap::new();
        vars.insert("TOAE_REDIS_PASSWORD".to_string(), String::new());

        assert_eq!(EnvSource::get(&vars, "TOAE_REDIS_PASSWORD"), Some(String::new()));
        assert_eq!(EnvSource::get(&vars, "TOAE_REDIS_HOST"), None);
    }
}
