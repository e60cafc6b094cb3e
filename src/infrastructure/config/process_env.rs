use crate::domain::ports::EnvSource;

/// [`EnvSource`] backed by the process environment.
///
/// Variables holding non-UTF-8 data are treated as unset.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}
