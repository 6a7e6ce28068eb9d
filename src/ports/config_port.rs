//! Configuration access port trait.

/// Sectioned key/value configuration.
///
/// A key that is present but empty reads as absent. Typed parsing and range
/// checks live in `domain::config_validation`.
pub trait ConfigPort {
    fn get_string(&self, section: &str, key: &str) -> Option<String>;
}
