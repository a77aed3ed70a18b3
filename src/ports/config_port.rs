//! Settings lookup port.

/// Read access to `[section] key` settings. Absent keys are `None`.
pub trait ConfigPort {
    fn get_string(&self, section: &str, key: &str) -> Option<String>;

    /// Numeric value, or `default` when the key is absent or not a number.
    fn get_double(&self, section: &str, key: &str, default: f64) -> f64;

    /// Every `(section, key)` pair present, sorted.
    fn entries(&self) -> Vec<(String, String)>;

    /// Trimmed value; blank entries count as absent.
    fn get_trimmed(&self, section: &str, key: &str) -> Option<String> {
        self.get_string(section, key)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }
}
