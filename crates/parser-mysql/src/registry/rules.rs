/// Rules for detecting temporal text columns by name. Best-effort pattern
/// matching on identifier text, not principled metadata; kept as data so
/// deployments with different naming conventions can adjust them.
#[derive(Debug, Clone)]
pub struct DerivedFieldRules {
    suffixes: Vec<String>,
    substrings: Vec<String>,
}

impl Default for DerivedFieldRules {
    fn default() -> Self {
        Self {
            suffixes: vec!["_at".to_string()],
            substrings: vec!["date".to_string()],
        }
    }
}

impl DerivedFieldRules {
    pub fn new(
        suffixes: impl IntoIterator<Item = String>,
        substrings: impl IntoIterator<Item = String>,
    ) -> Self {
        Self {
            suffixes: suffixes.into_iter().collect(),
            substrings: substrings.into_iter().collect(),
        }
    }

    /// True if the database column name matches any of the temporal markers.
    pub fn matches(&self, column_name: &str) -> bool {
        self.suffixes.iter().any(|suffix| column_name.ends_with(suffix.as_str()))
            || self
                .substrings
                .iter()
                .any(|substring| column_name.contains(substring.as_str()))
    }
}
