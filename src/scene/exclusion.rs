use crate::options::ExclusionOptions;

/// Decides which objects are left out of framing.
///
/// An object is excluded when it belongs to the light-modifier collection,
/// carries the exclude-from-framing flag, or its name contains any of the
/// patterns (case-insensitive).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionRules {
    patterns: Vec<String>,
    light_modifiers_collection: Option<String>,
}

impl ExclusionRules {
    /// Rules from a comma-separated pattern list. Blank entries are
    /// ignored.
    pub fn new(pattern: &str, light_modifiers_collection: Option<String>) -> Self {
        let patterns = pattern
            .split(',')
            .map(|p| p.trim().to_lowercase())
            .filter(|p| !p.is_empty())
            .collect();
        Self {
            patterns,
            light_modifiers_collection,
        }
    }

    /// Rules that exclude nothing.
    pub fn none() -> Self {
        Self::default()
    }

    /// Name patterns, lowercased.
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// Whether `name` matches any pattern.
    pub fn matches_name(&self, name: &str) -> bool {
        if self.patterns.is_empty() {
            return false;
        }
        let name = name.to_lowercase();
        self.patterns.iter().any(|p| name.contains(p.as_str()))
    }

    /// Whether an object with this name, collection membership and flag is
    /// excluded.
    pub fn excludes(&self, name: &str, collections: &[String], flagged: bool) -> bool {
        let in_light_modifiers = self
            .light_modifiers_collection
            .as_ref()
            .is_some_and(|lm| collections.iter().any(|c| c == lm));
        in_light_modifiers || flagged || self.matches_name(name)
    }
}

impl From<&ExclusionOptions> for ExclusionRules {
    fn from(options: &ExclusionOptions) -> Self {
        Self::new(&options.pattern, options.light_modifiers_collection.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_patterns_match_case_insensitively() {
        let rules = ExclusionRules::from(&ExclusionOptions::default());
        assert_eq!(rules.patterns().len(), 5);
        assert!(rules.matches_name("Key_lm_softbox"));
        assert!(rules.matches_name("BOUNCE card"));
        assert!(rules.matches_name("scrim.001"));
        assert!(!rules.matches_name("Bottle"));
    }

    #[test]
    fn blank_entries_are_ignored() {
        let rules = ExclusionRules::new(" , foo,, ", None);
        assert_eq!(rules.patterns(), ["foo".to_owned()]);
        assert!(!ExclusionRules::new("", None).matches_name("anything"));
    }

    #[test]
    fn flag_and_light_modifier_collection_exclude() {
        let rules = ExclusionRules::new("", Some("LightMods".to_owned()));
        let product = vec!["Product".to_owned()];
        let modifier = vec!["Product".to_owned(), "LightMods".to_owned()];
        assert!(!rules.excludes("Card", &product, false));
        assert!(rules.excludes("Card", &modifier, false));
        assert!(rules.excludes("Card", &product, true));
        assert!(!ExclusionRules::none().excludes("Flag", &product, false));
    }
}
