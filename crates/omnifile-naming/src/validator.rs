//! Proposed-name validation and improvement

use crate::patterns::{embedded_date, is_date_only};
use crate::NamingConfig;
use omnifile_domain::Category;
use std::path::Path;

/// Outcome of validating a proposed name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameVerdict {
    /// Rejection reasons (empty when accepted)
    pub reasons: Vec<RejectionReason>,
}

impl NameVerdict {
    /// Whether the name passed every rule
    pub fn is_accepted(&self) -> bool {
        self.reasons.is_empty()
    }
}

/// Reasons for rejecting a proposed name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectionReason {
    /// Name contains a generic word
    GenericWord(String),

    /// Name is nothing but a date
    DateOnly,

    /// Name has too few non-whitespace characters
    TooShort {
        /// Non-whitespace characters found
        actual: usize,
        /// Minimum required
        required: usize,
    },
}

/// Validates proposed names and builds replacements for rejected ones
#[derive(Debug, Clone)]
pub struct NameValidator {
    config: NamingConfig,
}

impl NameValidator {
    /// Create a validator with the given configuration
    pub fn new(config: NamingConfig) -> Self {
        Self { config }
    }

    /// Create a validator with default configuration
    pub fn default_config() -> Self {
        Self::new(NamingConfig::default())
    }

    /// Active configuration
    pub fn config(&self) -> &NamingConfig {
        &self.config
    }

    /// Check a proposed name against the configured rules
    pub fn validate(&self, proposed: &str) -> NameVerdict {
        let normalized = proposed.trim().to_lowercase();
        let mut reasons = Vec::new();

        // 1. Generic words, matched anywhere in the name
        if let Some(word) = self
            .config
            .generic_words
            .iter()
            .find(|word| normalized.contains(word.as_str()))
        {
            reasons.push(RejectionReason::GenericWord(word.clone()));
        }

        // 2. Bare dates
        if is_date_only(&normalized) {
            reasons.push(RejectionReason::DateOnly);
        }

        // 3. Length
        let actual = normalized.chars().filter(|c| !c.is_whitespace()).count();
        if actual < self.config.min_name_chars {
            reasons.push(RejectionReason::TooShort {
                actual,
                required: self.config.min_name_chars,
            });
        }

        NameVerdict { reasons }
    }

    /// Return `proposed` when it passes validation, otherwise a replacement
    /// derived from `original_filename`
    ///
    /// The replacement is `"Documento - <cleaned stem>"`, or
    /// `"Documento - <original filename>"` when the cleaned stem is too short.
    pub fn validate_or_replace(&self, proposed: &str, original_filename: &str) -> String {
        if self.validate(proposed).is_accepted() {
            return proposed.to_string();
        }

        let cleaned = clean_stem(original_filename);
        if cleaned.chars().count() > self.config.min_clean_stem_chars {
            format!("Documento - {}", cleaned)
        } else {
            format!("Documento - {}", original_filename)
        }
    }

    /// Improve a name produced by the keyword fallback
    ///
    /// Placeholder-like names (too short, a placeholder word, or coming from a
    /// filename whose stem is a bare date) are rebuilt as
    /// `"<category prefix> - <date or stem>"`. Anything else goes through
    /// [`NameValidator::validate_or_replace`].
    pub fn improve_by_category(
        &self,
        name: &str,
        category: Category,
        original_filename: &str,
    ) -> String {
        let trimmed = name.trim();
        let stem = file_stem(original_filename);

        let is_placeholder = trimmed.chars().count() < self.config.min_fallback_name_chars
            || self
                .config
                .placeholder_names
                .iter()
                .any(|p| p.eq_ignore_ascii_case(trimmed))
            || is_date_only(stem);

        if !is_placeholder {
            return self.validate_or_replace(name, original_filename);
        }

        let prefix = category.name_prefix();
        match embedded_date(original_filename) {
            Some(date) => format!("{} - {}", prefix, date),
            None => format!("{} - {}", prefix, stem),
        }
    }
}

impl Default for NameValidator {
    fn default() -> Self {
        Self::default_config()
    }
}

/// File name without its final extension (`"ata.final.pdf"` → `"ata.final"`)
pub fn file_stem(filename: &str) -> &str {
    Path::new(filename)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(filename)
}

/// Stem with `_` and `-` turned into spaces
pub fn clean_stem(filename: &str) -> String {
    file_stem(filename).replace(['_', '-'], " ")
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::is_date_only;
    use proptest::prelude::*;

    proptest! {
        /// Property: Output never has fewer than 3 non-whitespace characters,
        /// is never a bare generic word, and is never a bare date
        #[test]
        fn test_output_constraints(
            proposed in ".{0,40}",
            stem in "[a-zA-Z0-9_ -]{0,20}",
            ext in prop::sample::select(vec![".pdf", ".txt", ".docx", ""]),
        ) {
            let validator = NameValidator::default_config();
            let filename = format!("{}{}", stem, ext);
            let out = validator.validate_or_replace(&proposed, &filename);
            let normalized = out.trim().to_lowercase();

            prop_assert!(normalized.chars().filter(|c| !c.is_whitespace()).count() >= 3);
            prop_assert!(!validator.config().generic_words.contains(&normalized));
            prop_assert!(!is_date_only(&normalized));
        }

        /// Property: the category improvement keeps the same guarantees,
        /// including for filenames with empty, dot-only or date stems
        #[test]
        fn test_improved_output_constraints(
            stem in prop_oneof![
                "[a-zA-Z0-9_ .-]{0,20}",
                Just(String::new()),
                Just("_".to_string()),
                Just(".".to_string()),
                Just("2024-01-15".to_string()),
                Just("15-01-2024".to_string()),
            ],
            ext in prop::sample::select(vec![".pdf", ".txt", ".docx", ""]),
            category in prop::sample::select(Category::ALL.to_vec()),
        ) {
            let validator = NameValidator::default_config();
            let filename = format!("{}{}", stem, ext);
            let out = validator.improve_by_category(&clean_stem(&filename), category, &filename);
            let normalized = out.trim().to_lowercase();

            prop_assert!(normalized.chars().filter(|c| !c.is_whitespace()).count() >= 3);
            prop_assert!(!validator.config().generic_words.contains(&normalized));
            prop_assert!(!is_date_only(&normalized));
        }
    }
}
