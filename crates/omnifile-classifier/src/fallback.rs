//! Filename-only classification

use crate::KeywordClassifier;
use omnifile_domain::{ClassificationResult, ClassificationSource};
use omnifile_naming::{clean_stem, NameValidator};
use tracing::debug;

/// Classify a document from its filename alone
///
/// The category comes from the keyword classifier applied to the full
/// filename; the name is the cleaned stem, improved for that category.
pub fn fallback_analysis(filename: &str, validator: &NameValidator) -> ClassificationResult {
    let keywords = KeywordClassifier::new();
    let category = keywords.classify(filename);
    let name = validator.improve_by_category(&clean_stem(filename), category, filename);

    debug!(
        "Fallback analysis for {}: {} (keyword {:?}) / {}",
        filename,
        category,
        keywords.matched_keyword(filename),
        name
    );

    ClassificationResult::new(category, name, ClassificationSource::Fallback)
}
