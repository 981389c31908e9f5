//! Batch summary

use crate::Stage;
use omnifile_domain::{Category, ClassificationSource};
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

/// A file that could not be organized
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedFile {
    /// File that failed
    pub path: PathBuf,
    /// Stage that failed
    pub stage: Stage,
    /// Error chain, outermost first
    pub error: String,
}

/// Counters collected over one batch
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    /// Files discovered
    pub total: usize,

    /// Files organized per category
    pub by_category: HashMap<Category, usize>,

    /// Files classified by the LLM
    pub remote: usize,

    /// Files classified by the keyword fallback
    pub fallback: usize,

    /// Files that could not be organized
    pub failures: Vec<FailedFile>,

    /// Wall-clock duration of the batch
    pub elapsed: Duration,

    /// Whether copies were skipped
    pub dry_run: bool,
}

impl BatchReport {
    /// Create an empty report for `total` files
    pub fn new(total: usize, dry_run: bool) -> Self {
        Self {
            total,
            dry_run,
            ..Self::default()
        }
    }

    /// Record an organized file
    pub fn record_organized(&mut self, category: Category, source: ClassificationSource) {
        *self.by_category.entry(category).or_insert(0) += 1;
        match source {
            ClassificationSource::Remote => self.remote += 1,
            ClassificationSource::Fallback => self.fallback += 1,
        }
    }

    /// Record a failed file
    pub fn record_failure(&mut self, failure: FailedFile) {
        self.failures.push(failure);
    }

    /// Files organized across all categories
    pub fn organized(&self) -> usize {
        self.by_category.values().sum()
    }

    /// Files that failed
    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    /// Categories with at least one file, in canonical order
    pub fn category_counts(&self) -> Vec<(Category, usize)> {
        Category::ALL
            .into_iter()
            .filter_map(|c| self.by_category.get(&c).map(|n| (c, *n)))
            .collect()
    }

    /// Generate a summary report
    pub fn summary(&self) -> String {
        let mut lines = vec![
            "Organization Summary".to_string(),
            "====================".to_string(),
            format!("Files found: {}", self.total),
            format!("Organized: {}", self.organized()),
            format!("Failed: {}", self.failed()),
            format!(
                "Classified by LLM: {}, by keywords: {}",
                self.remote, self.fallback
            ),
            format!("Elapsed: {:.1}s", self.elapsed.as_secs_f64()),
        ];

        if self.dry_run {
            lines.push("Dry run: no files were copied".to_string());
        }

        let counts = self.category_counts();
        if !counts.is_empty() {
            lines.push(String::new());
            lines.push("Files per category:".to_string());
            for (category, count) in counts {
                lines.push(format!("  {}: {}", category, count));
            }
        }

        if !self.failures.is_empty() {
            lines.push(String::new());
            lines.push("Failures:".to_string());
            for failure in &self.failures {
                lines.push(format!(
                    "  {} ({}): {}",
                    failure.path.display(),
                    failure.stage,
                    failure.error
                ));
            }
        }

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_creation() {
        let report = BatchReport::new(5, false);
        assert_eq!(report.total, 5);
        assert_eq!(report.organized(), 0);
        assert_eq!(report.failed(), 0);
    }

    #[test]
    fn test_record_organized() {
        let mut report = BatchReport::new(3, false);
        report.record_organized(Category::ContratosEAcordos, ClassificationSource::Remote);
        report.record_organized(Category::ContratosEAcordos, ClassificationSource::Fallback);
        report.record_organized(Category::OutrosDocumentos, ClassificationSource::Fallback);

        assert_eq!(report.organized(), 3);
        assert_eq!(report.remote, 1);
        assert_eq!(report.fallback, 2);
        assert_eq!(
            report.category_counts(),
            vec![
                (Category::ContratosEAcordos, 2),
                (Category::OutrosDocumentos, 1)
            ]
        );
    }

    #[test]
    fn test_summary() {
        let mut report = BatchReport::new(2, true);
        report.record_organized(Category::LeisENormativas, ClassificationSource::Remote);
        report.record_failure(FailedFile {
            path: PathBuf::from("/in/x.pdf"),
            stage: Stage::Copy,
            error: "permission denied".to_string(),
        });
        report.elapsed = Duration::from_millis(1500);

        let summary = report.summary();
        assert!(summary.contains("Files found: 2"));
        assert!(summary.contains("Organized: 1"));
        assert!(summary.contains("Failed: 1"));
        assert!(summary.contains("Leis_e_Normativas: 1"));
        assert!(summary.contains("/in/x.pdf (copy): permission denied"));
        assert!(summary.contains("Elapsed: 1.5s"));
        assert!(summary.contains("Dry run"));
    }
}
