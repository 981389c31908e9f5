//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use omnifile_domain::{Category, ClassificationResult};
use omnifile_organizer::{BatchReport, OrganizerEvent, Placement};
use std::path::Path;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Active output format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Progress line for a batch event, if this format shows one.
    pub fn event(&self, event: &OrganizerEvent) -> Option<String> {
        match (self.format, event) {
            (OutputFormat::Table, OrganizerEvent::BatchStarted { total }) => {
                Some(self.info(&format!("Found {} file(s) to organize", total)))
            }
            (OutputFormat::Table, OrganizerEvent::FileStarted { index, total, path }) => {
                Some(format!("[{}/{}] {}", index, total, file_name(path)))
            }
            (OutputFormat::Table, OrganizerEvent::FileOrganized { placement, .. }) => {
                Some(format!("      {}", self.placement_line(placement)))
            }
            (OutputFormat::Table, OrganizerEvent::FileFailed { stage, error, .. }) => {
                Some(format!("      {}", self.error(&format!("{} failed: {}", stage, error))))
            }
            (OutputFormat::Quiet, OrganizerEvent::FileOrganized { placement, .. }) => {
                Some(placement.destination.display().to_string())
            }
            _ => None,
        }
    }

    fn placement_line(&self, placement: &Placement) -> String {
        let marker = if placement.dry_run { "would copy to" } else { "→" };
        let line = format!(
            "{} {} ({})",
            marker,
            relative_destination(placement),
            placement.classification.source().as_str()
        );
        self.success(&line)
    }

    /// Format the end-of-batch report.
    pub fn format_report(&self, report: &BatchReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => self.format_report_json(report),
            OutputFormat::Table => Ok(self.format_report_table(report)),
            OutputFormat::Quiet => Ok(String::new()),
        }
    }

    fn format_report_json(&self, report: &BatchReport) -> Result<String> {
        let categories: serde_json::Map<String, serde_json::Value> = report
            .category_counts()
            .into_iter()
            .map(|(category, count)| (category.to_string(), count.into()))
            .collect();

        let failures: Vec<serde_json::Value> = report
            .failures
            .iter()
            .map(|f| {
                serde_json::json!({
                    "path": f.path.display().to_string(),
                    "stage": f.stage.as_str(),
                    "error": f.error,
                })
            })
            .collect();

        let value = serde_json::json!({
            "total": report.total,
            "organized": report.organized(),
            "failed": report.failed(),
            "remote": report.remote,
            "fallback": report.fallback,
            "dry_run": report.dry_run,
            "elapsed_secs": report.elapsed.as_secs_f64(),
            "categories": categories,
            "failures": failures,
        });

        Ok(serde_json::to_string_pretty(&value)?)
    }

    fn format_report_table(&self, report: &BatchReport) -> String {
        let mut out = Vec::new();

        let headline = format!(
            "Organized {} of {} file(s) in {:.1}s ({} by Gemini, {} by keywords)",
            report.organized(),
            report.total,
            report.elapsed.as_secs_f64(),
            report.remote,
            report.fallback
        );
        out.push(self.success(&headline));

        if report.dry_run {
            out.push(self.warning("Dry run: nothing was copied"));
        }

        let counts = report.category_counts();
        if !counts.is_empty() {
            let mut builder = Builder::default();
            builder.push_record(["Category", "Files"]);
            for (category, count) in counts {
                builder.push_record([category.to_string(), count.to_string()]);
            }
            out.push(self.table(builder));
        }

        if !report.failures.is_empty() {
            out.push(self.error(&format!("{} file(s) failed:", report.failed())));
            for failure in &report.failures {
                out.push(format!(
                    "  {} [{}] {}",
                    failure.path.display(),
                    failure.stage,
                    failure.error
                ));
            }
        }

        out.join("\n")
    }

    /// Format the outcome of classifying a single file.
    pub fn format_classification(
        &self,
        file: &Path,
        result: &ClassificationResult,
        destination: &str,
        excerpt_chars: usize,
    ) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let value = serde_json::json!({
                    "file": file.display().to_string(),
                    "category": result.category().as_str(),
                    "name": result.name(),
                    "source": result.source().as_str(),
                    "destination": destination,
                    "excerpt_chars": excerpt_chars,
                });
                Ok(serde_json::to_string_pretty(&value)?)
            }
            OutputFormat::Quiet => Ok(destination.to_string()),
            OutputFormat::Table => {
                let file = file.display().to_string();
                let extracted = format!("{} chars", excerpt_chars);

                let mut builder = Builder::default();
                builder.push_record(["File", file.as_str()]);
                builder.push_record(["Category", result.category().as_str()]);
                builder.push_record(["Name", result.name()]);
                builder.push_record(["Source", result.source().as_str()]);
                builder.push_record(["Destination", destination]);
                builder.push_record(["Text extracted", extracted.as_str()]);

                let mut table = builder.build();
                table.with(Style::rounded());
                Ok(table.to_string())
            }
        }
    }

    /// Format the category list.
    pub fn format_categories(&self) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let value: Vec<serde_json::Value> = Category::ALL
                    .iter()
                    .map(|c| {
                        serde_json::json!({
                            "category": c.as_str(),
                            "name_prefix": c.name_prefix(),
                        })
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&value)?)
            }
            OutputFormat::Quiet => Ok(Category::ALL
                .iter()
                .map(|c| c.as_str())
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Category", "Name prefix"]);
                for category in Category::ALL {
                    builder.push_record([category.as_str(), category.name_prefix()]);
                }
                Ok(self.table(builder))
            }
        }
    }

    fn table(&self, builder: Builder) -> String {
        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// `<category>/<file>` part of a destination
fn relative_destination(placement: &Placement) -> String {
    format!(
        "{}/{}",
        placement.classification.category(),
        file_name(&placement.destination)
    )
}
