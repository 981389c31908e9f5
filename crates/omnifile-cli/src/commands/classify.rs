//! Classify command implementation.

use super::build_classifier;
use crate::cli::ClassifyArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use omnifile_content::{is_supported, ContentExtractor};
use omnifile_naming::sanitize_filename;

/// Execute the classify command.
pub async fn execute_classify(
    args: ClassifyArgs,
    config: &Config,
    formatter: &Formatter,
) -> Result<()> {
    if !args.file.is_file() {
        return Err(CliError::InvalidInput(format!(
            "{} is not a file",
            args.file.display()
        )));
    }
    if !is_supported(&args.file) {
        return Err(CliError::InvalidInput(format!(
            "{} has an unsupported extension",
            args.file.display()
        )));
    }

    let filename = args
        .file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| CliError::InvalidInput("path has no file name".to_string()))?;

    let classifier = build_classifier(config, args.offline, args.model)?;

    let extractor = ContentExtractor::new(config.extraction);
    let content = match extractor.try_extract(&args.file) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("{}", formatter.warning(&format!("No text extracted: {}", e)));
            String::new()
        }
    };

    let result = classifier.classify(&filename, &content).await;

    let ext = args
        .file
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();
    let destination = format!(
        "{}/{}{}",
        result.category(),
        sanitize_filename(result.name()),
        ext
    );

    println!(
        "{}",
        formatter.format_classification(
            &args.file,
            &result,
            &destination,
            content.chars().count()
        )?
    );

    Ok(())
}
