//! Organize command implementation.

use super::build_classifier;
use crate::cli::OrganizeArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use omnifile_content::ContentExtractor;
use omnifile_organizer::{BatchWorker, Organizer, OrganizerEvent};

/// Execute the organize command.
pub async fn execute_organize(
    args: OrganizeArgs,
    config: &Config,
    formatter: &Formatter,
) -> Result<()> {
    // Fail before asking for credentials when the folders are unusable
    Organizer::<omnifile_llm::GeminiProvider, ContentExtractor>::check_preconditions(
        &args.input,
        &args.output,
    )?;

    let classifier = build_classifier(config, args.offline, args.model)?;

    let mut organizer_config = config.organizer.clone();
    organizer_config.dry_run |= args.dry_run;

    let organizer = Organizer::new(
        classifier,
        ContentExtractor::new(config.extraction),
        organizer_config,
    );

    let mut worker = BatchWorker::spawn(organizer, args.input, args.output);

    while let Some(event) = worker.next_event().await {
        if matches!(event, OrganizerEvent::BatchFinished(_)) {
            break;
        }
        if let Some(line) = formatter.event(&event) {
            println!("{}", line);
        }
    }

    let report = worker.finish().await?;
    let summary = formatter.format_report(&report)?;
    if !summary.is_empty() {
        println!("{}", summary);
    }

    Ok(())
}
