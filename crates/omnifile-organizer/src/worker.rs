//! Background worker that runs a batch off the display task

use crate::{BatchReport, Organizer, OrganizerError, OrganizerEvent};
use omnifile_domain::traits::{ContentSource, LlmProvider};
use std::fmt::Display;
use std::path::PathBuf;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver};
use tokio::task::JoinHandle;

/// Runs one organization batch on a tokio task
///
/// The worker owns the [`Organizer`] and reports progress only through
/// [`OrganizerEvent`]s; the task holding the receiver is the sole writer of
/// progress output. The event stream ends after
/// [`OrganizerEvent::BatchFinished`], or early if the batch fails its
/// preconditions.
///
/// # Examples
///
/// ```no_run
/// use omnifile_classifier::{Classifier, ClassifierConfig};
/// use omnifile_content::ContentExtractor;
/// use omnifile_llm::MockProvider;
/// use omnifile_naming::NameValidator;
/// use omnifile_organizer::{BatchWorker, Organizer, OrganizerConfig, OrganizerEvent};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let classifier: Classifier<MockProvider> =
///         Classifier::new(None, ClassifierConfig::default(), NameValidator::default());
///     let organizer = Organizer::new(classifier, ContentExtractor::default(), OrganizerConfig::default());
///
///     let worker = BatchWorker::spawn(organizer, "scans".into(), "organized".into());
///     let (handle, mut events) = worker.into_parts();
///     while let Some(event) = events.recv().await {
///         if let OrganizerEvent::FileOrganized { placement, .. } = event {
///             println!("{}", placement.destination.display());
///         }
///     }
///
///     let report = handle.await??;
///     println!("{}", report.summary());
///     Ok(())
/// }
/// ```
pub struct BatchWorker {
    handle: JoinHandle<Result<BatchReport, OrganizerError>>,
    events: UnboundedReceiver<OrganizerEvent>,
}

impl BatchWorker {
    /// Start organizing `input` into `output` on a new task
    pub fn spawn<L, C>(organizer: Organizer<L, C>, input: PathBuf, output: PathBuf) -> Self
    where
        L: LlmProvider + Send + Sync + 'static,
        L::Error: Display,
        C: ContentSource + Send + Sync + 'static,
    {
        let (tx, events) = unbounded_channel();

        let handle = tokio::spawn(async move {
            tracing::debug!("Batch worker started");
            let result = organizer.run(&input, &output, &tx).await;
            if let Err(e) = &result {
                tracing::error!("Batch aborted: {}", e);
            }
            result
        });

        Self { handle, events }
    }

    /// Next progress event, or `None` once the batch is over
    pub async fn next_event(&mut self) -> Option<OrganizerEvent> {
        self.events.recv().await
    }

    /// Wait for the batch to finish and return its report
    ///
    /// Remaining events are discarded.
    pub async fn finish(self) -> Result<BatchReport, OrganizerError> {
        drop(self.events);
        self.handle
            .await
            .map_err(|e| OrganizerError::Worker(e.to_string()))?
    }

    /// Split into the task handle and the event receiver
    pub fn into_parts(
        self,
    ) -> (
        JoinHandle<Result<BatchReport, OrganizerError>>,
        UnboundedReceiver<OrganizerEvent>,
    ) {
        (self.handle, self.events)
    }
}
