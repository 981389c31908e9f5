//! Core Organizer implementation

use crate::discovery::discover_files;
use crate::events::{OrganizerEvent, Placement, Stage};
use crate::placement::{copy_file, resolve_collision_excluding};
use crate::report::{BatchReport, FailedFile};
use crate::{OrganizerConfig, OrganizerError};
use anyhow::{anyhow, Context};
use omnifile_classifier::Classifier;
use omnifile_domain::traits::{ContentSource, LlmProvider};
use omnifile_naming::sanitize_filename;
use std::collections::HashSet;
use std::fmt::Display;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, info, warn};

type StageResult<T> = Result<T, (Stage, anyhow::Error)>;

/// Copies documents from an input folder into `<output>/<category>/<name><ext>`
///
/// Originals are never moved or modified. Files are processed one at a time;
/// a file that fails is reported and skipped.
///
/// # Examples
///
/// ```no_run
/// use omnifile_classifier::{Classifier, ClassifierConfig};
/// use omnifile_content::ContentExtractor;
/// use omnifile_llm::MockProvider;
/// use omnifile_naming::NameValidator;
/// use omnifile_organizer::{Organizer, OrganizerConfig};
/// use std::path::Path;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let classifier: Classifier<MockProvider> =
///     Classifier::new(None, ClassifierConfig::default(), NameValidator::default());
/// let organizer = Organizer::new(classifier, ContentExtractor::default(), OrganizerConfig::default());
///
/// let (events, _rx) = tokio::sync::mpsc::unbounded_channel();
/// let report = organizer.run(Path::new("scans"), Path::new("organized"), &events).await?;
/// println!("{}", report.summary());
/// # Ok(())
/// # }
/// ```
pub struct Organizer<L, C> {
    classifier: Classifier<L>,
    content: Arc<C>,
    config: OrganizerConfig,
}

impl<L, C> Organizer<L, C>
where
    L: LlmProvider + Sync,
    L::Error: Display,
    C: ContentSource + Send + Sync + 'static,
{
    /// Create a new Organizer
    pub fn new(classifier: Classifier<L>, content: C, config: OrganizerConfig) -> Self {
        Self {
            classifier,
            content: Arc::new(content),
            config,
        }
    }

    /// Active configuration
    pub fn config(&self) -> &OrganizerConfig {
        &self.config
    }

    /// The classifier used for every file
    pub fn classifier(&self) -> &Classifier<L> {
        &self.classifier
    }

    /// Check that a batch from `input` into `output` can start
    pub fn check_preconditions(input: &Path, output: &Path) -> Result<(), OrganizerError> {
        if !input.exists() {
            return Err(OrganizerError::InputNotFound(input.to_path_buf()));
        }
        if !input.is_dir() {
            return Err(OrganizerError::NotADirectory(input.to_path_buf()));
        }

        let input_canonical = input.canonicalize()?;
        if let Ok(output_canonical) = output.canonicalize() {
            if output_canonical == input_canonical {
                return Err(OrganizerError::SameInputOutput(output.to_path_buf()));
            }
        }

        Ok(())
    }

    /// Organize every supported file under `input`
    ///
    /// Progress is sent over `events`; a closed receiver does not stop the
    /// batch. Only precondition failures return an error.
    pub async fn run(
        &self,
        input: &Path,
        output: &Path,
        events: &UnboundedSender<OrganizerEvent>,
    ) -> Result<BatchReport, OrganizerError> {
        Self::check_preconditions(input, output)?;

        let start = Instant::now();
        let files = discover_files(input, Some(output));
        let total = files.len();
        let mut report = BatchReport::new(total, self.config.dry_run);
        let mut claimed = HashSet::new();

        info!(
            "Organizing {} files from {} into {}{}",
            total,
            input.display(),
            output.display(),
            if self.config.dry_run { " (dry run)" } else { "" }
        );
        emit(events, OrganizerEvent::BatchStarted { total });

        for (i, path) in files.into_iter().enumerate() {
            let index = i + 1;
            emit(
                events,
                OrganizerEvent::FileStarted {
                    index,
                    total,
                    path: path.clone(),
                },
            );

            match self.process_file(&path, output, &mut claimed).await {
                Ok(placement) => {
                    info!(
                        "[{}/{}] {} -> {}",
                        index,
                        total,
                        path.display(),
                        placement.destination.display()
                    );
                    report.record_organized(
                        placement.classification.category(),
                        placement.classification.source(),
                    );
                    emit(
                        events,
                        OrganizerEvent::FileOrganized {
                            index,
                            total,
                            placement,
                        },
                    );
                }
                Err((stage, e)) => {
                    let error = format!("{:#}", e);
                    warn!("[{}/{}] {} failed at {}: {}", index, total, path.display(), stage, error);
                    report.record_failure(FailedFile {
                        path: path.clone(),
                        stage,
                        error: error.clone(),
                    });
                    emit(
                        events,
                        OrganizerEvent::FileFailed {
                            index,
                            total,
                            path,
                            stage,
                            error,
                        },
                    );
                }
            }
        }

        report.elapsed = start.elapsed();
        info!(
            "Batch finished: {} organized, {} failed in {:.1}s",
            report.organized(),
            report.failed(),
            report.elapsed.as_secs_f64()
        );
        emit(events, OrganizerEvent::BatchFinished(report.clone()));

        Ok(report)
    }

    /// Run one file through every stage
    ///
    /// `claimed` holds destinations handed out earlier in the batch, so that
    /// dry runs resolve collisions the same way a real run would.
    async fn process_file(
        &self,
        path: &Path,
        output: &Path,
        claimed: &mut HashSet<PathBuf>,
    ) -> StageResult<Placement> {
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| (Stage::Extract, anyhow!("path has no file name")))?;

        // 1. Extract
        let content = self.extract(path).await.map_err(|e| (Stage::Extract, e))?;
        debug!("{}: {} chars extracted", filename, content.chars().count());

        // 2. Classify (validation of the proposed name happens inside)
        let classification = self.classifier.classify(&filename, &content).await;
        debug!(
            "{}: {} / {} ({})",
            filename,
            classification.category(),
            classification.name(),
            classification.source().as_str()
        );

        // 3. Sanitize
        let name = sanitize_filename(classification.name());
        let ext = path
            .extension()
            .map(|e| format!(".{}", e.to_string_lossy()))
            .unwrap_or_default();

        // 4. Resolve collision
        let dir = output.join(classification.category().as_str());
        let destination = resolve_collision_excluding(&dir, &name, &ext, claimed)
            .with_context(|| format!("checking {}", dir.display()))
            .map_err(|e| (Stage::ResolveCollision, e))?;

        // 5. Copy
        if !self.config.dry_run {
            self.copy(path, &destination)
                .await
                .map_err(|e| (Stage::Copy, e))?;
        }
        claimed.insert(destination.clone());

        Ok(Placement {
            source: path.to_path_buf(),
            destination,
            classification,
            dry_run: self.config.dry_run,
        })
    }

    async fn extract(&self, path: &Path) -> anyhow::Result<String> {
        let content = Arc::clone(&self.content);
        let path = path.to_path_buf();
        tokio::task::spawn_blocking(move || content.excerpt(&path))
            .await
            .context("extraction task failed")
    }

    async fn copy(&self, source: &Path, destination: &Path) -> anyhow::Result<()> {
        let preserve = self.config.preserve_timestamps;
        let (src, dst) = (source.to_path_buf(), destination.to_path_buf());

        tokio::task::spawn_blocking(move || copy_file(&src, &dst, preserve))
            .await
            .context("copy task failed")?
            .with_context(|| format!("copying to {}", destination.display()))?;

        Ok(())
    }
}

/// Send an event; the receiver may already be gone
fn emit(events: &UnboundedSender<OrganizerEvent>, event: OrganizerEvent) {
    if events.send(event).is_err() {
        debug!("Event receiver closed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use omnifile_classifier::ClassifierConfig;
    use omnifile_llm::MockProvider;
    use omnifile_naming::NameValidator;
    use std::fs;
    use tempfile::TempDir;

    type TestOrganizer = Organizer<MockProvider, omnifile_content::ContentExtractor>;

    fn offline(config: OrganizerConfig) -> TestOrganizer {
        let classifier = Classifier::new(None, ClassifierConfig::default(), NameValidator::default());
        Organizer::new(classifier, omnifile_content::ContentExtractor::default(), config)
    }

    #[test]
    fn test_missing_input() {
        let dir = TempDir::new().unwrap();
        let err = TestOrganizer::check_preconditions(&dir.path().join("nope"), dir.path());
        assert!(matches!(err, Err(OrganizerError::InputNotFound(_))));
    }

    #[test]
    fn test_input_is_a_file() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("a.pdf");
        fs::write(&file, b"x").unwrap();
        let err = TestOrganizer::check_preconditions(&file, &dir.path().join("out"));
        assert!(matches!(err, Err(OrganizerError::NotADirectory(_))));
    }

    #[test]
    fn test_same_input_and_output() {
        let dir = TempDir::new().unwrap();
        let err = TestOrganizer::check_preconditions(dir.path(), dir.path());
        assert!(matches!(err, Err(OrganizerError::SameInputOutput(_))));
    }

    #[test]
    fn test_output_may_not_exist_yet() {
        let dir = TempDir::new().unwrap();
        assert!(TestOrganizer::check_preconditions(dir.path(), &dir.path().join("out")).is_ok());
    }

    #[tokio::test]
    async fn test_extension_case_is_kept() {
        let input = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();
        fs::write(input.path().join("Oficio_Prefeitura.PDF"), b"not a pdf").unwrap();

        let (tx, _rx) = tokio::sync::mpsc::unbounded_channel();
        let report = offline(OrganizerConfig::default())
            .run(input.path(), output.path(), &tx)
            .await
            .unwrap();

        assert_eq!(report.organized(), 1);
        assert!(output
            .path()
            .join("Oficios_e_Pareceres/Oficio Prefeitura.PDF")
            .exists());
    }

    #[tokio::test]
    async fn test_dry_run_reserves_names() {
        let input = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();
        fs::create_dir(input.path().join("b")).unwrap();
        fs::write(input.path().join("ata.pdf"), b"1").unwrap();
        fs::write(input.path().join("b/ata.pdf"), b"2").unwrap();

        let organizer = offline(OrganizerConfig {
            dry_run: true,
            ..OrganizerConfig::default()
        });
        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
        let report = organizer.run(input.path(), output.path(), &tx).await.unwrap();
        drop(tx);

        assert_eq!(report.organized(), 2);
        assert!(report.dry_run);
        assert!(fs::read_dir(output.path()).unwrap().next().is_none());

        let mut destinations = Vec::new();
        while let Some(event) = rx.recv().await {
            if let OrganizerEvent::FileOrganized { placement, .. } = event {
                assert!(placement.dry_run);
                destinations.push(placement.destination);
            }
        }
        let dir = output.path().join("Deliberacoes_e_Resolucoes");
        assert_eq!(
            destinations,
            vec![dir.join("Deliberação - ata.pdf"), dir.join("Deliberação - ata (1).pdf")]
        );
    }
}
