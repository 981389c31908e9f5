//! Command implementations.

pub mod categories;
pub mod classify;
pub mod configure;
pub mod organize;

pub use self::categories::execute_categories;
pub use self::classify::execute_classify;
pub use self::configure::execute_configure;
pub use self::organize::execute_organize;

use crate::config::Config;
use crate::credentials::{resolve_api_key, API_KEY_ENV};
use crate::error::{CliError, Result};
use omnifile_classifier::Classifier;
use omnifile_llm::GeminiProvider;
use omnifile_naming::NameValidator;
use tracing::info;

/// Build the classifier shared by `organize` and `classify`.
///
/// Without `offline`, a missing API key is an error.
pub(crate) fn build_classifier(
    config: &Config,
    offline: bool,
    model: Option<String>,
) -> Result<Classifier<GeminiProvider>> {
    let provider = if offline {
        info!("Offline mode: classifying by filename keywords");
        None
    } else {
        let key = resolve_api_key(&config.credentials_file, std::env::var(API_KEY_ENV).ok())?
            .ok_or(CliError::MissingApiKey)?;

        let mut llm = config.llm.clone();
        if let Some(model) = model {
            llm.model = model;
        }
        llm.validate().map_err(CliError::Config)?;

        info!("Using Gemini model {}", llm.model);
        Some(GeminiProvider::new(key, llm)?)
    };

    Ok(Classifier::new(
        provider,
        config.classifier.clone(),
        NameValidator::new(config.naming.clone()),
    ))
}
