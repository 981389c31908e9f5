//! Core Classifier implementation

use crate::config::ClassifierConfig;
use crate::error::ClassifierError;
use crate::fallback::fallback_analysis;
use crate::parser::parse_response;
use crate::prompt::PromptBuilder;
use omnifile_domain::traits::LlmProvider;
use omnifile_domain::{ClassificationResult, ClassificationSource};
use omnifile_naming::{file_stem, NameValidator};
use std::fmt::Display;
use tokio::time::timeout;
use tracing::{debug, info, warn};

/// Chooses a category and a name for each document
///
/// Without a provider every document goes through the keyword fallback.
pub struct Classifier<L> {
    provider: Option<L>,
    config: ClassifierConfig,
    validator: NameValidator,
}

impl<L> Classifier<L>
where
    L: LlmProvider + Sync,
    L::Error: Display,
{
    /// Create a new Classifier
    pub fn new(provider: Option<L>, config: ClassifierConfig, validator: NameValidator) -> Self {
        Self {
            provider,
            config,
            validator,
        }
    }

    /// Whether remote classification is available
    pub fn has_provider(&self) -> bool {
        self.provider.is_some()
    }

    /// Model used for remote classification, if any
    pub fn model_name(&self) -> Option<&str> {
        self.provider.as_ref().map(|p| p.model_name())
    }

    /// Active configuration
    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Classify one document
    ///
    /// Uses the provider when one is configured and the trimmed content is
    /// longer than `min_content_chars`. Any remote failure is logged and
    /// answered with [`fallback_analysis`]; this method never fails.
    pub async fn classify(&self, filename: &str, content: &str) -> ClassificationResult {
        if !self.has_provider() || content.trim().chars().count() <= self.config.min_content_chars
        {
            debug!("Using keyword fallback for {}", filename);
            return self.fallback(filename);
        }

        match self.classify_remote(filename, content).await {
            Ok(result) => result,
            Err(e) => {
                warn!("Remote classification failed for {}: {}", filename, e);
                self.fallback(filename)
            }
        }
    }

    /// Classify one document with the provider, surfacing errors
    pub async fn classify_remote(
        &self,
        filename: &str,
        content: &str,
    ) -> Result<ClassificationResult, ClassifierError> {
        let provider = self.provider.as_ref().ok_or(ClassifierError::NoProvider)?;

        let prompt = PromptBuilder::new(filename, content)
            .with_content_limit(self.config.content_limit)
            .build();

        debug!("Prompt length: {} chars", prompt.len());

        let response = timeout(self.config.timeout(), provider.generate(&prompt))
            .await
            .map_err(|_| ClassifierError::Timeout(self.config.timeout_secs))?
            .map_err(|e| ClassifierError::Llm(e.to_string()))?;

        debug!("LLM response length: {} chars", response.len());

        if response.trim().is_empty() {
            return Err(ClassifierError::EmptyResponse);
        }

        let parsed = parse_response(&response);
        let category = parsed.category_or_default();
        let name = self
            .validator
            .validate_or_replace(parsed.name_or(file_stem(filename)), filename);

        info!(
            "Classified {} as {} via {}",
            filename,
            category,
            provider.model_name()
        );

        Ok(ClassificationResult::new(
            category,
            name,
            ClassificationSource::Remote,
        ))
    }

    /// Keyword-only classification from the filename
    pub fn fallback(&self, filename: &str) -> ClassificationResult {
        fallback_analysis(filename, &self.validator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use omnifile_domain::Category;
    use omnifile_llm::{LlmError, MockProvider};
    use std::future::Future;
    use std::time::Duration;

    const CONTENT: &str = "OFÍCIO Nº 12/2024 - Secretaria Municipal de Saúde. \
        Solicitamos informações sobre o andamento do processo administrativo.";

    fn classifier(llm: MockProvider) -> Classifier<MockProvider> {
        Classifier::new(Some(llm), ClassifierConfig::default(), NameValidator::default())
    }

    #[tokio::test]
    async fn test_remote_classification() {
        let llm = MockProvider::new(
            "CATEGORY: Oficios_e_Pareceres\nNAME: Ofício 12 Secretaria Saúde",
        );
        let result = classifier(llm).classify("scan_001.pdf", CONTENT).await;

        assert_eq!(result.category(), Category::OficiosEPareceres);
        assert_eq!(result.name(), "Ofício 12 Secretaria Saúde");
        assert_eq!(result.source(), ClassificationSource::Remote);
    }

    #[tokio::test]
    async fn test_prompt_carries_filename_and_content() {
        let llm = MockProvider::new("CATEGORY: Oficios_e_Pareceres\nNAME: Ofício Saúde");
        let handle = llm.clone();
        classifier(llm).classify("scan_001.pdf", CONTENT).await;

        let prompts = handle.prompts();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("scan_001.pdf"));
        assert!(prompts[0].contains("Secretaria Municipal de Saúde"));
    }

    #[tokio::test]
    async fn test_remote_error_equals_fallback() {
        let llm = MockProvider::failing(LlmError::Communication("connection refused".into()));
        let classifier = classifier(llm);

        let result = classifier.classify("oficio_joao.txt", CONTENT).await;
        let expected = fallback_analysis("oficio_joao.txt", &NameValidator::default());

        assert_eq!(result, expected);
        assert_eq!(result.category(), Category::OficiosEPareceres);
        assert_eq!(result.source(), ClassificationSource::Fallback);
    }

    #[tokio::test]
    async fn test_empty_reply_falls_back() {
        let llm = MockProvider::new("   ");
        let result = classifier(llm).classify("2024-01-15.pdf", CONTENT).await;

        assert_eq!(result.category(), Category::OutrosDocumentos);
        assert_eq!(result.name(), "Documento - 2024-01-15");
        assert_eq!(result.source(), ClassificationSource::Fallback);
    }

    #[tokio::test]
    async fn test_short_content_skips_provider() {
        let llm = MockProvider::new("CATEGORY: Contratos_e_Acordos\nNAME: Contrato X");
        let handle = llm.clone();
        let classifier = classifier(llm);

        // Exactly 50 characters after trimming is not enough
        let content = format!("  {}  ", "a".repeat(50));
        let result = classifier.classify("oficio_joao.txt", &content).await;

        assert_eq!(handle.call_count(), 0);
        assert_eq!(result.source(), ClassificationSource::Fallback);
    }

    #[tokio::test]
    async fn test_no_provider_uses_fallback() {
        let classifier: Classifier<MockProvider> =
            Classifier::new(None, ClassifierConfig::default(), NameValidator::default());
        assert!(!classifier.has_provider());
        assert_eq!(classifier.model_name(), None);

        let result = classifier.classify("oficio_joao.txt", CONTENT).await;
        assert_eq!(result.category(), Category::OficiosEPareceres);
        assert_eq!(result.name(), "oficio joao");

        let err = classifier.classify_remote("oficio_joao.txt", CONTENT).await;
        assert_eq!(err, Err(ClassifierError::NoProvider));
    }

    #[tokio::test]
    async fn test_unknown_category_and_missing_name_default() {
        let llm = MockProvider::new("CATEGORY: Receitas\n");
        let result = classifier(llm)
            .classify("parecer_tecnico_obra.pdf", CONTENT)
            .await;

        assert_eq!(result.category(), Category::OutrosDocumentos);
        assert_eq!(result.name(), "parecer_tecnico_obra");
        assert_eq!(result.source(), ClassificationSource::Remote);
    }

    #[tokio::test]
    async fn test_generic_remote_name_is_replaced() {
        let llm = MockProvider::new("CATEGORY: Relatorios_e_Analises\nNAME: Documento");
        let result = classifier(llm)
            .classify("relatorio_vendas_2024.pdf", CONTENT)
            .await;

        assert_eq!(result.category(), Category::RelatoriosEAnalises);
        assert_eq!(result.name(), "Documento - relatorio vendas 2024");
    }

    #[tokio::test]
    async fn test_long_remote_name_is_truncated() {
        let llm = MockProvider::new(format!(
            "CATEGORY: Leis_e_Normativas\nNAME: Lei Municipal {}",
            "Zoneamento ".repeat(20)
        ));
        let result = classifier(llm).classify("lei.pdf", CONTENT).await;
        assert_eq!(result.name().chars().count(), 70);
    }

    struct SlowProvider;

    impl LlmProvider for SlowProvider {
        type Error = LlmError;

        fn generate(&self, _prompt: &str) -> impl Future<Output = Result<String, LlmError>> + Send {
            async {
                tokio::time::sleep(Duration::from_secs(10)).await;
                Ok("CATEGORY: Contratos_e_Acordos\nNAME: Contrato Tardio".to_string())
            }
        }

        fn model_name(&self) -> &str {
            "slow"
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_falls_back() {
        let config = ClassifierConfig {
            timeout_secs: 1,
            ..ClassifierConfig::default()
        };
        let classifier = Classifier::new(Some(SlowProvider), config, NameValidator::default());

        let err = classifier.classify_remote("oficio_joao.txt", CONTENT).await;
        assert_eq!(err, Err(ClassifierError::Timeout(1)));

        let result = classifier.classify("oficio_joao.txt", CONTENT).await;
        assert_eq!(result.source(), ClassificationSource::Fallback);
    }
}
