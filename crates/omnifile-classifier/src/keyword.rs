//! Deterministic keyword classification

use omnifile_domain::Category;

/// Ordered rule table; the first rule with a matching keyword wins
const RULES: &[(&[&str], Category)] = &[
    (
        &["oficio", "parecer", "requer", "solicit", "memo", "circular"],
        Category::OficiosEPareceres,
    ),
    (
        &["eproc", "processo", "sentenca", "decisao", "judicial", "acordao", "despacho"],
        Category::ProcessosJudiciais,
    ),
    (
        &["ouvidoria", "reclamacao", "denuncia", "manifestacao"],
        Category::OuvidoriaEReclamacoes,
    ),
    (
        &["relatorio", "analise", "levantamento", "estudo"],
        Category::RelatoriosEAnalises,
    ),
    (
        &["contrato", "acordo", "convenio", "termo"],
        Category::ContratosEAcordos,
    ),
    (
        &["lei", "decreto", "portaria", "norma", "resolucao"],
        Category::LeisENormativas,
    ),
    (
        &["deliberacao", "ata", "resolucao"],
        Category::DeliberacoesEResolucoes,
    ),
    (
        &["cpf", "rg", "certidao", "identidade", "comprovante"],
        Category::DocumentosPessoais,
    ),
    (
        &["fatura", "nota", "pagamento", "financeiro", "orcamento"],
        Category::FinanceiroEPagamentos,
    ),
    (
        &["email", "carta", "notificacao", "comunicacao"],
        Category::CorrespondenciasGerais,
    ),
];

/// Substring keyword classifier used when the LLM is unavailable
///
/// Total and deterministic: every input maps to exactly one category, and
/// the same input always maps to the same one.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordClassifier;

impl KeywordClassifier {
    /// Create a keyword classifier
    pub fn new() -> Self {
        Self
    }

    /// Classify `text` (usually a filename)
    pub fn classify(&self, text: &str) -> Category {
        let text = text.to_lowercase();
        RULES
            .iter()
            .find(|(keywords, _)| keywords.iter().any(|k| text.contains(k)))
            .map(|(_, category)| *category)
            .unwrap_or_default()
    }

    /// The keyword that decided the category, if any
    pub fn matched_keyword(&self, text: &str) -> Option<&'static str> {
        let text = text.to_lowercase();
        RULES
            .iter()
            .find_map(|(keywords, _)| keywords.iter().find(|k| text.contains(*k)).copied())
    }
}
