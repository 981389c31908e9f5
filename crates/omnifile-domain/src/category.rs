//! Category module - the closed set of destination folders

use std::fmt;

/// Category a document is routed into
///
/// The label returned by [`Category::as_str`] is used verbatim as the name of the
/// destination subfolder, so it must stay filesystem-safe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Category {
    /// Official letters, opinions, memos, circulars
    OficiosEPareceres,

    /// Reports, analyses, surveys, studies
    RelatoriosEAnalises,

    /// Court cases, rulings, decisions, dispatches
    ProcessosJudiciais,

    /// Ombudsman cases, complaints, reports of wrongdoing
    OuvidoriaEReclamacoes,

    /// Contracts, agreements, covenants, terms
    ContratosEAcordos,

    /// Laws, decrees, ordinances, regulations
    LeisENormativas,

    /// Deliberations, minutes, administrative resolutions
    DeliberacoesEResolucoes,

    /// Personal identity documents and certificates
    DocumentosPessoais,

    /// Invoices, receipts, payments, budgets
    FinanceiroEPagamentos,

    /// E-mails, letters, notifications
    CorrespondenciasGerais,

    /// Catch-all
    #[default]
    OutrosDocumentos,
}

impl Category {
    /// Every category, in prompt/listing order
    pub const ALL: [Category; 11] = [
        Category::OficiosEPareceres,
        Category::RelatoriosEAnalises,
        Category::ProcessosJudiciais,
        Category::OuvidoriaEReclamacoes,
        Category::ContratosEAcordos,
        Category::LeisENormativas,
        Category::DeliberacoesEResolucoes,
        Category::DocumentosPessoais,
        Category::FinanceiroEPagamentos,
        Category::CorrespondenciasGerais,
        Category::OutrosDocumentos,
    ];

    /// Get the category label (also the destination folder name)
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::OficiosEPareceres => "Oficios_e_Pareceres",
            Category::RelatoriosEAnalises => "Relatorios_e_Analises",
            Category::ProcessosJudiciais => "Processos_Judiciais",
            Category::OuvidoriaEReclamacoes => "Ouvidoria_e_Reclamacoes",
            Category::ContratosEAcordos => "Contratos_e_Acordos",
            Category::LeisENormativas => "Leis_e_Normativas",
            Category::DeliberacoesEResolucoes => "Deliberacoes_e_Resolucoes",
            Category::DocumentosPessoais => "Documentos_Pessoais",
            Category::FinanceiroEPagamentos => "Financeiro_e_Pagamentos",
            Category::CorrespondenciasGerais => "Correspondencias_Gerais",
            Category::OutrosDocumentos => "Outros_Documentos",
        }
    }

    /// Parse a category from its exact label
    ///
    /// Surrounding whitespace is ignored; anything else must match exactly.
    pub fn parse(s: &str) -> Option<Self> {
        let label = s.trim();
        Self::ALL.into_iter().find(|c| c.as_str() == label)
    }

    /// Like [`Category::parse`], ignoring ASCII case
    pub fn parse_ignore_case(s: &str) -> Option<Self> {
        let label = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(label))
    }

    /// Human-readable prefix used when a name has to be rebuilt for this category
    pub fn name_prefix(&self) -> &'static str {
        match self {
            Category::OficiosEPareceres => "Ofício",
            Category::ProcessosJudiciais => "Processo",
            Category::OuvidoriaEReclamacoes => "Ouvidoria",
            Category::RelatoriosEAnalises => "Relatório",
            Category::ContratosEAcordos => "Contrato",
            Category::LeisENormativas => "Normativa",
            Category::DeliberacoesEResolucoes => "Deliberação",
            Category::DocumentosPessoais => "Documento Pessoal",
            Category::FinanceiroEPagamentos => "Financeiro",
            Category::CorrespondenciasGerais => "Correspondência",
            Category::OutrosDocumentos => "Documento",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid category: {}", s))
    }
}
