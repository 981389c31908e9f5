//! LLM prompt for document classification

use omnifile_domain::{Category, MAX_NAME_CHARS};

/// Builds the classification prompt for one document
pub struct PromptBuilder<'a> {
    filename: &'a str,
    content: &'a str,
    content_limit: usize,
}

impl<'a> PromptBuilder<'a> {
    /// Create a new prompt builder
    pub fn new(filename: &'a str, content: &'a str) -> Self {
        Self {
            filename,
            content,
            content_limit: 2000,
        }
    }

    /// Limit the content excerpt to `limit` characters
    pub fn with_content_limit(mut self, limit: usize) -> Self {
        self.content_limit = limit;
        self
    }

    /// Build the complete classification prompt
    pub fn build(&self) -> String {
        let mut prompt = String::new();

        // 1. Task and category labels
        prompt.push_str(CLASSIFICATION_INSTRUCTIONS);
        prompt.push_str("\n\nCATEGORIAS DISPONÍVEIS:\n");
        for category in Category::ALL {
            prompt.push_str(&format!("- {}\n", category));
        }
        prompt.push('\n');

        // 2. The document itself
        prompt.push_str(&format!("NOME ORIGINAL: {}\n", self.filename));
        prompt.push_str("CONTEÚDO:\n---\n");
        prompt.push_str(self.excerpt());
        prompt.push_str("\n---\n\n");

        // 3. Rules
        prompt.push_str(CATEGORY_RULES);
        prompt.push_str("\n\n");
        prompt.push_str(&NAMING_RULES.replace("{max}", &MAX_NAME_CHARS.to_string()));
        prompt.push_str("\n\n");

        // 4. Reply format
        prompt.push_str(OUTPUT_FORMAT);

        prompt
    }

    fn excerpt(&self) -> &str {
        match self.content.char_indices().nth(self.content_limit) {
            Some((cut, _)) => &self.content[..cut],
            None => self.content,
        }
    }
}

const CLASSIFICATION_INSTRUCTIONS: &str =
    "Analise este documento e classifique-o em exatamente uma das categorias abaixo.";

const CATEGORY_RULES: &str = r#"REGRAS DE CATEGORIZAÇÃO:
- Ofício, parecer, memo, circular, comunicado = "Oficios_e_Pareceres"
- E-proc, processo, sentença, decisão, acórdão, despacho = "Processos_Judiciais"
- Ouvidoria, reclamação, denúncia, manifestação = "Ouvidoria_e_Reclamacoes"
- Relatório, análise, levantamento, estudo = "Relatorios_e_Analises"
- Contrato, convênio, acordo, termo = "Contratos_e_Acordos"
- Lei, decreto, portaria, resolução normativa = "Leis_e_Normativas"
- Deliberação, ata, resolução administrativa = "Deliberacoes_e_Resolucoes"
- CPF, RG, certidão, comprovante de residência = "Documentos_Pessoais"
- Fatura, nota fiscal, comprovante de pagamento = "Financeiro_e_Pagamentos"
- E-mail, carta, notificação = "Correspondencias_Gerais""#;

const NAMING_RULES: &str = r#"REGRAS PARA O NOME:
- Sempre incluir o assunto principal do documento
- Se mencionar o nome de uma pessoa, incluí-lo no título
- Se mencionar uma empresa ou órgão, incluí-lo no título
- Nunca usar apenas datas (ex: "2024-01-15")
- Nunca usar nomes genéricos (ex: "Documento", "Arquivo")
- Ser específico sobre o conteúdo (ex: "Contrato Fornecimento João Silva", "Relatório Vendas Janeiro 2024")
- Máximo de {max} caracteres"#;

const OUTPUT_FORMAT: &str = r#"Responda exatamente neste formato, em duas linhas, sem texto adicional:
CATEGORY: <uma das categorias acima>
NAME: <nome específico e descritivo do conteúdo>"#;
