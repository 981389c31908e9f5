//! Parse LLM replies into a category and a name

use omnifile_domain::Category;
use tracing::debug;

/// Fields recovered from an LLM reply
///
/// Either field may be missing; the `*_or*` accessors apply defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedResponse {
    /// Category label, when present and recognised
    pub category: Option<Category>,

    /// Proposed name, when present and non-empty
    pub name: Option<String>,
}

impl ParsedResponse {
    /// Category, defaulting to [`Category::OutrosDocumentos`]
    pub fn category_or_default(&self) -> Category {
        self.category.unwrap_or_default()
    }

    /// Name, defaulting to `fallback`
    pub fn name_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.name.as_deref().unwrap_or(fallback)
    }
}

/// Parse a reply of the form `CATEGORY: <label>` / `NAME: <name>`
///
/// Never fails. Lines are trimmed and matched case-insensitively against
/// `CATEGORY:`/`CATEGORIA:` and `NAME:`/`NOME:`; any other line is ignored
/// and the last occurrence of a field wins. Values lose surrounding
/// markdown emphasis, quotes and brackets. Labels match ignoring case;
/// unknown labels are dropped.
pub fn parse_response(response: &str) -> ParsedResponse {
    let mut parsed = ParsedResponse::default();

    for line in response.lines().map(str::trim) {
        if let Some(value) = field_value(line, &["CATEGORY:", "CATEGORIA:"]) {
            let label = clean_value(value);
            parsed.category = Category::parse_ignore_case(label);
            if parsed.category.is_none() {
                debug!("Unknown category label in LLM reply: {:?}", label);
            }
        } else if let Some(value) = field_value(line, &["NAME:", "NOME:"]) {
            let name = clean_value(value);
            parsed.name = (!name.is_empty()).then(|| name.to_string());
        }
    }

    parsed
}

/// Value after the first matching prefix, ignoring leading markdown emphasis
fn field_value<'a>(line: &'a str, prefixes: &[&str]) -> Option<&'a str> {
    let line = line.trim_start_matches(['*', '#', '-', ' ']);
    prefixes.iter().find_map(|prefix| {
        let head = line.get(..prefix.len())?;
        head.eq_ignore_ascii_case(prefix)
            .then(|| &line[prefix.len()..])
    })
}

fn clean_value(value: &str) -> &str {
    value.trim_matches(|c: char| {
        c.is_whitespace() || matches!(c, '*' | '"' | '\'' | '`' | '[' | ']' | '<' | '>')
    })
}
