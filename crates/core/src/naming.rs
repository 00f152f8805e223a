use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamingRule {
    pub type_key: String,
    pub extensions: Vec<String>,
}

impl NamingRule {
    pub fn new(type_key: &str, extensions: &[&str]) -> Self {
        Self {
            type_key: type_key.to_lowercase(),
            extensions: extensions.iter().map(|ext| ext.to_string()).collect(),
        }
    }

    pub fn default_extension(&self) -> Option<&str> {
        self.extensions.first().map(String::as_str)
    }
}

/// Type keyword to accepted extensions. The first extension of each rule is
/// the default used when a canonical name is built from a long-form file.
#[derive(Debug, Clone)]
pub struct NamingRules {
    rules: Vec<NamingRule>,
    known_extensions: HashSet<String>,
    short_names: HashSet<String>,
}

impl NamingRules {
    pub fn new(rules: Vec<NamingRule>) -> Self {
        let known_extensions = rules
            .iter()
            .flat_map(|rule| rule.extensions.iter().cloned())
            .collect();
        let short_names = rules
            .iter()
            .flat_map(|rule| {
                rule.extensions
                    .iter()
                    .map(move |ext| format!("{}.{}", rule.type_key, ext))
            })
            .collect();

        Self {
            rules,
            known_extensions,
            short_names,
        }
    }

    pub fn standard() -> Self {
        Self::new(vec![
            NamingRule::new("apaga", &["sql"]),
            NamingRule::new("consulta", &["sql"]),
            NamingRule::new("controle", &["sql"]),
            NamingRule::new("fisico", &["sql"]),
            NamingRule::new("popula", &["sql"]),
            NamingRule::new("conceitual", &["brM3"]),
            NamingRule::new("logico", &["brM3"]),
            NamingRule::new("doc", &["pdf", "doc", "docx"]),
        ])
    }

    pub fn rules(&self) -> &[NamingRule] {
        &self.rules
    }

    pub fn rule(&self, type_key: &str) -> Option<&NamingRule> {
        let key = type_key.to_lowercase();
        self.rules.iter().find(|rule| rule.type_key == key)
    }

    pub fn extensions(&self, type_key: &str) -> Option<&[String]> {
        self.rule(type_key).map(|rule| rule.extensions.as_slice())
    }

    pub fn default_extension(&self, type_key: &str) -> Option<&str> {
        self.rule(type_key).and_then(NamingRule::default_extension)
    }

    pub fn is_known_extension(&self, ext: &str) -> bool {
        self.known_extensions.contains(ext)
    }

    pub fn is_short_name(&self, file_name: &str) -> bool {
        self.short_names.contains(file_name)
    }
}

impl Default for NamingRules {
    fn default() -> Self {
        Self::standard()
    }
}

/// `doc` is always shown as `DOC`; any other type gets its first character
/// upper-cased.
pub fn presentation_type(token: &str) -> String {
    if token.eq_ignore_ascii_case("doc") {
        return "DOC".to_string();
    }

    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
