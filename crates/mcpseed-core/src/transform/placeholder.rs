//! Placeholder extraction for catalog template strings.
//!
//! Catalog values embed deployment-time variables as `{{name}}` or
//! `{{name|modifier|...}}`. The registry schema expects single-brace
//! `{name}` templates plus a declaration of every variable used.

use lazy_static::lazy_static;
use regex::Regex;

use super::config_index::ConfigIndex;
use crate::registry::{InputSchema, Variables};

lazy_static! {
    /// Leftmost `{{`, then the nearest `}}` after it. An opening token with no
    /// closing token never matches, so scanning stops there.
    static ref PLACEHOLDER_REGEX: Regex = Regex::new(r"(?s)\{\{(.*?)\}\}").unwrap();
}

/// One `{{name|modifier...}}` occurrence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder<'a> {
    pub name: &'a str,
    pub modifiers: Vec<&'a str>,
}

impl<'a> Placeholder<'a> {
    fn parse(content: &'a str) -> Self {
        let mut segments = content.split('|');
        let name = segments.next().unwrap_or_default();
        Self {
            name,
            modifiers: segments.collect(),
        }
    }
}

/// A template rewritten to canonical form, with the variables it declares
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplatedValue {
    pub value: String,
    pub variables: Variables,
}

impl TemplatedValue {
    pub fn has_variables(&self) -> bool {
        !self.variables.is_empty()
    }
}

/// Whether the string contains at least one complete placeholder
pub fn has_placeholders(raw: &str) -> bool {
    PLACEHOLDER_REGEX.is_match(raw)
}

/// Every placeholder occurrence, in order of appearance
pub fn placeholders(raw: &str) -> Vec<Placeholder<'_>> {
    PLACEHOLDER_REGEX
        .captures_iter(raw)
        .filter_map(|caps| caps.get(1))
        .map(|content| Placeholder::parse(content.as_str()))
        .collect()
}

/// Collapse doubled braces outside of recognised placeholders
fn collapse_braces(text: &str) -> String {
    text.replace("{{", "{").replace("}}", "}")
}

/// Canonicalize `raw` and declare its variables.
///
/// Each placeholder becomes `{name}`; any other doubled brace is collapsed to
/// a single one. Variables are looked up in `config` by their full name for a
/// description. Repeated names collapse to one entry. Unterminated
/// placeholders declare nothing; an empty name is declared as `""`.
/// Doubled braces inside a placeholder name are kept so the name still
/// appears verbatim in the canonical value.
pub fn parse(raw: &str, config: &ConfigIndex) -> TemplatedValue {
    let mut value = String::with_capacity(raw.len());
    let mut variables = Variables::new();
    let mut last = 0;

    for caps in PLACEHOLDER_REGEX.captures_iter(raw) {
        let (Some(whole), Some(content)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let placeholder = Placeholder::parse(content.as_str());

        value.push_str(&collapse_braces(&raw[last..whole.start()]));
        value.push('{');
        value.push_str(placeholder.name);
        value.push('}');
        last = whole.end();

        let description = config.description(placeholder.name).map(str::to_string);
        variables.insert(placeholder.name.to_string(), InputSchema::string(description));
    }
    value.push_str(&collapse_braces(&raw[last..]));

    TemplatedValue { value, variables }
}

/// Canonical form of `raw` without resolving variables
pub fn canonicalize(raw: &str) -> String {
    parse(raw, &ConfigIndex::default()).value
}
