//! Finding and building `{% macro %}` blocks in Jinja-style SQL templates.
//!
//! We don't parse the template language. We only need to recognize the
//! opening and closing tags of argument-free macros, in both their plain and
//! whitespace-trimming spellings (`{% ... %}` and `{%- ... -%}`).

use once_cell::sync::Lazy;
use regex::Regex;

/// Opening tag of an argument-free macro, capturing its name.
static MACRO_OPEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{%-? macro (?P<name>\w+)\(\) -?%\}").unwrap());

/// Opening tag of any macro, with or without arguments. Macros don't nest,
/// so one of these inside a body means the block was never closed.
static ANY_MACRO_OPEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{%-?\s*macro\s").unwrap());

/// Closing tag of any macro.
static MACRO_CLOSE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{%-? endmacro -?%\}").unwrap());

/// A named macro and its body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Macro {
    pub name: String,
    pub body: String,
}

impl Macro {
    /// Create a new macro.
    pub fn new(name: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            body: body.into(),
        }
    }

    /// Find the macro `name` in `source`, returning its trimmed body.
    ///
    /// The block ends at the first `endmacro` tag after the opening tag. We
    /// return `None` if the macro is missing, if its block is never closed
    /// (another `macro` tag turns up before `endmacro`), or if its body is
    /// empty. Callers treat these the same way.
    pub fn extract(source: &str, name: &str) -> Option<Macro> {
        let open = MACRO_OPEN_RE
            .captures_iter(source)
            .find(|caps| &caps["name"] == name)?;
        let body_start = open.get(0)?.end();
        let close = MACRO_CLOSE_RE.find(&source[body_start..])?;
        let body = source[body_start..body_start + close.start()].trim();
        if body.is_empty() || ANY_MACRO_OPEN_RE.is_match(body) {
            return None;
        }
        Some(Macro::new(name, body))
    }

    /// Render this macro as a block, using trim markers on both tags.
    pub fn render(&self) -> String {
        format!(
            "{{%- macro {}() -%}}\n{}\n{{%- endmacro %}}",
            self.name, self.body
        )
    }
}

/// List the names of all macros defined in `source`, in file order.
pub fn macro_names(source: &str) -> Vec<&str> {
    MACRO_OPEN_RE
        .captures_iter(source)
        .filter_map(|caps| caps.name("name"))
        .map(|m| m.as_str())
        .collect()
}

/// Render `macros` and separate them with blank lines.
pub fn join_macros(macros: &[Macro]) -> String {
    macros
        .iter()
        .map(Macro::render)
        .collect::<Vec<_>>()
        .join("\n\n")
}
