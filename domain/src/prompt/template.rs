//! Placeholder-based prompt templates

use std::borrow::Cow;

/// A prompt with named `{placeholder}` slots.
///
/// Rendering is a single left-to-right pass: substituted values are never
/// re-scanned, and braces that do not name a supplied variable (such as the
/// JSON example embedded in an agent prompt) are emitted verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate {
    text: Cow<'static, str>,
}

impl PromptTemplate {
    pub const DILEMMA: &'static str = "dilemma";
    pub const HISTORY: &'static str = "history";

    pub fn new(text: impl Into<Cow<'static, str>>) -> Self {
        Self { text: text.into() }
    }

    /// Placeholder key for the argument produced by `role`.
    pub fn argument_key(role: &str) -> String {
        format!("argument:{}", role)
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Whether `{key}` appears in the template.
    pub fn references(&self, key: &str) -> bool {
        self.text.contains(&format!("{{{}}}", key))
    }

    /// Substitute `vars` into the template.
    pub fn render(&self, vars: &[(&str, &str)]) -> String {
        let mut out = String::with_capacity(self.text.len());
        let mut rest: &str = &self.text;

        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            let substituted = after.find('}').and_then(|close| {
                let key = &after[..close];
                vars.iter()
                    .find(|(k, _)| *k == key)
                    .map(|(_, value)| (*value, close))
            });
            match substituted {
                Some((value, close)) => {
                    out.push_str(value);
                    rest = &after[close + 1..];
                }
                None => {
                    out.push('{');
                    rest = after;
                }
            }
        }
        out.push_str(rest);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_named_placeholders() {
        let t = PromptTemplate::new("Dilemma: {dilemma}; history: {history}.");
        let out = t.render(&[("dilemma", "ship?"), ("history", "[]")]);
        assert_eq!(out, "Dilemma: ship?; history: [].");
    }

    #[test]
    fn test_render_leaves_unknown_braces() {
        let t = PromptTemplate::new(r#"{dilemma} -> {"argument": "..."}"#);
        let out = t.render(&[("dilemma", "x")]);
        assert_eq!(out, r#"x -> {"argument": "..."}"#);
    }

    #[test]
    fn test_render_does_not_rescan_values() {
        let t = PromptTemplate::new("{dilemma} / {history}");
        let out = t.render(&[("dilemma", "{history}"), ("history", "[]")]);
        assert_eq!(out, "{history} / []");
    }

    #[test]
    fn test_argument_placeholders() {
        let t = PromptTemplate::new("A: {argument:BuildFast} B: {argument:Stillness}");
        assert!(t.references(&PromptTemplate::argument_key("BuildFast")));
        assert!(!t.references(&PromptTemplate::argument_key("Skeptic")));
        let out = t.render(&[
            ("argument:BuildFast", "go"),
            ("argument:Stillness", "wait"),
        ]);
        assert_eq!(out, "A: go B: wait");
    }

    #[test]
    fn test_unterminated_brace() {
        let t = PromptTemplate::new("tail {dilemma");
        assert_eq!(t.render(&[("dilemma", "x")]), "tail {dilemma");
    }
}
