//! Message template rendering
//!
//! Placeholders use the `${var:name}` syntax. Rendering is a single pass over
//! the template: substituted values are inserted verbatim and never scanned
//! for further placeholders.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static VARIABLE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\$\{var:([a-zA-Z0-9][-a-zA-Z0-9]*)\}").expect("variable pattern is a valid regex")
});

/// A fixed message template
#[derive(Debug, Clone)]
pub struct MessageTemplate {
    content: &'static str,
}

impl MessageTemplate {
    pub fn new(content: &'static str) -> Self {
        Self { content }
    }

    /// Substitute every placeholder; unknown ones stay as written.
    pub fn render(&self, values: &HashMap<&str, &str>) -> String {
        VARIABLE_PATTERN
            .replace_all(self.content, |cap: &Captures<'_>| match values.get(&cap[1]) {
                Some(value) => (*value).to_string(),
                None => cap[0].to_string(),
            })
            .into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_without_variables() {
        let template = MessageTemplate::new("Hello, world!");
        assert_eq!(template.render(&HashMap::new()), "Hello, world!");
    }

    #[test]
    fn test_render_replaces_every_occurrence() {
        let template = MessageTemplate::new("${var:name} and ${var:name}");
        let values = HashMap::from([("name", "SQL Server")]);

        assert_eq!(template.render(&values), "SQL Server and SQL Server");
    }

    #[test]
    fn test_render_keeps_unknown_placeholder() {
        let template = MessageTemplate::new("Target: ${var:target}");
        assert_eq!(template.render(&HashMap::new()), "Target: ${var:target}");
    }

    #[test]
    fn test_render_does_not_expand_substituted_values() {
        let template = MessageTemplate::new("${var:a} / ${var:b}");
        let values = HashMap::from([("a", "${var:b}"), ("b", "second")]);

        assert_eq!(template.render(&values), "${var:b} / second");
    }
}
