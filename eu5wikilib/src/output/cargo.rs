//! Wiki template calls that feed structured-data (cargo) tables.

use crate::output::table::Cell;

/// One `{{Template |key=value ...}}` call under a heading with the entity's
/// display name.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateCall {
    template: String,
    heading: String,
    params: Vec<(String, String)>,
}

impl TemplateCall {
    pub fn new(template: impl Into<String>, heading: impl Into<String>) -> Self {
        TemplateCall {
            template: template.into(),
            heading: heading.into(),
            params: Vec::new(),
        }
    }

    /// Add a parameter; empty values are kept so every call has the same keys.
    pub fn param(mut self, key: impl Into<String>, value: impl Into<Cell>) -> Self {
        self.params.push((key.into(), value.into().to_string()));
        self
    }

    pub fn render(&self) -> String {
        let mut lines = vec![
            format!("=== {} ===", self.heading),
            format!("{{{{{}", self.template),
        ];
        lines.extend(
            self.params
                .iter()
                .map(|(key, value)| format!("|{}={}", key, value)),
        );
        lines.push("}}".to_string());
        lines.join("\n")
    }
}

/// All calls, one after another.
pub fn render_template_calls(calls: &[TemplateCall]) -> String {
    calls
        .iter()
        .map(TemplateCall::render)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_call_layout() {
        let call = TemplateCall::new("Building_category", "Religious")
            .param("name", "religious_category")
            .param("description", "")
            .param("city", 1_i64);
        assert_eq!(
            call.render(),
            "=== Religious ===\n{{Building_category\n|name=religious_category\n|description=\n|city=1\n}}"
        );
    }

    #[test]
    fn test_calls_are_joined_in_order() {
        let calls = vec![
            TemplateCall::new("T", "A").param("k", "1"),
            TemplateCall::new("T", "B").param("k", "2"),
        ];
        let rendered = render_template_calls(&calls);
        assert!(rendered.find("=== A ===").unwrap() < rendered.find("=== B ===").unwrap());
        assert_eq!(render_template_calls(&[]), "");
    }
}
