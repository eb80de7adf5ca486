//! A formatter that needs no game knowledge.

use super::wiki::{format_number, humanize_key, icon_template, wiki_list};
use super::AttributeFormatter;
use crate::data::{GoodsAmounts, Modifier, ScriptNode, ScriptTree, ScriptValue};

/// Renders script blocks as nested `key = value` bullet lists and modifiers
/// as signed numbers followed by their humanized name.
#[derive(Debug, Clone, Default)]
pub struct PlainFormatter;

impl PlainFormatter {
    pub fn new() -> Self {
        PlainFormatter
    }

    fn tree_lines(&self, tree: &ScriptTree, depth: usize, lines: &mut Vec<String>) {
        for (key, node) in tree.iter() {
            self.node_lines(key, node, depth, lines);
        }
    }

    fn node_lines(&self, key: &str, node: &ScriptNode, depth: usize, lines: &mut Vec<String>) {
        let stars = "*".repeat(depth);
        match node {
            ScriptNode::Scalar(value) => lines.push(format!("{} {} = {}", stars, key, value)),
            ScriptNode::Tree(tree) => {
                lines.push(format!("{} {}:", stars, key));
                self.tree_lines(tree, depth + 1, lines);
            }
            ScriptNode::List(items) => {
                for item in items {
                    self.node_lines(key, item, depth, lines);
                }
            }
        }
    }

    fn render_tree(&self, tree: &ScriptTree) -> String {
        let mut lines = Vec::new();
        self.tree_lines(tree, 1, &mut lines);
        lines.join("\n")
    }
}

impl AttributeFormatter for PlainFormatter {
    fn format_trigger(&self, trigger: &ScriptTree) -> String {
        self.render_tree(trigger)
    }

    fn format_effect(&self, effect: &ScriptTree) -> String {
        self.render_tree(effect)
    }

    fn format_modifier(&self, modifier: &Modifier) -> String {
        format!(
            "{} {}",
            self.add_red_green(modifier.value, true, true, false),
            humanize_key(&modifier.name)
        )
    }

    fn format_goods(&self, goods: &GoodsAmounts, icon_only: bool) -> String {
        let parts: Vec<String> = goods
            .iter()
            .map(|(good, amount)| {
                if icon_only {
                    format!("{} {}", format_number(*amount), icon_template(good))
                } else {
                    format!(
                        "{} {} {}",
                        format_number(*amount),
                        icon_template(good),
                        humanize_key(good)
                    )
                }
            })
            .collect();
        if icon_only {
            parts.join(" ")
        } else {
            wiki_list(parts, 1)
        }
    }

    fn format_script_value(&self, value: &ScriptValue) -> String {
        match value {
            ScriptValue::Number(n) => format_number(*n),
            ScriptValue::Named(name) => name.clone(),
            ScriptValue::Block(tree) => self.render_tree(tree),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trigger_as_nested_list() {
        let trigger = ScriptTree::new()
            .with("is_at_war", false)
            .with("OR", ScriptTree::new().with("has_or_had_tag", "FRA"));
        let f = PlainFormatter::new();
        assert_eq!(
            f.format_trigger(&trigger),
            "* is_at_war = no\n* OR:\n** has_or_had_tag = FRA"
        );
        assert_eq!(f.format_trigger(&ScriptTree::new()), "");
    }

    #[test]
    fn test_modifier_and_goods() {
        let f = PlainFormatter::new();
        assert_eq!(
            f.format_modifier(&Modifier::new("global_tax_modifier", 0.5)),
            "{{green|+0.5}} Global Tax Modifier"
        );
        let goods: GoodsAmounts = [("stone".to_string(), 10.0), ("wood".to_string(), 2.5)]
            .into_iter()
            .collect();
        assert_eq!(
            f.format_goods(&goods, true),
            "10 {{icon|stone}} 2.5 {{icon|wood}}"
        );
        assert_eq!(
            f.format_goods(&goods, false),
            "* 10 {{icon|stone}} Stone\n* 2.5 {{icon|wood}} Wood"
        );
    }

    #[test]
    fn test_modifier_list() {
        let f = PlainFormatter::new();
        let modifiers = vec![
            Modifier::new("local_unrest", -1.0),
            Modifier::new("local_tax", 0.1),
        ];
        assert_eq!(
            f.format_modifiers(&modifiers),
            "* {{red|-1}} Local Unrest\n* {{green|+0.1}} Local Tax"
        );
        assert_eq!(f.format_modifiers(&[]), "");
    }
}
