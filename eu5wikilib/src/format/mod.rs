//! Attribute formatting: turning triggers, effects and modifiers into markup.
//!
//! The generators never format script structures themselves; they call an
//! [`AttributeFormatter`]. A wiki toolchain usually plugs in a formatter that
//! knows the game's localisation for every trigger and modifier.
//! [`PlainFormatter`] is a self-contained fallback that renders trees as
//! nested bullet lists.
//!
//! [`wiki`] holds the small markup helpers shared by every generator (lists,
//! icons, iconboxes, flags).

pub mod plain;
pub mod wiki;

pub use plain::PlainFormatter;

use crate::data::{GoodsAmounts, Modifier, ScriptTree, ScriptValue};

/// Renders script structures into wiki markup.
///
/// Every method returns an empty string for empty input, never a
/// placeholder.
pub trait AttributeFormatter {
    fn format_trigger(&self, trigger: &ScriptTree) -> String;

    fn format_effect(&self, effect: &ScriptTree) -> String;

    fn format_modifier(&self, modifier: &Modifier) -> String;

    /// Amounts of goods, with or without the goods' names next to the icons.
    fn format_goods(&self, goods: &GoodsAmounts, icon_only: bool) -> String;

    fn format_script_value(&self, value: &ScriptValue) -> String;

    /// All modifiers as one bullet list.
    fn format_modifiers(&self, modifiers: &[Modifier]) -> String {
        wiki::wiki_list(modifiers.iter().map(|m| self.format_modifier(m)), 1)
    }

    fn format_float(&self, value: f64) -> String {
        wiki::format_number(value)
    }

    fn format_percent(&self, value: f64) -> String {
        format!("{}%", wiki::format_number(value * 100.0))
    }

    /// A signed number coloured by whether the change is good for the player.
    fn add_red_green(
        &self,
        value: f64,
        positive_is_good: bool,
        add_plus: bool,
        add_percent: bool,
    ) -> String {
        let mut text = if add_percent {
            self.format_percent(value)
        } else {
            self.format_float(value)
        };
        if add_plus && value > 0.0 {
            text.insert(0, '+');
        }
        if value == 0.0 {
            return text;
        }
        if (value > 0.0) == positive_is_good {
            format!("{{{{green|{}}}}}", text)
        } else {
            format!("{{{{red|{}}}}}", text)
        }
    }

    /// Localized prose with `$concept$`-style references resolved.
    fn format_localization_text(&self, text: &str) -> String {
        text.to_string()
    }
}
