//! The notes column: ordered rules that fire when a value leaves its default.

use tracing::trace;

use super::fields::RenderContext;
use crate::format::wiki::wiki_list;

type CheckFn<'r, E, D> = Box<dyn Fn(&E, &D, &RenderContext<'_>) -> Option<String> + 'r>;

/// One `(attribute, message)` pair of a note table.
///
/// The rule compares the entity's value with the value read from the
/// defaults struct `D`; only a difference produces the message.
pub struct NoteRule<'r, E, D> {
    attribute: &'static str,
    check: CheckFn<'r, E, D>,
}

impl<'r, E, D> NoteRule<'r, E, D> {
    pub fn new<V, G, DG, M>(attribute: &'static str, value: G, default: DG, message: M) -> Self
    where
        V: PartialEq,
        G: Fn(&E) -> V + 'r,
        DG: Fn(&D) -> V + 'r,
        M: Fn(&V, &RenderContext<'_>) -> String + 'r,
    {
        NoteRule {
            attribute,
            check: Box::new(move |entity, defaults, ctx| {
                let live = value(entity);
                if live == default(defaults) {
                    None
                } else {
                    Some(message(&live, ctx))
                }
            }),
        }
    }

    /// Rule with a fixed message.
    pub fn fixed<V, G, DG>(attribute: &'static str, value: G, default: DG, message: &'static str) -> Self
    where
        V: PartialEq,
        G: Fn(&E) -> V + 'r,
        DG: Fn(&D) -> V + 'r,
    {
        NoteRule::new(attribute, value, default, move |_: &V, _: &RenderContext<'_>| {
            message.to_string()
        })
    }

    pub fn attribute(&self) -> &'static str {
        self.attribute
    }

    /// The message, when the entity's value differs from the default.
    pub fn check(&self, entity: &E, defaults: &D, ctx: &RenderContext<'_>) -> Option<String> {
        (self.check)(entity, defaults, ctx)
    }
}

/// Rules scanned in declaration order; the output keeps that order.
pub struct NoteTable<'r, E, D> {
    rules: Vec<NoteRule<'r, E, D>>,
}

impl<'r, E, D> Default for NoteTable<'r, E, D> {
    fn default() -> Self {
        NoteTable { rules: Vec::new() }
    }
}

impl<'r, E, D> NoteTable<'r, E, D> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rule(mut self, rule: NoteRule<'r, E, D>) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Triggered messages with text, in rule order.
    pub fn notes(&self, entity: &E, defaults: &D, ctx: &RenderContext<'_>) -> Vec<String> {
        self.rules
            .iter()
            .filter_map(|rule| {
                let note = rule.check(entity, defaults, ctx)?;
                if note.trim().is_empty() {
                    trace!(attribute = rule.attribute(), "note without text");
                    return None;
                }
                Some(note)
            })
            .collect()
    }

    /// The triggered messages as one bullet list; nothing triggered is `""`.
    pub fn render(&self, entity: &E, defaults: &D, ctx: &RenderContext<'_>) -> String {
        wiki_list(self.notes(entity, defaults, ctx), 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::GameData;
    use crate::format::PlainFormatter;

    struct Sample {
        closes: bool,
        pops: i64,
        coastal: bool,
    }

    struct SampleDefaults {
        closes: bool,
        pops: i64,
        coastal: bool,
    }

    const DEFAULTS: SampleDefaults = SampleDefaults {
        closes: true,
        pops: 0,
        coastal: false,
    };

    fn sample_table<'r>() -> NoteTable<'r, Sample, SampleDefaults> {
        NoteTable::new()
            .rule(NoteRule::fixed(
                "coastal",
                |s: &Sample| s.coastal,
                |d: &SampleDefaults| d.coastal,
                "",
            ))
            .rule(NoteRule::new(
                "pops",
                |s: &Sample| s.pops,
                |d: &SampleDefaults| d.pops,
                |pops: &i64, _: &RenderContext<'_>| format!("Creates {} pops", pops),
            ))
            .rule(NoteRule::fixed(
                "closes",
                |s: &Sample| s.closes,
                |d: &SampleDefaults| d.closes,
                "Cannot be closed",
            ))
    }

    #[test]
    fn test_defaults_render_empty() {
        let data = GameData::default();
        let formatter = PlainFormatter::new();
        let ctx = RenderContext::new(&data, &formatter);
        let sample = Sample {
            closes: true,
            pops: 0,
            coastal: false,
        };
        assert_eq!(sample_table().render(&sample, &DEFAULTS, &ctx), "");
    }

    #[test]
    fn test_notes_keep_declaration_order() {
        let data = GameData::default();
        let formatter = PlainFormatter::new();
        let ctx = RenderContext::new(&data, &formatter);
        let sample = Sample {
            closes: false,
            pops: 5,
            coastal: true,
        };
        let table = sample_table();
        // the empty coastal message triggers but is not a note
        assert_eq!(
            table.notes(&sample, &DEFAULTS, &ctx),
            vec!["Creates 5 pops".to_string(), "Cannot be closed".to_string()]
        );
        assert_eq!(
            table.render(&sample, &DEFAULTS, &ctx),
            "* Creates 5 pops\n* Cannot be closed"
        );
    }

    #[test]
    fn test_suppression_is_equality_not_truthiness() {
        let data = GameData::default();
        let formatter = PlainFormatter::new();
        let ctx = RenderContext::new(&data, &formatter);
        // `true` is the default here, so it stays silent
        let sample = Sample {
            closes: true,
            pops: 0,
            coastal: false,
        };
        let defaults = SampleDefaults {
            closes: false,
            ..DEFAULTS
        };
        assert_eq!(sample_table().render(&sample, &defaults, &ctx), "* Cannot be closed");
    }
}
