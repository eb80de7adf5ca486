//! Government reforms: minor then major, each split into general and
//! country-specific reforms.

use super::{Generator, Page};
use crate::data::{Entity, GameData, GovernmentReform, ScriptNode, ScriptTree};
use crate::format::wiki::{flag, format_number, nest_wiki_list, wiki_list};
use crate::output::section::Section;
use crate::output::table::make_wiki_table;
use crate::query::sorted_by_display_name;
use crate::render::{render_rows, Column, RenderContext};
use crate::Result;

const TAG_TRIGGER: &str = "has_or_had_tag";

/// Tags named by the first `has_or_had_tag` found in allow, potential or
/// locked, in that order.
pub fn reform_country_tags(reform: &GovernmentReform) -> Vec<String> {
    let node = [&reform.allow, &reform.potential, &reform.locked]
        .into_iter()
        .flatten()
        .find_map(|tree| tree.find_key(TAG_TRIGGER));
    let scalars: Vec<&ScriptNode> = match node {
        None => Vec::new(),
        Some(ScriptNode::List(items)) => items.iter().collect(),
        Some(other) => vec![other],
    };
    scalars
        .into_iter()
        .filter_map(|node| node.as_scalar())
        .map(|scalar| {
            let tag = scalar.to_string();
            tag.strip_prefix("c:").unwrap_or(&tag).to_uppercase()
        })
        .collect()
}

/// Several headed blocks as nested bullets; a single block stays as is.
fn headed_parts(parts: Vec<(&str, String)>) -> String {
    let parts: Vec<(&str, String)> = parts
        .into_iter()
        .filter(|(_, content)| !content.trim().is_empty())
        .collect();
    match parts.as_slice() {
        [] => String::new(),
        [(_, content)] => content.clone(),
        _ => parts
            .iter()
            .flat_map(|(title, content)| {
                std::iter::once(format!("* '''{}:'''", title)).chain(nest_wiki_list(content, 1))
            })
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

fn nested_block(title: &str, content: &str) -> String {
    std::iter::once(format!("* '''{}:'''", title))
        .chain(nest_wiki_list(content, 1))
        .collect::<Vec<_>>()
        .join("\n")
}

fn reform_years(reform: &GovernmentReform) -> String {
    match (reform.years, reform.months) {
        (Some(years), _) => format!("{} years", format_number(years)),
        (None, Some(months)) => format!("{} months", months),
        (None, None) => String::new(),
    }
}

impl<'a> Generator<'a> {
    /// `{{flag|Name}}` for each tag; several tags become a list.
    pub fn reform_country(&self, reform: &GovernmentReform) -> String {
        let flags: Vec<String> = reform_country_tags(reform)
            .iter()
            .map(|tag| {
                let name = match GameData::lookup(&self.data().countries, tag) {
                    Some(country) => country
                        .display_name()
                        .split('(')
                        .next()
                        .unwrap_or_default()
                        .trim()
                        .to_string(),
                    None => self.data().localize_or_key(tag),
                };
                flag(&name)
            })
            .collect();
        match flags.len() {
            0 => String::new(),
            1 => flags.concat(),
            _ => wiki_list(flags, 1),
        }
    }

    fn reform_trigger(&self, tree: Option<&ScriptTree>, country_specific: bool) -> String {
        match tree {
            Some(tree) if country_specific => self.ctx.trigger(Some(&tree.without_key(TAG_TRIGGER))),
            other => self.ctx.trigger(other),
        }
    }

    fn reform_effects(&self, reform: &GovernmentReform) -> String {
        let ctx = &self.ctx;
        headed_parts(vec![
            ("Country Modifier", ctx.modifiers(&reform.country_modifier)),
            ("Location Modifier", ctx.modifiers(&reform.location_modifier)),
            ("On Activate", ctx.effect(reform.on_activate.as_ref())),
            ("On Deactivate", ctx.effect(reform.on_deactivate.as_ref())),
        ])
    }

    fn reform_requirements(&self, reform: &GovernmentReform, country_specific: bool) -> String {
        let ctx = &self.ctx;
        let unlocked = headed_parts(vec![
            (
                "Government",
                ctx.reference(&ctx.data.government_types, reform.government.as_deref()),
            ),
            (
                "Societal Values",
                wiki_list(
                    reform.societal_values.iter().map(|v| ctx.localized(Some(v))),
                    1,
                ),
            ),
            (
                "Potential",
                self.reform_trigger(reform.potential.as_ref(), country_specific),
            ),
            (
                "Allow",
                self.reform_trigger(reform.allow.as_ref(), country_specific),
            ),
        ]);
        let locked = self.reform_trigger(reform.locked.as_ref(), country_specific);
        match (unlocked.is_empty(), locked.is_empty()) {
            (_, true) => unlocked,
            (true, false) => nested_block("Reform is locked as long as", &locked),
            (false, false) => format!(
                "{}\n\n----\n\n{}",
                nested_block("Reform is unlocked as long as", &unlocked),
                nested_block("Reform is locked as long as", &locked)
            ),
        }
    }

    fn reform_columns(&self, country_specific: bool) -> Vec<Column<'_, GovernmentReform>> {
        let mut columns = vec![
            Column::new("Name", move |r: &GovernmentReform, _: &RenderContext<'_>| {
                self.name_iconbox(r, true)
            }),
            Column::new("Age", |r: &GovernmentReform, ctx: &RenderContext<'_>| {
                ctx.reference(&ctx.data.ages, r.age.as_deref())
            }),
            Column::new("Effects", move |r: &GovernmentReform, _: &RenderContext<'_>| {
                self.reform_effects(r)
            }),
            Column::new(
                "Requirements",
                move |r: &GovernmentReform, _: &RenderContext<'_>| {
                    self.reform_requirements(r, country_specific)
                },
            ),
            Column::new("Years", |r: &GovernmentReform, _: &RenderContext<'_>| {
                reform_years(r)
            }),
        ];
        if country_specific {
            columns.push(Column::new(
                "Country",
                move |r: &GovernmentReform, _: &RenderContext<'_>| self.reform_country(r),
            ));
        }
        columns
    }

    pub fn reforms_page(&self) -> Result<Page> {
        let reforms = sorted_by_display_name(self.data().government_reforms()?.values());
        let general_columns = self.reform_columns(false);
        let specific_columns = self.reform_columns(true);
        let mut page = Page::unmarked();
        for (major, title) in [(false, "Minor"), (true, "Major")] {
            let (specific, general): (Vec<&GovernmentReform>, Vec<&GovernmentReform>) = reforms
                .iter()
                .copied()
                .filter(|reform| reform.major == major)
                .partition(|reform| !reform_country_tags(reform).is_empty());
            if specific.is_empty() && general.is_empty() {
                continue;
            }
            let key = format!("reforms_{}", title.to_lowercase());
            page.heading(title, 2);
            if !general.is_empty() {
                let table = make_wiki_table(
                    render_rows(general, &general_columns, &self.ctx),
                    &self.table_options(),
                );
                page.section(Section::new(&key, table));
            }
            if !specific.is_empty() {
                page.heading("Country specific", 3);
                let table = make_wiki_table(
                    render_rows(specific, &specific_columns, &self.ctx),
                    &self.table_options(),
                );
                page.section(Section::new(format!("{}_country_specific", key), table));
            }
        }
        Ok(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{EntityMeta, Modifier};
    use crate::format::PlainFormatter;
    use crate::options::GeneratorConfig;
    use crate::tables::fixtures::named;
    use crate::tables::TableKind;

    fn reform(key: &str, display: &str, major: bool) -> GovernmentReform {
        GovernmentReform {
            meta: EntityMeta::new(key).display(display),
            major,
            ..Default::default()
        }
    }

    #[test]
    fn test_country_tags_from_first_trigger() {
        let mut r = reform("shogunate", "Shogunate", false);
        r.potential = Some(ScriptTree::new().with("has_or_had_tag", "c:jap"));
        assert_eq!(reform_country_tags(&r), vec!["JAP"]);

        r.allow = Some(ScriptTree::new().with(
            "OR",
            ScriptTree::new().with(
                "has_or_had_tag",
                ScriptNode::List(vec!["FRA".into(), "c:bur".into()]),
            ),
        ));
        assert_eq!(reform_country_tags(&r), vec!["FRA", "BUR"]);
        assert!(reform_country_tags(&reform("x", "X", false)).is_empty());
    }

    #[test]
    fn test_years_column() {
        let mut r = reform("x", "X", false);
        assert_eq!(reform_years(&r), "");
        r.months = Some(6);
        assert_eq!(reform_years(&r), "6 months");
        r.years = Some(1.5);
        assert_eq!(reform_years(&r), "1.5 years");
    }

    #[test]
    fn test_headed_parts() {
        assert_eq!(headed_parts(vec![("A", String::new())]), "");
        assert_eq!(headed_parts(vec![("A", "* x".to_string()), ("B", String::new())]), "* x");
        assert_eq!(
            headed_parts(vec![("A", "* x".to_string()), ("B", "y".to_string())]),
            "* '''A:'''\n** x\n* '''B:'''\n** y"
        );
    }

    #[test]
    fn test_reforms_page_layout() {
        let mut council = reform("council", "Council", false);
        council.country_modifier = vec![Modifier::new("stability", 1.0)];
        council.locked = Some(ScriptTree::new().with("is_at_war", true));
        let mut shogunate = reform("shogunate", "Shogunate", false);
        shogunate.potential = Some(
            ScriptTree::new()
                .with("has_or_had_tag", "JAP")
                .with("is_subject", false),
        );
        let data = GameData {
            government_reforms: Some(
                [council, shogunate, reform("empire", "Empire", true)]
                    .into_iter()
                    .map(|r| (r.name().to_string(), r))
                    .collect(),
            ),
            countries: named(&[("JAP", "Japan (Ashikaga)")]),
            ..Default::default()
        };
        let formatter = PlainFormatter::new();
        let config = GeneratorConfig::new();
        let generator = Generator::new(&data, &formatter, &config);
        let generated = generator.generate(TableKind::Reforms).unwrap();

        let keys: Vec<&str> = generated.sections.keys().collect();
        assert_eq!(keys, vec!["reforms_minor", "reforms_minor_country_specific", "reforms_major"]);
        let page = &generated.page;
        assert!(page.starts_with("== Minor ==\n{|"));
        assert!(page.find("=== Country specific ===").unwrap() < page.find("== Major ==").unwrap());
        assert!(!page.contains("<section"));

        let general = &generated.sections.get("reforms_minor").unwrap().body;
        assert!(general.contains("* '''Reform is locked as long as:'''\n** is_at_war = yes"));

        let specific = &generated.sections.get("reforms_minor_country_specific").unwrap().body;
        assert!(specific.contains("| {{flag|Japan}}"));
        assert!(specific.contains("* is_subject = no"));
        assert!(!specific.contains("has_or_had_tag"));
    }
}
