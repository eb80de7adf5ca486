//! Estate privileges, one table per estate.

use super::{Generator, Page};
use crate::data::{Entity, EstatePrivilege};
use crate::format::wiki::merge_sections;
use crate::output::section::Section;
use crate::output::table::make_wiki_table;
use crate::query::{group_by, sorted_by_display_name};
use crate::render::{render_rows, Column, RenderContext};
use crate::Result;

impl<'a> Generator<'a> {
    fn privilege_columns(&self) -> Vec<Column<'_, EstatePrivilege>> {
        vec![
            Column::new("Name", move |p: &EstatePrivilege, _: &RenderContext<'_>| {
                self.name_iconbox(p, true)
            }),
            Column::new("Requirements", |p: &EstatePrivilege, ctx: &RenderContext<'_>| {
                merge_sections([
                    ("", ctx.trigger(p.potential.as_ref())),
                    ("", ctx.trigger(p.allow.as_ref())),
                    ("Can Revoke", ctx.trigger(p.can_revoke.as_ref())),
                ])
            }),
            Column::new(
                "On Fully Activated",
                |p: &EstatePrivilege, ctx: &RenderContext<'_>| {
                    ctx.effect(p.on_fully_activated.as_ref())
                },
            ),
            Column::new("Effects", |p: &EstatePrivilege, ctx: &RenderContext<'_>| {
                merge_sections([
                    ("", ctx.modifiers(&p.country_modifier)),
                    ("On Activate", ctx.effect(p.on_activate.as_ref())),
                    ("On Deactivate", ctx.effect(p.on_deactivate.as_ref())),
                    ("Location Modifier", ctx.modifiers(&p.location_modifier)),
                    ("Province Modifier", ctx.modifiers(&p.province_modifier)),
                ])
            }),
        ]
    }

    pub fn privileges_page(&self) -> Result<Page> {
        let privileges = self.data().estate_privileges()?;
        let sorted = sorted_by_display_name(privileges.values());
        let columns = self.privilege_columns();
        let mut page = Page::new();
        for (estate_key, members) in group_by(sorted, |p: &EstatePrivilege| p.estate.clone()) {
            let estate = self.ctx.display_name(&self.data().estates, Some(&estate_key));
            page.heading(&format!("{} privileges", estate), 3);
            let table = make_wiki_table(
                render_rows(members, &columns, &self.ctx),
                &self.table_options(),
            );
            page.section(Section::new(format!("estate_privileges_{}", estate_key), table).versioned());
        }
        Ok(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{EntityMeta, GameData, Modifier, ScriptTree};
    use crate::format::PlainFormatter;
    use crate::options::GeneratorConfig;
    use crate::tables::fixtures::named;
    use crate::tables::TableKind;

    fn privilege(key: &str, display: &str, estate: &str) -> EstatePrivilege {
        EstatePrivilege {
            meta: EntityMeta::new(key).display(display),
            estate: estate.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_grouped_by_estate_sorted_by_name() {
        let mut levies = privilege("noble_levies", "Levies", "nobles_estate");
        levies.country_modifier = vec![Modifier::new("global_manpower", 0.1)];
        levies.can_revoke = Some(ScriptTree::new().with("is_at_war", false));
        let data = GameData {
            estate_privileges: Some(
                [
                    privilege("tithes", "Tithes", "clergy_estate"),
                    privilege("noble_courts", "Courts", "nobles_estate"),
                    levies,
                ]
                .into_iter()
                .map(|p| (p.name().to_string(), p))
                .collect(),
            ),
            estates: named(&[("nobles_estate", "Nobles"), ("clergy_estate", "Clergy")]),
            ..Default::default()
        };
        let formatter = PlainFormatter::new();
        let config = GeneratorConfig::new();
        let generator = Generator::new(&data, &formatter, &config);
        let generated = generator.generate(TableKind::EstatePrivileges).unwrap();

        // Courts sorts first, so its estate group leads
        let keys: Vec<&str> = generated.sections.keys().collect();
        assert_eq!(keys, vec!["estate_privileges_nobles_estate", "estate_privileges_clergy_estate"]);
        let nobles = &generated.sections.get("estate_privileges_nobles_estate").unwrap().body;
        assert!(nobles.find("|Courts|").unwrap() < nobles.find("|Levies|").unwrap());
        assert!(nobles.contains("* {{green|+0.1}} Global Manpower"));
        assert!(nobles.contains("'''Can Revoke:'''\n* is_at_war = no"));
        assert!(generated.page.contains("=== Nobles privileges ==="));
    }
}
