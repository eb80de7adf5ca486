//! Flat declarative tables: religions and their aspects and schools,
//! cultures, unit types and parliament issues.

use super::{background_style, Generator, Page, TableKind};
use crate::data::{
    Culture, Entity, ParliamentIssue, Religion, ReligiousAspect, ReligiousSchool, UnitType,
};
use crate::format::wiki::wiki_list;
use crate::output::section::Section;
use crate::output::table::make_wiki_table;
use crate::query::sorted_by_display_name;
use crate::render::{render_rows, Column, RenderContext};
use crate::Result;

fn localized_list(ctx: &RenderContext<'_>, keys: &[String]) -> String {
    wiki_list(keys.iter().map(|key| ctx.localized(Some(key))), 1)
}

impl<'a> Generator<'a> {
    /// One unmarked page holding a single table named after the generator.
    pub(super) fn flat_table_page<E: Entity>(
        &self,
        table: TableKind,
        entities: Vec<&E>,
        columns: &[Column<'_, E>],
    ) -> Page {
        let body = make_wiki_table(render_rows(entities, columns, &self.ctx), &self.table_options());
        let mut page = Page::unmarked();
        page.section(Section::new(table.name(), body));
        page
    }

    fn religion_columns(&self) -> Vec<Column<'_, Religion>> {
        vec![
            Column::new("Name", move |r: &Religion, _: &RenderContext<'_>| {
                format!(
                    "{}{}",
                    background_style(r.color.map(|c| c.css())),
                    self.name_iconbox(r, true)
                )
            }),
            Column::flag("Ai Wants Convert", |r: &Religion| r.ai_wants_convert),
            Column::flag("Culture Locked", |r: &Religion| r.culture_locked),
            Column::new("Custom Tags", |r: &Religion, ctx: &RenderContext<'_>| {
                localized_list(ctx, &r.custom_tags)
            }),
            Column::new("Definition Modifier", |r: &Religion, ctx: &RenderContext<'_>| {
                ctx.modifiers(&r.definition_modifier)
            }),
            Column::new("Factions", |r: &Religion, ctx: &RenderContext<'_>| {
                localized_list(ctx, &r.factions)
            }),
            Column::new("Group", |r: &Religion, ctx: &RenderContext<'_>| {
                ctx.localized(r.group.as_deref())
            }),
            Column::flag("Has Autocephalous Patriarchates", |r: &Religion| {
                r.has_autocephalous_patriarchates
            }),
            Column::flag("Has Avatars", |r: &Religion| r.has_avatars),
            Column::flag("Has Canonization", |r: &Religion| r.has_canonization),
            Column::flag("Has Cardinals", |r: &Religion| r.has_cardinals),
            Column::flag("Has Honor", |r: &Religion| r.has_honor),
            Column::flag("Has Karma", |r: &Religion| r.has_karma),
            Column::flag("Has Patriarchs", |r: &Religion| r.has_patriarchs),
            Column::flag("Has Purity", |r: &Religion| r.has_purity),
            Column::flag("Has Religious Head", |r: &Religion| r.has_religious_head),
            Column::flag("Has Religious Influence", |r: &Religion| {
                r.has_religious_influence
            }),
            Column::flag("Has Rite Power", |r: &Religion| r.has_rite_power),
            Column::new("Important Country", |r: &Religion, ctx: &RenderContext<'_>| {
                ctx.reference(&ctx.data.countries, r.important_country.as_deref())
            }),
            Column::new("Language", |r: &Religion, ctx: &RenderContext<'_>| {
                ctx.localized(r.language.as_deref())
            }),
            Column::new(
                "Max Religious Figures For Religion",
                |r: &Religion, _: &RenderContext<'_>| r.max_religious_figures_for_religion,
            ),
            Column::new("Max Sects", |r: &Religion, _: &RenderContext<'_>| r.max_sects),
            Column::flag("Needs Reform", |r: &Religion| r.needs_reform),
            Column::new(
                "Num Religious Focuses Needed For Reform",
                |r: &Religion, _: &RenderContext<'_>| r.num_religious_focuses_needed_for_reform,
            ),
            Column::new("Opinions", |r: &Religion, ctx: &RenderContext<'_>| {
                ctx.tree_keys(r.opinions.as_ref())
            }),
            Column::new("Religious Aspects", |r: &Religion, _: &RenderContext<'_>| {
                r.religious_aspects
            }),
            Column::new("Religious Focuses", |r: &Religion, ctx: &RenderContext<'_>| {
                localized_list(ctx, &r.religious_focuses)
            }),
            Column::new(
                "[RELIGIOUS_SCHOOL.GetName]",
                |r: &Religion, ctx: &RenderContext<'_>| localized_list(ctx, &r.religious_school),
            ),
            Column::new("Tags", |r: &Religion, ctx: &RenderContext<'_>| {
                localized_list(ctx, &r.tags)
            }),
            Column::new("Tithe", |r: &Religion, _: &RenderContext<'_>| r.tithe),
            Column::new("Unique Names", |r: &Religion, _: &RenderContext<'_>| {
                wiki_list(&r.unique_names, 1)
            }),
            Column::flag("Use Icons", |r: &Religion| r.use_icons),
        ]
    }

    pub fn religions_page(&self) -> Result<Page> {
        let religions = sorted_by_display_name(self.data().religions()?.values());
        Ok(self.flat_table_page(TableKind::Religions, religions, &self.religion_columns()))
    }

    fn religious_aspect_columns(&self) -> Vec<Column<'_, ReligiousAspect>> {
        vec![
            Column::new("Name", move |a: &ReligiousAspect, _: &RenderContext<'_>| {
                self.name_iconbox(a, false)
            }),
            Column::new("Religion", |a: &ReligiousAspect, ctx: &RenderContext<'_>| {
                ctx.references(&ctx.data.religions, &a.religion)
            }),
            Column::new("Modifier", |a: &ReligiousAspect, ctx: &RenderContext<'_>| {
                ctx.modifiers(&a.modifier)
            }),
            Column::new("Enabled", |a: &ReligiousAspect, ctx: &RenderContext<'_>| {
                ctx.trigger(a.enabled.as_ref())
            }),
            Column::new("Visible", |a: &ReligiousAspect, ctx: &RenderContext<'_>| {
                ctx.trigger(a.visible.as_ref())
            }),
            Column::new("Opinions", |a: &ReligiousAspect, ctx: &RenderContext<'_>| {
                ctx.tree_keys(a.opinions.as_ref())
            }),
        ]
    }

    pub fn religious_aspects_page(&self) -> Result<Page> {
        let aspects = sorted_by_display_name(self.data().religious_aspects()?.values());
        Ok(self.flat_table_page(
            TableKind::ReligiousAspects,
            aspects,
            &self.religious_aspect_columns(),
        ))
    }

    fn religious_school_columns(&self) -> Vec<Column<'_, ReligiousSchool>> {
        vec![
            Column::new("Name", move |r: &ReligiousSchool, _: &RenderContext<'_>| {
                self.name_iconbox(r, false)
            }),
            Column::new("Modifier", |r: &ReligiousSchool, ctx: &RenderContext<'_>| {
                ctx.modifiers(&r.modifier)
            }),
            Column::new(
                "Enabled For Character",
                |r: &ReligiousSchool, ctx: &RenderContext<'_>| {
                    ctx.trigger(r.enabled_for_character.as_ref())
                },
            ),
            Column::new("Enabled For Country", |r: &ReligiousSchool, ctx: &RenderContext<'_>| {
                ctx.trigger(r.enabled_for_country.as_ref())
            }),
        ]
    }

    pub fn religious_schools_page(&self) -> Result<Page> {
        let schools = sorted_by_display_name(self.data().religious_schools()?.values());
        Ok(self.flat_table_page(
            TableKind::ReligiousSchools,
            schools,
            &self.religious_school_columns(),
        ))
    }

    fn culture_columns(&self) -> Vec<Column<'_, Culture>> {
        vec![
            Column::new("Name", |c: &Culture, _: &RenderContext<'_>| {
                format!(
                    "{}{}",
                    background_style(c.color.map(|color| color.css())),
                    c.display_name()
                )
            }),
            Column::new("Culture Groups", |c: &Culture, ctx: &RenderContext<'_>| {
                let groups = c
                    .culture_groups
                    .iter()
                    .map(|group| ctx.display_name(&ctx.data.culture_groups, Some(group.as_str())));
                wiki_list(groups, 1)
            }),
            Column::new("Language", |c: &Culture, ctx: &RenderContext<'_>| {
                ctx.localized(c.language.as_deref())
            }),
            Column::new("Dynasty Name Type", |c: &Culture, _: &RenderContext<'_>| {
                c.dynasty_name_type.clone()
            }),
            Column::flag("Use Patronym", |c: &Culture| c.use_patronym),
            Column::new("Adjective Keys", |c: &Culture, _: &RenderContext<'_>| {
                wiki_list(&c.adjective_keys, 1)
            }),
            Column::new("Noun Keys", |c: &Culture, _: &RenderContext<'_>| {
                wiki_list(&c.noun_keys, 1)
            }),
            Column::new("Tags", |c: &Culture, ctx: &RenderContext<'_>| {
                localized_list(ctx, &c.tags)
            }),
            Column::new("Character Modifier", |c: &Culture, ctx: &RenderContext<'_>| {
                ctx.modifiers(&c.character_modifier)
            }),
            Column::new("Country Modifier", |c: &Culture, ctx: &RenderContext<'_>| {
                ctx.modifiers(&c.country_modifier)
            }),
            Column::new("Location Modifier", |c: &Culture, ctx: &RenderContext<'_>| {
                ctx.modifiers(&c.location_modifier)
            }),
            Column::new("Opinions", |c: &Culture, ctx: &RenderContext<'_>| {
                ctx.tree_keys(c.opinions.as_ref())
            }),
        ]
    }

    /// Cultures ordered by their group keys, then display name.
    pub fn cultures_page(&self) -> Result<Page> {
        let mut cultures = sorted_by_display_name(self.data().cultures()?.values());
        cultures.sort_by(|a, b| a.culture_groups.cmp(&b.culture_groups));
        Ok(self.flat_table_page(TableKind::Cultures, cultures, &self.culture_columns()))
    }

    fn unit_type_columns(&self) -> Vec<Column<'_, UnitType>> {
        vec![
            Column::new("Name", move |u: &UnitType, _: &RenderContext<'_>| {
                format!(
                    "{}{}",
                    background_style(u.color.map(|c| c.css())),
                    self.name_iconbox(u, true)
                )
            }),
            Column::new("Age", |u: &UnitType, ctx: &RenderContext<'_>| {
                ctx.reference(&ctx.data.ages, u.age.as_deref())
            }),
            Column::new("Artillery Barrage", |u: &UnitType, _: &RenderContext<'_>| {
                u.artillery_barrage
            }),
            Column::new("Attrition Loss", |u: &UnitType, _: &RenderContext<'_>| {
                u.attrition_loss
            }),
            Column::new("Blockade Capacity", |u: &UnitType, _: &RenderContext<'_>| {
                u.blockade_capacity
            }),
            Column::new("Bombard Efficiency", |u: &UnitType, _: &RenderContext<'_>| {
                u.bombard_efficiency
            }),
            Column::new("Build Time Modifier", |u: &UnitType, _: &RenderContext<'_>| {
                u.build_time_modifier
            }),
            Column::yes_no("Buildable", |u: &UnitType| u.buildable),
            Column::new("Cannons", |u: &UnitType, _: &RenderContext<'_>| u.cannons),
            Column::new("Category", |u: &UnitType, ctx: &RenderContext<'_>| {
                ctx.localized(u.category.as_deref())
            }),
            Column::new("Combat", |u: &UnitType, ctx: &RenderContext<'_>| {
                ctx.tree_keys(u.combat.as_ref())
            }),
            Column::new("Combat Power", |u: &UnitType, _: &RenderContext<'_>| u.combat_power),
            Column::new("Combat Speed", |u: &UnitType, _: &RenderContext<'_>| u.combat_speed),
            Column::new("Construction Demand", |u: &UnitType, ctx: &RenderContext<'_>| {
                ctx.price(u.construction_demand.as_ref())
            }),
            Column::new("Copy From", |u: &UnitType, ctx: &RenderContext<'_>| {
                ctx.reference(&ctx.data.unit_types, u.copy_from.as_deref())
            }),
            Column::new("Country Potential", |u: &UnitType, ctx: &RenderContext<'_>| {
                ctx.trigger(u.country_potential.as_ref())
            }),
            Column::new("Crew Size", |u: &UnitType, _: &RenderContext<'_>| u.crew_size),
            Column::flag("Default", |u: &UnitType| u.is_default),
            Column::new("Flanking Ability", |u: &UnitType, _: &RenderContext<'_>| {
                u.flanking_ability
            }),
            Column::new(
                "Food Consumption Per Strength",
                |u: &UnitType, _: &RenderContext<'_>| u.food_consumption_per_strength,
            ),
            Column::new(
                "Food Storage Per Strength",
                |u: &UnitType, _: &RenderContext<'_>| u.food_storage_per_strength,
            ),
            Column::new("Frontage", |u: &UnitType, _: &RenderContext<'_>| u.frontage),
            Column::new("Hull Size", |u: &UnitType, _: &RenderContext<'_>| u.hull_size),
            Column::new("Impact", |u: &UnitType, ctx: &RenderContext<'_>| {
                ctx.tree_keys(u.impact.as_ref())
            }),
            Column::new("Initiative", |u: &UnitType, _: &RenderContext<'_>| u.initiative),
            Column::flag("Levy", |u: &UnitType| u.levy),
            Column::new("Location Potential", |u: &UnitType, ctx: &RenderContext<'_>| {
                ctx.trigger(u.location_potential.as_ref())
            }),
            Column::new("Location Trigger", |u: &UnitType, ctx: &RenderContext<'_>| {
                ctx.trigger(u.location_trigger.as_ref())
            }),
            Column::new("Maintenance Demand", |u: &UnitType, ctx: &RenderContext<'_>| {
                ctx.price(u.maintenance_demand.as_ref())
            }),
            Column::new("Max Strength", |u: &UnitType, _: &RenderContext<'_>| u.max_strength),
            Column::new("Morale Damage Done", |u: &UnitType, _: &RenderContext<'_>| {
                u.morale_damage_done
            }),
            Column::new("Morale Damage Taken", |u: &UnitType, _: &RenderContext<'_>| {
                u.morale_damage_taken
            }),
            Column::new("Movement Speed", |u: &UnitType, _: &RenderContext<'_>| {
                u.movement_speed
            }),
            Column::new("Strength Damage Done", |u: &UnitType, _: &RenderContext<'_>| {
                u.strength_damage_done
            }),
            Column::new("Strength Damage Taken", |u: &UnitType, _: &RenderContext<'_>| {
                u.strength_damage_taken
            }),
            Column::new("Supply Weight", |u: &UnitType, _: &RenderContext<'_>| {
                u.supply_weight
            }),
            Column::new("Transport Capacity", |u: &UnitType, _: &RenderContext<'_>| {
                u.transport_capacity
            }),
            Column::new("Upgrades To Only", |u: &UnitType, ctx: &RenderContext<'_>| {
                ctx.reference(&ctx.data.unit_types, u.upgrades_to_only.as_deref())
            }),
            Column::yes_no("Use Ship Names", |u: &UnitType| u.use_ship_names),
        ]
    }

    pub fn unit_types_page(&self) -> Result<Page> {
        let units = sorted_by_display_name(self.data().unit_types()?.values());
        Ok(self.flat_table_page(TableKind::UnitTypes, units, &self.unit_type_columns()))
    }

    fn parliament_issue_columns(&self) -> Vec<Column<'_, ParliamentIssue>> {
        vec![
            Column::new(
                "Parliament issue",
                move |i: &ParliamentIssue, _: &RenderContext<'_>| self.titled_description(i),
            ),
            Column::new("Requirements", |i: &ParliamentIssue, ctx: &RenderContext<'_>| {
                format!(
                    "{}\n{}",
                    ctx.trigger(i.potential.as_ref()),
                    ctx.trigger(i.allow.as_ref())
                )
                .trim()
                .to_string()
            }),
            Column::new("Chance", |i: &ParliamentIssue, ctx: &RenderContext<'_>| {
                ctx.script_value(i.chance.as_ref())
            }),
            Column::new("Estate", |i: &ParliamentIssue, ctx: &RenderContext<'_>| {
                ctx.reference(&ctx.data.estates, i.estate.as_deref())
            }),
            Column::new(
                "Modifiers while the issue is debated",
                |i: &ParliamentIssue, ctx: &RenderContext<'_>| {
                    ctx.modifiers(&i.modifier_when_in_debate)
                },
            ),
            Column::new(
                "Effects if the issue is being resolved",
                |i: &ParliamentIssue, ctx: &RenderContext<'_>| {
                    ctx.effect(i.on_debate_passed.as_ref())
                },
            ),
            Column::new(
                "Effects if the issue fails",
                |i: &ParliamentIssue, ctx: &RenderContext<'_>| {
                    ctx.effect(i.on_debate_failed.as_ref())
                },
            ),
        ]
    }

    /// Issues debated in country parliaments, by display name.
    pub fn parliament_issues_page(&self) -> Result<Page> {
        let issues = sorted_by_display_name(
            self.data()
                .parliament_issues()?
                .values()
                .filter(|issue| issue.issue_type == "country"),
        );
        Ok(self.flat_table_page(
            TableKind::ParliamentIssues,
            issues,
            &self.parliament_issue_columns(),
        ))
    }
}
