//! Building tables, grouped by where a building can be built and by
//! category.

use indexmap::IndexMap;
use tracing::trace;

use super::{Generator, Page};
use crate::data::{Building, BuildingCategory, Entity, EntityMeta, GameData, ScriptTree};
use crate::format::wiki::{format_number, icon_template, merge_sections, wiki_list};
use crate::options::BuildingDefaults;
use crate::output::section::Section;
use crate::output::table::{make_wiki_table, Row};
use crate::query::{group_by, sorted_by_display_name};
use crate::render::{render_rows, Column, NoteRule, NoteTable, RenderContext};
use crate::Result;

/// Name of the settlement combination a building is allowed in.
pub fn location_type(building: &Building) -> &'static str {
    match (building.city, building.town, building.rural_settlement) {
        (true, true, true) => "common",
        (false, false, true) => "rural",
        (false, true, false) => "town",
        (true, false, false) => "city",
        (true, true, false) => "town+city",
        (false, true, true) => "town+rural",
        (true, false, true) => "city+rural",
        (false, false, false) => "nowhere",
    }
}

/// Notes for building attributes that differ from the declared defaults,
/// in display order.
pub fn building_note_table<'r>() -> NoteTable<'r, Building, BuildingDefaults> {
    NoteTable::new()
        .rule(NoteRule::fixed(
            "always_add_demands",
            |b: &Building| b.always_add_demands,
            |d: &BuildingDefaults| d.always_add_demands,
            "Demand does not scale with workers",
        ))
        .rule(NoteRule::fixed(
            "AI_ignore_available_worker_flag",
            |b: &Building| b.ai_ignore_available_worker_flag,
            |d: &BuildingDefaults| d.ai_ignore_available_worker_flag,
            "Build by AI even without available workers",
        ))
        .rule(NoteRule::fixed(
            "AI_optimization_flag_coastal",
            |b: &Building| b.ai_optimization_flag_coastal,
            |d: &BuildingDefaults| d.ai_optimization_flag_coastal,
            "",
        ))
        .rule(NoteRule::fixed(
            "allow_wrong_startup",
            |b: &Building| b.allow_wrong_startup,
            |d: &BuildingDefaults| d.allow_wrong_startup,
            "<tt>allow_wrong_startup</tt>",
        ))
        .rule(NoteRule::fixed(
            "can_close",
            |b: &Building| b.can_close,
            |d: &BuildingDefaults| d.can_close,
            "Cannot be closed",
        ))
        .rule(NoteRule::new(
            "conversion_religion",
            |b: &Building| b.conversion_religion.clone(),
            |d: &BuildingDefaults| d.conversion_religion.clone(),
            |religion: &Option<String>, ctx: &RenderContext<'_>| {
                format!(
                    "Converts pops to {}",
                    ctx.display_name(&ctx.data.religions, religion.as_deref())
                )
            },
        ))
        .rule(NoteRule::fixed(
            "forbidden_for_estates",
            |b: &Building| b.forbidden_for_estates,
            |d: &BuildingDefaults| d.forbidden_for_estates,
            "Cannot be build by estates",
        ))
        .rule(NoteRule::new(
            "increase_per_level_cost",
            |b: &Building| b.increase_per_level_cost,
            |d: &BuildingDefaults| d.increase_per_level_cost,
            |cost: &f64, ctx: &RenderContext<'_>| {
                format!(
                    "Cost changes by {} per level",
                    ctx.formatter.add_red_green(*cost, false, true, true)
                )
            },
        ))
        .rule(NoteRule::new(
            "in_empty",
            |b: &Building| b.in_empty.clone(),
            |d: &BuildingDefaults| d.in_empty.clone(),
            |in_empty: &String, _: &RenderContext<'_>| {
                let qualifier = match in_empty.as_str() {
                    "empty" => "only",
                    "any" => "also",
                    "owned" => "not",
                    other => {
                        trace!(value = other, "unknown in_empty value");
                        return String::new();
                    }
                };
                format!("Can {} be built in empty locations", qualifier)
            },
        ))
        .rule(NoteRule::fixed(
            "is_foreign",
            |b: &Building| b.is_foreign,
            |d: &BuildingDefaults| d.is_foreign,
            "Foreign building",
        ))
        .rule(NoteRule::fixed(
            "lifts_fog_of_war",
            |b: &Building| b.lifts_fog_of_war,
            |d: &BuildingDefaults| d.lifts_fog_of_war,
            "Lifts fog of war",
        ))
        .rule(NoteRule::fixed(
            "need_good_relation",
            |b: &Building| b.need_good_relation,
            |d: &BuildingDefaults| d.need_good_relation,
            "Needs good relations when building in foreign provinces",
        ))
        .rule(NoteRule::new(
            "pop_size_created",
            |b: &Building| b.pop_size_created,
            |d: &BuildingDefaults| d.pop_size_created,
            |pops: &i64, _: &RenderContext<'_>| {
                format!(
                    "Creates {} pops when building(taken from the capital of the owner)",
                    pops
                )
            },
        ))
        .rule(NoteRule::fixed(
            "stronger_power_projection",
            |b: &Building| b.stronger_power_projection,
            |d: &BuildingDefaults| d.stronger_power_projection,
            "Requires more power projection to construct in a foreign location",
        ))
        .rule(NoteRule::new(
            "on_built",
            |b: &Building| b.on_built.clone(),
            |_: &BuildingDefaults| None,
            |effect: &Option<ScriptTree>, ctx: &RenderContext<'_>| {
                format!("'''On Built:'''\n{}", ctx.effect(effect.as_ref()))
            },
        ))
        .rule(NoteRule::new(
            "on_destroyed",
            |b: &Building| b.on_destroyed.clone(),
            |_: &BuildingDefaults| None,
            |effect: &Option<ScriptTree>, ctx: &RenderContext<'_>| {
                format!("'''On Destroyed:'''\n{}", ctx.effect(effect.as_ref()))
            },
        ))
}

/// Two triggers that apply together, one after the other.
fn joined_triggers(first: String, second: String) -> String {
    match (first.is_empty(), second.is_empty()) {
        (true, _) => second,
        (_, true) => first,
        _ => format!("{}\n{}", first, second),
    }
}

impl<'a> Generator<'a> {
    /// Buildings by location type (first-seen order), then by category
    /// (first-seen order within the type), each bucket sorted by display
    /// name.
    pub fn building_groups(&self) -> Result<IndexMap<&'static str, IndexMap<String, Vec<&'a Building>>>> {
        let buildings = self.data().buildings()?;
        Ok(group_by(buildings.values(), location_type)
            .into_iter()
            .map(|(location, members)| {
                let by_category = group_by(members, |b: &Building| b.category.clone())
                    .into_iter()
                    .map(|(category, members)| (category, sorted_by_display_name(members)))
                    .collect();
                (location, by_category)
            })
            .collect())
    }

    pub fn buildings_page(&self) -> Result<Page> {
        let mut page = Page::new();
        for (location, categories) in self.building_groups()? {
            page.heading(&format!("{} buildings", location), 2);
            for (category_key, buildings) in categories {
                let category = self.building_category(&category_key);
                page.heading(category.display_name(), 3);
                let body = format!(
                    "{}\n{}",
                    self.header_iconbox(&category),
                    self.building_table(&buildings)
                );
                page.section(
                    Section::new(format!("buildings_{}_{}", location, category_key), body).versioned(),
                );
            }
        }
        Ok(page)
    }

    fn building_category(&self, key: &str) -> BuildingCategory {
        GameData::lookup(&self.data().building_categories, key)
            .cloned()
            .unwrap_or_else(|| BuildingCategory {
                meta: EntityMeta::new(key),
            })
    }

    pub fn building_rows(&self, buildings: &[&Building]) -> Vec<Row> {
        render_rows(buildings.iter().copied(), &self.building_columns(), &self.ctx)
    }

    pub fn building_table(&self, buildings: &[&Building]) -> String {
        make_wiki_table(self.building_rows(buildings), &self.table_options())
    }

    pub fn building_notes(&self, building: &Building) -> String {
        building_note_table().render(building, &self.config.buildings, &self.ctx)
    }

    fn building_columns(&self) -> Vec<Column<'_, Building>> {
        vec![
            Column::new("Name", move |b: &Building, _: &RenderContext<'_>| {
                self.name_iconbox(b, true)
            }),
            Column::new("Modifier", |b: &Building, ctx: &RenderContext<'_>| {
                ctx.modifiers(&b.modifier)
            }),
            Column::new("Requirements", |b: &Building, ctx: &RenderContext<'_>| {
                merge_sections([
                    (
                        "Location",
                        joined_triggers(
                            ctx.trigger(b.location_potential.as_ref()),
                            ctx.trigger(b.allow.as_ref()),
                        ),
                    ),
                    ("Country", ctx.trigger(b.country_potential.as_ref())),
                    ("To destroy", ctx.trigger(b.can_destroy.as_ref())),
                    ("To keep", ctx.trigger(b.remove_if.as_ref())),
                ])
            }),
            Column::new("Build Time", |b: &Building, _: &RenderContext<'_>| b.build_time),
            Column::new("Modifiers", |b: &Building, ctx: &RenderContext<'_>| {
                merge_sections([
                    ("Country (if in Capital)", ctx.modifiers(&b.capital_country_modifier)),
                    ("Location (if in Capital)", ctx.modifiers(&b.capital_modifier)),
                    ("Location (if in Market Center)", ctx.modifiers(&b.market_center_modifier)),
                    ("Building owner", ctx.modifiers(&b.foreign_country_modifier)),
                    ("Raw Modifier", ctx.modifiers(&b.raw_modifier)),
                ])
            }),
            Column::new("Construction Demand", |b: &Building, ctx: &RenderContext<'_>| {
                ctx.price(b.construction_demand.as_ref())
            }),
            Column::new("Destroy Price", |b: &Building, ctx: &RenderContext<'_>| {
                ctx.price(b.destroy_price.as_ref())
            }),
            Column::new("Employment", |b: &Building, ctx: &RenderContext<'_>| {
                employment(b, ctx)
            }),
            Column::new("Estate", |b: &Building, ctx: &RenderContext<'_>| {
                ctx.reference(&ctx.data.estates, b.estate.as_deref())
            }),
            Column::new("Max Levels", |b: &Building, _: &RenderContext<'_>| {
                b.max_levels.as_ref().map(|levels| levels.to_string())
            }),
            Column::new("Obsolete", |b: &Building, ctx: &RenderContext<'_>| {
                ctx.references(&ctx.data.buildings, &b.obsolete)
            }),
            Column::new("Production Methods", move |b: &Building, _: &RenderContext<'_>| {
                self.production_methods(b)
            }),
            Column::new("Price", |b: &Building, ctx: &RenderContext<'_>| {
                ctx.price(b.price.as_ref())
            }),
            Column::new("Notes", move |b: &Building, _: &RenderContext<'_>| {
                self.building_notes(b)
            }),
        ]
    }

    /// Each unique method list, then the freely selectable methods, as
    /// bullet lists separated by rules.
    pub(crate) fn production_methods(&self, building: &Building) -> String {
        let mut lists: Vec<&[String]> = building
            .unique_production_methods
            .iter()
            .map(Vec::as_slice)
            .collect();
        if !building.possible_production_methods.is_empty() {
            lists.push(&building.possible_production_methods);
        }
        lists
            .into_iter()
            .map(|methods| wiki_list(methods.iter().map(|key| self.production_method(key)), 1))
            .collect::<Vec<_>>()
            .join("\n----\n")
    }

    /// `Name: inputs → output`, with goods as icons.
    pub(crate) fn production_method(&self, key: &str) -> String {
        let Some(method) = GameData::lookup(&self.data().production_methods, key) else {
            return self.data().localize_or_key(key);
        };
        let mut parts = Vec::new();
        if !method.input.is_empty() {
            parts.push(self.ctx.formatter.format_goods(&method.input, true));
        }
        if let Some(produced) = &method.produced {
            parts.push(format!(
                "→ {} {}",
                format_number(method.output),
                icon_template(produced)
            ));
        }
        if parts.is_empty() {
            method.display_name().to_string()
        } else {
            format!("{}: {}", method.display_name(), parts.join(" "))
        }
    }
}

/// `{size} {pop icon}`; no workers and no pop type is empty.
fn employment(building: &Building, ctx: &RenderContext<'_>) -> String {
    let pop = building.pop_type.as_deref().map(|key| {
        GameData::lookup(&ctx.data.pop_types, key)
            .map(|pop| pop.wiki_icon())
            .unwrap_or_else(|| icon_template(key))
    });
    match pop {
        Some(icon) => format!("{} {}", format_number(building.employment_size), icon),
        None if building.employment_size == 0.0 => String::new(),
        None => format_number(building.employment_size),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{PopType, ProductionMethod};
    use crate::format::PlainFormatter;
    use crate::options::GeneratorConfig;
    use crate::tables::fixtures::named;
    use crate::tables::TableKind;

    fn building(key: &str, display: &str) -> Building {
        Building {
            meta: EntityMeta::new(key).display(display).described("Makes things"),
            category: "production_category".to_string(),
            town: true,
            employment_size: 1000.0,
            pop_type: Some("laborers".to_string()),
            build_time: Some(180),
            ..Default::default()
        }
    }

    fn sample_data(buildings: Vec<Building>) -> GameData {
        GameData {
            buildings: Some(
                buildings
                    .into_iter()
                    .map(|b| (b.name().to_string(), b))
                    .collect(),
            ),
            building_categories: named(&[("production_category", "Production")]),
            pop_types: named::<PopType>(&[("laborers", "Laborers")]),
            ..Default::default()
        }
    }

    #[test]
    fn test_location_types() {
        let mut b = Building::default();
        assert_eq!(location_type(&b), "nowhere");
        b.town = true;
        b.city = true;
        assert_eq!(location_type(&b), "town+city");
        b.rural_settlement = true;
        assert_eq!(location_type(&b), "common");
        b.town = false;
        b.city = false;
        assert_eq!(location_type(&b), "rural");
    }

    #[test]
    fn test_pop_size_created_changes_only_the_notes() {
        let plain = building("workshop_a", "Workshop");
        let mut creating = building("workshop_b", "Workshop");
        creating.pop_size_created = 5;
        let data = sample_data(vec![plain, creating]);
        let formatter = PlainFormatter::new();
        let config = GeneratorConfig::new();
        let generator = Generator::new(&data, &formatter, &config);

        let buildings: Vec<&Building> = data.buildings().unwrap().values().collect();
        let rows = generator.building_rows(&buildings);
        assert_eq!(rows[0].text("Notes"), "");
        assert_eq!(
            rows[1].text("Notes"),
            "* Creates 5 pops when building(taken from the capital of the owner)"
        );
        for label in rows[0].labels().filter(|label| *label != "Notes") {
            assert_eq!(rows[0].get(label), rows[1].get(label), "column {}", label);
        }
        assert_eq!(
            rows[0].text("Employment"),
            "1000 [[File:Laborers.png|24px|Laborers]]"
        );
    }

    #[test]
    fn test_note_order_and_messages() {
        let mut b = building("mine", "Mine");
        b.can_close = false;
        b.in_empty = "empty".to_string();
        b.increase_per_level_cost = 0.25;
        b.always_add_demands = true;
        b.ai_optimization_flag_coastal = true;
        let data = sample_data(vec![]);
        let formatter = PlainFormatter::new();
        let config = GeneratorConfig::new();
        let generator = Generator::new(&data, &formatter, &config);
        assert_eq!(
            generator.building_notes(&b),
            "* Demand does not scale with workers\n\
             * Cannot be closed\n\
             * Cost changes by {{red|+25%}} per level\n\
             * Can only be built in empty locations"
        );
    }

    #[test]
    fn test_unknown_in_empty_value_is_skipped() {
        let mut b = building("mine", "Mine");
        b.in_empty = "sometimes".to_string();
        let data = sample_data(vec![]);
        let formatter = PlainFormatter::new();
        let config = GeneratorConfig::new();
        let generator = Generator::new(&data, &formatter, &config);
        assert_eq!(generator.building_notes(&b), "");
    }

    #[test]
    fn test_sections_keyed_by_location_and_category() {
        let mut temple = building("temple", "Temple");
        temple.city = true;
        temple.category = "religious_category".to_string();
        let data = sample_data(vec![temple, building("workshop", "Workshop")]);
        let formatter = PlainFormatter::new();
        let config = GeneratorConfig::new().game_version("1.0");
        let generator = Generator::new(&data, &formatter, &config);

        let generated = generator.generate(TableKind::Buildings).unwrap();
        let keys: Vec<&str> = generated.sections.keys().collect();
        assert_eq!(
            keys,
            vec!["buildings_town_city_religious_category", "buildings_town_production_category"]
        );
        let body = &generated.sections.get("buildings_town_production_category").unwrap().body;
        assert!(body.starts_with("{{iconbox||"));
        assert!(generated.page.contains("== town+city buildings =="));
        assert!(generated.page.contains("=== Production ==="));
        assert!(generated.page.contains("{{Version|1.0}}"));
    }

    #[test]
    fn test_production_methods_lists() {
        let mut b = building("mill", "Mill");
        b.unique_production_methods = vec![vec!["flour".to_string()]];
        b.possible_production_methods = vec!["unknown_pm".to_string()];
        let mut data = sample_data(vec![]);
        let mut methods = IndexMap::new();
        methods.insert(
            "flour".to_string(),
            ProductionMethod {
                meta: EntityMeta::new("flour").display("Flour"),
                input: [("wheat".to_string(), 2.0)].into_iter().collect(),
                produced: Some("bread".to_string()),
                output: 1.5,
            },
        );
        data.production_methods = Some(methods);
        let formatter = PlainFormatter::new();
        let config = GeneratorConfig::new();
        let generator = Generator::new(&data, &formatter, &config);
        assert_eq!(
            generator.production_methods(&b),
            "* Flour: 2 {{icon|wheat}} → 1.5 {{icon|bread}}\n----\n* unknown_pm"
        );
    }
}
