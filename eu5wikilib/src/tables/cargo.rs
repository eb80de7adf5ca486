//! Template calls for the structured-data store: one call per building or
//! building category, every attribute as a parameter.

use super::{Generator, Page, TableKind};
use crate::data::{Building, BuildingCategory, Entity};
use crate::format::wiki::wiki_list;
use crate::output::cargo::{render_template_calls, TemplateCall};
use crate::output::section::Section;
use crate::query::sorted_by_display_name;
use crate::Result;

fn flag_value(value: bool) -> i64 {
    i64::from(value)
}

impl<'a> Generator<'a> {
    pub fn building_template_call(&self, building: &Building) -> TemplateCall {
        let ctx = &self.ctx;
        let data = self.data();
        let obsolete: Vec<String> = building
            .obsolete
            .iter()
            .map(|key| ctx.display_name(&data.buildings, Some(key)))
            .collect();
        let unique: Vec<String> = building
            .unique_production_methods
            .iter()
            .map(|methods| wiki_list(methods.iter().map(|pm| self.production_method(pm)), 1))
            .collect();
        let possible: Vec<String> = building
            .possible_production_methods
            .iter()
            .map(|pm| self.production_method(pm))
            .collect();

        TemplateCall::new("Building", building.display_name())
            .param("name", building.name())
            .param("display_name", building.display_name())
            .param("description", building.description())
            .param("icon", building.wiki_filename())
            .param("modifier", ctx.modifiers(&building.modifier))
            .param("allow", ctx.trigger(building.allow.as_ref()))
            .param("build_time", building.build_time)
            .param("can_destroy", ctx.trigger(building.can_destroy.as_ref()))
            .param(
                "capital_country_modifier",
                ctx.modifiers(&building.capital_country_modifier),
            )
            .param("capital_modifier", ctx.modifiers(&building.capital_modifier))
            .param(
                "category",
                ctx.display_name(&data.building_categories, Some(&building.category)),
            )
            .param("city", flag_value(building.city))
            .param(
                "construction_demand",
                ctx.price(building.construction_demand.as_ref()),
            )
            .param(
                "country_potential",
                ctx.trigger(building.country_potential.as_ref()),
            )
            .param("destroy_price", ctx.price(building.destroy_price.as_ref()))
            .param("employment_size", building.employment_size)
            .param(
                "estate",
                ctx.display_name(&data.estates, building.estate.as_deref()),
            )
            .param(
                "foreign_country_modifier",
                ctx.modifiers(&building.foreign_country_modifier),
            )
            .param(
                "location_potential",
                ctx.trigger(building.location_potential.as_ref()),
            )
            .param(
                "market_center_modifier",
                ctx.modifiers(&building.market_center_modifier),
            )
            .param(
                "max_levels",
                building.max_levels.as_ref().map(|levels| levels.to_string()),
            )
            .param("obsolete", obsolete.join(";"))
            .param("on_built", ctx.effect(building.on_built.as_ref()))
            .param("on_destroyed", ctx.effect(building.on_destroyed.as_ref()))
            .param(
                "pop_type",
                ctx.display_name(&data.pop_types, building.pop_type.as_deref()),
            )
            .param("possible_production_methods", possible.join(";"))
            .param("price", ctx.price(building.price.as_ref()))
            .param("raw_modifier", ctx.modifiers(&building.raw_modifier))
            .param("remove_if", ctx.trigger(building.remove_if.as_ref()))
            .param("rural_settlement", flag_value(building.rural_settlement))
            .param("town", flag_value(building.town))
            .param("unique_production_methods", unique.join(";"))
            .param("notes", self.building_notes(building))
    }

    pub fn buildings_cargo_page(&self) -> Result<Page> {
        let buildings = self.data().buildings()?;
        let calls: Vec<TemplateCall> = sorted_by_display_name(buildings.values())
            .into_iter()
            .map(|building| self.building_template_call(building))
            .collect();
        let mut page = Page::unmarked();
        page.section(Section::new(
            TableKind::BuildingsCargo.name(),
            render_template_calls(&calls),
        ));
        Ok(page)
    }

    pub fn building_categories_cargo_page(&self) -> Result<Page> {
        let categories = self.data().building_categories()?;
        let calls: Vec<TemplateCall> = sorted_by_display_name(categories.values())
            .into_iter()
            .map(|category: &BuildingCategory| {
                TemplateCall::new("Building_category", category.display_name())
                    .param("name", category.name())
                    .param("display_name", category.display_name())
                    .param("description", category.description())
                    .param("icon", category.wiki_filename())
            })
            .collect();
        let mut page = Page::unmarked();
        page.section(Section::new(
            TableKind::BuildingCategoriesCargo.name(),
            render_template_calls(&calls),
        ));
        Ok(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{EntityMeta, GameData};
    use crate::format::PlainFormatter;
    use crate::options::GeneratorConfig;
    use crate::tables::fixtures::named;

    fn sample_data() -> GameData {
        let temple = Building {
            meta: EntityMeta::new("temple").display("Temple"),
            category: "religious_category".to_string(),
            town: true,
            obsolete: vec!["shrine".to_string()],
            ..Default::default()
        };
        let shrine = Building {
            meta: EntityMeta::new("shrine").display("Shrine"),
            category: "religious_category".to_string(),
            city: true,
            pop_size_created: 2,
            ..Default::default()
        };
        GameData {
            buildings: Some(
                [("temple".to_string(), temple), ("shrine".to_string(), shrine)]
                    .into_iter()
                    .collect(),
            ),
            building_categories: named(&[
                ("religious_category", "Religious"),
                ("military_category", "Military"),
            ]),
            ..Default::default()
        }
    }

    #[test]
    fn test_building_calls_sorted_with_flags() {
        let data = sample_data();
        let formatter = PlainFormatter::new();
        let config = GeneratorConfig::new();
        let generator = Generator::new(&data, &formatter, &config);
        let generated = generator.generate(TableKind::BuildingsCargo).unwrap();

        let page = &generated.page;
        assert!(page.find("=== Shrine ===").unwrap() < page.find("=== Temple ===").unwrap());
        assert!(page.contains("|name=temple\n"));
        assert!(page.contains("|category=Religious\n"));
        assert!(page.contains("|obsolete=Shrine\n"));
        assert!(page.contains("|town=1\n|unique_production_methods="));
        assert!(page.contains("|notes=* Creates 2 pops"));
        assert!(!page.contains("<section"));
        assert_eq!(generated.sections.keys().collect::<Vec<_>>(), vec!["buildings_cargo"]);
    }

    #[test]
    fn test_category_calls() {
        let data = sample_data();
        let formatter = PlainFormatter::new();
        let config = GeneratorConfig::new();
        let generator = Generator::new(&data, &formatter, &config);
        let generated = generator
            .generate(TableKind::BuildingCategoriesCargo)
            .unwrap();
        assert_eq!(
            generated.page,
            "=== Military ===\n{{Building_category\n|name=military_category\n|display_name=Military\n\
             |description=\n|icon=Military.png\n}}\n\
             === Religious ===\n{{Building_category\n|name=religious_category\n|display_name=Religious\n\
             |description=\n|icon=Religious.png\n}}"
        );
    }
}
