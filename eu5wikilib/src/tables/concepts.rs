//! Game concept descriptions, one inline section per concept.

use super::{Generator, Page};
use crate::data::{Entity, GameConcept, GameData};
use crate::output::section::Section;
use crate::Result;

impl<'a> Generator<'a> {
    /// Non-alias concepts ordered by family, then by display name.
    pub fn sorted_concepts(&self) -> Result<Vec<&'a GameConcept>> {
        let mut concepts: Vec<&GameConcept> = self
            .data()
            .game_concepts()?
            .values()
            .filter(|concept| !concept.is_alias)
            .collect();
        concepts.sort_by(|a, b| {
            a.family
                .as_deref()
                .unwrap_or("")
                .cmp(b.family.as_deref().unwrap_or(""))
                .then_with(|| a.display_name().cmp(b.display_name()))
        });
        Ok(concepts)
    }

    fn concept_hatnote(&self, concept: &GameConcept) -> Option<String> {
        if concept.alias.is_empty() {
            return None;
        }
        let names: Vec<String> = concept
            .alias
            .iter()
            .map(|key| match GameData::lookup(&self.data().game_concepts, key) {
                Some(alias) => alias.display_name().to_string(),
                None => self.data().localize_or_key(key),
            })
            .collect();
        let anchors: String = names
            .iter()
            .map(|name| format!("{{{{anchor|{}}}}}", name))
            .collect();
        Some(format!("{{{{hatnote|Aliases: {}}}}}{}", names.join(", "), anchors))
    }

    pub fn concepts_page(&self) -> Result<Page> {
        let mut page = Page::new();
        let mut family: Option<Option<&str>> = None;
        for concept in self.sorted_concepts()? {
            let current = concept.family.as_deref();
            if family != Some(current) {
                let heading = match current {
                    Some(key) => self.data().localize_or_key(key),
                    None => "Uncategorized".to_string(),
                };
                page.heading(&heading, 2);
                family = Some(current);
            }
            page.heading(concept.display_name(), 3);
            if let Some(hatnote) = self.concept_hatnote(concept) {
                page.text(hatnote);
            }
            let body = self
                .ctx
                .formatter
                .format_localization_text(concept.description());
            page.section(Section::new(format!("concept_{}", concept.name()), body).inline());
        }
        Ok(page)
    }
}

#[cfg(test)]
mod tests {
    use indexmap::IndexMap;

    use super::*;
    use crate::data::EntityMeta;
    use crate::format::PlainFormatter;
    use crate::options::GeneratorConfig;
    use crate::tables::TableKind;

    fn concept(key: &str, display: &str, family: Option<&str>) -> GameConcept {
        GameConcept {
            meta: EntityMeta::new(key)
                .display(display)
                .described(format!("About {}", display)),
            family: family.map(str::to_string),
            ..Default::default()
        }
    }

    fn sample_data() -> GameData {
        let mut control = concept("control", "Control", Some("government"));
        control.alias = vec!["controlled".to_string()];
        let mut alias = concept("controlled", "Controlled", Some("government"));
        alias.is_alias = true;
        let concepts: IndexMap<String, GameConcept> = [
            concept("trade", "Trade", Some("economy")),
            control,
            alias,
            concept("age", "Age", None),
            concept("cabinet", "Cabinet", Some("government")),
        ]
        .into_iter()
        .map(|c| (c.name().to_string(), c))
        .collect();
        let mut data = GameData {
            game_concepts: Some(concepts),
            ..Default::default()
        };
        data.localization
            .insert("government".to_string(), "Government".to_string());
        data
    }

    #[test]
    fn test_family_then_name_order_without_aliases() {
        let data = sample_data();
        let formatter = PlainFormatter::new();
        let config = GeneratorConfig::new();
        let generator = Generator::new(&data, &formatter, &config);
        let names: Vec<&str> = generator
            .sorted_concepts()
            .unwrap()
            .iter()
            .map(|c| c.name())
            .collect();
        assert_eq!(names, vec!["age", "trade", "cabinet", "control"]);
    }

    #[test]
    fn test_page_layout() {
        let data = sample_data();
        let formatter = PlainFormatter::new();
        let config = GeneratorConfig::new().game_version("1.0");
        let generator = Generator::new(&data, &formatter, &config);
        let generated = generator.generate(TableKind::Concepts).unwrap();

        assert!(generated.page.starts_with(
            "== Uncategorized ==\n=== Age ===\n\
             <section begin=autogenerated_concept_age/>About Age<section end=autogenerated_concept_age/>\n\
             == economy =="
        ));
        assert!(generated.page.contains(
            "=== Control ===\n{{hatnote|Aliases: Controlled}}{{anchor|Controlled}}\n<section begin"
        ));
        assert_eq!(generated.page.matches("== Government ==").count(), 1);
        assert!(!generated.page.contains("{{Version"));
        assert!(generated.sections.get("concept_controlled").is_none());
    }
}
