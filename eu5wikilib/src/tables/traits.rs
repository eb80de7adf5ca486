use super::{Generator, Page};
use crate::data::CharacterTrait;
use crate::output::section::Section;
use crate::output::table::make_wiki_table;
use crate::query::{group_by, sorted_by_display_name};
use crate::render::{render_rows, Column, RenderContext};
use crate::Result;

impl<'a> Generator<'a> {
    fn trait_columns(&self) -> Vec<Column<'_, CharacterTrait>> {
        vec![
            Column::new("Name", move |t: &CharacterTrait, _: &RenderContext<'_>| {
                self.name_iconbox(t, true)
            }),
            Column::new("Modifier", |t: &CharacterTrait, ctx: &RenderContext<'_>| {
                ctx.modifiers(&t.modifier)
            }),
            Column::new("Requirements", |t: &CharacterTrait, ctx: &RenderContext<'_>| {
                ctx.trigger(t.allow.as_ref())
            }),
            Column::new("Chance", |t: &CharacterTrait, ctx: &RenderContext<'_>| {
                ctx.tree_keys(t.chance.as_ref())
            }),
        ]
    }

    /// One table per trait category, in first-seen category order.
    pub fn traits_page(&self) -> Result<Page> {
        let traits = sorted_by_display_name(self.data().traits()?.values());
        let columns = self.trait_columns();
        let mut page = Page::new();
        for (category, members) in group_by(traits, |t: &CharacterTrait| t.category.clone()) {
            let key = format!("traits_{}", category);
            page.heading(&key, 3);
            let table = make_wiki_table(render_rows(members, &columns, &self.ctx), &self.table_options());
            page.section(Section::new(key, table).versioned());
        }
        Ok(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Entity, EntityMeta, GameData, Modifier, ScriptTree};
    use crate::format::PlainFormatter;
    use crate::options::GeneratorConfig;
    use crate::tables::TableKind;

    fn character_trait(key: &str, display: &str, category: &str) -> CharacterTrait {
        CharacterTrait {
            meta: EntityMeta::new(key).display(display),
            category: category.to_string(),
            modifier: vec![Modifier::new("diplomatic_skill", 1.0)],
            ..Default::default()
        }
    }

    #[test]
    fn test_traits_by_category() {
        let mut brave = character_trait("brave", "Brave", "ruler");
        brave.chance = Some(ScriptTree::new().with("base", 10_i64).with("modifier", ScriptTree::new()));
        let data = GameData {
            traits: Some(
                [
                    character_trait("zealous", "Zealous", "ruler"),
                    character_trait("sea_dog", "Sea Dog", "admiral"),
                    brave,
                ]
                .into_iter()
                .map(|t| (t.name().to_string(), t))
                .collect(),
            ),
            ..Default::default()
        };
        let formatter = PlainFormatter::new();
        let config = GeneratorConfig::new().game_version("1.0");
        let generator = Generator::new(&data, &formatter, &config);
        let generated = generator.generate(TableKind::Traits).unwrap();

        let keys: Vec<&str> = generated.sections.keys().collect();
        assert_eq!(keys, vec!["traits_ruler", "traits_admiral"]);
        assert!(generated.page.starts_with(
            "=== traits_ruler ===\n<section begin=autogenerated_traits_ruler/>\n{{Version|1.0}}\n{|"
        ));
        let ruler = &generated.sections.get("traits_ruler").unwrap().body;
        assert!(ruler.find("Brave").unwrap() < ruler.find("Zealous").unwrap());
        assert!(ruler.contains("* base: ...\n* modifier: ..."));
        assert!(!ruler.contains("Requirements"));
    }
}
