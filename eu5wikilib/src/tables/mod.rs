//! Generators: one entry point per wiki page family.
//!
//! Every generator reads the loaded [`GameData`] through a [`Generator`],
//! groups and sorts with [`crate::query`], renders rows with
//! [`crate::render`] and assembles a [`Page`]. A page is a sequence of
//! headings, free text and named sections; the sections are what external
//! pages splice in by key.
//!
//! ## Example
//!
//! ```rust,ignore
//! use eu5wikilib::tables::{Generator, TableKind};
//!
//! let generator = Generator::new(&data, &formatter, &config);
//! let generated = generator.generate(TableKind::Buildings)?;
//! for section in generated.sections.iter() {
//!     println!("{}", section.key);
//! }
//! ```

pub mod buildings;
pub mod cargo;
pub mod concepts;
pub mod countries;
pub mod diplomacy;
pub mod goods;
pub mod laws;
pub mod misc;
pub mod privileges;
pub mod reforms;
pub mod traits;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use tracing::info;

use crate::data::{Entity, GameData};
use crate::error::WikiError;
use crate::format::wiki::{section_heading, Iconbox};
use crate::format::AttributeFormatter;
use crate::options::GeneratorConfig;
use crate::output::section::{Section, SectionOptions, SectionSet};
use crate::output::table::TableOptions;
use crate::render::RenderContext;
use crate::Result;

/// The available generators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TableKind {
    Buildings,
    BuildingsCargo,
    BuildingCategoriesCargo,
    CasusBelli,
    Concepts,
    Countries,
    Cultures,
    EstatePrivileges,
    Goods,
    GoodsTags,
    Laws,
    ParliamentIssues,
    PeaceTreaties,
    Reforms,
    Religions,
    ReligiousAspects,
    ReligiousSchools,
    SubjectTypes,
    Traits,
    UnitTypes,
    Wargoals,
}

impl TableKind {
    pub const ALL: [TableKind; 21] = [
        TableKind::Buildings,
        TableKind::BuildingsCargo,
        TableKind::BuildingCategoriesCargo,
        TableKind::CasusBelli,
        TableKind::Concepts,
        TableKind::Countries,
        TableKind::Cultures,
        TableKind::EstatePrivileges,
        TableKind::Goods,
        TableKind::GoodsTags,
        TableKind::Laws,
        TableKind::ParliamentIssues,
        TableKind::PeaceTreaties,
        TableKind::Reforms,
        TableKind::Religions,
        TableKind::ReligiousAspects,
        TableKind::ReligiousSchools,
        TableKind::SubjectTypes,
        TableKind::Traits,
        TableKind::UnitTypes,
        TableKind::Wargoals,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            TableKind::Buildings => "buildings",
            TableKind::BuildingsCargo => "buildings_cargo",
            TableKind::BuildingCategoriesCargo => "building_categories_cargo",
            TableKind::CasusBelli => "casus_belli",
            TableKind::Concepts => "concepts",
            TableKind::Countries => "countries",
            TableKind::Cultures => "cultures",
            TableKind::EstatePrivileges => "estate_privileges",
            TableKind::Goods => "goods",
            TableKind::GoodsTags => "goods_tags",
            TableKind::Laws => "laws",
            TableKind::ParliamentIssues => "parliament_issues",
            TableKind::PeaceTreaties => "peace_treaties",
            TableKind::Reforms => "reforms",
            TableKind::Religions => "religions",
            TableKind::ReligiousAspects => "religious_aspects",
            TableKind::ReligiousSchools => "religious_schools",
            TableKind::SubjectTypes => "subject_types",
            TableKind::Traits => "traits",
            TableKind::UnitTypes => "unit_types",
            TableKind::Wargoals => "wargoals",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            TableKind::Buildings => "Buildings by location type and category",
            TableKind::BuildingsCargo => "Building template calls",
            TableKind::BuildingCategoriesCargo => "Building category template calls",
            TableKind::CasusBelli => "Casus belli",
            TableKind::Concepts => "Game concept descriptions by family",
            TableKind::Countries => "Countries by subcontinent and region",
            TableKind::Cultures => "Cultures by culture group",
            TableKind::EstatePrivileges => "Estate privileges by estate",
            TableKind::Goods => "Goods by category",
            TableKind::GoodsTags => "Lists of goods sharing a tag",
            TableKind::Laws => "Laws and their policies by category",
            TableKind::ParliamentIssues => "Country parliament issues",
            TableKind::PeaceTreaties => "Peace treaty terms",
            TableKind::Reforms => "Government reforms",
            TableKind::Religions => "Religions",
            TableKind::ReligiousAspects => "Religious aspects",
            TableKind::ReligiousSchools => "Religious schools",
            TableKind::SubjectTypes => "Subject types by level",
            TableKind::Traits => "Character traits by category",
            TableKind::UnitTypes => "Unit types",
            TableKind::Wargoals => "Wargoals",
        }
    }

    /// Whether the outputs are wrapped in begin/end section markers and can
    /// be spliced into existing pages.
    pub fn uses_markers(&self) -> bool {
        !matches!(
            self,
            TableKind::BuildingsCargo
                | TableKind::BuildingCategoriesCargo
                | TableKind::CasusBelli
                | TableKind::Countries
                | TableKind::Cultures
                | TableKind::ParliamentIssues
                | TableKind::PeaceTreaties
                | TableKind::Reforms
                | TableKind::Religions
                | TableKind::ReligiousAspects
                | TableKind::ReligiousSchools
                | TableKind::SubjectTypes
                | TableKind::UnitTypes
                | TableKind::Wargoals
        )
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for TableKind {
    type Err = WikiError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().replace('-', "_").to_lowercase();
        TableKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == wanted)
            .ok_or_else(|| WikiError::UnknownTable(s.to_string()))
    }
}

/// One piece of a generated page.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Text(String),
    Section(Section),
}

/// Headings, free text and named sections in page order.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    blocks: Vec<Block>,
    markers: bool,
}

impl Default for Page {
    fn default() -> Self {
        Page {
            blocks: Vec::new(),
            markers: true,
        }
    }
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    /// A page whose named outputs are written out without markers.
    pub fn unmarked() -> Self {
        Page {
            blocks: Vec::new(),
            markers: false,
        }
    }

    pub fn heading(&mut self, text: &str, level: usize) {
        self.text(section_heading(text, level));
    }

    pub fn text(&mut self, text: impl Into<String>) {
        self.blocks.push(Block::Text(text.into()));
    }

    pub fn section(&mut self, section: Section) {
        self.blocks.push(Block::Section(section));
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// The named sections; two sections with one key are an error.
    pub fn sections(&self) -> Result<SectionSet> {
        let mut set = SectionSet::new();
        for block in &self.blocks {
            if let Block::Section(section) = block {
                set.insert(section.clone())?;
            }
        }
        Ok(set)
    }

    pub fn render(&self, options: &SectionOptions) -> String {
        self.blocks
            .iter()
            .map(|block| match block {
                Block::Text(text) => text.clone(),
                Block::Section(section) if self.markers => options.wrap(section),
                Block::Section(section) => section.body.clone(),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// The result of one generator run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Generated {
    pub table: TableKind,
    /// Section key (or output name) → body, in generation order
    pub sections: SectionSet,
    /// The whole page with headings and wrapped sections
    pub page: String,
}

/// Shared state of every generator: the data, the formatter and the
/// configuration.
pub struct Generator<'a> {
    ctx: RenderContext<'a>,
    config: &'a GeneratorConfig,
}

impl<'a> Generator<'a> {
    pub fn new(
        data: &'a GameData,
        formatter: &'a dyn AttributeFormatter,
        config: &'a GeneratorConfig,
    ) -> Self {
        Generator {
            ctx: RenderContext::new(data, formatter),
            config,
        }
    }

    pub fn data(&self) -> &'a GameData {
        self.ctx.data
    }

    pub fn context(&self) -> &RenderContext<'a> {
        &self.ctx
    }

    pub fn config(&self) -> &'a GeneratorConfig {
        self.config
    }

    /// Run one generator.
    pub fn generate(&self, table: TableKind) -> Result<Generated> {
        let page = match table {
            TableKind::Buildings => self.buildings_page()?,
            TableKind::BuildingsCargo => self.buildings_cargo_page()?,
            TableKind::BuildingCategoriesCargo => self.building_categories_cargo_page()?,
            TableKind::CasusBelli => self.casus_belli_page()?,
            TableKind::Concepts => self.concepts_page()?,
            TableKind::Countries => self.countries_page()?,
            TableKind::Cultures => self.cultures_page()?,
            TableKind::EstatePrivileges => self.privileges_page()?,
            TableKind::Goods => self.goods_page()?,
            TableKind::GoodsTags => self.goods_tags_page()?,
            TableKind::Laws => self.laws_page()?,
            TableKind::ParliamentIssues => self.parliament_issues_page()?,
            TableKind::PeaceTreaties => self.peace_treaties_page()?,
            TableKind::Reforms => self.reforms_page()?,
            TableKind::Religions => self.religions_page()?,
            TableKind::ReligiousAspects => self.religious_aspects_page()?,
            TableKind::ReligiousSchools => self.religious_schools_page()?,
            TableKind::SubjectTypes => self.subject_types_page()?,
            TableKind::Traits => self.traits_page()?,
            TableKind::UnitTypes => self.unit_types_page()?,
            TableKind::Wargoals => self.wargoals_page()?,
        };
        let sections = page.sections()?;
        info!(table = %table, sections = sections.len(), "generated");
        Ok(Generated {
            table,
            page: page.render(&self.config.sections),
            sections,
        })
    }

    /// Options shared by every table: pruned, one line per cell.
    pub(crate) fn table_options(&self) -> TableOptions {
        TableOptions::new()
    }

    /// The standard name cell: a 300px iconbox with description and image.
    pub(crate) fn name_iconbox<E: Entity>(&self, entity: &E, hide_description: bool) -> String {
        let mut iconbox =
            Iconbox::new(entity.display_name(), entity.description()).param("w", "300px");
        if hide_description {
            iconbox = iconbox.param("desc_class", "hidem");
        }
        iconbox.param("image", entity.wiki_filename()).render()
    }

    /// Group header iconbox: description and image only.
    pub(crate) fn header_iconbox<E: Entity>(&self, entity: &E) -> String {
        Iconbox::new("", entity.description())
            .param("image", entity.wiki_filename())
            .render()
    }

    /// Bold name over a small italic description that hides on mobile.
    pub(crate) fn titled_description<E: Entity>(&self, entity: &E) -> String {
        format!(
            "'''{}'''\n\n<div class=\"hidem\" style=\"font-style: italic; font-size:smaller;\">{}</div>",
            entity.display_name(),
            entity.description()
        )
    }
}

/// Cell prefix that colours the background of a table cell.
pub(crate) fn background_style(css: Option<String>) -> String {
    format!(
        "style=\"background-color: {}\" | ",
        css.unwrap_or_else(|| "white".to_string())
    )
}
