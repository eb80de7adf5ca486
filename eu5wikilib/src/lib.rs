//! # eu5wikilib
//!
//! Turns parsed Europa Universalis V game data into MediaWiki tables whose
//! generated parts can be regenerated in place on hand-edited pages.
//!
//! ## Overview
//!
//! Every table runs through the same four stages:
//!
//! - **Data**: typed entities loaded from a JSON dump ([`data`])
//! - **Query**: deterministic grouping and sorting ([`query`])
//! - **Render**: declarative per-entity columns and note tables ([`render`])
//! - **Output**: wiki tables, section markers and splicing ([`output`])
//!
//! The [`tables`] module wires the stages into one generator per page
//! family (buildings, laws, goods, countries, ...).
//!
//! ## Features
//!
//! - **Stable sections**: `<section begin=.../>` markers keyed by group, so
//!   a regenerated body can replace the old one without touching the text
//!   around it
//! - **Default suppression**: notes and cells only show values that differ
//!   from the declared defaults
//! - **Pluggable formatting**: triggers, effects and modifiers go through an
//!   [`AttributeFormatter`]; [`PlainFormatter`] works without game knowledge
//! - **Pure data types**: generators return structured sections, no I/O
//!   side effects
//!
//! ## Example
//!
//! ```rust
//! use eu5wikilib::{GameData, Generator, GeneratorConfig, PlainFormatter, TableKind};
//!
//! let data = GameData::from_json_str(r#"{
//!     "buildings": {
//!         "temple": {"display_name": "Temple", "category": "religious", "town": true}
//!     }
//! }"#).unwrap();
//!
//! let formatter = PlainFormatter::new();
//! let config = GeneratorConfig::new().game_version("1.0");
//! let generator = Generator::new(&data, &formatter, &config);
//!
//! let generated = generator.generate(TableKind::Buildings).unwrap();
//! assert!(generated.sections.get("buildings_town_religious").is_some());
//! assert!(generated.page.contains("== town buildings =="));
//! ```

pub mod data;
pub mod error;
pub mod format;
pub mod options;
pub mod output;
pub mod query;
pub mod relations;
pub mod render;
pub mod tables;

pub use data::{Entity, EntityMeta, GameData};
pub use error::WikiError;
pub use format::{AttributeFormatter, PlainFormatter};
pub use options::{BuildingDefaults, CountryPageConfig, GeneratorConfig, LawDefaults, LawLayout};
pub use output::{
    extract_section, make_wiki_table, splice_section, Cell, Row, Section, SectionOptions,
    SectionSet, TableOptions,
};
pub use relations::{RankTier, RelationshipNotes};
pub use tables::{Generated, Generator, Page, TableKind};

/// Result type for eu5wikilib operations
pub type Result<T> = std::result::Result<T, WikiError>;
