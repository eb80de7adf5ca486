//! Entity model: the parsed game data the generators read.
//!
//! This module is the first stage of the pipeline. It provides:
//!
//! - **Entities**: typed records (`Building`, `Law`, `Country`, ...) sharing
//!   the [`Entity`] surface (display name, icon, link markup)
//! - **Script trees**: nested trigger/effect blocks with key search and
//!   pruning
//! - **GameData**: the named collections plus the country relationship
//!   tables, loaded from a JSON dump
//!
//! ## Example
//!
//! ```rust,ignore
//! use eu5wikilib::data::GameData;
//!
//! let data = GameData::from_json_file("eu5_dump.json")?;
//! for building in data.buildings()?.values() {
//!     println!("{}", building.display_name());
//! }
//! ```

pub mod entities;
pub mod entity;
pub mod game;
pub mod tree;

pub use entities::*;
pub use entity::{Color, Entity, EntityMeta, GoodsAmounts, Modifier, PriceRef, ScriptValue};
pub use game::{DiplomacyRelationships, DiplomacyView, GameData};
pub use tree::{Scalar, ScriptNode, ScriptTree};
