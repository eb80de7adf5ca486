//! Field rendering: turning one entity into one row.
//!
//! This module is the third stage of the pipeline. It provides:
//!
//! - **Column**: a labelled renderer over one entity type, with the shared
//!   conventions (empty for absent, tri-state booleans as icons, references
//!   as links with icons)
//! - **NoteTable**: ordered default-suppressed notes
//! - **TimeSpan**: day/week/month/year durations with overflow carrying
//!
//! ## Example
//!
//! ```rust,ignore
//! use eu5wikilib::render::{render_rows, Column, RenderContext};
//!
//! let ctx = RenderContext::new(&data, &formatter);
//! let columns = vec![
//!     Column::new("Name", |b: &Building, _| b.display_name().to_string()),
//!     Column::yes_no("Town", |b: &Building| Some(b.town)),
//! ];
//! let rows = render_rows(buildings, &columns, &ctx);
//! ```

pub mod fields;
pub mod notes;
pub mod time;

pub use fields::{render_row, render_rows, Column, RenderContext};
pub use notes::{NoteRule, NoteTable};
pub use time::TimeSpan;
