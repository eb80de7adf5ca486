//! Grouping and ordering: turning entity collections into ordered sections.
//!
//! This module handles the second stage of the pipeline. It provides:
//!
//! - **group_by**: insertion-ordered bucketing by a (possibly composite) key
//! - **sorted_by_display_name**: a total, reproducible order over entities
//!
//! Grouping never sorts; callers sort before grouping to get sorted buckets,
//! or after to reorder groups.
//!
//! ## Example
//!
//! ```rust,ignore
//! use eu5wikilib::query::{group_by, sorted_by_display_name};
//!
//! let buildings = sorted_by_display_name(data.buildings()?.values());
//! let groups = group_by(buildings, |b| (location_type(b), b.category.clone()));
//! ```

pub mod group;

pub use group::{group_by, sort_groups_by, sorted_by_display_name};
