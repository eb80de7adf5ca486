//! Output formatting: rows to tables, tables to sections.
//!
//! This module handles the fourth and final stage of the pipeline. It
//! provides:
//!
//! - **WikiTable**: column union, empty-column pruning and header directives
//!   over rendered rows
//! - **Section / SectionSet**: stable begin/end markers around generated
//!   bodies, plus splicing into hand-edited pages
//! - **TemplateCall**: `{{Template|k=v}}` blocks for structured-data pages
//!
//! WikiTable is a pure presentation layer: it only arranges cells. All
//! grouping and sorting happens in the query stage.
//!
//! ## Example
//!
//! ```rust,ignore
//! use eu5wikilib::output::{make_wiki_table, Section, SectionOptions, TableOptions};
//!
//! let table = make_wiki_table(rows, &TableOptions::new());
//! let wrapped = SectionOptions::new().wrap(&Section::new("traits_ruler", table));
//! ```

pub mod cargo;
pub mod section;
pub mod table;

pub use cargo::{render_template_calls, TemplateCall};
pub use section::{extract_section, section_key, splice_section, Section, SectionOptions, SectionSet};
pub use table::{make_wiki_table, Cell, ColumnGroup, HeaderCell, Row, TableOptions, WikiTable};
