//! Wiki table assembly.
//!
//! The data flow is:
//! 1. Entities (grouped and sorted by the query stage)
//! 2. Rows (one per entity, built by the field renderers)
//! 3. WikiTable (column union, empty-column pruning, header directives)
//!
//! WikiTable is a pure presentation layer: it never looks at entities, only
//! at rendered cells.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::format::wiki::format_number;

/// One rendered cell. Numbers pass through unconverted until the table is
/// written out.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    #[default]
    Empty,
    Text(String),
    Int(i64),
    Float(f64),
}

impl Cell {
    /// Whether the cell renders as the empty string.
    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(text) => text.is_empty(),
            Cell::Int(_) | Cell::Float(_) => false,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => Ok(()),
            Cell::Text(text) => write!(f, "{}", text),
            Cell::Int(value) => write!(f, "{}", value),
            Cell::Float(value) => write!(f, "{}", format_number(*value)),
        }
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::Text(value)
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

impl From<&String> for Cell {
    fn from(value: &String) -> Self {
        Cell::Text(value.clone())
    }
}

impl From<i64> for Cell {
    fn from(value: i64) -> Self {
        Cell::Int(value)
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Float(value)
    }
}

impl<T: Into<Cell>> From<Option<T>> for Cell {
    fn from(value: Option<T>) -> Self {
        value.map_or(Cell::Empty, Into::into)
    }
}

/// Column label → cell, in visual column order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Row {
    cells: IndexMap<String, Cell>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`Row::insert`].
    pub fn with(mut self, label: impl Into<String>, value: impl Into<Cell>) -> Self {
        self.insert(label, value);
        self
    }

    pub fn insert(&mut self, label: impl Into<String>, value: impl Into<Cell>) {
        self.cells.insert(label.into(), value.into());
    }

    pub fn get(&self, label: &str) -> Option<&Cell> {
        self.cells.get(label)
    }

    /// Cell text for a label; absent labels read as empty.
    pub fn text(&self, label: &str) -> String {
        self.get(label).map(Cell::to_string).unwrap_or_default()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.cells.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// A header label with an optional attribute prefix.
///
/// `rowspan="2" | Name` carries the directive `rowspan="2"` for the header
/// cell; the prefix is recognized only when it contains `=`, so labels such
/// as `Country | Region` stay intact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCell {
    pub attributes: Option<String>,
    pub text: String,
}

impl HeaderCell {
    pub fn parse(label: &str) -> Self {
        if let Some((prefix, text)) = label.split_once('|') {
            if prefix.contains('=') {
                return HeaderCell {
                    attributes: Some(prefix.trim().to_string()),
                    text: text.trim().to_string(),
                };
            }
        }
        HeaderCell {
            attributes: None,
            text: label.to_string(),
        }
    }

    fn render(&self) -> String {
        match &self.attributes {
            Some(attributes) => format!("{} | {}", attributes, self.text),
            None => self.text.clone(),
        }
    }
}

/// Trailing columns shown under one shared super-header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnGroup {
    pub label: String,
    pub columns: Vec<String>,
}

/// Options for one table invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableOptions {
    /// Drop columns that are empty in every row
    pub remove_empty_columns: bool,
    /// Write every cell on its own line instead of joining a row with `||`
    pub one_line_per_cell: bool,
    /// CSS classes for the table, passed through as-is
    pub table_classes: Vec<String>,
    pub sortable: bool,
    pub column_group: Option<ColumnGroup>,
}

impl Default for TableOptions {
    fn default() -> Self {
        TableOptions {
            remove_empty_columns: true,
            one_line_per_cell: true,
            table_classes: vec!["mildtable".to_string(), "plainlist".to_string()],
            sortable: true,
            column_group: None,
        }
    }
}

impl TableOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn remove_empty_columns(mut self, value: bool) -> Self {
        self.remove_empty_columns = value;
        self
    }

    pub fn one_line_per_cell(mut self, value: bool) -> Self {
        self.one_line_per_cell = value;
        self
    }

    pub fn table_classes<I, S>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.table_classes = classes.into_iter().map(Into::into).collect();
        self
    }

    pub fn sortable(mut self, value: bool) -> Self {
        self.sortable = value;
        self
    }

    pub fn column_group(mut self, label: impl Into<String>, columns: Vec<String>) -> Self {
        self.column_group = Some(ColumnGroup {
            label: label.into(),
            columns,
        });
        self
    }

    fn class_attribute(&self) -> String {
        let mut classes: Vec<&str> = Vec::new();
        if self.sortable {
            classes.push("sortable");
        }
        classes.extend(self.table_classes.iter().map(String::as_str));
        classes.join(" ")
    }
}

/// Rows plus the surviving column schema, ready to render.
#[derive(Debug, Clone, PartialEq)]
pub struct WikiTable {
    /// Column labels in first-seen order, after pruning
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
    options: TableOptions,
}

impl WikiTable {
    /// Build the column schema from rows.
    ///
    /// Columns are the union of row labels in first-seen order. With
    /// `remove_empty_columns`, a column is dropped only when every row
    /// renders it empty (a row lacking the label counts as empty).
    pub fn from_rows(rows: Vec<Row>, options: &TableOptions) -> Self {
        let mut columns: Vec<String> = Vec::new();
        for row in &rows {
            for label in row.labels() {
                if !columns.iter().any(|c| c == label) {
                    columns.push(label.to_string());
                }
            }
        }

        if options.remove_empty_columns {
            columns.retain(|label| {
                let keep = rows
                    .iter()
                    .any(|row| row.get(label).is_some_and(|cell| !cell.is_empty()));
                if !keep {
                    trace!(column = %label, "dropping empty column");
                }
                keep
            });
        }

        WikiTable {
            columns,
            rows,
            options: options.clone(),
        }
    }

    /// Wiki markup for the table; no rows give an empty string.
    pub fn render(&self) -> String {
        if self.rows.is_empty() || self.columns.is_empty() {
            return String::new();
        }

        let mut lines = vec![format!("{{| class=\"{}\"", self.options.class_attribute())];
        lines.push(self.render_header());
        for row in &self.rows {
            lines.push("|-".to_string());
            lines.push(self.render_row(row));
        }
        lines.push("|}".to_string());
        lines.join("\n")
    }

    fn render_header(&self) -> String {
        let (grouped, plain): (Vec<&String>, Vec<&String>) = match &self.options.column_group {
            Some(group) => self
                .columns
                .iter()
                .partition(|label| group.columns.iter().any(|c| c == *label)),
            None => (Vec::new(), self.columns.iter().collect()),
        };

        let group = match (&self.options.column_group, grouped.is_empty()) {
            (Some(group), false) => group,
            _ => {
                // without a surviving group there is no second header row to span
                let headers: Vec<String> = self
                    .columns
                    .iter()
                    .map(|label| {
                        let header = HeaderCell::parse(label);
                        match &header.attributes {
                            Some(attrs) if attrs.contains("rowspan") => header.text,
                            _ => header.render(),
                        }
                    })
                    .collect();
                return format!("! {}", headers.join(" !! "));
            }
        };

        let mut top: Vec<String> = plain
            .iter()
            .map(|label| HeaderCell::parse(label).render())
            .collect();
        top.push(format!("colspan=\"{}\" | {}", grouped.len(), group.label));
        let bottom: Vec<String> = grouped
            .iter()
            .map(|label| HeaderCell::parse(label).render())
            .collect();
        format!("! {}\n|-\n! {}", top.join(" !! "), bottom.join(" !! "))
    }

    fn render_row(&self, row: &Row) -> String {
        let cells = self.columns.iter().map(|label| row.text(label));
        if self.options.one_line_per_cell {
            cells
                .map(|text| {
                    if starts_block(&text) {
                        format!("|\n{}", text)
                    } else if text.is_empty() {
                        "|".to_string()
                    } else {
                        format!("| {}", text)
                    }
                })
                .collect::<Vec<_>>()
                .join("\n")
        } else {
            let inline: Vec<String> = cells.map(|text| text.replace('\n', "<br>")).collect();
            format!("| {}", inline.join(" || "))
        }
    }
}

/// Content that only renders correctly at the start of a line.
fn starts_block(text: &str) -> bool {
    matches!(text.chars().next(), Some('*' | '#' | ':' | ';')) || text.starts_with("{|")
}

/// Build and render a table in one step.
pub fn make_wiki_table(rows: Vec<Row>, options: &TableOptions) -> String {
    WikiTable::from_rows(rows, options).render()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_rows() -> Vec<Row> {
        vec![
            Row::new()
                .with("Name", "Temple")
                .with("Notes", "")
                .with("Levels", 3_i64),
            Row::new()
                .with("Name", "Farm")
                .with("Notes", Cell::Empty)
                .with("Levels", 1.5),
        ]
    }

    #[test]
    fn test_empty_input_gives_empty_string() {
        assert_eq!(make_wiki_table(Vec::new(), &TableOptions::new()), "");
    }

    #[test]
    fn test_column_empty_in_every_row_is_removed() {
        let table = WikiTable::from_rows(sample_rows(), &TableOptions::new());
        assert_eq!(table.columns, vec!["Name", "Levels"]);
        assert!(!table.render().contains("Notes"));
    }

    #[test]
    fn test_column_kept_when_one_row_has_content() {
        let mut rows = sample_rows();
        rows[1].insert("Notes", "* Lifts fog of war");
        let table = WikiTable::from_rows(rows, &TableOptions::new());
        assert_eq!(table.columns, vec!["Name", "Notes", "Levels"]);
    }

    #[test]
    fn test_columns_kept_without_pruning() {
        let options = TableOptions::new().remove_empty_columns(false);
        let table = WikiTable::from_rows(sample_rows(), &options);
        assert_eq!(table.columns.len(), 3);
    }

    #[test]
    fn test_union_of_labels_in_first_seen_order() {
        let rows = vec![
            Row::new().with("A", "1"),
            Row::new().with("B", "2").with("A", "3"),
        ];
        let table = WikiTable::from_rows(rows, &TableOptions::new());
        assert_eq!(table.columns, vec!["A", "B"]);
        assert!(table.render().contains("|-\n| 1\n|\n|-\n| 3\n| 2"));
    }

    #[test]
    fn test_render_one_line_per_cell() {
        let rendered = make_wiki_table(sample_rows(), &TableOptions::new());
        let expected = "{| class=\"sortable mildtable plainlist\"\n\
                        ! Name !! Levels\n\
                        |-\n\
                        | Temple\n\
                        | 3\n\
                        |-\n\
                        | Farm\n\
                        | 1.5\n\
                        |}";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_block_content_starts_on_its_own_line() {
        let rows = vec![Row::new().with("Name", "X").with("Notes", "* a\n* b")];
        let rendered = make_wiki_table(rows, &TableOptions::new());
        assert!(rendered.contains("|\n* a\n* b"));
    }

    #[test]
    fn test_inline_rows() {
        let rows = vec![Row::new().with("A", "x").with("B", "line1\nline2")];
        let options = TableOptions::new().one_line_per_cell(false).sortable(false);
        let rendered = make_wiki_table(rows, &options);
        assert!(rendered.starts_with("{| class=\"mildtable plainlist\""));
        assert!(rendered.contains("| x || line1<br>line2"));
    }

    #[test]
    fn test_header_directive_is_parsed() {
        let header = HeaderCell::parse("rowspan=\"2\" | Name");
        assert_eq!(header.attributes.as_deref(), Some("rowspan=\"2\""));
        assert_eq!(header.text, "Name");

        let plain = HeaderCell::parse("Country | Region");
        assert_eq!(plain.attributes, None);
        assert_eq!(plain.text, "Country | Region");
    }

    #[test]
    fn test_column_group_header() {
        let rows = vec![Row::new()
            .with("rowspan=\"2\" | Name", "Grain")
            .with("Peasants", 0_i64)
            .with("Nobles", 0.5)];
        let options = TableOptions::new().column_group(
            "Pop demands",
            vec!["Peasants".to_string(), "Nobles".to_string()],
        );
        let rendered = make_wiki_table(rows, &options);
        assert!(rendered.contains(
            "! rowspan=\"2\" | Name !! colspan=\"2\" | Pop demands\n|-\n! Peasants !! Nobles"
        ));
    }

    #[test]
    fn test_column_group_without_surviving_columns_drops_rowspan() {
        let rows = vec![Row::new()
            .with("rowspan=\"2\" | Name", "Grain")
            .with("Peasants", "")];
        let options = TableOptions::new().column_group("Pop demands", vec!["Peasants".to_string()]);
        let rendered = make_wiki_table(rows, &options);
        assert!(rendered.contains("! Name\n|-"));
        assert!(!rendered.contains("Pop demands"));
    }

    #[test]
    fn test_rowspan_dropped_without_column_group() {
        let rows = vec![Row::new()
            .with("rowspan=\"2\" | Name", "Grain")
            .with("style=\"width:20%\" | Price", 3_i64)];
        let rendered = make_wiki_table(rows, &TableOptions::new());
        assert!(rendered.contains("! Name !! style=\"width:20%\" | Price\n|-"));
        assert!(!rendered.contains("rowspan"));
    }

    #[test]
    fn test_cell_display() {
        assert_eq!(Cell::Float(2.0).to_string(), "2");
        assert_eq!(Cell::from(None::<String>).to_string(), "");
        assert!(Cell::from("").is_empty());
        assert!(!Cell::Int(0).is_empty());
    }
}
