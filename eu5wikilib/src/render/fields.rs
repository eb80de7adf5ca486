//! Declarative per-entity columns and the shared cell conventions.

use indexmap::IndexMap;
use tracing::trace;

use crate::data::{Entity, GameData, Modifier, PriceRef, ScriptTree, ScriptValue};
use crate::format::wiki::{wiki_list, yes_no_icon};
use crate::format::AttributeFormatter;
use crate::output::table::{Cell, Row};

/// What every field renderer can reach: the data (for references and
/// localisation) and the formatter (for script structures).
#[derive(Clone, Copy)]
pub struct RenderContext<'a> {
    pub data: &'a GameData,
    pub formatter: &'a dyn AttributeFormatter,
}

impl<'a> RenderContext<'a> {
    pub fn new(data: &'a GameData, formatter: &'a dyn AttributeFormatter) -> Self {
        RenderContext { data, formatter }
    }

    /// Formatted trigger; absent or empty renders `""`.
    pub fn trigger(&self, trigger: Option<&ScriptTree>) -> String {
        match trigger {
            Some(tree) if !tree.is_empty() => self.formatter.format_trigger(tree),
            _ => String::new(),
        }
    }

    /// Formatted effect; absent or empty renders `""`.
    pub fn effect(&self, effect: Option<&ScriptTree>) -> String {
        match effect {
            Some(tree) if !tree.is_empty() => self.formatter.format_effect(tree),
            _ => String::new(),
        }
    }

    pub fn modifiers(&self, modifiers: &[Modifier]) -> String {
        if modifiers.is_empty() {
            return String::new();
        }
        self.formatter.format_modifiers(modifiers)
    }

    /// Inline goods as icons; a named price is shown by its key.
    pub fn price(&self, price: Option<&PriceRef>) -> String {
        match price {
            None => String::new(),
            Some(PriceRef::Named(name)) => name.clone(),
            Some(PriceRef::Goods(goods)) if goods.is_empty() => String::new(),
            Some(PriceRef::Goods(goods)) => self.formatter.format_goods(goods, true),
        }
    }

    pub fn script_value(&self, value: Option<&ScriptValue>) -> String {
        value
            .map(|v| self.formatter.format_script_value(v))
            .unwrap_or_default()
    }

    /// Bullet list of a block's top-level keys, for blocks with no
    /// meaningful formatting of their own.
    pub fn tree_keys(&self, tree: Option<&ScriptTree>) -> String {
        match tree {
            Some(tree) => wiki_list(tree.keys().map(|k| format!("{}: ...", k)), 1),
            None => String::new(),
        }
    }

    /// Localized text of a key; absent or empty keys render `""`.
    pub fn localized(&self, key: Option<&str>) -> String {
        match key {
            Some(key) if !key.is_empty() => self.data.localize_or_key(key),
            _ => String::new(),
        }
    }

    /// A reference to another entity.
    ///
    /// Rich entities render as their link with icon; unknown keys fall back
    /// to localisation, then to the raw key. Absent references are empty.
    pub fn reference<T: Entity>(
        &self,
        collection: &Option<IndexMap<String, T>>,
        key: Option<&str>,
    ) -> String {
        let Some(key) = key.filter(|k| !k.is_empty()) else {
            return String::new();
        };
        match GameData::lookup(collection, key) {
            Some(entity) => entity.wiki_link_with_icon(),
            None => {
                trace!(key, "unresolved reference, using localisation");
                self.data.localize_or_key(key)
            }
        }
    }

    /// Bullet list of references; an empty list renders `""`.
    pub fn references<T: Entity>(
        &self,
        collection: &Option<IndexMap<String, T>>,
        keys: &[String],
    ) -> String {
        wiki_list(
            keys.iter().map(|key| self.reference(collection, Some(key))),
            1,
        )
    }

    /// Display name of a referenced entity, localisation or the raw key.
    pub fn display_name<T: Entity>(
        &self,
        collection: &Option<IndexMap<String, T>>,
        key: Option<&str>,
    ) -> String {
        let Some(key) = key.filter(|k| !k.is_empty()) else {
            return String::new();
        };
        match GameData::lookup(collection, key) {
            Some(entity) => entity.display_name().to_string(),
            None => self.data.localize_or_key(key),
        }
    }
}

type RenderFn<'c, E> = Box<dyn Fn(&E, &RenderContext<'_>) -> Cell + 'c>;

/// One labelled column of a table over entities of type `E`.
///
/// The entity type is the column's capability: a column can only be built
/// from accessors `E` actually has, and optional attributes come back as
/// `Option`s that render empty.
pub struct Column<'c, E> {
    label: String,
    render: RenderFn<'c, E>,
}

impl<'c, E> Column<'c, E> {
    pub fn new<F, V>(label: impl Into<String>, render: F) -> Self
    where
        F: Fn(&E, &RenderContext<'_>) -> V + 'c,
        V: Into<Cell>,
    {
        Column {
            label: label.into(),
            render: Box::new(move |entity, ctx| render(entity, ctx).into()),
        }
    }

    /// Tri-state boolean: `None` is empty, otherwise a Yes/No icon whose alt
    /// text is the column label.
    pub fn yes_no<F>(label: impl Into<String>, get: F) -> Self
    where
        F: Fn(&E) -> Option<bool> + 'c,
    {
        let label = label.into();
        let alt = label.clone();
        Column::new(label, move |entity: &E, _: &RenderContext<'_>| {
            yes_no_icon(&alt, get(entity))
        })
    }

    /// Plain boolean rendered as a Yes/No icon.
    pub fn flag<F>(label: impl Into<String>, get: F) -> Self
    where
        F: Fn(&E) -> bool + 'c,
    {
        Column::yes_no(label, move |entity| Some(get(entity)))
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn render(&self, entity: &E, ctx: &RenderContext<'_>) -> Cell {
        (self.render)(entity, ctx)
    }
}

/// One row per entity, cells in column declaration order.
pub fn render_row<E>(entity: &E, columns: &[Column<'_, E>], ctx: &RenderContext<'_>) -> Row {
    let mut row = Row::new();
    for column in columns {
        row.insert(column.label(), column.render(entity, ctx));
    }
    row
}

pub fn render_rows<'e, E, I>(entities: I, columns: &[Column<'_, E>], ctx: &RenderContext<'_>) -> Vec<Row>
where
    E: 'e,
    I: IntoIterator<Item = &'e E>,
{
    entities
        .into_iter()
        .map(|entity| render_row(entity, columns, ctx))
        .collect()
}
