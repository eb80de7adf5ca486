//! The shared entity surface and the small value types entities carry.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::tree::ScriptTree;

/// Identity and presentation data every entity carries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntityMeta {
    /// Stable script key. Filled from the collection key on load.
    pub name: String,
    pub display_name: Option<String>,
    pub description: Option<String>,
    /// Wiki file name of the icon, when it differs from `{display_name}.png`
    pub icon: Option<String>,
}

impl EntityMeta {
    pub fn new(name: impl Into<String>) -> Self {
        EntityMeta {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn display(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    pub fn described(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Read-only view every game entity offers to the generators.
pub trait Entity {
    fn meta(&self) -> &EntityMeta;

    fn meta_mut(&mut self) -> &mut EntityMeta;

    fn name(&self) -> &str {
        &self.meta().name
    }

    fn display_name(&self) -> &str {
        let meta = self.meta();
        meta.display_name.as_deref().unwrap_or(&meta.name)
    }

    fn description(&self) -> &str {
        self.meta().description.as_deref().unwrap_or("")
    }

    fn wiki_filename(&self) -> String {
        match &self.meta().icon {
            Some(icon) => icon.clone(),
            None => format!("{}.png", self.display_name()),
        }
    }

    /// Page (or page#anchor) this entity links to.
    fn link_target(&self) -> String {
        self.display_name().to_string()
    }

    fn wiki_icon(&self) -> String {
        format!(
            "[[File:{}|24px|{}]]",
            self.wiki_filename(),
            self.display_name()
        )
    }

    fn wiki_link(&self) -> String {
        let target = self.link_target();
        if target == self.display_name() {
            format!("[[{}]]", target)
        } else {
            format!("[[{}|{}]]", target, self.display_name())
        }
    }

    fn wiki_link_with_icon(&self) -> String {
        let target = self.link_target();
        format!(
            "[[File:{}|24px|link={}]] [[{}|{}]]",
            self.wiki_filename(),
            target,
            target,
            self.display_name()
        )
    }
}

/// Implements [`Entity`] for structs with a `meta: EntityMeta` field.
macro_rules! impl_entity {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::data::entity::Entity for $ty {
                fn meta(&self) -> &$crate::data::entity::EntityMeta {
                    &self.meta
                }

                fn meta_mut(&mut self) -> &mut $crate::data::entity::EntityMeta {
                    &mut self.meta
                }
            }
        )+
    };
}

pub(crate) use impl_entity;

/// A named stat bonus, e.g. `global_tax_modifier = 0.1`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Modifier {
    pub name: String,
    pub value: f64,
}

impl Modifier {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Modifier {
            name: name.into(),
            value,
        }
    }
}

/// Goods keyed by name with their amounts, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GoodsAmounts(pub IndexMap<String, f64>);

impl GoodsAmounts {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &f64)> {
        self.0.iter()
    }
}

impl FromIterator<(String, f64)> for GoodsAmounts {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        GoodsAmounts(iter.into_iter().collect())
    }
}

/// A price or demand: either inline goods or a named price definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PriceRef {
    Named(String),
    Goods(GoodsAmounts),
}

/// A script value: a literal number, a named value, or a computed block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScriptValue {
    Number(f64),
    Named(String),
    Block(ScriptTree),
}

/// RGB colour with components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Color { r, g, b }
    }

    /// `#rrggbb` form for css.
    pub fn css(&self) -> String {
        let channel = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "#{:02x}{:02x}{:02x}",
            channel(self.r),
            channel(self.g),
            channel(self.b)
        )
    }

    pub fn is_light(&self) -> bool {
        self.r + self.g + self.b > 2.0
    }
}
