//! Goods tables by category, and lists of goods sharing a custom tag.

use std::collections::BTreeSet;

use indexmap::IndexMap;

use super::{Generator, Page};
use crate::data::{Entity, Good};
use crate::format::wiki::{capitalize, humanize_key, wiki_list, Iconbox};
use crate::output::section::Section;
use crate::output::table::{make_wiki_table, Cell};
use crate::query::{group_by, sorted_by_display_name};
use crate::render::{render_rows, Column, RenderContext};
use crate::Result;

const ROWSPAN: &str = "rowspan=\"2\" | ";

/// Which table of its category a good lands in. Produced goods with an
/// RGO method are special even when they also feed pops.
fn goods_bucket(good: &Good) -> &'static str {
    if good.category == "produced" && good.method.is_some() {
        "_special"
    } else if good.food != 0.0 {
        "_food"
    } else {
        ""
    }
}

fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

impl<'a> Generator<'a> {
    /// Goods by category in first-seen order, each category split into its
    /// plain, food and special tables. Every bucket is sorted by display
    /// name; empty buckets are absent.
    pub fn goods_groups(&self) -> Result<IndexMap<String, Vec<&'a Good>>> {
        let goods = self.data().goods()?;
        let mut groups = IndexMap::new();
        for (category, members) in group_by(goods.values(), |g: &Good| g.category.clone()) {
            let mut buckets = group_by(members, goods_bucket);
            for suffix in ["", "_food", "_special"] {
                if let Some(bucket) = buckets.shift_remove(suffix) {
                    groups.insert(format!("{}{}", category, suffix), sorted_by_display_name(bucket));
                }
            }
        }
        Ok(groups)
    }

    fn goods_heading(&self, key: &str) -> (String, usize) {
        if key.ends_with("_food") {
            return ("Food".to_string(), 4);
        }
        let title = match self.data().localize(key) {
            Some(text) => title_case(text),
            None => humanize_key(key),
        };
        (title, 3)
    }

    fn goods_name(&self, good: &Good) -> String {
        let mut iconbox = Iconbox::new(good.display_name(), good.description())
            .param("w", "300px")
            .param("desc_class", "hidem")
            .param("image", good.wiki_filename());
        if let Some(color) = &good.color {
            let shadow = if color.is_light() { " #000000" } else { "" };
            iconbox = iconbox.param(
                "color",
                format!("{};text-shadow:1px 1px 3px{}", color.css(), shadow),
            );
        }
        iconbox.render()
    }

    /// Fixed columns followed by one demand column per pop type.
    fn goods_columns(&self) -> (Vec<Column<'_, Good>>, Vec<String>) {
        let mut columns = vec![
            Column::new(format!("{}Name", ROWSPAN), move |g: &Good, _: &RenderContext<'_>| {
                self.goods_name(g)
            }),
            Column::new(
                format!("{}Base production", ROWSPAN),
                |g: &Good, _: &RenderContext<'_>| g.base_production,
            ),
            Column::new(
                format!("{}Default price", ROWSPAN),
                |g: &Good, _: &RenderContext<'_>| g.default_market_price,
            ),
            Column::new(format!("{}Food", ROWSPAN), |g: &Good, _: &RenderContext<'_>| {
                (g.food != 0.0).then_some(g.food)
            }),
            Column::new(
                format!("{}RGO type", ROWSPAN),
                |g: &Good, ctx: &RenderContext<'_>| ctx.localized(g.method.as_deref()),
            ),
            Column::new(
                format!("{}Inflation", ROWSPAN),
                |g: &Good, _: &RenderContext<'_>| if g.inflation { "yes" } else { "" },
            ),
            Column::new(
                format!("{}Transport cost", ROWSPAN),
                |g: &Good, _: &RenderContext<'_>| g.transport_cost,
            ),
        ];

        let mut demand_labels = Vec::new();
        if let Some(pop_types) = &self.data().pop_types {
            for (key, pop) in pop_types {
                let label = pop.wiki_icon();
                demand_labels.push(label.clone());
                let key = key.clone();
                columns.push(Column::new(label, move |g: &Good, ctx: &RenderContext<'_>| {
                    match g.demands.get(&key) {
                        Some(demand) => Cell::from(ctx.formatter.format_float(*demand)),
                        None => Cell::Int(0),
                    }
                }));
            }
        }
        (columns, demand_labels)
    }

    pub fn goods_page(&self) -> Result<Page> {
        let groups = self.goods_groups()?;
        let (columns, demand_labels) = self.goods_columns();
        let options = self
            .table_options()
            .column_group("Pop demands", demand_labels);
        let mut page = Page::new();
        for (key, goods) in groups {
            let (heading, level) = self.goods_heading(&key);
            page.heading(&heading, level);
            let table = make_wiki_table(render_rows(goods, &columns, &self.ctx), &options);
            page.section(Section::new(key, table).versioned());
        }
        Ok(page)
    }

    pub fn goods_tags_page(&self) -> Result<Page> {
        let goods = sorted_by_display_name(self.data().goods()?.values());
        let tags: BTreeSet<&str> = goods
            .iter()
            .flat_map(|good| good.custom_tags.iter().map(String::as_str))
            .collect();
        let mut page = Page::new();
        for tag in tags {
            let tagged = goods
                .iter()
                .filter(|good| good.custom_tags.iter().any(|t| t == tag))
                .map(|good| good.wiki_link_with_icon());
            page.section(Section::new(format!("goods_list_{}", tag), wiki_list(tagged, 1)));
        }
        Ok(page)
    }
}
