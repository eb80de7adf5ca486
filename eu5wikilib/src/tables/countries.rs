//! Country lists by subcontinent and region.
//!
//! Every country is placed through its capital: capital location → region
//! → subcontinent → continent. A country whose chain breaks anywhere is
//! left out. Each subcontinent is one output, except that configured
//! regions go to their own outputs and the subcontinents of configured
//! continents share one output with subcontinent headings.

use indexmap::IndexMap;
use tracing::debug;

use super::{Generator, Page};
use crate::data::{Country, Entity, GameData, Region, SubContinent};
use crate::format::wiki::{capitalize, section_heading, wiki_list};
use crate::output::section::Section;
use crate::output::table::make_wiki_table;
use crate::relations::{rank_key, RelationshipNotes};
use crate::render::{render_rows, Column, RenderContext};
use crate::Result;

/// Where a country sits on the map.
#[derive(Debug, Clone, Copy)]
pub struct Placement<'a> {
    pub country: &'a Country,
    pub region: &'a Region,
    pub sub_continent: &'a SubContinent,
}

impl<'a> Generator<'a> {
    /// Placement of a country, when its capital resolves all the way up to
    /// a subcontinent.
    pub fn place_country(&self, country: &'a Country) -> Option<Placement<'a>> {
        let data = self.data();
        let placement = country
            .capital
            .as_deref()
            .and_then(|capital| GameData::lookup(&data.locations, capital))
            .and_then(|location| location.region.as_deref())
            .and_then(|region| GameData::lookup(&data.regions, region))
            .and_then(|region| {
                let sub_continent = region
                    .sub_continent
                    .as_deref()
                    .and_then(|key| GameData::lookup(&data.sub_continents, key))?;
                Some(Placement {
                    country,
                    region,
                    sub_continent,
                })
            });
        if placement.is_none() {
            debug!(country = country.name(), "country has no placeable capital");
        }
        placement
    }

    /// Output name of a placement.
    fn country_output(&self, placement: &Placement<'_>) -> String {
        let config = &self.config.countries;
        if let Some(output) = config.split_output(placement.region.name()) {
            return output.to_string();
        }
        match placement.sub_continent.continent.as_deref() {
            Some(continent) if config.consolidated_continents.iter().any(|c| c == continent) => {
                continent.to_string()
            }
            _ => placement.sub_continent.name().to_string(),
        }
    }

    /// Placements grouped into outputs. Subcontinent outputs come first in
    /// subcontinent display order, split outputs follow sorted by name.
    /// Within an output, placements are ordered by subcontinent, region and
    /// country display name, each tie broken by key so a region stays in one
    /// run.
    pub fn country_outputs(&self) -> Result<IndexMap<String, Vec<Placement<'a>>>> {
        let countries = self.data().countries()?;
        let mut placements: Vec<Placement<'a>> = countries
            .values()
            .filter_map(|country| self.place_country(country))
            .collect();
        placements.sort_by(|a, b| {
            a.sub_continent
                .display_name()
                .cmp(b.sub_continent.display_name())
                .then_with(|| a.sub_continent.name().cmp(b.sub_continent.name()))
                .then_with(|| a.region.display_name().cmp(b.region.display_name()))
                .then_with(|| a.region.name().cmp(b.region.name()))
                .then_with(|| a.country.display_name().cmp(b.country.display_name()))
                .then_with(|| a.country.name().cmp(b.country.name()))
        });

        let mut outputs: IndexMap<String, Vec<Placement<'a>>> = IndexMap::new();
        let mut split: IndexMap<String, Vec<Placement<'a>>> = IndexMap::new();
        for placement in placements {
            let output = self.country_output(&placement);
            let target = if self
                .config
                .countries
                .split_output(placement.region.name())
                .is_some()
            {
                &mut split
            } else {
                &mut outputs
            };
            target.entry(output).or_default().push(placement);
        }
        split.sort_keys();
        outputs.extend(split);
        Ok(outputs)
    }

    fn country_columns(&self) -> Vec<Column<'_, Country>> {
        let notes = RelationshipNotes::new(self.data(), &self.config.countries);
        vec![
            Column::new("Country", move |c: &Country, _: &RenderContext<'_>| {
                let name = self
                    .config
                    .countries
                    .name_override(c.name())
                    .unwrap_or(c.display_name());
                format!("[[File:{}.png|100px]] '''{}'''", name, name)
            }),
            Column::new("Tag", |c: &Country, _: &RenderContext<'_>| c.name().to_string()),
            Column::new("Government", move |c: &Country, _: &RenderContext<'_>| {
                self.country_government(c)
            }),
            Column::new("Religion", move |c: &Country, _: &RenderContext<'_>| {
                self.country_religion(c)
            }),
            Column::new("Culture", |c: &Country, ctx: &RenderContext<'_>| {
                ctx.display_name(&ctx.data.cultures, c.culture.as_deref())
            }),
            Column::new("Capital", |c: &Country, ctx: &RenderContext<'_>| {
                ctx.display_name(&ctx.data.locations, c.capital.as_deref())
            }),
            Column::new("Notes", move |c: &Country, _: &RenderContext<'_>| {
                wiki_list(notes.notes(c), 1)
            }),
        ]
    }

    /// Government type, country type (unless settled) and rank as a list.
    pub fn country_government(&self, country: &Country) -> String {
        let data = self.data();
        let mut parts = Vec::new();

        if let Some(key) = country.government_type.as_deref() {
            parts.push(match GameData::lookup(&data.government_types, key) {
                Some(government) => government.wiki_link_with_icon(),
                None => {
                    let name = data.localize_or_key(key);
                    format!("{{{{icon|{}}}}} [[{}]]", name, name)
                }
            });
        }

        if let Some(kind) = country.country_type.as_deref().filter(|k| *k != "location") {
            let display = GameData::lookup(&data.game_concepts, kind)
                .map(|concept| concept.display_name().to_string())
                .or_else(|| data.localize(kind).map(str::to_string))
                .unwrap_or_else(|| capitalize(kind));
            parts.push(format!(
                "[[File:Country {}.png|24px|{}|link=Country#Country_type]] [[Country#Country_type|{}]]",
                kind.to_lowercase(),
                display,
                display
            ));
        }

        let rank = rank_key(country, data);
        parts.push(match GameData::lookup(&data.country_ranks, rank) {
            Some(entity) => {
                let display = entity.display_name();
                let target = entity.link_target();
                format!(
                    "[[File:Rank {}.png|24px|{}|link={}]] [[{}|{}]]",
                    display.to_lowercase(),
                    display,
                    target,
                    target,
                    display
                )
            }
            None => {
                let anchor = data.localize_or_key(rank);
                format!(
                    "[[File:Rank {}.png|24px|{}|link=Country rank#{}]] [[Country rank#{}|{}]]",
                    anchor.to_lowercase(),
                    anchor,
                    anchor,
                    anchor,
                    anchor
                )
            }
        });

        wiki_list(parts, 1)
    }

    pub fn country_religion(&self, country: &Country) -> String {
        let Some(key) = country.religion.as_deref().filter(|k| !k.is_empty()) else {
            return String::new();
        };
        let target_for = |display: &str| {
            if key == "catholic" || display == "Catholic" {
                "Catholicism".to_string()
            } else {
                format!("List of religions#{}", display)
            }
        };
        match GameData::lookup(&self.data().religions, key) {
            Some(religion) => {
                let target = target_for(religion.display_name());
                format!(
                    "[[File:{}|24px|link={}]] [[{}|{}]]",
                    religion.wiki_filename(),
                    target,
                    target,
                    religion.display_name()
                )
            }
            None => {
                let display = self.data().localize_or_key(key);
                format!("[[{}|{}]]", target_for(&display), display)
            }
        }
    }

    fn country_table(&self, placements: &[Placement<'_>], columns: &[Column<'_, Country>]) -> String {
        let rows = render_rows(
            placements.iter().map(|p| p.country),
            columns,
            &self.ctx,
        );
        make_wiki_table(rows, &self.table_options().remove_empty_columns(false))
    }

    /// Region tables of one output, each followed by a blank line; with
    /// `consolidated`, regions nest under subcontinent headings.
    fn country_output_body(
        &self,
        placements: &[Placement<'_>],
        consolidated: bool,
        columns: &[Column<'_, Country>],
    ) -> String {
        let mut lines = Vec::new();
        let mut sub_continent: Option<&str> = None;
        let mut start = 0;
        while start < placements.len() {
            let region = placements[start].region.name();
            let end = placements[start..]
                .iter()
                .position(|p| p.region.name() != region)
                .map_or(placements.len(), |offset| start + offset);
            let first = &placements[start];
            let region_level = if consolidated {
                if sub_continent != Some(first.sub_continent.name()) {
                    lines.push(section_heading(first.sub_continent.display_name(), 2));
                    sub_continent = Some(first.sub_continent.name());
                }
                3
            } else {
                2
            };
            lines.push(section_heading(first.region.display_name(), region_level));
            lines.push(self.country_table(&placements[start..end], columns));
            lines.push(String::new());
            start = end;
        }
        lines.join("\n").trim_end().to_string()
    }

    pub fn countries_page(&self) -> Result<Page> {
        let outputs = self.country_outputs()?;
        let columns = self.country_columns();
        let config = &self.config.countries;
        let mut page = Page::unmarked();
        for (output, placements) in outputs {
            let consolidated = config.consolidated_continents.iter().any(|c| *c == output);
            let body = self.country_output_body(&placements, consolidated, &columns);
            page.section(Section::new(output, body));
        }
        Ok(page)
    }
}
