//! Generator configuration.
//!
//! Defaults live in explicit per-entity-type structs handed to the
//! generators, so a new game version changes one value here instead of a
//! lookup table scattered through the renderers.

use serde::{Deserialize, Serialize};

use crate::output::section::SectionOptions;

/// Declared default value of every building attribute that can produce a
/// note. A note is shown only when a building's value differs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildingDefaults {
    pub always_add_demands: bool,
    pub ai_ignore_available_worker_flag: bool,
    pub ai_optimization_flag_coastal: bool,
    pub allow_wrong_startup: bool,
    pub can_close: bool,
    pub conversion_religion: Option<String>,
    pub forbidden_for_estates: bool,
    pub increase_per_level_cost: f64,
    pub in_empty: String,
    pub is_foreign: bool,
    pub lifts_fog_of_war: bool,
    pub need_good_relation: bool,
    pub pop_size_created: i64,
    pub stronger_power_projection: bool,
}

impl Default for BuildingDefaults {
    fn default() -> Self {
        BuildingDefaults {
            always_add_demands: false,
            ai_ignore_available_worker_flag: false,
            ai_optimization_flag_coastal: false,
            allow_wrong_startup: false,
            can_close: true,
            conversion_religion: None,
            forbidden_for_estates: false,
            increase_per_level_cost: 0.0,
            in_empty: "owned".to_string(),
            is_foreign: false,
            lifts_fog_of_war: false,
            need_good_relation: false,
            pop_size_created: 0,
            stronger_power_projection: false,
        }
    }
}

/// Defaults for law and policy rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LawDefaults {
    /// Implementation time (in years) the game applies when a policy
    /// declares none; a policy declaring exactly this shows an empty cell.
    pub implicit_years: i64,
}

impl Default for LawDefaults {
    fn default() -> Self {
        LawDefaults { implicit_years: 2 }
    }
}

/// How the laws generator lays out each category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LawLayout {
    /// One table of laws with nested policy tables
    #[default]
    Tables,
    /// One heading per law with definition lines and its policy table
    Sections,
}

/// A region that gets its own country page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionSplit {
    pub region: String,
    pub output: String,
}

impl RegionSplit {
    pub fn new(region: impl Into<String>, output: impl Into<String>) -> Self {
        RegionSplit {
            region: region.into(),
            output: output.into(),
        }
    }
}

/// Country list and relationship note settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CountryPageConfig {
    /// Start date year used in the "does not exist" note
    pub start_year: i64,
    /// Organizations every country of a faith belongs to; never noted
    pub excluded_organizations: Vec<String>,
    /// Organization whose membership is described by the member's law
    pub branch_organization: String,
    /// Wiki anchor used when linking the branch organization
    pub branch_link: String,
    /// Regions written to their own page instead of their subcontinent's
    pub split_regions: Vec<RegionSplit>,
    /// Continents whose subcontinents share one page with subheadings
    pub consolidated_continents: Vec<String>,
    /// Tag → page/file name overrides for country flags and links
    pub name_overrides: Vec<(String, String)>,
}

impl Default for CountryPageConfig {
    fn default() -> Self {
        CountryPageConfig {
            start_year: 1337,
            excluded_organizations: vec!["catholic_church".to_string(), "papacy".to_string()],
            branch_organization: "hindu_branch".to_string(),
            branch_link: "International organization#Hindu Branches".to_string(),
            split_regions: vec![
                RegionSplit::new("north_german_region", "german"),
                RegionSplit::new("south_german_region", "german"),
                RegionSplit::new("japan_region", "japan"),
            ],
            consolidated_continents: vec!["africa".to_string()],
            name_overrides: vec![("MAM".to_string(), "Egypt".to_string())],
        }
    }
}

impl CountryPageConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start_year(mut self, year: i64) -> Self {
        self.start_year = year;
        self
    }

    pub fn exclude_organization(mut self, key: impl Into<String>) -> Self {
        self.excluded_organizations.push(key.into());
        self
    }

    pub fn split_region(mut self, region: impl Into<String>, output: impl Into<String>) -> Self {
        self.split_regions.push(RegionSplit::new(region, output));
        self
    }

    pub fn name_override(&self, tag: &str) -> Option<&str> {
        self.name_overrides
            .iter()
            .find(|(t, _)| t == tag)
            .map(|(_, name)| name.as_str())
    }

    pub fn split_output(&self, region: &str) -> Option<&str> {
        self.split_regions
            .iter()
            .find(|split| split.region == region)
            .map(|split| split.output.as_str())
    }
}

/// Everything a generator needs besides the data and the formatter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub sections: SectionOptions,
    pub buildings: BuildingDefaults,
    pub laws: LawDefaults,
    pub law_layout: LawLayout,
    pub countries: CountryPageConfig,
}

impl GeneratorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Game version stamped into the header of every section.
    pub fn game_version(mut self, version: impl Into<String>) -> Self {
        self.sections = self.sections.version(version);
        self
    }

    pub fn law_layout(mut self, layout: LawLayout) -> Self {
        self.law_layout = layout;
        self
    }

    pub fn countries(mut self, countries: CountryPageConfig) -> Self {
        self.countries = countries;
        self
    }

    pub fn building_defaults(mut self, defaults: BuildingDefaults) -> Self {
        self.buildings = defaults;
        self
    }
}
