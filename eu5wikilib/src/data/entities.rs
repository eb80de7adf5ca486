//! Typed game entities as they arrive in the JSON data dump.
//!
//! Every struct tolerates missing fields (`#[serde(default)]`): schemas are
//! heterogeneous across subtypes and an absent attribute means "not
//! applicable", never an error.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::entity::{impl_entity, Color, EntityMeta, GoodsAmounts, Modifier, PriceRef, ScriptValue};
use super::tree::{Scalar, ScriptTree};
use crate::options::BuildingDefaults;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Building {
    #[serde(flatten)]
    pub meta: EntityMeta,
    pub category: String,
    pub city: bool,
    pub town: bool,
    pub rural_settlement: bool,
    pub build_time: Option<i64>,
    /// A number or a named script value
    pub max_levels: Option<Scalar>,
    pub employment_size: f64,
    pub pop_type: Option<String>,
    pub estate: Option<String>,
    pub obsolete: Vec<String>,
    pub price: Option<PriceRef>,
    pub destroy_price: Option<PriceRef>,
    pub construction_demand: Option<PriceRef>,
    pub modifier: Vec<Modifier>,
    pub capital_country_modifier: Vec<Modifier>,
    pub capital_modifier: Vec<Modifier>,
    pub market_center_modifier: Vec<Modifier>,
    pub foreign_country_modifier: Vec<Modifier>,
    pub raw_modifier: Vec<Modifier>,
    pub location_potential: Option<ScriptTree>,
    pub allow: Option<ScriptTree>,
    pub country_potential: Option<ScriptTree>,
    pub can_destroy: Option<ScriptTree>,
    pub remove_if: Option<ScriptTree>,
    pub unique_production_methods: Vec<Vec<String>>,
    pub possible_production_methods: Vec<String>,
    pub always_add_demands: bool,
    #[serde(rename = "AI_ignore_available_worker_flag")]
    pub ai_ignore_available_worker_flag: bool,
    #[serde(rename = "AI_optimization_flag_coastal")]
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
    pub on_built: Option<ScriptTree>,
    pub on_destroyed: Option<ScriptTree>,
}

impl Default for Building {
    fn default() -> Self {
        let defaults = BuildingDefaults::default();
        Building {
            meta: EntityMeta::default(),
            category: String::new(),
            city: false,
            town: false,
            rural_settlement: false,
            build_time: None,
            max_levels: None,
            employment_size: 0.0,
            pop_type: None,
            estate: None,
            obsolete: Vec::new(),
            price: None,
            destroy_price: None,
            construction_demand: None,
            modifier: Vec::new(),
            capital_country_modifier: Vec::new(),
            capital_modifier: Vec::new(),
            market_center_modifier: Vec::new(),
            foreign_country_modifier: Vec::new(),
            raw_modifier: Vec::new(),
            location_potential: None,
            allow: None,
            country_potential: None,
            can_destroy: None,
            remove_if: None,
            unique_production_methods: Vec::new(),
            possible_production_methods: Vec::new(),
            always_add_demands: defaults.always_add_demands,
            ai_ignore_available_worker_flag: defaults.ai_ignore_available_worker_flag,
            ai_optimization_flag_coastal: defaults.ai_optimization_flag_coastal,
            allow_wrong_startup: defaults.allow_wrong_startup,
            can_close: defaults.can_close,
            conversion_religion: defaults.conversion_religion,
            forbidden_for_estates: defaults.forbidden_for_estates,
            increase_per_level_cost: defaults.increase_per_level_cost,
            in_empty: defaults.in_empty,
            is_foreign: defaults.is_foreign,
            lifts_fog_of_war: defaults.lifts_fog_of_war,
            need_good_relation: defaults.need_good_relation,
            pop_size_created: defaults.pop_size_created,
            stronger_power_projection: defaults.stronger_power_projection,
            on_built: None,
            on_destroyed: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildingCategory {
    #[serde(flatten)]
    pub meta: EntityMeta,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductionMethod {
    #[serde(flatten)]
    pub meta: EntityMeta,
    pub input: GoodsAmounts,
    pub produced: Option<String>,
    pub output: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PopType {
    #[serde(flatten)]
    pub meta: EntityMeta,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Estate {
    #[serde(flatten)]
    pub meta: EntityMeta,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Law {
    #[serde(flatten)]
    pub meta: EntityMeta,
    pub law_category: String,
    /// International organization type for IO laws, empty for country laws
    pub io_type: String,
    pub potential: Option<ScriptTree>,
    pub allow: Option<ScriptTree>,
    pub locked: Option<ScriptTree>,
    pub law_country_group: Option<String>,
    pub law_gov_group: Option<String>,
    pub law_religion_group: Vec<String>,
    pub requires_vote: Option<bool>,
    pub unique: Option<bool>,
    /// Keys into the `law_policies` collection
    pub policies: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LawPolicy {
    #[serde(flatten)]
    pub meta: EntityMeta,
    pub allow: Option<ScriptTree>,
    pub potential: Option<ScriptTree>,
    pub country_modifier: Vec<Modifier>,
    pub international_organization_modifier: Vec<Modifier>,
    pub estate_preferences: Vec<String>,
    pub days: i64,
    pub weeks: i64,
    pub months: i64,
    pub years: i64,
    pub on_activate: Option<ScriptTree>,
    pub on_deactivate: Option<ScriptTree>,
    pub on_pay_price: Option<ScriptTree>,
    pub on_fully_activated: Option<ScriptTree>,
    pub price: Option<PriceRef>,
    pub diplomatic_capacity_cost: Option<String>,
    pub gold: Option<bool>,
    pub manpower: Option<bool>,
    pub allow_member_annexation: Option<bool>,
    pub annexation_speed: Option<f64>,
    pub can_build_buildings_in_members: Option<bool>,
    pub can_build_rgos_in_members: Option<bool>,
    pub can_build_roads_in_members: Option<bool>,
    pub has_parliament: Option<bool>,
    pub leader_change_method: Option<String>,
    pub leader_change_trigger_type: Option<String>,
    pub leader_type: Option<String>,
    pub leadership_election_resolution: Option<String>,
    pub months_between_leader_changes: Option<i64>,
    pub opinion_bonus: Option<i64>,
    pub payments_implemented: Vec<String>,
    pub trust_bonus: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Good {
    #[serde(flatten)]
    pub meta: EntityMeta,
    pub category: String,
    /// RGO production method type; `None` for goods only made in buildings
    pub method: Option<String>,
    pub food: f64,
    pub base_production: f64,
    pub default_market_price: f64,
    pub inflation: bool,
    pub transport_cost: f64,
    pub color: Option<Color>,
    /// Demand per pop type
    pub demands: IndexMap<String, f64>,
    pub custom_tags: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstatePrivilege {
    #[serde(flatten)]
    pub meta: EntityMeta,
    pub estate: String,
    pub potential: Option<ScriptTree>,
    pub allow: Option<ScriptTree>,
    pub can_revoke: Option<ScriptTree>,
    pub country_modifier: Vec<Modifier>,
    pub province_modifier: Vec<Modifier>,
    pub location_modifier: Vec<Modifier>,
    pub on_activate: Option<ScriptTree>,
    pub on_deactivate: Option<ScriptTree>,
    pub on_fully_activated: Option<ScriptTree>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterTrait {
    #[serde(flatten)]
    pub meta: EntityMeta,
    pub category: String,
    pub modifier: Vec<Modifier>,
    pub allow: Option<ScriptTree>,
    pub chance: Option<ScriptTree>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GovernmentReform {
    #[serde(flatten)]
    pub meta: EntityMeta,
    pub major: bool,
    pub age: Option<String>,
    pub government: Option<String>,
    pub societal_values: Vec<String>,
    pub potential: Option<ScriptTree>,
    pub allow: Option<ScriptTree>,
    pub locked: Option<ScriptTree>,
    pub country_modifier: Vec<Modifier>,
    pub location_modifier: Vec<Modifier>,
    pub on_activate: Option<ScriptTree>,
    pub on_deactivate: Option<ScriptTree>,
    pub years: Option<f64>,
    pub months: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GovernmentType {
    #[serde(flatten)]
    pub meta: EntityMeta,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Country {
    #[serde(flatten)]
    pub meta: EntityMeta,
    /// Location key of the capital
    pub capital: Option<String>,
    pub government_type: Option<String>,
    /// `real`, `building`, `location`, ... from the setup data
    pub country_type: Option<String>,
    pub country_rank: Option<String>,
    pub religion: Option<String>,
    pub culture: Option<String>,
    pub own_control_core: Vec<String>,
    pub own_core: Vec<String>,
    pub control: Vec<String>,
    pub own_conquered: Vec<String>,
    pub own_control_conquered: Vec<String>,
    pub own_control_integrated: Vec<String>,
    pub own_control_colony: Vec<String>,
    pub our_cores_conquered_by_others: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CountryRank {
    #[serde(flatten)]
    pub meta: EntityMeta,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubjectType {
    #[serde(flatten)]
    pub meta: EntityMeta,
    pub color: Option<Color>,
    /// Game concept the subject type belongs to
    #[serde(rename = "type")]
    pub concept: Option<String>,
    pub government: Option<String>,
    pub level: i64,
    pub ai_wants_to_be_overlord: Option<ScriptValue>,
    pub allow_declaring_wars: bool,
    pub annexation_min_opinion: i64,
    pub annexation_min_years_before: Option<i64>,
    pub annexation_speed: i64,
    pub annexation_stall_opinion: i64,
    pub can_be_force_broken_in_peace_treaty: bool,
    pub can_change_heir_selection: bool,
    pub can_change_rank: bool,
    pub can_overlord_build_buildings: bool,
    pub can_overlord_build_rgos: bool,
    pub can_overlord_build_roads: bool,
    pub can_overlord_build_ships: bool,
    pub can_overlord_recruit_regiments: bool,
    pub diplomatic_capacity_cost_scale: f64,
    pub fleet_basing_rights: bool,
    pub food_access: bool,
    pub great_power_score_transfer: f64,
    pub has_limited_diplomacy: bool,
    pub has_overlords_ruler: bool,
    pub institution_spread_to_overlord: Option<ScriptValue>,
    pub institution_spread_to_subject: Option<ScriptValue>,
    pub is_colonial_subject: bool,
    pub merchants_to_overlord_fraction: f64,
    pub minimum_opinion_for_offer: i64,
    pub only_overlord_court_language: bool,
    pub only_overlord_culture: bool,
    pub only_overlord_or_kindred_culture: bool,
    pub overlord_can_cancel: bool,
    pub overlord_can_enforce_peace_on_subject: bool,
    pub overlord_inherit_if_no_heir: bool,
    pub overlord_share_exploration: bool,
    pub strength_vs_overlord: f64,
    pub subject_can_cancel: Option<bool>,
    pub subject_pays: Option<PriceRef>,
    pub use_overlord_laws: bool,
    pub use_overlord_map_color: Option<bool>,
    pub use_overlord_map_name: bool,
    pub war_score_cost: f64,
    pub overlord_modifier: Vec<Modifier>,
    pub subject_modifier: Vec<Modifier>,
    pub can_attack: Option<ScriptTree>,
    pub can_rival: Option<ScriptTree>,
    pub creation_visible: Option<ScriptTree>,
    pub enabled_through_diplomacy: Option<ScriptTree>,
    pub join_defensive_wars_always: Option<ScriptTree>,
    pub join_offensive_wars_always: Option<ScriptTree>,
    pub release_country_enabled: Option<ScriptTree>,
    pub subject_creation_enabled: Option<ScriptTree>,
    pub visible_through_diplomacy: Option<ScriptTree>,
    pub visible_through_treaty: Option<ScriptTree>,
    pub diplo_chance_accept_overlord: Option<ScriptTree>,
    pub diplo_chance_accept_subject: Option<ScriptTree>,
    pub on_enable: Option<ScriptTree>,
    pub on_disable: Option<ScriptTree>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InternationalOrganization {
    #[serde(flatten)]
    pub meta: EntityMeta,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormableCountry {
    #[serde(flatten)]
    pub meta: EntityMeta,
    /// Tag of the country this formable creates
    pub tag: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Location {
    #[serde(flatten)]
    pub meta: EntityMeta,
    pub province: Option<String>,
    pub region: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Province {
    #[serde(flatten)]
    pub meta: EntityMeta,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Region {
    #[serde(flatten)]
    pub meta: EntityMeta,
    pub sub_continent: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubContinent {
    #[serde(flatten)]
    pub meta: EntityMeta,
    pub continent: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Continent {
    #[serde(flatten)]
    pub meta: EntityMeta,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Religion {
    #[serde(flatten)]
    pub meta: EntityMeta,
    pub group: Option<String>,
    pub color: Option<Color>,
    pub language: Option<String>,
    pub important_country: Option<String>,
    pub definition_modifier: Vec<Modifier>,
    pub factions: Vec<String>,
    pub religious_focuses: Vec<String>,
    pub religious_school: Vec<String>,
    pub tags: Vec<String>,
    pub custom_tags: Vec<String>,
    pub unique_names: Vec<String>,
    pub has_autocephalous_patriarchates: bool,
    pub has_avatars: bool,
    pub has_canonization: bool,
    pub has_cardinals: bool,
    pub has_honor: bool,
    pub has_karma: bool,
    pub has_patriarchs: bool,
    pub has_purity: bool,
    pub has_religious_head: bool,
    pub has_religious_influence: bool,
    pub has_rite_power: bool,
    pub needs_reform: bool,
    pub culture_locked: bool,
    pub ai_wants_convert: bool,
    pub use_icons: bool,
    pub max_sects: Option<i64>,
    pub max_religious_figures_for_religion: Option<i64>,
    pub num_religious_focuses_needed_for_reform: Option<i64>,
    pub religious_aspects: Option<i64>,
    pub tithe: Option<f64>,
    pub opinions: Option<ScriptTree>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnitType {
    #[serde(flatten)]
    pub meta: EntityMeta,
    pub age: Option<String>,
    pub category: Option<String>,
    pub color: Option<Color>,
    pub buildable: Option<bool>,
    pub levy: bool,
    #[serde(rename = "default")]
    pub is_default: bool,
    pub use_ship_names: Option<bool>,
    pub copy_from: Option<String>,
    pub upgrades_to_only: Option<String>,
    pub artillery_barrage: i64,
    pub attrition_loss: f64,
    pub blockade_capacity: f64,
    pub bombard_efficiency: f64,
    pub build_time_modifier: f64,
    pub cannons: i64,
    pub combat_power: f64,
    pub combat_speed: f64,
    pub crew_size: f64,
    pub flanking_ability: f64,
    pub food_consumption_per_strength: f64,
    pub food_storage_per_strength: f64,
    pub frontage: f64,
    pub hull_size: i64,
    pub initiative: f64,
    pub max_strength: f64,
    pub morale_damage_done: f64,
    pub morale_damage_taken: f64,
    pub movement_speed: f64,
    pub strength_damage_done: f64,
    pub strength_damage_taken: f64,
    pub supply_weight: f64,
    pub transport_capacity: f64,
    pub construction_demand: Option<PriceRef>,
    pub maintenance_demand: Option<PriceRef>,
    pub country_potential: Option<ScriptTree>,
    pub location_potential: Option<ScriptTree>,
    pub location_trigger: Option<ScriptTree>,
    pub combat: Option<ScriptTree>,
    pub impact: Option<ScriptTree>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParliamentIssue {
    #[serde(flatten)]
    pub meta: EntityMeta,
    /// `country` for issues debated in country parliaments
    #[serde(rename = "type")]
    pub issue_type: String,
    pub estate: Option<String>,
    pub potential: Option<ScriptTree>,
    pub allow: Option<ScriptTree>,
    pub chance: Option<ScriptValue>,
    pub modifier_when_in_debate: Vec<Modifier>,
    pub on_debate_passed: Option<ScriptTree>,
    pub on_debate_failed: Option<ScriptTree>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConcept {
    #[serde(flatten)]
    pub meta: EntityMeta,
    pub family: Option<String>,
    /// Keys of the concepts that are aliases of this one
    pub alias: Vec<String>,
    pub is_alias: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Age {
    #[serde(flatten)]
    pub meta: EntityMeta,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Culture {
    #[serde(flatten)]
    pub meta: EntityMeta,
    pub color: Option<Color>,
    pub culture_groups: Vec<String>,
    pub language: Option<String>,
    pub dynasty_name_type: Option<String>,
    pub use_patronym: bool,
    pub adjective_keys: Vec<String>,
    pub noun_keys: Vec<String>,
    pub tags: Vec<String>,
    pub character_modifier: Vec<Modifier>,
    pub country_modifier: Vec<Modifier>,
    pub location_modifier: Vec<Modifier>,
    pub opinions: Option<ScriptTree>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CultureGroup {
    #[serde(flatten)]
    pub meta: EntityMeta,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CasusBelli {
    #[serde(flatten)]
    pub meta: EntityMeta,
    pub war_goal_type: Option<String>,
    pub additional_war_enthusiasm: f64,
    pub additional_war_enthusiasm_attacker: f64,
    pub additional_war_enthusiasm_defender: f64,
    pub ai_cede_location_desire: Option<ScriptValue>,
    pub ai_cede_province_desire: Option<ScriptValue>,
    pub ai_selection_desire: Option<ScriptValue>,
    pub ai_subjugation_desire: i64,
    pub allow_ports_for_reach_ai: bool,
    pub allow_release_areas: bool,
    pub allow_separate_peace: bool,
    pub antagonism_reduction_per_warworth_defender: f64,
    pub can_expire: bool,
    pub cut_down_in_size_cb: bool,
    pub max_warscore_from_battles: i64,
    pub no_cb: Option<bool>,
    pub speed: f64,
    pub trade: bool,
    pub allow_creation: Option<ScriptTree>,
    pub allow_declaration: Option<ScriptTree>,
    pub province: Option<ScriptTree>,
    pub visible: Option<ScriptTree>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Wargoal {
    #[serde(flatten)]
    pub meta: EntityMeta,
    #[serde(rename = "type")]
    pub wargoal_type: Option<String>,
    pub war_name: Option<String>,
    pub war_name_is_country_order_agnostic: bool,
    pub ticking_war_score: f64,
    pub attacker: Option<ScriptTree>,
    pub defender: Option<ScriptTree>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PeaceTreaty {
    #[serde(flatten)]
    pub meta: EntityMeta,
    pub category: Option<String>,
    pub cost: Option<ScriptValue>,
    pub base_antagonism: Option<ScriptValue>,
    /// Opinion bias raised in the targets
    pub antagonism_type: Option<String>,
    pub ai_desire: Option<ScriptValue>,
    pub are_targets_exclusive: bool,
    pub blocks_full_annexation: bool,
    pub potential: Option<ScriptTree>,
    pub allow: Option<ScriptTree>,
    pub effect: Option<ScriptTree>,
    pub select_trigger: Option<ScriptTree>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReligiousAspect {
    #[serde(flatten)]
    pub meta: EntityMeta,
    pub religion: Vec<String>,
    pub modifier: Vec<Modifier>,
    pub enabled: Option<ScriptTree>,
    pub visible: Option<ScriptTree>,
    pub opinions: Option<ScriptTree>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReligiousSchool {
    #[serde(flatten)]
    pub meta: EntityMeta,
    pub modifier: Vec<Modifier>,
    pub enabled_for_character: Option<ScriptTree>,
    pub enabled_for_country: Option<ScriptTree>,
}

impl_entity!(
    Building,
    BuildingCategory,
    ProductionMethod,
    PopType,
    Estate,
    Law,
    LawPolicy,
    Good,
    EstatePrivilege,
    CharacterTrait,
    GovernmentReform,
    GovernmentType,
    Country,
    CountryRank,
    SubjectType,
    InternationalOrganization,
    FormableCountry,
    Location,
    Province,
    Region,
    SubContinent,
    Continent,
    Religion,
    UnitType,
    ParliamentIssue,
    GameConcept,
    Age,
    Culture,
    CultureGroup,
    CasusBelli,
    Wargoal,
    PeaceTreaty,
    ReligiousAspect,
    ReligiousSchool,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::entity::Entity;

    #[test]
    fn test_building_defaults_from_empty_json() {
        let building: Building = serde_json::from_str("{}").unwrap();
        assert!(building.can_close);
        assert_eq!(building.in_empty, "owned");
        assert_eq!(building.pop_size_created, 0);
        assert!(building.on_built.is_none());
    }

    #[test]
    fn test_building_flattened_meta_and_renames() {
        let building: Building = serde_json::from_str(
            r#"{
                "display_name": "Temple",
                "category": "religious_category",
                "town": true,
                "AI_ignore_available_worker_flag": true,
                "max_levels": "temple_max_level",
                "employment_size": 1
            }"#,
        )
        .unwrap();
        assert_eq!(building.display_name(), "Temple");
        assert!(building.ai_ignore_available_worker_flag);
        assert_eq!(
            building.max_levels,
            Some(Scalar::Text("temple_max_level".to_string()))
        );
        assert_eq!(building.employment_size, 1.0);
    }

    #[test]
    fn test_unit_type_default_field_rename() {
        let unit: UnitType = serde_json::from_str(r#"{"default": true, "levy": true}"#).unwrap();
        assert!(unit.is_default);
        assert!(unit.levy);
        assert_eq!(unit.buildable, None);
    }

    #[test]
    fn test_type_fields_rename() {
        let wargoal: Wargoal =
            serde_json::from_str(r#"{"type": "take_country", "ticking_war_score": 0.5}"#).unwrap();
        assert_eq!(wargoal.wargoal_type.as_deref(), Some("take_country"));
        assert_eq!(wargoal.ticking_war_score, 0.5);

        let subject: SubjectType = serde_json::from_str(
            r#"{"type": "vassal_concept", "subject_pays": {"gold": 1}, "level": 2}"#,
        )
        .unwrap();
        assert_eq!(subject.concept.as_deref(), Some("vassal_concept"));
        assert_eq!(subject.level, 2);
        assert!(matches!(subject.subject_pays, Some(PriceRef::Goods(_))));
        assert_eq!(subject.subject_can_cancel, None);
    }
}
