//! The loaded game data: named entity collections plus relationship tables.

use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::entities::*;
use super::entity::Entity;
use crate::error::WikiError;
use crate::Result;

/// Country-to-country relations, keyed by country tag.
///
/// Every table is optional in practice: an empty table simply yields no
/// subject or membership notes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiplomacyRelationships {
    /// Subject tag → overlord tag
    pub overlords: IndexMap<String, String>,
    /// Subject tag → subject type key
    pub subject_types: IndexMap<String, String>,
    /// Country tag → organization keys, in membership declaration order
    pub io_members: IndexMap<String, Vec<String>>,
    /// Country tag → organization key → law keys the member has enacted
    pub io_member_laws: IndexMap<String, IndexMap<String, Vec<String>>>,
}

/// Every collection the generators read, as produced by the parser.
///
/// Collections are `None` when the dump does not contain them; asking a
/// generator for a table that needs one fails with
/// [`WikiError::MissingCollection`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameData {
    pub localization: IndexMap<String, String>,
    pub buildings: Option<IndexMap<String, Building>>,
    pub building_categories: Option<IndexMap<String, BuildingCategory>>,
    pub production_methods: Option<IndexMap<String, ProductionMethod>>,
    pub pop_types: Option<IndexMap<String, PopType>>,
    pub estates: Option<IndexMap<String, Estate>>,
    pub laws: Option<IndexMap<String, Law>>,
    pub law_policies: Option<IndexMap<String, LawPolicy>>,
    pub goods: Option<IndexMap<String, Good>>,
    pub estate_privileges: Option<IndexMap<String, EstatePrivilege>>,
    pub traits: Option<IndexMap<String, CharacterTrait>>,
    pub government_reforms: Option<IndexMap<String, GovernmentReform>>,
    pub government_types: Option<IndexMap<String, GovernmentType>>,
    pub countries: Option<IndexMap<String, Country>>,
    pub country_ranks: Option<IndexMap<String, CountryRank>>,
    pub subject_types: Option<IndexMap<String, SubjectType>>,
    pub international_organizations: Option<IndexMap<String, InternationalOrganization>>,
    pub formable_countries: Option<IndexMap<String, FormableCountry>>,
    pub locations: Option<IndexMap<String, Location>>,
    pub provinces: Option<IndexMap<String, Province>>,
    pub regions: Option<IndexMap<String, Region>>,
    pub sub_continents: Option<IndexMap<String, SubContinent>>,
    pub continents: Option<IndexMap<String, Continent>>,
    pub religions: Option<IndexMap<String, Religion>>,
    pub unit_types: Option<IndexMap<String, UnitType>>,
    pub parliament_issues: Option<IndexMap<String, ParliamentIssue>>,
    pub game_concepts: Option<IndexMap<String, GameConcept>>,
    pub ages: Option<IndexMap<String, Age>>,
    pub cultures: Option<IndexMap<String, Culture>>,
    pub culture_groups: Option<IndexMap<String, CultureGroup>>,
    pub casus_belli: Option<IndexMap<String, CasusBelli>>,
    pub wargoals: Option<IndexMap<String, Wargoal>>,
    pub peace_treaties: Option<IndexMap<String, PeaceTreaty>>,
    pub religious_aspects: Option<IndexMap<String, ReligiousAspect>>,
    pub religious_schools: Option<IndexMap<String, ReligiousSchool>>,
    pub diplomacy: Option<DiplomacyRelationships>,
}

/// Generates the checked accessor for each collection and the pass that
/// copies map keys into entity names.
macro_rules! collections {
    ($($field:ident: $ty:ty),+ $(,)?) => {
        impl GameData {
            $(
                #[doc = concat!("The `", stringify!($field), "` collection, or `MissingCollection`.")]
                pub fn $field(&self) -> Result<&IndexMap<String, $ty>> {
                    self.$field
                        .as_ref()
                        .ok_or(WikiError::MissingCollection(stringify!($field)))
                }
            )+

            fn assign_names(&mut self) {
                $(
                    if let Some(collection) = self.$field.as_mut() {
                        assign_collection_names(collection);
                    }
                )+
            }
        }
    };
}

collections! {
    buildings: Building,
    building_categories: BuildingCategory,
    production_methods: ProductionMethod,
    pop_types: PopType,
    estates: Estate,
    laws: Law,
    law_policies: LawPolicy,
    goods: Good,
    estate_privileges: EstatePrivilege,
    traits: CharacterTrait,
    government_reforms: GovernmentReform,
    government_types: GovernmentType,
    countries: Country,
    country_ranks: CountryRank,
    subject_types: SubjectType,
    international_organizations: InternationalOrganization,
    formable_countries: FormableCountry,
    locations: Location,
    provinces: Province,
    regions: Region,
    sub_continents: SubContinent,
    continents: Continent,
    religions: Religion,
    unit_types: UnitType,
    parliament_issues: ParliamentIssue,
    game_concepts: GameConcept,
    ages: Age,
    cultures: Culture,
    culture_groups: CultureGroup,
    casus_belli: CasusBelli,
    wargoals: Wargoal,
    peace_treaties: PeaceTreaty,
    religious_aspects: ReligiousAspect,
    religious_schools: ReligiousSchool,
}

fn assign_collection_names<T: Entity>(collection: &mut IndexMap<String, T>) {
    for (key, entity) in collection.iter_mut() {
        if entity.meta().name.is_empty() {
            entity.meta_mut().name = key.clone();
        }
    }
}

impl GameData {
    /// Parse a JSON data dump.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let mut data: GameData = serde_json::from_str(json)?;
        data.assign_names();
        debug!(
            buildings = data.buildings.as_ref().map_or(0, IndexMap::len),
            countries = data.countries.as_ref().map_or(0, IndexMap::len),
            "loaded game data"
        );
        Ok(data)
    }

    /// Read and parse a JSON data dump from disk.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| WikiError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Localized text for a key, if the localisation table has it.
    pub fn localize(&self, key: &str) -> Option<&str> {
        self.localization.get(key).map(String::as_str)
    }

    /// Localized text for a key, falling back to the key itself.
    pub fn localize_or_key(&self, key: &str) -> String {
        self.localize(key).unwrap_or(key).to_string()
    }

    /// Optional lookup used where an unknown key degrades instead of failing.
    pub fn lookup<'a, T>(
        collection: &'a Option<IndexMap<String, T>>,
        key: &str,
    ) -> Option<&'a T> {
        collection.as_ref().and_then(|c| c.get(key))
    }

    /// Relationship tables, empty when the dump has none.
    pub fn diplomacy(&self) -> DiplomacyView<'_> {
        DiplomacyView {
            inner: self.diplomacy.as_ref(),
        }
    }
}

/// Read-only access to [`DiplomacyRelationships`] that treats a missing
/// table as empty.
#[derive(Debug, Clone, Copy)]
pub struct DiplomacyView<'a> {
    inner: Option<&'a DiplomacyRelationships>,
}

impl<'a> DiplomacyView<'a> {
    pub fn overlord(&self, tag: &str) -> Option<&'a str> {
        self.inner?.overlords.get(tag).map(String::as_str)
    }

    pub fn subject_type(&self, tag: &str) -> Option<&'a str> {
        self.inner?.subject_types.get(tag).map(String::as_str)
    }

    pub fn memberships(&self, tag: &str) -> &'a [String] {
        self.inner
            .and_then(|d| d.io_members.get(tag))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn member_laws(&self, tag: &str, organization: &str) -> &'a [String] {
        self.inner
            .and_then(|d| d.io_member_laws.get(tag))
            .and_then(|laws| laws.get(organization))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> &'static str {
        r#"{
            "localization": {"rank_duchy": "Duchy"},
            "buildings": {
                "temple": {"display_name": "Temple", "town": true},
                "farm": {"name": "custom_farm"}
            },
            "diplomacy": {
                "overlords": {"BRI": "FRA"},
                "io_members": {"FRA": ["catholic_church", "hre"]}
            }
        }"#
    }

    #[test]
    fn test_names_filled_from_keys() {
        let data = GameData::from_json_str(sample_json()).unwrap();
        let buildings = data.buildings().unwrap();
        assert_eq!(buildings["temple"].name(), "temple");
        assert_eq!(buildings["farm"].name(), "custom_farm");
        let keys: Vec<&String> = buildings.keys().collect();
        assert_eq!(keys, vec!["temple", "farm"]);
    }

    #[test]
    fn test_missing_collection_is_an_error() {
        let data = GameData::from_json_str(sample_json()).unwrap();
        let err = data.laws().unwrap_err();
        assert!(matches!(err, WikiError::MissingCollection("laws")));
    }

    #[test]
    fn test_wrong_shape_is_an_error() {
        let err = GameData::from_json_str(r#"{"buildings": [1, 2]}"#).unwrap_err();
        assert!(matches!(err, WikiError::Json { .. }));
    }

    #[test]
    fn test_localize_fallback() {
        let data = GameData::from_json_str(sample_json()).unwrap();
        assert_eq!(data.localize("rank_duchy"), Some("Duchy"));
        assert_eq!(data.localize_or_key("rank_empire"), "rank_empire");
    }

    #[test]
    fn test_diplomacy_view() {
        let data = GameData::from_json_str(sample_json()).unwrap();
        let diplomacy = data.diplomacy();
        assert_eq!(diplomacy.overlord("BRI"), Some("FRA"));
        assert_eq!(diplomacy.overlord("FRA"), None);
        assert_eq!(diplomacy.memberships("FRA").len(), 2);
        assert!(diplomacy.member_laws("FRA", "hre").is_empty());

        let empty = GameData::default();
        assert!(empty.diplomacy().memberships("FRA").is_empty());
    }

    #[test]
    fn test_from_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        std::fs::write(&path, sample_json()).unwrap();
        let data = GameData::from_json_file(&path).unwrap();
        assert!(data.buildings.is_some());

        let missing = GameData::from_json_file(dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(missing, WikiError::FileRead { .. }));
    }
}
