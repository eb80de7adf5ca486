//! Country annotations derived from the relationship tables.
//!
//! Two independent pieces live here:
//!
//! - **Rank inference** for countries without an explicit rank, from the
//!   number of distinct provinces across the ownership location lists
//! - **Relationship notes**, in a fixed order: non-existence at game start,
//!   subject status, organization memberships, formability
//!
//! Nothing here fails. A missing table or an unknown key drops the one note
//! that needed it and the rest still render.

use indexmap::IndexSet;
use serde::Serialize;
use tracing::debug;

use crate::data::{Country, Entity, GameData};
use crate::format::wiki::{capitalize, flag, humanize_key};
use crate::options::CountryPageConfig;

/// Size tiers, smallest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum RankTier {
    County,
    Duchy,
    Kingdom,
    Empire,
}

impl RankTier {
    /// Classify by distinct province count. Zero provinces (no usable data)
    /// falls into the smallest tier.
    pub fn from_province_count(count: usize) -> Self {
        match count {
            0..=2 => RankTier::County,
            3..=5 => RankTier::Duchy,
            6..=12 => RankTier::Kingdom,
            _ => RankTier::Empire,
        }
    }

    /// Key of the matching country rank entity.
    pub fn key(&self) -> &'static str {
        match self {
            RankTier::County => "rank_county",
            RankTier::Duchy => "rank_duchy",
            RankTier::Kingdom => "rank_kingdom",
            RankTier::Empire => "rank_empire",
        }
    }
}

/// The ownership location lists, in the order they are scanned.
pub fn ownership_lists(country: &Country) -> [(&'static str, &[String]); 7] {
    [
        ("own_control_core", country.own_control_core.as_slice()),
        ("own_core", country.own_core.as_slice()),
        ("control", country.control.as_slice()),
        ("own_conquered", country.own_conquered.as_slice()),
        ("own_control_conquered", country.own_control_conquered.as_slice()),
        ("own_control_integrated", country.own_control_integrated.as_slice()),
        ("own_control_colony", country.own_control_colony.as_slice()),
    ]
}

/// Distinct provinces of every owned location, in first-seen order.
///
/// Locations that are unknown or have no province are skipped.
pub fn owned_provinces<'a>(country: &'a Country, data: &'a GameData) -> IndexSet<&'a str> {
    let mut provinces = IndexSet::new();
    for (_, locations) in ownership_lists(country) {
        for key in locations {
            match GameData::lookup(&data.locations, key).and_then(|l| l.province.as_deref()) {
                Some(province) => {
                    provinces.insert(province);
                }
                None => debug!(country = country.name(), location = %key, "location without province"),
            }
        }
    }
    provinces
}

pub fn infer_rank(country: &Country, data: &GameData) -> RankTier {
    RankTier::from_province_count(owned_provinces(country, data).len())
}

/// The explicit rank key, or the inferred one.
pub fn rank_key<'a>(country: &'a Country, data: &GameData) -> &'a str {
    match country.country_rank.as_deref() {
        Some(rank) if !rank.is_empty() => rank,
        _ => infer_rank(country, data).key(),
    }
}

/// Whether the country holds any location of its own at all.
pub fn holds_any_location(country: &Country) -> bool {
    ownership_lists(country)
        .iter()
        .any(|(_, locations)| !locations.is_empty())
}

/// Builds the notes column for countries.
pub struct RelationshipNotes<'a> {
    data: &'a GameData,
    config: &'a CountryPageConfig,
}

impl<'a> RelationshipNotes<'a> {
    pub fn new(data: &'a GameData, config: &'a CountryPageConfig) -> Self {
        RelationshipNotes { data, config }
    }

    /// All notes for a country in their fixed order.
    pub fn notes(&self, country: &Country) -> Vec<String> {
        let mut notes = Vec::new();
        notes.extend(self.existence_note(country));
        notes.extend(self.subject_note(country));
        notes.extend(self.membership_notes(country));
        notes.extend(self.formable_note(country));
        notes
    }

    /// Cores lost to others while holding nothing: the country only appears
    /// later in the game.
    pub fn existence_note(&self, country: &Country) -> Option<String> {
        if country.our_cores_conquered_by_others.is_empty() || holds_any_location(country) {
            return None;
        }
        Some(format!("Does not exist in {}", self.config.start_year))
    }

    pub fn subject_note(&self, country: &Country) -> Option<String> {
        let diplomacy = self.data.diplomacy();
        let overlord = diplomacy.overlord(country.name())?;
        let subject_type = diplomacy.subject_type(country.name()).unwrap_or("subject");

        let subject = match GameData::lookup(&self.data.subject_types, subject_type) {
            Some(entity) => entity.wiki_link_with_icon(),
            None => capitalize(subject_type),
        };
        let overlord = match GameData::lookup(&self.data.countries, overlord) {
            Some(entity) => entity.wiki_link_with_icon(),
            None => flag(overlord),
        };
        Some(format!("{} of {}", subject, overlord))
    }

    /// One note per membership in declaration order, minus the excluded
    /// organizations and unknown ones.
    pub fn membership_notes(&self, country: &Country) -> Vec<String> {
        let diplomacy = self.data.diplomacy();
        let mut notes = Vec::new();
        for organization in diplomacy.memberships(country.name()) {
            let lowered = organization.to_lowercase();
            if self
                .config
                .excluded_organizations
                .iter()
                .any(|excluded| excluded.to_lowercase() == lowered)
            {
                continue;
            }
            let Some(entity) = GameData::lookup(&self.data.international_organizations, organization)
            else {
                debug!(country = country.name(), organization = %organization, "unknown organization");
                continue;
            };
            if lowered == self.config.branch_organization.to_lowercase() {
                if let Some(note) = self.branch_note(country, organization) {
                    notes.push(note);
                    continue;
                }
            }
            notes.push(format!("Member of {}", entity.wiki_link_with_icon()));
        }
        notes
    }

    /// Membership in the branch organization is shown through the member's
    /// law, whose display name is resolved from policies, then laws, then the
    /// key itself.
    fn branch_note(&self, country: &Country, organization: &str) -> Option<String> {
        let law = self
            .data
            .diplomacy()
            .member_laws(country.name(), organization)
            .first()?;
        let display = GameData::lookup(&self.data.law_policies, law)
            .map(|policy| policy.display_name().to_string())
            .or_else(|| GameData::lookup(&self.data.laws, law).map(|l| l.display_name().to_string()))
            .unwrap_or_else(|| humanize_key(law));
        Some(format!(
            "Member of [[File:IO {}.png|24px]] [[{}|{}]]",
            display.to_lowercase(),
            self.config.branch_link,
            display
        ))
    }

    pub fn formable_note(&self, country: &Country) -> Option<String> {
        let formables = self.data.formable_countries.as_ref()?;
        if !formables.values().any(|formable| formable.tag == country.name()) {
            return None;
        }
        Some(
            "[[File:Country rank.png|24px|link=Formable countries]] [[Formable countries|Formable Country]]"
                .to_string(),
        )
    }
}
