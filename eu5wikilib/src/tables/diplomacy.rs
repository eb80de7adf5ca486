//! Diplomacy tables: subject types, casus belli, wargoals and peace treaties.

use super::{background_style, Generator, Page, TableKind};
use crate::data::{CasusBelli, PeaceTreaty, SubjectType, Wargoal};
use crate::query::sorted_by_display_name;
use crate::render::{Column, RenderContext};
use crate::Result;

impl<'a> Generator<'a> {
    fn subject_type_columns(&self) -> Vec<Column<'_, SubjectType>> {
        vec![
            Column::new("Name", move |s: &SubjectType, _: &RenderContext<'_>| {
                format!(
                    "{}{}",
                    background_style(s.color.map(|c| c.css())),
                    self.name_iconbox(s, false)
                )
            }),
            Column::new("Type", |s: &SubjectType, ctx: &RenderContext<'_>| {
                ctx.display_name(&ctx.data.game_concepts, s.concept.as_deref())
            }),
            Column::new("Level", |s: &SubjectType, _: &RenderContext<'_>| s.level),
            Column::new("Government", |s: &SubjectType, ctx: &RenderContext<'_>| {
                ctx.reference(&ctx.data.government_types, s.government.as_deref())
            }),
            Column::new("Subject Pays", |s: &SubjectType, ctx: &RenderContext<'_>| {
                ctx.price(s.subject_pays.as_ref())
            }),
            Column::new("Ai Wants To Be Overlord", |s: &SubjectType, ctx: &RenderContext<'_>| {
                ctx.script_value(s.ai_wants_to_be_overlord.as_ref())
            }),
            Column::flag("Allow Declaring Wars", |s: &SubjectType| s.allow_declaring_wars),
            Column::new("Annexation Min Opinion", |s: &SubjectType, _: &RenderContext<'_>| {
                s.annexation_min_opinion
            }),
            Column::new(
                "Annexation Min Years Before",
                |s: &SubjectType, _: &RenderContext<'_>| s.annexation_min_years_before,
            ),
            Column::new("Annexation Speed", |s: &SubjectType, _: &RenderContext<'_>| {
                s.annexation_speed
            }),
            Column::new("Annexation Stall Opinion", |s: &SubjectType, _: &RenderContext<'_>| {
                s.annexation_stall_opinion
            }),
            Column::new("Can Attack", |s: &SubjectType, ctx: &RenderContext<'_>| {
                ctx.trigger(s.can_attack.as_ref())
            }),
            Column::flag("Can Be Force Broken In Peace Treaty", |s: &SubjectType| {
                s.can_be_force_broken_in_peace_treaty
            }),
            Column::flag("Can Change Heir Selection", |s: &SubjectType| {
                s.can_change_heir_selection
            }),
            Column::flag("Can Change Rank", |s: &SubjectType| s.can_change_rank),
            Column::flag("Can Overlord Build Buildings", |s: &SubjectType| {
                s.can_overlord_build_buildings
            }),
            Column::flag("Can Overlord Build Rgos", |s: &SubjectType| {
                s.can_overlord_build_rgos
            }),
            Column::flag("Can Overlord Build Roads", |s: &SubjectType| {
                s.can_overlord_build_roads
            }),
            Column::flag("Can Overlord Build Ships", |s: &SubjectType| {
                s.can_overlord_build_ships
            }),
            Column::flag("Can Overlord Recruit Regiments", |s: &SubjectType| {
                s.can_overlord_recruit_regiments
            }),
            Column::new("Can Rival", |s: &SubjectType, ctx: &RenderContext<'_>| {
                ctx.trigger(s.can_rival.as_ref())
            }),
            Column::new("Creation Visible", |s: &SubjectType, ctx: &RenderContext<'_>| {
                ctx.trigger(s.creation_visible.as_ref())
            }),
            Column::new(
                "Diplo Chance Accept Overlord",
                |s: &SubjectType, ctx: &RenderContext<'_>| {
                    ctx.tree_keys(s.diplo_chance_accept_overlord.as_ref())
                },
            ),
            Column::new(
                "Diplo Chance Accept Subject",
                |s: &SubjectType, ctx: &RenderContext<'_>| {
                    ctx.tree_keys(s.diplo_chance_accept_subject.as_ref())
                },
            ),
            Column::new(
                "Diplomatic Capacity Cost Scale",
                |s: &SubjectType, _: &RenderContext<'_>| s.diplomatic_capacity_cost_scale,
            ),
            Column::new(
                "Enabled Through Diplomacy",
                |s: &SubjectType, ctx: &RenderContext<'_>| {
                    ctx.trigger(s.enabled_through_diplomacy.as_ref())
                },
            ),
            Column::flag("Fleet Basing Rights", |s: &SubjectType| s.fleet_basing_rights),
            Column::flag("Food Access", |s: &SubjectType| s.food_access),
            Column::new(
                "Great Power Score Transfer",
                |s: &SubjectType, _: &RenderContext<'_>| s.great_power_score_transfer,
            ),
            Column::flag("Has Limited Diplomacy", |s: &SubjectType| s.has_limited_diplomacy),
            Column::flag("Has Overlords Ruler", |s: &SubjectType| s.has_overlords_ruler),
            Column::new(
                "Institution Spread To Overlord",
                |s: &SubjectType, ctx: &RenderContext<'_>| {
                    ctx.script_value(s.institution_spread_to_overlord.as_ref())
                },
            ),
            Column::new(
                "Institution Spread To Subject",
                |s: &SubjectType, ctx: &RenderContext<'_>| {
                    ctx.script_value(s.institution_spread_to_subject.as_ref())
                },
            ),
            Column::flag("Is Colonial Subject", |s: &SubjectType| s.is_colonial_subject),
            Column::new(
                "Join Defensive Wars Always",
                |s: &SubjectType, ctx: &RenderContext<'_>| {
                    ctx.trigger(s.join_defensive_wars_always.as_ref())
                },
            ),
            Column::new(
                "Join Offensive Wars Always",
                |s: &SubjectType, ctx: &RenderContext<'_>| {
                    ctx.trigger(s.join_offensive_wars_always.as_ref())
                },
            ),
            Column::new(
                "Merchants To Overlord Fraction",
                |s: &SubjectType, _: &RenderContext<'_>| s.merchants_to_overlord_fraction,
            ),
            Column::new(
                "Minimum Opinion For Offer",
                |s: &SubjectType, _: &RenderContext<'_>| s.minimum_opinion_for_offer,
            ),
            Column::new("On Enable", |s: &SubjectType, ctx: &RenderContext<'_>| {
                ctx.effect(s.on_enable.as_ref())
            }),
            Column::new("On Disable", |s: &SubjectType, ctx: &RenderContext<'_>| {
                ctx.effect(s.on_disable.as_ref())
            }),
            Column::flag("Only Overlord Court Language", |s: &SubjectType| {
                s.only_overlord_court_language
            }),
            Column::flag("Only Overlord Culture", |s: &SubjectType| s.only_overlord_culture),
            Column::flag("Only Overlord Or Kindred Culture", |s: &SubjectType| {
                s.only_overlord_or_kindred_culture
            }),
            Column::flag("Overlord Can Cancel", |s: &SubjectType| s.overlord_can_cancel),
            Column::flag("Overlord Can Enforce Peace On Subject", |s: &SubjectType| {
                s.overlord_can_enforce_peace_on_subject
            }),
            Column::flag("Overlord Inherit If No Heir", |s: &SubjectType| {
                s.overlord_inherit_if_no_heir
            }),
            Column::new("Overlord Modifier", |s: &SubjectType, ctx: &RenderContext<'_>| {
                ctx.modifiers(&s.overlord_modifier)
            }),
            Column::flag("Overlord Share Exploration", |s: &SubjectType| {
                s.overlord_share_exploration
            }),
            Column::new(
                "Release Country Enabled",
                |s: &SubjectType, ctx: &RenderContext<'_>| {
                    ctx.trigger(s.release_country_enabled.as_ref())
                },
            ),
            Column::new("Strength Vs Overlord", |s: &SubjectType, _: &RenderContext<'_>| {
                s.strength_vs_overlord
            }),
            Column::yes_no("Subject Can Cancel", |s: &SubjectType| s.subject_can_cancel),
            Column::new(
                "Subject Creation Enabled",
                |s: &SubjectType, ctx: &RenderContext<'_>| {
                    ctx.trigger(s.subject_creation_enabled.as_ref())
                },
            ),
            Column::new("Subject Modifier", |s: &SubjectType, ctx: &RenderContext<'_>| {
                ctx.modifiers(&s.subject_modifier)
            }),
            Column::flag("Use Overlord Laws", |s: &SubjectType| s.use_overlord_laws),
            Column::yes_no("Use Overlord Map Color", |s: &SubjectType| s.use_overlord_map_color),
            Column::flag("Use Overlord Map Name", |s: &SubjectType| s.use_overlord_map_name),
            Column::new(
                "Visible Through Diplomacy",
                |s: &SubjectType, ctx: &RenderContext<'_>| {
                    ctx.trigger(s.visible_through_diplomacy.as_ref())
                },
            ),
            Column::new(
                "Visible Through Treaty",
                |s: &SubjectType, ctx: &RenderContext<'_>| {
                    ctx.trigger(s.visible_through_treaty.as_ref())
                },
            ),
            Column::new("War Score Cost", |s: &SubjectType, _: &RenderContext<'_>| {
                s.war_score_cost
            }),
        ]
    }

    /// Subject types ordered by level, then display name.
    pub fn subject_types_page(&self) -> Result<Page> {
        let mut subject_types = sorted_by_display_name(self.data().subject_types()?.values());
        subject_types.sort_by_key(|s| s.level);
        Ok(self.flat_table_page(
            TableKind::SubjectTypes,
            subject_types,
            &self.subject_type_columns(),
        ))
    }

    fn casus_belli_columns(&self) -> Vec<Column<'_, CasusBelli>> {
        vec![
            Column::new("Name", move |c: &CasusBelli, _: &RenderContext<'_>| {
                self.name_iconbox(c, false)
            }),
            Column::new("War Goal Type", |c: &CasusBelli, ctx: &RenderContext<'_>| {
                ctx.reference(&ctx.data.wargoals, c.war_goal_type.as_deref())
            }),
            Column::new(
                "Additional War Enthusiasm",
                |c: &CasusBelli, _: &RenderContext<'_>| c.additional_war_enthusiasm,
            ),
            Column::new(
                "Additional War Enthusiasm Attacker",
                |c: &CasusBelli, _: &RenderContext<'_>| c.additional_war_enthusiasm_attacker,
            ),
            Column::new(
                "Additional War Enthusiasm Defender",
                |c: &CasusBelli, _: &RenderContext<'_>| c.additional_war_enthusiasm_defender,
            ),
            Column::new("Ai Cede Location Desire", |c: &CasusBelli, ctx: &RenderContext<'_>| {
                ctx.script_value(c.ai_cede_location_desire.as_ref())
            }),
            Column::new("Ai Cede Province Desire", |c: &CasusBelli, ctx: &RenderContext<'_>| {
                ctx.script_value(c.ai_cede_province_desire.as_ref())
            }),
            Column::new("Ai Selection Desire", |c: &CasusBelli, ctx: &RenderContext<'_>| {
                ctx.script_value(c.ai_selection_desire.as_ref())
            }),
            Column::new("Ai Subjugation Desire", |c: &CasusBelli, _: &RenderContext<'_>| {
                c.ai_subjugation_desire
            }),
            Column::new("Allow Creation", |c: &CasusBelli, ctx: &RenderContext<'_>| {
                ctx.trigger(c.allow_creation.as_ref())
            }),
            Column::new("Allow Declaration", |c: &CasusBelli, ctx: &RenderContext<'_>| {
                ctx.trigger(c.allow_declaration.as_ref())
            }),
            Column::flag("Allow Ports For Reach Ai", |c: &CasusBelli| {
                c.allow_ports_for_reach_ai
            }),
            Column::flag("Allow Release Areas", |c: &CasusBelli| c.allow_release_areas),
            Column::flag("Allow Separate Peace", |c: &CasusBelli| c.allow_separate_peace),
            Column::new(
                "Antagonism Reduction Per Warworth Defender",
                |c: &CasusBelli, _: &RenderContext<'_>| {
                    c.antagonism_reduction_per_warworth_defender
                },
            ),
            Column::flag("Can Expire", |c: &CasusBelli| c.can_expire),
            Column::flag("Cut Down In Size Cb", |c: &CasusBelli| c.cut_down_in_size_cb),
            Column::new(
                "Max Warscore From Battles",
                |c: &CasusBelli, _: &RenderContext<'_>| c.max_warscore_from_battles,
            ),
            Column::yes_no("No Cb", |c: &CasusBelli| c.no_cb),
            Column::new("Province", |c: &CasusBelli, ctx: &RenderContext<'_>| {
                ctx.trigger(c.province.as_ref())
            }),
            Column::new("Speed", |c: &CasusBelli, _: &RenderContext<'_>| c.speed),
            Column::flag("Trade", |c: &CasusBelli| c.trade),
            Column::new("Visible", |c: &CasusBelli, ctx: &RenderContext<'_>| {
                ctx.trigger(c.visible.as_ref())
            }),
        ]
    }

    pub fn casus_belli_page(&self) -> Result<Page> {
        let casus_belli = sorted_by_display_name(self.data().casus_belli()?.values());
        Ok(self.flat_table_page(TableKind::CasusBelli, casus_belli, &self.casus_belli_columns()))
    }

    fn wargoal_columns(&self) -> Vec<Column<'_, Wargoal>> {
        vec![
            Column::new("Name", move |w: &Wargoal, _: &RenderContext<'_>| {
                self.name_iconbox(w, false)
            }),
            Column::new("Type", |w: &Wargoal, _: &RenderContext<'_>| w.wargoal_type.clone()),
            Column::new("War Name", |w: &Wargoal, ctx: &RenderContext<'_>| {
                ctx.localized(w.war_name.as_deref())
            }),
            Column::flag("War Name Is Country Order Agnostic", |w: &Wargoal| {
                w.war_name_is_country_order_agnostic
            }),
            Column::new("Ticking War Score", |w: &Wargoal, _: &RenderContext<'_>| {
                w.ticking_war_score
            }),
            Column::new("Attacker", |w: &Wargoal, ctx: &RenderContext<'_>| {
                ctx.tree_keys(w.attacker.as_ref())
            }),
            Column::new("Defender", |w: &Wargoal, ctx: &RenderContext<'_>| {
                ctx.tree_keys(w.defender.as_ref())
            }),
        ]
    }

    pub fn wargoals_page(&self) -> Result<Page> {
        let wargoals = sorted_by_display_name(self.data().wargoals()?.values());
        Ok(self.flat_table_page(TableKind::Wargoals, wargoals, &self.wargoal_columns()))
    }

    fn peace_treaty_columns(&self) -> Vec<Column<'_, PeaceTreaty>> {
        vec![
            Column::new("Name", move |p: &PeaceTreaty, _: &RenderContext<'_>| {
                self.name_iconbox(p, false)
            }),
            Column::new("Category", |p: &PeaceTreaty, _: &RenderContext<'_>| {
                p.category.clone()
            }),
            Column::new("Cost", |p: &PeaceTreaty, ctx: &RenderContext<'_>| {
                ctx.script_value(p.cost.as_ref())
            }),
            Column::new("Base Antagonism", |p: &PeaceTreaty, ctx: &RenderContext<'_>| {
                ctx.script_value(p.base_antagonism.as_ref())
            }),
            Column::new("Antagonism Type", |p: &PeaceTreaty, ctx: &RenderContext<'_>| {
                ctx.localized(p.antagonism_type.as_deref())
            }),
            Column::new("Ai Desire", |p: &PeaceTreaty, ctx: &RenderContext<'_>| {
                ctx.script_value(p.ai_desire.as_ref())
            }),
            Column::flag("Are Targets Exclusive", |p: &PeaceTreaty| p.are_targets_exclusive),
            Column::flag("Blocks Full Annexation", |p: &PeaceTreaty| {
                p.blocks_full_annexation
            }),
            Column::new("Potential", |p: &PeaceTreaty, ctx: &RenderContext<'_>| {
                ctx.trigger(p.potential.as_ref())
            }),
            Column::new("Allow", |p: &PeaceTreaty, ctx: &RenderContext<'_>| {
                ctx.trigger(p.allow.as_ref())
            }),
            Column::new("Effect", |p: &PeaceTreaty, ctx: &RenderContext<'_>| {
                ctx.effect(p.effect.as_ref())
            }),
            Column::new("Select Trigger", |p: &PeaceTreaty, ctx: &RenderContext<'_>| {
                ctx.tree_keys(p.select_trigger.as_ref())
            }),
        ]
    }

    pub fn peace_treaties_page(&self) -> Result<Page> {
        let treaties = sorted_by_display_name(self.data().peace_treaties()?.values());
        Ok(self.flat_table_page(
            TableKind::PeaceTreaties,
            treaties,
            &self.peace_treaty_columns(),
        ))
    }
}
