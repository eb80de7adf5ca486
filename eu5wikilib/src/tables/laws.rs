//! Laws by category, with each law's policies as a nested table.

use indexmap::IndexMap;
use tracing::debug;

use super::{Generator, Page};
use crate::data::{Entity, GameData, Law, LawPolicy};
use crate::format::wiki::{section_heading, wiki_list};
use crate::options::LawLayout;
use crate::output::section::Section;
use crate::output::table::make_wiki_table;
use crate::query::group_by;
use crate::render::{render_row, render_rows, Column, RenderContext, TimeSpan};
use crate::Result;

/// Section key of a law group: `laws_{category}` or
/// `laws_io_{type}_{category}`.
pub fn law_group_key(io_type: &str, category: &str) -> String {
    if io_type.is_empty() {
        format!("laws_{}", category)
    } else {
        format!("laws_io_{}_{}", io_type, category)
    }
}

/// Label used for a law attribute in the heading-per-law layout.
fn definition_label(label: &str) -> &str {
    match label {
        "Country" | "Government type" => "Only for",
        "Religion groups" => "Requires one of the following religion groups",
        other => other,
    }
}

fn definition_line(label: &str, value: &str) -> String {
    if value.contains('\n') || value.starts_with('*') {
        format!(";{}:\n{}", label, value)
    } else {
        format!(";{}: {}", label, value)
    }
}

impl<'a> Generator<'a> {
    /// Laws grouped by `(io_type, law_category)` in first-seen order; each
    /// group keeps declaration order.
    pub fn law_groups(&self) -> Result<IndexMap<(String, String), Vec<&'a Law>>> {
        let laws = self.data().laws()?;
        Ok(group_by(laws.values(), |law: &Law| {
            (law.io_type.clone(), law.law_category.clone())
        }))
    }

    fn law_columns(&self) -> Vec<Column<'_, Law>> {
        vec![
            Column::new("Name", move |law: &Law, _: &RenderContext<'_>| {
                self.name_iconbox(law, false)
            }),
            Column::new("Potential", |law: &Law, ctx: &RenderContext<'_>| {
                ctx.trigger(law.potential.as_ref())
            }),
            Column::new("Allow", |law: &Law, ctx: &RenderContext<'_>| {
                ctx.trigger(law.allow.as_ref())
            }),
            Column::new("Country", |law: &Law, ctx: &RenderContext<'_>| {
                ctx.localized(law.law_country_group.as_deref())
            }),
            Column::new("Government type", |law: &Law, ctx: &RenderContext<'_>| {
                ctx.localized(law.law_gov_group.as_deref())
            }),
            Column::new("Religion groups", |law: &Law, ctx: &RenderContext<'_>| {
                wiki_list(
                    law.law_religion_group
                        .iter()
                        .map(|group| ctx.localized(Some(group))),
                    1,
                )
            }),
            Column::new("Locked", |law: &Law, ctx: &RenderContext<'_>| {
                ctx.trigger(law.locked.as_ref())
            }),
            Column::yes_no("Requires Vote", |law: &Law| law.requires_vote),
            Column::yes_no("Unique", |law: &Law| law.unique),
            Column::new("Policies", move |law: &Law, _: &RenderContext<'_>| {
                self.policy_table(law)
            }),
        ]
    }

    fn policy_columns(&self) -> Vec<Column<'_, LawPolicy>> {
        let implicit_years = self.config.laws.implicit_years;
        vec![
            Column::new("width=20% | Policy", move |p: &LawPolicy, _: &RenderContext<'_>| {
                self.titled_description(p)
            }),
            Column::new("Allow", |p: &LawPolicy, ctx: &RenderContext<'_>| {
                ctx.trigger(p.allow.as_ref())
            }),
            Column::new("Country Modifier", |p: &LawPolicy, ctx: &RenderContext<'_>| {
                ctx.modifiers(&p.country_modifier)
            }),
            Column::new("Estate Preferences", |p: &LawPolicy, ctx: &RenderContext<'_>| {
                ctx.references(&ctx.data.estates, &p.estate_preferences)
            }),
            Column::new(
                "Time to implement",
                move |p: &LawPolicy, _: &RenderContext<'_>| {
                    TimeSpan::new(p.years, p.months, p.weeks, p.days).render(implicit_years)
                },
            ),
            Column::new("On Activate", |p: &LawPolicy, ctx: &RenderContext<'_>| {
                ctx.effect(p.on_activate.as_ref())
            }),
            Column::new("On Deactivate", |p: &LawPolicy, ctx: &RenderContext<'_>| {
                ctx.effect(p.on_deactivate.as_ref())
            }),
            Column::new("On Pay Price", |p: &LawPolicy, ctx: &RenderContext<'_>| {
                ctx.effect(p.on_pay_price.as_ref())
            }),
            Column::new("On Fully Activated", |p: &LawPolicy, ctx: &RenderContext<'_>| {
                ctx.effect(p.on_fully_activated.as_ref())
            }),
            Column::new("Potential", |p: &LawPolicy, ctx: &RenderContext<'_>| {
                ctx.trigger(p.potential.as_ref())
            }),
            Column::new("Price", |p: &LawPolicy, ctx: &RenderContext<'_>| {
                ctx.price(p.price.as_ref())
            }),
            Column::new(
                "Diplomatic Capacity Cost",
                |p: &LawPolicy, ctx: &RenderContext<'_>| {
                    ctx.localized(p.diplomatic_capacity_cost.as_deref())
                },
            ),
            Column::yes_no("Gold", |p: &LawPolicy| p.gold),
            Column::yes_no("Manpower", |p: &LawPolicy| p.manpower),
            Column::yes_no("Allow Member Annexation", |p: &LawPolicy| {
                p.allow_member_annexation
            }),
            Column::new("Annexation Speed", |p: &LawPolicy, _: &RenderContext<'_>| {
                p.annexation_speed
            }),
            Column::yes_no("Can Build Buildings In Members", |p: &LawPolicy| {
                p.can_build_buildings_in_members
            }),
            Column::yes_no("Can Build Rgos In Members", |p: &LawPolicy| {
                p.can_build_rgos_in_members
            }),
            Column::yes_no("Can Build Roads In Members", |p: &LawPolicy| {
                p.can_build_roads_in_members
            }),
            Column::yes_no("Has Parliament", |p: &LawPolicy| p.has_parliament),
            Column::new(
                "International Organization Modifier",
                |p: &LawPolicy, ctx: &RenderContext<'_>| {
                    ctx.modifiers(&p.international_organization_modifier)
                },
            ),
            Column::new("Leader Change Method", |p: &LawPolicy, ctx: &RenderContext<'_>| {
                ctx.localized(p.leader_change_method.as_deref())
            }),
            Column::new(
                "Leader Change Trigger Type",
                |p: &LawPolicy, ctx: &RenderContext<'_>| {
                    ctx.localized(p.leader_change_trigger_type.as_deref())
                },
            ),
            Column::new("Leader Type", |p: &LawPolicy, ctx: &RenderContext<'_>| {
                ctx.localized(p.leader_type.as_deref())
            }),
            Column::new(
                "Leadership Election Resolution",
                |p: &LawPolicy, ctx: &RenderContext<'_>| {
                    ctx.localized(p.leadership_election_resolution.as_deref())
                },
            ),
            Column::new(
                "Months Between Leader Changes",
                |p: &LawPolicy, _: &RenderContext<'_>| p.months_between_leader_changes,
            ),
            Column::new("Opinion Bonus", |p: &LawPolicy, _: &RenderContext<'_>| {
                p.opinion_bonus
            }),
            Column::new("Payments Implemented", |p: &LawPolicy, ctx: &RenderContext<'_>| {
                wiki_list(
                    p.payments_implemented
                        .iter()
                        .map(|payment| ctx.localized(Some(payment))),
                    1,
                )
            }),
            Column::new("Trust Bonus", |p: &LawPolicy, _: &RenderContext<'_>| {
                p.trust_bonus
            }),
        ]
    }

    /// The law's policies in declaration order; unknown keys are skipped.
    pub fn law_policies(&self, law: &Law) -> Vec<&'a LawPolicy> {
        law.policies
            .iter()
            .filter_map(|key| {
                let policy = GameData::lookup(&self.data().law_policies, key);
                if policy.is_none() {
                    debug!(law = law.name(), policy = %key, "unknown law policy");
                }
                policy
            })
            .collect()
    }

    pub fn policy_table(&self, law: &Law) -> String {
        let rows = render_rows(
            self.law_policies(law),
            &self.policy_columns(),
            &self.ctx,
        );
        make_wiki_table(rows, &self.table_options())
    }

    /// A law as a heading with definition lines and its policy table.
    fn law_definition(&self, law: &Law, columns: &[Column<'_, Law>], level: usize) -> String {
        let row = render_row(law, columns, &self.ctx);
        let mut lines = vec![
            section_heading(law.display_name(), level),
            self.header_iconbox(law),
        ];
        lines.extend(
            row.labels()
                .filter(|label| !matches!(*label, "Name" | "Policies"))
                .filter_map(|label| {
                    let value = row.text(label);
                    (!value.is_empty()).then(|| definition_line(definition_label(label), &value))
                }),
        );
        let policies = row.text("Policies");
        if !policies.is_empty() {
            lines.push(policies);
        }
        lines.join("\n")
    }

    pub fn laws_page(&self) -> Result<Page> {
        let groups = self.law_groups()?;
        let columns = self.law_columns();
        let mut page = Page::new();
        for ((io_type, category), laws) in groups {
            let depth = usize::from(!io_type.is_empty());
            page.heading(&self.data().localize_or_key(&category), 2 + depth);
            let body = match self.config.law_layout {
                LawLayout::Tables => make_wiki_table(
                    render_rows(laws, &columns, &self.ctx),
                    &self.table_options(),
                ),
                LawLayout::Sections => laws
                    .iter()
                    .map(|law| self.law_definition(law, &columns, 3 + depth))
                    .collect::<Vec<_>>()
                    .join("\n"),
            };
            page.section(Section::new(law_group_key(&io_type, &category), body).versioned());
        }
        Ok(page)
    }
}
