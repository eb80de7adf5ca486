//! Durations declared as separate day/week/month/year counts.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSpan {
    pub years: i64,
    pub months: i64,
    pub weeks: i64,
    pub days: i64,
}

impl TimeSpan {
    pub fn new(years: i64, months: i64, weeks: i64, days: i64) -> Self {
        TimeSpan {
            years,
            months,
            weeks,
            days,
        }
    }

    /// Carry whole years out of the smaller units: 365 days, 52 weeks and
    /// 12 months each make a year.
    pub fn normalized(self) -> Self {
        let mut span = self;
        if span.days >= 365 {
            span.years += span.days / 365;
            span.days %= 365;
        }
        if span.weeks >= 52 {
            span.years += span.weeks / 52;
            span.weeks %= 52;
        }
        if span.months >= 12 {
            span.years += span.months / 12;
            span.months %= 12;
        }
        span
    }

    /// One line per non-zero unit, or `""` when the normalized span is
    /// exactly the implicit default of `implicit_years` years.
    pub fn render(self, implicit_years: i64) -> String {
        let span = self.normalized();
        if span.years == implicit_years && span.months == 0 && span.weeks == 0 && span.days == 0 {
            return String::new();
        }
        [
            (span.years, "years"),
            (span.months, "months"),
            (span.weeks, "weeks"),
            (span.days, "days"),
        ]
        .iter()
        .filter(|(amount, _)| *amount > 0)
        .map(|(amount, unit)| format!("{} {}", amount, unit))
        .collect::<Vec<_>>()
        .join("\n")
    }
}
