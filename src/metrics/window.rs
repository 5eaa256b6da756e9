use chrono::{DateTime, Utc};

use super::clock::ReferenceTime;
use super::types::LogRecord;

/// Rolling window lengths in days.
const LAST_7_DAYS: i64 = 7;
const LAST_30_DAYS: i64 = 30;

/// Named reporting windows. They overlap and are reported side by side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TimeWindow {
    Today,
    ThisWeek,
    ThisMonth,
    Last7Days,
    Last30Days,
    AllTime,
}

impl TimeWindow {
    /// Windows in report order.
    pub const ALL: [Self; 6] = [
        Self::Today,
        Self::ThisWeek,
        Self::ThisMonth,
        Self::Last7Days,
        Self::Last30Days,
        Self::AllTime,
    ];

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Today => "today",
            Self::ThisWeek => "this_week",
            Self::ThisMonth => "this_month",
            Self::Last7Days => "last_7_days",
            Self::Last30Days => "last_30_days",
            Self::AllTime => "all_time",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Today => "TODAY",
            Self::ThisWeek => "THIS WEEK",
            Self::ThisMonth => "THIS MONTH",
            Self::Last7Days => "LAST 7 DAYS",
            Self::Last30Days => "LAST 30 DAYS",
            Self::AllTime => "ALL TIME",
        }
    }

    /// Earliest timestamp included, or `None` when the window is unbounded.
    #[must_use]
    pub fn start(self, reference: &ReferenceTime) -> Option<DateTime<Utc>> {
        match self {
            Self::Today => Some(reference.today_start()),
            Self::ThisWeek => Some(reference.week_start()),
            Self::ThisMonth => Some(reference.month_start()),
            Self::Last7Days => Some(reference.days_ago(LAST_7_DAYS)),
            Self::Last30Days => Some(reference.days_ago(LAST_30_DAYS)),
            Self::AllTime => None,
        }
    }

    /// Records of `records` that fall inside this window.
    pub fn select<'rec>(
        self,
        records: &'rec [LogRecord],
        reference: &ReferenceTime,
    ) -> impl Iterator<Item = &'rec LogRecord> + use<'rec> {
        let start = self.start(reference);
        records
            .iter()
            .filter(move |record| start.is_none_or(|bound| record.timestamp >= bound))
    }
}
