use chrono::{
    DateTime, Datelike, Local, LocalResult, NaiveDate, NaiveDateTime, TimeDelta, TimeZone, Utc,
};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Zone used for calendar boundaries, naive log timestamps and rendering.
#[derive(Debug, Clone, Copy, Default, ValueEnum, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TimezonePolicy {
    #[default]
    Local,
    Utc,
}

impl TimezonePolicy {
    /// Wall-clock reading of `instant` in this zone.
    #[must_use]
    pub fn wall_clock(self, instant: DateTime<Utc>) -> NaiveDateTime {
        match self {
            Self::Local => instant.with_timezone(&Local).naive_local(),
            Self::Utc => instant.naive_utc(),
        }
    }

    /// Resolves a wall-clock reading in this zone to an instant.
    ///
    /// Ambiguous readings (DST fold) take the earlier instant; readings that
    /// fall into a DST gap are moved past the gap.
    #[must_use]
    pub fn resolve(self, naive: NaiveDateTime) -> DateTime<Utc> {
        match self {
            Self::Utc => naive.and_utc(),
            Self::Local => match Local.from_local_datetime(&naive) {
                LocalResult::Single(value) | LocalResult::Ambiguous(value, _) => {
                    value.with_timezone(&Utc)
                }
                LocalResult::None => naive
                    .checked_add_signed(TimeDelta::hours(1))
                    .and_then(|shifted| Local.from_local_datetime(&shifted).earliest())
                    .map_or_else(|| naive.and_utc(), |value| value.with_timezone(&Utc)),
            },
        }
    }

    #[must_use]
    pub fn format(self, instant: DateTime<Utc>, pattern: &str) -> String {
        self.wall_clock(instant).format(pattern).to_string()
    }
}

/// The "now" every window is anchored to, frozen for one invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceTime {
    pub now: DateTime<Utc>,
    pub timezone: TimezonePolicy,
}

impl ReferenceTime {
    #[must_use]
    pub const fn new(now: DateTime<Utc>, timezone: TimezonePolicy) -> Self {
        Self { now, timezone }
    }

    #[must_use]
    pub fn current(timezone: TimezonePolicy) -> Self {
        Self::new(Utc::now(), timezone)
    }

    #[must_use]
    pub fn today_start(&self) -> DateTime<Utc> {
        self.midnight_of(self.timezone.wall_clock(self.now).date())
    }

    /// Monday 00:00 of the current week.
    #[must_use]
    pub fn week_start(&self) -> DateTime<Utc> {
        let today = self.timezone.wall_clock(self.now).date();
        let back = TimeDelta::days(i64::from(today.weekday().num_days_from_monday()));
        let monday = today.checked_sub_signed(back).unwrap_or(today);
        self.midnight_of(monday)
    }

    #[must_use]
    pub fn month_start(&self) -> DateTime<Utc> {
        let today = self.timezone.wall_clock(self.now).date();
        let first = today.with_day(1).unwrap_or(today);
        self.midnight_of(first)
    }

    #[must_use]
    pub fn days_ago(&self, days: i64) -> DateTime<Utc> {
        self.now
            .checked_sub_signed(TimeDelta::days(days))
            .unwrap_or(DateTime::<Utc>::MIN_UTC)
    }

    #[must_use]
    pub fn format(&self, instant: DateTime<Utc>, pattern: &str) -> String {
        self.timezone.format(instant, pattern)
    }

    fn midnight_of(&self, date: NaiveDate) -> DateTime<Utc> {
        self.timezone.resolve(date.and_time(chrono::NaiveTime::MIN))
    }
}
