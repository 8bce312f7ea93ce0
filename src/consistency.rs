use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

pub const CALENDAR_CELLS: usize = 35;
pub const WEEKDAY_HEADERS: [&str; 7] = ["D", "L", "M", "M", "J", "V", "S"];

/// Days on which a workout was marked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkoutLog {
    dates: Vec<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CalendarCell {
    pub date: NaiveDate,
    pub day: u32,
    pub today: bool,
    pub workout: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ConsistencySummary {
    pub week: usize,
    pub week_goal: usize,
    pub month: usize,
    pub streak: usize,
    pub week_label: String,
    pub streak_label: String,
}

impl WorkoutLog {
    pub fn from_dates(dates: Vec<NaiveDate>) -> Self {
        Self { dates }
    }

    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }

    /// Logs `today`. Returns false if it was already logged.
    pub fn mark(&mut self, today: NaiveDate) -> bool {
        if self.contains(today) {
            return false;
        }
        self.dates.push(today);
        true
    }

    /// Five weeks starting on the Sunday on or before the first of the month.
    pub fn calendar(&self, today: NaiveDate) -> Vec<CalendarCell> {
        let first = today.with_day(1).unwrap_or(today);
        let start = week_start(first);
        (0..CALENDAR_CELLS as i64)
            .map(|offset| {
                let date = start + Duration::days(offset);
                CalendarCell {
                    date,
                    day: date.day(),
                    today: date == today,
                    workout: self.contains(date),
                }
            })
            .collect()
    }

    pub fn weekly_count(&self, today: NaiveDate) -> usize {
        let start = week_start(today);
        (0..7)
            .map(|offset| start + Duration::days(offset))
            .filter(|date| self.contains(*date))
            .count()
    }

    pub fn monthly_count(&self, today: NaiveDate) -> usize {
        self.dates
            .iter()
            .filter(|date| date.year() == today.year() && date.month() == today.month())
            .count()
    }

    /// Consecutive logged days ending today or yesterday. A repeated date has
    /// a gap of zero and counts as contiguous.
    pub fn streak(&self, today: NaiveDate) -> usize {
        let mut sorted = self.dates.clone();
        sorted.sort_unstable_by(|a, b| b.cmp(a));

        let Some(&latest) = sorted.first() else {
            return 0;
        };
        let yesterday = today - Duration::days(1);
        if latest != today && latest != yesterday {
            return 0;
        }

        let mut cursor = latest;
        let mut streak = 0;
        for date in sorted {
            if (cursor - date).num_days() > 1 {
                break;
            }
            streak += 1;
            cursor = date;
        }
        streak
    }

    pub fn summary(&self, today: NaiveDate, week_goal: usize) -> ConsistencySummary {
        let week = self.weekly_count(today);
        let streak = self.streak(today);
        ConsistencySummary {
            week,
            week_goal,
            month: self.monthly_count(today),
            streak,
            week_label: format!("{week}/{week_goal}"),
            streak_label: format!("{streak} días"),
        }
    }
}

fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_sunday() as i64)
}
