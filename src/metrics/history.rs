use crate::model::{CommitRecord, History};
use crate::util::rank;
use chrono::{DateTime, Datelike, Duration, FixedOffset, NaiveDate, Timelike};
use std::collections::{BTreeSet, HashMap};

const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
const TOP_DAYS: usize = 2;
const TOP_HOURS: usize = 3;

pub fn compute(
    all: &[CommitRecord],
    yours: &[&CommitRecord],
    now: DateTime<FixedOffset>,
) -> History {
    let first = all.iter().filter_map(|c| c.authored_at).min();
    let last = all.iter().filter_map(|c| c.authored_at).max();

    let stamps: Vec<DateTime<FixedOffset>> = yours.iter().filter_map(|c| c.authored_at).collect();
    let within = |days: i64| {
        let cutoff = now - Duration::days(days);
        stamps.iter().filter(|ts| **ts >= cutoff).count() as u64
    };

    let dates: BTreeSet<NaiveDate> = stamps.iter().map(|ts| ts.date_naive()).collect();
    let (longest_streak, current_streak) = streaks(&dates, now.date_naive());

    History {
        first,
        last,
        l30: within(30),
        l90: within(90),
        l365: within(365),
        longest_streak,
        current_streak,
        top_days: top_days(&stamps),
        top_hours: top_hours(&stamps),
    }
}

/// Longest run of consecutive calendar days, and the run ending today
/// (zero when the latest date is not `today`).
pub fn streaks(dates: &BTreeSet<NaiveDate>, today: NaiveDate) -> (u32, u32) {
    let mut longest: u32 = 0;
    let mut run: u32 = 0;
    let mut prev: Option<NaiveDate> = None;

    for &date in dates {
        run = match prev {
            Some(p) if p.succ_opt() == Some(date) => run + 1,
            _ => 1,
        };
        longest = longest.max(run);
        prev = Some(date);
    }

    let current = if prev == Some(today) { run } else { 0 };
    (longest, current)
}

fn top_days(stamps: &[DateTime<FixedOffset>]) -> Vec<String> {
    let mut tally: HashMap<u32, u64> = HashMap::new();
    for ts in stamps {
        *tally.entry(ts.weekday().num_days_from_monday()).or_insert(0) += 1;
    }
    rank(tally, TOP_DAYS)
        .into_iter()
        .map(|(day, _)| WEEKDAYS[day as usize].to_string())
        .collect()
}

fn top_hours(stamps: &[DateTime<FixedOffset>]) -> Vec<String> {
    let mut tally: HashMap<u32, u64> = HashMap::new();
    for ts in stamps {
        *tally.entry(ts.hour()).or_insert(0) += 1;
    }
    rank(tally, TOP_HOURS)
        .into_iter()
        .map(|(hour, _)| hour_window(hour))
        .collect()
}

pub fn hour_window(hour: u32) -> String {
    format!("{:02}:00-{:02}:00", hour, (hour + 1) % 24)
}
