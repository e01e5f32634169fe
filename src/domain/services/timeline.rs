use chrono::{DateTime, NaiveDate, Utc};

use crate::domain::models::{festival::Festival, show::Show};

/// A record that can be placed on the listing timeline through a single
/// anchor: festivals anchor on their first day, shows on curtain time.
pub trait Scheduled {
    type Anchor: Ord + Copy;

    fn anchor(&self) -> Self::Anchor;
}

impl Scheduled for Festival {
    type Anchor = NaiveDate;

    fn anchor(&self) -> NaiveDate {
        self.date_from
    }
}

impl Scheduled for Show {
    type Anchor = DateTime<Utc>;

    fn anchor(&self) -> DateTime<Utc> {
        self.show_starts
    }
}

/// Records strictly after `now`, soonest first. An anchor equal to `now`
/// belongs to `past`, never here, so no record falls into both lists.
pub fn upcoming<T: Scheduled>(now: T::Anchor, mut records: Vec<T>) -> Vec<T> {
    records.retain(|r| r.anchor() > now);
    records.sort_by_key(|r| r.anchor());
    records
}

/// Records at or before `now`, most recent first, capped at `limit`.
/// Equal anchors keep their input order (both sorts are stable).
pub fn past<T: Scheduled>(now: T::Anchor, mut records: Vec<T>, limit: usize) -> Vec<T> {
    records.retain(|r| r.anchor() <= now);
    records.sort_by(|a, b| b.anchor().cmp(&a.anchor()));
    records.truncate(limit);
    records
}
