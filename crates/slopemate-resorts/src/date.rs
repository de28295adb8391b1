//! Date bucket classification and the selected-date navigation state.
//!
//! All day-boundary math happens in one canonical time zone so bucket
//! classification is reproducible regardless of where the process runs.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use chrono_tz::Tz;

/// Canonical zone for day boundaries: the resorts are all in Korea.
pub const CANONICAL_TZ: Tz = chrono_tz::Asia::Seoul;

/// The provider serves today plus this many future days.
pub const MAX_FORECAST_DAYS: i64 = 7;

/// Retrieval strategy for a requested date relative to "today".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateBucket {
    Today,
    /// 1..=7 days ahead, served from the daily forecast array.
    Future(i64),
    Unsupported(UnsupportedReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnsupportedReason {
    Past,
    TooFar,
}

/// Calendar day of an instant in the canonical zone.
pub fn canonical_day(at: DateTime<Utc>) -> NaiveDate {
    at.with_timezone(&CANONICAL_TZ).date_naive()
}

/// Classify a selected date against "now". Both instants are normalized to
/// canonical-zone midnight before subtraction.
pub fn classify(now: DateTime<Utc>, selected: DateTime<Utc>) -> DateBucket {
    let offset = canonical_day(selected)
        .signed_duration_since(canonical_day(now))
        .num_days();

    match offset {
        o if o < 0 => DateBucket::Unsupported(UnsupportedReason::Past),
        0 => DateBucket::Today,
        o if o <= MAX_FORECAST_DAYS => DateBucket::Future(o),
        _ => DateBucket::Unsupported(UnsupportedReason::TooFar),
    }
}

/// Holds the user-selected date and enforces the allowed window
/// (today through today + 7, canonical-zone days).
#[derive(Debug, Clone)]
pub struct DateNavigator {
    selected: DateTime<Utc>,
}

impl DateNavigator {
    pub fn new(reference: DateTime<Utc>) -> Self {
        Self {
            selected: reference,
        }
    }

    pub fn selected(&self) -> DateTime<Utc> {
        self.selected
    }

    /// Earliest selectable day (today, canonical zone).
    pub fn min_allowed(&self) -> NaiveDate {
        Self::min_allowed_at(Utc::now())
    }

    /// Latest selectable day (today + 7, canonical zone).
    pub fn max_allowed(&self) -> NaiveDate {
        Self::max_allowed_at(Utc::now())
    }

    fn min_allowed_at(now: DateTime<Utc>) -> NaiveDate {
        canonical_day(now)
    }

    fn max_allowed_at(now: DateTime<Utc>) -> NaiveDate {
        canonical_day(now) + Duration::days(MAX_FORECAST_DAYS)
    }

    /// Shift the selection by whole days. A candidate outside the allowed
    /// window leaves the selection unchanged; no error is raised.
    pub fn move_by(&mut self, days: i64) {
        self.move_by_at(days, Utc::now());
    }

    fn move_by_at(&mut self, days: i64, now: DateTime<Utc>) {
        let candidate = self.selected + Duration::days(days);
        let candidate_day = canonical_day(candidate);

        if candidate_day < Self::min_allowed_at(now) || candidate_day > Self::max_allowed_at(now) {
            return;
        }

        self.selected = candidate;
    }

    /// Jump back to now, keeping the time-of-day component.
    pub fn reset_to_today(&mut self) {
        self.reset_to_today_at(Utc::now());
    }

    fn reset_to_today_at(&mut self, now: DateTime<Utc>) {
        self.selected = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    // Midday in Korea, far from both midnights.
    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 15, 3, 0, 0).single().unwrap()
    }

    #[test]
    fn boundary_offsets_map_to_expected_buckets() {
        let now = fixed_now();
        let at = |days: i64| now + Duration::days(days);

        assert_eq!(
            classify(now, at(-1)),
            DateBucket::Unsupported(UnsupportedReason::Past)
        );
        assert_eq!(classify(now, at(0)), DateBucket::Today);
        assert_eq!(classify(now, at(1)), DateBucket::Future(1));
        assert_eq!(classify(now, at(7)), DateBucket::Future(7));
        assert_eq!(
            classify(now, at(8)),
            DateBucket::Unsupported(UnsupportedReason::TooFar)
        );
    }

    #[test]
    fn classification_uses_canonical_days_not_utc_days() {
        // 16:00 UTC on Jan 15 is already Jan 16 in Seoul.
        let now = Utc.with_ymd_and_hms(2026, 1, 15, 16, 0, 0).single().unwrap();

        // Different UTC date, same Seoul date.
        let same_seoul_day = Utc.with_ymd_and_hms(2026, 1, 16, 2, 0, 0).single().unwrap();
        assert_eq!(classify(now, same_seoul_day), DateBucket::Today);

        // Same UTC date, previous Seoul date.
        let previous_seoul_day = Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).single().unwrap();
        assert_eq!(
            classify(now, previous_seoul_day),
            DateBucket::Unsupported(UnsupportedReason::Past)
        );
    }

    #[test]
    fn move_back_from_today_is_a_no_op() {
        let now = fixed_now();
        let mut nav = DateNavigator::new(now);

        nav.move_by_at(-1, now);

        assert_eq!(nav.selected(), now);
    }

    #[test]
    fn move_past_last_allowed_day_is_a_no_op() {
        let now = fixed_now();
        let mut nav = DateNavigator::new(now + Duration::days(MAX_FORECAST_DAYS));

        nav.move_by_at(1, now);

        assert_eq!(nav.selected(), now + Duration::days(MAX_FORECAST_DAYS));
    }

    #[test]
    fn move_within_window_shifts_selection() {
        let now = fixed_now();
        let mut nav = DateNavigator::new(now);

        nav.move_by_at(3, now);
        assert_eq!(nav.selected(), now + Duration::days(3));

        nav.move_by_at(-2, now);
        assert_eq!(nav.selected(), now + Duration::days(1));
    }

    #[test]
    fn allowed_window_spans_eight_canonical_days() {
        let now = fixed_now();
        assert_eq!(
            DateNavigator::max_allowed_at(now) - DateNavigator::min_allowed_at(now),
            Duration::days(MAX_FORECAST_DAYS)
        );
    }

    #[test]
    fn reset_then_classify_yields_today() {
        let now = fixed_now();
        let mut nav = DateNavigator::new(now);
        nav.move_by_at(5, now);

        nav.reset_to_today_at(now);

        assert_eq!(nav.selected(), now);
        assert_eq!(classify(now, nav.selected()), DateBucket::Today);
    }
}
