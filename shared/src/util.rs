use chrono::{DateTime, Utc};

/// Whole minutes elapsed between `start` and `now`, clamped at zero.
///
/// A `now` earlier than `start` (clock skew, manual clock rewound) yields 0.
pub fn elapsed_minutes(start: DateTime<Utc>, now: DateTime<Utc>) -> u32 {
    let minutes = now.signed_duration_since(start).num_minutes();
    u32::try_from(minutes.max(0)).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_elapsed_minutes_floors_partial_minutes() {
        let start = Utc.with_ymd_and_hms(2026, 10, 19, 20, 0, 0).unwrap();
        let now = start + Duration::seconds(179);
        assert_eq!(elapsed_minutes(start, now), 2);
    }

    #[test]
    fn test_elapsed_minutes_never_negative() {
        let start = Utc.with_ymd_and_hms(2026, 10, 19, 20, 0, 0).unwrap();
        let now = start - Duration::minutes(5);
        assert_eq!(elapsed_minutes(start, now), 0);
    }
}
