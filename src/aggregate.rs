//! Shift reconstruction from raw check-in rows.
//!
//! Check-ins are stored as flat rows; a shift only exists as a derived view.
//! This module rebuilds that view: bucket the rows by calendar day, order
//! each bucket by timestamp, then sum the durations of consecutive
//! clock-in/clock-out pairs.

use indexmap::IndexMap;

use crate::models::shift::{Shift, ShiftCheckin};

/// Rebuild per-day [`Shift`]s from an unordered batch of check-ins.
///
/// Every input record ends up in exactly one shift; nothing is dropped or
/// duplicated. Within a shift the check-ins are sorted ascending by
/// timestamp (stable, so equal timestamps keep their input order) and worked
/// time is the sum over disjoint consecutive pairs (1st+2nd, 3rd+4th, ...).
/// An odd trailing check-in stays in the list but contributes no time.
///
/// Pairs are taken by position, not by tag, so a pair whose later event
/// sorts first yields a negative contribution. That mirrors what the stored
/// data says rather than guessing a correction; rejecting bad pairs belongs
/// on the write path.
///
/// Shift order in the result follows first encounter of each date and is
/// not part of the contract. Shift ids are per-response indexes, opaque to
/// callers.
pub fn aggregate_shifts(records: Vec<ShiftCheckin>) -> Vec<Shift> {
    let mut buckets: IndexMap<chrono::NaiveDate, Vec<ShiftCheckin>> = IndexMap::new();
    for record in records {
        buckets.entry(record.checkin_date).or_default().push(record);
    }

    buckets
        .into_iter()
        .enumerate()
        .map(|(index, (date, mut checkins))| {
            checkins.sort_by_key(|c| c.checkin_ts);

            let worked_seconds = checkins
                .chunks(2)
                .filter(|pair| pair.len() == 2)
                .map(|pair| (pair[1].checkin_ts - pair[0].checkin_ts).num_seconds())
                .sum();

            Shift {
                id: index as i64,
                date,
                worked_seconds,
                checkins,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, NaiveDate, Utc};

    fn checkin(id: i64, date: &str, ts: &str, tag: &str) -> ShiftCheckin {
        ShiftCheckin {
            id,
            checkin_date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            checkin_ts: ts.parse::<DateTime<Utc>>().unwrap(),
            checkin_type: tag.to_string(),
            user_id: 1,
            crea_date: None,
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(aggregate_shifts(Vec::new()).is_empty());
    }

    #[test]
    fn test_single_checkin_counts_nothing() {
        let shifts = aggregate_shifts(vec![checkin(
            1,
            "2024-01-01",
            "2024-01-01T08:00:00Z",
            "in",
        )]);
        assert_eq!(shifts.len(), 1);
        assert_eq!(shifts[0].checkins.len(), 1);
        assert_eq!(shifts[0].worked_seconds, 0);
    }

    #[test]
    fn test_morning_pair_is_four_hours() {
        let shifts = aggregate_shifts(vec![
            checkin(1, "2024-01-01", "2024-01-01T08:00:00Z", "in"),
            checkin(2, "2024-01-01", "2024-01-01T12:00:00Z", "out"),
        ]);
        assert_eq!(shifts.len(), 1);
        assert_eq!(shifts[0].date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(shifts[0].worked_seconds, 14400);
    }

    #[test]
    fn test_odd_trailing_checkin_contributes_zero() {
        let shifts = aggregate_shifts(vec![
            checkin(1, "2024-01-01", "2024-01-01T08:00:00Z", "in"),
            checkin(2, "2024-01-01", "2024-01-01T12:00:00Z", "out"),
            checkin(3, "2024-01-01", "2024-01-01T13:00:00Z", "in"),
        ]);
        assert_eq!(shifts.len(), 1);
        assert_eq!(shifts[0].checkins.len(), 3);
        // Only the first pair counts; the afternoon clock-in is still open.
        assert_eq!(shifts[0].worked_seconds, 14400);
    }

    #[test]
    fn test_pairing_follows_timestamps_not_input_order() {
        let shifts = aggregate_shifts(vec![
            checkin(2, "2024-01-01", "2024-01-01T17:30:00Z", "out"),
            checkin(1, "2024-01-01", "2024-01-01T09:00:00Z", "in"),
        ]);
        assert_eq!(shifts.len(), 1);
        assert_eq!(shifts[0].checkins[0].id, 1);
        assert_eq!(shifts[0].checkins[1].id, 2);
        assert_eq!(shifts[0].worked_seconds, 8 * 3600 + 1800);
    }

    #[test]
    fn test_checkins_grouped_by_date() {
        let shifts = aggregate_shifts(vec![
            checkin(1, "2024-01-01", "2024-01-01T08:00:00Z", "in"),
            checkin(3, "2024-01-02", "2024-01-02T09:00:00Z", "in"),
            checkin(2, "2024-01-01", "2024-01-01T16:00:00Z", "out"),
            checkin(4, "2024-01-02", "2024-01-02T17:00:00Z", "out"),
        ]);
        assert_eq!(shifts.len(), 2);
        for shift in &shifts {
            assert_eq!(shift.checkins.len(), 2);
            assert_eq!(shift.worked_seconds, 8 * 3600);
            assert!(shift.checkins.iter().all(|c| c.checkin_date == shift.date));
        }
    }

    #[test]
    fn test_no_record_lost_or_duplicated() {
        let records: Vec<ShiftCheckin> = (0..7)
            .map(|i| {
                checkin(
                    i,
                    if i % 3 == 0 { "2024-02-01" } else { "2024-02-02" },
                    &format!("2024-02-01T{:02}:00:00Z", 8 + i),
                    if i % 2 == 0 { "in" } else { "out" },
                )
            })
            .collect();
        let total = records.len();

        let shifts = aggregate_shifts(records);
        let output: usize = shifts.iter().map(|s| s.checkins.len()).sum();
        assert_eq!(output, total);

        let mut seen: Vec<i64> = shifts
            .iter()
            .flat_map(|s| s.checkins.iter().map(|c| c.id))
            .collect();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), total);
    }

    #[test]
    fn test_checkins_sorted_within_shift() {
        let shifts = aggregate_shifts(vec![
            checkin(1, "2024-01-01", "2024-01-01T12:00:00Z", "out"),
            checkin(2, "2024-01-01", "2024-01-01T08:00:00Z", "in"),
            checkin(3, "2024-01-01", "2024-01-01T17:00:00Z", "out"),
            checkin(4, "2024-01-01", "2024-01-01T13:00:00Z", "in"),
        ]);
        let ts: Vec<_> = shifts[0].checkins.iter().map(|c| c.checkin_ts).collect();
        assert!(ts.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_negative_interval_propagates() {
        // Two events tagged backwards: the "out" sorts first, so the pair
        // contributes negative time. The aggregator reports, it does not fix.
        let shifts = aggregate_shifts(vec![
            checkin(1, "2024-01-01", "2024-01-01T12:00:00Z", "in"),
            checkin(2, "2024-01-01", "2024-01-01T08:00:00Z", "in"),
            checkin(3, "2024-01-01", "2024-01-01T07:00:00Z", "out"),
        ]);
        // Sorted: 07:00, 08:00, 12:00 -> first pair spans one hour.
        assert_eq!(shifts[0].worked_seconds, 3600);
    }

    #[test]
    fn test_reaggregation_is_idempotent() {
        let first = aggregate_shifts(vec![
            checkin(1, "2024-03-01", "2024-03-01T08:00:00Z", "in"),
            checkin(2, "2024-03-01", "2024-03-01T12:00:00Z", "out"),
            checkin(3, "2024-03-02", "2024-03-02T10:00:00Z", "in"),
        ]);

        let pooled: Vec<ShiftCheckin> = first
            .iter()
            .flat_map(|s| s.checkins.iter().cloned())
            .collect();
        let second = aggregate_shifts(pooled);

        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.date, b.date);
            assert_eq!(a.worked_seconds, b.worked_seconds);
            assert_eq!(a.checkins, b.checkins);
        }
    }

    #[test]
    fn test_equal_timestamps_keep_input_order() {
        let shifts = aggregate_shifts(vec![
            checkin(7, "2024-01-01", "2024-01-01T08:00:00Z", "in"),
            checkin(8, "2024-01-01", "2024-01-01T08:00:00Z", "out"),
        ]);
        assert_eq!(shifts[0].checkins[0].id, 7);
        assert_eq!(shifts[0].checkins[1].id, 8);
        assert_eq!(shifts[0].worked_seconds, 0);
    }
}
