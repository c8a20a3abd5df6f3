//! Next-maintenance-date computation and due-date classification

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use utoipa::ToSchema;

use super::Tier;

/// Number of days before the due date during which a maintenance is
/// considered "warning". The boundary is inclusive: exactly 30 days out is
/// still a warning.
pub const WARNING_WINDOW_DAYS: i64 = 30;

/// Classification of one maintenance due date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct MaintenanceStatus {
    /// Severity tier
    pub tier: Tier,
    /// Days overdue when expired, days remaining otherwise; `None` when no
    /// schedule is defined
    pub days_delta: Option<i64>,
}

/// Compute the next maintenance due date from the last service date and the
/// interval in years.
///
/// Returns `None` when no last-service date is known, the interval is not a
/// positive number of years, or the target date falls outside the calendar's
/// representable range; an undefined schedule is a valid state, not an
/// error, and malformed persisted intervals degrade the same way. Feb 29
/// anniversaries clamp to Feb 28 on non-leap target years.
pub fn compute_next_maintenance(
    last_maintenance_date: Option<NaiveDate>,
    interval_years: i32,
) -> Option<NaiveDate> {
    let last = last_maintenance_date?;
    if interval_years <= 0 {
        return None;
    }
    add_years(last, interval_years)
}

fn add_years(date: NaiveDate, years: i32) -> Option<NaiveDate> {
    let year = date.year().checked_add(years)?;
    // Feb 29 is the only month/day that can be invalid in the target year;
    // clamp to Feb 28. Both lookups fail when the year itself is out of range.
    NaiveDate::from_ymd_opt(year, date.month(), date.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 2, 28))
}

/// Classify a maintenance due date against a reference date.
///
/// The reference date is the caller's "today", resolved once per request so
/// that a whole batch of classifications is consistent.
pub fn classify_maintenance(
    due_date: Option<NaiveDate>,
    reference_date: NaiveDate,
) -> MaintenanceStatus {
    let due = match due_date {
        Some(d) => d,
        None => {
            return MaintenanceStatus {
                tier: Tier::ToDefine,
                days_delta: None,
            }
        }
    };

    let delta = (due - reference_date).num_days();
    if delta < 0 {
        MaintenanceStatus {
            tier: Tier::Expired,
            days_delta: Some(-delta),
        }
    } else if delta <= WARNING_WINDOW_DAYS {
        MaintenanceStatus {
            tier: Tier::Warning,
            days_delta: Some(delta),
        }
    } else {
        MaintenanceStatus {
            tier: Tier::Ok,
            days_delta: Some(delta),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_next_maintenance_adds_whole_years() {
        assert_eq!(
            compute_next_maintenance(Some(date(2023, 6, 15)), 1),
            Some(date(2024, 6, 15))
        );
        assert_eq!(
            compute_next_maintenance(Some(date(2020, 1, 31)), 3),
            Some(date(2023, 1, 31))
        );
    }

    #[test]
    fn test_next_maintenance_undefined_inputs() {
        assert_eq!(compute_next_maintenance(None, 1), None);
        assert_eq!(compute_next_maintenance(Some(date(2023, 6, 15)), 0), None);
        assert_eq!(compute_next_maintenance(Some(date(2023, 6, 15)), -2), None);
    }

    #[test]
    fn test_next_maintenance_past_calendar_range() {
        // A corrupt persisted interval must degrade to an undefined
        // schedule, never panic, even past chrono's representable years
        assert_eq!(compute_next_maintenance(Some(date(2023, 6, 15)), 300_000), None);
        assert_eq!(compute_next_maintenance(Some(date(2023, 6, 15)), i32::MAX), None);
        assert_eq!(compute_next_maintenance(Some(date(2024, 2, 29)), 300_000), None);
    }

    #[test]
    fn test_leap_day_clamps_to_feb_28() {
        assert_eq!(
            compute_next_maintenance(Some(date(2024, 2, 29)), 1),
            Some(date(2025, 2, 28))
        );
        // Leap year to leap year keeps Feb 29
        assert_eq!(
            compute_next_maintenance(Some(date(2024, 2, 29)), 4),
            Some(date(2028, 2, 29))
        );
    }

    #[test]
    fn test_classify_boundaries() {
        let today = date(2024, 6, 10);

        let s = classify_maintenance(Some(today + chrono::Duration::days(31)), today);
        assert_eq!(s.tier, Tier::Ok);
        assert_eq!(s.days_delta, Some(31));

        // 30 days out is inclusive of the warning window
        let s = classify_maintenance(Some(today + chrono::Duration::days(30)), today);
        assert_eq!(s.tier, Tier::Warning);
        assert_eq!(s.days_delta, Some(30));

        // Due today is a warning, not expired
        let s = classify_maintenance(Some(today), today);
        assert_eq!(s.tier, Tier::Warning);
        assert_eq!(s.days_delta, Some(0));

        let s = classify_maintenance(Some(today - chrono::Duration::days(1)), today);
        assert_eq!(s.tier, Tier::Expired);
        assert_eq!(s.days_delta, Some(1));
    }

    #[test]
    fn test_classify_undefined_schedule() {
        let s = classify_maintenance(None, date(2024, 6, 10));
        assert_eq!(s.tier, Tier::ToDefine);
        assert_eq!(s.days_delta, None);
    }

    #[test]
    fn test_yearly_service_scenario() {
        // Serviced 2023-06-15, yearly interval
        let due = compute_next_maintenance(Some(date(2023, 6, 15)), 1);
        assert_eq!(due, Some(date(2024, 6, 15)));

        let s = classify_maintenance(due, date(2024, 6, 10));
        assert_eq!(s.tier, Tier::Warning);
        assert_eq!(s.days_delta, Some(5));

        let s = classify_maintenance(due, date(2024, 7, 1));
        assert_eq!(s.tier, Tier::Expired);
        assert_eq!(s.days_delta, Some(16));
    }
}
