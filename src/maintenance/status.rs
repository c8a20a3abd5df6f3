//! Worst-case status aggregation across a client's equipment

use chrono::NaiveDate;

use super::{classify_maintenance, Tier};

/// Reduce a client's equipment due dates into one worst-case tier.
///
/// Severity ordering: `Ok` < `ToDefine`/`Warning` (equal precedence) <
/// `Expired`. An expired item wins outright; an undefined schedule is never
/// silently treated as fine and promotes the aggregate to `Warning`.
///
/// A client with no equipment falls back to its own client-level
/// maintenance due date, classified by the same rules (`Ok` when that date
/// is unset). This dual path mirrors the fact that clients may carry a
/// maintenance schedule of their own, distinct from per-equipment schedules.
///
/// The result is deterministic and independent of the order of `due_dates`.
pub fn aggregate_client_status(
    due_dates: &[Option<NaiveDate>],
    client_due_date: Option<NaiveDate>,
    reference_date: NaiveDate,
) -> Tier {
    if due_dates.is_empty() {
        return match client_due_date {
            None => Tier::Ok,
            Some(d) => classify_maintenance(Some(d), reference_date).tier,
        };
    }

    let mut worst = Tier::Ok;
    for due in due_dates {
        match classify_maintenance(*due, reference_date).tier {
            // Expired always wins, no need to look further
            Tier::Expired => return Tier::Expired,
            Tier::Warning | Tier::ToDefine => worst = Tier::Warning,
            Tier::Ok => {}
        }
    }
    worst
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn days(reference: NaiveDate, n: i64) -> Option<NaiveDate> {
        Some(reference + chrono::Duration::days(n))
    }

    #[test]
    fn test_all_ok() {
        let today = date(2024, 6, 10);
        let dues = vec![days(today, 100), days(today, 400)];
        assert_eq!(aggregate_client_status(&dues, None, today), Tier::Ok);
    }

    #[test]
    fn test_expired_short_circuits() {
        let today = date(2024, 6, 10);
        let dues = vec![days(today, 400), days(today, -3), days(today, 100)];
        assert_eq!(aggregate_client_status(&dues, None, today), Tier::Expired);
    }

    #[test]
    fn test_undefined_schedule_is_never_ok() {
        let today = date(2024, 6, 10);
        // One item 400 days out, one with no schedule at all
        let dues = vec![days(today, 400), None];
        assert_eq!(aggregate_client_status(&dues, None, today), Tier::Warning);
    }

    #[test]
    fn test_warning_item_promotes() {
        let today = date(2024, 6, 10);
        let dues = vec![days(today, 400), days(today, 12)];
        assert_eq!(aggregate_client_status(&dues, None, today), Tier::Warning);
    }

    #[test]
    fn test_order_independence() {
        let today = date(2024, 6, 10);
        let a = vec![days(today, 400), days(today, -3), None, days(today, 12)];
        let mut b = a.clone();
        b.reverse();
        let c = vec![a[2], a[0], a[3], a[1]];
        let expected = aggregate_client_status(&a, None, today);
        assert_eq!(aggregate_client_status(&b, None, today), expected);
        assert_eq!(aggregate_client_status(&c, None, today), expected);
        assert_eq!(expected, Tier::Expired);
    }

    #[test]
    fn test_empty_list_falls_back_to_client_date() {
        let today = date(2024, 6, 10);
        assert_eq!(aggregate_client_status(&[], None, today), Tier::Ok);
        assert_eq!(
            aggregate_client_status(&[], days(today, -1), today),
            Tier::Expired
        );
        assert_eq!(
            aggregate_client_status(&[], days(today, 15), today),
            Tier::Warning
        );
        assert_eq!(
            aggregate_client_status(&[], days(today, 200), today),
            Tier::Ok
        );
    }
}
