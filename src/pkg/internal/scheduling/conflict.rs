use chrono::NaiveDate;
use uuid::Uuid;

use crate::pkg::internal::adaptors::{
    blocked_dates::spec::BlockedDateEntry, drives::spec::CampusDriveEntry,
};

/// Pure evaluation over already-fetched snapshots. The same functions gate
/// both the calendar preview and the submit path, so the two can never
/// disagree within one form session.
#[derive(Debug)]
pub struct DayConflicts<'a> {
    pub blocked: Option<&'a BlockedDateEntry>,
    pub locked: Option<&'a CampusDriveEntry>,
}

/// First range containing the date wins; overlapping ranges are legal and
/// whichever is listed first is reported.
pub fn blocked_conflict<'a>(
    date: NaiveDate,
    blocked: &'a [BlockedDateEntry],
) -> Option<&'a BlockedDateEntry> {
    blocked
        .iter()
        .find(|b| b.start_date <= date && date <= b.end_date)
}

/// A scheduled drive on the same calendar day held by a different company.
/// With no requesting company, any scheduled drive on the day conflicts.
pub fn locked_conflict<'a>(
    date: NaiveDate,
    requesting_company: Option<Uuid>,
    scheduled: &'a [CampusDriveEntry],
) -> Option<&'a CampusDriveEntry> {
    scheduled
        .iter()
        .find(|d| d.drive_date == date && Some(d.company_id) != requesting_company)
}

pub fn evaluate<'a>(
    date: NaiveDate,
    requesting_company: Option<Uuid>,
    blocked: &'a [BlockedDateEntry],
    scheduled: &'a [CampusDriveEntry],
) -> DayConflicts<'a> {
    DayConflicts {
        blocked: blocked_conflict(date, blocked),
        locked: locked_conflict(date, requesting_company, scheduled),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::pkg::internal::scheduling::drive::DriveStatus;
    use chrono::Utc;

    pub fn d(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    pub fn blocked_range(start: &str, end: &str, reason: &str) -> BlockedDateEntry {
        BlockedDateEntry {
            id: Uuid::new_v4(),
            start_date: d(start),
            end_date: d(end),
            reason: reason.into(),
            created_by: "Admin".into(),
            created_at: Utc::now(),
        }
    }

    pub fn scheduled_drive(company: Uuid, date: &str, coordinator: &str) -> CampusDriveEntry {
        CampusDriveEntry {
            id: Uuid::new_v4(),
            company_id: company,
            coordinator_name: coordinator.into(),
            drive_date: d(date),
            drive_time: None,
            venue: None,
            notes: None,
            registered_count: 0,
            appeared_count: 0,
            selected_count: 0,
            status: DriveStatus::Scheduled,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn blocked_interval_is_inclusive_on_both_ends() {
        let ranges = vec![blocked_range("2024-12-20", "2025-01-05", "Winter break")];
        assert!(blocked_conflict(d("2024-12-20"), &ranges).is_some());
        assert!(blocked_conflict(d("2025-01-05"), &ranges).is_some());
        assert!(blocked_conflict(d("2024-12-22"), &ranges).is_some());
        assert!(blocked_conflict(d("2024-12-19"), &ranges).is_none());
        assert!(blocked_conflict(d("2025-01-06"), &ranges).is_none());
    }

    #[test]
    fn overlapping_ranges_report_the_first_match() {
        let ranges = vec![
            blocked_range("2025-05-01", "2025-05-10", "Exams"),
            blocked_range("2025-05-05", "2025-05-15", "Maintenance"),
        ];
        let hit = blocked_conflict(d("2025-05-07"), &ranges).unwrap();
        assert_eq!(hit.reason, "Exams");
    }

    #[test]
    fn lock_conflict_excludes_the_requesting_company() {
        let acme = Uuid::new_v4();
        let globex = Uuid::new_v4();
        let drives = vec![scheduled_drive(acme, "2025-03-10", "Priya")];

        let hit = locked_conflict(d("2025-03-10"), Some(globex), &drives).unwrap();
        assert_eq!(hit.coordinator_name, "Priya");

        assert!(locked_conflict(d("2025-03-10"), Some(acme), &drives).is_none());
        assert!(locked_conflict(d("2025-03-11"), Some(globex), &drives).is_none());
    }

    #[test]
    fn lock_conflict_without_company_matches_any_drive() {
        let drives = vec![scheduled_drive(Uuid::new_v4(), "2025-03-10", "Priya")];
        assert!(locked_conflict(d("2025-03-10"), None, &drives).is_some());
    }

    #[test]
    fn evaluate_reports_both_dimensions() {
        let company = Uuid::new_v4();
        let ranges = vec![blocked_range("2025-03-09", "2025-03-11", "Fest")];
        let drives = vec![scheduled_drive(Uuid::new_v4(), "2025-03-10", "Mansi")];
        let day = evaluate(d("2025-03-10"), Some(company), &ranges, &drives);
        assert!(day.blocked.is_some());
        assert!(day.locked.is_some());
    }
}
