use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::prelude::Type;
use standard_error::StandardError;
use uuid::Uuid;

use crate::{
    pkg::internal::adaptors::{
        blocked_dates::spec::BlockedDateEntry, drives::spec::CampusDriveEntry,
    },
    prelude::Result,
};

use super::conflict;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type)]
#[sqlx(type_name = "drive_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum DriveStatus {
    Scheduled,
    Completed,
    Cancelled,
}

/// Outcome of evaluating a lock attempt against the loaded snapshot. A date
/// held by another company wins over a blocked range, matching the order the
/// submit path checks them in.
#[derive(Debug)]
pub enum LockDecision<'a> {
    Grant,
    DateTaken(&'a CampusDriveEntry),
    NeedsApproval(&'a BlockedDateEntry),
}

pub fn plan_lock<'a>(
    date: NaiveDate,
    company_id: Uuid,
    blocked: &'a [BlockedDateEntry],
    scheduled: &'a [CampusDriveEntry],
) -> LockDecision<'a> {
    let day = conflict::evaluate(date, Some(company_id), blocked, scheduled);
    if let Some(holder) = day.locked {
        return LockDecision::DateTaken(holder);
    }
    if let Some(range) = day.blocked {
        return LockDecision::NeedsApproval(range);
    }
    LockDecision::Grant
}

/// Only the coordinator who locked the date may release it.
pub fn ensure_release_allowed(drive: &CampusDriveEntry, actor_name: &str) -> Result<()> {
    if drive.coordinator_name != actor_name {
        return Err(StandardError::new("ERR-DRIVE-OWNER"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pkg::internal::scheduling::conflict::tests::{blocked_range, d, scheduled_drive};

    #[test]
    fn free_date_grants_the_lock() {
        let decision = plan_lock(d("2025-03-10"), Uuid::new_v4(), &[], &[]);
        assert!(matches!(decision, LockDecision::Grant));
    }

    #[test]
    fn date_held_by_another_company_is_refused_with_the_holder() {
        let acme = Uuid::new_v4();
        let globex = Uuid::new_v4();
        let drives = vec![scheduled_drive(acme, "2025-03-10", "Priya")];
        match plan_lock(d("2025-03-10"), globex, &[], &drives) {
            LockDecision::DateTaken(holder) => {
                assert_eq!(holder.coordinator_name, "Priya");
                assert_eq!(holder.company_id, acme);
            }
            other => panic!("expected DateTaken, got {:?}", other),
        }
    }

    #[test]
    fn blocked_date_routes_to_the_request_flow() {
        let ranges = vec![blocked_range("2024-12-20", "2025-01-05", "Winter break")];
        match plan_lock(d("2024-12-22"), Uuid::new_v4(), &ranges, &[]) {
            LockDecision::NeedsApproval(range) => assert_eq!(range.reason, "Winter break"),
            other => panic!("expected NeedsApproval, got {:?}", other),
        }
    }

    #[test]
    fn taken_wins_over_blocked() {
        let ranges = vec![blocked_range("2025-03-09", "2025-03-11", "Fest")];
        let drives = vec![scheduled_drive(Uuid::new_v4(), "2025-03-10", "Mansi")];
        let decision = plan_lock(d("2025-03-10"), Uuid::new_v4(), &ranges, &drives);
        assert!(matches!(decision, LockDecision::DateTaken(_)));
    }

    #[test]
    fn only_the_holder_may_release() {
        let drive = scheduled_drive(Uuid::new_v4(), "2025-03-10", "Priya");
        assert!(ensure_release_allowed(&drive, "Priya").is_ok());
        assert!(ensure_release_allowed(&drive, "Bajrang").is_err());
    }
}
