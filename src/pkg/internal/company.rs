use serde::{Deserialize, Serialize};
use sqlx::prelude::Type;
use standard_error::StandardError;

use crate::prelude::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type)]
#[sqlx(type_name = "company_status")]
pub enum CompanyStatus {
    Active,
    Blacklisted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type)]
#[sqlx(type_name = "registration_status")]
pub enum RegistrationStatus {
    Pending,
    Submitted,
}

/// The secondary POC is optional but must not duplicate the primary.
pub fn validate_pocs(poc_1st: &str, poc_2nd: Option<&str>) -> Result<()> {
    if poc_1st.trim().is_empty() {
        return Err(StandardError::new("ERR-VALIDATION-001"));
    }
    if let Some(second) = poc_2nd {
        if !second.trim().is_empty() && second.trim().eq_ignore_ascii_case(poc_1st.trim()) {
            return Err(StandardError::new("ERR-COMPANY-002"));
        }
    }
    Ok(())
}

/// Blacklisting overwrites the company notes with the reason, so an empty
/// reason would silently erase them.
pub fn validate_blacklist_reason(reason: &str) -> Result<&str> {
    let reason = reason.trim();
    if reason.is_empty() {
        return Err(StandardError::new("ERR-COMPANY-003"));
    }
    Ok(reason)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_poc_must_differ_from_first() {
        assert!(validate_pocs("Priya", Some("Bajrang")).is_ok());
        assert!(validate_pocs("Priya", None).is_ok());
        assert!(validate_pocs("Priya", Some("Priya")).is_err());
        assert!(validate_pocs("Priya", Some("  priya ")).is_err());
    }

    #[test]
    fn first_poc_is_required() {
        assert!(validate_pocs("", None).is_err());
        assert!(validate_pocs("   ", Some("Mansi")).is_err());
    }

    #[test]
    fn blacklist_reason_cannot_be_blank() {
        assert!(validate_blacklist_reason("").is_err());
        assert!(validate_blacklist_reason("   ").is_err());
        assert_eq!(
            validate_blacklist_reason(" repeated no-shows ").unwrap(),
            "repeated no-shows"
        );
    }
}
