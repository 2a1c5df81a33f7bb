use serde::{Deserialize, Serialize};
use sqlx::prelude::Type;
use standard_error::StandardError;

use crate::prelude::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type)]
#[sqlx(type_name = "request_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    Pending,
    Approved,
    Rejected,
}

/// An admin's verdict on a pending request. Rejection must carry a reason;
/// approval may.
#[derive(Debug)]
pub enum Decision {
    Approve { response: Option<String> },
    Reject { response: String },
}

impl Decision {
    pub fn validate(&self) -> Result<()> {
        if let Decision::Reject { response } = self {
            if response.trim().is_empty() {
                return Err(StandardError::new("ERR-REQ-004"));
            }
        }
        Ok(())
    }

    pub fn status(&self) -> RequestStatus {
        match self {
            Decision::Approve { .. } => RequestStatus::Approved,
            Decision::Reject { .. } => RequestStatus::Rejected,
        }
    }

    pub fn response(&self) -> Option<&str> {
        match self {
            Decision::Approve { response } => {
                response.as_deref().map(str::trim).filter(|r| !r.is_empty())
            }
            Decision::Reject { response } => Some(response.trim()),
        }
    }
}

/// Requests are monotonic: once approved or rejected they stay that way.
pub fn ensure_pending(status: RequestStatus) -> Result<()> {
    if status != RequestStatus::Pending {
        return Err(StandardError::new("ERR-REQ-005"));
    }
    Ok(())
}

/// The justification is the whole point of a date request.
pub fn validate_description(description: &str) -> Result<&str> {
    let description = description.trim();
    if description.is_empty() {
        return Err(StandardError::new("ERR-REQ-002"));
    }
    Ok(description)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reject_requires_a_response() {
        let blank = Decision::Reject {
            response: "".into(),
        };
        assert!(blank.validate().is_err());

        let whitespace = Decision::Reject {
            response: "   \n".into(),
        };
        assert!(whitespace.validate().is_err());

        let reasoned = Decision::Reject {
            response: "Conflicts with exam schedule".into(),
        };
        assert!(reasoned.validate().is_ok());
        assert_eq!(reasoned.status(), RequestStatus::Rejected);
        assert_eq!(reasoned.response(), Some("Conflicts with exam schedule"));
    }

    #[test]
    fn approve_response_is_optional() {
        let silent = Decision::Approve { response: None };
        assert!(silent.validate().is_ok());
        assert_eq!(silent.status(), RequestStatus::Approved);
        assert_eq!(silent.response(), None);

        let blank = Decision::Approve {
            response: Some("  ".into()),
        };
        assert_eq!(blank.response(), None);

        let noted = Decision::Approve {
            response: Some("Go ahead".into()),
        };
        assert_eq!(noted.response(), Some("Go ahead"));
    }

    #[test]
    fn decided_requests_stay_decided() {
        assert!(ensure_pending(RequestStatus::Pending).is_ok());
        assert!(ensure_pending(RequestStatus::Approved).is_err());
        assert!(ensure_pending(RequestStatus::Rejected).is_err());
    }

    #[test]
    fn description_must_not_be_blank() {
        assert!(validate_description("").is_err());
        assert!(validate_description("  \t ").is_err());
        assert_eq!(
            validate_description(" Urgent: only slot company offered ").unwrap(),
            "Urgent: only slot company offered"
        );
    }
}
