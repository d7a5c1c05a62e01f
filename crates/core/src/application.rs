//! Application lifecycle status.

use crate::error::CoreError;

/// Lifecycle status of one candidate's application for a post.
///
/// `Submitted` is terminal: once reached, step data may no longer be
/// edited and the application number has been assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Draft,
    DocumentPending,
    PaymentPending,
    PaymentCompleted,
    Submitted,
}

impl ApplicationStatus {
    /// Parse a status string from the database.
    pub fn from_str_db(s: &str) -> Result<Self, CoreError> {
        match s {
            "draft" => Ok(Self::Draft),
            "document_pending" => Ok(Self::DocumentPending),
            "payment_pending" => Ok(Self::PaymentPending),
            "payment_completed" => Ok(Self::PaymentCompleted),
            "submitted" => Ok(Self::Submitted),
            _ => Err(CoreError::Validation(format!(
                "Invalid application status '{s}'. Must be one of: draft, \
                 document_pending, payment_pending, payment_completed, submitted"
            ))),
        }
    }

    /// Convert to a database-compatible string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::DocumentPending => "document_pending",
            Self::PaymentPending => "payment_pending",
            Self::PaymentCompleted => "payment_completed",
            Self::Submitted => "submitted",
        }
    }

    /// Whether step data may still be edited.
    pub fn is_editable(&self) -> bool {
        !matches!(self, Self::Submitted)
    }
}

/// Reject writes against a submitted application.
pub fn ensure_editable(status: ApplicationStatus) -> Result<(), CoreError> {
    if status.is_editable() {
        Ok(())
    } else {
        Err(CoreError::Conflict(
            "Application has already been submitted and can no longer be edited".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_roundtrip() {
        for status in [
            ApplicationStatus::Draft,
            ApplicationStatus::DocumentPending,
            ApplicationStatus::PaymentPending,
            ApplicationStatus::PaymentCompleted,
            ApplicationStatus::Submitted,
        ] {
            assert_eq!(
                ApplicationStatus::from_str_db(status.as_str()).unwrap(),
                status
            );
        }
    }

    #[test]
    fn status_rejects_unknown() {
        assert!(ApplicationStatus::from_str_db("pending").is_err());
        assert!(ApplicationStatus::from_str_db("").is_err());
    }

    #[test]
    fn only_submitted_blocks_edits() {
        assert!(ensure_editable(ApplicationStatus::Draft).is_ok());
        assert!(ensure_editable(ApplicationStatus::PaymentCompleted).is_ok());
        assert!(ensure_editable(ApplicationStatus::Submitted).is_err());
    }
}
