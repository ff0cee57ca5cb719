//! Review statuses and the fixed verdict table.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Review status reported by the homework API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewStatus {
    /// The reviewer accepted the submission.
    Approved,
    /// The submission is being reviewed.
    Reviewing,
    /// The reviewer returned the submission with remarks.
    Rejected,
}

/// A status string outside the known table.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unrecognized homework status: {0:?}")]
pub struct UnknownStatus(pub String);

impl FromStr for ReviewStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "approved" => Ok(Self::Approved),
            "reviewing" => Ok(Self::Reviewing),
            "rejected" => Ok(Self::Rejected),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

impl ReviewStatus {
    /// The wire code for this status.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Approved => "approved",
            Self::Reviewing => "reviewing",
            Self::Rejected => "rejected",
        }
    }

    /// The human-readable verdict sentence for this status.
    pub fn verdict(self) -> &'static str {
        match self {
            Self::Approved => "The review is done: the reviewer liked everything. Hooray!",
            Self::Reviewing => "The submission was taken up for review.",
            Self::Rejected => "The review is done: the reviewer has remarks.",
        }
    }
}

impl fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Render the notification for one status change.
pub fn status_change_message(name: &str, status: ReviewStatus) -> String {
    format!(
        "Status changed for submission \"{}\". {}",
        name,
        status.verdict()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_statuses_parse() {
        assert_eq!("approved".parse(), Ok(ReviewStatus::Approved));
        assert_eq!("reviewing".parse(), Ok(ReviewStatus::Reviewing));
        assert_eq!("rejected".parse(), Ok(ReviewStatus::Rejected));
    }

    #[test]
    fn test_unknown_status_is_named_in_error() {
        let err = "graded".parse::<ReviewStatus>().unwrap_err();
        assert_eq!(err, UnknownStatus("graded".to_string()));
        assert!(err.to_string().contains("graded"));
    }

    #[test]
    fn test_status_is_case_sensitive() {
        assert!("Approved".parse::<ReviewStatus>().is_err());
    }

    #[test]
    fn test_message_template() {
        let message = status_change_message("hw05", ReviewStatus::Approved);
        assert_eq!(
            message,
            "Status changed for submission \"hw05\". \
             The review is done: the reviewer liked everything. Hooray!"
        );
    }

    #[test]
    fn test_each_status_has_a_distinct_verdict() {
        let verdicts = [
            ReviewStatus::Approved.verdict(),
            ReviewStatus::Reviewing.verdict(),
            ReviewStatus::Rejected.verdict(),
        ];
        assert_ne!(verdicts[0], verdicts[1]);
        assert_ne!(verdicts[1], verdicts[2]);
        assert_ne!(verdicts[0], verdicts[2]);
    }
}
