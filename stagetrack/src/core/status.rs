//! Step status severities.

use crate::errors::StatusParseError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// The outcome severity of a step.
///
/// Each variant carries a fixed rank (its discriminant). A stage reports the
/// highest-ranked status among its steps, so a higher rank means a more
/// critical outcome. Ordering between statuses is defined purely by rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Status {
    /// No outcome recorded yet.
    #[default]
    Default = 1,
    /// Informational note, carries no outcome.
    Information = 2,
    /// Work completed successfully.
    Success = 3,
    /// Work is still running.
    InProgress = 4,
    /// Work needs a correction before it can complete.
    InAdjustment = 5,
    /// Work failed.
    Error = 6,
    /// Work was canceled.
    Canceled = 7,
}

impl Status {
    /// Every status, lowest rank first.
    pub const ALL: [Self; 7] = [
        Self::Default,
        Self::Information,
        Self::Success,
        Self::InProgress,
        Self::InAdjustment,
        Self::Error,
        Self::Canceled,
    ];

    /// Returns the severity rank of this status.
    #[must_use]
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Returns true if the status represents a failure or cancellation.
    #[must_use]
    pub const fn is_failure(self) -> bool {
        matches!(self, Self::Error | Self::Canceled)
    }

    /// Returns the snake_case name used by `Display` and serde.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Information => "information",
            Self::Success => "success",
            Self::InProgress => "in_progress",
            Self::InAdjustment => "in_adjustment",
            Self::Error => "error",
            Self::Canceled => "canceled",
        }
    }

    /// Returns the Rust variant name, e.g. `InProgress`.
    #[must_use]
    pub const fn variant_name(self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::Information => "Information",
            Self::Success => "Success",
            Self::InProgress => "InProgress",
            Self::InAdjustment => "InAdjustment",
            Self::Error => "Error",
            Self::Canceled => "Canceled",
        }
    }
}

impl PartialOrd for Status {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Status {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = StatusParseError;

    /// Parses either the snake_case name (`in_progress`) or the variant name
    /// (`InProgress`), ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();

        Self::ALL
            .into_iter()
            .find(|status| {
                input.eq_ignore_ascii_case(status.as_str())
                    || input.eq_ignore_ascii_case(status.variant_name())
            })
            .ok_or_else(|| StatusParseError::new(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_ranks() {
        assert_eq!(Status::Default.rank(), 1);
        assert_eq!(Status::Information.rank(), 2);
        assert_eq!(Status::Success.rank(), 3);
        assert_eq!(Status::InProgress.rank(), 4);
        assert_eq!(Status::InAdjustment.rank(), 5);
        assert_eq!(Status::Error.rank(), 6);
        assert_eq!(Status::Canceled.rank(), 7);
    }

    #[test]
    fn test_status_all_is_strictly_increasing() {
        for pair in Status::ALL.windows(2) {
            assert!(pair[0] < pair[1], "{} should rank below {}", pair[0], pair[1]);
            assert!(pair[0].rank() < pair[1].rank());
        }
    }

    #[test]
    fn test_status_ordering() {
        assert!(Status::Canceled > Status::Error);
        assert!(Status::InAdjustment > Status::InProgress);
        assert!(Status::Success > Status::Information);
        assert_eq!(Status::ALL.iter().max(), Some(&Status::Canceled));
        assert_eq!(Status::ALL.iter().min(), Some(&Status::Default));
    }

    #[test]
    fn test_status_default() {
        assert_eq!(Status::default(), Status::Default);
    }

    #[test]
    fn test_status_is_failure() {
        assert!(Status::Error.is_failure());
        assert!(Status::Canceled.is_failure());
        assert!(!Status::Default.is_failure());
        assert!(!Status::Information.is_failure());
        assert!(!Status::Success.is_failure());
        assert!(!Status::InProgress.is_failure());
        assert!(!Status::InAdjustment.is_failure());
    }

    #[test]
    fn test_status_display() {
        assert_eq!(Status::Success.to_string(), "success");
        assert_eq!(Status::InProgress.to_string(), "in_progress");
        assert_eq!(Status::InAdjustment.to_string(), "in_adjustment");
        assert_eq!(Status::Canceled.to_string(), "canceled");
    }

    #[test]
    fn test_status_from_str() {
        assert_eq!("error".parse::<Status>(), Ok(Status::Error));
        assert_eq!("in_progress".parse::<Status>(), Ok(Status::InProgress));
        assert_eq!("InAdjustment".parse::<Status>(), Ok(Status::InAdjustment));
        assert_eq!(" CANCELED ".parse::<Status>(), Ok(Status::Canceled));
        assert_eq!("inprogress".parse::<Status>(), Ok(Status::InProgress));
        assert_eq!("IN_ADJUSTMENT".parse::<Status>(), Ok(Status::InAdjustment));
    }

    #[test]
    fn test_status_from_str_rejects_unknown() {
        let err = "cancelled".parse::<Status>().unwrap_err();
        assert_eq!(err.input, "cancelled");
        assert!("".parse::<Status>().is_err());

        for malformed in ["c_anceled", "in__progress", "i_n_p_r_o_g_r_e_s_s", "In_Progress_"] {
            let err = malformed.parse::<Status>().unwrap_err();
            assert_eq!(err.input, malformed);
        }
    }

    #[test]
    fn test_status_variant_name_parses_back() {
        for status in Status::ALL {
            assert_eq!(status.variant_name().parse::<Status>(), Ok(status));
            assert_eq!(
                status.variant_name().to_uppercase().parse::<Status>(),
                Ok(status)
            );
        }
    }

    #[test]
    fn test_status_display_parses_back() {
        for status in Status::ALL {
            assert_eq!(status.to_string().parse::<Status>(), Ok(status));
        }
    }

    #[test]
    fn test_status_serialize() {
        let json = serde_json::to_string(&Status::InAdjustment).unwrap();
        assert_eq!(json, r#""in_adjustment""#);

        let deserialized: Status = serde_json::from_str(r#""canceled""#).unwrap();
        assert_eq!(deserialized, Status::Canceled);
    }
}
