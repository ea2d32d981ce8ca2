//! Outcome types shared by every entry point.

/// What an escape did to its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// The output differs from the input: something was escaped or quoted.
    Success,
    /// The output is byte-for-byte the input; no copy is needed.
    NotFound,
    /// At least one malformed UTF-8 sequence was replaced with U+FFFD. The
    /// output is still complete and well-formed.
    InvalidInput,
}

impl Status {
    pub(crate) fn from_flags(found: bool, error: bool) -> Self {
        if error {
            Status::InvalidInput
        } else if found {
            Status::Success
        } else {
            Status::NotFound
        }
    }

    /// Whether the escaped output differs from the input.
    #[must_use]
    pub fn is_changed(self) -> bool {
        !matches!(self, Status::NotFound)
    }

    /// Whether malformed input was replaced.
    #[must_use]
    pub fn is_invalid(self) -> bool {
        matches!(self, Status::InvalidInput)
    }
}

/// The result of measuring or writing an escape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Outcome {
    /// What happened to the input.
    pub status: Status,
    /// Output length in bytes, including the trailing NUL terminator.
    ///
    /// Zero only when there was no source and no quoting was requested.
    pub len: usize,
}

#[cfg(test)]
mod tests {
    use super::Status;

    #[test]
    fn error_wins_over_found() {
        assert_eq!(Status::from_flags(true, true), Status::InvalidInput);
        assert_eq!(Status::from_flags(true, false), Status::Success);
        assert_eq!(Status::from_flags(false, false), Status::NotFound);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_round_trip() {
        use super::Outcome;
        use crate::SourceLen;

        let outcome = Outcome {
            status: Status::InvalidInput,
            len: 7,
        };
        let json = serde_json::to_string(&outcome).unwrap();
        assert_eq!(json, r#"{"status":"InvalidInput","len":7}"#);
        assert_eq!(serde_json::from_str::<Outcome>(&json).unwrap(), outcome);

        let json = serde_json::to_string(&SourceLen::NulTerminated).unwrap();
        assert_eq!(json, r#""NulTerminated""#);
        assert_eq!(serde_json::from_str::<SourceLen>(&json).unwrap(), SourceLen::NulTerminated);

        let bounded = serde_json::to_string(&SourceLen::Bounded(3)).unwrap();
        assert_eq!(serde_json::from_str::<SourceLen>(&bounded).unwrap(), SourceLen::Bounded(3));
    }

    #[test]
    fn predicates() {
        assert!(Status::Success.is_changed());
        assert!(Status::InvalidInput.is_changed());
        assert!(!Status::NotFound.is_changed());
        assert!(Status::InvalidInput.is_invalid());
        assert!(!Status::Success.is_invalid());
    }
}
