/// Result of validating one email address against the external service.
///
/// Only `Deliverable` keeps the contact. `RateLimited` is transient and
/// is retried by the validator before it ever reaches a pipeline; the
/// remaining variants all map to dropping the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ValidationOutcome {
    /// Deliverable with a high quality score and a valid format.
    Deliverable,
    /// The service reported the mailbox as not deliverable.
    NotDeliverable,
    /// Deliverable but the quality score was at or below the threshold.
    LowQuality,
    /// The service reported the address as syntactically invalid.
    MalformedAddress,
    /// HTTP 429 from the service; retried by the validator.
    RateLimited,
    /// HTTP 422: the API quota is exhausted. Terminal for the call.
    QuotaExceeded,
    /// Unexpected status code or a transport-level failure.
    RequestFailed,
}

impl ValidationOutcome {
    /// True when the contact row should be kept.
    pub fn keeps_row(self) -> bool {
        matches!(self, Self::Deliverable)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Deliverable => "deliverable",
            Self::NotDeliverable => "not deliverable",
            Self::LowQuality => "low quality",
            Self::MalformedAddress => "malformed address",
            Self::RateLimited => "rate limited",
            Self::QuotaExceeded => "quota exceeded",
            Self::RequestFailed => "request failed",
        }
    }
}
