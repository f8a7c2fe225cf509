use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PayeeStatus {
    Pending,
    Active,
    Suspended,
    Inactive,
    Failed,
}

impl PayeeStatus {
    pub const ALL: [PayeeStatus; 5] = [
        PayeeStatus::Pending,
        PayeeStatus::Active,
        PayeeStatus::Suspended,
        PayeeStatus::Inactive,
        PayeeStatus::Failed,
    ];

    /// Inactive is terminal; Failed payees may re-enter Pending for a
    /// later retry.
    pub fn can_transition_to(self, next: PayeeStatus) -> bool {
        use PayeeStatus::*;
        matches!(
            (self, next),
            (Pending, Active | Inactive | Failed)
                | (Active, Suspended | Inactive)
                | (Suspended, Active | Inactive)
                | (Failed, Pending | Inactive)
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PayeeStatus::Pending => "PENDING",
            PayeeStatus::Active => "ACTIVE",
            PayeeStatus::Suspended => "SUSPENDED",
            PayeeStatus::Inactive => "INACTIVE",
            PayeeStatus::Failed => "FAILED",
        }
    }

    pub fn parse(s: &str) -> Option<PayeeStatus> {
        match s {
            "PENDING" => Some(PayeeStatus::Pending),
            "ACTIVE" => Some(PayeeStatus::Active),
            "SUSPENDED" => Some(PayeeStatus::Suspended),
            "INACTIVE" => Some(PayeeStatus::Inactive),
            "FAILED" => Some(PayeeStatus::Failed),
            _ => None,
        }
    }
}

impl std::fmt::Display for PayeeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
