use serde::{Deserialize, Serialize};

/// Lifecycle state of a credential as reported by the issuing registry.
/// Anything the registry adds later lands on `Unknown` instead of failing
/// the batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CredentialStatus {
    Valid,
    Expired,
    Revoked,
    Suspended,
    #[serde(other)]
    Unknown,
}

/// A verifiable claim about one identity: a role, a role-scoped sub-role,
/// and a numeric weight whose meaning depends on the role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credential {
    pub status: CredentialStatus,
    pub identity_key: String,
    pub role: String,
    pub sub_role: String,
    pub weight: f64,
}

/// Top-level classification of a credential.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Citizen,
    Builder,
    Staker,
}

impl Role {
    /// Classify a raw role claim. Unrecognized values stay unclassified and
    /// are reported by the dispatch layer.
    pub fn classify(raw: &str) -> Option<Role> {
        match raw {
            "citizen" => Some(Role::Citizen),
            "builder" => Some(Role::Builder),
            "staker" => Some(Role::Staker),
            _ => None,
        }
    }
}
