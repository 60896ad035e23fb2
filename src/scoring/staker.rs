use crate::scoring::accumulator;
use crate::scoring::diagnostics::DiagnosticsSink;
use crate::scoring::CONTEXT;
use crate::types::credential::Credential;
use crate::types::score::{DomainBlock, StakerBlocks};

/// Normalized staker sub-roles, classified after lower-casing the claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StakerSubRole {
    Validator,
    Gateway,
    LiquidityProvider,
    Unknown,
}

impl StakerSubRole {
    pub fn classify(normalized: &str) -> StakerSubRole {
        match normalized {
            "validator" => StakerSubRole::Validator,
            "gateway" => StakerSubRole::Gateway,
            "liquidity provider" => StakerSubRole::LiquidityProvider,
            _ => StakerSubRole::Unknown,
        }
    }
}

/// Keys evidence by lower-cased sub-role and applies a sub-role-specific
/// transform to the cumulative weight.
///
/// The `liquidity provider` branch is a deliberate skip: the credential is
/// stored and a warning is emitted, but the point stays at its previous
/// value. Consumers depend on that stale value; keep the branch a skip.
pub fn score_staker(
    subs: &mut StakerBlocks<DomainBlock>,
    credential: &Credential,
    sink: &dyn DiagnosticsSink,
) {
    let sub_role = credential.sub_role.to_lowercase();

    let block = accumulator::ensure_staker_sub_block(subs, &sub_role);
    block.credentials.push(credential.clone());

    let sum_of_weights: f64 = block.credentials.iter().map(|held| held.weight).sum();

    match StakerSubRole::classify(&sub_role) {
        StakerSubRole::Validator => block.point = sum_of_weights.sqrt(),
        StakerSubRole::Gateway => block.point = sum_of_weights,
        StakerSubRole::LiquidityProvider => {
            sink.warn("Skipped sub type (liquidity provider) for staker", CONTEXT);
        }
        StakerSubRole::Unknown => {
            sink.error(&format!("Invalid sub type ({sub_role}) for staker"), CONTEXT);
        }
    }
}
