pub mod accumulator;
pub mod builder;
pub mod citizen;
pub mod diagnostics;
pub mod staker;

use crate::types::credential::{Credential, CredentialStatus, Role};
use crate::types::score::ScoreMap;
use diagnostics::DiagnosticsSink;

/// Context string attached to every diagnostic the engine emits.
pub const CONTEXT: &str = "scoring";

/// Fold an ordered credential batch into the per-identity score map.
///
/// Only `Valid` credentials are scored. Malformed roles and sub-roles are
/// reported through the sink and never abort the batch. The map is built
/// fresh on every call; nothing survives across invocations.
pub fn calculate_scores(credentials: &[Credential], sink: &dyn DiagnosticsSink) -> ScoreMap {
    let mut scores = ScoreMap::new();

    for credential in credentials {
        if credential.status != CredentialStatus::Valid {
            continue;
        }

        let entry = accumulator::ensure_identity(&mut scores, &credential.identity_key);

        match Role::classify(&credential.role) {
            Some(Role::Citizen) => {
                let block = accumulator::ensure_citizen_block(entry);
                citizen::score_citizen(block, credential, sink);
            }
            Some(Role::Builder) => {
                let block = accumulator::ensure_builder_block(entry);
                builder::score_builder(block, credential, sink);
            }
            Some(Role::Staker) => {
                let subs = accumulator::ensure_staker_map(entry);
                staker::score_staker(subs, credential, sink);
            }
            None => {
                sink.error(
                    &format!("Unknown role ({}) exists", credential.role),
                    CONTEXT,
                );
            }
        }
    }

    scores
}
