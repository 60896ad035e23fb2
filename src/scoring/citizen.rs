use crate::scoring::diagnostics::DiagnosticsSink;
use crate::scoring::CONTEXT;
use crate::types::credential::Credential;
use crate::types::score::DomainBlock;

/// Sub-role sentinel proving governance (DAO) participation.
pub const DAO_BADGE: &str = "POKT DAO";
/// Sub-role sentinel proving a completed identity (DNA) check.
pub const DNA_BADGE: &str = "POKT DNA";

/// Badge-completion rule: the point becomes 1 once both badges have been
/// observed at least once, regardless of duplicates, and is never recomputed
/// after that.
pub fn score_citizen(block: &mut DomainBlock, credential: &Credential, sink: &dyn DiagnosticsSink) {
    // store the credential before any rescan
    block.credentials.push(credential.clone());

    if block.point != 0.0 {
        return;
    }

    let mut has_dao_badge = false;
    let mut has_dna_badge = false;

    for held in &block.credentials {
        match held.sub_role.as_str() {
            DAO_BADGE => has_dao_badge = true,
            DNA_BADGE => has_dna_badge = true,
            other => {
                sink.error(&format!("Invalid sub type ({other}) for citizen"), CONTEXT);
            }
        }
    }

    if has_dao_badge && has_dna_badge {
        block.point = 1.0;
    }
}
