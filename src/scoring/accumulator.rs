use crate::types::score::{DomainBlock, IdentityScores, ScoreMap, StakerBlocks};

/// Create the entry for an identity if absent. Idempotent; an existing entry
/// and its blocks are never replaced.
pub fn ensure_identity<'a>(scores: &'a mut ScoreMap, identity_key: &str) -> &'a mut IdentityScores {
    scores.entry(identity_key.to_string()).or_default()
}

pub fn ensure_citizen_block(entry: &mut IdentityScores) -> &mut DomainBlock {
    entry.citizen.get_or_insert_with(DomainBlock::default)
}

pub fn ensure_builder_block(entry: &mut IdentityScores) -> &mut DomainBlock {
    entry.builder.get_or_insert_with(DomainBlock::default)
}

pub fn ensure_staker_map(entry: &mut IdentityScores) -> &mut StakerBlocks<DomainBlock> {
    entry.staker.get_or_insert_with(StakerBlocks::new)
}

/// Create the block for a normalized staker sub-role if absent. Blocks are
/// created even for sub-roles that later turn out invalid; diagnostics never
/// block creation.
pub fn ensure_staker_sub_block<'a>(
    subs: &'a mut StakerBlocks<DomainBlock>,
    sub_role: &str,
) -> &'a mut DomainBlock {
    subs.entry(sub_role.to_string()).or_default()
}
