use crate::types::credential::Credential;
use serde::Serialize;
use std::collections::BTreeMap;

/// Accumulated evidence and derived score for one role (or one staker
/// sub-role) of one identity. The credential list is append-only and keeps
/// input order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DomainBlock {
    pub point: f64,
    pub credentials: Vec<Credential>,
}

/// Per-sub-role staker blocks, keyed by the lower-cased sub-role claim.
pub type StakerBlocks<B> = BTreeMap<String, B>;

/// Scores of a single identity. Generic over the block type: the engine
/// produces `IdentityScores<DomainBlock>`, and the store rewrites it into
/// blocks whose credential lists have become retrieval URLs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IdentityScores<B = DomainBlock> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub citizen: Option<B>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub builder: Option<B>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub staker: Option<StakerBlocks<B>>,
}

impl<B> Default for IdentityScores<B> {
    fn default() -> Self {
        Self {
            citizen: None,
            builder: None,
            staker: None,
        }
    }
}

/// The full score map, keyed by identity key. Ordered so serialized output
/// is deterministic for a given input batch.
pub type ScoreMap<B = DomainBlock> = BTreeMap<String, IdentityScores<B>>;
