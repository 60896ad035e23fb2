use crate::scoring::diagnostics::DiagnosticsSink;
use crate::scoring::CONTEXT;
use crate::types::credential::Credential;
use crate::types::score::DomainBlock;
use std::collections::BTreeMap;

/// The fixed catalogue of recognized builder achievement categories.
pub const BUILDER_SUB_ROLES: [&str; 8] = [
    "Protocol Builder",
    "Priority Builder",
    "Socket Builder",
    "Proposal Builder",
    "Bounty Hunter",
    "Thought Leader",
    "DAO Scholar",
    "OG Governor",
];

/// Hard cap on any identity's builder point.
pub const BUILDER_POINT_CAP: f64 = 10.0;

/// Diversity rule: each known category contributes its best weight seen so
/// far (re-issued achievements do not stack), and the sum is clamped to the
/// cap. Once capped, later credentials are stored without rescanning.
pub fn score_builder(block: &mut DomainBlock, credential: &Credential, sink: &dyn DiagnosticsSink) {
    block.credentials.push(credential.clone());

    if block.point >= BUILDER_POINT_CAP {
        return;
    }

    let mut best_per_category: BTreeMap<&str, f64> = BTreeMap::new();

    for held in &block.credentials {
        let known = BUILDER_SUB_ROLES
            .iter()
            .copied()
            .find(|category| *category == held.sub_role);

        match known {
            Some(category) => {
                let best = best_per_category.entry(category).or_insert(held.weight);
                if held.weight > *best {
                    *best = held.weight;
                }
            }
            None => {
                sink.error(
                    &format!("Invalid sub type ({}) for builder", held.sub_role),
                    CONTEXT,
                );
            }
        }
    }

    let sum_of_points: f64 = best_per_category.values().sum();
    block.point = if sum_of_points >= BUILDER_POINT_CAP {
        BUILDER_POINT_CAP
    } else {
        sum_of_points
    };
}
