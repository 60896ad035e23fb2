pub mod blob;

use crate::error::Result;
use crate::types::score::{DomainBlock, IdentityScores, ScoreMap, StakerBlocks};
use blob::{BlobRef, BlobStore};
use chrono::Utc;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

/// A domain block after persistence: the credential list has been replaced
/// by the URL of its stored blob. Empty lists keep an empty URL.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoredDomainBlock {
    pub point: f64,
    pub credentials: String,
}

/// Receipt for one persisted score map.
#[derive(Debug, Clone, Serialize)]
pub struct StoreReceipt {
    pub url: String,
    pub manifest_path: PathBuf,
}

#[derive(Debug, Serialize)]
struct RunManifest {
    timestamp: String,
    application_id: String,
    repscore_version: String,
    scores: BlobRef,
    credential_blobs: Vec<CredentialBlobEntry>,
}

#[derive(Debug, Serialize)]
struct CredentialBlobEntry {
    identity: String,
    domain: String,
    blob: BlobRef,
}

/// Persist a score map: every non-empty credential list becomes its own blob
/// and is rewritten into its retrieval URL, then the rewritten map is stored
/// as the final blob. Runs strictly after scoring; the engine never sees
/// URLs.
pub fn store_scores(
    scores: &ScoreMap,
    store: &BlobStore,
    application_id: &str,
) -> Result<StoreReceipt> {
    let mut blobs = Vec::new();
    let stored = rewrite_credential_blocks(scores, store, &mut blobs)?;

    let scores_ref = store.store_json(&stored)?;
    let manifest_path = write_manifest(store, application_id, &scores_ref, blobs)?;

    Ok(StoreReceipt {
        url: scores_ref.url,
        manifest_path,
    })
}

fn rewrite_credential_blocks(
    scores: &ScoreMap,
    store: &BlobStore,
    blobs: &mut Vec<CredentialBlobEntry>,
) -> Result<ScoreMap<StoredDomainBlock>> {
    let mut stored = ScoreMap::<StoredDomainBlock>::new();

    for (identity, entry) in scores {
        let mut out = IdentityScores::<StoredDomainBlock>::default();

        if let Some(block) = &entry.citizen {
            out.citizen = Some(store_block(identity, "citizen", block, store, blobs)?);
        }
        if let Some(block) = &entry.builder {
            out.builder = Some(store_block(identity, "builder", block, store, blobs)?);
        }
        if let Some(subs) = &entry.staker {
            let mut stored_subs = StakerBlocks::<StoredDomainBlock>::new();
            for (sub_role, block) in subs {
                let domain = format!("staker/{sub_role}");
                stored_subs.insert(
                    sub_role.clone(),
                    store_block(identity, &domain, block, store, blobs)?,
                );
            }
            out.staker = Some(stored_subs);
        }

        stored.insert(identity.clone(), out);
    }

    Ok(stored)
}

fn store_block(
    identity: &str,
    domain: &str,
    block: &DomainBlock,
    store: &BlobStore,
    blobs: &mut Vec<CredentialBlobEntry>,
) -> Result<StoredDomainBlock> {
    if block.credentials.is_empty() {
        return Ok(StoredDomainBlock {
            point: block.point,
            credentials: String::new(),
        });
    }

    let blob = store.store_json(&block.credentials)?;
    let url = blob.url.clone();
    blobs.push(CredentialBlobEntry {
        identity: identity.to_string(),
        domain: domain.to_string(),
        blob,
    });

    Ok(StoredDomainBlock {
        point: block.point,
        credentials: url,
    })
}

fn write_manifest(
    store: &BlobStore,
    application_id: &str,
    scores_ref: &BlobRef,
    credential_blobs: Vec<CredentialBlobEntry>,
) -> Result<PathBuf> {
    let timestamp = Utc::now();
    let manifest = RunManifest {
        timestamp: timestamp.to_rfc3339(),
        application_id: application_id.to_string(),
        repscore_version: env!("CARGO_PKG_VERSION").to_string(),
        scores: scores_ref.clone(),
        credential_blobs,
    };

    let manifests = store.root().join("manifests");
    fs::create_dir_all(&manifests)?;
    let out_path = manifests.join(format!("{}.json", timestamp.format("%Y%m%dT%H%M%S%.3fZ")));
    fs::write(&out_path, serde_json::to_string_pretty(&manifest)?)?;
    Ok(out_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring;
    use crate::scoring::diagnostics::CapturingSink;
    use crate::types::credential::{Credential, CredentialStatus};
    use tempfile::TempDir;

    const BASE_URL: &str = "https://blobs.example.net/";

    fn valid(identity_key: &str, role: &str, sub_role: &str, weight: f64) -> Credential {
        Credential {
            status: CredentialStatus::Valid,
            identity_key: identity_key.to_string(),
            role: role.to_string(),
            sub_role: sub_role.to_string(),
            weight,
        }
    }

    fn scored_map(batch: &[Credential]) -> ScoreMap {
        let sink = CapturingSink::new();
        scoring::calculate_scores(batch, &sink)
    }

    #[test]
    fn credential_lists_become_retrieval_urls() {
        let dir = TempDir::new().expect("temp dir should be created");
        let store = BlobStore::new(dir.path(), BASE_URL);
        let scores = scored_map(&[
            valid("G1", "citizen", "POKT DAO", 17.0),
            valid("G1", "staker", "Validator", 4.0),
        ]);

        let receipt = store_scores(&scores, &store, "TEST-SCORING").expect("store should succeed");
        assert!(receipt.url.starts_with(BASE_URL));

        let raw = std::fs::read_to_string(
            dir.path()
                .join("objects")
                .join(format!("{}.json", receipt.url.trim_start_matches(BASE_URL))),
        )
        .expect("final blob should read");
        let rendered: serde_json::Value = serde_json::from_str(&raw).expect("blob should parse");

        let citizen = &rendered["G1"]["citizen"];
        assert_eq!(citizen["point"], 0.0);
        let url = citizen["credentials"].as_str().expect("credentials should be a URL");
        assert!(url.starts_with(BASE_URL));

        let validator = &rendered["G1"]["staker"]["validator"];
        assert_eq!(validator["point"], 2.0);
        assert!(validator["credentials"]
            .as_str()
            .expect("credentials should be a URL")
            .starts_with(BASE_URL));
    }

    #[test]
    fn points_survive_the_rewrite_unchanged() {
        let dir = TempDir::new().expect("temp dir should be created");
        let store = BlobStore::new(dir.path(), BASE_URL);
        let scores = scored_map(&[
            valid("G1", "citizen", "POKT DAO", 17.0),
            valid("G1", "citizen", "POKT DNA", 17.0),
            valid("G1", "builder", "Bounty Hunter", 4.0),
        ]);

        let mut blobs = Vec::new();
        let stored =
            rewrite_credential_blocks(&scores, &store, &mut blobs).expect("rewrite should succeed");

        let entry = &stored["G1"];
        assert_eq!(entry.citizen.as_ref().map(|block| block.point), Some(1.0));
        assert_eq!(entry.builder.as_ref().map(|block| block.point), Some(4.0));
        assert_eq!(blobs.len(), 2);
    }

    #[test]
    fn empty_identity_entries_survive_the_rewrite() {
        let dir = TempDir::new().expect("temp dir should be created");
        let store = BlobStore::new(dir.path(), BASE_URL);
        // unknown role: the engine creates the identity entry but no blocks
        let scores = scored_map(&[valid("G1", "oracle", "Feeds", 1.0)]);

        let mut blobs = Vec::new();
        let stored =
            rewrite_credential_blocks(&scores, &store, &mut blobs).expect("rewrite should succeed");

        let entry = &stored["G1"];
        assert!(entry.citizen.is_none());
        assert!(entry.builder.is_none());
        assert!(entry.staker.is_none());
        assert!(blobs.is_empty());
    }

    #[test]
    fn manifest_lists_every_credential_blob() {
        let dir = TempDir::new().expect("temp dir should be created");
        let store = BlobStore::new(dir.path(), BASE_URL);
        let scores = scored_map(&[
            valid("G1", "builder", "Bounty Hunter", 4.0),
            valid("G2", "staker", "Gateway", 3.0),
        ]);

        let receipt = store_scores(&scores, &store, "TEST-SCORING").expect("store should succeed");

        let raw = std::fs::read_to_string(&receipt.manifest_path).expect("manifest should read");
        let manifest: serde_json::Value = serde_json::from_str(&raw).expect("manifest should parse");

        assert_eq!(manifest["application_id"], "TEST-SCORING");
        let blob_entries = manifest["credential_blobs"]
            .as_array()
            .expect("credential_blobs should be an array");
        assert_eq!(blob_entries.len(), 2);
        assert!(blob_entries
            .iter()
            .any(|entry| entry["identity"] == "G2" && entry["domain"] == "staker/gateway"));
    }
}
