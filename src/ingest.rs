use crate::error::{RepscoreError, Result};
use crate::types::credential::{Credential, CredentialStatus, Role};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A loaded batch: records in input order plus the count of malformed
/// entries that were skipped.
#[derive(Debug, Clone, Default)]
pub struct Batch {
    pub credentials: Vec<Credential>,
    pub malformed: usize,
}

/// Per-status and per-role record counts for batch triage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub valid: usize,
    pub expired: usize,
    pub revoked: usize,
    pub suspended: usize,
    pub unknown_status: usize,
    pub citizen: usize,
    pub builder: usize,
    pub staker: usize,
    pub unrecognized_role: usize,
}

/// Load a credential batch from a JSON file or a directory of JSON files.
///
/// Directories are walked recursively and files are visited in path order so
/// paginated exports produce a stable batch. Each array element is parsed on
/// its own: malformed records are skipped with a warning unless strict mode
/// is on, in which case the first one fails the run.
pub fn load_batch(path: &Path, strict: bool) -> Result<Batch> {
    if !path.exists() {
        return Err(RepscoreError::PathNotFound(path.display().to_string()));
    }

    let files = if path.is_dir() {
        list_batch_files(path)
    } else {
        vec![path.to_path_buf()]
    };

    let mut batch = Batch::default();
    for file in &files {
        read_batch_file(file, strict, &mut batch)?;
    }
    Ok(batch)
}

pub fn summarize(batch: &Batch) -> BatchSummary {
    let mut summary = BatchSummary::default();

    for credential in &batch.credentials {
        match credential.status {
            CredentialStatus::Valid => summary.valid += 1,
            CredentialStatus::Expired => summary.expired += 1,
            CredentialStatus::Revoked => summary.revoked += 1,
            CredentialStatus::Suspended => summary.suspended += 1,
            CredentialStatus::Unknown => summary.unknown_status += 1,
        }
        match Role::classify(&credential.role) {
            Some(Role::Citizen) => summary.citizen += 1,
            Some(Role::Builder) => summary.builder += 1,
            Some(Role::Staker) => summary.staker += 1,
            None => summary.unrecognized_role += 1,
        }
    }

    summary
}

fn list_batch_files(root: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.path().to_path_buf())
        .filter(|path| path.extension().and_then(|ext| ext.to_str()) == Some("json"))
        .collect();
    files.sort();
    files
}

fn read_batch_file(path: &Path, strict: bool, batch: &mut Batch) -> Result<()> {
    let raw = std::fs::read_to_string(path)?;
    let records: Vec<serde_json::Value> = serde_json::from_str(&raw)
        .map_err(|e| RepscoreError::BatchParse(format!("{}: {}", path.display(), e)))?;

    for (index, record) in records.into_iter().enumerate() {
        match serde_json::from_value::<Credential>(record) {
            Ok(credential) => batch.credentials.push(credential),
            Err(e) => {
                if strict {
                    return Err(RepscoreError::BatchParse(format!(
                        "{} record {}: {}",
                        path.display(),
                        index,
                        e
                    )));
                }
                tracing::warn!(
                    "skipping malformed record {} in {}: {}",
                    index,
                    path.display(),
                    e
                );
                batch.malformed += 1;
            }
        }
    }
    Ok(())
}
