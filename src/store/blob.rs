use crate::error::Result;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};

/// Content-addressed JSON blob store. A blob's address is the SHA-256 of its
/// serialized bytes, so writing the same content twice yields the same
/// address and a single object on disk.
#[derive(Debug, Clone)]
pub struct BlobStore {
    root: PathBuf,
    base_url: String,
}

/// Address of a stored blob: its content hash and the retrieval URL formed
/// from the configured base URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlobRef {
    pub sha256: String,
    pub url: String,
}

impl BlobStore {
    pub fn new(root: impl Into<PathBuf>, base_url: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            base_url: base_url.into(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Serialize `value` and persist it under its content hash.
    pub fn store_json<T: Serialize>(&self, value: &T) -> Result<BlobRef> {
        let bytes = serde_json::to_vec_pretty(value)?;
        let sha256 = sha256_hex(&bytes);

        let objects = self.root.join("objects");
        fs::create_dir_all(&objects)?;
        let path = objects.join(format!("{sha256}.json"));
        if !path.exists() {
            fs::write(&path, &bytes)?;
        }

        let url = format!("{}{}", self.base_url, sha256);
        Ok(BlobRef { sha256, url })
    }
}

fn sha256_hex(bytes: &[u8]) -> String {
    let digest = Sha256::digest(bytes);
    format!("{digest:x}")
}
