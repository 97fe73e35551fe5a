//! Where evaluation files come from: the hub, or a local copy of the repo.

use crate::RoundscoreError;
use crate::cli::RepoKind;
use crate::config::HubConfig;
use hf_hub::api::sync::{ApiBuilder, ApiRepo};
use hf_hub::Repo;
use std::path::{Path, PathBuf};

/// Read-only view of a repository: a flat file listing plus content access.
pub trait RepoSource {
    /// Repository-relative paths, `/`-separated.
    fn list_files(&self) -> Result<Vec<String>, RoundscoreError>;
    fn read(&self, path: &str) -> Result<Vec<u8>, RoundscoreError>;
}

/// Hub-backed source. Downloads go through the shared hub cache, so repeated
/// runs only fetch files that changed.
pub struct HubSource {
    repo: ApiRepo,
}

impl HubSource {
    pub fn new(
        repo_id: &str,
        kind: RepoKind,
        revision: String,
        hub: &HubConfig,
    ) -> Result<Self, RoundscoreError> {
        let mut builder = ApiBuilder::from_env().with_progress(hub.progress);
        if let Some(endpoint) = &hub.endpoint {
            builder = builder.with_endpoint(endpoint.clone());
        }
        if let Some(dir) = &hub.cache_dir {
            builder = builder.with_cache_dir(dir.clone());
        }
        if hub.token.is_some() {
            builder = builder.with_token(hub.token.clone());
        }
        let api = builder.build()?;
        log::info!("hub repo {repo_id} ({kind:?}) at {revision}");
        let repo = api.repo(Repo::with_revision(repo_id.to_string(), kind.into(), revision));
        Ok(Self { repo })
    }
}

impl RepoSource for HubSource {
    fn list_files(&self) -> Result<Vec<String>, RoundscoreError> {
        let info = self.repo.info()?;
        Ok(info.siblings.into_iter().map(|s| s.rfilename).collect())
    }

    fn read(&self, path: &str) -> Result<Vec<u8>, RoundscoreError> {
        let local = self.repo.get(path)?;
        Ok(std::fs::read(local)?)
    }
}

/// A repository laid out on disk, e.g. a git clone of a hub dataset.
pub struct LocalSource {
    root: PathBuf,
}

impl LocalSource {
    pub fn new(root: impl Into<PathBuf>) -> Result<Self, RoundscoreError> {
        let root = root.into();
        if !root.is_dir() {
            return Err(RoundscoreError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("{} is not a directory", root.display()),
            )));
        }
        Ok(Self { root })
    }
}

impl RepoSource for LocalSource {
    fn list_files(&self) -> Result<Vec<String>, RoundscoreError> {
        let mut files = Vec::new();
        walk(&self.root, "", &mut files)?;
        files.sort();
        Ok(files)
    }

    fn read(&self, path: &str) -> Result<Vec<u8>, RoundscoreError> {
        let full = path
            .split('/')
            .fold(self.root.clone(), |acc, seg| acc.join(seg));
        Ok(std::fs::read(full)?)
    }
}

fn walk(dir: &Path, prefix: &str, out: &mut Vec<String>) -> Result<(), RoundscoreError> {
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            log::warn!("skip non-utf8 name under {}", dir.display());
            continue;
        };
        if name == ".git" {
            continue;
        }
        let rel = if prefix.is_empty() {
            name.to_string()
        } else {
            format!("{prefix}/{name}")
        };
        let file_type = entry.file_type()?;
        if file_type.is_dir() {
            walk(&entry.path(), &rel, out)?;
        } else {
            out.push(rel);
        }
    }
    Ok(())
}
