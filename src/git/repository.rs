use std::collections::HashMap;
use std::path::Path;

use git2::{ErrorCode, Oid, Repository as Git2Repo};
use tracing::debug;

use crate::error::{PubverError, Result};

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open the repository whose metadata lives directly in `path`.
    ///
    /// Parent directories are not searched: a package directory without its
    /// own `.git` is reported as `NotARepository`.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        match Git2Repo::open(path) {
            Ok(repo) => Ok(Git2Repository { repo }),
            Err(e) if e.code() == ErrorCode::NotFound => Err(PubverError::NotARepository {
                path: path.to_path_buf(),
            }),
            Err(e) => Err(e.into()),
        }
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }

    /// Map each tagged commit to its tag names (handles lightweight and annotated tags)
    fn tags_by_commit(&self) -> Result<HashMap<Oid, Vec<String>>> {
        let mut by_commit: HashMap<Oid, Vec<String>> = HashMap::new();

        for name in self.repo.tag_names(None)?.iter().flatten() {
            let reference = self.repo.find_reference(&format!("refs/tags/{}", name))?;
            match reference.peel_to_commit() {
                Ok(commit) => by_commit
                    .entry(commit.id())
                    .or_default()
                    .push(name.to_string()),
                Err(e) => debug!("Skipping tag '{}' not pointing at a commit: {}", name, e),
            }
        }

        Ok(by_commit)
    }
}

impl super::Repository for Git2Repository {
    fn tag_history(&self) -> Result<Vec<Vec<String>>> {
        let mut by_commit = self.tags_by_commit()?;
        if by_commit.is_empty() {
            return Ok(Vec::new());
        }

        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(git2::Sort::TOPOLOGICAL | git2::Sort::TIME)?;
        match revwalk.push_head() {
            Ok(()) => {}
            Err(e) if e.code() == ErrorCode::UnbornBranch || e.code() == ErrorCode::NotFound => {
                return Ok(Vec::new())
            }
            Err(e) => return Err(e.into()),
        }

        let mut history = Vec::new();
        for oid in revwalk {
            if let Some(mut names) = by_commit.remove(&oid?) {
                names.sort();
                history.push(names);
            }
        }

        Ok(history)
    }
}
