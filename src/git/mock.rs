use crate::error::Result;
use crate::git::Repository;

/// Mock repository for testing without actual git operations
#[derive(Debug, Default)]
pub struct MockRepository {
    history: Vec<Vec<String>>,
}

impl MockRepository {
    /// Create a new mock repository without tags
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a tagged commit older than every commit added so far
    pub fn with_tagged_commit(mut self, tags: &[&str]) -> Self {
        self.history
            .push(tags.iter().map(|t| t.to_string()).collect());
        self
    }
}

impl Repository for MockRepository {
    fn tag_history(&self) -> Result<Vec<Vec<String>>> {
        Ok(self.history.clone())
    }
}
