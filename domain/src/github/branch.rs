//! Branch policy: the protected-branch guard and branch naming.

use super::failure::GitHubFailure;

/// Upper bound on `name`, `name_v1`, ... candidates tried by `create_branch`
pub const MAX_BRANCH_ATTEMPTS: usize = 1000;

/// The branches an operation works against, captured once per call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchSnapshot {
    /// Working branch that reads and commits target
    pub active: String,
    /// Protected branch that pull requests merge into
    pub base: String,
}

impl BranchSnapshot {
    pub fn new(active: impl Into<String>, base: impl Into<String>) -> Self {
        Self {
            active: active.into(),
            base: base.into(),
        }
    }

    /// Name-based check only; remote protection rules are not consulted.
    pub fn is_on_base(&self) -> bool {
        self.active == self.base
    }

    /// Refuse commits while the working branch is the base branch.
    pub fn guard_commit(&self) -> Result<(), GitHubFailure> {
        if self.is_on_base() {
            return Err(GitHubFailure::ProtectedBranch {
                branch: self.base.clone(),
            });
        }
        Ok(())
    }
}

/// `proposed`, `proposed_v1`, `proposed_v2`, ...
pub fn branch_name_candidates(proposed: &str) -> impl Iterator<Item = String> + '_ {
    (0..MAX_BRANCH_ATTEMPTS).map(move |i| match i {
        0 => proposed.to_string(),
        n => format!("{}_v{}", proposed, n),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_refuses_base_branch() {
        let snapshot = BranchSnapshot::new("main", "main");
        let err = snapshot.guard_commit().unwrap_err();
        assert!(err.to_string().contains("main"));
        assert!(matches!(err, GitHubFailure::ProtectedBranch { .. }));
    }

    #[test]
    fn test_guard_allows_working_branch() {
        assert!(BranchSnapshot::new("ai", "main").guard_commit().is_ok());
    }

    #[test]
    fn test_branch_name_candidates() {
        let names: Vec<String> = branch_name_candidates("feature").take(3).collect();
        assert_eq!(names, vec!["feature", "feature_v1", "feature_v2"]);
        assert_eq!(branch_name_candidates("x").count(), MAX_BRANCH_ATTEMPTS);
    }
}
