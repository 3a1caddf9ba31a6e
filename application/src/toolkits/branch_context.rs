//! Working-branch state of a GitHub toolkit.

use std::sync::Mutex;

use toolkits_domain::BranchSnapshot;

/// Holds the active and base branch between calls.
///
/// Every operation reads one [`BranchSnapshot`] at its start and works from
/// that copy. Only `set_active_branch` and `create_branch` write here.
/// The lock makes the toolkit `Sync`; it does not order concurrent callers,
/// so one toolkit should serve one agent at a time.
#[derive(Debug)]
pub struct BranchContext {
    state: Mutex<BranchSnapshot>,
}

impl BranchContext {
    pub fn new(active: impl Into<String>, base: impl Into<String>) -> Self {
        Self {
            state: Mutex::new(BranchSnapshot::new(active, base)),
        }
    }

    pub fn snapshot(&self) -> BranchSnapshot {
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn set_active(&self, branch: impl Into<String>) {
        let mut state = self
            .state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        state.active = branch.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_is_a_copy() {
        let context = BranchContext::new("ai", "main");
        let before = context.snapshot();
        context.set_active("feature");

        assert_eq!(before.active, "ai");
        assert_eq!(context.snapshot().active, "feature");
        assert_eq!(context.snapshot().base, "main");
    }
}
