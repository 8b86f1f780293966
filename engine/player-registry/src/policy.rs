use crate::types::DirectoryEntry;

/// Picks one player out of the directory candidates for a query
///
/// Candidates arrive in directory order. Swapping the policy (e.g., for an
/// interactive choice) leaves the rest of the pipeline untouched.
pub trait ResolvePolicy: Send + Sync {
    fn choose<'a>(&self, query: &str, candidates: &[&'a DirectoryEntry])
        -> Option<&'a DirectoryEntry>;
}

/// Always takes the first candidate
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstMatch;

impl ResolvePolicy for FirstMatch {
    fn choose<'a>(
        &self,
        _query: &str,
        candidates: &[&'a DirectoryEntry],
    ) -> Option<&'a DirectoryEntry> {
        candidates.first().copied()
    }
}
