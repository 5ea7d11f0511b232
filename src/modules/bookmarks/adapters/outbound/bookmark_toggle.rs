use crate::modules::bookmarks::core::bookmark::ToggleOutcome;
use crate::shared::infrastructure::document_store::StoreError;
use std::future::Future;

/// Upper bound on delete/insert rounds before a toggle gives up.
pub const MAX_TOGGLE_ATTEMPTS: usize = 8;

/// Result of trying to insert a bookmark that a unique index guards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted,
    /// Another writer holds the (user, event) pair.
    Conflict,
}

/// Toggles a bookmark over a store that only offers single-document writes.
///
/// `delete` reports whether it removed a bookmark. `insert` reports a conflict
/// when a concurrent toggle inserted the same pair first, in which case the next
/// round deletes that bookmark instead.
pub async fn toggle_with_retry<D, DF, I, IF>(
    mut delete: D,
    mut insert: I,
) -> Result<ToggleOutcome, StoreError>
where
    D: FnMut() -> DF,
    DF: Future<Output = Result<bool, StoreError>>,
    I: FnMut() -> IF,
    IF: Future<Output = Result<InsertOutcome, StoreError>>,
{
    for attempt in 1..=MAX_TOGGLE_ATTEMPTS {
        if delete().await? {
            return Ok(ToggleOutcome::Unbookmarked);
        }
        match insert().await? {
            InsertOutcome::Inserted => return Ok(ToggleOutcome::Bookmarked),
            InsertOutcome::Conflict => {
                tracing::debug!(attempt, "bookmark insert conflicted, retrying toggle");
            }
        }
    }
    Err(StoreError::Backend(format!(
        "bookmark toggle still conflicting after {MAX_TOGGLE_ATTEMPTS} attempts"
    )))
}
