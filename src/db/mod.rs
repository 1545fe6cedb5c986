pub mod memory;

use crate::models::{progress::WorkoutProgress, user::UserProfile};

pub use memory::MemoryStore;

/// Storage for profiles and their progress entries, keyed by user id.
///
/// `update_progress` must run the closure while holding exclusive access to
/// that user's entry so concurrent completions never lose an update.
pub trait UserStore: Send + Sync {
    /// Stores a profile with a fresh progress entry, replacing any previous pair.
    fn put(&self, profile: UserProfile, progress: WorkoutProgress);

    fn profile(&self, user_id: &str) -> Option<UserProfile>;

    fn progress(&self, user_id: &str) -> Option<WorkoutProgress>;

    /// Returns `false` when the user is unknown.
    fn update_progress(&self, user_id: &str, update: &mut dyn FnMut(&UserProfile, &mut WorkoutProgress)) -> bool;
}
