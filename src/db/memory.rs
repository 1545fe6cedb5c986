use dashmap::DashMap;

use super::UserStore;
use crate::models::{progress::WorkoutProgress, user::UserProfile};

struct UserRecord {
    profile: UserProfile,
    progress: WorkoutProgress,
}

/// Process-lifetime store. Each user lives in one map entry, so the shard
/// write guard taken by `get_mut` serialises updates to that user.
#[derive(Default)]
pub struct MemoryStore {
    users: DashMap<String, UserRecord>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl UserStore for MemoryStore {
    fn put(&self, profile: UserProfile, progress: WorkoutProgress) {
        self.users.insert(profile.user_id.clone(), UserRecord { profile, progress });
    }

    fn profile(&self, user_id: &str) -> Option<UserProfile> {
        self.users.get(user_id).map(|record| record.profile.clone())
    }

    fn progress(&self, user_id: &str) -> Option<WorkoutProgress> {
        self.users.get(user_id).map(|record| record.progress.clone())
    }

    fn update_progress(&self, user_id: &str, update: &mut dyn FnMut(&UserProfile, &mut WorkoutProgress)) -> bool {
        match self.users.get_mut(user_id) {
            Some(mut record) => {
                let UserRecord { profile, progress } = &mut *record;
                update(profile, progress);
                true
            }
            None => false,
        }
    }
}
