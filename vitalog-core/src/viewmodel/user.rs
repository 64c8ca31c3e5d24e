//! User data view-model

use crate::repo::UserRepository;

/// Read-only snapshot of the tracked user's name.
///
/// Fetched once at construction; an absent user or a failed fetch leaves
/// the fields at their empty defaults (not an error).
pub struct UserDataViewModel {
    first_name: String,
    last_name: String,
}

impl UserDataViewModel {
    pub fn new(repository: &UserRepository) -> Self {
        let mut vm = Self {
            first_name: String::new(),
            last_name: String::new(),
        };

        match repository.get_user() {
            Ok(Some(user)) => {
                vm.first_name = user.first_name.unwrap_or_default();
                vm.last_name = user.last_name.unwrap_or_default();
            }
            Ok(None) => {}
            Err(err) => tracing::warn!(%err, "failed to fetch user data"),
        }

        vm
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }
}
