// Ports define what the core needs from the outside world, without implementing it.
//
// Responsibilities
// - Keep the registration flow independent of where users are kept by coding against traits.
//
// Boundaries
// - No concrete storage here. Adapters implement these traits in the adapters layer.

use crate::core::user::User;

pub trait StorageDao {
    /// Stores the user under its login, replacing any previous entry.
    fn add(&self, user: User) -> User;

    fn get(&self, login: &str) -> Option<User>;
}
