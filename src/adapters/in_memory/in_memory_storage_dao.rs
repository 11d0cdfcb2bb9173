// In memory implementation of the StorageDao port.
//
// Responsibilities
// - Forward writes and lookups to the shared Storage.
// - No uniqueness check; the registration service owns that rule.

use crate::adapters::in_memory::storage::Storage;
use crate::core::ports::StorageDao;
use crate::core::user::User;
use std::rc::Rc;

pub struct StorageDaoImpl {
    storage: Rc<Storage>,
}

impl StorageDaoImpl {
    pub fn new(storage: Rc<Storage>) -> Self {
        Self { storage }
    }
}

impl StorageDao for StorageDaoImpl {
    fn add(&self, user: User) -> User {
        tracing::debug!(login = ?user.login, "storing user");
        self.storage.insert(user.clone());
        user
    }

    fn get(&self, login: &str) -> Option<User> {
        self.storage.get(login)
    }
}

#[cfg(test)]
mod in_memory_storage_dao_tests {
    use super::*;
    use crate::test_support::fixtures::users::UserBuilder;
    use rstest::{fixture, rstest};

    #[fixture]
    fn before_each() -> (User, Rc<Storage>, StorageDaoImpl) {
        let storage = Rc::new(Storage::new());
        let dao = StorageDaoImpl::new(storage.clone());
        (UserBuilder::new().build(), storage, dao)
    }

    #[rstest]
    fn it_should_add_and_get_a_user(before_each: (User, Rc<Storage>, StorageDaoImpl)) {
        let (user, storage, dao) = before_each;
        assert_eq!(dao.add(user.clone()), user);
        assert_eq!(dao.get("abcdef123"), Some(user));
        assert_eq!(storage.len(), 1);
    }

    #[rstest]
    fn it_should_overwrite_silently_when_the_login_exists(
        before_each: (User, Rc<Storage>, StorageDaoImpl),
    ) {
        let (user, storage, dao) = before_each;
        dao.add(user);
        let replacement = UserBuilder::new().password(Some("another-pass")).build();
        assert_eq!(dao.add(replacement.clone()), replacement);
        assert_eq!(dao.get("abcdef123"), Some(replacement));
        assert_eq!(storage.len(), 1);
    }

    #[rstest]
    fn it_should_return_none_when_the_login_is_missing(
        before_each: (User, Rc<Storage>, StorageDaoImpl),
    ) {
        let (_, _, dao) = before_each;
        assert_eq!(dao.get("abcdef123"), None);
    }

    #[rstest]
    fn it_should_see_writes_made_through_another_dao(
        before_each: (User, Rc<Storage>, StorageDaoImpl),
    ) {
        let (user, storage, dao) = before_each;
        let other = StorageDaoImpl::new(storage);
        other.add(user.clone());
        assert_eq!(dao.get("abcdef123"), Some(user));
    }
}
