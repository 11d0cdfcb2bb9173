// Registration service orchestrates the write flow.
//
// Responsibilities
// - Look up the user already stored under the candidate's login.
// - Call the decider with the rules, the existing user and the candidate.
// - Persist accepted users through the StorageDao. Rejections leave storage untouched.

use crate::application::errors::RegistrationError;
use crate::core::ports::StorageDao;
use crate::core::rules::RegistrationRules;
use crate::core::user::User;
use crate::core::user::decider::register::decide::decide_register;
use std::rc::Rc;

pub trait RegistrationService {
    fn register(&self, user: Option<User>) -> Result<User, RegistrationError>;
}

pub struct RegistrationServiceImpl<TStorageDao>
where
    TStorageDao: StorageDao,
{
    rules: RegistrationRules,
    storage_dao: Rc<TStorageDao>,
}

impl<TStorageDao> RegistrationServiceImpl<TStorageDao>
where
    TStorageDao: StorageDao,
{
    pub fn new(storage_dao: Rc<TStorageDao>) -> Self {
        Self::with_rules(RegistrationRules::default(), storage_dao)
    }

    pub fn with_rules(rules: RegistrationRules, storage_dao: Rc<TStorageDao>) -> Self {
        Self { rules, storage_dao }
    }
}

impl<TStorageDao> RegistrationService for RegistrationServiceImpl<TStorageDao>
where
    TStorageDao: StorageDao,
{
    fn register(&self, user: Option<User>) -> Result<User, RegistrationError> {
        let existing = user
            .as_ref()
            .and_then(|u| u.login.as_deref())
            .and_then(|login| self.storage_dao.get(login));

        match decide_register(&self.rules, existing.as_ref(), user) {
            Ok(user) => {
                let stored = self.storage_dao.add(user);
                tracing::debug!(login = ?stored.login, "user registered");
                Ok(stored)
            }
            Err(rejection) => {
                let error = RegistrationError::from(rejection);
                tracing::warn!(reason = %error.reason, "registration rejected");
                Err(error)
            }
        }
    }
}
