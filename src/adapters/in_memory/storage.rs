// In memory backing store for registered users.
//
// Purpose
// - Hold every stored user keyed by login for the lifetime of its owner.
//
// Responsibilities
// - Keep at most one user per login.
// - Offer `clear` so tests can isolate scenarios.
//
// Single threaded: shared through `Rc`, mutated through `RefCell`.

use crate::core::user::User;
use std::cell::RefCell;
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct Storage {
    people: RefCell<HashMap<Option<String>, User>>,
}

impl Storage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the user under its login and returns the entry it replaced, if any.
    pub fn insert(&self, user: User) -> Option<User> {
        self.people.borrow_mut().insert(user.login.clone(), user)
    }

    pub fn get(&self, login: &str) -> Option<User> {
        self.people
            .borrow()
            .get(&Some(login.to_string()))
            .cloned()
    }

    pub fn clear(&self) {
        self.people.borrow_mut().clear();
    }

    pub fn len(&self) -> usize {
        self.people.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.borrow().is_empty()
    }
}
