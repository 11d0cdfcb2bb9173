// Shared test fixture for registration candidates.
// The default user is read from `json/valid_user.json` and passes every registration rule.

use crate::core::user::User;
use std::fs;

const VALID_USER_JSON: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/src/test_support/fixtures/users/json/valid_user.json"
);

pub struct UserBuilder {
    inner: User,
}

impl Default for UserBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl UserBuilder {
    pub fn new() -> Self {
        let json_str = fs::read_to_string(VALID_USER_JSON).unwrap();
        let inner: User = serde_json::from_str(&json_str).unwrap();
        Self { inner }
    }

    pub fn login(mut self, v: Option<&str>) -> Self {
        self.inner.login = v.map(str::to_string);
        self
    }

    pub fn password(mut self, v: Option<&str>) -> Self {
        self.inner.password = v.map(str::to_string);
        self
    }

    pub fn age(mut self, v: Option<i32>) -> Self {
        self.inner.age = v;
        self
    }

    pub fn build(self) -> User {
        self.inner
    }
}
