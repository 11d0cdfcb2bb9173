// User entity and the registration decider.
//
// Structure
// - user.rs: the record itself
// - decider/register/: pure decision logic for registering a user

use serde::de::value::MapAccessDeserializer;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

pub mod decider {
    pub mod register {
        pub mod decide;
    }
}

/// A registration candidate. Any field may be absent until the decider has accepted it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct User {
    pub login: Option<String>,
    pub password: Option<String>,
    pub age: Option<i32>,
}

impl User {
    pub fn new(login: impl Into<String>, password: impl Into<String>, age: i32) -> Self {
        Self {
            login: Some(login.into()),
            password: Some(password.into()),
            age: Some(age),
        }
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct UserFields {
    login: Option<String>,
    password: Option<String>,
    age: Option<i32>,
}

struct UserVisitor;

impl<'de> Visitor<'de> for UserVisitor {
    type Value = User;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a user object")
    }

    fn visit_map<A>(self, map: A) -> Result<User, A::Error>
    where
        A: MapAccess<'de>,
    {
        let fields = UserFields::deserialize(MapAccessDeserializer::new(map))?;
        Ok(User {
            login: fields.login,
            password: fields.password,
            age: fields.age,
        })
    }
}

// Users only come as objects; the positional form serde derives for structs is refused.
impl<'de> Deserialize<'de> for User {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(UserVisitor)
    }
}
