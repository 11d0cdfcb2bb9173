// Pure decision function for registration.
//
// Purpose
// - Validate a candidate user against the rules and the currently stored user with the same login.
//
// Responsibilities
// - Reject on the first violated rule: presence, then login, password, age, then uniqueness.
// - Never perform input or output.

use crate::core::rules::RegistrationRules;
use crate::core::user::User;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("user must be provided")]
    UserMissing,
    #[error("login must be provided")]
    LoginMissing,
    #[error("login must not be empty")]
    LoginEmpty,
    #[error("login must be at least {min} characters, got {actual}")]
    LoginTooShort { min: usize, actual: usize },
    #[error("password must be provided")]
    PasswordMissing,
    #[error("password must not be empty")]
    PasswordEmpty,
    #[error("password must be at least {min} characters, got {actual}")]
    PasswordTooShort { min: usize, actual: usize },
    #[error("age must be provided")]
    AgeMissing,
    #[error("age must not be negative, got {0}")]
    AgeNegative(i32),
    #[error("age must be at least {min}, got {actual}")]
    AgeTooYoung { min: i32, actual: i32 },
    #[error("login {0} is already registered")]
    LoginAlreadyRegistered(String),
}

pub fn decide_register(
    rules: &RegistrationRules,
    existing: Option<&User>,
    candidate: Option<User>,
) -> Result<User, DecideError> {
    let user = candidate.ok_or(DecideError::UserMissing)?;

    let login = match user.login.as_deref() {
        None => return Err(DecideError::LoginMissing),
        Some("") => return Err(DecideError::LoginEmpty),
        Some(login) => login,
    };
    let login_length = login.chars().count();
    if login_length < rules.min_login_length {
        return Err(DecideError::LoginTooShort {
            min: rules.min_login_length,
            actual: login_length,
        });
    }

    let password = match user.password.as_deref() {
        None => return Err(DecideError::PasswordMissing),
        Some("") => return Err(DecideError::PasswordEmpty),
        Some(password) => password,
    };
    let password_length = password.chars().count();
    if password_length < rules.min_password_length {
        return Err(DecideError::PasswordTooShort {
            min: rules.min_password_length,
            actual: password_length,
        });
    }

    match user.age {
        None => return Err(DecideError::AgeMissing),
        Some(age) if age < 0 => return Err(DecideError::AgeNegative(age)),
        Some(age) if age < rules.min_age => {
            return Err(DecideError::AgeTooYoung {
                min: rules.min_age,
                actual: age,
            });
        }
        Some(_) => {}
    }

    if existing.is_some() {
        return Err(DecideError::LoginAlreadyRegistered(login.to_string()));
    }

    Ok(user)
}
