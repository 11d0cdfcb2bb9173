// Thresholds the registration decider enforces.

pub const DEFAULT_MIN_LOGIN_LENGTH: usize = 6;
pub const DEFAULT_MIN_PASSWORD_LENGTH: usize = 6;
pub const DEFAULT_MIN_AGE: i32 = 18;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistrationRules {
    pub min_login_length: usize,
    pub min_password_length: usize,
    pub min_age: i32,
}

impl Default for RegistrationRules {
    fn default() -> Self {
        Self {
            min_login_length: DEFAULT_MIN_LOGIN_LENGTH,
            min_password_length: DEFAULT_MIN_PASSWORD_LENGTH,
            min_age: DEFAULT_MIN_AGE,
        }
    }
}
