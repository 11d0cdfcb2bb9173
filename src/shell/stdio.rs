// JSON lines protocol spoken by the binary.
//
// One user object (or `null`) per input line, one outcome object per output line.
// Blank lines produce no output. A malformed line is reported and the next line is read.

use crate::application::registration_service::RegistrationService;
use crate::core::user::User;
use serde_json::{Value, json};

pub fn handle_line<S>(service: &S, line: &str) -> Option<Value>
where
    S: RegistrationService + ?Sized,
{
    if line.trim().is_empty() {
        return None;
    }
    let outcome = match serde_json::from_str::<Option<User>>(line) {
        Ok(user) => match service.register(user) {
            Ok(stored) => json!({ "status": "registered", "login": stored.login }),
            Err(error) => json!({ "status": "rejected", "reason": error.reason }),
        },
        Err(error) => {
            tracing::debug!(%error, "malformed input line");
            json!({ "status": "invalid", "reason": error.to_string() })
        }
    };
    Some(outcome)
}
