use std::fmt;

use serde::Serialize;

/// A plain informational message, shown as is or as
/// `{"message": …}` in json.
#[derive(Debug, Serialize)]
pub struct SimpleMessage {
    pub message: String,
}

impl SimpleMessage {
    pub fn new<S: Into<String>>(message: S) -> SimpleMessage {
        SimpleMessage {
            message: message.into(),
        }
    }
}

impl fmt::Display for SimpleMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
