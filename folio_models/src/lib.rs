use std::ops::Deref;

use serde::{Deserialize, Serialize};

pub mod email_address;
pub mod page;
pub mod submission;

/// Wrapper for values that must never end up in logs or debug output.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Sensitive<T>(pub T);

impl<T> std::fmt::Debug for Sensitive<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("[redacted]")
    }
}

impl<T> From<T> for Sensitive<T> {
    fn from(value: T) -> Self {
        Self(value)
    }
}

impl<T> Deref for Sensitive<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sensitive_debug_redacted() {
        let secret = Sensitive("hunter2".to_owned());
        assert_eq!(format!("{secret:?}"), "[redacted]");
    }
}
