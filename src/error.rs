use thiserror::Error;

use crate::codes::retcode_name;
use crate::registry::CallbackSlot;

#[derive(Debug, Error)]
pub enum DiagnosticsError {
    /// One of the three registration calls failed. Registration stops at the
    /// first failure; whether that is fatal is the caller's decision.
    #[error("{slot} callback registration failed: {reason}")]
    Registration {
        slot: CallbackSlot,
        reason: RegistrationFailure,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Why a registry rejected a registration call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationFailure {
    /// The underlying library returned a non-success code.
    Retcode(i32),
    /// Anything the registry can only describe in prose.
    Other(String),
}

impl std::fmt::Display for RegistrationFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegistrationFailure::Retcode(code) => match retcode_name(*code) {
                Some(name) => write!(f, "library returned {name}"),
                None => write!(f, "library returned code {code}"),
            },
            RegistrationFailure::Other(reason) => write!(f, "{reason}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registration_failure_names_known_retcodes() {
        assert_eq!(
            RegistrationFailure::Retcode(0).to_string(),
            "library returned CS_FAIL"
        );
        assert_eq!(
            RegistrationFailure::Retcode(77).to_string(),
            "library returned code 77"
        );
    }

    #[test]
    fn registration_error_display_includes_slot() {
        let err = DiagnosticsError::Registration {
            slot: CallbackSlot::ServerMessage,
            reason: RegistrationFailure::Other("callback table full".into()),
        };
        assert_eq!(
            err.to_string(),
            "server-message callback registration failed: callback table full"
        );
    }
}
