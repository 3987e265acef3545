//! Error types for the RotorCrypt library.

use thiserror::Error;

/// Errors produced by the RotorCrypt library.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RotorCryptError {
    /// Machine or table configuration is malformed.
    ///
    /// Raised for a rotor list that is not exactly three entries long, an
    /// unknown rotor type, a position string that is not exactly three
    /// symbols, or a wiring table that is not 26 symbols long.
    #[error("invalid configuration: {reason}")]
    InvalidConfiguration {
        /// What was wrong with the configuration.
        reason: String,
    },

    /// A letter or position outside the A–Z alphabet reached the engine.
    #[error("invalid symbol {symbol:?}: must be A-Z")]
    InvalidSymbol {
        /// The offending character.
        symbol: char,
    },
}

impl RotorCryptError {
    /// Shorthand for building an [`InvalidConfiguration`](Self::InvalidConfiguration) error.
    pub(crate) fn config(reason: impl Into<String>) -> Self {
        RotorCryptError::InvalidConfiguration {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_invalid_configuration() {
        let err = RotorCryptError::config("machine requires exactly 3 rotors");
        assert_eq!(
            format!("{}", err),
            "invalid configuration: machine requires exactly 3 rotors"
        );
    }

    #[test]
    fn test_display_invalid_symbol() {
        let err = RotorCryptError::InvalidSymbol { symbol: '1' };
        assert_eq!(format!("{}", err), "invalid symbol '1': must be A-Z");
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(
            RotorCryptError::InvalidSymbol { symbol: 'a' },
            RotorCryptError::InvalidSymbol { symbol: 'a' }
        );
        assert_ne!(
            RotorCryptError::InvalidSymbol { symbol: 'a' },
            RotorCryptError::config("a")
        );
    }

    #[test]
    fn test_error_clone() {
        let err = RotorCryptError::config("unknown rotor type 'IV'");
        let cloned = err.clone();
        assert_eq!(err, cloned);
    }
}
