//! Machine configuration as entered by a user.
//!
//! [`MachineConfig`] is the lenient front door: it accepts rotor lists as
//! whitespace-separated text and positions in either case, normalizes
//! them, and hands strict values to [`EnigmaMachine::new`].

use std::fmt;
use std::str::FromStr;

use crate::alphabet;
use crate::catalog;
use crate::error::RotorCryptError;
use crate::machine::{EnigmaMachine, ROTOR_COUNT};

/// Default rotor order, left to right.
pub const DEFAULT_ROTORS: [&str; ROTOR_COUNT] = ["I", "II", "III"];

/// Default starting positions.
pub const DEFAULT_POSITIONS: &str = "MCK";

/// Rotor order and starting positions for one machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MachineConfig {
    /// Catalog rotor types, left to right.
    pub rotors: [String; ROTOR_COUNT],
    /// Upper-case starting positions, left to right.
    pub positions: String,
}

impl Default for MachineConfig {
    fn default() -> Self {
        MachineConfig {
            rotors: DEFAULT_ROTORS.map(String::from),
            positions: DEFAULT_POSITIONS.to_string(),
        }
    }
}

impl MachineConfig {
    /// Builds a config from user text.
    ///
    /// # Parameters
    /// - `rotors`: Whitespace-separated rotor types, e.g. `"I II III"`.
    /// - `positions`: Three letters in either case, e.g. `"mck"`.
    ///
    /// # Errors
    /// See [`parse_rotors`](Self::parse_rotors) and
    /// [`normalize_positions`](Self::normalize_positions).
    ///
    /// # Examples
    ///
    /// ```
    /// use rotorcrypt::config::MachineConfig;
    ///
    /// let config = MachineConfig::from_args("III  I II", "qev").unwrap();
    /// assert_eq!(config.positions, "QEV");
    /// assert_eq!(config.to_string(), "III I II @ QEV");
    /// ```
    pub fn from_args(rotors: &str, positions: &str) -> Result<Self, RotorCryptError> {
        Ok(MachineConfig {
            rotors: Self::parse_rotors(rotors)?,
            positions: Self::normalize_positions(positions)?,
        })
    }

    /// Splits a rotor list on whitespace and checks each type against the catalog.
    ///
    /// # Errors
    /// Returns [`RotorCryptError::InvalidConfiguration`] unless there are exactly
    /// three known rotor types.
    pub fn parse_rotors(rotors: &str) -> Result<[String; ROTOR_COUNT], RotorCryptError> {
        let names: Vec<&str> = rotors.split_whitespace().collect();
        let [l, c, r] = names.as_slice() else {
            return Err(RotorCryptError::config(format!(
                "exactly {} rotor types must be specified, got {}",
                ROTOR_COUNT,
                names.len()
            )));
        };
        for name in [l, c, r] {
            catalog::rotor_spec(name)?;
        }
        Ok([l.to_string(), c.to_string(), r.to_string()])
    }

    /// Upper-cases a position string and checks it is three alphabet symbols.
    ///
    /// # Errors
    /// - [`RotorCryptError::InvalidConfiguration`] if the length is not three.
    /// - [`RotorCryptError::InvalidSymbol`] for a character that is not a letter.
    pub fn normalize_positions(positions: &str) -> Result<String, RotorCryptError> {
        let upper = positions.trim().to_ascii_uppercase();
        let len = upper.chars().count();
        if len != ROTOR_COUNT {
            return Err(RotorCryptError::config(format!(
                "positions must be exactly {} characters, got {}",
                ROTOR_COUNT, len
            )));
        }
        for c in upper.chars() {
            alphabet::index_of(c)?;
        }
        Ok(upper)
    }

    /// Builds the configured machine.
    ///
    /// # Errors
    /// Same as [`EnigmaMachine::new`]; a config assembled by hand is checked again here.
    pub fn build(&self) -> Result<EnigmaMachine<'static>, RotorCryptError> {
        EnigmaMachine::new(&self.rotors, &self.positions)
    }
}

impl fmt::Display for MachineConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {}", self.rotors.join(" "), self.positions)
    }
}

impl FromStr for MachineConfig {
    type Err = RotorCryptError;

    /// Parses `"<rotor> <rotor> <rotor> @ <positions>"`, the [`Display`](fmt::Display) form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (rotors, positions) = s.split_once('@').ok_or_else(|| {
            RotorCryptError::config(format!("expected '<rotors> @ <positions>', got '{}'", s))
        })?;
        Self::from_args(rotors, positions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_reference_setup() {
        let config = MachineConfig::default();
        assert_eq!(config.rotors, ["I", "II", "III"].map(String::from));
        assert_eq!(config.positions, "MCK");
        assert_eq!(config.build().unwrap().positions(), "MCK");
    }

    #[test]
    fn test_parse_rotors_rejects_wrong_count() {
        assert_eq!(
            MachineConfig::parse_rotors("I II").unwrap_err(),
            RotorCryptError::config("exactly 3 rotor types must be specified, got 2")
        );
        assert!(MachineConfig::parse_rotors("I II III I").is_err());
        assert!(MachineConfig::parse_rotors("").is_err());
    }

    #[test]
    fn test_parse_rotors_rejects_unknown() {
        let err = MachineConfig::parse_rotors("I II V").unwrap_err();
        assert_eq!(
            err,
            RotorCryptError::config("unknown rotor type 'V'. Available: I, II, III")
        );
    }

    #[test]
    fn test_normalize_positions() {
        assert_eq!(MachineConfig::normalize_positions(" mCk ").unwrap(), "MCK");
        assert!(matches!(
            MachineConfig::normalize_positions("AB"),
            Err(RotorCryptError::InvalidConfiguration { .. })
        ));
        assert_eq!(
            MachineConfig::normalize_positions("a1c"),
            Err(RotorCryptError::InvalidSymbol { symbol: '1' })
        );
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        let config = MachineConfig::from_args("II III I", "xyz").unwrap();
        let parsed: MachineConfig = config.to_string().parse().unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_from_str_requires_separator() {
        assert!("I II III MCK".parse::<MachineConfig>().is_err());
    }

    #[test]
    fn test_build_rejects_hand_edited_config() {
        let config = MachineConfig {
            rotors: ["I", "II", "IX"].map(String::from),
            positions: "AAA".to_string(),
        };
        assert!(config.build().is_err());
    }
}
