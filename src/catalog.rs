//! Rotor and reflector wiring tables.
//!
//! A [`RotorSpec`] or [`ReflectorSpec`] is immutable once built. The
//! built-in catalog lives in process-wide statics; rotors and reflectors
//! borrow these tables instead of copying them, so any number of machines
//! can share one catalog.

use crate::alphabet::{self, ALPHABET_LEN};
use crate::error::RotorCryptError;

/// Wiring and notch of one rotor type.
///
/// The wiring is a permutation of the alphabet: input offset `i` maps to
/// the symbol at `wiring[i]`. The inverse permutation is precomputed for
/// the return path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotorSpec {
    forward: [u8; ALPHABET_LEN],
    backward: [u8; ALPHABET_LEN],
    notch: u8,
}

impl RotorSpec {
    /// Builds a spec from a 26-symbol wiring string and a notch symbol.
    ///
    /// # Parameters
    /// - `wiring`: 26 upper-case letters, each appearing exactly once.
    /// - `notch`: The position at which this rotor reports [`is_at_notch`](crate::rotor::Rotor::is_at_notch).
    ///
    /// # Errors
    /// - [`RotorCryptError::InvalidConfiguration`] if the wiring is not 26
    ///   symbols long or repeats a symbol.
    /// - [`RotorCryptError::InvalidSymbol`] if the wiring or notch contains
    ///   a character outside `A`..=`Z`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotorcrypt::catalog::RotorSpec;
    ///
    /// let spec = RotorSpec::new("BDFHJLCPRTXVZNYEIWGAKMUSQO", 'V').unwrap();
    /// assert_eq!(spec.notch(), 'V');
    /// assert!(RotorSpec::new("ABC", 'A').is_err());
    /// ```
    pub fn new(wiring: &str, notch: char) -> Result<Self, RotorCryptError> {
        let forward = parse_table(wiring, "rotor")?;
        let notch = alphabet::index_of(notch)? as u8;

        let mut backward = [u8::MAX; ALPHABET_LEN];
        for (i, &out) in forward.iter().enumerate() {
            if backward[out as usize] != u8::MAX {
                return Err(RotorCryptError::config(format!(
                    "rotor wiring repeats symbol '{}'",
                    alphabet::symbol_at(out as usize)
                )));
            }
            backward[out as usize] = i as u8;
        }

        Ok(RotorSpec {
            forward,
            backward,
            notch,
        })
    }

    /// Const constructor for the built-in tables. Input is assumed valid.
    const fn from_static(wiring: &[u8; ALPHABET_LEN], notch: u8) -> Self {
        let mut forward = [0u8; ALPHABET_LEN];
        let mut backward = [0u8; ALPHABET_LEN];
        let mut i = 0;
        while i < ALPHABET_LEN {
            let out = wiring[i] - b'A';
            forward[i] = out;
            backward[out as usize] = i as u8;
            i += 1;
        }
        RotorSpec {
            forward,
            backward,
            notch: notch - b'A',
        }
    }

    /// Returns the notch symbol.
    pub fn notch(&self) -> char {
        alphabet::symbol_at(self.notch as usize)
    }

    /// Returns the wiring as a 26-letter string.
    pub fn wiring(&self) -> String {
        table_to_string(&self.forward)
    }

    pub(crate) fn notch_index(&self) -> usize {
        self.notch as usize
    }

    /// Offset of the symbol wired to contact `index`.
    pub(crate) fn forward(&self, index: usize) -> usize {
        self.forward[index] as usize
    }

    /// Contact whose wired symbol has offset `index`.
    pub(crate) fn backward(&self, index: usize) -> usize {
        self.backward[index] as usize
    }
}

/// Mapping table of a reflector.
///
/// Unlike a rotor wiring this table is not required to be a permutation
/// or an involution; symbols may repeat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReflectorSpec {
    table: [u8; ALPHABET_LEN],
}

impl ReflectorSpec {
    /// Builds a reflector table from a 26-symbol string.
    ///
    /// # Errors
    /// - [`RotorCryptError::InvalidConfiguration`] if the table is not 26 symbols long.
    /// - [`RotorCryptError::InvalidSymbol`] on a character outside `A`..=`Z`.
    pub fn new(wiring: &str) -> Result<Self, RotorCryptError> {
        Ok(ReflectorSpec {
            table: parse_table(wiring, "reflector")?,
        })
    }

    const fn from_static(wiring: &[u8; ALPHABET_LEN]) -> Self {
        let mut table = [0u8; ALPHABET_LEN];
        let mut i = 0;
        while i < ALPHABET_LEN {
            table[i] = wiring[i] - b'A';
            i += 1;
        }
        ReflectorSpec { table }
    }

    /// Returns the table as a 26-letter string.
    pub fn wiring(&self) -> String {
        table_to_string(&self.table)
    }

    pub(crate) fn table(&self) -> &[u8; ALPHABET_LEN] {
        &self.table
    }
}

/// Rotor type "I".
pub static ROTOR_I: RotorSpec = RotorSpec::from_static(b"EKMFLGDQVZNTOWYHXUSPAIBRCJ", b'Q');

/// Rotor type "II".
pub static ROTOR_II: RotorSpec = RotorSpec::from_static(b"AJDKSIRUXBLHWTMCQGZNPYFVOE", b'E');

/// Rotor type "III".
pub static ROTOR_III: RotorSpec = RotorSpec::from_static(b"BDFHJLCPRTXVZNYEIWGAKMUSQO", b'V');

/// The machine's single reflector. Contains duplicate symbols.
pub static REFLECTOR: ReflectorSpec = ReflectorSpec::from_static(b"ABCDEFGDIJKGMKMIEBFTCVVJAT");

static ROTORS: [(&str, &RotorSpec); 3] = [("I", &ROTOR_I), ("II", &ROTOR_II), ("III", &ROTOR_III)];

/// Resolves a rotor-type identifier to its catalog spec.
///
/// # Errors
/// Returns [`RotorCryptError::InvalidConfiguration`] for an unknown identifier.
///
/// # Examples
///
/// ```
/// use rotorcrypt::catalog::rotor_spec;
///
/// assert_eq!(rotor_spec("I").unwrap().notch(), 'Q');
/// assert!(rotor_spec("IV").is_err());
/// ```
pub fn rotor_spec(name: &str) -> Result<&'static RotorSpec, RotorCryptError> {
    ROTORS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, spec)| *spec)
        .ok_or_else(|| {
            RotorCryptError::config(format!(
                "unknown rotor type '{}'. Available: {}",
                name,
                rotor_names().collect::<Vec<_>>().join(", ")
            ))
        })
}

/// Lists the rotor-type identifiers in catalog order.
pub fn rotor_names() -> impl Iterator<Item = &'static str> {
    ROTORS.iter().map(|(n, _)| *n)
}

fn parse_table(wiring: &str, what: &str) -> Result<[u8; ALPHABET_LEN], RotorCryptError> {
    let len = wiring.chars().count();
    if len != ALPHABET_LEN {
        return Err(RotorCryptError::config(format!(
            "{} wiring must be exactly {} symbols, got {}",
            what, ALPHABET_LEN, len
        )));
    }
    let mut table = [0u8; ALPHABET_LEN];
    for (slot, c) in table.iter_mut().zip(wiring.chars()) {
        *slot = alphabet::index_of(c)? as u8;
    }
    Ok(table)
}

fn table_to_string(table: &[u8; ALPHABET_LEN]) -> String {
    table
        .iter()
        .map(|&i| alphabet::symbol_at(i as usize))
        .collect()
}
