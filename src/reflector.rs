//! Reflector: turns the signal around at the end of the rotor stack.
//!
//! The reflector table may repeat symbols, so "where does this symbol
//! come back out" has more than one answer. The tie-break is directional:
//! entering at the first occurrence of a symbol leaves by its last
//! occurrence, entering anywhere else leaves by its first occurrence.
//! With the built-in table every symbol occurs exactly twice, which makes
//! the reflection a fixed-point-free involution over contacts.

use crate::alphabet::{self, ALPHABET_LEN};
use crate::catalog::ReflectorSpec;
use crate::error::RotorCryptError;

/// A reflector bound to a borrowed [`ReflectorSpec`].
#[derive(Debug, Clone, Copy)]
pub struct Reflector<'a> {
    spec: &'a ReflectorSpec,
}

impl<'a> Reflector<'a> {
    /// Creates a reflector over the given table.
    pub fn new(spec: &'a ReflectorSpec) -> Self {
        Reflector { spec }
    }

    /// Returns the table this reflector was built from.
    pub fn spec(&self) -> &'a ReflectorSpec {
        self.spec
    }

    /// Reflects `letter` relative to the adjacent rotor position `offset`.
    ///
    /// # Parameters
    /// - `letter`: Incoming letter, in the frame of the adjacent rotor.
    /// - `offset`: Position of the adjacent (left) rotor.
    ///
    /// # Returns
    /// The outgoing letter, in the same frame.
    ///
    /// # Errors
    /// Returns [`RotorCryptError::InvalidSymbol`] if either argument is not `A`..=`Z`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotorcrypt::catalog::REFLECTOR;
    /// use rotorcrypt::reflector::Reflector;
    ///
    /// let reflector = Reflector::new(&REFLECTOR);
    /// // 'A' sits at contacts 0 and 24
    /// assert_eq!(reflector.reflect('A', 'A').unwrap(), 'Y');
    /// assert_eq!(reflector.reflect('Y', 'A').unwrap(), 'A');
    /// ```
    pub fn reflect(&self, letter: char, offset: char) -> Result<char, RotorCryptError> {
        let shift = alphabet::index_of(offset)?;
        let index = alphabet::offset(letter, offset)?;
        let table = self.spec.table();
        let value = table[index];

        let first = table.iter().position(|&v| v == value).unwrap_or(index);
        let back = if index == first {
            table.iter().rposition(|&v| v == value).unwrap_or(index)
        } else {
            first
        };

        Ok(alphabet::symbol_at((back + shift) % ALPHABET_LEN))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::ALPHABET;
    use crate::catalog::REFLECTOR;

    #[test]
    fn test_builtin_table_pairs_contacts() {
        let reflector = Reflector::new(&REFLECTOR);
        for c in ALPHABET.chars() {
            let r = reflector.reflect(c, 'A').unwrap();
            assert_ne!(r, c, "{} reflects to itself", c);
            assert_eq!(reflector.reflect(r, 'A').unwrap(), c);
        }
    }

    #[test]
    fn test_known_pairs_at_origin() {
        let reflector = Reflector::new(&REFLECTOR);
        // D at contacts 3 and 7, G at 6 and 11, T at 19 and 25
        assert_eq!(reflector.reflect('D', 'A').unwrap(), 'H');
        assert_eq!(reflector.reflect('H', 'A').unwrap(), 'D');
        assert_eq!(reflector.reflect('G', 'A').unwrap(), 'L');
        assert_eq!(reflector.reflect('T', 'A').unwrap(), 'Z');
    }

    #[test]
    fn test_offset_rotates_the_pairing() {
        let reflector = Reflector::new(&REFLECTOR);
        // With offset B, 'B' lands on contact 0 and leaves via contact 24 + 1
        assert_eq!(reflector.reflect('B', 'B').unwrap(), 'Z');
        // 'A' lands on contact 25 (T), whose first occurrence is 19
        assert_eq!(reflector.reflect('A', 'B').unwrap(), 'U');
    }

    #[test]
    fn test_involution_for_every_offset() {
        let reflector = Reflector::new(&REFLECTOR);
        for offset in ALPHABET.chars() {
            for c in ALPHABET.chars() {
                let r = reflector.reflect(c, offset).unwrap();
                assert_ne!(r, c);
                assert_eq!(reflector.reflect(r, offset).unwrap(), c);
            }
        }
    }

    #[test]
    fn test_unique_symbol_reflects_to_itself() {
        // A table symbol that occurs once has first == last occurrence
        let spec = ReflectorSpec::new("ABCDEFGHIJKLMNOPQRSTUVWXYZ").unwrap();
        let reflector = Reflector::new(&spec);
        assert_eq!(reflector.reflect('K', 'C').unwrap(), 'K');
    }

    #[test]
    fn test_triple_symbol_tie_break() {
        // 'A' at contacts 0, 1 and 2
        let spec = ReflectorSpec::new("AAABCDEFGHIJKLMNOPQRSTUVWX").unwrap();
        let reflector = Reflector::new(&spec);
        assert_eq!(reflector.reflect('A', 'A').unwrap(), 'C'); // first -> last
        assert_eq!(reflector.reflect('B', 'A').unwrap(), 'A'); // middle -> first
        assert_eq!(reflector.reflect('C', 'A').unwrap(), 'A'); // last -> first
    }

    #[test]
    fn test_reflect_rejects_outsiders() {
        let reflector = Reflector::new(&REFLECTOR);
        assert_eq!(
            reflector.reflect('a', 'A'),
            Err(RotorCryptError::InvalidSymbol { symbol: 'a' })
        );
        assert_eq!(
            reflector.reflect('A', '0'),
            Err(RotorCryptError::InvalidSymbol { symbol: '0' })
        );
    }
}
