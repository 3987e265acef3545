//! Rotor: a wiring permutation that turns one position per step.
//!
//! A rotor only knows its own spec and position. Whatever couples rotors
//! together (notch-driven stepping, the offsets of neighbouring rotors)
//! is orchestrated by [`EnigmaMachine`](crate::machine::EnigmaMachine).

use crate::alphabet::{self, ALPHABET_LEN};
use crate::catalog::RotorSpec;
use crate::error::RotorCryptError;

/// A rotor instance: a borrowed [`RotorSpec`] plus a mutable position.
#[derive(Debug, Clone)]
pub struct Rotor<'a> {
    spec: &'a RotorSpec,
    position: usize,
}

impl<'a> Rotor<'a> {
    /// Creates a rotor at the given starting position.
    ///
    /// # Errors
    /// Returns [`RotorCryptError::InvalidSymbol`] if `position` is not `A`..=`Z`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotorcrypt::catalog::ROTOR_I;
    /// use rotorcrypt::rotor::Rotor;
    ///
    /// let mut rotor = Rotor::new(&ROTOR_I, 'P').unwrap();
    /// assert!(!rotor.is_at_notch());
    /// rotor.step();
    /// assert!(rotor.is_at_notch());
    /// ```
    pub fn new(spec: &'a RotorSpec, position: char) -> Result<Self, RotorCryptError> {
        Ok(Rotor {
            spec,
            position: alphabet::index_of(position)?,
        })
    }

    /// Returns the spec this rotor was built from.
    pub fn spec(&self) -> &'a RotorSpec {
        self.spec
    }

    /// Returns the current position symbol.
    pub fn position(&self) -> char {
        alphabet::symbol_at(self.position)
    }

    /// Moves the rotor to `position` without counting a step.
    ///
    /// # Errors
    /// Returns [`RotorCryptError::InvalidSymbol`] if `position` is not `A`..=`Z`.
    /// The rotor is left unchanged on error.
    pub fn set_position(&mut self, position: char) -> Result<(), RotorCryptError> {
        self.position = alphabet::index_of(position)?;
        Ok(())
    }

    /// Advances one position, wrapping `Z` to `A`.
    pub fn step(&mut self) {
        self.position = (self.position + 1) % ALPHABET_LEN;
    }

    /// True iff the current position equals the notch symbol.
    pub fn is_at_notch(&self) -> bool {
        self.position == self.spec.notch_index()
    }

    /// Passes a letter through the wiring towards the reflector.
    ///
    /// The letter arrives on the contact side of the previous stage, whose
    /// position is `entry`. It is shifted out of that frame (`- entry`), into
    /// this rotor's frame (`+ position`), then looked up in the wiring.
    /// The result is expressed in this rotor's frame; the next stage removes
    /// it again by passing this rotor's position as its own `entry`.
    ///
    /// # Parameters
    /// - `letter`: Incoming letter.
    /// - `entry`: Position of the previous stage (`'A'` for the keyboard side).
    ///
    /// # Errors
    /// Returns [`RotorCryptError::InvalidSymbol`] if either argument is not `A`..=`Z`.
    pub fn substitute_forward(&self, letter: char, entry: char) -> Result<char, RotorCryptError> {
        let contact = (alphabet::offset(letter, entry)? + self.position) % ALPHABET_LEN;
        Ok(alphabet::symbol_at(self.spec.forward(contact)))
    }

    /// Passes a letter back through the wiring, away from the reflector.
    ///
    /// Inverse of [`substitute_forward`](Self::substitute_forward): the letter
    /// is found in the wiring (reverse lookup), the found contact is shifted out
    /// of this rotor's frame (`- position`) and into the frame of the next
    /// stage (`+ exit`).
    ///
    /// # Parameters
    /// - `letter`: Incoming letter, expressed in this rotor's frame.
    /// - `exit`: Position of the next stage (`'A'` for the lamp side).
    ///
    /// # Errors
    /// Returns [`RotorCryptError::InvalidSymbol`] if either argument is not `A`..=`Z`.
    pub fn substitute_backward(&self, letter: char, exit: char) -> Result<char, RotorCryptError> {
        let contact = self.spec.backward(alphabet::index_of(letter)?);
        let out = alphabet::sub_mod(contact, self.position) + alphabet::index_of(exit)?;
        Ok(alphabet::symbol_at(out))
    }
}
