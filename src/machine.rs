//! EnigmaMachine: three rotors, a reflector and the stepping mechanism.
//!
//! The machine owns its rotors (left, center, right) and reflector and
//! drives them one letter at a time. Stepping is interleaved with the
//! substitution path rather than done up front:
//!
//! ```text
//! step R ─► R fwd ─► [C at notch? step C+L] ─► C fwd ─► [L at notch? step L] ─► L fwd
//!                                                                               │
//! [R at notch? step C] ◄─ R back ◄─ C back ◄─ L back ◄──────── reflect ◄────────┘
//! ```
//!
//! The trailing right-notch check is a second, independent center step.
//! It is counted separately from the mid-path step, so the center counter
//! can advance twice within one letter.

use std::fmt;

use crate::alphabet;
use crate::catalog::{self, ReflectorSpec, RotorSpec, REFLECTOR};
use crate::error::RotorCryptError;
use crate::reflector::Reflector;
use crate::rotor::Rotor;

/// Number of rotors in the machine.
pub const ROTOR_COUNT: usize = 3;

/// Steps taken by each rotor since the last reset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RotorSteps {
    /// Steps of the left (slowest) rotor.
    pub left: u64,
    /// Steps of the center rotor.
    pub center: u64,
    /// Steps of the right (fastest) rotor.
    pub right: u64,
}

impl RotorSteps {
    /// Returns the counters as a `(left, center, right)` tuple.
    pub fn as_tuple(&self) -> (u64, u64, u64) {
        (self.left, self.center, self.right)
    }
}

impl fmt::Display for RotorSteps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.left, self.center, self.right)
    }
}

/// Signal path of one letter through the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterTrace {
    /// Letter entering from the keyboard.
    pub input: char,
    /// After the right rotor, forward.
    pub right: char,
    /// After the center rotor, forward.
    pub center: char,
    /// After the left rotor, forward.
    pub left: char,
    /// After the reflector.
    pub reflector: char,
    /// After the left rotor, backward.
    pub left_back: char,
    /// After the center rotor, backward.
    pub center_back: char,
    /// After the right rotor, backward. This is the encoded letter.
    pub right_back: char,
    /// Rotor positions (left, center, right) used for the substitution.
    pub positions: [char; ROTOR_COUNT],
}

impl LetterTrace {
    /// The encoded letter.
    pub fn output(&self) -> char {
        self.right_back
    }
}

impl fmt::Display for LetterTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}{}{}] {} -> R: {} -> C: {} -> L: {} -> Reflector: {} -> L: {} -> C: {} -> R: {}",
            self.positions[0],
            self.positions[1],
            self.positions[2],
            self.input,
            self.right,
            self.center,
            self.left,
            self.reflector,
            self.left_back,
            self.center_back,
            self.right_back
        )
    }
}

/// Three-rotor cipher machine.
///
/// One instance is single-owner mutable state: every letter depends on the
/// positions left by the previous one. Use one machine per message stream.
///
/// # Examples
///
/// ```
/// use rotorcrypt::EnigmaMachine;
///
/// let mut machine = EnigmaMachine::new(&["I", "II", "III"], "MCK").unwrap();
/// let c = machine.encode_letter('A').unwrap();
/// assert_ne!(c, 'A');
/// assert_eq!(machine.positions(), "MCL");
///
/// machine.reset("MCK").unwrap();
/// assert_eq!(machine.encode_letter(c).unwrap(), 'A');
/// ```
#[derive(Debug, Clone)]
pub struct EnigmaMachine<'a> {
    left: Rotor<'a>,
    center: Rotor<'a>,
    right: Rotor<'a>,
    reflector: Reflector<'a>,
    steps: RotorSteps,
}

impl EnigmaMachine<'static> {
    /// Builds a machine from catalog rotor types and starting positions.
    ///
    /// # Parameters
    /// - `rotor_types`: Exactly three identifiers, left to right (e.g. `["I", "II", "III"]`).
    /// - `positions`: Exactly three upper-case symbols, left to right (e.g. `"MCK"`).
    ///
    /// # Errors
    /// - [`RotorCryptError::InvalidConfiguration`] if there are not exactly three
    ///   rotor types, a type is unknown, or `positions` is not three symbols long.
    /// - [`RotorCryptError::InvalidSymbol`] if a position is not `A`..=`Z`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotorcrypt::EnigmaMachine;
    ///
    /// assert!(EnigmaMachine::new(&["I", "II"], "AA").is_err());
    /// assert!(EnigmaMachine::new(&["I", "II", "IV"], "AAA").is_err());
    /// assert!(EnigmaMachine::new(&["I", "II", "III"], "A1A").is_err());
    /// ```
    pub fn new<S: AsRef<str>>(rotor_types: &[S], positions: &str) -> Result<Self, RotorCryptError> {
        if rotor_types.len() != ROTOR_COUNT {
            return Err(RotorCryptError::config(format!(
                "machine requires exactly {} rotors, got {}",
                ROTOR_COUNT,
                rotor_types.len()
            )));
        }
        let left = catalog::rotor_spec(rotor_types[0].as_ref())?;
        let center = catalog::rotor_spec(rotor_types[1].as_ref())?;
        let right = catalog::rotor_spec(rotor_types[2].as_ref())?;

        tracing::debug!(
            left = rotor_types[0].as_ref(),
            center = rotor_types[1].as_ref(),
            right = rotor_types[2].as_ref(),
            "Resolved rotor types from catalog"
        );

        Self::with_specs([left, center, right], &REFLECTOR, positions)
    }
}

impl<'a> EnigmaMachine<'a> {
    /// Builds a machine from arbitrary specs.
    ///
    /// # Parameters
    /// - `rotors`: Rotor specs, left to right.
    /// - `reflector`: Reflector table.
    /// - `positions`: Exactly three upper-case symbols, left to right.
    ///
    /// # Errors
    /// Same position errors as [`new`](EnigmaMachine::new).
    pub fn with_specs(
        rotors: [&'a RotorSpec; ROTOR_COUNT],
        reflector: &'a ReflectorSpec,
        positions: &str,
    ) -> Result<Self, RotorCryptError> {
        let [l, c, r] = parse_positions(positions)?;
        let machine = EnigmaMachine {
            left: Rotor::new(rotors[0], l)?,
            center: Rotor::new(rotors[1], c)?,
            right: Rotor::new(rotors[2], r)?,
            reflector: Reflector::new(reflector),
            steps: RotorSteps::default(),
        };
        tracing::debug!(positions = %machine.positions(), "Rotor machine initialized");
        Ok(machine)
    }

    /// Returns the current positions as a three-letter string (left, center, right).
    pub fn positions(&self) -> String {
        [self.left.position(), self.center.position(), self.right.position()]
            .iter()
            .collect()
    }

    /// Returns the step counters accumulated since the last reset.
    pub fn step_counts(&self) -> RotorSteps {
        self.steps
    }

    /// Returns the left, center and right rotors.
    pub fn rotors(&self) -> [&Rotor<'a>; ROTOR_COUNT] {
        [&self.left, &self.center, &self.right]
    }

    /// Moves all rotors to new positions and zeroes the step counters.
    ///
    /// # Errors
    /// Same position errors as [`new`](EnigmaMachine::new). Nothing changes on error.
    pub fn reset(&mut self, positions: &str) -> Result<(), RotorCryptError> {
        let [l, c, r] = parse_positions(positions)?;
        self.left.set_position(l)?;
        self.center.set_position(c)?;
        self.right.set_position(r)?;
        self.steps = RotorSteps::default();
        tracing::debug!(positions, "Rotor machine reset");
        Ok(())
    }

    pub(crate) fn clear_step_counts(&mut self) {
        self.steps = RotorSteps::default();
    }

    /// Encodes one upper-case letter, stepping the rotors.
    ///
    /// Encoding is reciprocal: resetting to the same positions and encoding
    /// the output yields the input again.
    ///
    /// # Errors
    /// Returns [`RotorCryptError::InvalidSymbol`] if `letter` is not `A`..=`Z`.
    /// The machine is not modified in that case.
    pub fn encode_letter(&mut self, letter: char) -> Result<char, RotorCryptError> {
        self.encode_letter_traced(letter).map(|t| t.output())
    }

    /// Encodes one upper-case letter and returns its full signal path.
    ///
    /// # Errors
    /// Returns [`RotorCryptError::InvalidSymbol`] if `letter` is not `A`..=`Z`.
    /// The machine is not modified in that case.
    pub fn encode_letter_traced(&mut self, letter: char) -> Result<LetterTrace, RotorCryptError> {
        alphabet::ensure_symbol(letter)?;

        self.step_right();
        let right = self.right.substitute_forward(letter, 'A')?;

        if self.center.is_at_notch() {
            self.step_center();
            self.step_left();
        }
        let center = self
            .center
            .substitute_forward(right, self.right.position())?;

        if self.left.is_at_notch() {
            self.step_left();
        }
        let left = self
            .left
            .substitute_forward(center, self.center.position())?;

        let reflector = self.reflector.reflect(left, self.left.position())?;

        let left_back = self
            .left
            .substitute_backward(reflector, self.center.position())?;
        let center_back = self
            .center
            .substitute_backward(left_back, self.right.position())?;
        let right_back = self.right.substitute_backward(center_back, 'A')?;

        let positions = [
            self.left.position(),
            self.center.position(),
            self.right.position(),
        ];

        if self.right.is_at_notch() {
            self.step_center();
        }

        let trace = LetterTrace {
            input: letter,
            right,
            center,
            left,
            reflector,
            left_back,
            center_back,
            right_back,
            positions,
        };
        tracing::trace!(%trace, steps = %self.steps, "Encoded letter");
        Ok(trace)
    }

    fn step_left(&mut self) {
        self.left.step();
        self.steps.left += 1;
    }

    fn step_center(&mut self) {
        self.center.step();
        self.steps.center += 1;
    }

    fn step_right(&mut self) {
        self.right.step();
        self.steps.right += 1;
    }
}

/// Splits a three-symbol position string into left, center, right.
fn parse_positions(positions: &str) -> Result<[char; ROTOR_COUNT], RotorCryptError> {
    let symbols: Vec<char> = positions.chars().collect();
    let [l, c, r] = symbols[..] else {
        return Err(RotorCryptError::config(format!(
            "positions must be exactly {} characters, got {}",
            ROTOR_COUNT,
            symbols.len()
        )));
    };
    Ok([
        alphabet::ensure_symbol(l)?,
        alphabet::ensure_symbol(c)?,
        alphabet::ensure_symbol(r)?,
    ])
}
