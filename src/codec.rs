//! Message codec: runs whole strings through an [`EnigmaMachine`].
//!
//! ASCII letters are upper-cased, encoded and optionally restored to
//! their original case. Every other character, including non-ASCII
//! letters, is copied through without touching the machine.

use crate::error::RotorCryptError;
use crate::machine::{EnigmaMachine, RotorSteps};

/// Outcome of encoding one message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodingResult {
    /// The encoded text, same length in characters as the input.
    pub encoded_message: String,
    /// Number of letters that went through the machine.
    pub letters_processed: usize,
    /// Rotor step counters when the message finished.
    pub rotor_steps: RotorSteps,
}

/// Encodes `message` with `machine`.
///
/// Step counters are zeroed before the first letter, so
/// [`EncodingResult::rotor_steps`] covers this message only. Rotor
/// positions carry over from whatever the machine was left at.
///
/// # Parameters
/// - `machine`: The machine to drive; borrowed exclusively for the whole message.
/// - `message`: Arbitrary text.
/// - `preserve_case`: Restore lower-case letters in the output when `true`;
///   emit every encoded letter upper-case when `false`.
///
/// # Errors
/// Propagates [`RotorCryptError::InvalidSymbol`] from the machine. Only ASCII
/// letters reach the machine, so this does not happen for any input string.
///
/// # Examples
///
/// ```
/// use rotorcrypt::{codec, EnigmaMachine};
///
/// let mut machine = EnigmaMachine::new(&["I", "II", "III"], "MCK").unwrap();
/// let result = codec::encode_message(&mut machine, "Hello, World! 123", true).unwrap();
/// assert_eq!(result.encoded_message, "Dltbb, Qvpqv! 123");
/// assert_eq!(result.letters_processed, 10);
/// ```
pub fn encode_message(
    machine: &mut EnigmaMachine<'_>,
    message: &str,
    preserve_case: bool,
) -> Result<EncodingResult, RotorCryptError> {
    machine.clear_step_counts();

    let mut encoded_message = String::with_capacity(message.len());
    let mut letters_processed = 0;

    for c in message.chars() {
        if c.is_ascii_alphabetic() {
            let encoded = machine.encode_letter(c.to_ascii_uppercase())?;
            if preserve_case && c.is_ascii_lowercase() {
                encoded_message.push(encoded.to_ascii_lowercase());
            } else {
                encoded_message.push(encoded);
            }
            letters_processed += 1;
        } else {
            encoded_message.push(c);
        }
    }

    let result = EncodingResult {
        encoded_message,
        letters_processed,
        rotor_steps: machine.step_counts(),
    };
    tracing::debug!(
        letters = result.letters_processed,
        steps = %result.rotor_steps,
        positions = %machine.positions(),
        "Encoded message"
    );
    Ok(result)
}

impl EnigmaMachine<'_> {
    /// Encodes a whole message. See [`encode_message`](crate::codec::encode_message).
    pub fn encode_message(
        &mut self,
        message: &str,
        preserve_case: bool,
    ) -> Result<EncodingResult, RotorCryptError> {
        encode_message(self, message, preserve_case)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn machine(positions: &str) -> EnigmaMachine<'static> {
        EnigmaMachine::new(&["I", "II", "III"], positions).unwrap()
    }

    #[test]
    fn test_hello_world_mck() {
        let mut m = machine("MCK");
        let result = m.encode_message("Hello World", true).unwrap();
        assert_eq!(result.encoded_message, "Dltbb Qvpqv");
        assert_eq!(result.letters_processed, 10);
        assert_eq!(result.rotor_steps.as_tuple(), (0, 0, 10));
        assert_eq!(m.positions(), "MCU");
    }

    #[test]
    fn test_without_case_preservation() {
        let mut m = machine("MCK");
        let result = m.encode_message("Hello World", false).unwrap();
        assert_eq!(result.encoded_message, "DLTBB QVPQV");
    }

    #[test]
    fn test_non_alphabetic_preserved() {
        let mut m = machine("AAA");
        let message = "HELLO, WORLD! 123";
        let result = m.encode_message(message, true).unwrap();
        assert_eq!(result.encoded_message.chars().count(), message.chars().count());
        assert!(result.encoded_message.contains(", "));
        assert!(result.encoded_message.ends_with("! 123"));
        assert_eq!(result.letters_processed, 10);
    }

    #[test]
    fn test_non_ascii_passes_through() {
        let mut m = machine("AAA");
        let result = m.encode_message("é ß ü", true).unwrap();
        assert_eq!(result.encoded_message, "é ß ü");
        assert_eq!(result.letters_processed, 0);
        assert_eq!(m.positions(), "AAA");
    }

    #[test]
    fn test_empty_message() {
        let mut m = machine("MCK");
        let result = m.encode_message("", true).unwrap();
        assert_eq!(result.encoded_message, "");
        assert_eq!(result.letters_processed, 0);
        assert_eq!(result.rotor_steps, RotorSteps::default());
    }

    #[test]
    fn test_reciprocal_message() {
        let mut m = machine("AAA");
        let encoded = m.encode_message("HELLO", true).unwrap().encoded_message;
        assert_eq!(encoded, "ILBDA");
        m.reset("AAA").unwrap();
        assert_eq!(m.encode_message(&encoded, true).unwrap().encoded_message, "HELLO");
    }

    #[test]
    fn test_step_counters_restart_per_message() {
        let mut m = machine("MCK");
        m.encode_message("ABC", true).unwrap();
        let second = m.encode_message("DE", true).unwrap();
        assert_eq!(second.rotor_steps.right, 2);
        assert_eq!(m.positions(), "MCP");
    }

    #[test]
    fn test_free_function_and_method_agree() {
        let mut a = machine("QEV");
        let mut b = machine("QEV");
        let text = "Attack at dawn";
        assert_eq!(
            encode_message(&mut a, text, true).unwrap(),
            b.encode_message(text, true).unwrap()
        );
    }
}
