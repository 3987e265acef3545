//! RotorCrypt: three-rotor electromechanical cipher machine.
//!
//! Simulates a rotor machine with three interchangeable rotors, a
//! reflector and a stepping mechanism. Together they form a reciprocal
//! polyalphabetic substitution over the 26-letter Latin alphabet:
//! encoding the ciphertext from the same starting positions yields the
//! plaintext again.
//!
//! # Architecture
//!
//! ```text
//! alphabet      (position arithmetic mod 26)
//!     ↑
//! catalog       (RotorSpec / ReflectorSpec tables, shared read-only)
//!     ↑
//! Rotor, Reflector   (single-component substitution)
//!     ↑
//! EnigmaMachine (stepping state machine + signal path)
//!     ↑
//! codec         (whole messages, case and pass-through)
//! ```
//!
//! # Examples
//!
//! Encode and decode a message:
//!
//! ```
//! use rotorcrypt::EnigmaMachine;
//!
//! let mut machine = EnigmaMachine::new(&["I", "II", "III"], "MCK").unwrap();
//! let encoded = machine.encode_message("Hello World", true).unwrap();
//! assert_eq!(encoded.encoded_message, "Dltbb Qvpqv");
//!
//! machine.reset("MCK").unwrap();
//! let decoded = machine.encode_message(&encoded.encoded_message, true).unwrap();
//! assert_eq!(decoded.encoded_message, "Hello World");
//! ```
//!
//! Build from user input through [`MachineConfig`]:
//!
//! ```
//! use rotorcrypt::MachineConfig;
//!
//! let mut machine = MachineConfig::from_args("I II III", "aaa").unwrap().build().unwrap();
//! let result = machine.encode_message("HELLO", true).unwrap();
//! assert_eq!(result.encoded_message, "ILBDA");
//! assert_eq!(result.rotor_steps.as_tuple(), (0, 0, 5));
//! ```

#![deny(clippy::all)]

pub mod alphabet;
pub mod catalog;
pub mod codec;
pub mod config;
pub mod error;
pub mod machine;
pub mod reflector;
pub mod rotor;

pub use codec::EncodingResult;
pub use config::MachineConfig;
pub use error::RotorCryptError;
pub use machine::{EnigmaMachine, LetterTrace, RotorSteps};
