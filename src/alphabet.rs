//! Position arithmetic over the fixed 26-symbol Latin alphabet.
//!
//! Every letter and rotor position in the machine is a member of
//! [`ALPHABET`]. These helpers map symbols to their offsets and back,
//! with all arithmetic taken modulo [`ALPHABET_LEN`].

use crate::error::RotorCryptError;

/// The ordered alphabet shared by every component.
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Number of symbols in [`ALPHABET`].
pub const ALPHABET_LEN: usize = 26;

/// Returns the zero-based offset of `symbol` in the alphabet.
///
/// # Parameters
/// - `symbol`: An upper-case letter `A`..=`Z`.
///
/// # Returns
/// The offset in `0..26`.
///
/// # Errors
/// Returns [`RotorCryptError::InvalidSymbol`] for anything outside `A`..=`Z`,
/// including lower-case letters.
///
/// # Examples
///
/// ```
/// use rotorcrypt::alphabet::index_of;
///
/// assert_eq!(index_of('A').unwrap(), 0);
/// assert_eq!(index_of('Z').unwrap(), 25);
/// assert!(index_of('a').is_err());
/// ```
pub fn index_of(symbol: char) -> Result<usize, RotorCryptError> {
    if symbol.is_ascii_uppercase() {
        Ok((symbol as u8 - b'A') as usize)
    } else {
        Err(RotorCryptError::InvalidSymbol { symbol })
    }
}

/// Returns the symbol at `index`, wrapping modulo 26.
///
/// Never fails: any `usize` reduces to a valid offset.
///
/// # Examples
///
/// ```
/// use rotorcrypt::alphabet::symbol_at;
///
/// assert_eq!(symbol_at(0), 'A');
/// assert_eq!(symbol_at(27), 'B');
/// ```
pub fn symbol_at(index: usize) -> char {
    (b'A' + (index % ALPHABET_LEN) as u8) as char
}

/// Returns `(index_of(a) - index_of(b)) mod 26`.
///
/// # Errors
/// Returns [`RotorCryptError::InvalidSymbol`] if either symbol is outside the alphabet.
pub fn offset(a: char, b: char) -> Result<usize, RotorCryptError> {
    Ok(sub_mod(index_of(a)?, index_of(b)?))
}

/// `(a - b) mod 26` for offsets already inside `0..26`.
pub(crate) fn sub_mod(a: usize, b: usize) -> usize {
    (a + ALPHABET_LEN - b % ALPHABET_LEN) % ALPHABET_LEN
}

/// Checks that `symbol` is an alphabet member without converting it.
pub(crate) fn ensure_symbol(symbol: char) -> Result<char, RotorCryptError> {
    index_of(symbol).map(|_| symbol)
}
