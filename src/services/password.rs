//! Random password generator
//!
//! A password is three equal bands: letters, then digits, then symbols.
//! Band width is `count / 3`, so any remainder slots are never filled and
//! the result is `3 * (count / 3)` characters long.

use crate::utils::error::PasswordParamError;
use rand::Rng;

pub const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &[u8] = b"1234567890";
pub const SYMBOLS: &[u8] = b"!@#$%^&*()";

/// Length used when `password_num` is missing or empty
pub const DEFAULT_PASSWORD_LEN: usize = 12;

/// Longest accepted `password_num` value, in characters
pub const MAX_PASSWORD_NUM_CHARS: usize = 3;

/// Generate a password drawing every character from `rng`
pub fn generate<R: Rng + ?Sized>(count: usize, rng: &mut R) -> String {
    let band = count / 3;
    let mut password = String::with_capacity(band * 3);

    for alphabet in [LETTERS, DIGITS, SYMBOLS] {
        for _ in 0..band {
            password.push(alphabet[rng.gen_range(0..alphabet.len())] as char);
        }
    }

    password
}

/// Generate a password using the thread-local generator
///
/// Not suitable where cryptographic randomness is required.
pub fn generate_default(count: usize) -> String {
    generate(count, &mut rand::thread_rng())
}

/// Resolve the `password_num` query value into a password length
pub fn parse_password_num(raw: Option<&str>) -> Result<usize, PasswordParamError> {
    let raw = match raw {
        Some(value) if !value.is_empty() => value,
        _ => {
            tracing::debug!("Url Param 'password_num' is missing, using {}", DEFAULT_PASSWORD_LEN);
            return Ok(DEFAULT_PASSWORD_LEN);
        }
    };

    // Length is checked on the raw text, before any parsing
    if raw.len() > MAX_PASSWORD_NUM_CHARS {
        return Err(PasswordParamError::TooLong);
    }

    raw.parse::<usize>()
        .map_err(|_| PasswordParamError::NotANumber(raw.to_string()))
}
