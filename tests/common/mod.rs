#![allow(dead_code, clippy::uninlined_format_args)]

use trie_source::Error;

/// Run an emitter against an in-memory sink and return what it wrote.
#[track_caller]
pub fn render<F>(f: F) -> String
where
    F: FnOnce(&mut Vec<u8>) -> Result<(), Error>,
{
    let mut out = Vec::new();
    if let Err(err) = f(&mut out) {
        panic!("emission failed: {}", err);
    }
    String::from_utf8(out).expect("output should be UTF-8")
}

/// Run an emitter that is expected to fail.
/// Return the error and whatever was written before the failure.
#[track_caller]
pub fn render_err<F>(f: F) -> (Error, String)
where
    F: FnOnce(&mut Vec<u8>) -> Result<(), Error>,
{
    let mut out = Vec::new();
    match f(&mut out) {
        Ok(()) => panic!(
            "emission should have failed, wrote: {}",
            String::from_utf8_lossy(&out)
        ),
        Err(err) => (err, String::from_utf8(out).expect("output should be UTF-8")),
    }
}

/// Split an array body into its element tokens.
pub fn tokens(body: &str) -> Vec<&str> {
    body.split([',', '\n']).filter(|s| !s.is_empty()).collect()
}

/// Parse a token the way a C compiler would read it.
pub fn parse_number(token: &str) -> u64 {
    let token = token.trim();
    match token.strip_prefix("0x") {
        Some(hex) => u64::from_str_radix(hex, 16).expect("bad hex literal"),
        None => token.parse().expect("bad decimal literal"),
    }
}

/// Whether a token is a canonical element: a decimal digit string without
/// leading zeros, or lowercase 0x-prefixed hex.
pub fn is_canonical_token(token: &str) -> bool {
    if let Some(hex) = token.strip_prefix("0x") {
        !hex.is_empty() && hex.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
    } else {
        !token.is_empty()
            && token.chars().all(|c| c.is_ascii_digit())
            && (token == "0" || !token.starts_with('0'))
    }
}

/// A deterministic pseudo-random sequence for bulk tests.
pub fn lcg_values(count: usize, seed: u32) -> Vec<u32> {
    let mut state = seed;
    (0..count)
        .map(|_| {
            state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            // Mix in small values so both number formats are exercised.
            if state % 3 == 0 {
                state % 10
            } else {
                state
            }
        })
        .collect()
}

pub trait StringTestHelpers {
    /// "Fluent" style helper for testing that a String is equal to a str.
    fn test_eq(&self, s: &str);
}

impl StringTestHelpers for String {
    #[track_caller]
    fn test_eq(&self, rhs: &str) {
        assert_eq!(self.as_str(), rhs)
    }
}
