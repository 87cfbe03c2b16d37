//! Fixed-grammar reading decoder for `-?[0-9]{1,2}\.[0-9]` tokens.

/// Decode a reading into tenths of a degree (`"-3.4"` -> `-34`).
///
/// The token must match the reading grammar exactly; callers check with
/// [`is_well_formed`] first.
#[inline]
pub fn decode_tenths(token: &[u8]) -> i32 {
    debug_assert!(is_well_formed(token), "malformed reading {:?}", token);

    let (negative, digits) = match token.split_first() {
        Some((b'-', rest)) => (true, rest),
        _ => (false, token),
    };

    let magnitude = match *digits {
        [ones, b'.', fraction] => digit(ones) * 10 + digit(fraction),
        [tens, ones, b'.', fraction] => digit(tens) * 100 + digit(ones) * 10 + digit(fraction),
        _ => 0,
    };

    if negative {
        -magnitude
    } else {
        magnitude
    }
}

#[inline(always)]
fn digit(byte: u8) -> i32 {
    byte.wrapping_sub(b'0') as i32
}

/// Whether a token matches `-?[0-9]{1,2}\.[0-9]`
#[inline]
pub fn is_well_formed(token: &[u8]) -> bool {
    let digits = token.strip_prefix(b"-").unwrap_or(token);
    match *digits {
        [ones, b'.', fraction] => ones.is_ascii_digit() && fraction.is_ascii_digit(),
        [tens, ones, b'.', fraction] => {
            tens.is_ascii_digit() && ones.is_ascii_digit() && fraction.is_ascii_digit()
        }
        _ => false,
    }
}
