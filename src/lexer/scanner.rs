//! Pattern scanners for variable and number lexemes.
//!
//! Each scanner inspects the text at the cursor and returns the byte length
//! of the longest match, or `None` when the pattern does not start there.

fn ascii_run(bytes: &[u8], from: usize, accept: fn(&u8) -> bool) -> usize {
    bytes
        .get(from..)
        .map_or(0, |tail| tail.iter().take_while(|byte| accept(*byte)).count())
}

fn digit_run(bytes: &[u8], from: usize) -> usize {
    ascii_run(bytes, from, u8::is_ascii_digit)
}

/// Length of the leading `[A-Za-z]*` run.
pub(crate) fn letter_run_len(rest: &str) -> usize {
    ascii_run(rest.as_bytes(), 0, u8::is_ascii_alphabetic)
}

/// Matches `[A-Za-z]+[0-9]+`.
pub(crate) fn variable_len(rest: &str) -> Option<usize> {
    let bytes = rest.as_bytes();
    let letters = letter_run_len(rest);
    if letters == 0 {
        return None;
    }

    let digits = digit_run(bytes, letters);
    if digits == 0 {
        return None;
    }

    Some(letters + digits)
}

/// Matches an unsigned floating-point literal with optional exponent.
///
/// Mantissa forms, tried in order: `D+.D*`, `D*.D+`, `D+`. The exponent
/// `[eE][+-]?D+` is only taken when at least one digit follows.
pub(crate) fn number_len(rest: &str) -> Option<usize> {
    let bytes = rest.as_bytes();
    let integer = digit_run(bytes, 0);

    let mut end = if integer > 0 {
        let mut end = integer;
        if bytes.get(end) == Some(&b'.') {
            end += 1;
            end += digit_run(bytes, end);
        }
        end
    } else {
        if bytes.first() != Some(&b'.') {
            return None;
        }
        let fraction = digit_run(bytes, 1);
        if fraction == 0 {
            return None;
        }
        1 + fraction
    };

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exponent = end + 1;
        if matches!(bytes.get(exponent), Some(b'+' | b'-')) {
            exponent += 1;
        }
        let digits = digit_run(bytes, exponent);
        if digits > 0 {
            end = exponent + digits;
        }
    }

    Some(end)
}
