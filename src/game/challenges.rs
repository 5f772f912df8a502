//! Answer checking shared by the missions
//!
//! The puzzles have fixed answers, but where an answer can be derived
//! (a Caesar shift, a binary string, a small RSA key) it is computed here
//! rather than typed in by hand.

/// Lowercase with all whitespace removed
pub fn squash(answer: &str) -> String {
    answer
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Trimmed and lowercased
pub fn normalize(answer: &str) -> String {
    answer.trim().to_lowercase()
}

/// Shift ASCII letters back by `shift`; everything else passes through.
pub fn caesar_decrypt(ciphertext: &str, shift: u8) -> String {
    let shift = shift % 26;
    ciphertext
        .chars()
        .map(|c| match c {
            'A'..='Z' => (((c as u8 - b'A' + 26 - shift) % 26) + b'A') as char,
            'a'..='z' => (((c as u8 - b'a' + 26 - shift) % 26) + b'a') as char,
            _ => c,
        })
        .collect()
}

/// Space-separated 8-bit groups to text. `None` on anything malformed.
pub fn binary_to_text(bits: &str) -> Option<String> {
    bits.split_whitespace()
        .map(|group| {
            if group.len() != 8 {
                return None;
            }
            u8::from_str_radix(group, 2).ok().map(char::from)
        })
        .collect()
}

/// Smallest prime factor pair of a semiprime
pub fn factor_semiprime(n: u64) -> Option<(u64, u64)> {
    (2..=((n as f64).sqrt() as u64))
        .find(|p| n % p == 0)
        .map(|p| (p, n / p))
}

/// `d` with `e * d ≡ 1 (mod m)`
pub fn mod_inverse(e: i64, m: i64) -> Option<i64> {
    let (mut old_r, mut r) = (e, m);
    let (mut old_s, mut s) = (1i64, 0i64);
    while r != 0 {
        let q = old_r / r;
        (old_r, r) = (r, old_r - q * r);
        (old_s, s) = (s, old_s - q * s);
    }
    (old_r == 1).then(|| old_s.rem_euclid(m))
}

/// Leading integer of the answer, the way a lenient parser reads "4096 qubits"
pub fn leading_integer(answer: &str) -> Option<i64> {
    let trimmed = answer.trim_start();
    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let end = digits
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map(|(i, _)| i)
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().ok().map(|n| sign * n)
}

/// "7,11", "11, 7" and "7 11" all read as the same pair
pub fn parse_pair(answer: &str) -> Option<(u64, u64)> {
    let mut parts = answer
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<u64>());
    let a = parts.next()?.ok()?;
    let b = parts.next()?.ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((a.min(b), a.max(b)))
}

/// `required` or more of the sub-challenges passed
pub fn at_least(required: usize, results: &[bool]) -> bool {
    results.iter().filter(|&&passed| passed).count() >= required
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caesar_puzzles_decode_to_expected_answers() {
        assert_eq!(caesar_decrypt("KHOOR ZRUOG", 3), "HELLO WORLD");
        assert_eq!(
            squash(&caesar_decrypt("WKH HDJOH ODQGV DW PLGQLJKW", 3)),
            "theeaglelandsatmidnight"
        );
    }

    #[test]
    fn test_binary_puzzles() {
        assert_eq!(binary_to_text("01001000 01101001").as_deref(), Some("Hi"));
        assert_eq!(
            binary_to_text("01001000 01100101 01101100 01110000").as_deref(),
            Some("Help")
        );
        assert_eq!(binary_to_text("0100100"), None);
        assert_eq!(binary_to_text("0100100x"), None);
    }

    #[test]
    fn test_small_rsa_key() {
        assert_eq!(factor_semiprime(77), Some((7, 11)));
        assert_eq!(mod_inverse(7, 60), Some(43));
        assert_eq!(mod_inverse(6, 60), None);
    }

    #[test]
    fn test_lenient_integer_parsing() {
        assert_eq!(leading_integer("4096"), Some(4096));
        assert_eq!(leading_integer("  5000 qubits"), Some(5000));
        assert_eq!(leading_integer("-3"), Some(-3));
        assert_eq!(leading_integer("about 4000"), None);
    }

    #[test]
    fn test_pairs_ignore_order_and_spacing() {
        assert_eq!(parse_pair("7,11"), Some((7, 11)));
        assert_eq!(parse_pair("11, 7"), Some((7, 11)));
        assert_eq!(parse_pair("7 11"), Some((7, 11)));
        assert_eq!(parse_pair("7"), None);
        assert_eq!(parse_pair("7,11,13"), None);
    }

    #[test]
    fn test_k_of_m() {
        assert!(at_least(2, &[true, false, true]));
        assert!(!at_least(2, &[true, false, false]));
        assert!(at_least(0, &[]));
    }
}
