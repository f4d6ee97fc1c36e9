//! One-time-passcode input handling shared by the login and signup flows.

/// Codes are always exactly six digits.
pub const OTP_LEN: usize = 6;

/// Strip non-digit characters from raw input and cap it at [`OTP_LEN`].
///
/// Applied at the point of entry so malformed characters never reach a
/// submit handler, let alone the network.
pub fn sanitize(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit())
        .take(OTP_LEN)
        .collect()
}

/// Whether a sanitised code is ready to submit.
pub fn is_complete(otp: &str) -> bool {
    otp.len() == OTP_LEN && otp.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_strips_non_digits_and_caps_length() {
        assert_eq!(sanitize("123456"), "123456");
        assert_eq!(sanitize("12a3 4-5b6"), "123456");
        assert_eq!(sanitize("1234567890"), "123456");
        assert_eq!(sanitize("abc"), "");
        assert_eq!(sanitize(""), "");
    }

    #[test]
    fn completeness_requires_exactly_six_digits() {
        assert!(is_complete("000000"));
        assert!(!is_complete("12345"));
        assert!(!is_complete("1234567"));
        assert!(!is_complete(""));
        assert!(!is_complete("12345a"));
    }
}
