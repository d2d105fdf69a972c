//! Steam64 ID validation.

/// Checks that a string is a plausible Steam64 ID: exactly 17 ASCII digits.
///
/// No checksum or universe validation is attempted; the format check alone
/// catches pasted usernames, profile URLs, and truncated IDs.
pub fn is_valid_steam64_id(value: &str) -> bool {
    value.len() == 17 && value.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_seventeen_digit_id() {
        assert!(is_valid_steam64_id("76561198000000001"));
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(!is_valid_steam64_id("7656119800000000"));
        assert!(!is_valid_steam64_id("765611980000000012"));
        assert!(!is_valid_steam64_id(""));
    }

    #[test]
    fn rejects_non_digit_characters() {
        assert!(!is_valid_steam64_id("7656119800000000a"));
        assert!(!is_valid_steam64_id("https://steamcomm"));
        assert!(!is_valid_steam64_id(" 7656119800000001"));
    }
}
