use regex::Regex;
use std::sync::OnceLock;

/// Number of digits in a CPF.
pub const CPF_LENGTH: usize = 11;

fn cpf_regex() -> &'static Regex {
    static CPF_REGEX: OnceLock<Regex> = OnceLock::new();
    CPF_REGEX.get_or_init(|| {
        Regex::new(&format!(r"^[0-9]{{{}}}$", CPF_LENGTH)).expect("CPF pattern is a valid regex")
    })
}

/// Validate CPF format
///
/// A CPF is accepted only when it is exactly 11 ASCII digits. The input is
/// not normalized: punctuated (`123.456.789-09`) or padded forms are rejected,
/// and no check-digit verification is done.
pub fn is_valid_cpf(cpf: &str) -> bool {
    if cpf.len() != CPF_LENGTH {
        return false;
    }

    cpf_regex().is_match(cpf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_cpfs() {
        assert!(is_valid_cpf("76217486300"));
        assert!(is_valid_cpf("60487583752"));
        assert!(is_valid_cpf("82226651209"));
        assert!(is_valid_cpf("00000000000"));
    }

    #[test]
    fn test_invalid_cpfs() {
        assert!(!is_valid_cpf("123A"));
        assert!(!is_valid_cpf(""));
        assert!(!is_valid_cpf("1234567890")); // 10 digits
        assert!(!is_valid_cpf("123456789012")); // 12 digits
        assert!(!is_valid_cpf("1234567890A"));
        assert!(!is_valid_cpf("622.266.512-09"));
        assert!(!is_valid_cpf(" 82226651209"));
        assert!(!is_valid_cpf("82226651209\n"));
    }

    #[test]
    fn test_pattern_tracks_cpf_length() {
        assert_eq!(cpf_regex().as_str(), format!("^[0-9]{{{}}}$", CPF_LENGTH));
        assert!(is_valid_cpf(&"7".repeat(CPF_LENGTH)));
        assert!(!is_valid_cpf(&"7".repeat(CPF_LENGTH - 1)));
        assert!(!is_valid_cpf(&"7".repeat(CPF_LENGTH + 1)));
    }

    #[test]
    fn test_non_ascii_digits_rejected() {
        // Arabic-Indic digits are numeric but not CPF digits
        assert!(!is_valid_cpf("٠١٢٣٤٥٦٧٨٩٠"));
    }
}
