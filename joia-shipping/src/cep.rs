use crate::region::Uf;

fn digits_of(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Format arbitrary keystroke input toward the canonical `NNNNN-NNN` mask.
/// With five or fewer digits the bare prefix is returned; extra digits beyond
/// eight are dropped. Formatting only, never validation.
pub fn mask_cep(raw: &str) -> String {
    let mut digits = digits_of(raw);
    digits.truncate(8);
    if digits.len() <= 5 {
        return digits;
    }
    format!("{}-{}", &digits[..5], &digits[5..])
}

/// A CEP is valid iff it carries exactly eight digits, punctuation aside.
pub fn is_valid_cep(raw: &str) -> bool {
    digits_of(raw).len() == 8
}

/// Resolve the federative unit from a CEP's five-digit prefix.
///
/// The prefix ranges are the fixed Correios allocation; they are disjoint, so
/// the first match is the only match. Prefixes below 01000 are unallocated
/// and resolve to `None`.
pub fn uf_from_cep(raw: &str) -> Option<Uf> {
    let digits = digits_of(raw);
    if digits.len() < 5 {
        return None;
    }
    let prefix: u32 = digits[..5].parse().ok()?;

    match prefix {
        1000..=19999 => Some(Uf::SP),
        20000..=28999 => Some(Uf::RJ),
        29000..=29999 => Some(Uf::ES),
        30000..=39999 => Some(Uf::MG),
        40000..=48999 => Some(Uf::BA),
        49000..=49999 => Some(Uf::SE),
        50000..=56999 => Some(Uf::PE),
        57000..=57999 => Some(Uf::AL),
        58000..=58999 => Some(Uf::PB),
        59000..=59999 => Some(Uf::RN),
        60000..=63999 => Some(Uf::CE),
        64000..=64999 => Some(Uf::PI),
        65000..=65999 => Some(Uf::MA),
        66000..=68899 => Some(Uf::PA),
        68900..=68999 => Some(Uf::AP),
        // AM and RO each hold two disjoint blocks.
        69000..=69299 | 69400..=69899 => Some(Uf::AM),
        69300..=69399 => Some(Uf::RR),
        69900..=69999 => Some(Uf::AC),
        70000..=73699 => Some(Uf::DF),
        73700..=76799 => Some(Uf::GO),
        76800..=76999 | 78900..=78999 => Some(Uf::RO),
        77000..=77999 => Some(Uf::TO),
        78000..=78899 => Some(Uf::MT),
        79000..=79999 => Some(Uf::MS),
        80000..=87999 => Some(Uf::PR),
        88000..=89999 => Some(Uf::SC),
        90000..=99999 => Some(Uf::RS),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_progressively() {
        assert_eq!(mask_cep(""), "");
        assert_eq!(mask_cep("0131"), "0131");
        assert_eq!(mask_cep("01310"), "01310");
        assert_eq!(mask_cep("013101"), "01310-1");
        assert_eq!(mask_cep("01310100"), "01310-100");
    }

    #[test]
    fn test_mask_strips_and_truncates() {
        assert_eq!(mask_cep("01310-100"), "01310-100");
        assert_eq!(mask_cep("cep: 01.310-100 extra 999"), "01310-100");
        assert_eq!(mask_cep("abc"), "");
    }

    #[test]
    fn test_validity() {
        assert!(is_valid_cep("01310-100"));
        assert!(is_valid_cep("01310100"));
        assert!(!is_valid_cep("123"));
        assert!(!is_valid_cep(""));
        assert!(!is_valid_cep("abc"));
        assert!(!is_valid_cep("01310-1000"));
    }

    #[test]
    fn test_uf_resolution() {
        assert_eq!(uf_from_cep("01310-100"), Some(Uf::SP));
        assert_eq!(uf_from_cep("20040-020"), Some(Uf::RJ));
        assert_eq!(uf_from_cep("70040-010"), Some(Uf::DF));
        assert_eq!(uf_from_cep("99999-999"), Some(Uf::RS));
    }

    #[test]
    fn test_uf_split_ranges() {
        assert_eq!(uf_from_cep("69000-000"), Some(Uf::AM));
        assert_eq!(uf_from_cep("69400-000"), Some(Uf::AM));
        assert_eq!(uf_from_cep("69300-000"), Some(Uf::RR));
        assert_eq!(uf_from_cep("76800-000"), Some(Uf::RO));
        assert_eq!(uf_from_cep("78900-000"), Some(Uf::RO));
    }

    #[test]
    fn test_uf_unallocated_or_short() {
        assert_eq!(uf_from_cep("00500-000"), None);
        assert_eq!(uf_from_cep("1234"), None);
        assert_eq!(uf_from_cep(""), None);
    }
}
