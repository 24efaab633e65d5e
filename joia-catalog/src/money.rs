use std::fmt;

/// Integer cents rendered as pt-BR currency, e.g. `Brl(1234567)` displays as
/// `R$ 12.345,67`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Brl(pub i32);

impl fmt::Display for Brl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cents = self.0;
        let negative = cents < 0;
        let abs = i64::from(cents).unsigned_abs();
        let whole = abs / 100;
        let frac = abs % 100;

        let digits = whole.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(ch);
        }

        if negative {
            write!(f, "-R$ {grouped},{frac:02}")
        } else {
            write!(f, "R$ {grouped},{frac:02}")
        }
    }
}

/// Convenience wrapper around [`Brl`]'s `Display`.
pub fn format_brl(cents: i32) -> String {
    Brl(cents).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_formatting() {
        assert_eq!(format_brl(0), "R$ 0,00");
        assert_eq!(format_brl(5), "R$ 0,05");
        assert_eq!(format_brl(12500), "R$ 125,00");
        assert_eq!(format_brl(1234567), "R$ 12.345,67");
    }

    #[test]
    fn test_grouping_boundaries() {
        assert_eq!(format_brl(100000), "R$ 1.000,00");
        assert_eq!(format_brl(99999), "R$ 999,99");
        assert_eq!(format_brl(100000000), "R$ 1.000.000,00");
    }

    #[test]
    fn test_negative_amount() {
        assert_eq!(format_brl(-1500), "-R$ 15,00");
        assert_eq!(format_brl(i32::MIN), "-R$ 21.474.836,48");
    }
}
