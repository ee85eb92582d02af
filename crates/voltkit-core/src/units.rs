//! Engineering magnitudes and SI prefix handling.

/// Power-of-ten magnitude suffix used by engineering-notation literals.
///
/// Supported magnitudes:
/// - G (giga, 1e9)
/// - M (mega, 1e6)
/// - k (kilo, 1e3)
/// - m (milli, 1e-3)
/// - u (micro, 1e-6)
/// - μ (micro sign, 1e-9; see [`Magnitude::MicroSign`])
/// - n (nano, 1e-9)
/// - p (pico, 1e-12)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Magnitude {
    /// Giga (1e9).
    Giga,
    /// Mega (1e6).
    Mega,
    /// Kilo (1e3).
    Kilo,
    /// No suffix (1e0).
    Base,
    /// Milli (1e-3).
    Milli,
    /// Micro, spelled `u` (1e-6).
    Micro,
    /// Micro sign `μ`. Keeps the legacy nano mapping (1e-9), which existing
    /// circuit files rely on; do not "fix" without migrating stored values.
    MicroSign,
    /// Nano (1e-9).
    Nano,
    /// Pico (1e-12).
    Pico,
}

impl Magnitude {
    /// Standard display ordering, giga down to pico.
    pub const DISPLAY: [Magnitude; 8] = [
        Magnitude::Giga,
        Magnitude::Mega,
        Magnitude::Kilo,
        Magnitude::Base,
        Magnitude::Milli,
        Magnitude::Micro,
        Magnitude::Nano,
        Magnitude::Pico,
    ];

    /// Look up a suffix character from the lenient literal grammar.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'G' => Some(Magnitude::Giga),
            'M' => Some(Magnitude::Mega),
            'k' => Some(Magnitude::Kilo),
            'm' => Some(Magnitude::Milli),
            'u' => Some(Magnitude::Micro),
            'μ' => Some(Magnitude::MicroSign),
            'n' => Some(Magnitude::Nano),
            'p' => Some(Magnitude::Pico),
            _ => None,
        }
    }

    /// Look up a suffix character from the strict widget grammar, which
    /// accepts the ASCII set only.
    pub fn from_strict_char(c: char) -> Option<Self> {
        match c {
            'μ' => None,
            _ => Magnitude::from_char(c),
        }
    }

    /// Suffix as written in a literal.
    pub fn symbol(self) -> &'static str {
        match self {
            Magnitude::Giga => "G",
            Magnitude::Mega => "M",
            Magnitude::Kilo => "k",
            Magnitude::Base => "",
            Magnitude::Milli => "m",
            Magnitude::Micro => "u",
            Magnitude::MicroSign => "μ",
            Magnitude::Nano => "n",
            Magnitude::Pico => "p",
        }
    }

    /// Power of ten this magnitude scales by.
    pub fn exponent(self) -> i32 {
        match self {
            Magnitude::Giga => 9,
            Magnitude::Mega => 6,
            Magnitude::Kilo => 3,
            Magnitude::Base => 0,
            Magnitude::Milli => -3,
            Magnitude::Micro => -6,
            Magnitude::MicroSign => -9,
            Magnitude::Nano => -9,
            Magnitude::Pico => -12,
        }
    }

    /// CJK unit prefix for localized labels.
    pub fn cjk_prefix(self) -> &'static str {
        match self {
            Magnitude::Giga => "吉",
            Magnitude::Mega => "兆",
            Magnitude::Kilo => "千",
            Magnitude::Base => "",
            Magnitude::Milli => "毫",
            Magnitude::Micro | Magnitude::MicroSign => "微",
            Magnitude::Nano => "纳",
            Magnitude::Pico => "皮",
        }
    }

    /// Fold the micro sign onto its ASCII spelling for display purposes.
    pub fn fold_micro_sign(self) -> Self {
        match self {
            Magnitude::MicroSign => Magnitude::Micro,
            other => other,
        }
    }
}

/// Format a value with the best-fitting SI prefix.
pub fn format_value(value: f64) -> String {
    let abs = value.abs();
    let magnitude = Magnitude::DISPLAY
        .iter()
        .copied()
        .find(|m| abs >= 10f64.powi(m.exponent()));

    match magnitude {
        Some(m) => format!("{:.4}{}", value / 10f64.powi(m.exponent()), m.symbol()),
        // Zero, or below the pico threshold
        None => format!("{:.4}", value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suffix_lookup() {
        assert_eq!(Magnitude::from_char('k'), Some(Magnitude::Kilo));
        assert_eq!(Magnitude::from_char('μ'), Some(Magnitude::MicroSign));
        assert_eq!(Magnitude::from_char('T'), None);
        assert_eq!(Magnitude::from_strict_char('μ'), None);
        assert_eq!(Magnitude::from_strict_char('G'), Some(Magnitude::Giga));
    }

    #[test]
    fn test_exponents() {
        assert_eq!(Magnitude::Giga.exponent(), 9);
        assert_eq!(Magnitude::Micro.exponent(), -6);
        // μ and n share an exponent; legacy mapping
        assert_eq!(Magnitude::MicroSign.exponent(), Magnitude::Nano.exponent());
    }

    #[test]
    fn test_micro_sign_folds_to_ascii() {
        assert_eq!(Magnitude::MicroSign.fold_micro_sign(), Magnitude::Micro);
        assert_eq!(Magnitude::Kilo.fold_micro_sign(), Magnitude::Kilo);
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(1000.0), "1.0000k");
        assert_eq!(format_value(0.001), "1.0000m");
        assert_eq!(format_value(1e-9), "1.0000n");
        assert_eq!(format_value(4.7e6), "4.7000M");
        assert_eq!(format_value(0.0), "0.0000");
    }
}
