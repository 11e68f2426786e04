/// Retail barcode standard, which determines the number of digits and the bar layout.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BarcodeStandard {
    /// Not recognized as any supported standard.
    #[default]
    Unknown,
    /// EAN-13: 12 data digits plus a check digit.
    EAN13,
    /// EAN-8: 7 data digits plus a check digit.
    EAN8,
    /// UPC-A: 11 data digits plus a check digit.
    UPCA,
    /// UPC-E: number system, 6 compressed data digits and a check digit.
    UPCE,
}

impl BarcodeStandard {
    /// Every known standard, in detection order of the digit count.
    pub const ALL: [BarcodeStandard; 4] = [Self::EAN13, Self::UPCA, Self::EAN8, Self::UPCE];

    /// Get the canonical number of digits of a code of this standard. [BarcodeStandard::Unknown] has none.
    /// # Example
    /// ```
    /// use eanab_core::BarcodeStandard;
    /// assert_eq!(BarcodeStandard::UPCA.number_of_digits(), 12);
    /// assert_eq!(BarcodeStandard::Unknown.number_of_digits(), 0);
    /// ```
    pub const fn number_of_digits(self) -> usize {
        match self {
            Self::EAN13 => 13,
            Self::EAN8 => 8,
            Self::UPCA => 12,
            Self::UPCE => 8,
            Self::Unknown => 0,
        }
    }

    /// Get the width of the symbol in modules, guards included.
    /// # Example
    /// ```
    /// use eanab_core::BarcodeStandard;
    /// assert_eq!(BarcodeStandard::EAN13.module_count(), 95);
    /// assert_eq!(BarcodeStandard::UPCE.module_count(), 51);
    /// ```
    pub const fn module_count(self) -> usize {
        const DIGIT: usize = 7;
        match self {
            Self::EAN13 | Self::UPCA => 3 + 6 * DIGIT + 5 + 6 * DIGIT + 3,
            Self::EAN8 => 3 + 4 * DIGIT + 5 + 4 * DIGIT + 3,
            Self::UPCE => 3 + 6 * DIGIT + 6,
            Self::Unknown => 0,
        }
    }

    /// Get the number of human-readable digits printed outside of the bars.
    pub const fn outer_digit_count(self) -> usize {
        match self {
            Self::EAN13 => 1,
            Self::UPCA | Self::UPCE => 2,
            Self::EAN8 | Self::Unknown => 0,
        }
    }

    /// Check whether this is an actual standard rather than [BarcodeStandard::Unknown].
    pub const fn is_known(self) -> bool {
        !matches!(self, Self::Unknown)
    }

    /// Check whether `detected` satisfies a request for `self`. An 8 digit code detected as UPC-E is a valid EAN-8
    /// as well.
    /// # Example
    /// ```
    /// use eanab_core::BarcodeStandard;
    /// assert!(BarcodeStandard::EAN8.accepts(BarcodeStandard::UPCE));
    /// assert!(!BarcodeStandard::UPCE.accepts(BarcodeStandard::EAN8));
    /// ```
    pub fn accepts(self, detected: Self) -> bool {
        self == detected || (self == Self::EAN8 && detected == Self::UPCE)
    }
}

/// Get the canonical number of digits of `standard`.
pub fn get_number_of_digits(standard: BarcodeStandard) -> usize {
    standard.number_of_digits()
}

impl std::fmt::Display for BarcodeStandard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Unknown => "unknown",
            Self::EAN13 => "EAN-13",
            Self::EAN8 => "EAN-8",
            Self::UPCA => "UPC-A",
            Self::UPCE => "UPC-E",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown barcode standard '{0}'")]
pub struct ParseStandardError(pub String);

impl std::str::FromStr for BarcodeStandard {
    type Err = ParseStandardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match normalized.as_str() {
            "ean13" => Ok(Self::EAN13),
            "ean8" => Ok(Self::EAN8),
            "upca" => Ok(Self::UPCA),
            "upce" => Ok(Self::UPCE),
            "unknown" | "auto" => Ok(Self::Unknown),
            _ => Err(ParseStandardError(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_standard_names() {
        assert_eq!("EAN-13".parse(), Ok(BarcodeStandard::EAN13));
        assert_eq!("ean_8".parse(), Ok(BarcodeStandard::EAN8));
        assert_eq!("upca".parse(), Ok(BarcodeStandard::UPCA));
        assert_eq!("UPC-E".parse(), Ok(BarcodeStandard::UPCE));
        assert_eq!("auto".parse(), Ok(BarcodeStandard::Unknown));
        assert_eq!(
            "code128".parse::<BarcodeStandard>(),
            Err(ParseStandardError("code128".into()))
        );
    }

    #[test]
    fn test_display_roundtrips_through_parse() {
        for standard in BarcodeStandard::ALL {
            assert_eq!(standard.to_string().parse(), Ok(standard));
        }
    }

    #[test]
    fn test_every_known_standard_has_a_length() {
        for standard in BarcodeStandard::ALL {
            assert!(standard.is_known());
            assert!(get_number_of_digits(standard) > 0);
            assert!(standard.module_count() > 0);
        }
        assert!(!BarcodeStandard::Unknown.is_known());
    }
}
