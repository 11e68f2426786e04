use std::ops::Range;

use bitvec::{order::Msb0, vec::BitVec};
use itertools::Itertools;

use eanab_core::{AsDigits, Barcode, BarcodeStandard, ValidationError};

use crate::patterns::{self, Parity, Pattern};

/// Encoder for a retail barcode.
#[derive(Debug, Clone)]
pub struct Encoder {
    standard: BarcodeStandard,
    pad_with_leading_zeros: bool,
}

impl Encoder {
    /// Construct a new encoder that detects the standard and pads with leading zeros.
    pub fn new() -> Self {
        Self {
            standard: BarcodeStandard::Unknown,
            pad_with_leading_zeros: true,
        }
    }

    /// Get the requested standard, [BarcodeStandard::Unknown] meaning it will be detected.
    pub fn standard(&self) -> BarcodeStandard {
        self.standard
    }

    /// Request `standard` instead of detecting it.
    pub fn with_standard(mut self, standard: BarcodeStandard) -> Self {
        self.standard = standard;
        self
    }

    /// Whether inputs get padded with leading zeros.
    pub fn pad_with_leading_zeros(&self) -> bool {
        self.pad_with_leading_zeros
    }

    /// Enable or disable padding inputs with leading zeros.
    pub fn with_padding(mut self, pad_with_leading_zeros: bool) -> Self {
        self.pad_with_leading_zeros = pad_with_leading_zeros;
        self
    }

    /// Validate and encode `input`.
    /// # Example
    /// ```
    /// use eanab_encode::Encoder;
    /// let symbol = Encoder::new().encode("96385074").unwrap();
    /// assert_eq!(symbol.module_count(), 67);
    /// assert!(Encoder::new().with_padding(false).encode("0").is_err());
    /// ```
    pub fn encode<T: AsDigits>(&self, input: T) -> Result<EncodedSymbol, EncodingError> {
        let barcode = Barcode::resolve(input, self.standard, self.pad_with_leading_zeros)?;
        Ok(Self::encode_barcode(&barcode))
    }

    /// Encode an already validated `barcode`.
    pub fn encode_barcode(barcode: &Barcode) -> EncodedSymbol {
        let digits = barcode.digits();
        let standard = barcode.standard();
        let digit = |i: usize| digits.digit(i).unwrap_or_default();
        let first = digit(0);
        let layout = Layout::of(standard);

        let left_parities = match standard {
            BarcodeStandard::EAN13 => Some(patterns::ean13_parities(first)),
            BarcodeStandard::UPCE => Some(patterns::upce_parities(first, digit(layout.right.end))),
            _ => None,
        };
        let digit_element = |index: usize, parity: Parity, long: bool| {
            let value = digit(index);
            Element {
                kind: ElementKind::Digit {
                    index,
                    digit: value,
                    parity,
                },
                pattern: parity.pattern(value),
                long,
            }
        };

        let mut elements = Vec::with_capacity(standard.number_of_digits() + 3);
        elements.push(Element::guard(ElementKind::StartGuard, patterns::START_GUARD));
        if standard == BarcodeStandard::UPCA {
            elements.push(digit_element(0, Parity::L, true));
        }
        for index in layout.left.clone() {
            let parity = match left_parities {
                Some(parities) => parities[index - layout.left.start],
                None => Parity::L,
            };
            elements.push(digit_element(index, parity, false));
        }
        if standard != BarcodeStandard::UPCE {
            elements.push(Element::guard(ElementKind::MiddleGuard, patterns::MIDDLE_GUARD));
        }
        for index in layout.right.clone() {
            elements.push(digit_element(index, Parity::R, false));
        }
        if standard == BarcodeStandard::UPCA {
            elements.push(digit_element(layout.right.end, Parity::R, true));
        }
        let end_guard = match standard {
            BarcodeStandard::UPCE => patterns::UPCE_END_GUARD,
            _ => patterns::END_GUARD,
        };
        elements.push(Element::guard(ElementKind::EndGuard, end_guard));

        let leading_digit = (standard.outer_digit_count() > 0).then_some(first);
        let trailing_digit = (standard.outer_digit_count() > 1).then(|| digit(layout.right.end));
        EncodedSymbol {
            standard,
            elements,
            leading_digit,
            trailing_digit,
        }
    }
}

impl Default for Encoder {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum EncodingError {
    #[error("cannot encode an invalid barcode: {0}")]
    Invalid(#[from] ValidationError),
}

/// Digit positions drawn as the left and right groups of bars.
struct Layout {
    left: Range<usize>,
    right: Range<usize>,
}

impl Layout {
    fn of(standard: BarcodeStandard) -> Self {
        let (left, right) = match standard {
            // The first digit is implied by the parities.
            BarcodeStandard::EAN13 => (1..7, 7..13),
            BarcodeStandard::EAN8 => (0..4, 4..8),
            // Digits 0 and 11 are drawn as long bars around the groups.
            BarcodeStandard::UPCA => (1..6, 6..11),
            // No right group, the check digit at 7 is implied by the parities.
            BarcodeStandard::UPCE => (1..7, 7..7),
            BarcodeStandard::Unknown => unreachable!("a validated barcode always has a known standard"),
        };
        Self { left, right }
    }
}

/// Kind of a symbol element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    /// Guard opening the symbol, `101`.
    StartGuard,
    /// Guard between the left and right digit groups, `01010`.
    MiddleGuard,
    /// Guard closing the symbol, `101` or `010101` for UPC-E.
    EndGuard,
    /// Encoded digit at position `index` of the code.
    Digit { index: usize, digit: u8, parity: Parity },
}

/// A guard or a digit of an [EncodedSymbol].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Element {
    pub kind: ElementKind,
    pub pattern: Pattern,
    /// Long elements extend their bars down between the human-readable digits.
    pub long: bool,
}

impl Element {
    fn guard(kind: ElementKind, pattern: Pattern) -> Self {
        Self {
            kind,
            pattern,
            long: true,
        }
    }

    /// Get the encoded digit, if this is not a guard.
    pub fn digit(&self) -> Option<u8> {
        match self.kind {
            ElementKind::Digit { digit, .. } => Some(digit),
            _ => None,
        }
    }
}

/// A barcode encoded as the ordered bar patterns of its guards and digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedSymbol {
    standard: BarcodeStandard,
    elements: Vec<Element>,
    leading_digit: Option<u8>,
    trailing_digit: Option<u8>,
}

impl EncodedSymbol {
    /// Get the standard the symbol was encoded with.
    pub fn standard(&self) -> BarcodeStandard {
        self.standard
    }

    /// Get the elements from left to right.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Get the human-readable digit printed left of the bars, if any.
    pub fn leading_digit(&self) -> Option<u8> {
        self.leading_digit
    }

    /// Get the human-readable digit printed right of the bars, if any.
    pub fn trailing_digit(&self) -> Option<u8> {
        self.trailing_digit
    }

    /// Get the total width in modules.
    pub fn module_count(&self) -> usize {
        self.elements.iter().map(|element| element.pattern.len()).sum()
    }

    /// Concatenate every element into a single run of modules.
    pub fn to_bits(&self) -> BitVec<u8, Msb0> {
        let mut bits = BitVec::with_capacity(self.module_count());
        for element in &self.elements {
            bits.extend_from_bitslice(element.pattern.as_bits());
        }
        bits
    }
}

impl std::fmt::Display for EncodedSymbol {
    /// Write the elements' modules as `0` and `1`, one element per space separated word.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.elements.iter().map(|element| element.pattern).join(" "))
    }
}

#[cfg(test)]
mod test {
    use bitvec::{bits, order::Lsb0};
    use pretty_assertions::assert_eq;

    use super::*;

    fn encode(text: &str) -> EncodedSymbol {
        Encoder::new().with_padding(false).encode(text).unwrap()
    }

    fn parities(symbol: &EncodedSymbol) -> Vec<Parity> {
        symbol
            .elements()
            .iter()
            .filter_map(|element| match element.kind {
                ElementKind::Digit { parity, .. } => Some(parity),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_ean13_encoding() {
        let symbol = encode("4006381333931");
        assert_eq!(symbol.standard(), BarcodeStandard::EAN13);
        assert_eq!(
            symbol.to_string(),
            "101 0001101 0100111 0101111 0111101 0001001 0110011 01010 \
             1000010 1000010 1000010 1110100 1000010 1100110 101"
        );
        assert_eq!(symbol.leading_digit(), Some(4));
        assert_eq!(symbol.trailing_digit(), None);
        assert_eq!(symbol.module_count(), 95);
    }

    #[test]
    fn test_ean13_first_digit_selects_parity() {
        use Parity::{G, L, R};
        let symbol = encode("4006381333931");
        assert_eq!(
            parities(&symbol),
            vec![L, G, L, L, G, G, R, R, R, R, R, R]
        );
        let symbol = encode("0036000291452");
        assert!(parities(&symbol)[..6].iter().all(|&p| p == L));
    }

    #[test]
    fn test_ean8_encoding() {
        let symbol = encode("96385074");
        assert_eq!(symbol.standard(), BarcodeStandard::EAN8);
        #[rustfmt::skip]
        assert_eq!(
            symbol.to_bits(),
            bits![
                1, 0, 1,                // Start guard
                0, 0, 0, 1, 0, 1, 1,    // 9
                0, 1, 0, 1, 1, 1, 1,    // 6
                0, 1, 1, 1, 1, 0, 1,    // 3
                0, 1, 1, 0, 1, 1, 1,    // 8
                0, 1, 0, 1, 0,          // Middle guard
                1, 0, 0, 1, 1, 1, 0,    // 5
                1, 1, 1, 0, 0, 1, 0,    // 0
                1, 0, 0, 0, 1, 0, 0,    // 7
                1, 0, 1, 1, 1, 0, 0,    // 4
                1, 0, 1,                // End guard
            ]
        );
        assert_eq!(symbol.leading_digit(), None);
        assert_eq!(symbol.trailing_digit(), None);
    }

    #[test]
    fn test_upca_outer_digits_are_long() {
        let symbol = encode("036000291452");
        let elements = symbol.elements();
        assert_eq!(elements.len(), 12 + 3);
        let long_digits: Vec<usize> = elements
            .iter()
            .filter_map(|element| match element.kind {
                ElementKind::Digit { index, .. } if element.long => Some(index),
                _ => None,
            })
            .collect();
        assert_eq!(long_digits, vec![0, 11]);
        assert_eq!(elements[1].pattern, Parity::L.pattern(0));
        assert_eq!(elements[13].pattern, Parity::R.pattern(2));
        assert_eq!(symbol.leading_digit(), Some(0));
        assert_eq!(symbol.trailing_digit(), Some(2));
        assert_eq!(symbol.module_count(), 95);
    }

    #[test]
    fn test_upca_bars_match_ean13_with_leading_zero() {
        let upca = encode("036000291452");
        let ean13 = encode("0036000291452");
        assert_eq!(upca.to_bits(), ean13.to_bits());
    }

    #[test]
    fn test_upce_encoding() {
        use Parity::{G, L};
        let symbol = encode("01234565");
        assert_eq!(symbol.standard(), BarcodeStandard::UPCE);
        assert_eq!(
            symbol.to_string(),
            "101 0110011 0010011 0111101 0011101 0111001 0101111 010101"
        );
        assert_eq!(parities(&symbol), vec![G, L, L, G, G, L]);
        assert_eq!(symbol.leading_digit(), Some(0));
        assert_eq!(symbol.trailing_digit(), Some(5));
        assert_eq!(symbol.module_count(), 51);
        assert!(!symbol
            .elements()
            .iter()
            .any(|element| element.kind == ElementKind::MiddleGuard));
    }

    #[test]
    fn test_upce_number_system_one_uses_complement() {
        use Parity::{G, L};
        // 1 234567 check digit: 3 + 2 + 9 + 4 + 15 + 6 + 21 = 60
        let symbol = encode("12345670");
        assert_eq!(parities(&symbol), vec![L, L, L, G, G, G]);
    }

    #[test]
    fn test_ean8_request_on_upce_digits() {
        let symbol = Encoder::new()
            .with_standard(BarcodeStandard::EAN8)
            .encode("01234565")
            .unwrap();
        assert_eq!(symbol.standard(), BarcodeStandard::EAN8);
        assert_eq!(symbol.module_count(), 67);
    }

    #[test]
    fn test_invalid_input_is_rejected() {
        assert!(matches!(
            Encoder::new().encode("4006381333932"),
            Err(EncodingError::Invalid(ValidationError::ChecksumMismatch { .. }))
        ));
        assert!(Encoder::new().encode("abc").is_err());
    }

    #[test]
    fn test_module_count_matches_standard() {
        for text in ["4006381333931", "96385074", "036000291452", "01234565"] {
            let symbol = encode(text);
            assert_eq!(symbol.module_count(), symbol.standard().module_count());
            assert_eq!(symbol.to_bits().len(), symbol.module_count());
        }
    }
}
