//! Integration tests for eanab
//!
//! Classification, encoding and drawing are exercised through the facade crate, the way a display driver would use
//! them.

use eanab::{
    checksum, detect_type, is_valid, pad_with_leading_zeros, BarcodeStandard, Bitmap, Canvas, Color,
    DigitString, Encoder, Module, Painter,
};
use pretty_assertions::assert_eq;

/// Known valid codes of each standard.
const CODES: [(&str, BarcodeStandard); 6] = [
    ("4006381333931", BarcodeStandard::EAN13),
    ("5901234123457", BarcodeStandard::EAN13),
    ("036000291452", BarcodeStandard::UPCA),
    ("96385074", BarcodeStandard::EAN8),
    ("01234565", BarcodeStandard::UPCE),
    ("12345670", BarcodeStandard::UPCE),
];

/// Canvas that only counts calls.
#[derive(Default)]
struct Counter {
    calls: usize,
}

impl Canvas for Counter {
    fn fill_rect(&mut self, _x: i32, _y: i32, _width: u32, _height: u32, _color: Color) {
        self.calls += 1;
    }

    fn set_text_size(&mut self, _size: u16) {
        self.calls += 1;
    }

    fn set_text_color(&mut self, _color: Color) {
        self.calls += 1;
    }

    fn set_cursor(&mut self, _x: i32, _y: i32) {
        self.calls += 1;
    }

    fn set_text_wrap(&mut self, _wrap: bool) {
        self.calls += 1;
    }

    fn print_char(&mut self, _c: char) {
        self.calls += 1;
    }

    fn char_bounds(&self, _c: char, size: u16) -> (u32, u32) {
        (6 * size as u32, 8 * size as u32)
    }
}

/// Test that every known code is detected and validated as its standard
#[test]
fn test_known_codes_are_detected() {
    for (code, standard) in CODES {
        assert_eq!(detect_type(code, true), standard, "{}", code);
        assert_eq!(detect_type(code, false), standard, "{}", code);
        assert!(is_valid(code, standard, true), "{}", code);
        assert!(is_valid(code, BarcodeStandard::Unknown, false), "{}", code);
    }
}

/// Test that a single substituted digit outside of the check digit is always caught
#[test]
fn test_every_single_digit_substitution_is_detected() {
    for (code, standard) in CODES {
        for position in 0..code.len() - 1 {
            for replacement in b'0'..=b'9' {
                let mut altered = code.as_bytes().to_vec();
                if altered[position] == replacement {
                    continue;
                }
                altered[position] = replacement;
                let altered = String::from_utf8(altered).unwrap();
                assert!(
                    !is_valid(altered.as_str(), standard, false),
                    "{} accepted as {}",
                    altered,
                    standard
                );
            }
        }
    }
}

/// Test that any body gets exactly one valid check digit
#[test]
fn test_computed_check_digit_validates() {
    for body in ["400638133393", "03600029145", "9638507", "0123456"] {
        let standard = match body.len() {
            12 => BarcodeStandard::EAN13,
            11 => BarcodeStandard::UPCA,
            _ => BarcodeStandard::EAN8,
        };
        let valid: Vec<u8> = (0..10)
            .filter(|check| is_valid(format!("{}{}", body, check).as_str(), standard, false))
            .collect();
        let digits = DigitString::parse(body).unwrap();
        assert_eq!(valid, vec![checksum::check_digit(digits.digits(), standard)], "{}", body);
    }
}

/// Test that integer inputs behave like their zero-padded decimal text
#[test]
fn test_integer_input_matches_text() {
    for number in [4006381333931u64, 36000291452, 96385074, 1234565, 0, 7, 123456789] {
        let text = number.to_string();
        assert_eq!(detect_type(number, true), detect_type(text.as_str(), true));
        let padded = pad_with_leading_zeros(number, BarcodeStandard::Unknown).unwrap();
        assert_eq!(detect_type(number, true), detect_type(padded, false));
    }
}

/// Test that padding twice is the same as padding once
#[test]
fn test_padding_is_idempotent() {
    let standards = [BarcodeStandard::Unknown, BarcodeStandard::EAN13, BarcodeStandard::EAN8, BarcodeStandard::UPCA];
    for standard in standards {
        for number in [0u64, 42, 1234567, 123456789, 36000291452, u64::MAX] {
            let once = pad_with_leading_zeros(number, standard).unwrap();
            let twice = pad_with_leading_zeros(once, standard).unwrap();
            assert_eq!(once, twice);
        }
    }
}

/// Test that a UPC-E shaped code can be requested as EAN-8
#[test]
fn test_upce_digits_accepted_as_ean8() {
    assert_eq!(detect_type("01234565", true), BarcodeStandard::UPCE);
    assert!(is_valid("01234565", BarcodeStandard::EAN8, true));
    assert!(is_valid("01234565", BarcodeStandard::UPCE, true));
    assert!(!is_valid("96385074", BarcodeStandard::UPCE, true));
}

/// Test that drawing invalid input leaves the canvas untouched
#[test]
fn test_draw_invalid_input_has_no_side_effects() {
    let mut painter = Painter::new(Counter::default());
    painter.set_pad_with_leading_zeros(false);
    assert!(!painter.draw("0", 0, 0, 50, BarcodeStandard::Unknown));
    assert!(!painter.draw("not a code", 0, 0, 50, BarcodeStandard::Unknown));
    assert!(!painter.draw("036000291452", 0, 0, 50, BarcodeStandard::EAN13));
    assert_eq!(painter.canvas().calls, 0);

    painter.set_pad_with_leading_zeros(true);
    assert!(painter.draw("0", 0, 0, 50, BarcodeStandard::Unknown));
    assert!(painter.canvas().calls > 0);
}

/// Test that UPC-A is wider than EAN-13 by one outer digit
#[test]
fn test_upca_reserves_an_extra_digit() {
    let painter = Painter::new(Counter::default());
    let ean13 = painter.width_for(BarcodeStandard::EAN13);
    let upca = painter.width_for(BarcodeStandard::UPCA);
    assert_eq!(upca - ean13, 6 + 1);
}

/// Test that a drawn bitmap contains the encoded bars row by row
#[test]
fn test_bitmap_row_matches_encoding() {
    let height = 40;
    let mut painter = Painter::new(Bitmap::filled(200, height, Module::Space));
    painter.set_show_digits(false);
    let symbol = painter
        .try_draw("96385074", 0, 0, height as u32, BarcodeStandard::Unknown)
        .unwrap();
    let bitmap = painter.into_canvas();
    let row = bitmap.row(height / 2).unwrap();
    // EAN-8 has no outer digits, bars start right after the quiet zone.
    let bars = &row[5..5 + symbol.module_count()];
    assert_eq!(bars, symbol.to_bits().as_bitslice());
    assert!(row[..5].not_any());
}

/// Test that the encoder and the painter agree on the symbol
#[test]
fn test_encoder_and_painter_agree() {
    let mut painter = Painter::new(Counter::default());
    for (code, _) in CODES {
        let encoded = Encoder::new().encode(code).unwrap();
        let drawn = painter
            .try_draw(code, 0, 0, 60, BarcodeStandard::Unknown)
            .unwrap();
        assert_eq!(encoded, drawn);
    }
}

/// Test that digit strings survive integer roundtrips
#[test]
fn test_digit_string_roundtrip() {
    for number in [0u64, 1, 4006381333931, u64::MAX] {
        let digits = DigitString::from_u64(number);
        assert_eq!(digits.to_u64(), Some(number));
        assert_eq!(digits.as_str().parse::<u64>().unwrap(), number);
    }
}
