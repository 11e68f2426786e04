mod canvas;
pub mod checksum;
mod classify;
mod digits;
mod standard;

pub use canvas::{Canvas, Color, Module};
pub use classify::{check, detect_type, is_valid, pad_with_leading_zeros, try_detect_type, ValidationError};
pub use digits::{AsDigits, DigitString, InputError, MAX_DIGITS};
pub use standard::{get_number_of_digits, BarcodeStandard, ParseStandardError};

/// A validated barcode: digits of canonical length with a matching check digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Barcode {
    digits: DigitString,
    standard: BarcodeStandard,
}

impl Barcode {
    /// Construct a new [Barcode]. Returns `None` if `digits` are not a valid code of `standard`, without padding.
    /// # Example
    /// ```
    /// use eanab_core::{Barcode, BarcodeStandard, DigitString};
    /// let digits = DigitString::parse("96385074").unwrap();
    /// assert!(Barcode::new(digits, BarcodeStandard::EAN8).is_some());
    /// assert!(Barcode::new(digits, BarcodeStandard::UPCA).is_none());
    /// ```
    pub fn new(digits: DigitString, standard: BarcodeStandard) -> Option<Self> {
        if standard.is_known() && is_valid(digits, standard, false) {
            Some(Self { digits, standard })
        } else {
            None
        }
    }

    /// Resolve `input` into a barcode of `standard`, detecting the standard first if it is
    /// [BarcodeStandard::Unknown].
    ///
    /// If `pad_with_leading_zeros` is set, the digits are padded to the canonical length of the resolved standard.
    /// A UPC-E shaped code requested as EAN-8 stays EAN-8.
    /// # Example
    /// ```
    /// use eanab_core::{Barcode, BarcodeStandard};
    /// let barcode = Barcode::resolve(36000291452u64, BarcodeStandard::UPCA, true).unwrap();
    /// assert_eq!(barcode.digits().as_str(), "036000291452");
    /// assert_eq!(barcode.standard(), BarcodeStandard::UPCA);
    /// ```
    pub fn resolve<T: AsDigits>(
        input: T,
        standard: BarcodeStandard,
        pad_with_leading_zeros: bool,
    ) -> Result<Self, ValidationError> {
        let digits = input.as_digits()?;
        let standard = match standard {
            BarcodeStandard::Unknown => try_detect_type(digits, pad_with_leading_zeros)?,
            known => known,
        };
        let digits = if pad_with_leading_zeros {
            classify::pad_digits(&digits, standard)
        } else {
            digits
        };
        check(digits, standard, false)?;
        Ok(Self { digits, standard })
    }

    /// Get the digits.
    pub fn digits(&self) -> &DigitString {
        &self.digits
    }

    /// Get the standard.
    pub fn standard(&self) -> BarcodeStandard {
        self.standard
    }
}

impl std::fmt::Display for Barcode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.standard, self.digits)
    }
}

impl From<Barcode> for DigitString {
    fn from(value: Barcode) -> Self {
        value.digits
    }
}
