use crate::checksum;
use crate::{AsDigits, BarcodeStandard, DigitString, InputError};

/// Reason why some input is not a barcode of the expected standard.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("no barcode standard has {0} digits")]
    UnsupportedLength(usize),
    #[error("check digit is {found} but should be {expected}")]
    ChecksumMismatch { expected: u8, found: u8 },
    #[error("requested {requested} but the code is {detected}")]
    StandardMismatch {
        requested: BarcodeStandard,
        detected: BarcodeStandard,
    },
}

/// Detect the standard of `input`, returning [BarcodeStandard::Unknown] if it is not a valid barcode.
///
/// When `pad_with_leading_zeros` is set, inputs of unsupported length are padded to 8 or 13 digits first, which
/// recovers codes whose leading zeros were lost, e.g. by storing them as integers.
/// # Example
/// ```
/// use eanab_core::{detect_type, BarcodeStandard};
/// assert_eq!(detect_type("4006381333931", true), BarcodeStandard::EAN13);
/// assert_eq!(detect_type(36000291452u64, false), BarcodeStandard::Unknown);
/// assert_eq!(detect_type("1234", false), BarcodeStandard::Unknown);
/// ```
pub fn detect_type<T: AsDigits>(input: T, pad_with_leading_zeros: bool) -> BarcodeStandard {
    try_detect_type(input, pad_with_leading_zeros).unwrap_or(BarcodeStandard::Unknown)
}

/// Detect the standard of `input`, reporting why detection failed.
pub fn try_detect_type<T: AsDigits>(
    input: T,
    pad_with_leading_zeros: bool,
) -> Result<BarcodeStandard, ValidationError> {
    let digits = input.as_digits()?;
    detect_digits(&digits, pad_with_leading_zeros)
}

fn detect_digits(digits: &DigitString, pad: bool) -> Result<BarcodeStandard, ValidationError> {
    let candidate = match digits.len() {
        13 => BarcodeStandard::EAN13,
        12 => BarcodeStandard::UPCA,
        // An 8 digit code starting with 0 or 1 might be EAN-8 as well, but UPC-E takes precedence.
        8 => match digits.first() {
            Some(0 | 1) => BarcodeStandard::UPCE,
            _ => BarcodeStandard::EAN8,
        },
        _ if pad => {
            let padded = pad_digits(digits, BarcodeStandard::Unknown);
            return detect_digits(&padded, false);
        }
        len => return Err(ValidationError::UnsupportedLength(len)),
    };
    if checksum::validate_checksum(digits, candidate) {
        Ok(candidate)
    } else {
        let body = digits.digits().take(digits.len() - 1);
        Err(ValidationError::ChecksumMismatch {
            expected: checksum::check_digit(body, candidate),
            found: digits.last().unwrap_or_default(),
        })
    }
}

/// Check whether `input` is a valid barcode of `standard`, or of any standard if [BarcodeStandard::Unknown].
///
/// An EAN-8 request is satisfied by a code detected as UPC-E, since both share the same 8 digit space.
/// # Example
/// ```
/// use eanab_core::{is_valid, BarcodeStandard};
/// assert!(is_valid("036000291452", BarcodeStandard::UPCA, true));
/// assert!(is_valid("01234565", BarcodeStandard::EAN8, true));
/// assert!(!is_valid("036000291453", BarcodeStandard::Unknown, true));
/// ```
pub fn is_valid<T: AsDigits>(input: T, standard: BarcodeStandard, pad_with_leading_zeros: bool) -> bool {
    check(input, standard, pad_with_leading_zeros).is_ok()
}

/// Validate `input` against `standard`, returning the detected standard.
pub fn check<T: AsDigits>(
    input: T,
    standard: BarcodeStandard,
    pad_with_leading_zeros: bool,
) -> Result<BarcodeStandard, ValidationError> {
    let digits = input.as_digits()?;
    if !standard.is_known() {
        return detect_digits(&digits, pad_with_leading_zeros);
    }
    let digits = if pad_with_leading_zeros {
        pad_digits(&digits, standard)
    } else {
        digits
    };
    let detected = detect_digits(&digits, false)?;
    if standard.accepts(detected) {
        Ok(detected)
    } else {
        Err(ValidationError::StandardMismatch {
            requested: standard,
            detected,
        })
    }
}

/// Prepend zeros to `input` up to the canonical length of `standard`.
///
/// With [BarcodeStandard::Unknown] the target is 8 digits for inputs of up to 8 digits and 13 otherwise. Digits are
/// never removed.
/// # Example
/// ```
/// use eanab_core::{pad_with_leading_zeros, BarcodeStandard};
/// let padded = pad_with_leading_zeros(36000291452u64, BarcodeStandard::UPCA).unwrap();
/// assert_eq!(padded.as_str(), "036000291452");
/// let padded = pad_with_leading_zeros("1234567890", BarcodeStandard::Unknown).unwrap();
/// assert_eq!(padded.as_str(), "0001234567890");
/// ```
pub fn pad_with_leading_zeros<T: AsDigits>(
    input: T,
    standard: BarcodeStandard,
) -> Result<DigitString, InputError> {
    let digits = input.as_digits()?;
    Ok(pad_digits(&digits, standard))
}

pub(crate) fn pad_digits(digits: &DigitString, standard: BarcodeStandard) -> DigitString {
    let target = match standard {
        BarcodeStandard::Unknown if digits.len() <= 8 => 8,
        BarcodeStandard::Unknown => 13,
        known => known.number_of_digits(),
    };
    digits.padded(target)
}
