use crate::{BarcodeStandard, DigitString};

/// Compute the mod 10 check digit of `body`, i.e. every digit of a code but the check digit.
///
/// Weights alternate 3, 1, 3, ... from the first digit, except for EAN-13 where they start from the second one. This
/// way a UPC-A body and the same body with a leading zero as EAN-13 share their check digit.
/// # Example
/// ```
/// use eanab_core::{checksum, BarcodeStandard};
/// assert_eq!(checksum::check_digit([4, 0, 0, 6, 3, 8, 1, 3, 3, 3, 9, 3], BarcodeStandard::EAN13), 1);
/// assert_eq!(checksum::check_digit([0, 3, 6, 0, 0, 0, 2, 9, 1, 4, 5], BarcodeStandard::UPCA), 2);
/// ```
pub fn check_digit<I: IntoIterator<Item = u8>>(body: I, standard: BarcodeStandard) -> u8 {
    let heavy_position = match standard {
        BarcodeStandard::EAN13 => 1,
        _ => 0,
    };
    let sum: u32 = body
        .into_iter()
        .enumerate()
        .map(|(i, digit)| {
            let weight = if i % 2 == heavy_position { 3 } else { 1 };
            weight * digit as u32
        })
        .sum();
    ((10 - sum % 10) % 10) as u8
}

/// Check whether the last digit of `digits` is the check digit of the preceding ones.
pub fn validate_checksum(digits: &DigitString, standard: BarcodeStandard) -> bool {
    let Some(found) = digits.last() else {
        return false;
    };
    let body = digits.digits().take(digits.len() - 1);
    check_digit(body, standard) == found
}

#[cfg(test)]
mod test {
    use super::*;

    fn digits(text: &str) -> DigitString {
        DigitString::parse(text).unwrap()
    }

    #[test]
    fn test_known_codes() {
        assert!(validate_checksum(&digits("4006381333931"), BarcodeStandard::EAN13));
        assert!(validate_checksum(&digits("036000291452"), BarcodeStandard::UPCA));
        assert!(validate_checksum(&digits("96385074"), BarcodeStandard::EAN8));
        assert!(validate_checksum(&digits("01234565"), BarcodeStandard::UPCE));
    }

    #[test]
    fn test_upca_as_ean13_shares_check_digit() {
        let upca = digits("036000291452");
        let ean13 = digits("0036000291452");
        assert!(validate_checksum(&upca, BarcodeStandard::UPCA));
        assert!(validate_checksum(&ean13, BarcodeStandard::EAN13));
    }

    #[test]
    fn test_weight_phase_matters() {
        // Same digits, different weight alignment.
        assert!(!validate_checksum(&digits("4006381333931"), BarcodeStandard::UPCA));
    }

    #[test]
    fn test_empty_never_validates() {
        assert!(!validate_checksum(&DigitString::new(), BarcodeStandard::EAN8));
    }

    #[test]
    fn test_zero_sum_gives_zero() {
        assert_eq!(check_digit([0; 7], BarcodeStandard::EAN8), 0);
        assert_eq!(check_digit([5, 5], BarcodeStandard::EAN8), 0);
    }
}
