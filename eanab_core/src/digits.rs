/// Maximum number of digits a code can have: the decimal width of [u64::MAX].
pub const MAX_DIGITS: usize = 20;

/// Error raised when text cannot be interpreted as a string of decimal digits.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("character '{found}' at position {position} is not a decimal digit")]
    NonDigit { position: usize, found: char },
    #[error("{0} characters exceed the maximum of {MAX_DIGITS} digits")]
    TooLong(usize),
}

/// A fixed capacity string of ASCII decimal digits.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DigitString {
    buf: [u8; MAX_DIGITS],
    len: usize,
}

impl DigitString {
    /// Construct an empty digit string.
    pub const fn new() -> Self {
        Self {
            buf: [b'0'; MAX_DIGITS],
            len: 0,
        }
    }

    /// Parse `text`, which must only contain decimal digits.
    /// # Example
    /// ```
    /// use eanab_core::{DigitString, InputError};
    /// assert_eq!(DigitString::parse("0042").unwrap().as_str(), "0042");
    /// assert_eq!(
    ///     DigitString::parse("12a4"),
    ///     Err(InputError::NonDigit { position: 2, found: 'a' })
    /// );
    /// ```
    pub fn parse(text: &str) -> Result<Self, InputError> {
        let count = text.chars().count();
        if count > MAX_DIGITS {
            return Err(InputError::TooLong(count));
        }
        let mut digits = Self::new();
        for (position, found) in text.chars().enumerate() {
            if !found.is_ascii_digit() {
                return Err(InputError::NonDigit { position, found });
            }
            digits.buf[position] = found as u8;
        }
        digits.len = count;
        Ok(digits)
    }

    /// Render `number` in decimal without leading zeros.
    /// # Example
    /// ```
    /// use eanab_core::DigitString;
    /// assert_eq!(DigitString::from_u64(0).as_str(), "0");
    /// assert_eq!(DigitString::from_u64(u64::MAX).len(), 20);
    /// ```
    pub fn from_u64(mut number: u64) -> Self {
        let mut reversed = [b'0'; MAX_DIGITS];
        let mut len = 0;
        loop {
            reversed[len] = b'0' + (number % 10) as u8;
            len += 1;
            number /= 10;
            if number == 0 {
                break;
            }
        }
        let mut digits = Self::new();
        for (dst, src) in digits.buf.iter_mut().zip(reversed[..len].iter().rev()) {
            *dst = *src;
        }
        digits.len = len;
        digits
    }

    /// Get the numeric value, ignoring leading zeros. Returns `None` if the value overflows a [u64].
    /// # Example
    /// ```
    /// use eanab_core::DigitString;
    /// assert_eq!(DigitString::parse("000123").unwrap().to_u64(), Some(123));
    /// assert_eq!(DigitString::parse("99999999999999999999").unwrap().to_u64(), None);
    /// ```
    pub fn to_u64(&self) -> Option<u64> {
        self.digits().try_fold(0u64, |acc, digit| {
            acc.checked_mul(10)?.checked_add(digit as u64)
        })
    }

    /// Prepend zeros until the string is `target_len` digits long. Longer strings are returned unchanged.
    pub fn padded(&self, target_len: usize) -> Self {
        let target_len = target_len.min(MAX_DIGITS);
        if target_len <= self.len {
            return *self;
        }
        let zeros = target_len - self.len;
        let mut padded = Self::new();
        padded.buf[zeros..target_len].copy_from_slice(self.as_bytes());
        padded.len = target_len;
        padded
    }

    /// Get the number of digits.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check whether there are no digits at all.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Peek at the ASCII representation.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// Peek at the text representation.
    pub fn as_str(&self) -> &str {
        // Only ASCII digits are ever stored.
        std::str::from_utf8(self.as_bytes()).unwrap_or_default()
    }

    /// Get the numeric value of the digit at position `i`.
    pub fn digit(&self, i: usize) -> Option<u8> {
        self.as_bytes().get(i).map(|c| c - b'0')
    }

    /// Iterate over the numeric values of the digits.
    pub fn digits(&self) -> impl DoubleEndedIterator<Item = u8> + ExactSizeIterator + '_ {
        self.as_bytes().iter().map(|c| c - b'0')
    }

    /// Get the first digit.
    pub fn first(&self) -> Option<u8> {
        self.digit(0)
    }

    /// Get the last digit.
    pub fn last(&self) -> Option<u8> {
        self.len.checked_sub(1).and_then(|i| self.digit(i))
    }
}

impl Default for DigitString {
    fn default() -> Self {
        Self::new()
    }
}

impl std::ops::Deref for DigitString {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl AsRef<str> for DigitString {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for DigitString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::fmt::Debug for DigitString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DigitString({:?})", self.as_str())
    }
}

impl std::str::FromStr for DigitString {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for DigitString {
    type Error = InputError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<u64> for DigitString {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

/// Anything that can be read as a barcode's digits: text or an unsigned number.
pub trait AsDigits {
    /// Interpret `self` as a [DigitString].
    fn as_digits(&self) -> Result<DigitString, InputError>;
}

impl AsDigits for DigitString {
    fn as_digits(&self) -> Result<DigitString, InputError> {
        Ok(*self)
    }
}

impl AsDigits for str {
    fn as_digits(&self) -> Result<DigitString, InputError> {
        DigitString::parse(self)
    }
}

impl AsDigits for String {
    fn as_digits(&self) -> Result<DigitString, InputError> {
        DigitString::parse(self)
    }
}

impl AsDigits for u64 {
    fn as_digits(&self) -> Result<DigitString, InputError> {
        Ok(DigitString::from_u64(*self))
    }
}

impl<T: AsDigits + ?Sized> AsDigits for &T {
    fn as_digits(&self) -> Result<DigitString, InputError> {
        (**self).as_digits()
    }
}
