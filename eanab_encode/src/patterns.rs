use bitvec::{order::Msb0, slice::BitSlice, view::BitView};

use eanab_core::Module;

const DIGIT_WIDTH: u8 = 7;

/// A run of at most 8 modules packed in the low bits of a byte, first module in the most significant used bit.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pattern {
    bits: u8,
    len: u8,
}

impl Pattern {
    /// Construct a pattern of `len` modules from the low bits of `bits`.
    /// # Example
    /// ```
    /// use eanab_encode::Pattern;
    /// assert_eq!(Pattern::new(0b0001101, 7).to_string(), "0001101");
    /// ```
    pub const fn new(bits: u8, len: u8) -> Self {
        assert!(len <= 8);
        let mask = if len == 8 { u8::MAX } else { (1 << len) - 1 };
        Self {
            bits: bits & mask,
            len,
        }
    }

    /// Get the number of modules.
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// Check whether the pattern has no modules.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// View the modules as bits, `1` being a bar.
    pub fn as_bits(&self) -> &BitSlice<u8, Msb0> {
        &self.bits.view_bits::<Msb0>()[(u8::BITS as usize - self.len())..]
    }

    /// Iterate over the modules from left to right.
    pub fn modules(&self) -> impl Iterator<Item = Module> + '_ {
        self.as_bits().iter().map(|bit| Module::from(*bit))
    }

    /// Get the pattern with every module inverted.
    /// # Example
    /// ```
    /// use eanab_encode::Pattern;
    /// assert_eq!(Pattern::new(0b0001101, 7).complement(), Pattern::new(0b1110010, 7));
    /// ```
    pub const fn complement(self) -> Self {
        Self::new(!self.bits, self.len)
    }

    /// Get the pattern read from right to left.
    /// # Example
    /// ```
    /// use eanab_encode::Pattern;
    /// assert_eq!(Pattern::new(0b1110010, 7).mirrored(), Pattern::new(0b0100111, 7));
    /// ```
    pub const fn mirrored(self) -> Self {
        if self.len == 0 {
            return self;
        }
        let shift = u8::BITS as u8 - self.len;
        Self::new(self.bits.reverse_bits() >> shift, self.len)
    }
}

impl std::fmt::Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for bit in self.as_bits() {
            f.write_str(if *bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Pattern({})", self)
    }
}

pub const START_GUARD: Pattern = Pattern::new(0b101, 3);
pub const MIDDLE_GUARD: Pattern = Pattern::new(0b01010, 5);
pub const END_GUARD: Pattern = Pattern::new(0b101, 3);
pub const UPCE_END_GUARD: Pattern = Pattern::new(0b010101, 6);

#[rustfmt::skip]
const L_PATTERNS: [u8; 10] = [
    0b0001101, 0b0011001, 0b0010011, 0b0111101, 0b0100011,
    0b0110001, 0b0101111, 0b0111011, 0b0110111, 0b0001011,
];

#[rustfmt::skip]
const G_PATTERNS: [u8; 10] = [
    0b0100111, 0b0110011, 0b0011011, 0b0100001, 0b0011101,
    0b0111001, 0b0000101, 0b0010001, 0b0001001, 0b0010111,
];

/// Set of digit patterns a digit is encoded with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parity {
    /// Odd parity, left-hand digits.
    L,
    /// Even parity, left-hand digits.
    G,
    /// Right-hand digits, the complement of [Parity::L].
    R,
}

impl Parity {
    /// Get the pattern of `digit`.
    /// # Panics
    /// Panics if `digit` is not a decimal digit.
    pub fn pattern(self, digit: u8) -> Pattern {
        let l = Pattern::new(L_PATTERNS[digit as usize], DIGIT_WIDTH);
        match self {
            Parity::L => l,
            Parity::G => Pattern::new(G_PATTERNS[digit as usize], DIGIT_WIDTH),
            Parity::R => l.complement(),
        }
    }
}

impl From<bool> for Parity {
    /// `true` selects [Parity::G], as flagged in the parity tables.
    fn from(value: bool) -> Self {
        match value {
            true => Parity::G,
            false => Parity::L,
        }
    }
}

/// Number of left-hand digits whose parity is chosen from a table.
pub const PARITY_RUN: usize = 6;

/// EAN-13 parities of digits 2 to 7 keyed by the first digit, a set bit meaning [Parity::G].
#[rustfmt::skip]
const EAN13_PARITIES: [u8; 10] = [
    0b000000, 0b001011, 0b001101, 0b001110, 0b010011,
    0b011001, 0b011100, 0b010101, 0b010110, 0b011010,
];

/// UPC-E parities of the 6 encoded digits for number system 0 keyed by the check digit.
#[rustfmt::skip]
const UPCE_ZERO_PARITIES: [u8; 10] = [
    0b111000, 0b110100, 0b110010, 0b110001, 0b101100,
    0b100110, 0b100011, 0b101010, 0b101001, 0b100101,
];

fn parity_run(flags: u8) -> [Parity; PARITY_RUN] {
    let bits = &flags.view_bits::<Msb0>()[(u8::BITS as usize - PARITY_RUN)..];
    std::array::from_fn(|i| Parity::from(bits[i]))
}

/// Get the parities of EAN-13 digits 2 to 7, given the `first` digit which is never drawn as bars.
/// # Example
/// ```
/// use eanab_encode::{patterns::ean13_parities, Parity::{G, L}};
/// assert_eq!(ean13_parities(4), [L, G, L, L, G, G]);
/// ```
pub fn ean13_parities(first: u8) -> [Parity; PARITY_RUN] {
    parity_run(EAN13_PARITIES[first as usize])
}

/// Get the parities of the 6 encoded UPC-E digits given the `number_system` (first digit) and the `check` digit.
/// Number system 0 uses its own table, any other the complementary one.
/// # Example
/// ```
/// use eanab_encode::{patterns::upce_parities, Parity::{G, L}};
/// assert_eq!(upce_parities(0, 5), [G, L, L, G, G, L]);
/// assert_eq!(upce_parities(1, 5), [L, G, G, L, L, G]);
/// ```
pub fn upce_parities(number_system: u8, check: u8) -> [Parity; PARITY_RUN] {
    let zero = UPCE_ZERO_PARITIES[check as usize];
    let flags = match number_system {
        0 => zero,
        _ => !zero,
    };
    parity_run(flags)
}
