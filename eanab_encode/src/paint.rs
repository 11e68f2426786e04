use eanab_core::{detect_type, AsDigits, Barcode, BarcodeStandard, Canvas, Color, Module};

use crate::encode::{Element, ElementKind, EncodedSymbol, Encoder, EncodingError};
use crate::patterns::{Parity, Pattern};

/// Largest scale that keeps every coordinate of a symbol within 16 bit display drivers.
pub const MAX_SCALE: u16 = 20;
/// Quiet zone around the symbol, in modules.
const QUIET_ZONE: i64 = 5;
/// Gap between the bars and the human-readable digits, in modules.
const DIGIT_GAP: i64 = 3;

/// How barcodes are painted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    scale: u16,
    show_digits: bool,
    background: Color,
    bar: Color,
    pad_with_leading_zeros: bool,
}

impl RenderConfig {
    /// Construct the default configuration: scale 1, digits shown, black bars on white, padding enabled.
    pub fn new() -> Self {
        Self {
            scale: 1,
            show_digits: true,
            background: Color::WHITE,
            bar: Color::BLACK,
            pad_with_leading_zeros: true,
        }
    }

    /// Set the width in pixels of a module, clamped to `1..=MAX_SCALE`.
    /// # Example
    /// ```
    /// use eanab_encode::RenderConfig;
    /// assert_eq!(RenderConfig::new().with_scale(0).scale(), 1);
    /// assert_eq!(RenderConfig::new().with_scale(100).scale(), 20);
    /// ```
    pub fn with_scale(mut self, scale: u16) -> Self {
        self.scale = scale.clamp(1, MAX_SCALE);
        self
    }

    /// Show or hide the human-readable digits.
    pub fn with_show_digits(mut self, show_digits: bool) -> Self {
        self.show_digits = show_digits;
        self
    }

    /// Set the `background` and `bar` colors.
    pub fn with_colors(mut self, background: Color, bar: Color) -> Self {
        self.background = background;
        self.bar = bar;
        self
    }

    /// Set the background color.
    pub fn with_background_color(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    /// Set the bar and digit color.
    pub fn with_bar_color(mut self, color: Color) -> Self {
        self.bar = color;
        self
    }

    /// Enable or disable padding inputs with leading zeros before validation.
    pub fn with_padding(mut self, pad_with_leading_zeros: bool) -> Self {
        self.pad_with_leading_zeros = pad_with_leading_zeros;
        self
    }

    /// Get the width in pixels of a module.
    pub fn scale(&self) -> u16 {
        self.scale
    }

    /// Check whether the human-readable digits are shown.
    pub fn show_digits(&self) -> bool {
        self.show_digits
    }

    /// Get the background color.
    pub fn background_color(&self) -> Color {
        self.background
    }

    /// Get the bar and digit color.
    pub fn bar_color(&self) -> Color {
        self.bar
    }

    /// Check whether inputs are padded with leading zeros before validation.
    pub fn pad_with_leading_zeros(&self) -> bool {
        self.pad_with_leading_zeros
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Paints barcodes on a [Canvas].
pub struct Painter<C> {
    canvas: C,
    config: RenderConfig,
}

impl<C: Canvas> Painter<C> {
    /// Create a new [Painter] with the default configuration.
    pub fn new(canvas: C) -> Self {
        Self {
            canvas,
            config: RenderConfig::new(),
        }
    }

    /// Replace the whole configuration.
    pub fn with_config(mut self, config: RenderConfig) -> Self {
        self.config = config;
        self
    }

    /// Peek at the configuration.
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Peek at the canvas.
    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    /// Get a mutable reference to the canvas.
    pub fn canvas_mut(&mut self) -> &mut C {
        &mut self.canvas
    }

    /// Give the canvas back.
    pub fn into_canvas(self) -> C {
        self.canvas
    }

    /// Set the width in pixels of a module, clamped to `1..=MAX_SCALE`.
    pub fn set_scale(&mut self, scale: u16) -> &mut Self {
        self.config.scale = scale.clamp(1, MAX_SCALE);
        self
    }

    /// Get the width in pixels of a module.
    pub fn scale(&self) -> u16 {
        self.config.scale
    }

    /// Show or hide the human-readable digits.
    pub fn set_show_digits(&mut self, show_digits: bool) -> &mut Self {
        self.config.show_digits = show_digits;
        self
    }

    /// Check whether the human-readable digits are shown.
    pub fn show_digits(&self) -> bool {
        self.config.show_digits
    }

    /// Set the `background` and `bar` colors.
    pub fn set_colors(&mut self, background: Color, bar: Color) -> &mut Self {
        self.config.background = background;
        self.config.bar = bar;
        self
    }

    /// Set the background color.
    pub fn set_background_color(&mut self, color: Color) -> &mut Self {
        self.config.background = color;
        self
    }

    /// Get the background color.
    pub fn background_color(&self) -> Color {
        self.config.background
    }

    /// Set the bar and digit color.
    pub fn set_bar_color(&mut self, color: Color) -> &mut Self {
        self.config.bar = color;
        self
    }

    /// Get the bar and digit color.
    pub fn bar_color(&self) -> Color {
        self.config.bar
    }

    /// Enable or disable padding inputs with leading zeros before validation.
    pub fn set_pad_with_leading_zeros(&mut self, pad_with_leading_zeros: bool) -> &mut Self {
        self.config.pad_with_leading_zeros = pad_with_leading_zeros;
        self
    }

    /// Check whether inputs are padded with leading zeros before validation.
    pub fn pad_with_leading_zeros(&self) -> bool {
        self.config.pad_with_leading_zeros
    }

    /// Draw `input` with its upper-left corner at (`x`, `y`), detecting the standard if it is
    /// [BarcodeStandard::Unknown]. Returns `false` without touching the canvas if `input` is not a valid barcode.
    pub fn draw<T: AsDigits>(&mut self, input: T, x: i32, y: i32, height: u32, standard: BarcodeStandard) -> bool {
        self.try_draw(input, x, y, height, standard).is_ok()
    }

    /// Like [Painter::draw], but reporting why `input` could not be drawn.
    pub fn try_draw<T: AsDigits>(
        &mut self,
        input: T,
        x: i32,
        y: i32,
        height: u32,
        standard: BarcodeStandard,
    ) -> Result<EncodedSymbol, EncodingError> {
        let barcode = Barcode::resolve(input, standard, self.config.pad_with_leading_zeros)?;
        let symbol = Encoder::encode_barcode(&barcode);
        self.paint(&symbol, x, y, height);
        Ok(symbol)
    }

    /// Get the width in pixels `input` would be drawn with. Detection always pads with leading zeros.
    pub fn width<T: AsDigits>(&self, input: T) -> u32 {
        self.width_for(detect_type(input, true))
    }

    /// Get the width in pixels of a symbol of `standard`, quiet zones and outer digits included. Returns 0 for
    /// [BarcodeStandard::Unknown].
    pub fn width_for(&self, standard: BarcodeStandard) -> u32 {
        if !standard.is_known() {
            return 0;
        }
        let scale = self.config.scale as u32;
        let (digit_width, _) = self.digit_size();
        let mut width = 2 * QUIET_ZONE as u32 * scale + standard.module_count() as u32 * scale;
        if self.config.show_digits {
            let outer_digits = standard.outer_digit_count() as u32;
            width = width.saturating_add(outer_digits.saturating_mul(digit_width.saturating_add(scale)));
        }
        width
    }

    /// Paint an encoded `symbol`: background, then bars from left to right, then the human-readable digits.
    ///
    /// Parts of the symbol that fall outside of the coordinate range of the canvas are clipped.
    pub fn paint(&mut self, symbol: &EncodedSymbol, x: i32, y: i32, height: u32) {
        let scale = i64::from(self.config.scale);
        let (x, y, height) = (i64::from(x), i64::from(y), i64::from(height));
        let width = i64::from(self.width_for(symbol.standard()));
        self.fill(x, y, width, height, self.config.background);

        let padding = QUIET_ZONE * scale;
        let (digit_width, digit_height) = self.digit_size();
        let (digit_width, digit_height) = (i64::from(digit_width), i64::from(digit_height));
        let bar_y = y + padding;
        let number_y = y + height - padding - digit_height;
        let mut bar_height = number_y - bar_y - DIGIT_GAP * scale;
        let mut long_bar_height = bar_height + DIGIT_GAP * scale + digit_height / 2;
        if !self.config.show_digits {
            bar_height += DIGIT_GAP * scale;
            long_bar_height = bar_height;
        }

        let mut glyphs = Vec::with_capacity(symbol.standard().number_of_digits());
        let mut cursor = x + padding;
        if let Some(digit) = symbol.leading_digit().filter(|_| self.config.show_digits) {
            glyphs.push((digit, cursor));
            cursor += digit_width;
        }
        for element in symbol.elements() {
            let element_height = if element.long { long_bar_height } else { bar_height };
            self.paint_pattern(&element.pattern, cursor, bar_y, element_height);
            if let Some(offset) = glyph_offset(element, scale) {
                glyphs.push((element.digit().unwrap_or_default(), cursor + offset));
            }
            cursor += element.pattern.len() as i64 * scale;
        }
        if let Some(digit) = symbol.trailing_digit() {
            glyphs.push((digit, cursor + scale));
        }

        if self.config.show_digits {
            for (digit, glyph_x) in glyphs {
                self.paint_digit(digit, glyph_x, number_y);
            }
        }
    }

    fn paint_pattern(&mut self, pattern: &Pattern, x: i64, y: i64, height: i64) {
        let scale = i64::from(self.config.scale);
        for (i, module) in pattern.modules().enumerate() {
            if module == Module::Bar {
                self.fill(x + i as i64 * scale, y, scale, height, self.config.bar);
            }
        }
    }

    /// Print `digit` at (`x`, `y`). Glyphs whose position the canvas cannot address are skipped.
    fn paint_digit(&mut self, digit: u8, x: i64, y: i64) {
        let (Ok(x), Ok(y)) = (i32::try_from(x), i32::try_from(y)) else {
            return;
        };
        self.canvas.set_text_size(self.config.scale);
        self.canvas.set_text_color(self.config.bar);
        self.canvas.set_cursor(x, y);
        self.canvas.set_text_wrap(false);
        self.canvas.print_char(char::from(b'0' + digit));
    }

    /// Fill the part of a rectangle that lies within the coordinate range of the canvas. Empty rectangles are not
    /// painted.
    fn fill(&mut self, x: i64, y: i64, width: i64, height: i64, color: Color) {
        if width <= 0 || height <= 0 {
            return;
        }
        let (xmin, xmax) = clip_span(x, width);
        let (ymin, ymax) = clip_span(y, height);
        if xmin >= xmax || ymin >= ymax {
            return;
        }
        let extent = |min: i64, max: i64| u32::try_from(max - min).unwrap_or(u32::MAX);
        self.canvas
            .fill_rect(xmin as i32, ymin as i32, extent(xmin, xmax), extent(ymin, ymax), color);
    }

    /// Get the pixel size of a digit glyph, or nothing if digits are hidden.
    fn digit_size(&self) -> (u32, u32) {
        if self.config.show_digits {
            self.canvas.char_bounds('0', self.config.scale)
        } else {
            (0, 0)
        }
    }
}

/// Clip the span of `len` pixels starting at `start` to the `i32` coordinate range, returning its bounds with the
/// end excluded.
fn clip_span(start: i64, len: i64) -> (i64, i64) {
    let (min, max) = (i64::from(i32::MIN), i64::from(i32::MAX));
    (start.clamp(min, max), start.saturating_add(len).clamp(min, max + 1))
}

/// Get the horizontal offset of the glyph printed below a digit element, if it has one. Long digits have their glyph
/// printed outside of the bars.
fn glyph_offset(element: &Element, scale: i64) -> Option<i64> {
    match element.kind {
        ElementKind::Digit { parity, .. } if !element.long => match parity {
            Parity::L | Parity::G => Some(scale * 3 / 2),
            Parity::R => Some(scale / 2),
        },
        _ => None,
    }
}
