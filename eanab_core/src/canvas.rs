/// Module (aka, the narrowest bar or space) of a barcode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Module {
    Space,
    Bar,
}

impl Module {
    /// Get the inverted module.
    /// # Example
    /// ```
    /// use eanab_core::Module;
    /// assert_eq!(Module::Bar.inverted(), Module::Space);
    /// assert_eq!(Module::Space.inverted(), Module::Bar);
    /// ```
    pub fn inverted(&self) -> Self {
        match self {
            Module::Bar => Module::Space,
            Module::Space => Module::Bar,
        }
    }
}

impl From<bool> for Module {
    fn from(value: bool) -> Self {
        match value {
            true => Module::Bar,
            false => Module::Space,
        }
    }
}

impl From<Module> for bool {
    fn from(value: Module) -> Self {
        match value {
            Module::Bar => true,
            Module::Space => false,
        }
    }
}

/// 16 bit RGB565 color, as used by small display drivers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color(pub u16);

impl Color {
    pub const BLACK: Color = Color(0x0000);
    pub const WHITE: Color = Color(0xFFFF);

    /// Construct a color from 8 bit channels, dropping the low bits.
    /// # Example
    /// ```
    /// use eanab_core::Color;
    /// assert_eq!(Color::from_rgb(255, 255, 255), Color::WHITE);
    /// assert_eq!(Color::from_rgb(255, 0, 0), Color(0xF800));
    /// ```
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Color(((r as u16 >> 3) << 11) | ((g as u16 >> 2) << 5) | (b as u16 >> 3))
    }

    /// Split into 8 bit channels.
    pub const fn to_rgb(self) -> (u8, u8, u8) {
        let r = ((self.0 >> 11) & 0x1F) as u8;
        let g = ((self.0 >> 5) & 0x3F) as u8;
        let b = (self.0 & 0x1F) as u8;
        ((r << 3) | (r >> 2), (g << 2) | (g >> 4), (b << 3) | (b >> 2))
    }

    /// Check whether the color reads as dark, i.e. its luma is below half intensity.
    /// # Example
    /// ```
    /// use eanab_core::Color;
    /// assert!(Color::BLACK.is_dark());
    /// assert!(!Color::WHITE.is_dark());
    /// assert!(Color::from_rgb(0, 0, 255).is_dark());
    /// ```
    pub fn is_dark(self) -> bool {
        let (r, g, b) = self.to_rgb();
        let luma = 299 * r as u32 + 587 * g as u32 + 114 * b as u32;
        luma < 128 * 1000
    }
}

impl From<u16> for Color {
    fn from(value: u16) -> Self {
        Color(value)
    }
}

impl From<Color> for u16 {
    fn from(value: Color) -> Self {
        value.0
    }
}

/// A drawing surface barcodes are painted on, usually provided by a display driver.
///
/// Coordinates are in pixels with the origin at the top-left corner. Implementations are free to clip anything
/// falling outside of the surface.
pub trait Canvas {
    /// Fill the rectangle with its upper-left corner at (`x`, `y`) of size `width` and `height` with `color`.
    fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Color);

    /// Set the magnification factor of text glyphs.
    fn set_text_size(&mut self, size: u16);

    /// Set the color of text glyphs.
    fn set_text_color(&mut self, color: Color);

    /// Move the text cursor, i.e. the upper-left corner of the next glyph.
    fn set_cursor(&mut self, x: i32, y: i32);

    /// Enable or disable wrapping of text at the right edge.
    fn set_text_wrap(&mut self, wrap: bool);

    /// Print a glyph at the cursor and advance it.
    fn print_char(&mut self, c: char);

    /// Get the width and height in pixels of the bounding box of `c` when printed with text size `size`.
    fn char_bounds(&self, c: char, size: u16) -> (u32, u32);
}

impl<C: Canvas + ?Sized> Canvas for &mut C {
    fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Color) {
        (**self).fill_rect(x, y, width, height, color)
    }

    fn set_text_size(&mut self, size: u16) {
        (**self).set_text_size(size)
    }

    fn set_text_color(&mut self, color: Color) {
        (**self).set_text_color(color)
    }

    fn set_cursor(&mut self, x: i32, y: i32) {
        (**self).set_cursor(x, y)
    }

    fn set_text_wrap(&mut self, wrap: bool) {
        (**self).set_text_wrap(wrap)
    }

    fn print_char(&mut self, c: char) {
        (**self).print_char(c)
    }

    fn char_bounds(&self, c: char, size: u16) -> (u32, u32) {
        (**self).char_bounds(c, size)
    }
}
