use bitvec::{slice::BitSlice, vec::BitVec};

use eanab_core::{Canvas, Color, Module};

use crate::font;

/// A rectangular matrix of bits.
struct BitMatrix {
    data: BitVec,
    width: usize,
    height: usize,
}

impl BitMatrix {
    /// Return a matrix of size `width` x `height` filled with `value`.
    fn filled(width: usize, height: usize, value: bool) -> Self {
        Self {
            data: BitVec::repeat(value, width * height),
            width,
            height,
        }
    }

    /// Get the 1D index of the data array corresponding to position `(x, y)`, checking for validity.
    #[inline]
    fn linearized_index(&self, x: usize, y: usize) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(self.width * y + x)
        } else {
            None
        }
    }

    #[inline]
    fn get(&self, x: usize, y: usize) -> Option<bool> {
        self.data.get(self.linearized_index(x, y)?).map(|bit| *bit)
    }

    /// Set the bit at position `(x, y)`.
    /// # Panics
    /// Panics if position `(x, y)` is out of bounds.
    #[inline]
    fn set(&mut self, x: usize, y: usize, value: bool) {
        let index = self.linearized_index(x, y).unwrap_or_else(|| {
            panic!(
                "index out of bounds: the size is {}x{} but the index is ({}, {})",
                self.width, self.height, x, y
            )
        });
        self.data.set(index, value)
    }

    /// Get the `y`th row of the matrix.
    fn row(&self, y: usize) -> Option<&BitSlice> {
        let start = self.linearized_index(0, y)?;
        Some(&self.data[start..start + self.width])
    }

    /// Fill the part of the rectangle with its upper-left corner at (`x`, `y`) of size `width` and `height` that
    /// falls inside the matrix.
    fn fill_clipped(&mut self, value: bool, x: i64, y: i64, width: i64, height: i64) {
        let clamp_x = |v: i64| v.clamp(0, self.width as i64) as usize;
        let clamp_y = |v: i64| v.clamp(0, self.height as i64) as usize;
        let (xmin, xmax) = (clamp_x(x), clamp_x(x + width));
        let (ymin, ymax) = (clamp_y(y), clamp_y(y + height));
        if xmin >= xmax {
            return;
        }
        for line in ymin..ymax {
            let start = self.width * line;
            self.data[start + xmin..start + xmax].fill(value);
        }
    }
}

/// An in-memory monochrome [Canvas]. Pixels painted with a dark [Color] become [Module::Bar].
pub struct Bitmap {
    matrix: BitMatrix,
    cursor: (i32, i32),
    text_size: u16,
    text_color: Color,
    text_wrap: bool,
}

impl Bitmap {
    /// Return a bitmap of `width` x `height` pixels filled with `module`.
    pub fn filled(width: usize, height: usize, module: Module) -> Self {
        Self {
            matrix: BitMatrix::filled(width, height, module.into()),
            cursor: (0, 0),
            text_size: 1,
            text_color: Color::BLACK,
            text_wrap: true,
        }
    }

    /// Get the width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.matrix.width
    }

    /// Get the height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.matrix.height
    }

    /// Get the module at position `(x, y)`.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<Module> {
        self.matrix.get(x, y).map(Module::from)
    }

    /// Set the module at position `(x, y)`.
    /// # Panics
    /// Panics if position `(x, y)` is out of bounds.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, value: Module) {
        self.matrix.set(x, y, value.into())
    }

    /// Get the `y`th row, a set bit being a [Module::Bar].
    pub fn row(&self, y: usize) -> Option<&BitSlice> {
        self.matrix.row(y)
    }

    /// Get the text cursor position.
    pub fn cursor(&self) -> (i32, i32) {
        self.cursor
    }
}

impl Canvas for Bitmap {
    fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Color) {
        self.matrix
            .fill_clipped(color.is_dark(), x.into(), y.into(), width.into(), height.into())
    }

    fn set_text_size(&mut self, size: u16) {
        self.text_size = size.max(1);
    }

    fn set_text_color(&mut self, color: Color) {
        self.text_color = color;
    }

    fn set_cursor(&mut self, x: i32, y: i32) {
        self.cursor = (x, y);
    }

    fn set_text_wrap(&mut self, wrap: bool) {
        self.text_wrap = wrap;
    }

    fn print_char(&mut self, c: char) {
        let size = self.text_size as i32;
        let (cell_width, cell_height) = self.char_bounds(c, self.text_size);
        if c == '\n' {
            self.cursor = (0, self.cursor.1 + cell_height as i32);
            return;
        }
        if self.text_wrap && self.cursor.0 + cell_width as i32 > self.width() as i32 {
            self.cursor = (0, self.cursor.1 + cell_height as i32);
        }
        let (x, y) = self.cursor;
        if let Some(glyph) = font::glyph(c) {
            let dark = self.text_color.is_dark();
            for (i, column) in glyph.iter().enumerate() {
                for j in 0..font::CELL_HEIGHT as i32 {
                    if column >> j & 1 == 1 {
                        let (px, py) = (x + i as i32 * size, y + j * size);
                        self.matrix.fill_clipped(dark, px.into(), py.into(), size.into(), size.into());
                    }
                }
            }
        }
        self.cursor.0 += cell_width as i32;
    }

    fn char_bounds(&self, _c: char, size: u16) -> (u32, u32) {
        let size = size.max(1) as u32;
        (font::CELL_WIDTH * size, font::CELL_HEIGHT * size)
    }
}
