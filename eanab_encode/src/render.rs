use std::io::Write;

use crate::Bitmap;

/// Prints a [Bitmap] as text, one pattern per pixel.
pub struct AsciiRenderer {
    space_pattern: Box<str>,
    bar_pattern: Box<str>,
}

impl AsciiRenderer {
    /// Construct a new [AsciiRenderer] that uses "█" to render dark pixels and " " to print light ones.
    pub fn new() -> Self {
        Self {
            space_pattern: " ".into(),
            bar_pattern: "█".into(),
        }
    }

    /// Set the light pixel `pattern` to be used when rendering.
    pub fn with_space_pattern(mut self, pattern: &str) -> Self {
        self.space_pattern = pattern.into();
        self
    }

    /// Set the dark pixel `pattern` to be used when rendering.
    pub fn with_bar_pattern(mut self, pattern: &str) -> Self {
        self.bar_pattern = pattern.into();
        self
    }

    /// Invert the light and dark patterns, for terminals with light text on a dark background.
    pub fn inverted(mut self) -> Self {
        std::mem::swap(&mut self.space_pattern, &mut self.bar_pattern);
        self
    }

    /// Peek at the pattern used to render light pixels.
    pub fn space_pattern(&self) -> &str {
        self.space_pattern.as_ref()
    }

    /// Peek at the pattern used to render dark pixels.
    pub fn bar_pattern(&self) -> &str {
        self.bar_pattern.as_ref()
    }

    /// Render the `bitmap` into `output`.
    pub fn render<B, W>(&self, output: &mut W, bitmap: B) -> std::io::Result<()>
    where
        B: AsRef<Bitmap>,
        W: Write,
    {
        let bitmap = bitmap.as_ref();
        for row in (0..bitmap.height()).filter_map(|y| bitmap.row(y)) {
            for bit in row {
                let pattern = match *bit {
                    true => self.bar_pattern(),
                    false => self.space_pattern(),
                };
                write!(output, "{}", pattern)?;
            }
            writeln!(output)?;
        }
        Ok(())
    }

    /// Render the `bitmap` into a new string.
    pub fn render_to_string<B: AsRef<Bitmap>>(&self, bitmap: B) -> String {
        let mut output = Vec::new();
        // Writing into memory cannot fail.
        let _ = self.render(&mut output, bitmap);
        String::from_utf8_lossy(&output).into_owned()
    }
}

impl Default for AsciiRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl AsRef<Bitmap> for Bitmap {
    fn as_ref(&self) -> &Bitmap {
        self
    }
}

#[cfg(test)]
mod test {
    use eanab_core::{Canvas, Color, Module};

    use super::*;

    #[test]
    fn test_render_rows() {
        let mut bitmap = Bitmap::filled(3, 2, Module::Space);
        bitmap.fill_rect(1, 0, 1, 2, Color::BLACK);
        let renderer = AsciiRenderer::new().with_bar_pattern("#").with_space_pattern(".");
        assert_eq!(renderer.render_to_string(&bitmap), ".#.\n.#.\n");
        assert_eq!(renderer.inverted().render_to_string(&bitmap), "#.#\n#.#\n");
    }
}
