mod bitmap;
mod encode;
pub mod font;
mod paint;
pub mod patterns;
mod render;

pub use bitmap::Bitmap;
pub use encode::{Element, ElementKind, EncodedSymbol, Encoder, EncodingError};
pub use paint::{Painter, RenderConfig, MAX_SCALE};
pub use patterns::{Parity, Pattern};
pub use render::AsciiRenderer;
