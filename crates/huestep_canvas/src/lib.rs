//! huestep_canvas - palette card layout, interaction and rasterization
//!
//! The card layout lives in preview space and is rendered at any pixel size
//! through one code path, so the exported PNG is a scaled copy of the preview.
//! Also renders the glass marbles shown per day.

pub mod card;
pub mod compositor;
pub mod error;
pub mod geometry;
pub mod interaction;
pub mod layout;
pub mod marble;
pub mod raster;
pub mod source;
pub mod text;

#[cfg(test)]
mod tests;

pub use card::{truncate_name, CardGeometry, TextLine};
pub use compositor::{encode_png, export_filename, CardRequest, PaletteCompositor};
pub use error::{ImageLoadError, RenderError, RenderResult};
pub use geometry::{Point, Rectangle};
pub use interaction::{CardInteraction, DragState, DragTarget, PointerEvent};
pub use layout::{PaletteCardLayout, EXPORT_SIZE, PREVIEW_SIZE};
pub use marble::render_marble;
pub use source::ImageSource;
