//! CertiPadel Renderer
//!
//! Renders the fixed A4 certificate layout to RGBA pixels on the CPU and
//! encodes the result as JPEG. The same render routine serves both the
//! on-screen preview (down-scaled) and the export (pixel-ratio 2), so the
//! exported file always matches what the user saw.

pub mod fonts;
pub mod layout;
pub mod raster;
pub mod renderer;

pub use fonts::FontLibrary;
pub use layout::{EXPORT_PIXEL_RATIO, JPEG_QUALITY, PAGE_HEIGHT, PAGE_WIDTH, PREVIEW_SCALE};
pub use renderer::{CertificateRenderer, RenderError};
