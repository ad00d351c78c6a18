pub mod decoder;
pub mod encoder;
pub mod format;

pub use decoder::{from_dynamic, load, load_fitted, Fit, IngestError};
pub use encoder::{to_rgb_image, write};
pub use format::RasterFormat;
