pub const FILE_EXT: &str = "txt";

/// Extensions routed to the hex array exporter when saving.
pub const HEX_EXTENSIONS: &[&str] = &["txt", "h"];

pub const ARRAY_OPEN: &str = "const uint16_t epd_bitmap_images [] PROGMEM = {\n";
pub const ARRAY_CLOSE: &str = "};\n";

pub const DEFAULT_MAX_DIMENSION: u32 = 32767;
pub const DEFAULT_WIDTH: u32 = 50;
pub const DEFAULT_HEIGHT: u32 = 50;
