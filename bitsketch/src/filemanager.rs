use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use lib_bitsketch::constants::FILE_EXT;
use lib_bitsketch::convert::{self, ConvertError, ConvertOptions};
use lib_bitsketch::{Fit, Limits};
use log::info;

/// `photo.png` -> `photo.txt`, next to the input.
pub fn default_output(input: &Path) -> PathBuf {
    input.with_extension(FILE_EXT)
}

/// Reads an edit script from `path`, or from stdin when no path is given.
pub fn read_script(path: Option<&Path>) -> io::Result<String> {
    match path {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

pub fn convert_image(
    input: &Path,
    output: Option<&Path>,
    target: Option<(u32, u32)>,
    fit: Fit,
    limits: Limits,
) -> Result<PathBuf, ConvertError> {
    let output = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| default_output(input));

    let options = ConvertOptions {
        target,
        fit,
        limits,
    };

    let (width, height) = convert::image_to_hex(input, &output, &options)?;
    info!("Wrote {}x{} array to {}", width, height, output.display());
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lib_bitsketch::PixelBuffer;

    #[test]
    fn test_default_output() {
        assert_eq!(
            default_output(Path::new("art/photo.png")),
            PathBuf::from("art/photo.txt")
        );
        assert_eq!(default_output(Path::new("sprite")), PathBuf::from("sprite.txt"));
    }

    #[test]
    fn test_convert_image_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let result = convert_image(
            &dir.path().join("missing.png"),
            None,
            None,
            Fit::default(),
            Limits::default(),
        );
        assert!(result.is_err());
        assert!(!dir.path().join("missing.txt").exists());
    }

    fn write_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
        let path = dir.join(name);
        let buffer = PixelBuffer::create(width, height).unwrap();
        lib_bitsketch::raster::write(&buffer, &path).unwrap();
        path
    }

    #[test]
    fn test_convert_image_writes_default_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_png(dir.path(), "sprite.png", 3, 2);

        let output = convert_image(&input, None, None, Fit::default(), Limits::default()).unwrap();
        assert_eq!(output, dir.path().join("sprite.txt"));
        assert_eq!(
            std::fs::read_to_string(&output).unwrap(),
            concat!(
                "const uint16_t epd_bitmap_images [] PROGMEM = {\n",
                "0xffff, 0xffff, 0xffff,\n",
                "0xffff, 0xffff, 0xffff,\n",
                "};\n"
            )
        );
    }

    #[test]
    fn test_convert_image_explicit_output_and_target() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_png(dir.path(), "sprite.png", 6, 6);
        let wanted = dir.path().join("panel.h");

        let output = convert_image(
            &input,
            Some(&wanted),
            Some((2, 1)),
            Fit::Resize,
            Limits::default(),
        )
        .unwrap();
        assert_eq!(output, wanted);
        assert_eq!(std::fs::read_to_string(&output).unwrap().lines().count(), 3);
        assert!(!dir.path().join("sprite.txt").exists());
    }

    #[test]
    fn test_fit_flag_parsing() {
        assert_eq!("crop".parse::<Fit>(), Ok(Fit::Crop));
        assert_eq!("Resize".parse::<Fit>(), Ok(Fit::Resize));
        assert!("stretch".parse::<Fit>().is_err());
        assert_eq!(Fit::default().to_string(), "crop");
    }
}
