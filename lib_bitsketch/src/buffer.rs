use log::debug;
use thiserror::Error;

use crate::color::Color;
use crate::constants::DEFAULT_MAX_DIMENSION;
use crate::rgb565;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BufferError {
    #[error("invalid canvas size {width}x{height}: each side must be between 1 and {max}")]
    InvalidDimension { width: u32, height: u32, max: u32 },
    #[error("coordinates ({x}, {y}) are out of bounds for a {width}x{height} canvas")]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },
}

/// Upper bound on canvas size, checked on every create and resize.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Limits {
    pub max_dimension: u32,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_dimension: DEFAULT_MAX_DIMENSION,
        }
    }
}

impl Limits {
    pub fn new(max_dimension: u32) -> Self {
        Self { max_dimension }
    }

    pub fn check(&self, width: u32, height: u32) -> Result<(), BufferError> {
        let valid = |side: u32| side > 0 && side <= self.max_dimension;
        if valid(width) && valid(height) {
            Ok(())
        } else {
            Err(BufferError::InvalidDimension {
                width,
                height,
                max: self.max_dimension,
            })
        }
    }
}

/// A dense, row-major grid of colors. Every cell always holds a color.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
    limits: Limits,
}

impl PixelBuffer {
    /// Creates a white canvas under the default size limits.
    pub fn create(width: u32, height: u32) -> Result<Self, BufferError> {
        Self::with_limits(width, height, Color::WHITE, Limits::default())
    }

    pub fn with_limits(
        width: u32,
        height: u32,
        fill: Color,
        limits: Limits,
    ) -> Result<Self, BufferError> {
        limits.check(width, height)?;

        Ok(Self {
            width,
            height,
            pixels: vec![fill; width as usize * height as usize],
            limits,
        })
    }

    /// Wraps existing row-major pixel data. `pixels` must hold exactly
    /// `width * height` entries.
    pub fn from_pixels(
        width: u32,
        height: u32,
        pixels: Vec<Color>,
        limits: Limits,
    ) -> Result<Self, BufferError> {
        limits.check(width, height)?;

        if pixels.len() != width as usize * height as usize {
            return Err(BufferError::InvalidDimension {
                width,
                height,
                max: limits.max_dimension,
            });
        }

        Ok(Self {
            width,
            height,
            pixels,
            limits,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn limits(&self) -> Limits {
        self.limits
    }

    pub fn contains(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height
    }

    fn index(&self, x: u32, y: u32) -> Result<usize, BufferError> {
        if !self.contains(x, y) {
            return Err(BufferError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }

        Ok(y as usize * self.width as usize + x as usize)
    }

    pub fn get(&self, x: u32, y: u32) -> Result<Color, BufferError> {
        let index = self.index(x, y)?;
        Ok(self.pixels[index])
    }

    pub fn set(&mut self, x: u32, y: u32, color: Color) -> Result<(), BufferError> {
        let index = self.index(x, y)?;
        self.pixels[index] = color;
        Ok(())
    }

    pub fn fill(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    /// Returns a new buffer of the requested size. The overlapping top-left
    /// region is copied, everything else is white.
    pub fn resize(&self, new_width: u32, new_height: u32) -> Result<PixelBuffer, BufferError> {
        let mut resized = Self::with_limits(new_width, new_height, Color::WHITE, self.limits)?;

        let keep_width = self.width.min(new_width) as usize;
        for (old_row, new_row) in self
            .rows()
            .zip(resized.pixels.chunks_exact_mut(new_width as usize))
        {
            new_row[..keep_width].copy_from_slice(&old_row[..keep_width]);
        }

        debug!(
            "Resized canvas {}x{} -> {}x{}",
            self.width, self.height, new_width, new_height
        );
        Ok(resized)
    }

    pub fn as_slice(&self) -> &[Color] {
        &self.pixels
    }

    /// Rows in increasing `y` order.
    pub fn rows(&self) -> impl Iterator<Item = &[Color]> {
        self.pixels.chunks_exact(self.width as usize)
    }

    /// `(x, y, color)` for every cell, row-major.
    pub fn pixels(&self) -> impl Iterator<Item = (u32, u32, Color)> + '_ {
        let width = self.width;
        self.pixels.iter().enumerate().map(move |(index, &color)| {
            let index = index as u32;
            (index % width, index / width, color)
        })
    }

    /// A copy with every pixel reduced to what an RGB565 panel displays.
    pub fn quantized(&self) -> PixelBuffer {
        Self {
            pixels: self.pixels.iter().map(|&c| rgb565::quantize(c)).collect(),
            ..self.clone()
        }
    }
}
