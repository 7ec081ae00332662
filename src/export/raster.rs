//! Rasterize multi-line text to an RGB image.
//!
//! The image is exactly large enough for the longest line and all lines at
//! the configured scale, plus padding on every side.

use std::fs;
use std::io;
use std::path::Path;

use image::{ImageFormat, Rgb, RgbImage};

use super::font::{self, BoxStrokes, Glyph, ADVANCE, GLYPH_TOP, GLYPH_WIDTH, LINE_HEIGHT, STROKE_X, STROKE_Y};
use crate::core::ImageConfig;
use crate::error::ExportError;

/// Largest width or height, in pixels, the exporter will produce.
pub const MAX_IMAGE_SIDE: u32 = 1 << 15;

/// Pixel size `(width, height)` needed to draw `text`.
///
/// Fails with [`ExportError::TooLarge`] when either side would exceed
/// [`MAX_IMAGE_SIDE`].
pub fn measure(text: &str, config: &ImageConfig) -> Result<(u32, u32), ExportError> {
    let scale = u64::from(config.scale.max(1));
    let padding = u64::from(config.padding);
    let columns = text.lines().map(|line| line.chars().count()).max().unwrap_or(0) as u64;
    let rows = text.lines().count() as u64;

    let side = |cells: u64, cell_size: u32| {
        cells
            .saturating_mul(u64::from(cell_size) * scale)
            .saturating_add(2 * padding)
            .max(1)
    };
    let width = side(columns, ADVANCE);
    let height = side(rows, LINE_HEIGHT);

    match (u32::try_from(width), u32::try_from(height)) {
        (Ok(w), Ok(h)) if w <= MAX_IMAGE_SIDE && h <= MAX_IMAGE_SIDE => Ok((w, h)),
        _ => Err(ExportError::TooLarge { width, height }),
    }
}

/// Draw `text` onto a fresh image.
pub fn text_to_image(text: &str, config: &ImageConfig) -> Result<RgbImage, ExportError> {
    let scale = config.scale.max(1);
    let (width, height) = measure(text, config)?;
    let mut img = RgbImage::from_pixel(width, height, Rgb(config.background));
    let ink = Rgb(config.foreground);

    for (line_index, line) in text.lines().enumerate() {
        let cell_y = config.padding + line_index as u32 * LINE_HEIGHT * scale;
        for (col_index, c) in line.chars().enumerate() {
            let cell_x = config.padding + col_index as u32 * ADVANCE * scale;
            let mut cell = Cell {
                img: &mut img,
                x: cell_x,
                y: cell_y,
                scale,
                ink,
            };
            match font::glyph(c) {
                Glyph::Bitmap(rows) => cell.draw_bitmap(&rows),
                Glyph::Box(strokes) => cell.draw_box(strokes),
                Glyph::Blank => {}
            }
        }
    }

    Ok(img)
}

/// Read a text file and write it out as a PNG.
///
/// Returns the image size on success.
pub fn export_file(text_path: &Path, image_path: &Path, config: &ImageConfig) -> Result<(u32, u32), ExportError> {
    let text = fs::read_to_string(text_path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => ExportError::MissingInput(text_path.to_path_buf()),
        _ => ExportError::Read {
            path: text_path.to_path_buf(),
            source,
        },
    })?;

    let img = text_to_image(&text, config)?;
    img.save_with_format(image_path, ImageFormat::Png)
        .map_err(|source| ExportError::Encode {
            path: image_path.to_path_buf(),
            source,
        })?;

    log::info!(
        "rendered {} lines to {}x{} image at {}",
        text.lines().count(),
        img.width(),
        img.height(),
        image_path.display()
    );
    Ok(img.dimensions())
}

/// One character cell on the image, in unscaled font units.
struct Cell<'a> {
    img: &'a mut RgbImage,
    x: u32,
    y: u32,
    scale: u32,
    ink: Rgb<u8>,
}

impl Cell<'_> {
    fn draw_bitmap(&mut self, rows: &[u8]) {
        for (row_index, &bits) in rows.iter().enumerate() {
            for col in 0..GLYPH_WIDTH {
                if (bits >> (GLYPH_WIDTH - 1 - col)) & 1 == 1 {
                    self.plot(col, GLYPH_TOP + row_index as u32);
                }
            }
        }
    }

    fn draw_box(&mut self, strokes: BoxStrokes) {
        if strokes.left {
            (0..=STROKE_X).for_each(|x| self.plot(x, STROKE_Y));
        }
        if strokes.right {
            (STROKE_X..ADVANCE).for_each(|x| self.plot(x, STROKE_Y));
        }
        if strokes.up {
            (0..=STROKE_Y).for_each(|y| self.plot(STROKE_X, y));
        }
        if strokes.down {
            (STROKE_Y..LINE_HEIGHT).for_each(|y| self.plot(STROKE_X, y));
        }
    }

    /// Fill the `scale`×`scale` block for font pixel (`fx`, `fy`).
    ///
    /// `measure` has bounded every cell to the image, so the sums below
    /// stay under `MAX_IMAGE_SIDE`.
    fn plot(&mut self, fx: u32, fy: u32) {
        for dy in 0..self.scale {
            for dx in 0..self.scale {
                let px = self.x + fx * self.scale + dx;
                let py = self.y + fy * self.scale + dy;
                if px < self.img.width() && py < self.img.height() {
                    self.img.put_pixel(px, py, self.ink);
                }
            }
        }
    }
}
