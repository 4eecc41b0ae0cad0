extern crate image;
extern crate ndarray;
extern crate rand;

use image::{GrayImage, Luma};
use ndarray::Array2;
use rand::Rng;

use crate::{RdsError, RdsResult};

static DEFAULT_LEVELS: i32 = 24;
static FOOTER_ROWS: u32 = 10;
static MARK_WIDTH: u32 = 3;

/// Generation settings: depth levels and viewing mode.
#[derive(Clone, Copy, Debug)]
pub struct RdsOptions {
    /// Maximum horizontal disparity in pixels. Negative values are rejected.
    pub levels: i32,
    /// Lay out the halves for parallel viewing instead of cross-eyed.
    pub parallel: bool,
}

impl Default for RdsOptions {
    fn default() -> Self {
        RdsOptions {
            levels: DEFAULT_LEVELS,
            parallel: false,
        }
    }
}

fn noise_field<R: Rng + ?Sized>(width: u32, height: u32, rng: &mut R) -> Array2<u8> {
    let mut field = Array2::<u8>::zeros((height as usize, width as usize));
    for cell in field.iter_mut() {
        *cell = if rng.random_bool(0.5) { 255 } else { 0 };
    }
    field
}

fn disparity(levels: u32, depth: u8) -> u32 {
    (levels as u64 * depth as u64 / 255) as u32
}

fn shifted_field(depth: &GrayImage, noise: &Array2<u8>, levels: u32) -> Array2<u8> {
    let width = depth.width() as usize;
    let height = depth.height() as usize;
    let mut field = Array2::<u8>::zeros((height, width));
    for (x, y, pixel) in depth.enumerate_pixels() {
        let Luma(d) = *pixel;
        let offset = disparity(levels, d[0]) as usize;
        let row = y as usize;
        let col = x as usize;
        // never read past the row end: the cell keeps its own noise value
        let src = if col + offset < width { col + offset } else { col };
        field[(row, col)] = noise[(row, src)];
    }
    field
}

fn assemble(left: &Array2<u8>, right: &Array2<u8>, width: u32, height: u32) -> GrayImage {
    let mut stereogram = GrayImage::new(width * 2, height + FOOTER_ROWS);
    for y in 0..height {
        for x in 0..width {
            let idx = (y as usize, x as usize);
            stereogram.put_pixel(x, y, Luma([left[idx]]));
            stereogram.put_pixel(x + width, y, Luma([right[idx]]));
        }
    }
    // fixation marks under each half; bars falling outside the canvas
    // at tiny widths are clipped
    let marks = [u64::from(width) / 2, 3 * u64::from(width) / 2];
    for y in height..height + FOOTER_ROWS {
        for &mark in marks.iter() {
            for dx in 0..MARK_WIDTH {
                let x = mark + u64::from(dx);
                if x < 2 * u64::from(width) {
                    stereogram.put_pixel(x as u32, y, Luma([255]));
                }
            }
        }
    }
    stereogram
}

/// Create a random dot stereogram from a greyscale depth map, drawing
/// noise from the process RNG. Lighter reference pixels read as nearer.
pub fn generate(depth: &GrayImage, opts: &RdsOptions) -> RdsResult<GrayImage> {
    generate_with_rng(depth, opts, &mut rand::rng())
}

/// Same as [`generate`], but with an injected noise source so output can
/// be reproduced bit-for-bit from a seeded generator.
///
/// The result is `(2 * width) x (height + 10)`: the two halves side by
/// side, plus a footer strip carrying two fixation marks.
pub fn generate_with_rng<R: Rng + ?Sized>(
    depth: &GrayImage,
    opts: &RdsOptions,
    rng: &mut R,
) -> RdsResult<GrayImage> {
    let (width, height) = depth.dimensions();
    if width == 0 || height == 0 {
        return Err(RdsError::InvalidInput(format!(
            "depth map is empty ({}x{})",
            width, height
        )));
    }
    if opts.levels < 0 {
        return Err(RdsError::InvalidConfig(format!(
            "levels must be non-negative, got {}",
            opts.levels
        )));
    }
    // the noise field must be complete before the shifted field is
    // derived: every cell may read ahead in its row
    let right = noise_field(width, height, rng);
    let left = shifted_field(depth, &right, opts.levels as u32);
    let stereogram = if opts.parallel {
        assemble(&right, &left, width, height)
    } else {
        assemble(&left, &right, width, height)
    };
    Ok(stereogram)
}
