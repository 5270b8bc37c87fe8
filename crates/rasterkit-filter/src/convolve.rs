//! 3x3 kernel convolution
//!
//! Convolves a normalized [`FloatBuffer`] with a [`Kernel`]. There is no
//! padding: every pixel belongs to one of nine [`Region`]s, and only the
//! kernel taps whose neighbor lies inside the image contribute. Corner
//! pixels therefore sum 4 taps, edge pixels 6 and interior pixels 9, and
//! partial sums are not rescaled. Edge and corner responses are weaker
//! than interior ones and callers must live with that.
//!
//! Taps are summed in a fixed order per region (see [`Region::taps`]) so
//! results are reproducible to the last bit of `f32`.

use crate::error::check_min_dimensions;
use crate::{FilterResult, Kernel};
use log::debug;
use rasterkit_core::FloatBuffer;

/// A kernel tap as `(row, col)`, with `(1, 1)` over the pixel itself.
pub type Tap = (usize, usize);

const INTERIOR_TAPS: [Tap; 9] = [
    (0, 0),
    (0, 1),
    (0, 2),
    (1, 0),
    (1, 1),
    (1, 2),
    (2, 0),
    (2, 1),
    (2, 2),
];
const TOP_LEFT_TAPS: [Tap; 4] = [(1, 1), (1, 2), (2, 1), (2, 2)];
const TOP_RIGHT_TAPS: [Tap; 4] = [(1, 0), (1, 1), (2, 0), (2, 1)];
const BOTTOM_LEFT_TAPS: [Tap; 4] = [(0, 1), (0, 2), (1, 1), (1, 2)];
const BOTTOM_RIGHT_TAPS: [Tap; 4] = [(0, 0), (0, 1), (1, 0), (1, 1)];
const TOP_TAPS: [Tap; 6] = [(1, 0), (1, 1), (1, 2), (2, 0), (2, 1), (2, 2)];
const BOTTOM_TAPS: [Tap; 6] = [(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)];
const LEFT_TAPS: [Tap; 6] = [(0, 1), (1, 1), (2, 1), (0, 2), (1, 2), (2, 2)];
const RIGHT_TAPS: [Tap; 6] = [(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)];

/// Position class of a pixel with respect to the image border.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    TopLeft,
    Top,
    TopRight,
    Left,
    Interior,
    Right,
    BottomLeft,
    Bottom,
    BottomRight,
}

impl Region {
    /// Classify pixel (x, y) in a `width` x `height` image.
    ///
    /// Requires `width >= 2` and `height >= 2`, so a pixel is never both
    /// the first and the last column (or row).
    pub fn classify(x: u32, y: u32, width: u32, height: u32) -> Self {
        let left = x == 0;
        let right = x + 1 == width;
        let top = y == 0;
        let bottom = y + 1 == height;
        match (top, bottom, left, right) {
            (true, _, true, _) => Region::TopLeft,
            (true, _, _, true) => Region::TopRight,
            (true, _, _, _) => Region::Top,
            (_, true, true, _) => Region::BottomLeft,
            (_, true, _, true) => Region::BottomRight,
            (_, true, _, _) => Region::Bottom,
            (_, _, true, _) => Region::Left,
            (_, _, _, true) => Region::Right,
            _ => Region::Interior,
        }
    }

    /// Kernel taps that contribute in this region, in summation order.
    pub fn taps(self) -> &'static [Tap] {
        match self {
            Region::TopLeft => &TOP_LEFT_TAPS,
            Region::Top => &TOP_TAPS,
            Region::TopRight => &TOP_RIGHT_TAPS,
            Region::Left => &LEFT_TAPS,
            Region::Interior => &INTERIOR_TAPS,
            Region::Right => &RIGHT_TAPS,
            Region::BottomLeft => &BOTTOM_LEFT_TAPS,
            Region::Bottom => &BOTTOM_TAPS,
            Region::BottomRight => &BOTTOM_RIGHT_TAPS,
        }
    }
}

/// Convolve a normalized buffer with a 3x3 kernel.
///
/// # Arguments
/// * `kernel` - Weights; `[0][0]` aligns with the top-left neighbor
/// * `input` - Normalized single-channel buffer, at least 2x2
///
/// # Errors
///
/// Returns `FilterError::InvalidDimensions` if width or height is below 2.
pub fn convolve(kernel: &Kernel, input: &FloatBuffer) -> FilterResult<FloatBuffer> {
    let (w, h) = input.dimensions();
    check_min_dimensions(w, h)?;
    debug!("convolve: {}x{}", w, h);

    let pixels = input.data();
    let width = w as usize;
    let mut out = Vec::with_capacity(pixels.len());

    for y in 0..h {
        for x in 0..w {
            let taps = Region::classify(x, y, w, h).taps();
            // tap (row, col) reads the neighbor at (x + col - 1, y + row - 1)
            let product = |&(row, col): &Tap| {
                let idx = (y as usize + row) * width + x as usize + col - width - 1;
                pixels[idx] * kernel.get(row, col)
            };
            let mut sum = product(&taps[0]);
            for tap in &taps[1..] {
                sum += product(tap);
            }
            out.push(sum);
        }
    }

    Ok(FloatBuffer::from_data(w, h, out)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FilterError;

    /// Kernel whose weights are distinct powers of two, so the sum over an
    /// all-ones image identifies exactly which taps were used.
    fn bit_kernel() -> Kernel {
        Kernel::new([[1.0, 2.0, 4.0], [8.0, 16.0, 32.0], [64.0, 128.0, 256.0]])
    }

    fn tap_mask(taps: &[Tap]) -> f32 {
        taps.iter().map(|&(r, c)| bit_kernel().get(r, c)).sum()
    }

    #[test]
    fn test_classify_3x3() {
        let regions: Vec<Region> = (0..3)
            .flat_map(|y| (0..3).map(move |x| Region::classify(x, y, 3, 3)))
            .collect();
        assert_eq!(
            regions,
            vec![
                Region::TopLeft,
                Region::Top,
                Region::TopRight,
                Region::Left,
                Region::Interior,
                Region::Right,
                Region::BottomLeft,
                Region::Bottom,
                Region::BottomRight,
            ]
        );
    }

    #[test]
    fn test_classify_2x2_is_all_corners() {
        assert_eq!(Region::classify(0, 0, 2, 2), Region::TopLeft);
        assert_eq!(Region::classify(1, 0, 2, 2), Region::TopRight);
        assert_eq!(Region::classify(0, 1, 2, 2), Region::BottomLeft);
        assert_eq!(Region::classify(1, 1, 2, 2), Region::BottomRight);
    }

    #[test]
    fn test_tap_counts() {
        assert_eq!(Region::Interior.taps().len(), 9);
        for r in [
            Region::TopLeft,
            Region::TopRight,
            Region::BottomLeft,
            Region::BottomRight,
        ] {
            assert_eq!(r.taps().len(), 4);
        }
        for r in [Region::Top, Region::Bottom, Region::Left, Region::Right] {
            assert_eq!(r.taps().len(), 6);
        }
    }

    #[test]
    fn test_ones_image_selects_taps() {
        let input = FloatBuffer::new_with_value(4, 4, 1.0).unwrap();
        let out = convolve(&bit_kernel(), &input).unwrap();
        let d = out.data();

        assert_eq!(d[0], 16.0 + 32.0 + 128.0 + 256.0);
        assert_eq!(d[3], 8.0 + 16.0 + 64.0 + 128.0);
        assert_eq!(d[12], 2.0 + 4.0 + 16.0 + 32.0);
        assert_eq!(d[15], 1.0 + 2.0 + 8.0 + 16.0);
        assert_eq!(d[1], 511.0 - 7.0);
        assert_eq!(d[13], 511.0 - 448.0);
        assert_eq!(d[4], 511.0 - 1.0 - 8.0 - 64.0);
        assert_eq!(d[7], 511.0 - 4.0 - 32.0 - 256.0);
        assert_eq!(d[5], 511.0);
        assert_eq!(d[10], 511.0);

        for y in 0..4 {
            for x in 0..4 {
                let expected = tap_mask(Region::classify(x, y, 4, 4).taps());
                assert_eq!(out.get_pixel(x, y).unwrap(), expected);
            }
        }
    }

    #[test]
    fn test_taps_address_correct_neighbors() {
        // Pixel values encode their own index, kernel picks a single tap
        let input = FloatBuffer::from_data(3, 3, (0..9).map(|v| v as f32).collect()).unwrap();
        // Bottom-right tap reads the pixel below-right
        let k = Kernel::new([[0.0, 0.0, 0.0], [0.0, 0.0, 0.0], [0.0, 0.0, 1.0]]);
        let out = convolve(&k, &input).unwrap();
        assert_eq!(out.data()[0], 4.0);
        assert_eq!(out.data()[4], 8.0);
        // Right column has no below-right neighbor
        assert_eq!(out.data()[2], 0.0);

        // Top-left tap reads the pixel above-left
        let k = Kernel::new([[1.0, 0.0, 0.0], [0.0, 0.0, 0.0], [0.0, 0.0, 0.0]]);
        let out = convolve(&k, &input).unwrap();
        assert_eq!(out.data()[4], 0.0);
        assert_eq!(out.data()[8], 4.0);
        assert_eq!(out.data()[5], 1.0);
    }

    #[test]
    fn test_mean_blur_impulse() {
        let mut data = vec![0.0f32; 9];
        data[4] = 1.0;
        let input = FloatBuffer::from_data(3, 3, data).unwrap();
        let out = convolve(&Kernel::MEAN_BLUR, &input).unwrap();
        // Every pixel of a 3x3 image touches the center
        assert!(out.data().iter().all(|&v| v == 1.0));
    }

    #[test]
    fn test_rejects_thin_images() {
        let input = FloatBuffer::new(1, 5).unwrap();
        assert!(matches!(
            convolve(&Kernel::MEAN_BLUR, &input),
            Err(FilterError::InvalidDimensions {
                width: 1,
                height: 5,
                ..
            })
        ));
        let input = FloatBuffer::new(5, 1).unwrap();
        assert!(convolve(&Kernel::MEAN_BLUR, &input).is_err());
    }

    #[test]
    fn test_output_shape() {
        for (w, h) in [(2, 2), (2, 7), (7, 2), (5, 3), (16, 9)] {
            let input = FloatBuffer::new_with_value(w, h, 0.25).unwrap();
            let out = convolve(&Kernel::SOBEL_X, &input).unwrap();
            assert_eq!(out.dimensions(), (w, h));
            assert_eq!(out.len(), (w * h) as usize);
        }
    }
}
