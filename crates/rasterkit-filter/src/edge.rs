//! Sobel gradients and Canny-style non-maximum suppression
//!
//! The pipeline on a normalized grayscale buffer:
//!
//! 1. Convolve with [`Kernel::SOBEL_X`] and [`Kernel::SOBEL_Y`]. For inputs
//!    in [0, 1] the raw responses lie in [-4, 4].
//! 2. Map each raw response to [0, 1] with `(v + 4) / 8`
//!    ([`renormalize_sobel`]).
//! 3. Combine the two directions, in one of two conventions:
//!    - full: `sqrt(sx² + sy²) / 1.414` ([`sobel_full`])
//!    - centered: shift each direction by -0.5 first, then
//!      `sqrt(sx² + sy²) / 0.707` ([`sobel_full_centered`])
//! 4. Optionally thin the centered magnitude along the gradient direction
//!    ([`canny_edge`]).
//!
//! The divisors 1.414 and 0.707 and the direction thresholds 0.27 and 3.06
//! are fixed constants, not derived bounds or exact tangents.

use crate::convolve::convolve;
use crate::error::{check_min_dimensions, check_same_dimensions};
use crate::{FilterResult, Kernel};
use log::{debug, trace};
use rasterkit_core::FloatBuffer;

/// Absolute bound of a raw Sobel response over [0, 1] input.
pub const SOBEL_RANGE: f32 = 4.0;

/// Divisor of the full-convention magnitude.
pub const FULL_MAGNITUDE_SCALE: f32 = 1.414;

/// Divisor of the centered-convention magnitude.
pub const CENTERED_MAGNITUDE_SCALE: f32 = 0.707;

/// Offset removed from renormalized responses in the centered convention.
pub const CENTER_OFFSET: f32 = 0.5;

/// Ratio bound between the near-vertical and diagonal buckets.
pub const DIAGONAL_LOW: f32 = 0.27;

/// Ratio bound between the diagonal and near-horizontal buckets.
pub const DIAGONAL_HIGH: f32 = 3.06;

/// Map a raw Sobel response from [-4, 4] to [0, 1].
#[inline]
pub fn renormalize_sobel_value(v: f32) -> f32 {
    (v + SOBEL_RANGE) / (2.0 * SOBEL_RANGE)
}

/// Map every raw Sobel response in `raw` from [-4, 4] to [0, 1].
pub fn renormalize_sobel(raw: &FloatBuffer) -> FloatBuffer {
    raw.map(|&v| renormalize_sobel_value(v))
}

/// Renormalized horizontal and vertical Sobel responses of one image.
#[derive(Debug, Clone)]
pub struct SobelGradient {
    /// Renormalized Sobel-X response, in [0, 1]
    pub x: FloatBuffer,
    /// Renormalized Sobel-Y response, in [0, 1]
    pub y: FloatBuffer,
}

impl SobelGradient {
    /// Run both Sobel kernels over `input` and renormalize each result.
    ///
    /// # Errors
    ///
    /// Returns `FilterError::InvalidDimensions` for images below 2x2.
    pub fn compute(input: &FloatBuffer) -> FilterResult<Self> {
        let x = renormalize_sobel(&convolve(&Kernel::SOBEL_X, input)?);
        let y = renormalize_sobel(&convolve(&Kernel::SOBEL_Y, input)?);
        Ok(SobelGradient { x, y })
    }

    /// Full-convention magnitude: `sqrt(sx² + sy²) / 1.414`.
    pub fn full_magnitude(&self) -> FilterResult<FloatBuffer> {
        Ok(self
            .x
            .zip_map(&self.y, |sx, sy| (sx * sx + sy * sy).sqrt() / FULL_MAGNITUDE_SCALE)?)
    }

    /// Shift both directions by -0.5 and compute the centered magnitude.
    pub fn centered(&self) -> FilterResult<CenteredGradient> {
        let x = self.x.map(|&v| v - CENTER_OFFSET);
        let y = self.y.map(|&v| v - CENTER_OFFSET);
        let magnitude =
            x.zip_map(&y, |sx, sy| (sx * sx + sy * sy).sqrt() / CENTERED_MAGNITUDE_SCALE)?;
        Ok(CenteredGradient { x, y, magnitude })
    }
}

/// Sobel responses re-centered on zero, with their combined magnitude.
#[derive(Debug, Clone)]
pub struct CenteredGradient {
    /// Centered Sobel-X response, in [-0.5, 0.5]
    pub x: FloatBuffer,
    /// Centered Sobel-Y response, in [-0.5, 0.5]
    pub y: FloatBuffer,
    /// `sqrt(x² + y²) / 0.707`
    pub magnitude: FloatBuffer,
}

/// Gradient magnitude, full convention.
///
/// # Arguments
/// * `input` - Normalized grayscale buffer, at least 2x2
pub fn sobel_full(input: &FloatBuffer) -> FilterResult<FloatBuffer> {
    debug!("sobel_full: {}x{}", input.width(), input.height());
    SobelGradient::compute(input)?.full_magnitude()
}

/// Gradient magnitude, centered convention.
///
/// # Arguments
/// * `input` - Normalized grayscale buffer, at least 2x2
pub fn sobel_full_centered(input: &FloatBuffer) -> FilterResult<FloatBuffer> {
    debug!("sobel_full_centered: {}x{}", input.width(), input.height());
    Ok(SobelGradient::compute(input)?.centered()?.magnitude)
}

/// Gradient direction bucket, from the ratio `sx / sy` of centered
/// responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradientDirection {
    /// `-0.27 < ratio <= 0.27`
    Vertical,
    /// `-3.06 < ratio <= -0.27`
    NegativeDiagonal,
    /// `0.27 < ratio <= 3.06`
    PositiveDiagonal,
    /// `ratio > 3.06` or `ratio <= -3.06`, including both infinities
    Horizontal,
}

impl GradientDirection {
    /// Bucket a ratio. NaN (from `0 / 0`) matches no bucket.
    pub fn classify(ratio: f32) -> Option<Self> {
        if ratio > -DIAGONAL_LOW && ratio <= DIAGONAL_LOW {
            Some(GradientDirection::Vertical)
        } else if ratio > -DIAGONAL_HIGH && ratio <= -DIAGONAL_LOW {
            Some(GradientDirection::NegativeDiagonal)
        } else if ratio > DIAGONAL_LOW && ratio <= DIAGONAL_HIGH {
            Some(GradientDirection::PositiveDiagonal)
        } else if ratio > DIAGONAL_HIGH || ratio <= -DIAGONAL_HIGH {
            Some(GradientDirection::Horizontal)
        } else {
            None
        }
    }

    /// Linear offsets of the two neighbors compared against, for rows of
    /// `width` pixels.
    ///
    /// `Vertical` compares against the pixel above and the one above-right.
    pub fn neighbor_offsets(self, width: usize) -> [isize; 2] {
        let w = width as isize;
        match self {
            GradientDirection::Vertical => [-w, -w + 1],
            GradientDirection::NegativeDiagonal => [-w + 1, w - 1],
            GradientDirection::PositiveDiagonal => [-w - 1, w + 1],
            GradientDirection::Horizontal => [-1, 1],
        }
    }
}

/// How suppression treats pixels whose neighbors would cross a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NeighborMode {
    /// Walk the flattened range `width .. len - width` with plain linear
    /// offsets. Pixels in the first and last column compare against
    /// positions in the adjacent row. Offsets that leave the buffer count
    /// as absent and never suppress.
    #[default]
    Linear,
    /// Only pixels off every border are suppressed; the first and last
    /// column keep their magnitude like the first and last row.
    RowBounded,
}

/// Options for [`canny_edge`]
#[derive(Debug, Clone, Default)]
pub struct CannyOptions {
    /// Neighbor addressing near the left and right borders
    pub neighbor_mode: NeighborMode,
}

impl CannyOptions {
    /// Set the neighbor addressing mode.
    pub fn with_neighbor_mode(mut self, mode: NeighborMode) -> Self {
        self.neighbor_mode = mode;
        self
    }
}

/// Gradient magnitude thinned by directional non-maximum suppression.
///
/// Computes centered Sobel responses and magnitude, then keeps a pixel's
/// magnitude only where it is at least both neighbors along its gradient
/// bucket. The first and last rows are copied unsuppressed.
///
/// # Arguments
/// * `input` - Normalized grayscale buffer, at least 2x2
/// * `options` - Border handling, see [`NeighborMode`]
pub fn canny_edge(input: &FloatBuffer, options: &CannyOptions) -> FilterResult<FloatBuffer> {
    debug!(
        "canny_edge: {}x{} ({:?})",
        input.width(),
        input.height(),
        options.neighbor_mode
    );
    let gradient = SobelGradient::compute(input)?.centered()?;
    suppress_non_maxima(
        &gradient.x,
        &gradient.y,
        &gradient.magnitude,
        options.neighbor_mode,
    )
}

/// Directional non-maximum suppression over precomputed fields.
///
/// `sx` and `sy` are centered directional responses and `magnitude` their
/// combined strength; all three must share dimensions of at least 2x2.
/// Each candidate pixel is bucketed by `sx / sy` (see
/// [`GradientDirection::classify`]) and keeps its magnitude only if it is
/// `>=` both neighbors of its bucket; otherwise, or when the ratio is NaN,
/// it becomes 0.
pub fn suppress_non_maxima(
    sx: &FloatBuffer,
    sy: &FloatBuffer,
    magnitude: &FloatBuffer,
    mode: NeighborMode,
) -> FilterResult<FloatBuffer> {
    let (w, h) = magnitude.dimensions();
    check_min_dimensions(w, h)?;
    check_same_dimensions((w, h), sx.dimensions())?;
    check_same_dimensions((w, h), sy.dimensions())?;

    let width = w as usize;
    let mag = magnitude.data();
    let (gx, gy) = (sx.data(), sy.data());
    let len = mag.len();

    let keep = |i: usize| -> f32 {
        let Some(direction) = GradientDirection::classify(gx[i] / gy[i]) else {
            return 0.0;
        };
        let is_max = direction.neighbor_offsets(width).iter().all(|&off| {
            match i.checked_add_signed(off).and_then(|n| mag.get(n)) {
                Some(&neighbor) => mag[i] >= neighbor,
                None => true,
            }
        });
        if is_max { mag[i] } else { 0.0 }
    };

    let mut out = vec![0.0f32; len];
    match mode {
        NeighborMode::Linear => {
            for (i, v) in out.iter_mut().enumerate().take(len - width).skip(width) {
                *v = keep(i);
            }
        }
        NeighborMode::RowBounded => {
            for y in 1..h as usize - 1 {
                let row = y * width;
                out[row] = mag[row];
                out[row + width - 1] = mag[row + width - 1];
                for i in row + 1..row + width - 1 {
                    out[i] = keep(i);
                }
            }
        }
    }
    out[..width].copy_from_slice(&mag[..width]);
    out[len - width..].copy_from_slice(&mag[len - width..]);

    trace!(
        "suppress_non_maxima: kept {} of {} nonzero magnitudes",
        out.iter().filter(|&&v| v > 0.0).count(),
        mag.iter().filter(|&&v| v > 0.0).count()
    );

    Ok(FloatBuffer::from_data(w, h, out)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FilterError;

    fn buf(w: u32, h: u32, data: &[f32]) -> FloatBuffer {
        FloatBuffer::from_data(w, h, data.to_vec()).unwrap()
    }

    #[test]
    fn test_renormalize_endpoints() {
        assert_eq!(renormalize_sobel_value(-4.0), 0.0);
        assert_eq!(renormalize_sobel_value(4.0), 1.0);
        assert_eq!(renormalize_sobel_value(0.0), 0.5);
        let raw = buf(3, 1, &[-4.0, 0.0, 4.0]);
        assert_eq!(renormalize_sobel(&raw).data(), &[0.0, 0.5, 1.0]);
    }

    #[test]
    fn test_full_magnitude_at_extremes() {
        let g = SobelGradient {
            x: FloatBuffer::new_with_value(2, 2, 1.0).unwrap(),
            y: FloatBuffer::new_with_value(2, 2, 1.0).unwrap(),
        };
        let m = g.full_magnitude().unwrap();
        for &v in m.data() {
            assert!((v - 1.0).abs() < 1e-3, "got {v}");
            assert_eq!(v, 2.0f32.sqrt() / 1.414);
        }
    }

    #[test]
    fn test_centered_magnitude_flat_is_zero() {
        let g = SobelGradient {
            x: FloatBuffer::new_with_value(2, 2, 0.5).unwrap(),
            y: FloatBuffer::new_with_value(2, 2, 0.5).unwrap(),
        };
        let c = g.centered().unwrap();
        assert!(c.magnitude.data().iter().all(|&v| v == 0.0));
        assert!(c.x.data().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_full_and_centered_differ() {
        // A flat image: full convention reports sqrt(0.5)/1.414, centered reports 0
        let input = FloatBuffer::new_with_value(4, 4, 0.5).unwrap();
        let full = sobel_full(&input).unwrap();
        let centered = sobel_full_centered(&input).unwrap();
        let interior = 5;
        assert_eq!(full.data()[interior], (0.5f32).sqrt() / 1.414);
        assert_eq!(centered.data()[interior], 0.0);
    }

    #[test]
    fn test_uniform_input_has_zero_interior_gradient() {
        let input = FloatBuffer::new_with_value(5, 4, 0.5).unwrap();
        let gx = convolve(&Kernel::SOBEL_X, &input).unwrap();
        let gy = convolve(&Kernel::SOBEL_Y, &input).unwrap();
        for y in 1..3 {
            for x in 1..4 {
                assert_eq!(gx.get_pixel(x, y).unwrap(), 0.0);
                assert_eq!(gy.get_pixel(x, y).unwrap(), 0.0);
            }
        }
    }

    #[test]
    fn test_direction_buckets() {
        use GradientDirection::*;
        assert_eq!(GradientDirection::classify(0.0), Some(Vertical));
        assert_eq!(GradientDirection::classify(0.27), Some(Vertical));
        assert_eq!(GradientDirection::classify(-0.27), Some(NegativeDiagonal));
        assert_eq!(GradientDirection::classify(-3.0), Some(NegativeDiagonal));
        assert_eq!(GradientDirection::classify(0.28), Some(PositiveDiagonal));
        assert_eq!(GradientDirection::classify(3.06), Some(PositiveDiagonal));
        assert_eq!(GradientDirection::classify(3.07), Some(Horizontal));
        assert_eq!(GradientDirection::classify(-3.06), Some(Horizontal));
        assert_eq!(GradientDirection::classify(f32::INFINITY), Some(Horizontal));
        assert_eq!(
            GradientDirection::classify(f32::NEG_INFINITY),
            Some(Horizontal)
        );
        assert_eq!(GradientDirection::classify(f32::NAN), None);
    }

    #[test]
    fn test_neighbor_offsets() {
        assert_eq!(GradientDirection::Vertical.neighbor_offsets(10), [-10, -9]);
        assert_eq!(
            GradientDirection::NegativeDiagonal.neighbor_offsets(10),
            [-9, 9]
        );
        assert_eq!(
            GradientDirection::PositiveDiagonal.neighbor_offsets(10),
            [-11, 11]
        );
        assert_eq!(GradientDirection::Horizontal.neighbor_offsets(10), [-1, 1]);
    }

    #[test]
    fn test_border_rows_copied() {
        let sx = FloatBuffer::new(3, 3).unwrap();
        let sy = FloatBuffer::new(3, 3).unwrap();
        let mag = buf(3, 3, &[0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9]);
        let out = suppress_non_maxima(&sx, &sy, &mag, NeighborMode::Linear).unwrap();
        // 0/0 in the middle row matches no bucket
        assert_eq!(out.data(), &[0.1, 0.2, 0.3, 0.0, 0.0, 0.0, 0.7, 0.8, 0.9]);
    }

    #[test]
    fn test_row_wrap_linear_vs_row_bounded() {
        // Pixel 3 (row 1, column 0) has a horizontal gradient (sy == 0).
        // Linearly its left neighbor is pixel 2, the end of row 0.
        let mut gx = [0.0f32; 9];
        gx[3] = 0.5;
        let sx = buf(3, 3, &gx);
        let sy = FloatBuffer::new(3, 3).unwrap();
        let mag = buf(3, 3, &[0.0, 0.0, 0.9, 0.5, 0.1, 0.0, 0.0, 0.0, 0.0]);

        let linear = suppress_non_maxima(&sx, &sy, &mag, NeighborMode::Linear).unwrap();
        assert_eq!(linear.data()[3], 0.0, "wrapped neighbor suppresses");

        let bounded = suppress_non_maxima(&sx, &sy, &mag, NeighborMode::RowBounded).unwrap();
        assert_eq!(bounded.data()[3], 0.5, "border column is exempt");

        assert_eq!(
            linear.data(),
            &[0.0, 0.0, 0.9, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]
        );
        assert_eq!(
            bounded.data(),
            &[0.0, 0.0, 0.9, 0.5, 0.0, 0.0, 0.0, 0.0, 0.0]
        );
    }

    #[test]
    fn test_linear_offset_outside_buffer_is_ignored() {
        // Pixel 3 is diagonal; its up-left neighbor would be index -1
        let mut gx = [0.0f32; 9];
        let mut gy = [0.0f32; 9];
        gx[3] = 0.5;
        gy[3] = 0.5;
        let mag = buf(3, 3, &[0.0, 0.0, 0.0, 0.4, 0.0, 0.0, 0.0, 0.2, 0.0]);
        let out =
            suppress_non_maxima(&buf(3, 3, &gx), &buf(3, 3, &gy), &mag, NeighborMode::Linear)
                .unwrap();
        assert_eq!(out.data()[3], 0.4);
    }

    #[test]
    fn test_suppression_keeps_ties() {
        let mut gx = [0.0f32; 9];
        gx[4] = 0.5;
        let mag = buf(3, 3, &[0.0, 0.0, 0.0, 0.7, 0.7, 0.7, 0.0, 0.0, 0.0]);
        let out = suppress_non_maxima(
            &buf(3, 3, &gx),
            &FloatBuffer::new(3, 3).unwrap(),
            &mag,
            NeighborMode::RowBounded,
        )
        .unwrap();
        assert_eq!(out.data()[4], 0.7);
    }

    #[test]
    fn test_vertical_bucket_compares_above_and_above_right() {
        // sx == 0, sy != 0 -> ratio 0 -> compares pixel 1 and pixel 2
        let mut gy = [0.0f32; 9];
        gy[4] = 0.5;
        let sx = FloatBuffer::new(3, 3).unwrap();
        let low_above = buf(3, 3, &[0.0, 0.3, 0.3, 0.0, 0.6, 0.0, 0.0, 0.0, 0.0]);
        let out =
            suppress_non_maxima(&sx, &buf(3, 3, &gy), &low_above, NeighborMode::Linear).unwrap();
        assert_eq!(out.data()[4], 0.6);

        // A larger value below does not matter
        let high_below = buf(3, 3, &[0.0, 0.3, 0.3, 0.0, 0.6, 0.0, 0.0, 0.9, 0.0]);
        let out =
            suppress_non_maxima(&sx, &buf(3, 3, &gy), &high_below, NeighborMode::Linear).unwrap();
        assert_eq!(out.data()[4], 0.6);

        let high_above_right = buf(3, 3, &[0.0, 0.3, 0.8, 0.0, 0.6, 0.0, 0.0, 0.0, 0.0]);
        let out = suppress_non_maxima(
            &sx,
            &buf(3, 3, &gy),
            &high_above_right,
            NeighborMode::Linear,
        )
        .unwrap();
        assert_eq!(out.data()[4], 0.0);
    }

    #[test]
    fn test_suppression_dimension_checks() {
        let a = FloatBuffer::new(3, 3).unwrap();
        let b = FloatBuffer::new(3, 4).unwrap();
        assert!(matches!(
            suppress_non_maxima(&a, &b, &a, NeighborMode::Linear),
            Err(FilterError::DimensionMismatch { .. })
        ));
        let thin = FloatBuffer::new(1, 4).unwrap();
        assert!(matches!(
            suppress_non_maxima(&thin, &thin, &thin, NeighborMode::Linear),
            Err(FilterError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_two_row_image_is_all_border() {
        let input = buf(3, 2, &[0.0, 1.0, 0.0, 1.0, 0.0, 1.0]);
        let centered = sobel_full_centered(&input).unwrap();
        for mode in [NeighborMode::Linear, NeighborMode::RowBounded] {
            let out = canny_edge(&input, &CannyOptions::default().with_neighbor_mode(mode))
                .unwrap();
            assert_eq!(out, centered);
        }
    }
}
