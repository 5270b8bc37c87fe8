//! Convolution regression test
//!
//! Exercises the bordered 3x3 convolution and the legacy box blur on
//! synthetic images.
//!
//! Run with:
//! ```
//! cargo test -p rasterkit-filter --test convolve_reg
//! ```

use rasterkit_core::{FloatBuffer, PixelBuffer};
use rasterkit_filter::{
    FilterError, Kernel, Region, convolve, legacy_box_blur, legacy_box_blur_len,
};
use rasterkit_test::{RegParams, synthetic};

#[test]
fn convolve_reg() {
    let mut rp = RegParams::new("convolve");

    // Mean blur of a centered impulse: every pixel of a 3x3 image sees it
    let impulse = synthetic::impulse(3, 3).unwrap();
    let blurred = convolve(&Kernel::MEAN_BLUR, &impulse).unwrap();
    let ones = FloatBuffer::new_with_value(3, 3, 1.0).unwrap();
    rp.compare_floats(&ones, &blurred, 0.0);

    // On a larger image the impulse spreads to its 3x3 neighborhood only
    let impulse = synthetic::impulse(7, 5).unwrap();
    let blurred = convolve(&Kernel::MEAN_BLUR, &impulse).unwrap();
    rp.compare_values(9.0, blurred.data().iter().sum::<f32>() as f64, 0.0);
    rp.compare_values(9.0, blurred.count_nonzero() as f64, 0.0);
    rp.compare_values(1.0, blurred.get_pixel(2, 1).unwrap() as f64, 0.0);
    rp.compare_values(0.0, blurred.get_pixel(1, 1).unwrap() as f64, 0.0);

    // Mean blur of a flat image exposes the unscaled border sums
    let flat = synthetic::uniform(6, 4, 1.0).unwrap();
    let sums = convolve(&Kernel::MEAN_BLUR, &flat).unwrap();
    for y in 0..4 {
        for x in 0..6 {
            let taps = Region::classify(x, y, 6, 4).taps().len();
            rp.compare_values(taps as f64, sums.get_pixel(x, y).unwrap() as f64, 0.0);
        }
    }

    // Uniform input has exactly zero Sobel response away from the border
    let gray = synthetic::uniform(5, 5, 0.5).unwrap();
    for kernel in [Kernel::SOBEL_X, Kernel::SOBEL_Y] {
        let raw = convolve(&kernel, &gray).unwrap();
        for y in 1..4 {
            for x in 1..4 {
                rp.compare_values(0.0, raw.get_pixel(x, y).unwrap() as f64, 0.0);
            }
        }
    }

    // Shape is preserved
    let ramp = FloatBuffer::normalize(&synthetic::horizontal_ramp(11, 3).unwrap());
    let out = convolve(&Kernel::SOBEL_X, &ramp).unwrap();
    rp.compare_values(33.0, out.len() as f64, 0.0);

    // Thin images are rejected
    let thin = synthetic::uniform(1, 8, 0.5).unwrap();
    let rejected = matches!(
        convolve(&Kernel::MEAN_BLUR, &thin),
        Err(FilterError::InvalidDimensions { .. })
    );
    rp.compare_values(1.0, if rejected { 1.0 } else { 0.0 }, 0.0);

    assert!(rp.cleanup());
}

#[test]
fn legacy_blur_reg() {
    let mut rp = RegParams::new("legacy_blur");

    let pix = PixelBuffer::new_with_value(4, 4, 0x0040_4040).unwrap();
    let out = legacy_box_blur(&pix).unwrap();
    rp.compare_values(8.0, out.len() as f64, 0.0);
    rp.compare_values(legacy_box_blur_len(4, 4) as f64, out.len() as f64, 0.0);
    rp.compare_values(
        1.0,
        if out.iter().all(|&p| p == 0x0040_4040) { 1.0 } else { 0.0 },
        0.0,
    );

    // Step edge: blocks straddling the step average the two levels
    let step = synthetic::vertical_step(4, 3, 2, 0, 200).unwrap();
    let out = legacy_box_blur(&step).unwrap();
    rp.compare_values(5.0, out.len() as f64, 0.0);
    rp.compare_values(0.0, out[0] as f64, 0.0);
    rp.compare_values(100.0 * 0x01_01_01 as f64, out[1] as f64, 0.0);
    rp.compare_values(200.0 * 0x01_01_01 as f64, out[2] as f64, 0.0);

    assert!(rp.cleanup());
}
