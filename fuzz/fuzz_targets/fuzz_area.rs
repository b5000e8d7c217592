#![no_main]

use libfuzzer_sys::fuzz_target;

use ypp_math::{calculate_area, calculate_circle_area, Shape};

fuzz_target!(|data: &[u8]| {
    if data.len() < 16 {
        return;
    }
    let mut w = [0u8; 8];
    let mut h = [0u8; 8];
    w.copy_from_slice(&data[..8]);
    h.copy_from_slice(&data[8..16]);
    let width = f64::from_le_bytes(w);
    let height = f64::from_le_bytes(h);

    let valid = |v: f64| v.is_finite() && v >= 0.0;
    match (Shape::Rectangle { width, height }).validate() {
        // Valid dimensions never produce a negative or NaN area.
        Ok(shape) => {
            let area = shape.area();
            assert!(!area.is_nan() && area >= 0.0, "bad area {area}");
        }
        Err(_) => assert!(!(valid(width) && valid(height))),
    }

    // The free functions never panic, whatever the input.
    let _ = calculate_area(width, height);
    let _ = calculate_circle_area(width);
});
