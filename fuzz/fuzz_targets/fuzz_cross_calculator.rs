#![no_main]

use libfuzzer_sys::fuzz_target;

use ypp_math::{fibonacci, FibCalculator, Iterative, MathError, Memoized, MAX_FIB_U64};

fuzz_target!(|data: &[u8]| {
    if data.len() < 8 {
        return;
    }
    let n = u64::from_le_bytes([
        data[0], data[1], data[2], data[3], data[4], data[5], data[6], data[7],
    ]);

    let table = fibonacci(n);
    let iterative = Iterative::new().compute(n);
    let memoized = Memoized::new().compute(n);

    assert_eq!(table, iterative, "table != iterative at n={n}");
    assert_eq!(table, memoized, "table != memoized at n={n}");
    if n > MAX_FIB_U64 {
        assert_eq!(table, Err(MathError::Overflow(n)));
    }
});
