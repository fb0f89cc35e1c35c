//! Exactly rounded floating-point summation.
//!
//! Force and tension computations add up many small terms of mixed sign.
//! [`precise_sum`] tracks the running total as a list of non-overlapping
//! partial sums (Shewchuk's algorithm), so the result is the exact sum
//! rounded once to the nearest `f64`. The result does not depend on the
//! order of the inputs.

/// Returns the correctly rounded sum of `values`.
///
/// Non-finite inputs are not special-cased: any infinity or NaN makes the
/// result non-finite.
///
/// # Examples
///
/// ```
/// # use sprung_core::summation::precise_sum;
/// assert_eq!(precise_sum([0.1; 10]), 1.0);
/// assert_eq!(precise_sum([1e100, 1.0, -1e100]), 1.0);
/// assert_eq!(precise_sum(Vec::<f64>::new()), 0.0);
/// ```
pub fn precise_sum(values: impl IntoIterator<Item = f64>) -> f64 {
    let mut partials: Vec<f64> = Vec::new();

    for mut x in values {
        let mut kept = 0;
        for j in 0..partials.len() {
            let mut y = partials[j];
            if x.abs() < y.abs() {
                std::mem::swap(&mut x, &mut y);
            }
            let hi = x + y;
            let lo = y - (hi - x);
            if lo != 0.0 {
                partials[kept] = lo;
                kept += 1;
            }
            x = hi;
        }
        partials.truncate(kept);
        partials.push(x);
    }

    round_partials(&partials)
}

/// Collapses non-overlapping partials (ascending magnitude) into one value,
/// applying round-half-even when the discarded tail sits exactly on a tie.
fn round_partials(partials: &[f64]) -> f64 {
    let Some((&last, rest)) = partials.split_last() else {
        return 0.0;
    };

    let mut hi = last;
    let mut lo = 0.0;
    let mut n = rest.len();
    while n > 0 {
        n -= 1;
        let x = hi;
        let y = rest[n];
        hi = x + y;
        lo = y - (hi - x);
        if lo != 0.0 {
            break;
        }
    }

    if n > 0 && ((lo < 0.0 && rest[n - 1] < 0.0) || (lo > 0.0 && rest[n - 1] > 0.0)) {
        let y = lo * 2.0;
        let x = hi + y;
        if y == x - hi {
            hi = x;
        }
    }
    hi
}
