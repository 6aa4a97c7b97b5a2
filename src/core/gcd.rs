//! Greatest common divisor helpers

/// Greatest common divisor by the Euclidean algorithm
///
/// `gcd(x, 0) == x`, so `gcd(0, 0) == 0`.
pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// Fold `gcd` across a slice; `None` for an empty slice
pub fn gcd_all(values: &[u64]) -> Option<u64> {
    let (first, rest) = values.split_first()?;
    let mut acc = *first;
    for &v in rest {
        if acc == 1 {
            break;
        }
        acc = gcd(acc, v);
    }
    Some(acc)
}

/// Check whether the values have an overall gcd of 1
pub fn is_coprime(values: &[u64]) -> bool {
    gcd_all(values) == Some(1)
}
