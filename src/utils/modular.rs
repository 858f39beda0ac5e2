//! Integer arithmetic modulo the alphabet size.

/// Modulus shared by both cipher stages.
pub const MODULUS: i64 = 26;

/// Reduces `value` into `[0, MODULUS)`, wrapping negatives.
pub fn reduce(value: i64) -> i64 {
    value.rem_euclid(MODULUS)
}

/// Greatest common divisor (always non-negative).
pub fn gcd(a: i64, b: i64) -> i64 {
    let (mut a, mut b) = (a.abs(), b.abs());
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Computes `x` in `[1, m)` such that `(a * x) mod m == 1`.
///
/// Uses the extended Euclidean algorithm. Gives the same answer as a linear
/// scan over `1..m`.
///
/// # Parameters
/// - `a`: Value to invert; reduced modulo `m` first.
/// - `m`: Modulus, greater than 1.
///
/// # Returns
/// `None` when `gcd(a, m) != 1`.
///
/// # Examples
///
/// ```
/// use hillvig::utils::modular::mod_inverse;
///
/// assert_eq!(mod_inverse(9, 26), Some(3));
/// assert_eq!(mod_inverse(13, 26), None);
/// ```
pub fn mod_inverse(a: i64, m: i64) -> Option<i64> {
    let (mut old_r, mut r) = (a.rem_euclid(m), m);
    let (mut old_s, mut s) = (1i64, 0i64);
    while r != 0 {
        let q = old_r / r;
        (old_r, r) = (r, old_r - q * r);
        (old_s, s) = (s, old_s - q * s);
    }
    if old_r != 1 {
        return None;
    }
    Some(old_s.rem_euclid(m))
}
