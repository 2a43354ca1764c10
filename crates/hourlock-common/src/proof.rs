//! Deterministic proof derivation.
//!
//! The server recomputes the proof at verification time and compares it to the
//! caller's submission with exact equality, so both sides must be bit-for-bit
//! reproducible. The per-digit loop order, the `i128` checked arithmetic, and
//! the significant-digit rounding below are load-bearing: do not reorder the
//! accumulation or change the rounding without updating every consumer.

use crate::error::HourlockError;

/// Decompose a key into its decimal digits, most significant first.
///
/// No sign, no leading-zero padding; `0` decomposes to `[0]`.
pub fn digits(key: u64) -> Vec<u8> {
    if key == 0 {
        return vec![0];
    }
    let mut out = Vec::new();
    let mut rest = key;
    while rest > 0 {
        out.push((rest % 10) as u8);
        rest /= 10;
    }
    out.reverse();
    out
}

/// Round `x` to `sig` significant decimal digits.
///
/// Zero rounds to exactly zero. For nonzero `x` the number of decimal places
/// kept is `sig - 1 - floor(log10(|x|))`, which may be negative for large
/// magnitudes.
pub fn round_sig(x: f64, sig: u32) -> f64 {
    if x == 0.0 {
        return 0.0;
    }
    let order = x.abs().log10().floor() as i32;
    let decimals = sig as i32 - order - 1;
    let factor = 10f64.powi(decimals);
    (x * factor).round() / factor
}

/// Per-position term `digit * seed^exp`, or `None` when the integer
/// arithmetic leaves `i128` range.
fn position_term(digit: u8, exp: u8, seed: i64) -> Option<i128> {
    i128::from(seed)
        .checked_pow(u32::from(exp))?
        .checked_mul(i128::from(digit))
}

/// Derive the proof for a secret/challenge pair under a window seed.
///
/// Walks the decimal digits of both keys in lockstep (most significant
/// first). For each position with secret digit `a` and challenge digit `b`,
/// computes `t = a * seed^b`, re-bases the fractional part of `t`'s base-10
/// order of magnitude into `[1, 10)`, and feeds it through `sin` at even
/// positions and `tan` at odd ones. The accumulated sum is rounded to `sig`
/// significant digits.
///
/// A term that overflows `i128` contributes zero to the sum rather than
/// failing the call. Differing digit counts fail with
/// [`HourlockError::LengthMismatch`].
pub fn derive_proof(
    secret: u64,
    challenge: u64,
    seed: i64,
    sig: u32,
) -> Result<f64, HourlockError> {
    let secret_digits = digits(secret);
    let challenge_digits = digits(challenge);
    if secret_digits.len() != challenge_digits.len() {
        return Err(HourlockError::LengthMismatch {
            secret: secret_digits.len(),
            challenge: challenge_digits.len(),
        });
    }

    let mut sum = 0.0f64;
    for (i, (&a, &b)) in secret_digits.iter().zip(challenge_digits.iter()).enumerate() {
        let Some(t) = position_term(a, b, seed) else {
            // Out-of-range term contributes zero instead of failing the call.
            continue;
        };
        let val = if t == 0 {
            0.0
        } else {
            let frac = (t.unsigned_abs() as f64).log10().rem_euclid(1.0);
            10f64.powf(frac)
        };
        sum += if i % 2 == 0 { val.sin() } else { val.tan() };
    }

    Ok(round_sig(sum, sig))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_msd_first() {
        assert_eq!(digits(1234), vec![1, 2, 3, 4]);
        assert_eq!(digits(1000), vec![1, 0, 0, 0]);
        assert_eq!(digits(7), vec![7]);
        assert_eq!(digits(0), vec![0]);
    }

    #[test]
    fn test_round_sig_basic() {
        assert_eq!(round_sig(123.456, 4), 123.5);
        assert_eq!(round_sig(0.00123456, 3), 0.00123);
        assert_eq!(round_sig(9876.54, 4), 9877.0);
        assert_eq!(round_sig(0.0, 4), 0.0);
        assert_eq!(round_sig(-123.456, 4), -123.5);
    }

    #[test]
    fn test_round_sig_idempotent() {
        let p = derive_proof(1234, 5678, 2814, 4).unwrap();
        assert_eq!(round_sig(p, 4).to_bits(), p.to_bits());
    }

    #[test]
    fn test_derive_deterministic() {
        let a = derive_proof(1234, 5678, 2814, 4).unwrap();
        let b = derive_proof(1234, 5678, 2814, 4).unwrap();
        assert_eq!(a.to_bits(), b.to_bits());
        assert!(a.is_finite());
    }

    #[test]
    fn test_derive_length_mismatch() {
        let err = derive_proof(12, 123, 500, 4).unwrap_err();
        assert!(matches!(
            err,
            HourlockError::LengthMismatch {
                secret: 2,
                challenge: 3
            }
        ));
        assert!(derive_proof(12, 34, 500, 4).is_ok());
    }

    #[test]
    fn test_derive_seed_dependence() {
        // t = 1 * seed^1, so val is the seed itself re-based into [1, 10).
        assert_eq!(derive_proof(1, 1, 2, 1).unwrap(), 0.9); // sin(2)
        assert_eq!(derive_proof(1, 1, 3, 1).unwrap(), 0.1); // sin(3)
    }

    #[test]
    fn test_known_proof_values() {
        // Pinned outputs for representative inputs; guards the derivation
        // against accidental changes to loop order or rounding.
        assert_eq!(derive_proof(1234, 5678, 2814, 4).unwrap(), -517.9);
        assert_eq!(derive_proof(9999, 1111, 100, 4).unwrap(), -0.08039);
    }

    #[test]
    fn test_overflow_absorbed_as_zero() {
        // Every term overflows i128, so the sum collapses to exactly zero.
        assert_eq!(derive_proof(99, 99, i64::MAX, 2).unwrap(), 0.0);
    }

    #[test]
    fn test_zero_seed_terms() {
        // 0^1 = 0 contributes nothing; 0^0 = 1 leaves the bare digit.
        assert_eq!(derive_proof(11, 10, 0, 2).unwrap(), 1.6);
    }

    #[test]
    fn test_even_position_uses_sin() {
        let t = 3f64 * 100f64; // 3 * 10^2
        let val = 10f64.powf(t.log10().rem_euclid(1.0));
        let expected = round_sig(val.sin(), 1);
        assert_eq!(derive_proof(3, 2, 10, 1).unwrap(), expected);
    }

    #[test]
    fn test_odd_position_uses_tan() {
        // Keys 13 / 22 with seed 10: position 0 is sin, position 1 is tan.
        let t0 = 1f64 * 100f64;
        let t1 = 3f64 * 100f64;
        let v0 = 10f64.powf(t0.log10().rem_euclid(1.0));
        let v1 = 10f64.powf(t1.log10().rem_euclid(1.0));
        let expected = round_sig(v0.sin() + v1.tan(), 2);
        assert_eq!(derive_proof(13, 22, 10, 2).unwrap(), expected);
    }
}
