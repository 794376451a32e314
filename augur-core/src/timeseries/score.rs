use crate::AugurError;

/// Normalized mean squared error of `predicted` against `reference`.
///
/// Computes `Σ(reference[i] − predicted[i])² / Σ reference[i]²`.
///
/// ```
/// use augur_core::nmse;
///
/// let y = [1619.36, 1619.96, 1620.61];
/// assert_eq!(nmse(&y, &y).unwrap(), 0.0);
/// assert!(nmse(&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0, 4.0]).is_err());
/// ```
///
/// # Errors
/// - Returns `LengthMismatch` if the slices differ in length.
/// - Returns `DegenerateReference` if the reference sum of squares is zero
///   (all-zero or empty reference); the ratio is undefined there. A non-zero
///   reference whose squares all underflow (`|y| < 1e-154`) lands here too.
/// - Returns `InvalidArg` if the score is not finite, i.e. an input is NaN or
///   infinite, or squared values overflow `f64`.
pub fn nmse(reference: &[f64], predicted: &[f64]) -> Result<f64, AugurError> {
    if reference.len() != predicted.len() {
        return Err(AugurError::length_mismatch(
            reference.len(),
            predicted.len(),
        ));
    }
    let (err_sq, ref_sq) = reference.iter().zip(predicted).fold(
        (0.0_f64, 0.0_f64),
        |(err_sq, ref_sq), (&y, &y_hat)| {
            let diff = y - y_hat;
            (diff.mul_add(diff, err_sq), y.mul_add(y, ref_sq))
        },
    );
    if ref_sq == 0.0 {
        return Err(AugurError::DegenerateReference);
    }
    let score = err_sq / ref_sq;
    if !score.is_finite() {
        return Err(AugurError::InvalidArg(format!(
            "nmse is not finite (error energy {err_sq:e}, reference energy {ref_sq:e})"
        )));
    }
    Ok(score)
}
