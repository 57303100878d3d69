use crate::basic_types::ApproximationRatio;
use crate::solvers::SolverError;

/// Exponent of the empirical fit used for three matroids.
const THREE_MATROID_EXPONENT: f64 = -0.3562;

/// The ratio guaranteed by a solution which admits no improving exchange of size at most
/// `neighbourhood_size`, when `num_matroids` matroids are intersected.
///
/// - Without any exchanges the solution is maximal, which gives `1/k` for every `k`.
/// - For two matroids every `s`-exchange optimal solution is within `(s + 1) / (s + 2)`.
/// - For three matroids the ratio of [`conjectured_three_matroid_ratio`] is returned; it is
///   marked as [conjectural](crate::basic_types::CertificateKind::Conjectural).
///
/// No ratio is known for any other number of matroids.
pub fn approximation_ratio(
    neighbourhood_size: usize,
    num_matroids: usize,
) -> Result<ApproximationRatio, SolverError> {
    match (neighbourhood_size, num_matroids) {
        (_, 0) => Err(SolverError::UnsupportedMatroidCount {
            matroid_count: num_matroids,
        }),
        (0, k) => Ok(ApproximationRatio::proven(1.0 / k as f64)),
        (s, 2) => Ok(ApproximationRatio::proven(
            (s + 1) as f64 / (s + 2) as f64,
        )),
        (s, 3) => Ok(ApproximationRatio::conjectural(
            conjectured_three_matroid_ratio(s),
        )),
        (_, k) => Err(SolverError::UnsupportedMatroidCount { matroid_count: k }),
    }
}

/// `2 / (3 + 2 s^-0.3562)`: a fit of the ratio achieved by `s`-exchange optimal solutions for
/// three matroids. It tends to `2/3` as `s` grows, but is not a proven bound.
pub fn conjectured_three_matroid_ratio(neighbourhood_size: usize) -> f64 {
    2.0 / (3.0 + 2.0 * (neighbourhood_size as f64).powf(THREE_MATROID_EXPONENT))
}

#[cfg(test)]
mod tests {
    use super::approximation_ratio;
    use super::conjectured_three_matroid_ratio;
    use crate::basic_types::CertificateKind;
    use crate::solvers::SolverError;

    #[test]
    fn maximal_solutions_are_within_one_over_k() {
        assert_eq!(approximation_ratio(0, 2).expect("supported").value(), 0.5);
        assert!((approximation_ratio(0, 3).expect("supported").value() - 1.0 / 3.0).abs() < 1e-12);
        assert_eq!(approximation_ratio(0, 4).expect("supported").value(), 0.25);
    }

    #[test]
    fn two_matroid_ratio_increases_towards_one() {
        let ratios = (0..50)
            .map(|s| approximation_ratio(s, 2).expect("supported").value())
            .collect::<Vec<_>>();

        assert!(ratios.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(ratios.iter().all(|&ratio| ratio < 1.0));
        assert!(ratios[49] > 0.98);
        assert_eq!(ratios[1], 2.0 / 3.0);
    }

    #[test]
    fn three_matroid_ratio_is_conjectural() {
        let ratio = approximation_ratio(1, 3).expect("supported");

        assert_eq!(ratio.kind(), CertificateKind::Conjectural);
        assert!((ratio.value() - 0.4).abs() < 1e-12);
    }

    #[test]
    fn three_matroid_ratio_stays_below_two_thirds() {
        let ratios = (1..100)
            .map(conjectured_three_matroid_ratio)
            .collect::<Vec<_>>();

        assert!(ratios.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(ratios.iter().all(|&ratio| ratio > 1.0 / 3.0 && ratio < 2.0 / 3.0));
    }

    #[test]
    fn other_matroid_counts_are_unsupported() {
        assert_eq!(
            approximation_ratio(1, 4),
            Err(SolverError::UnsupportedMatroidCount { matroid_count: 4 })
        );
        assert_eq!(
            approximation_ratio(0, 0),
            Err(SolverError::UnsupportedMatroidCount { matroid_count: 0 })
        );
    }
}
