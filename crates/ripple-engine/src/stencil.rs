//! The explicit leapfrog stencil with periodic edges.
//!
//! The standard central second-order difference in both space and time:
//!
//! ```text
//! future[i] = 2·present[i] − past[i] + r²·(present[i+1] + present[i−1] − 2·present[i])
//! ```
//!
//! where r² is the squared Courant number. Indices `0` and `N−1` use the
//! same formula with neighbours taken from the [`Ring1D`] topology.

use ripple_space::Ring1D;

/// Stencil update for a single point.
#[inline]
pub fn leapfrog_point(past: f64, centre: f64, left: f64, right: f64, courant_sq: f64) -> f64 {
    2.0 * centre - past + courant_sq * (right + left - 2.0 * centre)
}

/// Performs one step of the scheme, writing every point of `future`.
///
/// - `past`: value at step `n - 1`
/// - `present`: value at step `n`
/// - `future`: computed value at step `n + 1`
/// - `courant_sq`: (c·dt/dx)²
///
/// # Panics
///
/// Panics if the three slices and `ring` do not share one length.
pub fn leapfrog_step(
    past: &[f64],
    present: &[f64],
    future: &mut [f64],
    ring: &Ring1D,
    courant_sq: f64,
) {
    let n = ring.len();
    assert_eq!(past.len(), n);
    assert_eq!(present.len(), n);
    assert_eq!(future.len(), n);

    for (offset, w) in present.windows(3).enumerate() {
        let i = offset + 1;
        future[i] = leapfrog_point(past[i], w[1], w[0], w[2], courant_sq);
    }

    for i in ring.edges() {
        future[i] = leapfrog_point(
            past[i],
            present[i],
            present[ring.left(i)],
            present[ring.right(i)],
            courant_sq,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Reference implementation with explicit modular indexing.
    fn leapfrog_reference(past: &[f64], present: &[f64], courant_sq: f64) -> Vec<f64> {
        let n = present.len();
        (0..n)
            .map(|i| {
                let l = present[(i + n - 1) % n];
                let r = present[(i + 1) % n];
                2.0 * present[i] - past[i] + courant_sq * (r + l - 2.0 * present[i])
            })
            .collect()
    }

    fn pseudo_random(n: usize, seed: u64) -> Vec<f64> {
        (0..n as u64)
            .map(|i| {
                let h = (i + seed).wrapping_mul(6364136223846793007) >> 11;
                (h % 1000) as f64 / 1000.0
            })
            .collect()
    }

    #[test]
    fn matches_reference() {
        for n in [2usize, 3, 4, 17, 256] {
            let ring = Ring1D::new(n).unwrap();
            let past = pseudo_random(n, 1);
            let present = pseudo_random(n, 7);
            let mut future = vec![f64::NAN; n];
            leapfrog_step(&past, &present, &mut future, &ring, 0.64);
            let expected = leapfrog_reference(&past, &present, 0.64);
            assert_eq!(future, expected, "n = {n}");
        }
    }

    #[test]
    fn constant_field_is_stationary() {
        let ring = Ring1D::new(8).unwrap();
        let u = vec![0.75; 8];
        let mut future = vec![0.0; 8];
        leapfrog_step(&u, &u, &mut future, &ring, 1.0);
        assert!(future.iter().all(|&v| v == 0.75));
    }

    #[test]
    fn pulse_straddling_wrap_point() {
        let n = 10;
        let ring = Ring1D::new(n).unwrap();
        let mut present = vec![0.0; n];
        present[n - 1] = 0.8;
        present[0] = 1.0;
        present[1] = 0.6;
        let mut past = vec![0.0; n];
        past[0] = 0.9;
        let r2 = 0.25;

        let mut future = vec![0.0; n];
        leapfrog_step(&past, &present, &mut future, &ring, r2);

        // 2·1.0 − 0.9 + 0.25·(0.6 + 0.8 − 2·1.0) = 1.1 − 0.15
        assert!((future[0] - 0.95).abs() < 1e-12);
        // Index N−1 sees index 0 on its right: 2·0.8 − 0 + 0.25·(1.0 + 0 − 1.6)
        assert!((future[n - 1] - 1.45).abs() < 1e-12);
        // Far from the pulse nothing moves.
        assert_eq!(future[5], 0.0);
    }

    #[test]
    #[should_panic]
    fn length_mismatch_panics() {
        let ring = Ring1D::new(4).unwrap();
        let mut future = vec![0.0; 4];
        leapfrog_step(&[0.0; 3], &[0.0; 4], &mut future, &ring, 0.5);
    }
}
