//! Physical coordinates of the sample points.

use crate::error::SpaceError;

/// `points` evenly spaced values over `[start, end]`.
///
/// The first value is exactly `start` and the last exactly `end`; the
/// interior values are `start + i * (end - start) / (points - 1)`.
///
/// # Examples
///
/// ```
/// use ripple_space::linspace;
///
/// let xs = linspace(0.0, 1.0, 5).unwrap();
/// assert_eq!(xs, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
/// ```
pub fn linspace(start: f64, end: f64, points: usize) -> Result<Vec<f64>, SpaceError> {
    if points < 2 {
        return Err(SpaceError::TooFewPoints { points, min: 2 });
    }
    if !(start.is_finite() && end.is_finite() && end > start) {
        return Err(SpaceError::InvalidInterval { start, end });
    }
    let step = (end - start) / (points - 1) as f64;
    let mut xs: Vec<f64> = (0..points).map(|i| start + step * i as f64).collect();
    // start + step * (points - 1) can miss `end` by an ulp.
    xs[points - 1] = end;
    Ok(xs)
}

/// The N sample coordinates spanning `[0, L]`, fixed for a run.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    coords: Vec<f64>,
    spacing: f64,
}

impl Grid {
    /// Build a grid of `points` coordinates over `[0, length]`.
    ///
    /// Returns `Err(SpaceError::TooFewPoints)` if `points < 2`, or
    /// `Err(SpaceError::InvalidInterval)` if `length` is not finite and
    /// positive.
    pub fn new(length: f64, points: usize) -> Result<Self, SpaceError> {
        let coords = linspace(0.0, length, points)?;
        Ok(Self {
            coords,
            spacing: length / (points - 1) as f64,
        })
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    /// Always returns `false`: construction rejects fewer than two points.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Distance between consecutive coordinates.
    ///
    /// Note this is `L / (N - 1)`, which differs slightly from the
    /// discretization `dx` whenever `L / dx` is not an integer.
    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    /// Domain length (the last coordinate).
    pub fn length(&self) -> f64 {
        self.coords[self.coords.len() - 1]
    }

    /// All coordinates in order.
    pub fn coords(&self) -> &[f64] {
        &self.coords
    }

    /// Iterate over the coordinates.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.coords.iter().copied()
    }
}
