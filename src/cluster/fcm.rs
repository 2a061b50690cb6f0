//! Fuzzy C-Means: soft-partition clustering by alternating optimization.
//!
//! # The Algorithm (Bezdek, 1981)
//!
//! Fuzzy C-Means (FCM) generalizes k-means by replacing the hard assignment
//! step with a continuous membership degree in [0, 1] of every point to
//! every cluster. Unlike k-means, it:
//!
//! - Quantifies how strongly each point belongs to each cluster
//! - Lets points sit between clusters instead of forcing a choice
//! - Still yields a hard partition at the end (strongest cluster per point)
//!
//! ## Core Concepts
//!
//! - **Fuzziness (m)**: exponent > 1 controlling how soft boundaries are.
//!   Values near 1 approach k-means; the classic default is 2.0. The update
//!   formula uses the derived exponent `degree = 2/(m-1)`.
//! - **Membership matrix**: N×C, row i holds point i's degree per cluster.
//! - **Tolerance**: convergence threshold on the maximum center displacement
//!   within one iteration (the worst-moving center decides, not an average).
//!
//! ## Algorithm Steps
//!
//! 1. Copy the caller-supplied initial centers.
//! 2. For each point i and cluster j, update the membership from squared
//!    distance ratios: `u_ij = 1 / Σ_k (d_ij / d_ik)^degree`.
//! 3. For each cluster j, recompute the center as the membership-weighted
//!    mean of all points; record its displacement.
//! 4. Repeat 2-3 until the maximum displacement drops to the tolerance or
//!    the iteration budget runs out.
//! 5. Extract hard clusters: each point joins its maximum-membership cluster.
//!
//! Steps 2 and 3 are embarrassingly parallel (per point and per cluster
//! respectively) and run on the rayon thread pool; the outer loop is a
//! strict phase barrier between them.
//!
//! ## Complexity
//!
//! - **Time**: O(iterations * n * c * d) with n points, c clusters, d dims.
//! - **Space**: O(n * c) for the membership matrix.
//!
//! ## Numeric Edge Cases
//!
//! - A point that coincides exactly with a center gets membership 1.0 for
//!   that center (zero-distance terms are excluded from the ratio sum, and
//!   an empty sum forces 1.0). With several coincident centers, more than
//!   one column of that row can end up at 1.0.
//! - A cluster whose total membership is zero (contrived all-zero or
//!   pathological inputs) produces a divide-by-zero in the weighted mean
//!   and NaN coordinates from then on. This is deliberately not guarded;
//!   results on such inputs are degenerate rather than an error.
//!
//! ## References
//!
//! Bezdek, J. C. (1981). "Pattern Recognition with Fuzzy Objective Function
//! Algorithms." Plenum Press.

use std::time::Instant;

use log::{debug, trace};
use rayon::prelude::*;

use super::traits::{Clustering, SoftClustering};
use super::util::{euclidean, squared_euclidean};
use crate::error::{Error, Result};

/// Fuzzy C-Means clustering algorithm.
#[derive(Debug, Clone)]
pub struct Fcm {
    /// Caller-supplied initial centers; copied into the fit on every run.
    initial_centers: Vec<Vec<f32>>,
    /// Derived exponent `2 / (m - 1)` used in the membership update.
    degree: f32,
    /// Convergence threshold on the maximum center displacement.
    tolerance: f32,
    /// Iteration budget.
    max_iter: usize,
}

/// Results of one Fuzzy C-Means run, populated in place by [`Fcm::process`].
#[derive(Debug, Clone, Default)]
pub struct FcmFit {
    /// Final cluster centers (C×D).
    pub centers: Vec<Vec<f32>>,
    /// Membership matrix (N×C): row i holds point i's degree per cluster.
    pub membership: Vec<Vec<f32>>,
    /// Hard partition: cluster j's member point indices, in ascending order.
    pub clusters: Vec<Vec<usize>>,
    /// Number of iterations the convergence loop ran.
    pub iterations: usize,
    /// Wall-clock time of the whole convergence loop, in milliseconds.
    pub total_iteration_time_ms: f32,
    /// `total_iteration_time_ms / iterations`.
    pub average_iteration_time_ms: f32,
    /// Wall-clock time of the hard-cluster extraction, in milliseconds.
    pub classify_time_ms: f32,
}

impl FcmFit {
    /// Create an empty fit, ready to pass to [`Fcm::process`].
    pub fn new() -> Self {
        Self::default()
    }

    /// One hard label per point, flattened from [`FcmFit::clusters`].
    ///
    /// Empty if `process` has not run or ran with a zero iteration budget.
    pub fn labels(&self) -> Vec<usize> {
        let n: usize = self.clusters.iter().map(Vec::len).sum();
        let mut labels = vec![0; n];
        for (cluster_id, members) in self.clusters.iter().enumerate() {
            for &point_idx in members {
                labels[point_idx] = cluster_id;
            }
        }
        labels
    }
}

impl Fcm {
    /// Default convergence tolerance.
    pub const DEFAULT_TOLERANCE: f32 = 0.001;
    /// Default iteration budget.
    pub const DEFAULT_MAX_ITER: usize = 100;
    /// Classic fuzziness exponent.
    pub const DEFAULT_FUZZINESS: f32 = 2.0;

    /// Create a new Fuzzy C-Means clusterer.
    ///
    /// # Arguments
    ///
    /// * `initial_centers` - Starting centers, one per cluster (C ≥ 1).
    ///   Center selection is the caller's concern; any seeding strategy
    ///   (k-means++ and friends) happens before this.
    /// * `fuzziness` - The exponent `m`. Must be greater than 1.0: the
    ///   membership formula raises distance ratios to `2/(m-1)`.
    ///
    /// Tolerance and iteration budget start at [`Fcm::DEFAULT_TOLERANCE`]
    /// and [`Fcm::DEFAULT_MAX_ITER`]; override with the `with_*` methods.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if `initial_centers` is empty or
    /// `fuzziness <= 1.0`.
    pub fn new(initial_centers: Vec<Vec<f32>>, fuzziness: f32) -> Result<Self> {
        if initial_centers.is_empty() {
            return Err(Error::InvalidParameter {
                name: "initial_centers",
                message: "at least one initial center is required",
            });
        }

        if fuzziness <= 1.0 {
            return Err(Error::InvalidParameter {
                name: "fuzziness",
                message: "must be greater than 1.0",
            });
        }

        Ok(Self {
            initial_centers,
            degree: 2.0 / (fuzziness - 1.0),
            tolerance: Self::DEFAULT_TOLERANCE,
            max_iter: Self::DEFAULT_MAX_ITER,
        })
    }

    /// Set the convergence tolerance (maximum center displacement).
    pub fn with_tolerance(mut self, tolerance: f32) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Set the iteration budget.
    ///
    /// A budget of 0 makes [`Fcm::process`] copy the initial centers and
    /// return immediately: no membership matrix, no clusters, no timings.
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// Sanity-check that data and centers agree on dimensionality.
    ///
    /// Only the first data point is compared against the first center; a
    /// dataset with inconsistent dimensionality past the first entries is
    /// not caught. Callers wanting a full scan must do it themselves.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyInput`] if `data` is empty, [`Error::DimensionMismatch`]
    /// if the first point and first center disagree.
    pub fn verify(&self, data: &[Vec<f32>]) -> Result<()> {
        let first = data.first().ok_or(Error::EmptyInput)?;
        let expected = self.initial_centers[0].len();
        if first.len() != expected {
            return Err(Error::DimensionMismatch {
                expected,
                found: first.len(),
            });
        }
        Ok(())
    }

    /// Run the clustering and populate `fit` in place.
    ///
    /// A reused `fit` is fully reset first, so one value can serve several
    /// runs. On return it holds the final centers, the N×C membership
    /// matrix, the hard clusters, and the timing/iteration diagnostics.
    ///
    /// With a zero iteration budget only the centers are populated (a copy
    /// of the initial centers) and everything else stays empty.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyInput`] if `data` is empty.
    pub fn process(&self, data: &[Vec<f32>], fit: &mut FcmFit) -> Result<()> {
        if data.is_empty() {
            return Err(Error::EmptyInput);
        }

        fit.membership.clear();
        fit.clusters.clear();
        fit.iterations = 0;
        fit.total_iteration_time_ms = 0.0;
        fit.average_iteration_time_ms = 0.0;
        fit.classify_time_ms = 0.0;
        fit.centers = self.initial_centers.clone();

        if self.max_iter == 0 {
            return Ok(());
        }

        fit.membership = vec![vec![0.0; self.initial_centers.len()]; data.len()];

        let mut current_change = f32::INFINITY;
        let mut iteration = 0;

        let loop_start = Instant::now();
        while iteration < self.max_iter && current_change > self.tolerance {
            update_membership(data, &fit.centers, &mut fit.membership, self.degree);
            current_change = update_centers(data, &fit.membership, &mut fit.centers);
            iteration += 1;
            trace!("iteration {iteration}: max center displacement {current_change}");
        }
        let total_ms = loop_start.elapsed().as_secs_f32() * 1000.0;

        // The loop body runs at least once (max_iter >= 1 here), so the
        // average is well defined.
        fit.iterations = iteration;
        fit.total_iteration_time_ms = total_ms;
        fit.average_iteration_time_ms = total_ms / iteration as f32;

        let classify_start = Instant::now();
        fit.clusters = extract_clusters(&fit.membership, fit.centers.len());
        fit.classify_time_ms = classify_start.elapsed().as_secs_f32() * 1000.0;

        debug!(
            "fcm finished after {iteration} iterations, last displacement {current_change}, \
             {} clusters over {} points",
            fit.centers.len(),
            data.len()
        );

        Ok(())
    }
}

impl Clustering for Fcm {
    fn fit_predict(&self, data: &[Vec<f32>]) -> Result<Vec<usize>> {
        let mut fit = FcmFit::new();
        self.process(data, &mut fit)?;
        Ok(fit.labels())
    }

    fn n_clusters(&self) -> usize {
        self.initial_centers.len()
    }
}

impl SoftClustering for Fcm {
    fn fit_memberships(&self, data: &[Vec<f32>]) -> Result<Vec<Vec<f32>>> {
        let mut fit = FcmFit::new();
        self.process(data, &mut fit)?;
        Ok(fit.membership)
    }
}

/// Recompute every membership row against the current centers.
///
/// Rows are independent, so the work fans out across points; each worker
/// writes only its own row and reads the centers snapshot.
fn update_membership(
    data: &[Vec<f32>],
    centers: &[Vec<f32>],
    membership: &mut [Vec<f32>],
    degree: f32,
) {
    membership
        .par_iter_mut()
        .enumerate()
        .for_each(|(i, row)| update_point_membership(&data[i], centers, row, degree));
}

/// Membership update for one point (one row of the matrix).
fn update_point_membership(point: &[f32], centers: &[Vec<f32>], row: &mut [f32], degree: f32) {
    let distances: Vec<f32> = centers
        .iter()
        .map(|center| squared_euclidean(point, center))
        .collect();

    for (j, slot) in row.iter_mut().enumerate() {
        let mut divider = 0.0;
        for &dk in &distances {
            // Zero-distance terms are excluded from the ratio sum.
            if dk != 0.0 {
                divider += (distances[j] / dk).powf(degree);
            }
        }

        // An empty sum means the point sits exactly on this center.
        *slot = if divider == 0.0 { 1.0 } else { 1.0 / divider };
    }
}

/// Recompute every center as the membership-weighted mean of the data and
/// return the largest displacement (the convergence signal).
///
/// Clusters are independent, so the work fans out across centers; each
/// worker overwrites only its own center and reads the membership snapshot.
fn update_centers(data: &[Vec<f32>], membership: &[Vec<f32>], centers: &mut [Vec<f32>]) -> f32 {
    centers
        .par_iter_mut()
        .enumerate()
        .map(|(j, center)| update_center(data, membership, j, center))
        .reduce(|| 0.0, f32::max)
}

/// Weighted-mean update for one center; returns its displacement.
fn update_center(
    data: &[Vec<f32>],
    membership: &[Vec<f32>],
    cluster: usize,
    center: &mut Vec<f32>,
) -> f32 {
    let dimensions = center.len();

    let mut dividend = vec![0.0; dimensions];
    let mut divider = 0.0;
    for (point, row) in data.iter().zip(membership.iter()) {
        let weight = row[cluster];
        divider += weight;
        for (sum, &coordinate) in dividend.iter_mut().zip(point.iter()) {
            *sum += coordinate * weight;
        }
    }

    // A zero total membership yields NaN coordinates here; degenerate
    // inputs are left unguarded (see module docs).
    let updated: Vec<f32> = dividend.iter().map(|sum| sum / divider).collect();

    let change = euclidean(&updated, center);
    *center = updated;
    change
}

/// Hard partition: each point joins its maximum-membership cluster, ties
/// going to the lowest cluster index. Serial single pass.
fn extract_clusters(membership: &[Vec<f32>], num_clusters: usize) -> Vec<Vec<usize>> {
    let mut clusters = vec![Vec::new(); num_clusters];

    for (i, row) in membership.iter().enumerate() {
        let mut best = 0;
        for (j, &value) in row.iter().enumerate() {
            if value > row[best] {
                best = j;
            }
        }
        clusters[best].push(i);
    }

    clusters
}
