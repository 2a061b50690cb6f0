//! Fuzzy C-Means clustering for grouping similar items.
//!
//! This module provides soft-partition clustering for dense vectors.
//!
//! ## Hard vs Soft Clustering
//!
//! **Hard clustering** assigns each item to exactly one cluster. Simple, but
//! loses information when items genuinely span multiple groups.
//!
//! **Soft clustering** gives each item a membership degree per cluster.
//! A text chunk might be 60% about "machine learning", 30% about "statistics",
//! 10% about "software". This reflects reality better than forcing a choice.
//!
//! Fuzzy C-Means produces both: a membership matrix, and a hard partition
//! derived from it by taking each point's strongest cluster.
//!
//! ## Algorithm
//!
//! ### Fuzzy C-Means (Bezdek, 1981)
//!
//! The fuzzy generalization of k-means: alternate between computing every
//! point's membership to every center from distance ratios, and recomputing
//! each center as the membership-weighted mean of all points. Repeat until
//! the worst-moving center's displacement falls under a tolerance.
//!
//! **Objective**: Minimize the weighted within-cluster sum of squares:
//!
//! ```text
//! J = Σ_i Σ_j u_ij^m ||x_i - c_j||²
//! ```
//!
//! where `u_ij` is the membership of point `i` in cluster `j` and `m > 1`
//! is the fuzziness exponent. The membership update uses the derived
//! exponent `degree = 2/(m-1)`:
//!
//! ```text
//! u_ij = 1 / Σ_k ( d(i,j) / d(i,k) )^degree
//! ```
//!
//! with `d` the squared Euclidean distance. As `m → 1` memberships harden
//! toward 0/1 (k-means behavior); larger `m` makes boundaries softer.
//!
//! **Assumptions**:
//! - Clusters are roughly spherical
//! - You know the number of clusters in advance
//! - Initial centers are supplied by the caller (no seeding heuristic here)
//!
//! **When to use**: overlapping groups where per-cluster affinity matters,
//! or when downstream consumers want graded assignments rather than labels.
//!
//! ## Usage
//!
//! ```rust
//! use fcmeans::cluster::{Clustering, Fcm, FcmFit};
//!
//! let data = vec![
//!     vec![0.0, 0.0],
//!     vec![0.0, 1.0],
//!     vec![10.0, 0.0],
//!     vec![10.0, 1.0],
//! ];
//!
//! // Caller supplies the initial centers.
//! let fcm = Fcm::new(vec![vec![0.0, 0.0], vec![10.0, 0.0]], 2.0).unwrap();
//!
//! // Hard labels via the common trait...
//! let labels = fcm.fit_predict(&data).unwrap();
//! assert_eq!(labels[0], labels[1]);  // First two together
//! assert_ne!(labels[0], labels[2]);  // Separate from last two
//!
//! // ...or the full result: centers, memberships, clusters, diagnostics.
//! let mut fit = FcmFit::new();
//! fcm.process(&data, &mut fit).unwrap();
//! assert_eq!(fit.clusters, vec![vec![0, 1], vec![2, 3]]);
//! assert!(fit.membership[0][0] > 0.99);
//! ```

mod fcm;
mod traits;
mod util;

pub use fcm::{Fcm, FcmFit};
pub use traits::{Clustering, SoftClustering};
