//! Fuzzy C-Means soft clustering.
//!
//! `fcmeans` is a small library implementing Fuzzy C-Means (FCM) clustering
//! for dense vectors: instead of assigning each point to exactly one cluster,
//! it computes a membership degree of every point to every cluster and
//! refines centers and memberships until the centers stabilize.
//!
//! The primary public API is under [`cluster`], which provides:
//! - [`cluster::Fcm`]: the algorithm (construction, `process`, convergence loop)
//! - [`cluster::FcmFit`]: centers, membership matrix, hard clusters, diagnostics
//! - [`cluster::Clustering`] / [`cluster::SoftClustering`]: hard- and soft-label views

#![forbid(unsafe_code)]

pub mod cluster;
pub mod error;

pub use cluster::{Clustering, Fcm, FcmFit, SoftClustering};
pub use error::{Error, Result};
