#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Pinhole camera intrinsics.
pub mod camera;

/// Linear algebra utilities.
pub mod linalg;

/// Operations on point sets: homogeneous conversion and projection.
pub mod ops;

/// Camera pose recovery from planar homographies.
pub mod pose;

/// Terminal output helpers.
pub mod term;

/// Rigid 3D transforms.
pub mod transforms;
