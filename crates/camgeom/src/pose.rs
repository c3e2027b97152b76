use thiserror::Error;

use crate::camera::{self, CameraError};
use crate::linalg;
use crate::transforms;

/// Error types for pose recovery.
#[derive(Debug, Error)]
pub enum PoseError {
    /// The camera matrix cannot be inverted.
    #[error(transparent)]
    Camera(#[from] CameraError),

    /// The first homography column maps to the zero vector, so the
    /// normalization scale is undefined.
    #[error("degenerate homography: first column maps to zero under K^-1")]
    DegenerateHomography,
}

/// Find the rotation matrix closest to `m` in Frobenius norm.
///
/// Decomposes `m = U * S * V^T` and drops the singular values: the product
/// `U * V^T` is the polar-decomposition orthonormal factor. For an input
/// that drifted off a proper rotation by noise, the result satisfies
/// `R^T * R = I` and `det(R) = +1`.
///
/// # Arguments
///
/// * `m` - A 3x3 matrix, expected to be close to a rotation.
///
/// # Returns
///
/// The nearest rotation matrix.
pub fn nearest_rotation(m: &[[f64; 3]; 3]) -> [[f64; 3]; 3] {
    let svd = linalg::mat33_to_faer(m).svd();
    let refined = svd.u() * svd.v().transpose();
    linalg::faer_to_mat33(refined.as_ref())
}

/// Recover the camera pose from intrinsics and a planar homography.
///
/// Implements Zhang's calibration method ("A Flexible New Technique for
/// Camera Calibration", pg. 6): for a homography `H = K * [r1 r2 t]` (up to
/// scale) of a plane at z = 0, the first two rotation columns and the
/// translation are read off `K^-1 * H` after normalizing by the length of
/// the first column; the third rotation column is `r1 x r2`. The assembled
/// rotation is then refined to the nearest proper rotation via SVD
/// (Appendix C), which absorbs the numerical drift of the raw estimate.
///
/// # Arguments
///
/// * `k` - A 3x3 camera matrix.
/// * `h` - A 3x3 homography mapping plane coordinates to image coordinates,
///   e.g. one estimated from a calibration target.
///
/// # Returns
///
/// The 4x4 transformation matrix (SE(3)) from world space to camera space.
///
/// Example:
///
/// ```
/// use camgeom::pose::pose_from_homography;
///
/// // zero rotation, translation (0, 0, 5): H = K * [e1 e2 t]
/// let k = [[1000.0, 0.0, 320.0], [0.0, 1000.0, 240.0], [0.0, 0.0, 1.0]];
/// let h = [[1000.0, 0.0, 1600.0], [0.0, 1000.0, 1200.0], [0.0, 0.0, 5.0]];
/// let pose = pose_from_homography(&k, &h).unwrap();
/// assert!((pose[2][3] - 5.0).abs() < 1e-9);
/// ```
pub fn pose_from_homography(
    k: &[[f64; 3]; 3],
    h: &[[f64; 3]; 3],
) -> Result<[[f64; 4]; 4], PoseError> {
    let k_inv = camera::inverse_camera_matrix(k)?;

    // columns of H
    let h1 = [h[0][0], h[1][0], h[2][0]];
    let h2 = [h[0][1], h[1][1], h[2][1]];
    let h3 = [h[0][2], h[1][2], h[2][2]];

    let mut kh1 = [0.0; 3];
    let mut kh2 = [0.0; 3];
    let mut kh3 = [0.0; 3];
    linalg::mat33_mul_vec3(&k_inv, &h1, &mut kh1);
    linalg::mat33_mul_vec3(&k_inv, &h2, &mut kh2);
    linalg::mat33_mul_vec3(&k_inv, &h3, &mut kh3);

    let norm = linalg::norm3(&kh1);
    if norm < 1e-12 {
        return Err(PoseError::DegenerateHomography);
    }
    let lambda = 1.0 / norm;

    let r1 = [lambda * kh1[0], lambda * kh1[1], lambda * kh1[2]];
    let r2 = [lambda * kh2[0], lambda * kh2[1], lambda * kh2[2]];
    // r3 is orthogonal to r1 and r2 by construction; h3 carries the translation
    let mut r3 = [0.0; 3];
    linalg::cross3(&r1, &r2, &mut r3);
    let translation = [lambda * kh3[0], lambda * kh3[1], lambda * kh3[2]];

    // assemble R = [r1 | r2 | r3] column-wise and refine it to a proper rotation
    let rotation_raw = [
        [r1[0], r2[0], r3[0]],
        [r1[1], r2[1], r3[1]],
        [r1[2], r2[2], r3[2]],
    ];
    let rotation = nearest_rotation(&rotation_raw);

    Ok(transforms::rt_to_transform(&rotation, &translation))
}
