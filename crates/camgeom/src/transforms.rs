use thiserror::Error;

/// Error types for rigid transform construction.
#[derive(Debug, Error)]
pub enum TransformError {
    /// The rotation axis has (near) zero length.
    #[error("cannot build a rotation from a zero-length axis")]
    ZeroAxis,
}

/// Build a 4x4 rigid transformation matrix from a rotation and a translation.
///
/// The rotation occupies the top-left 3x3 block, the translation the top-right
/// column, and the bottom row is `[0, 0, 0, 1]`. The rotation is not checked
/// for orthonormality.
///
/// # Arguments
///
/// * `rotation` - A 3x3 rotation matrix.
/// * `translation` - A translation vector.
///
/// # Returns
///
/// The 4x4 transformation matrix (SE(3)).
///
/// Example:
///
/// ```
/// use camgeom::transforms::rt_to_transform;
///
/// let rotation = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];
/// let translation = [1.0, 2.0, 3.0];
/// let transform = rt_to_transform(&rotation, &translation);
/// assert_eq!(transform[0][3], 1.0);
/// assert_eq!(transform[3], [0.0, 0.0, 0.0, 1.0]);
/// ```
pub fn rt_to_transform(rotation: &[[f64; 3]; 3], translation: &[f64; 3]) -> [[f64; 4]; 4] {
    let mut transform = [[0.0; 4]; 4];
    for i in 0..3 {
        transform[i][..3].copy_from_slice(&rotation[i]);
        transform[i][3] = translation[i];
    }
    transform[3] = [0.0, 0.0, 0.0, 1.0];
    transform
}

/// Unpack a 4x4 rigid transformation matrix into its rotation and translation.
///
/// Inverse of [`rt_to_transform`]: extracts the top-left 3x3 block and the
/// top-right column. The bottom row is ignored.
///
/// # Arguments
///
/// * `transform` - A 4x4 transformation matrix.
///
/// # Returns
///
/// The rotation matrix and the translation vector.
pub fn transform_to_rt(transform: &[[f64; 4]; 4]) -> ([[f64; 3]; 3], [f64; 3]) {
    let mut rotation = [[0.0; 3]; 3];
    let mut translation = [0.0; 3];
    for i in 0..3 {
        rotation[i].copy_from_slice(&transform[i][..3]);
        translation[i] = transform[i][3];
    }
    (rotation, translation)
}

/// Invert a 4x4 rigid transformation matrix.
///
/// Uses the rigid-motion structure: for a transform with rotation block `R`
/// and translation `t`, the inverse is `[[R^T, -R^T * t], [0, 0, 0, 1]]`.
///
/// PRECONDITION: the rotation block is orthonormal. The shortcut relies on
/// `R^T = R^-1` and produces a wrong result otherwise; no runtime check is
/// performed.
///
/// # Arguments
///
/// * `transform` - A 4x4 transformation matrix.
///
/// # Returns
///
/// The inverted 4x4 transformation matrix.
pub fn inverse_transform(transform: &[[f64; 4]; 4]) -> [[f64; 4]; 4] {
    let (rotation, translation) = transform_to_rt(transform);
    // R' = R^T
    let rotation_inv = crate::linalg::mat33_transpose(&rotation);
    // t' = -R^T * t
    let mut translation_inv = [0.0; 3];
    crate::linalg::mat33_mul_vec3(&rotation_inv, &translation, &mut translation_inv);
    for val in translation_inv.iter_mut() {
        *val = -*val;
    }
    rt_to_transform(&rotation_inv, &translation_inv)
}

/// Compute the rotation matrix from an axis and angle.
///
/// # Arguments
///
/// * `axis` - The axis of rotation.
/// * `angle` - The angle of rotation in radians.
///
/// # Returns
///
/// The rotation matrix.
///
/// Example:
///
/// ```
/// use camgeom::transforms::axis_angle_to_rotation;
///
/// let axis = [0.0, 0.0, 1.0];
/// let rotation = axis_angle_to_rotation(&axis, 0.0).unwrap();
/// assert_eq!(rotation, [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);
/// ```
pub fn axis_angle_to_rotation(
    axis: &[f64; 3],
    angle: f64,
) -> Result<[[f64; 3]; 3], TransformError> {
    let magnitude = crate::linalg::norm3(axis);
    if magnitude < 1e-10 {
        return Err(TransformError::ZeroAxis);
    }
    let (x, y, z) = (axis[0] / magnitude, axis[1] / magnitude, axis[2] / magnitude);

    let c = angle.cos();
    let s = angle.sin();
    let t = 1.0 - c;

    Ok([
        [c + x * x * t, x * y * t - z * s, x * z * t + y * s],
        [x * y * t + z * s, c + y * y * t, y * z * t - x * s],
        [x * z * t - y * s, y * z * t + x * s, c + z * z * t],
    ])
}
