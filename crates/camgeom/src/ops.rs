use thiserror::Error;

use crate::linalg;
use crate::transforms;

/// Error types for point-set operations.
#[derive(Debug, Error)]
pub enum PointOpsError {
    /// The input matrix has too few rows to hold a scale coordinate.
    #[error("expected homogeneous points with at least 2 rows, got {rows}")]
    NotHomogeneous {
        /// Number of rows in the input matrix.
        rows: usize,
    },
}

/// Convert Cartesian coordinates to homogeneous coordinates.
///
/// Appends a row of ones to an `M x N` matrix of N points with M dimensions,
/// producing an `(M + 1) x N` matrix (one point per column).
///
/// # Arguments
///
/// * `points` - An `M x N` matrix of Cartesian points.
///
/// # Returns
///
/// The `(M + 1) x N` matrix of homogeneous points.
pub fn homogeneize(points: &faer::Mat<f64>) -> faer::Mat<f64> {
    let m = points.nrows();
    faer::Mat::from_fn(m + 1, points.ncols(), |i, j| {
        if i == m {
            1.0
        } else {
            points.read(i, j)
        }
    })
}

/// Convert homogeneous coordinates back to Cartesian coordinates.
///
/// Divides every row but the last by the last row (per column) and drops the
/// last row, turning an `(M + 1) x N` matrix into an `M x N` one.
///
/// A zero scale coordinate propagates IEEE infinities/NaNs into the affected
/// column; no error is raised for it.
///
/// # Arguments
///
/// * `points` - An `(M + 1) x N` matrix of homogeneous points.
///
/// # Returns
///
/// The `M x N` matrix of Cartesian points, or
/// [`PointOpsError::NotHomogeneous`] when the input has fewer than two rows.
pub fn dehomogeneize(points: &faer::Mat<f64>) -> Result<faer::Mat<f64>, PointOpsError> {
    let rows = points.nrows();
    if rows < 2 {
        return Err(PointOpsError::NotHomogeneous { rows });
    }
    let m = rows - 1;
    Ok(faer::Mat::from_fn(m, points.ncols(), |i, j| {
        points.read(i, j) / points.read(m, j)
    }))
}

/// Transform a set of points using a rotation and translation.
///
/// # Arguments
///
/// * `src_points` - A set of points to be transformed.
/// * `rotation` - A rotation matrix.
/// * `translation` - A translation vector.
///
/// # Returns
///
/// The transformed points.
///
/// Example:
///
/// ```
/// use camgeom::ops::transform_points;
///
/// let src_points = vec![[2.0, 2.0, 2.0], [3.0, 4.0, 5.0]];
/// let rotation = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];
/// let translation = [0.0, 0.0, 0.0];
/// let dst_points = transform_points(&src_points, &rotation, &translation);
/// assert_eq!(dst_points, src_points);
/// ```
pub fn transform_points(
    src_points: &[[f64; 3]],
    rotation: &[[f64; 3]; 3],
    translation: &[f64; 3],
) -> Vec<[f64; 3]> {
    src_points
        .iter()
        .map(|point| {
            let mut rotated = [0.0; 3];
            linalg::mat33_mul_vec3(rotation, point, &mut rotated);
            [
                rotated[0] + translation[0],
                rotated[1] + translation[1],
                rotated[2] + translation[2],
            ]
        })
        .collect()
}

// K * p_cam followed by the perspective divide, with the optional x flip
// for OpenGL-style camera axes.
fn project_camera_point(point_cam: &[f64; 3], k: &[[f64; 3]; 3], flip_x: bool) -> [f64; 2] {
    let point_cam = if flip_x {
        [-point_cam[0], point_cam[1], point_cam[2]]
    } else {
        *point_cam
    };
    let mut point_img = [0.0; 3];
    linalg::mat33_mul_vec3(k, &point_cam, &mut point_img);
    [point_img[0] / point_img[2], point_img[1] / point_img[2]]
}

/// Project 3D world points to 2D pixel coordinates.
///
/// Each point is mapped to the camera frame by the rigid transform, optionally
/// flipped along the camera x axis (to convert between OpenGL-style and
/// computer-vision camera axis conventions), pushed through the camera matrix
/// and perspective-divided by depth.
///
/// A point at zero depth propagates IEEE infinities/NaNs into its output
/// coordinates; no error is raised for it.
///
/// # Arguments
///
/// * `points_world` - The world points, one per row.
/// * `k` - A 3x3 camera matrix.
/// * `cam_t_world` - The 4x4 world-to-camera transformation matrix.
/// * `flip_x` - Negate the camera-space x axis before applying `k`.
///
/// # Returns
///
/// A vector of pixel coordinates `[u, v]`, one per input point.
///
/// Example:
///
/// ```
/// use camgeom::ops::project_points;
///
/// let k = [[1000.0, 0.0, 320.0], [0.0, 1000.0, 240.0], [0.0, 0.0, 1.0]];
/// let identity = [
///     [1.0, 0.0, 0.0, 0.0],
///     [0.0, 1.0, 0.0, 0.0],
///     [0.0, 0.0, 1.0, 0.0],
///     [0.0, 0.0, 0.0, 1.0],
/// ];
/// // a point on the optical axis projects to the principal point
/// let pixels = project_points(&[[0.0, 0.0, 5.0]], &k, &identity, false);
/// assert_eq!(pixels[0], [320.0, 240.0]);
/// ```
pub fn project_points(
    points_world: &[[f64; 3]],
    k: &[[f64; 3]; 3],
    cam_t_world: &[[f64; 4]; 4],
    flip_x: bool,
) -> Vec<[f64; 2]> {
    let (rotation, translation) = transforms::transform_to_rt(cam_t_world);
    transform_points(points_world, &rotation, &translation)
        .iter()
        .map(|point_cam| project_camera_point(point_cam, k, flip_x))
        .collect()
}

/// Project homogeneous 3D world points to 2D pixel coordinates.
///
/// Variant of [`project_points`] for points that already carry a scale
/// coordinate: the full 4x4 transform is applied to each 4-vector and the
/// scale row is dropped before the intrinsics, as in the planar-calibration
/// pipeline where poses act on homogeneous points. The zero-depth behavior
/// and `flip_x` semantics match [`project_points`].
///
/// # Arguments
///
/// * `points_world` - The homogeneous world points, one per row.
/// * `k` - A 3x3 camera matrix.
/// * `cam_t_world` - The 4x4 world-to-camera transformation matrix.
/// * `flip_x` - Negate the camera-space x axis before applying `k`.
///
/// # Returns
///
/// A vector of pixel coordinates `[u, v]`, one per input point.
pub fn project_points_homogeneous(
    points_world: &[[f64; 4]],
    k: &[[f64; 3]; 3],
    cam_t_world: &[[f64; 4]; 4],
    flip_x: bool,
) -> Vec<[f64; 2]> {
    points_world
        .iter()
        .map(|point| {
            let mut point_cam = [0.0; 3];
            for (row, out) in cam_t_world.iter().take(3).zip(point_cam.iter_mut()) {
                *out = row[0] * point[0] + row[1] * point[1] + row[2] * point[2] + row[3] * point[3];
            }
            project_camera_point(&point_cam, k, flip_x)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const IDENTITY4: [[f64; 4]; 4] = [
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ];

    fn camera_matrix() -> [[f64; 3]; 3] {
        [[1000.0, 0.0, 320.0], [0.0, 1000.0, 240.0], [0.0, 0.0, 1.0]]
    }

    #[test]
    fn test_homogeneize_appends_ones() {
        let points = faer::mat![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
        let homogeneous = homogeneize(&points);

        assert_eq!(homogeneous.nrows(), 3);
        assert_eq!(homogeneous.ncols(), 3);
        for j in 0..3 {
            assert_eq!(homogeneous.read(0, j), points.read(0, j));
            assert_eq!(homogeneous.read(1, j), points.read(1, j));
            assert_eq!(homogeneous.read(2, j), 1.0);
        }
    }

    #[test]
    fn test_homogeneous_roundtrip() -> Result<(), Box<dyn std::error::Error>> {
        let points = faer::mat![[1.0, -2.0, 3.5], [0.0, 5.0, -6.25]];
        let back = dehomogeneize(&homogeneize(&points))?;

        assert_eq!(back.nrows(), points.nrows());
        assert_eq!(back.ncols(), points.ncols());
        for i in 0..2 {
            for j in 0..3 {
                assert_eq!(back.read(i, j), points.read(i, j));
            }
        }
        Ok(())
    }

    #[test]
    fn test_dehomogeneize_scales() -> Result<(), Box<dyn std::error::Error>> {
        let points = faer::mat![[2.0, 9.0], [4.0, -3.0], [2.0, 3.0]];
        let cartesian = dehomogeneize(&points)?;

        assert_eq!(cartesian.read(0, 0), 1.0);
        assert_eq!(cartesian.read(1, 0), 2.0);
        assert_eq!(cartesian.read(0, 1), 3.0);
        assert_eq!(cartesian.read(1, 1), -1.0);
        Ok(())
    }

    #[test]
    fn test_dehomogeneize_too_few_rows() {
        let points = faer::mat![[1.0, 2.0, 3.0]];
        assert!(dehomogeneize(&points).is_err());
    }

    #[test]
    fn test_dehomogeneize_zero_scale() -> Result<(), Box<dyn std::error::Error>> {
        let points = faer::mat![[1.0], [2.0], [0.0]];
        let cartesian = dehomogeneize(&points)?;

        assert!(cartesian.read(0, 0).is_infinite());
        assert!(cartesian.read(1, 0).is_infinite());
        Ok(())
    }

    #[test]
    fn test_transform_points_translation() {
        let src_points = vec![[2.0, 2.0, 2.0], [3.0, 4.0, 5.0]];
        let rotation = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];
        let translation = [1.0, 2.0, 3.0];
        let dst_points = transform_points(&src_points, &rotation, &translation);

        assert_eq!(dst_points, vec![[3.0, 4.0, 5.0], [4.0, 6.0, 8.0]]);
    }

    #[test]
    fn test_project_points_principal_point() {
        let pixels = project_points(&[[0.0, 0.0, 5.0]], &camera_matrix(), &IDENTITY4, false);

        assert_eq!(pixels.len(), 1);
        assert_relative_eq!(pixels[0][0], 320.0, epsilon = 1e-9);
        assert_relative_eq!(pixels[0][1], 240.0, epsilon = 1e-9);
    }

    #[test]
    fn test_project_points_off_axis() {
        let pixels = project_points(&[[1.0, 2.0, 10.0]], &camera_matrix(), &IDENTITY4, false);

        assert_relative_eq!(pixels[0][0], 1000.0 * 1.0 / 10.0 + 320.0, epsilon = 1e-9);
        assert_relative_eq!(pixels[0][1], 1000.0 * 2.0 / 10.0 + 240.0, epsilon = 1e-9);
    }

    #[test]
    fn test_project_points_flip_x() {
        let pixels = project_points(&[[1.0, 0.0, 5.0]], &camera_matrix(), &IDENTITY4, true);

        // flipped x mirrors the pixel about the principal point
        assert_relative_eq!(pixels[0][0], 320.0 - 200.0, epsilon = 1e-9);
        assert_relative_eq!(pixels[0][1], 240.0, epsilon = 1e-9);
    }

    #[test]
    fn test_project_points_with_pose() -> Result<(), Box<dyn std::error::Error>> {
        let rotation = transforms::axis_angle_to_rotation(&[0.0, 1.0, 0.0], 0.3)?;
        let translation = [0.1, -0.2, 1.0];
        let cam_t_world = transforms::rt_to_transform(&rotation, &translation);

        let point_world = [0.4, 0.2, 6.0];
        let point_cam = transform_points(&[point_world], &rotation, &translation)[0];
        let expected = [
            1000.0 * point_cam[0] / point_cam[2] + 320.0,
            1000.0 * point_cam[1] / point_cam[2] + 240.0,
        ];

        let pixels = project_points(&[point_world], &camera_matrix(), &cam_t_world, false);
        assert_relative_eq!(pixels[0][0], expected[0], epsilon = 1e-9);
        assert_relative_eq!(pixels[0][1], expected[1], epsilon = 1e-9);
        Ok(())
    }

    #[test]
    fn test_project_points_zero_depth() {
        let pixels = project_points(&[[1.0, 1.0, 0.0]], &camera_matrix(), &IDENTITY4, false);

        assert!(!pixels[0][0].is_finite());
        assert!(!pixels[0][1].is_finite());
    }

    #[test]
    fn test_project_points_homogeneous_matches_cartesian() {
        let homogeneous = [[1.0, 2.0, 10.0, 1.0], [0.0, 0.0, 5.0, 1.0]];
        let cartesian = [[1.0, 2.0, 10.0], [0.0, 0.0, 5.0]];

        let from_homogeneous =
            project_points_homogeneous(&homogeneous, &camera_matrix(), &IDENTITY4, false);
        let from_cartesian = project_points(&cartesian, &camera_matrix(), &IDENTITY4, false);

        for (a, b) in from_homogeneous.iter().zip(from_cartesian.iter()) {
            assert_relative_eq!(a[0], b[0], epsilon = 1e-9);
            assert_relative_eq!(a[1], b[1], epsilon = 1e-9);
        }
    }

    #[test]
    fn test_project_points_homogeneous_translation() {
        let rotation = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];
        let cam_t_world = transforms::rt_to_transform(&rotation, &[1.0, 2.0, 0.0]);

        let pixels =
            project_points_homogeneous(&[[0.0, 0.0, 5.0, 1.0]], &camera_matrix(), &cam_t_world, false);

        assert_relative_eq!(pixels[0][0], 1000.0 * 1.0 / 5.0 + 320.0, epsilon = 1e-9);
        assert_relative_eq!(pixels[0][1], 1000.0 * 2.0 / 5.0 + 240.0, epsilon = 1e-9);
    }
}
