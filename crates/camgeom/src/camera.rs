use thiserror::Error;

/// Error types for camera intrinsics operations.
#[derive(Debug, Error)]
pub enum CameraError {
    /// A focal length is zero, so the closed-form inverse divides by zero.
    #[error("degenerate focal length (fx = {fx}, fy = {fy})")]
    DegenerateFocalLength {
        /// Focal length along x in pixels.
        fx: f64,
        /// Focal length along y in pixels.
        fy: f64,
    },
}

/// The intrinsic parameters of a pinhole camera.
#[derive(Debug, Clone, PartialEq)]
pub struct PinholeCamera {
    /// The focal length along x in pixels.
    pub fx: f64,
    /// The focal length along y in pixels.
    pub fy: f64,
    /// The axis skew.
    pub skew: f64,
    /// The principal point x coordinate in pixels.
    pub cx: f64,
    /// The principal point y coordinate in pixels.
    pub cy: f64,
}

impl PinholeCamera {
    /// Create a new pinhole camera with zero skew.
    pub fn new(fx: f64, fy: f64, cx: f64, cy: f64) -> Self {
        Self {
            fx,
            fy,
            skew: 0.0,
            cx,
            cy,
        }
    }

    /// Read the intrinsic parameters off a 3x3 camera matrix.
    ///
    /// Only the pinhole sparsity pattern is read; other entries are ignored.
    pub fn from_matrix(k: &[[f64; 3]; 3]) -> Self {
        Self {
            fx: k[0][0],
            fy: k[1][1],
            skew: k[0][1],
            cx: k[0][2],
            cy: k[1][2],
        }
    }

    /// The 3x3 camera matrix.
    pub fn matrix(&self) -> [[f64; 3]; 3] {
        [
            [self.fx, self.skew, self.cx],
            [0.0, self.fy, self.cy],
            [0.0, 0.0, 1.0],
        ]
    }

    /// The inverse of the 3x3 camera matrix.
    ///
    /// See [`inverse_camera_matrix`].
    pub fn inverse_matrix(&self) -> Result<[[f64; 3]; 3], CameraError> {
        inverse_camera_matrix(&self.matrix())
    }
}

/// Compute the inverse of a 3x3 pinhole camera matrix.
///
/// Exploits the upper-triangular sparsity pattern of the camera matrix
/// (focal lengths on the diagonal, skew at (0, 1), principal point in the
/// last column, 1 at (2, 2)) instead of a general 3x3 inverse:
///
/// ```text
/// Kinv = [[1/fx, -s/(fx*fy), -cx/fx + cy*s/(fx*fy)],
///         [   0,       1/fy,                -cy/fy],
///         [   0,          0,                     1]]
/// ```
///
/// Entries outside the pattern are trusted to be zero.
///
/// # Arguments
///
/// * `k` - A 3x3 camera matrix.
///
/// # Returns
///
/// The inverse of `k`, or [`CameraError::DegenerateFocalLength`] when either
/// focal length is zero.
///
/// Example:
///
/// ```
/// use camgeom::camera::inverse_camera_matrix;
///
/// let k = [[1000.0, 0.0, 320.0], [0.0, 1000.0, 240.0], [0.0, 0.0, 1.0]];
/// let k_inv = inverse_camera_matrix(&k).unwrap();
/// assert_eq!(k_inv[0][0], 1e-3);
/// assert_eq!(k_inv[0][2], -0.32);
/// ```
pub fn inverse_camera_matrix(k: &[[f64; 3]; 3]) -> Result<[[f64; 3]; 3], CameraError> {
    let (fx, fy, skew, cx, cy) = (k[0][0], k[1][1], k[0][1], k[0][2], k[1][2]);
    if fx == 0.0 || fy == 0.0 {
        return Err(CameraError::DegenerateFocalLength { fx, fy });
    }

    Ok([
        [
            1.0 / fx,
            -skew / (fx * fy),
            -cx / fx + cy * skew / (fx * fy),
        ],
        [0.0, 1.0 / fy, -cy / fy],
        [0.0, 0.0, 1.0],
    ])
}
