/// Dot product of two 3-vectors.
pub fn dot3(a: &[f64; 3], b: &[f64; 3]) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

/// Euclidean (L2) norm of a 3-vector.
pub fn norm3(a: &[f64; 3]) -> f64 {
    dot3(a, a).sqrt()
}

/// Cross product of two 3-vectors.
///
/// * `a` - The left operand.
/// * `b` - The right operand.
/// * `dst` - The output vector `a x b`.
pub fn cross3(a: &[f64; 3], b: &[f64; 3], dst: &mut [f64; 3]) {
    dst[0] = a[1] * b[2] - a[2] * b[1];
    dst[1] = a[2] * b[0] - a[0] * b[2];
    dst[2] = a[0] * b[1] - a[1] * b[0];
}

/// Multiply a 3x3 matrix by a 3-vector.
///
/// * `m` - The matrix in row-major layout.
/// * `v` - The vector.
/// * `dst` - The output vector `m * v`.
pub fn mat33_mul_vec3(m: &[[f64; 3]; 3], v: &[f64; 3], dst: &mut [f64; 3]) {
    for (row, out) in m.iter().zip(dst.iter_mut()) {
        *out = dot3(row, v);
    }
}

/// Multiply two 3x3 matrices.
pub fn mat33_mul_mat33(a: &[[f64; 3]; 3], b: &[[f64; 3]; 3], dst: &mut [[f64; 3]; 3]) {
    for i in 0..3 {
        for j in 0..3 {
            dst[i][j] = a[i][0] * b[0][j] + a[i][1] * b[1][j] + a[i][2] * b[2][j];
        }
    }
}

/// Multiply two 4x4 matrices.
pub fn mat44_mul_mat44(a: &[[f64; 4]; 4], b: &[[f64; 4]; 4], dst: &mut [[f64; 4]; 4]) {
    for i in 0..4 {
        for j in 0..4 {
            dst[i][j] =
                a[i][0] * b[0][j] + a[i][1] * b[1][j] + a[i][2] * b[2][j] + a[i][3] * b[3][j];
        }
    }
}

/// Transpose of a 3x3 matrix.
pub fn mat33_transpose(m: &[[f64; 3]; 3]) -> [[f64; 3]; 3] {
    [
        [m[0][0], m[1][0], m[2][0]],
        [m[0][1], m[1][1], m[2][1]],
        [m[0][2], m[1][2], m[2][2]],
    ]
}

/// Determinant of a 3x3 matrix.
pub fn det_mat33(m: &[[f64; 3]; 3]) -> f64 {
    m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
        - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
        + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
}

/// Copy a 3x3 array into a faer matrix.
pub fn mat33_to_faer(m: &[[f64; 3]; 3]) -> faer::Mat<f64> {
    faer::Mat::from_fn(3, 3, |i, j| m[i][j])
}

/// Copy a faer matrix view back into a 3x3 array.
///
/// PRECONDITION: the view has shape (3, 3).
pub fn faer_to_mat33(m: faer::MatRef<'_, f64>) -> [[f64; 3]; 3] {
    let mut dst = [[0.0; 3]; 3];
    for (i, row) in dst.iter_mut().enumerate() {
        for (j, val) in row.iter_mut().enumerate() {
            *val = m.read(i, j);
        }
    }
    dst
}
