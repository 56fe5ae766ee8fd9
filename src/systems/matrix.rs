//! Instance matrix packing
//!
//! Layout matches three.js `Matrix4.elements`: column-major, 16 floats per
//! instance, so the host can copy straight into `instanceMatrix.array`.

use crate::domain::Transform;

pub const MATRIX_FLOATS: usize = 16;

/// Write `t` as translation * rotation(Euler XYZ) * uniform scale.
#[inline]
pub fn write_instance_matrix(out: &mut [f32], t: &Transform) {
    debug_assert!(out.len() >= MATRIX_FLOATS);

    let (b, a) = t.rotation.x.sin_cos();
    let (d, c) = t.rotation.y.sin_cos();
    let (f, e) = t.rotation.z.sin_cos();
    let s = t.scale;

    let ae = a * e;
    let af = a * f;
    let be = b * e;
    let bf = b * f;

    // Column 0
    out[0] = c * e * s;
    out[1] = (af + be * d) * s;
    out[2] = (bf - ae * d) * s;
    out[3] = 0.0;
    // Column 1
    out[4] = -c * f * s;
    out[5] = (ae - bf * d) * s;
    out[6] = (be + af * d) * s;
    out[7] = 0.0;
    // Column 2
    out[8] = d * s;
    out[9] = -b * c * s;
    out[10] = a * c * s;
    out[11] = 0.0;
    // Column 3
    out[12] = t.translation.x;
    out[13] = t.translation.y;
    out[14] = t.translation.z;
    out[15] = 1.0;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Vec3;

    #[test]
    fn identity_rotation_is_a_scaled_diagonal() {
        let t = Transform {
            translation: Vec3::new(1.0, 2.0, 3.0),
            scale: 0.5,
            rotation: Vec3::zero(),
        };
        let mut m = [0.0f32; MATRIX_FLOATS];
        write_instance_matrix(&mut m, &t);

        assert_eq!(m[0], 0.5);
        assert_eq!(m[5], 0.5);
        assert_eq!(m[10], 0.5);
        assert_eq!(m[1], 0.0);
        assert_eq!(&m[12..16], &[1.0, 2.0, 3.0, 1.0]);
    }

    #[test]
    fn rotation_about_x_moves_y_axis_toward_z() {
        let t = Transform {
            translation: Vec3::zero(),
            scale: 1.0,
            rotation: Vec3::new(std::f32::consts::FRAC_PI_2, 0.0, 0.0),
        };
        let mut m = [0.0f32; MATRIX_FLOATS];
        write_instance_matrix(&mut m, &t);

        // Column 1 is the image of the local Y axis.
        assert!(m[4].abs() < 1e-6);
        assert!(m[5].abs() < 1e-6);
        assert!((m[6] - 1.0).abs() < 1e-6);
    }
}
