use rand::Rng;

use crate::domain::Transform;
use crate::systems::{write_instance_matrix, MATRIX_FLOATS};

use super::FieldCore;

/// Pack transforms into `out`, 16 floats per slot in slot order.
pub(super) fn pack_instance_matrices(transforms: &[Transform], out: &mut [f32]) {
    debug_assert_eq!(out.len(), transforms.len() * MATRIX_FLOATS);

    for (t, m) in transforms.iter().zip(out.chunks_exact_mut(MATRIX_FLOATS)) {
        write_instance_matrix(m, t);
    }
}

pub(super) fn snapshot_json<R: Rng>(field: &FieldCore<R>) -> String {
    serde_json::to_string(&field.transforms).unwrap_or_else(|_| "[]".to_string())
}
