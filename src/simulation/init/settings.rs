use rand::Rng;

use super::init;
use super::perf_stats::FrameStats;
use super::FieldCore;

pub(super) fn enable_perf_metrics<R: Rng>(field: &mut FieldCore<R>, enabled: bool) {
    field.perf_enabled = enabled;
    if !enabled {
        field.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats<R: Rng>(field: &FieldCore<R>) -> FrameStats {
    field.perf_stats.clone()
}

pub(super) fn reset<R: Rng>(field: &mut FieldCore<R>) {
    init::populate(field);
}

pub(super) fn set_count<R: Rng>(field: &mut FieldCore<R>, count: i32) {
    field.config.count = count;
    init::populate(field);
}
