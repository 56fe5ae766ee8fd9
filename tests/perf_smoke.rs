use backdrop_engine::ParticleField;

#[test]
fn perf_smoke_update() {
    let mut field = ParticleField::with_seed(80, 1);
    field.enable_perf_metrics(true);
    for frame in 0..120 {
        field.update(frame as f32 / 60.0);
    }
    let stats = field.get_perf_stats();
    assert!(stats.update_ms() >= 0.0);
    assert_eq!(stats.particles_updated(), 80);
    assert_eq!(stats.frame(), 120);
}
