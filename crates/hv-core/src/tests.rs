//! Unit tests for hv-core primitives.

#[cfg(test)]
mod geo {
    use crate::{GeoPoint, Heading};

    #[test]
    fn within_checks_both_axes() {
        let a = GeoPoint::new(34.0, -118.0);
        assert!(a.within(GeoPoint::new(34.000_005, -118.000_005), 0.00001));
        assert!(!a.within(GeoPoint::new(34.0, -118.1), 0.00001));
        assert!(!a.within(GeoPoint::new(34.1, -118.0), 0.00001));
    }

    #[test]
    fn step_toward_aligns_longitude_first() {
        let mut p = GeoPoint::new(0.0, 0.0);
        let target = GeoPoint::new(1.0, 1.0);
        assert!(p.step_toward(target, 0.25, 1e-9));
        assert_eq!(p, GeoPoint::new(0.0, 0.25));
    }

    #[test]
    fn step_toward_moves_latitude_once_longitude_aligned() {
        let mut p = GeoPoint::new(0.0, 1.0);
        assert!(p.step_toward(GeoPoint::new(-1.0, 1.0), 0.25, 1e-9));
        assert_eq!(p, GeoPoint::new(-0.25, 1.0));
    }

    #[test]
    fn step_toward_clamps_to_target() {
        let mut p = GeoPoint::new(0.0, 0.0);
        let target = GeoPoint::new(0.0, 0.1);
        assert!(p.step_toward(target, 0.3, 1e-9));
        assert_eq!(p.lon, 0.1, "step must not overshoot");
        assert!(!p.step_toward(target, 0.3, 1e-9), "already there");
    }

    #[test]
    fn step_toward_reaches_target_without_oscillating() {
        let origin = GeoPoint::new(34.0522, -118.2437);
        let mut p = GeoPoint::new(34.0531, -118.2412);
        let mut steps = 0;
        while p.step_toward(origin, 0.00003, 0.00001) {
            steps += 1;
            assert!(steps < 1_000, "did not converge");
        }
        assert!(p.within(origin, 0.00001));
    }

    #[test]
    fn meters_to_degrees_flat_earth() {
        let deg = GeoPoint::meters_to_degrees(111_111.0);
        assert!((deg - 1.0).abs() < 1e-12);
    }

    #[test]
    fn display_six_decimals() {
        assert_eq!(GeoPoint::new(34.0522, -118.2437).to_string(), "(34.052200, -118.243700)");
    }

    #[test]
    fn heading_reverses_and_signs() {
        assert_eq!(Heading::default(), Heading::East);
        assert_eq!(Heading::East.sign(), 1);
        assert_eq!(Heading::West.sign(), -1);
        assert_eq!(Heading::East.reversed(), Heading::West);
        assert_eq!(Heading::West.reversed().reversed(), Heading::West);
        assert_eq!(Heading::West.factor(), -1.0);
        assert_eq!(Heading::West.to_string(), "west");
    }
}

#[cfg(test)]
mod time {
    use crate::{SimClock, Tick};

    #[test]
    fn tick_add_and_display() {
        assert_eq!(Tick(10) + 5, Tick(15));
        assert_eq!(Tick(800).to_string(), "T800");
    }

    #[test]
    fn clock_starts_at_zero_and_advances() {
        let mut clock = SimClock::new(0.1);
        assert_eq!(clock.current_tick, Tick::ZERO);
        assert_eq!(clock.advance(), Tick(1));
        assert_eq!(clock.advance(), Tick(2));
        assert!((clock.elapsed_secs() - 0.2).abs() < 1e-12);
    }

    #[test]
    fn ticks_for_secs_rounds_up() {
        let clock = SimClock::new(0.1);
        assert_eq!(clock.ticks_for_secs(0.5), 5);
        assert_eq!(clock.ticks_for_secs(1.5), 15);
        assert_eq!(clock.ticks_for_secs(0.55), 6);
        assert_eq!(clock.ticks_for_secs(0.01), 1);
    }

    #[test]
    fn ticks_for_non_positive_is_zero() {
        let clock = SimClock::new(0.1);
        assert_eq!(clock.ticks_for_secs(0.0), 0);
        assert_eq!(clock.ticks_for_secs(-1.0), 0);
    }

    #[test]
    fn display() {
        let mut clock = SimClock::new(0.5);
        clock.advance();
        assert_eq!(clock.to_string(), "T1 (0.5 s)");
    }
}

#[cfg(test)]
mod rng {
    use crate::{ConstantSource, RandomSource, SimRng};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            assert_eq!(r1.uniform(0.0, 1.0), r2.uniform(0.0, 1.0));
        }
    }

    #[test]
    fn different_seeds_differ() {
        let mut r1 = SimRng::new(1);
        let mut r2 = SimRng::new(2);
        let a: Vec<f64> = (0..8).map(|_| r1.uniform(0.0, 1.0)).collect();
        let b: Vec<f64> = (0..8).map(|_| r2.uniform(0.0, 1.0)).collect();
        assert_ne!(a, b);
    }

    #[test]
    fn uniform_in_bounds() {
        let mut rng = SimRng::new(0);
        for _ in 0..1000 {
            let v = rng.uniform(0.5, 1.5);
            assert!((0.5..=1.5).contains(&v));
        }
    }

    #[test]
    fn degenerate_range_returns_low() {
        let mut rng = SimRng::new(0);
        assert_eq!(rng.uniform(2.0, 2.0), 2.0);
        assert_eq!(ConstantSource(0.7).uniform(2.0, 2.0), 2.0);
    }

    #[test]
    fn constant_source_positions() {
        assert_eq!(ConstantSource::MAX.uniform(0.0, 0.001), 0.001);
        assert_eq!(ConstantSource::MIN.uniform(0.5, 1.5), 0.5);
        assert_eq!(ConstantSource(0.5).uniform(0.5, 1.5), 1.0);
        assert_eq!(ConstantSource(7.0).uniform(0.0, 2.0), 2.0, "fraction is clamped");
    }

    #[test]
    fn mut_ref_is_a_source() {
        fn draw<R: RandomSource>(mut r: R) -> f64 {
            r.uniform(0.0, 1.0)
        }
        let mut src = ConstantSource::MAX;
        assert_eq!(draw(&mut src), 1.0);
    }
}

#[cfg(test)]
mod config {
    use crate::{CartConfig, FieldConfig, GeoPoint, HvError, RunConfig, SimConfig};

    fn assert_invalid(result: crate::HvResult<()>) {
        assert!(
            matches!(result, Err(HvError::InvalidConfiguration(_))),
            "expected InvalidConfiguration, got {result:?}"
        );
    }

    #[test]
    fn defaults_are_valid() {
        assert!(RunConfig::default().validate().is_ok());
    }

    #[test]
    fn steps_per_row_is_exact_for_reference_field() {
        assert_eq!(FieldConfig::default().steps_per_row(), 1000);
    }

    #[test]
    fn steps_per_row_covers_a_partial_last_step() {
        let cfg = FieldConfig { field_width: 0.0104, step_size: 0.001, ..FieldConfig::default() };
        assert_eq!(cfg.steps_per_row(), 11);
        let cfg = FieldConfig { field_width: 0.0106, step_size: 0.001, ..FieldConfig::default() };
        assert_eq!(cfg.steps_per_row(), 11);
    }

    #[test]
    fn steps_per_row_never_zero() {
        let cfg = FieldConfig { field_width: 1e-9, ..FieldConfig::default() };
        assert_eq!(cfg.steps_per_row(), 1);
    }

    #[test]
    fn row_spacing_converted_to_degrees() {
        let cfg = FieldConfig::default();
        assert!((cfg.row_spacing_deg() - 10.0 / 111_111.0).abs() < 1e-15);
    }

    #[test]
    fn rejects_non_positive_geometry() {
        let base = FieldConfig::default();
        assert_invalid(FieldConfig { bin_capacity: 0.0, ..base.clone() }.validate());
        assert_invalid(FieldConfig { bin_capacity: -5.0, ..base.clone() }.validate());
        assert_invalid(FieldConfig { row_spacing_m: 0.0, ..base.clone() }.validate());
        assert_invalid(FieldConfig { field_width: -0.01, ..base.clone() }.validate());
        assert_invalid(FieldConfig { step_size: 0.0, ..base.clone() }.validate());
        assert_invalid(FieldConfig { field_width: f64::NAN, ..base.clone() }.validate());
        assert_invalid(FieldConfig { origin: GeoPoint::new(f64::INFINITY, 0.0), ..base }.validate());
    }

    #[test]
    fn rejects_bad_trigger_and_fill_rate() {
        let base = FieldConfig::default();
        assert_invalid(FieldConfig { trigger_fraction: 0.0, ..base.clone() }.validate());
        assert_invalid(FieldConfig { trigger_fraction: 1.2, ..base.clone() }.validate());
        assert_invalid(FieldConfig { max_fill_rate: -0.1, ..base.clone() }.validate());
        assert!(FieldConfig { trigger_fraction: 1.0, ..base.clone() }.validate().is_ok());
        assert!(FieldConfig { max_fill_rate: 0.0, ..base }.validate().is_ok());
    }

    #[test]
    fn rejects_bad_cart_parameters() {
        let base = CartConfig::default();
        assert_invalid(CartConfig { return_speed_multiplier: 0.0, ..base.clone() }.validate());
        assert_invalid(CartConfig { arrival_epsilon: 0.0, ..base.clone() }.validate());
        assert_invalid(
            CartConfig { service_duration_min: 2.0, service_duration_max: 1.0, ..base.clone() }
                .validate(),
        );
        assert_invalid(CartConfig { service_duration_min: -1.0, ..base.clone() }.validate());
        assert!(
            CartConfig { service_duration_min: 0.0, service_duration_max: 0.0, ..base }
                .validate()
                .is_ok()
        );
    }

    #[test]
    fn rejects_bad_tick_duration() {
        assert_invalid(SimConfig { tick_duration_secs: 0.0, ..SimConfig::default() }.validate());
    }

    #[test]
    fn run_config_reports_first_invalid_part() {
        let cfg = RunConfig {
            field: FieldConfig { bin_capacity: 0.0, ..FieldConfig::default() },
            ..RunConfig::default()
        };
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("bin_capacity"), "got {err}");
    }

    #[test]
    fn sim_config_clock_and_end_tick() {
        let cfg = SimConfig { total_ticks: 50, tick_duration_secs: 0.25, seed: 1 };
        assert_eq!(cfg.end_tick(), crate::Tick(50));
        let clock = cfg.make_clock();
        assert_eq!(clock.tick_duration_secs, 0.25);
        assert_eq!(clock.current_tick, crate::Tick::ZERO);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn partial_json_keeps_defaults() {
        let json = r#"{ "sim": { "seed": 7 }, "field": { "bin_capacity": 500.0 } }"#;
        let cfg: RunConfig = serde_json::from_str(json).unwrap();
        assert_eq!(cfg.sim.seed, 7);
        assert_eq!(cfg.sim.total_ticks, SimConfig::default().total_ticks);
        assert_eq!(cfg.field.bin_capacity, 500.0);
        assert_eq!(cfg.field.origin, FieldConfig::default().origin);
        assert_eq!(cfg.cart, CartConfig::default());
    }
}
