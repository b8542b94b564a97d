//! Unit tests for sf-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AgentId, DestinationId, ProfileId};

    #[test]
    fn index_roundtrip() {
        let id = AgentId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(AgentId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn profile_id_rejects_overflow() {
        assert!(ProfileId::try_from(70_000usize).is_err());
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(AgentId::INVALID.0, u32::MAX);
        assert_eq!(ProfileId::INVALID.0, u16::MAX);
        assert_eq!(DestinationId::default(), DestinationId::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
    }
}

#[cfg(test)]
mod plane {
    use glam::Vec3;

    use crate::plane::{clamp_speed, heading, perpendicular, planar, side_of, unsigned_angle};

    #[test]
    fn planar_drops_height() {
        assert_eq!(planar(Vec3::new(1.0, 5.0, -2.0)), Vec3::new(1.0, 0.0, -2.0));
    }

    #[test]
    fn perpendicular_is_orthogonal_and_same_length() {
        let d = Vec3::new(0.6, 0.0, 0.8);
        let n = perpendicular(d);
        assert!(d.dot(n).abs() < 1e-6);
        assert!((n.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn side_of_agrees_with_perpendicular() {
        let d = Vec3::new(1.0, 0.0, 0.0);
        assert!(side_of(d, perpendicular(d)) > 0.0);
        assert!(side_of(d, -perpendicular(d)) < 0.0);
        assert_eq!(side_of(d, d), 0.0);
    }

    #[test]
    fn unsigned_angle_values() {
        let x = Vec3::X;
        let z = Vec3::Z;
        assert!((unsigned_angle(x, z) - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
        assert_eq!(unsigned_angle(x, x), 0.0);
        assert_eq!(unsigned_angle(Vec3::ZERO, x), 0.0);
    }

    #[test]
    fn clamp_speed_only_shrinks() {
        let slow = Vec3::new(0.1, 0.0, 0.2);
        assert_eq!(clamp_speed(slow, 1.0), slow);
        let fast = Vec3::new(3.0, 0.0, 4.0);
        let clamped = clamp_speed(fast, 0.5);
        assert!((clamped.length() - 0.5).abs() < 1e-6);
        assert!(clamped.normalize().abs_diff_eq(fast.normalize(), 1e-6));
    }

    #[test]
    fn heading_of_still_agent_is_none() {
        assert_eq!(heading(Vec3::new(0.0, 2.0, 0.0)), None);
        assert_eq!(heading(Vec3::Z), Some(0.0));
        let east = heading(Vec3::X).unwrap();
        assert!((east - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
    }
}

#[cfg(test)]
mod time {
    use crate::{SimClock, SimConfig, Tick};

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t.offset(3), Tick(13));
        assert_eq!(Tick(15).since(t), 5);
        assert_eq!(Tick(3).since(Tick(5)), 0);
    }

    #[test]
    fn clock_elapsed() {
        let mut clock = SimClock::new(0.5);
        assert_eq!(clock.elapsed_secs(), 0.0);
        clock.advance();
        clock.advance();
        clock.advance();
        assert_eq!(clock.current_tick, Tick(3));
        assert!((clock.elapsed_secs() - 1.5).abs() < 1e-6);
    }

    #[test]
    fn ticks_for_secs_rounds_up() {
        let clock = SimClock::new(0.1);
        assert_eq!(clock.ticks_for_secs(1.0), 10);
        assert_eq!(clock.ticks_for_secs(0.01), 1);
    }

    #[test]
    fn default_config_is_valid() {
        let cfg = SimConfig::default();
        assert!(cfg.validate().is_ok());
        assert!((cfg.relaxation_time_secs - 0.54).abs() < 1e-6);
        assert_eq!(cfg.end_tick(), Tick(cfg.total_ticks));
    }

    #[test]
    fn non_positive_tick_duration_rejected() {
        let cfg = SimConfig { tick_duration_secs: 0.0, ..SimConfig::default() };
        assert!(cfg.validate().is_err());
        let cfg = SimConfig { relaxation_time_secs: -1.0, ..SimConfig::default() };
        assert!(cfg.validate().is_err());
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            let a: f32 = r1.gen_range(0.0..1.0);
            let b: f32 = r2.gen_range(0.0..1.0);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn children_with_different_offsets_differ() {
        let mut a = SimRng::child(1, 0);
        let mut b = SimRng::child(1, 1);
        let x: u64 = a.gen_range(0..u64::MAX);
        let y: u64 = b.gen_range(0..u64::MAX);
        assert_ne!(x, y);
    }

    #[test]
    fn gen_range_in_bounds() {
        let mut rng = SimRng::new(0);
        for _ in 0..1000 {
            let v = rng.gen_range(0..3usize);
            assert!(v < 3);
        }
    }
}

#[cfg(test)]
mod personality {
    use crate::PersonalityType;

    #[test]
    fn labels_roundtrip_through_from_str() {
        for p in PersonalityType::ALL {
            assert_eq!(p.as_str().parse::<PersonalityType>().unwrap(), p);
        }
        assert_eq!(" Cautious ".parse::<PersonalityType>().unwrap(), PersonalityType::Cautious);
    }

    #[test]
    fn unknown_label_is_an_error() {
        assert!("sleepy".parse::<PersonalityType>().is_err());
    }

    #[test]
    fn indices_follow_declaration_order() {
        assert_eq!(PersonalityType::Standard.index(), 0);
        assert_eq!(PersonalityType::Reckless.index(), 4);
        assert_eq!(PersonalityType::Aggressive.to_string(), "aggressive");
    }
}
