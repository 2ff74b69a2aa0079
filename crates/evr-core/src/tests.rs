//! Unit tests for evr-core primitives.

#[cfg(test)]
mod ids {
    use crate::{EdgeId, NodeId};

    #[test]
    fn index_roundtrip() {
        let id = NodeId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(NodeId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(NodeId(0) < NodeId(1));
        assert!(EdgeId(100) > EdgeId(99));
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(NodeId::INVALID.0, u32::MAX);
        assert_eq!(EdgeId::INVALID.0, u32::MAX);
    }

    #[test]
    fn default_is_invalid() {
        assert_eq!(NodeId::default(), NodeId::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(NodeId(7).to_string(), "NodeId(7)");
    }
}

#[cfg(test)]
mod geo {
    use crate::GeoPoint;

    #[test]
    fn zero_distance() {
        let p = GeoPoint::new(28.6139, 77.2090);
        assert!(p.distance_m(p) < 0.01);
    }

    #[test]
    fn one_degree_latitude() {
        // ~1 degree of latitude ≈ 111 km
        let a = GeoPoint::new(28.0, 77.0);
        let b = GeoPoint::new(29.0, 77.0);
        let d = a.distance_m(b);
        assert!((d - 111_195.0).abs() < 500.0, "got {d}");
    }

    #[test]
    fn exact_equality_no_epsilon() {
        let a = GeoPoint::new(28.6139, 77.2090);
        let b = GeoPoint::new(28.6139, 77.2090);
        let c = GeoPoint::new(28.613_901, 77.2090);
        assert_eq!(a, b);
        assert_ne!(a, c, "nearby points must not compare equal");
    }

    #[test]
    fn midpoint_is_arithmetic_mean() {
        let a = GeoPoint::new(28.0, 77.0);
        let b = GeoPoint::new(29.0, 78.0);
        let m = a.midpoint(b);
        assert_eq!(m, GeoPoint::new(28.5, 77.5));
    }

    #[test]
    fn offset_shifts_both_axes() {
        let p = GeoPoint::new(28.5, 77.5).offset(0.0005, -0.0005);
        assert_eq!(p, GeoPoint::new(28.5005, 77.4995));
    }
}

#[cfg(test)]
mod priority {
    use crate::Priority;

    #[test]
    fn default_is_high() {
        assert_eq!(Priority::default(), Priority::High);
    }

    #[test]
    fn eta_factors() {
        assert_eq!(Priority::High.eta_factor(), 0.70);
        assert_eq!(Priority::Medium.eta_factor(), 0.85);
        assert_eq!(Priority::Low.eta_factor(), 1.0);
    }

    #[test]
    fn block_weights() {
        assert_eq!(Priority::High.block_weight(), 100.0);
        assert_eq!(Priority::Medium.block_weight(), 50.0);
        assert_eq!(Priority::Low.block_weight(), 20.0);
    }

    #[test]
    fn parse_labels() {
        assert_eq!("high".parse::<Priority>().unwrap(), Priority::High);
        assert_eq!(" Medium ".parse::<Priority>().unwrap(), Priority::Medium);
        assert!("critical".parse::<Priority>().is_err());
    }

    #[test]
    fn display() {
        assert_eq!(Priority::Low.to_string(), "low");
    }
}

#[cfg(test)]
mod rng {
    use crate::PlanRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = PlanRng::new(12345);
        let mut r2 = PlanRng::new(12345);
        for _ in 0..100 {
            let a: f32 = r1.random();
            let b: f32 = r2.random();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn different_seeds_differ() {
        let mut r0 = PlanRng::new(1);
        let mut r1 = PlanRng::new(2);
        let a: u64 = r0.random();
        let b: u64 = r1.random();
        assert_ne!(a, b);
    }

    #[test]
    fn gen_range_in_bounds() {
        let mut rng = PlanRng::new(0);
        for _ in 0..1000 {
            let v = rng.gen_range(2u32..7);
            assert!((2..7).contains(&v));
        }
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = PlanRng::new(0);
        assert!(!rng.gen_bool(0.0));
        assert!(rng.gen_bool(1.0));
    }
}
