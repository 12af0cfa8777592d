//! Integration tests for u-cuboid-core.

use u_cuboid_core::{round_half_even, sort_by_volume, Cuboid, Error, ParseOptions, Unit};

mod construction_tests {
    use super::*;

    #[test]
    fn test_volume_matches_rounded_product() {
        let samples = [
            (1.0, 2.0, 3.0),
            (0.001, 0.001, 0.001),
            (9.999, 9.999, 9.999),
            (2.192, 1.442, 3.123),
            (0.123, 4.567, 8.901),
        ];

        for (a, b, c) in samples {
            let cuboid = Cuboid::from_meters(a, b, c).unwrap();
            assert_eq!(cuboid.volume(), round_half_even(a * b * c, 9));
        }
    }

    #[test]
    fn test_upper_bound_excluded() {
        let result = Cuboid::builder().with_a(10.0).build();
        assert!(matches!(
            result,
            Err(Error::OutOfRange { dimension: 'a', .. })
        ));
    }

    #[test]
    fn test_lower_bound_included() {
        assert!(Cuboid::builder().with_a(0.001).build().is_ok());
        assert!(Cuboid::builder().with_a(0.0009).build().is_err());
    }

    #[test]
    fn test_unit_resolved_from_text() {
        let unit: Unit = "centimeter".parse().unwrap();
        let cuboid = Cuboid::new(Some(50.0), None, None, unit).unwrap();
        assert_eq!(cuboid.to_string(), "0.500 m × 0.100 m × 0.100 m");

        assert!(matches!("yard".parse::<Unit>(), Err(Error::InvalidUnit(_))));
    }
}

mod equality_tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of(cuboid: &Cuboid) -> u64 {
        let mut hasher = DefaultHasher::new();
        cuboid.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_order_independent_equality() {
        let p1 = Cuboid::from_meters(1.0, 2.0, 3.0).unwrap();
        let p2 = Cuboid::from_meters(3.0, 1.0, 2.0).unwrap();

        assert_eq!(p1, p2);
        assert_eq!(hash_of(&p1), hash_of(&p2));
    }

    #[test]
    fn test_equality_across_units() {
        let meters = Cuboid::from_meters(0.5, 0.25, 0.125).unwrap();
        let millimeters = Cuboid::from_millimeters(125, 500, 250).unwrap();

        assert_eq!(meters, millimeters);
        assert_eq!(hash_of(&meters), hash_of(&millimeters));
    }
}

mod text_tests {
    use super::*;

    #[test]
    fn test_parse_reference_text() {
        let parsed = Cuboid::parse("1.000 m × 2.000 m × 3.000 m").unwrap();
        assert_eq!(parsed, Cuboid::from_meters(1.0, 2.0, 3.0).unwrap());
    }

    #[test]
    fn test_format_parse_format_is_stable() {
        let samples = [
            Cuboid::from_meters(2.192, 1.442, 3.123).unwrap(),
            Cuboid::from_millimeters(5125, 3140, 100).unwrap(),
            Cuboid::new(Some(10.0), Some(20.0), Some(30.0), Unit::Centimeter).unwrap(),
            Cuboid::from_meters(0.0052345, 9.9994, 0.3333333).unwrap(),
            Cuboid::default(),
        ];

        for cuboid in samples {
            for code in ["m", "cm", "mm"] {
                let text = cuboid.format(code).unwrap();
                let reparsed = Cuboid::parse(&text).unwrap();
                assert_eq!(reparsed.format(code).unwrap(), text, "unit {}", code);
            }
        }
    }

    #[test]
    fn test_round_trip_rejects_edges_rounded_to_upper_bound() {
        let cuboid = Cuboid::from_meters(9.9996, 1.0, 1.0).unwrap();
        let text = cuboid.format("m").unwrap();
        assert_eq!(text, "10.000 m × 1.000 m × 1.000 m");

        assert_eq!(
            Cuboid::parse(&text),
            Err(Error::OutOfRange {
                dimension: 'a',
                value: 10.0
            })
        );
    }

    #[test]
    fn test_exact_round_trip_in_meters() {
        let cuboid = Cuboid::from_meters(1.25, 0.5, 7.75).unwrap();
        let reparsed: Cuboid = cuboid.to_string().parse().unwrap();
        assert_eq!(reparsed.to_array(), cuboid.to_array());
    }

    #[test]
    fn test_error_kinds() {
        assert!(matches!(Cuboid::parse("1 m × 2 m"), Err(Error::Parse(_))));
        assert!(matches!(
            Cuboid::parse("1 m × 2 in × 3 m"),
            Err(Error::UnsupportedFormat(_))
        ));
        assert!(matches!(
            Cuboid::default().format("dm"),
            Err(Error::UnsupportedFormat(_))
        ));

        let lenient = ParseOptions::new().with_lenient_numbers(true);
        assert!(matches!(
            Cuboid::parse_with("1 m × two m × 3 m", &lenient),
            Err(Error::OutOfRange { dimension: 'b', .. })
        ));
    }
}

mod operation_tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_combine_unit_cubes() {
        let cube = Cuboid::from_meters(1.0, 1.0, 1.0).unwrap();
        let combined = cube.combine(&cube).unwrap();

        assert_eq!(combined.sorted_dimensions(), [1.0, 1.0, 2.0]);
    }

    #[test]
    fn test_combine_chain() {
        let plate = Cuboid::from_millimeters(300, 200, 10).unwrap();
        let stack = (0..4).try_fold(plate, |acc, _| acc.combine(&plate)).unwrap();

        assert_relative_eq!(stack.a(), 0.3, epsilon = 1e-12);
        assert_relative_eq!(stack.b(), 0.2, epsilon = 1e-12);
        assert_relative_eq!(stack.c(), 0.05, epsilon = 1e-12);
    }

    #[test]
    fn test_compress_cube() {
        let compressed = Cuboid::from_meters(2.0, 2.0, 2.0)
            .unwrap()
            .compress()
            .unwrap();

        for edge in &compressed {
            assert_relative_eq!(edge, 2.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_sort_reference_samples() {
        let mut boxes = vec![
            Cuboid::default(),
            Cuboid::from_meters(2.192, 1.442, 3.123).unwrap(),
            Cuboid::builder()
                .with_b(3140.0)
                .with_a(5125.0)
                .with_unit(Unit::Millimeter)
                .build()
                .unwrap(),
            Cuboid::new(Some(10.0), Some(20.0), Some(30.0), Unit::Centimeter).unwrap(),
            Cuboid::from_millimeters(100, 200, 300).unwrap(),
        ];
        sort_by_volume(&mut boxes);

        let volumes: Vec<f64> = boxes.iter().map(Cuboid::volume).collect();
        assert!(volumes.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(boxes[0], Cuboid::default());
        assert_eq!(boxes[1], boxes[2]);
    }
}
