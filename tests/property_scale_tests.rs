use hazchart::core::AxisScale;
use proptest::prelude::*;

proptest! {
    #[test]
    fn linear_scale_round_trip_property(
        domain_start in -1_000_000.0f64..1_000_000.0,
        domain_span in 0.001f64..1_000_000.0,
        value_factor in 0.0f64..1.0
    ) {
        let domain_end = domain_start + domain_span;
        let value = domain_start + value_factor * domain_span;

        let scale = AxisScale::linear(domain_start, domain_end).expect("valid scale");

        let px = scale.domain_to_pixel(value, 2048.0).expect("to pixel");
        let recovered = scale.pixel_to_domain(px, 2048.0).expect("from pixel");

        prop_assert!((recovered - value).abs() <= 1e-6 * domain_span.max(1.0));
    }

    #[test]
    fn log_scale_round_trip_property(
        start_exp in -8.0f64..6.0,
        span_decades in 0.01f64..10.0,
        value_factor in 0.0f64..1.0
    ) {
        let domain_start = 10.0f64.powf(start_exp);
        let domain_end = 10.0f64.powf(start_exp + span_decades);
        let value = 10.0f64.powf(start_exp + value_factor * span_decades);

        let scale = AxisScale::log(domain_start, domain_end).expect("valid scale");

        let px = scale.domain_to_pixel(value, 2048.0).expect("to pixel");
        let recovered = scale.pixel_to_domain(px, 2048.0).expect("from pixel");

        prop_assert!((recovered - value).abs() <= 1e-6 * value.abs());
    }

    #[test]
    fn linear_mapping_stays_inside_the_span_property(
        domain_start in -1_000.0f64..1_000.0,
        domain_span in 0.001f64..1_000.0,
        value_factor in 0.0f64..1.0
    ) {
        let value = domain_start + value_factor * domain_span;
        let scale = AxisScale::linear(domain_start, domain_start + domain_span)
            .expect("valid scale");

        let px = scale.domain_to_pixel(value, 800.0).expect("to pixel");
        prop_assert!((-1e-9..=800.0 + 1e-9).contains(&px));
    }

    #[test]
    fn inverted_scale_mirrors_the_span_property(
        domain_start in -1_000.0f64..1_000.0,
        domain_span in 0.001f64..1_000.0,
        value_factor in 0.0f64..1.0
    ) {
        let value = domain_start + value_factor * domain_span;
        let scale = AxisScale::linear(domain_start, domain_start + domain_span)
            .expect("valid scale");

        let px = scale.domain_to_pixel(value, 800.0).expect("to pixel");
        let mirrored = scale
            .inverted()
            .domain_to_pixel(value, 800.0)
            .expect("to pixel");

        prop_assert!((px + mirrored - 800.0).abs() <= 1e-6);
    }
}
