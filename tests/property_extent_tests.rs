use hazchart::core::{Axis, Extent, Series};
use proptest::prelude::*;

fn arbitrary_samples() -> impl Strategy<Value = Vec<(f64, Option<f64>)>> {
    prop::collection::vec(
        (
            -1_000.0f64..1_000.0,
            prop::option::weighted(0.8, -1_000.0f64..1_000.0),
        ),
        1..64,
    )
}

proptest! {
    #[test]
    fn extent_bounds_every_plotted_value_property(samples in arbitrary_samples()) {
        let xs: Vec<f64> = samples.iter().map(|(x, _)| *x).collect();
        let ys: Vec<Option<f64>> = samples.iter().map(|(_, y)| *y).collect();
        let series = Series::from_xy("s", "S", &xs, &ys).expect("valid series");
        let all = [series];

        if all[0].point_count() == 0 {
            prop_assert!(Extent::scan(&all, Axis::X).is_err());
            return Ok(());
        }

        let x_extent = Extent::scan(&all, Axis::X).expect("x extent");
        let y_extent = Extent::scan(&all, Axis::Y).expect("y extent");

        for (_, point) in all[0].points() {
            prop_assert!(x_extent.contains(point.x));
            prop_assert!(y_extent.contains(point.y));
        }
        prop_assert!(x_extent.min <= x_extent.max);
        prop_assert!(y_extent.min <= y_extent.max);
    }

    #[test]
    fn extent_is_tight_property(samples in arbitrary_samples()) {
        let xs: Vec<f64> = samples.iter().map(|(x, _)| *x).collect();
        let ys: Vec<Option<f64>> = samples.iter().map(|(_, y)| *y).collect();
        let series = Series::from_xy("s", "S", &xs, &ys).expect("valid series");
        let all = [series];

        if all[0].point_count() == 0 {
            return Ok(());
        }

        let x_extent = Extent::scan(&all, Axis::X).expect("x extent");
        let hit_min = all[0].points().any(|(_, p)| p.x == x_extent.min);
        let hit_max = all[0].points().any(|(_, p)| p.x == x_extent.max);
        prop_assert!(hit_min && hit_max);
    }
}
