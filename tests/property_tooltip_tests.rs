use hazchart::api::{PlotConfig, PlotEngine};
use hazchart::core::{Series, Viewport};
use hazchart::render::NullRenderer;
use proptest::prelude::*;

proptest! {
    #[test]
    fn tooltip_box_is_contained_for_any_hovered_marker_property(
        marker_index in 0usize..8,
        y_values in prop::collection::vec(0.001f64..1_000.0, 8),
        width in 200u32..1600,
        height in 200u32..1200
    ) {
        let config = PlotConfig::new(Viewport::new(width, height));
        let mut engine = PlotEngine::new(NullRenderer::default(), config)
            .expect("engine init");

        let xs: Vec<f64> = (0..8).map(|i| f64::from(i)).collect();
        let ys: Vec<Option<f64>> = y_values.iter().copied().map(Some).collect();
        engine
            .set_series(vec![Series::from_xy("s", "Series", &xs, &ys).expect("series")])
            .expect("set series");

        let x = xs[marker_index];
        let y = y_values[marker_index];
        let px = engine.map_x_to_pixel(x).expect("map x");
        let py = engine.map_y_to_pixel(y).expect("map y");

        engine.pointer_move(px, py);

        let area = engine.plot_area().expect("plot area");
        let rect = engine.tooltip().expect("tooltip present").rect;
        prop_assert!(rect.x >= -1e-9);
        prop_assert!(rect.y >= -1e-9);
        prop_assert!(rect.x + rect.width <= area.width + 1e-9);
        prop_assert!(rect.y + rect.height <= area.height + 1e-9);
    }

    #[test]
    fn pointer_outside_the_plot_never_creates_a_tooltip_property(
        px in -100.0f64..900.0,
        py in -100.0f64..700.0
    ) {
        let config = PlotConfig::new(Viewport::new(800, 600));
        let mut engine = PlotEngine::new(NullRenderer::default(), config)
            .expect("engine init");
        engine
            .set_series(vec![
                Series::from_xy("s", "Series", &[1.0, 2.0], &[Some(1.0), Some(2.0)])
                    .expect("series"),
            ])
            .expect("set series");

        let area = engine.plot_area().expect("plot area");
        prop_assume!(!area.contains(px, py));

        engine.pointer_move(px, py);
        prop_assert!(engine.tooltip().is_none());
        prop_assert!(engine.hover().is_none());
    }
}
