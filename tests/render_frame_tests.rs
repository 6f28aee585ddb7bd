use hazchart::api::{PlotConfig, PlotEngine};
use hazchart::core::{ScaleKind, Series, Viewport};
use hazchart::render::{ChartLayer, NullRenderer, Renderer};

fn engine_with(series: Vec<Series>) -> PlotEngine<NullRenderer> {
    let config = PlotConfig::new(Viewport::new(800, 600));
    let mut engine = PlotEngine::new(NullRenderer::default(), config).expect("engine init");
    engine.set_series(series).expect("set series");
    engine
}

fn gap_series() -> Series {
    Series::from_xy(
        "total",
        "Total",
        &[1.0, 2.0, 3.0],
        &[Some(10.0), Some(20.0), None],
    )
    .expect("valid series")
}

#[test]
fn gap_series_renders_one_segment_and_no_gap_marker() {
    let engine = engine_with(vec![gap_series()]);
    let frame = engine.build_frame().expect("frame");

    let series_layer = frame.layer(ChartLayer::Series);
    assert_eq!(series_layer.lines.len(), 1);
    assert_eq!(series_layer.circles.len(), 2);
}

#[test]
fn building_twice_with_unchanged_state_is_idempotent() {
    let engine = engine_with(vec![
        gap_series(),
        Series::from_xy("pga", "PGA", &[1.0, 2.0, 3.0], &[Some(5.0), Some(8.0), Some(2.0)])
            .expect("valid series"),
    ]);

    let first = engine.build_frame().expect("first frame");
    let second = engine.build_frame().expect("second frame");
    assert_eq!(first, second);
}

#[test]
fn empty_chart_produces_empty_valid_frame() {
    let config = PlotConfig::new(Viewport::new(640, 480));
    let engine = PlotEngine::new(NullRenderer::default(), config).expect("engine init");

    let frame = engine.build_frame().expect("frame");
    assert!(frame.is_empty());
    frame.validate().expect("empty frame is valid");
}

#[test]
fn render_forwards_counts_to_backend() {
    let mut engine = engine_with(vec![gap_series()]);
    engine.render().expect("render");

    assert_eq!(engine.renderer().render_calls, 1);
    assert!(engine.renderer().last_line_count > 0);
    assert_eq!(engine.renderer().last_circle_count, 2);
}

#[test]
fn selected_series_is_drawn_last_and_wider() {
    let mut engine = engine_with(vec![
        Series::from_xy("a", "A", &[1.0, 2.0], &[Some(1.0), Some(2.0)]).expect("series a"),
        Series::from_xy("b", "B", &[1.0, 2.0], &[Some(3.0), Some(4.0)]).expect("series b"),
    ]);
    engine.toggle_series_selection("a").expect("select a");

    let frame = engine.build_frame().expect("frame");
    let series_layer = frame.layer(ChartLayer::Series);
    assert_eq!(series_layer.lines.len(), 2);

    let selected_width = engine.config().line_width.selected;
    let last = series_layer.lines.last().expect("two series lines");
    assert_eq!(last.stroke_width, selected_width);
    // The unselected series keeps the normal width and draws first.
    assert_eq!(series_layer.lines[0].stroke_width, engine.config().line_width.normal);
}

#[test]
fn log_axes_reject_non_positive_data_at_render_time() {
    let config = PlotConfig::new(Viewport::new(800, 600))
        .with_scale_kinds(ScaleKind::Log, ScaleKind::Linear);
    let mut engine = PlotEngine::new(NullRenderer::default(), config).expect("engine init");
    engine
        .set_series(vec![
            Series::from_xy("a", "A", &[0.0, 1.0], &[Some(1.0), Some(2.0)]).expect("series"),
        ])
        .expect("set series");

    assert!(engine.build_frame().is_err());
}

#[test]
fn axis_titles_from_config_are_rendered() {
    let config = PlotConfig::new(Viewport::new(800, 600))
        .with_axis_titles("Ground Motion (g)", "Annual Frequency of Exceedence");
    let mut engine = PlotEngine::new(NullRenderer::default(), config).expect("engine init");
    engine.set_series(vec![gap_series()]).expect("set series");

    let frame = engine.build_frame().expect("frame");
    let axes_texts = &frame.layer(ChartLayer::Axes).texts;
    assert!(axes_texts.iter().any(|t| t.text == "Ground Motion (g)"));
    assert!(
        axes_texts
            .iter()
            .any(|t| t.text == "Annual Frequency of Exceedence")
    );
}

#[test]
fn empty_axis_titles_draw_nothing() {
    let config = PlotConfig::new(Viewport::new(800, 600)).with_axis_titles("", "");
    let mut engine = PlotEngine::new(NullRenderer::default(), config).expect("engine init");
    engine.set_series(vec![gap_series()]).expect("set series");

    let frame = engine.build_frame().expect("frame");
    frame.validate().expect("frame stays valid");
    assert!(
        frame
            .layer(ChartLayer::Axes)
            .texts
            .iter()
            .all(|t| !t.text.is_empty())
    );
}

#[test]
fn extent_override_pins_the_axis_domain() {
    let config = PlotConfig::new(Viewport::new(800, 600)).with_x_extent_override(0.0, 10.0);
    let mut engine = PlotEngine::new(NullRenderer::default(), config).expect("engine init");
    engine.set_series(vec![gap_series()]).expect("set series");

    // Domain [0, 10], margins left=70, plot width 800-70-15=715.
    let px = engine.map_x_to_pixel(5.0).expect("map x");
    let expected = 70.0 + 715.0 * 0.5;
    assert!((px - expected).abs() <= 1e-9);
}

#[test]
fn tiny_relative_extent_override_still_renders() {
    // Domain span below the float ULP at its magnitude; the tick walk must
    // still terminate and yield a frame.
    let config = PlotConfig::new(Viewport::new(800, 600))
        .with_x_extent_override(1e9, 1e9 + 1e-7);
    let mut engine = PlotEngine::new(NullRenderer::default(), config).expect("engine init");
    engine.set_series(vec![gap_series()]).expect("set series");

    let frame = engine.build_frame().expect("frame");
    assert!(!frame.layer(ChartLayer::Axes).is_empty());
}

#[test]
fn null_renderer_rejects_invalid_frames() {
    use hazchart::render::{Color, LinePrimitive, RenderFrame};

    let mut frame = RenderFrame::new(Viewport::new(100, 100));
    frame.push_line(
        ChartLayer::Series,
        LinePrimitive::new(0.0, 0.0, f64::NAN, 1.0, 1.0, Color::rgb(0.0, 0.0, 0.0)),
    );

    let mut renderer = NullRenderer::default();
    assert!(renderer.render(&frame).is_err());
}
