use hazchart::api::{PlotConfig, PlotEngine};
use hazchart::core::{Series, Viewport};
use hazchart::render::NullRenderer;

fn two_series_engine() -> PlotEngine<NullRenderer> {
    let config = PlotConfig::new(Viewport::new(800, 600));
    let mut engine = PlotEngine::new(NullRenderer::default(), config).expect("engine init");
    engine
        .set_series(vec![
            Series::from_xy("a", "Series A", &[1.0, 2.0, 3.0], &[Some(1.0), Some(2.0), Some(3.0)])
                .expect("series a"),
            Series::from_xy("b", "Series B", &[1.0, 2.0, 3.0], &[Some(4.0), Some(5.0), Some(6.0)])
                .expect("series b"),
        ])
        .expect("set series");
    engine
}

fn marker_position(engine: &PlotEngine<NullRenderer>, x: f64, y: f64) -> (f64, f64) {
    (
        engine.map_x_to_pixel(x).expect("map x"),
        engine.map_y_to_pixel(y).expect("map y"),
    )
}

#[test]
fn at_most_one_series_is_selected() {
    let mut engine = two_series_engine();

    engine.toggle_series_selection("a").expect("select a");
    assert_eq!(engine.selected_series(), Some("a"));

    engine.toggle_series_selection("b").expect("select b");
    assert_eq!(engine.selected_series(), Some("b"));
}

#[test]
fn reselecting_the_selection_clears_it() {
    let mut engine = two_series_engine();

    engine.toggle_series_selection("a").expect("select a");
    engine.toggle_series_selection("a").expect("deselect a");
    assert_eq!(engine.selected_series(), None);
}

#[test]
fn unknown_series_id_is_rejected() {
    let mut engine = two_series_engine();
    assert!(engine.toggle_series_selection("nope").is_err());
    assert_eq!(engine.selected_series(), None);
}

#[test]
fn clicking_a_marker_selects_its_series() {
    let mut engine = two_series_engine();
    let (px, py) = marker_position(&engine, 2.0, 5.0);

    engine.click_at(px, py);
    assert_eq!(engine.selected_series(), Some("b"));
}

#[test]
fn clicking_another_marker_moves_the_selection() {
    let mut engine = two_series_engine();

    let (px, py) = marker_position(&engine, 2.0, 2.0);
    engine.click_at(px, py);
    assert_eq!(engine.selected_series(), Some("a"));

    let (px, py) = marker_position(&engine, 2.0, 5.0);
    engine.click_at(px, py);
    assert_eq!(engine.selected_series(), Some("b"));
}

#[test]
fn clicking_the_selected_marker_again_deselects() {
    let mut engine = two_series_engine();
    let (px, py) = marker_position(&engine, 2.0, 2.0);

    engine.click_at(px, py);
    engine.click_at(px, py);
    assert_eq!(engine.selected_series(), None);
}

#[test]
fn clicking_empty_space_leaves_selection_unchanged() {
    let mut engine = two_series_engine();
    engine.toggle_series_selection("a").expect("select a");

    // Inside the plot area but well away from both lines.
    let px = engine.map_x_to_pixel(1.5).expect("map x");
    let py = engine.map_y_to_pixel(3.5).expect("map y");
    engine.click_at(px, py);

    assert_eq!(engine.selected_series(), Some("a"));
}

#[test]
fn legend_click_toggles_like_a_line_click() {
    let mut engine = two_series_engine();

    engine.click_legend_entry("b").expect("legend click");
    assert_eq!(engine.selected_series(), Some("b"));

    engine.click_legend_entry("b").expect("legend click");
    assert_eq!(engine.selected_series(), None);
}

#[test]
fn clear_selection_resets_without_error() {
    let mut engine = two_series_engine();

    engine.clear_selection();
    assert_eq!(engine.selected_series(), None);

    engine.toggle_series_selection("a").expect("select a");
    engine.clear_selection();
    assert_eq!(engine.selected_series(), None);
}

#[test]
fn replacing_the_series_set_drops_the_selection() {
    let mut engine = two_series_engine();
    engine.toggle_series_selection("a").expect("select a");

    engine
        .set_series(vec![
            Series::from_xy("c", "Series C", &[1.0, 2.0], &[Some(1.0), Some(2.0)])
                .expect("series c"),
        ])
        .expect("replace series");
    assert_eq!(engine.selected_series(), None);
}
