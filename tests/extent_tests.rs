use hazchart::core::{Axis, Extent, PlotPoint, Series};
use hazchart::error::PlotError;

fn series(id: &str, samples: Vec<Option<(f64, f64)>>) -> Series {
    let samples = samples
        .into_iter()
        .map(|pair| pair.map(|(x, y)| PlotPoint::new(x, y)))
        .collect();
    Series::new(id, id, samples).expect("valid series")
}

#[test]
fn scan_finds_min_and_max_across_series() {
    let list = vec![
        series("a", vec![Some((1.0, 10.0)), Some((2.0, 20.0))]),
        series("b", vec![Some((0.5, 15.0)), Some((3.0, 5.0))]),
    ];

    let x = Extent::scan(&list, Axis::X).expect("x extent");
    let y = Extent::scan(&list, Axis::Y).expect("y extent");

    assert_eq!((x.min, x.max), (0.5, 3.0));
    assert_eq!((y.min, y.max), (5.0, 20.0));
}

#[test]
fn gap_sentinels_are_excluded_from_scan() {
    let list = vec![series(
        "a",
        vec![Some((1.0, 10.0)), None, Some((2.0, 20.0))],
    )];

    let y = Extent::scan(&list, Axis::Y).expect("y extent");
    assert_eq!((y.min, y.max), (10.0, 20.0));
}

#[test]
fn all_gap_series_yield_empty_domain_error() {
    let list = vec![series("a", vec![None, None])];

    assert!(matches!(
        Extent::scan(&list, Axis::X),
        Err(PlotError::EmptyDomain("x"))
    ));
}

#[test]
fn no_series_yield_empty_domain_error() {
    let list: Vec<Series> = Vec::new();
    assert!(matches!(
        Extent::scan(&list, Axis::Y),
        Err(PlotError::EmptyDomain("y"))
    ));
}

#[test]
fn duplicate_extremes_are_fine() {
    let list = vec![series("a", vec![Some((1.0, 7.0)), Some((2.0, 7.0))])];
    let y = Extent::scan(&list, Axis::Y).expect("y extent");
    assert_eq!((y.min, y.max), (7.0, 7.0));
}
