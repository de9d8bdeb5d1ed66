use facility_siting::core::distance_matrix;
use facility_siting::data::reference::{random_point_sets, reference_points};
use facility_siting::models::point::points_from_pairs;
use facility_siting::{place, PlacementConfig, PlacementError, Point};

#[test]
fn square_ties_resolve_to_lowest_indices() {
    let points = points_from_pairs(&[(0, 0), (0, 10), (10, 0), (10, 10)]);
    let report = place(&points, &PlacementConfig::new(4, 2)).unwrap();

    let expected_total = 10.0 + 10.0 + 10.0 * 2.0_f64.sqrt();
    for total in &report.total_distances {
        assert!((total - expected_total).abs() < 1e-9);
    }
    assert_eq!(report.facilities(), &[Point::new(0, 0), Point::new(0, 10)]);
}

#[test]
fn reference_configuration_selects_two_input_points() {
    let points = reference_points();
    let report = place(&points, &PlacementConfig::default()).unwrap();

    assert_eq!(report.facilities().len(), 2);
    assert!(report.facilities().iter().all(|p| points.contains(p)));
    assert_eq!(report.facilities(), &[Point::new(600, 600), Point::new(500, 500)]);
}

#[test]
fn out_of_range_reference_point_is_rejected() {
    let mut points = reference_points();
    points[8] = Point::new(1000, 998);

    match place(&points, &PlacementConfig::default()) {
        Err(PlacementError::RangeError { point, index, min, max }) => {
            assert_eq!(point, Point::new(1000, 998));
            assert_eq!(index, 8);
            assert_eq!((min, max), (0, 999));
        }
        other => panic!("expected RangeError, got {:?}", other),
    }
}

#[test]
fn random_sets_satisfy_selection_properties() {
    let config = PlacementConfig::new(15, 4);
    for points in random_point_sets(&config, 25, Some(2024)) {
        let report = place(&points, &config).unwrap();
        let matrix = distance_matrix::build(&points);

        for i in 0..points.len() {
            assert_eq!(matrix.get(i, i), 0.0);
            for j in 0..points.len() {
                assert_eq!(matrix.get(i, j), matrix.get(j, i));
                assert!((matrix.get(i, j) - points[i].distance_to(&points[j])).abs() < 1e-9);
            }
        }

        let chosen = report.selection.indices();
        assert_eq!(chosen.len(), 4);
        let worst_inside = chosen.iter().map(|&i| report.total_distances[i]).fold(f64::MIN, f64::max);
        for i in (0..points.len()).filter(|i| !chosen.contains(i)) {
            assert!(report.total_distances[i] >= worst_inside);
        }

        // Within equal totals the lower index comes first.
        for pair in chosen.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            let (ta, tb) = (report.total_distances[a], report.total_distances[b]);
            assert!(ta < tb || (ta == tb && a < b));
        }
    }
}

#[test]
fn error_variants_for_bad_input() {
    let config = PlacementConfig::default();

    let short = points_from_pairs(&[(1, 1), (2, 2)]);
    assert!(matches!(place(&short, &config), Err(PlacementError::CountError { expected: 10, actual: 2 })));

    let mut duplicated = reference_points();
    duplicated[9] = duplicated[0];
    assert!(matches!(place(&duplicated, &config), Err(PlacementError::DuplicateError { first: 0, second: 9, .. })));

    let too_many = PlacementConfig::new(10, 11);
    assert!(matches!(place(&reference_points(), &too_many), Err(PlacementError::ParameterError { .. })));
}
