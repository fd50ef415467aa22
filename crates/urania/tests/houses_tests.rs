use urania::error::ChartError;
use urania::houses::locate_house;

const FIXTURES: [[f64; 12]; 3] = [
    // Equal houses from the equinox point.
    [
        0.0, 30.0, 60.0, 90.0, 120.0, 150.0, 180.0, 210.0, 240.0, 270.0, 300.0, 330.0,
    ],
    // Placidus-like spacing with the ascendant late in the circle.
    [
        312.4, 341.6, 14.9, 49.3, 80.1, 106.8, 132.4, 161.6, 194.9, 229.3, 260.1, 286.8,
    ],
    // Strongly uneven spacing, first cusp mid-circle.
    [
        88.0, 95.0, 110.0, 135.0, 170.0, 230.0, 268.0, 275.0, 290.0, 315.0, 350.0, 30.0,
    ],
];

#[test]
fn test_every_degree_lands_in_exactly_one_house() {
    for cusps in &FIXTURES {
        let mut seen = [0usize; 12];
        for i in 0..3600 {
            let degree = i as f64 * 0.1;
            let house = locate_house(cusps, degree).unwrap();
            seen[house as usize - 1] += 1;
        }
        // Every house is hit somewhere in the sweep.
        assert!(seen.iter().all(|&count| count > 0));
        assert_eq!(seen.iter().sum::<usize>(), 3600);
    }
}

#[test]
fn test_each_cusp_opens_its_own_house() {
    for cusps in &FIXTURES {
        for (i, &cusp) in cusps.iter().enumerate() {
            assert_eq!(
                locate_house(cusps, cusp).unwrap(),
                i as u8 + 1,
                "cusp {} of {:?}",
                i,
                cusps
            );
        }
    }
}

#[test]
fn test_degree_just_before_a_cusp_stays_in_the_previous_house() {
    for cusps in &FIXTURES {
        for (i, &cusp) in cusps.iter().enumerate() {
            let before = (cusp - 0.0001).rem_euclid(360.0);
            let previous = if i == 0 { 12 } else { i as u8 };
            assert_eq!(locate_house(cusps, before).unwrap(), previous);
        }
    }
}

#[test]
fn test_collapsed_cusps_are_rejected() {
    let degenerate = [180.0; 12];
    assert!(matches!(
        locate_house(&degenerate, 10.0),
        Err(ChartError::UnresolvedHouse { .. })
    ));
}
