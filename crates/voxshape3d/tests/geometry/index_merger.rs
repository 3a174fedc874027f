use voxshape3d::shape::merger::{create_index_merger, IndexMerger};
use voxshape3d::shape::AxisCoords;

fn random_coords(rng: &mut oorandom::Rand32) -> AxisCoords {
    let count = rng.rand_range(2..7);
    let offset = rng.rand_range(0..4) as f64;
    AxisCoords::from_breakpoints((0..count).map(|_| offset + rng.rand_range(0..20) as f64 / 8.0))
}

fn in_cell(coords: &AxisCoords, cell: i32, value: f64) -> bool {
    if cell < 0 || cell as usize >= coords.cells() {
        value < coords.first() || value > coords.last()
    } else {
        coords.get(cell as usize) <= value && value <= coords.get(cell as usize + 1)
    }
}

#[test]
fn identical_lists() {
    let coords = AxisCoords::explicit(vec![0.0, 0.3, 0.7, 1.0]);
    let merger = create_index_merger(1, &coords, &coords.clone(), true, true);

    assert!(matches!(merger, IndexMerger::Identical(_)));
    assert_eq!(merger.coords(), coords);
}

#[test]
fn disjoint_lists_are_concatenated() {
    let low = AxisCoords::explicit(vec![0.0, 0.5]);
    let high = AxisCoords::explicit(vec![1.0, 1.2, 2.0]);
    let expected = AxisCoords::explicit(vec![0.0, 0.5, 1.0, 1.2, 2.0]);

    let merger = create_index_merger(1, &low, &high, true, true);
    assert!(matches!(merger, IndexMerger::NonOverlapping(_)));
    assert_eq!(merger.coords(), expected);

    let swapped = create_index_merger(1, &high, &low, true, true);
    assert!(matches!(swapped, IndexMerger::NonOverlapping(_)));
    assert_eq!(swapped.coords(), expected);

    let mut cells = vec![];
    assert!(swapped.for_merged_indexes(|a, b, i| {
        cells.push((a, b, i));
        true
    }));
    // The cell between 0.5 and 1.0 is skipped, `high` is the first operand.
    assert_eq!(cells, vec![(-1, 0, 0), (0, 1, 2), (1, 1, 3)]);
}

#[test]
fn regular_grids_within_budget() {
    let merger = create_index_merger(16, &AxisCoords::cube(4), &AxisCoords::cube(8), true, true);
    assert!(merger.is_discrete_cube());
    assert_eq!(merger.coords(), AxisCoords::cube(8));

    let over = create_index_merger(64, &AxisCoords::cube(4), &AxisCoords::cube(8), true, true);
    assert!(!over.is_discrete_cube());
    assert_eq!(over.coords(), AxisCoords::cube(8));
}

#[test]
fn merged_cells_lie_in_their_source_cells() {
    let mut rng = oorandom::Rand32::new(3);

    for _ in 0..500 {
        let a = random_coords(&mut rng);
        let b = random_coords(&mut rng);
        if a.cells() == 0 || b.cells() == 0 {
            continue;
        }

        let merger = create_index_merger(1, &a, &b, true, true);
        let merged = merger.coords();
        assert!(merged.iter().zip(merged.iter().skip(1)).all(|(x, y)| x < y));

        let mut visited = 0;
        assert!(merger.for_merged_indexes(|ai, bi, i| {
            let mid = (merged.get(i as usize) + merged.get(i as usize + 1)) / 2.0;
            assert!(in_cell(&a, ai, mid), "{a:?} {ai} {mid}");
            assert!(in_cell(&b, bi, mid), "{b:?} {bi} {mid}");
            visited += 1;
            true
        }));
        assert!(visited <= merger.cells());
    }
}
