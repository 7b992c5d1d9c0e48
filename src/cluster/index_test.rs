#[cfg(test)]
mod tests {
    use crate::cluster::{AXES, Point, SpatialIndex};

    fn sample() -> Vec<Point> {
        vec![
            Point([5, 1]),
            Point([-3, 8]),
            Point([5, -2]),
            Point([0, 0]),
            Point([5, 1]),
        ]
    }

    #[test]
    fn test_orderings_are_sorted() {
        let points = sample();
        let index = SpatialIndex::new(&points);

        for axis in 0..AXES {
            let coords: Vec<i32> = index
                .sorted(axis)
                .iter()
                .map(|&id| points[id].coord(axis))
                .collect();
            assert!(coords.windows(2).all(|w| w[0] <= w[1]), "axis {axis}");
        }
    }

    #[test]
    fn test_ties_keep_input_order() {
        let points = sample();
        let index = SpatialIndex::new(&points);
        assert_eq!(index.sorted(0), &[1, 3, 0, 2, 4]);
        assert_eq!(index.sorted(1), &[2, 3, 0, 4, 1]);
    }

    #[test]
    fn test_positions_invert_orderings() {
        let points = sample();
        let index = SpatialIndex::new(&points);

        for axis in 0..AXES {
            for id in 0..points.len() {
                assert_eq!(index.sorted(axis)[index.position(axis, id)], id);
            }
        }
    }

    #[test]
    fn test_duplicates_get_distinct_slots() {
        let points = vec![Point([2, 2]); 3];
        let index = SpatialIndex::new(&points);
        let mut slots: Vec<usize> = (0..3).map(|id| index.position(0, id)).collect();
        slots.sort_unstable();
        assert_eq!(slots, vec![0, 1, 2]);
    }

    #[test]
    fn test_empty_index() {
        let index = SpatialIndex::new(&[]);
        assert!(index.is_empty());
        assert_eq!(index.len(), 0);
        assert!(index.sorted(0).is_empty());
    }

    #[test]
    #[should_panic(expected = "not in the index")]
    fn test_unknown_handle_is_a_contract_violation() {
        let points = sample();
        let index = SpatialIndex::new(&points);
        index.position(0, points.len());
    }
}
