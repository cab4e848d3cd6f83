//! Unit tests for sg-core primitives.

#[cfg(test)]
mod cell {
    use crate::{Cell, Coord};

    #[test]
    fn glyph_roundtrip() {
        for cell in Cell::ALL {
            assert_eq!(Cell::from_glyph(cell.glyph()), Some(cell));
        }
        assert_eq!(Cell::from_glyph('x'), None);
    }

    #[test]
    fn categorical_order_is_empty_a_b() {
        assert_eq!(Cell::ALL, [Cell::Empty, Cell::TypeA, Cell::TypeB]);
        assert_eq!(Cell::default(), Cell::Empty);
    }

    #[test]
    fn coord_bounds() {
        assert!(Coord::new(2, 3).in_bounds(3, 4));
        assert!(!Coord::new(3, 0).in_bounds(3, 4));
        assert!(!Coord::new(0, 4).in_bounds(3, 4));
        assert_eq!(Coord::new(1, 2).to_string(), "(1, 2)");
    }
}

#[cfg(test)]
mod grid {
    use crate::{Cell, Coord, Grid, SgError, SimRng};

    const FIXTURE: &str = "\
A A .
. B A
B . B
";

    #[test]
    fn parse_fixture() {
        let grid: Grid = FIXTURE.parse().unwrap();
        assert_eq!((grid.rows(), grid.cols()), (3, 3));
        assert_eq!(grid[Coord::new(0, 0)], Cell::TypeA);
        assert_eq!(grid[Coord::new(1, 1)], Cell::TypeB);
        assert_eq!(grid[Coord::new(2, 1)], Cell::Empty);
        assert_eq!(grid.to_string(), FIXTURE);
    }

    #[test]
    fn parse_rejects_ragged_rows() {
        let err = "A A\nB\n".parse::<Grid>().unwrap_err();
        assert!(matches!(err, SgError::Parse(_)), "got {err}");
    }

    #[test]
    fn parse_rejects_unknown_glyph() {
        assert!("A x\n".parse::<Grid>().is_err());
        assert!("\n\n".parse::<Grid>().is_err());
    }

    #[test]
    fn counts_and_empty_cells() {
        let grid: Grid = FIXTURE.parse().unwrap();
        let counts = grid.counts();
        assert_eq!(counts.type_a, 3);
        assert_eq!(counts.type_b, 3);
        assert_eq!(counts.empty, 3);
        assert_eq!(counts.total(), 9);
        assert_eq!(
            grid.empty_cells(),
            vec![Coord::new(0, 2), Coord::new(1, 0), Coord::new(2, 1)]
        );
    }

    #[test]
    fn get_and_set_respect_bounds() {
        let mut grid = Grid::new(2, 2).unwrap();
        assert_eq!(grid.get(Coord::new(2, 0)), None);
        grid.set(Coord::new(1, 1), Cell::TypeB).unwrap();
        assert_eq!(grid.get(Coord::new(1, 1)), Some(Cell::TypeB));
        assert!(matches!(
            grid.set(Coord::new(0, 2), Cell::TypeA),
            Err(SgError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn overflowing_grid_rejected() {
        let huge = 1usize << 33;
        assert!(matches!(Grid::new(huge, huge), Err(SgError::Config(_))));
        assert!(matches!(
            Grid::random(huge, huge, &[0.2, 0.4, 0.4], &mut SimRng::new(1)),
            Err(SgError::Config(_))
        ));
        assert!(Grid::from_cells(huge, huge, Vec::new()).is_err());
    }

    #[test]
    fn from_cells_checks_length() {
        assert!(Grid::from_cells(2, 2, vec![Cell::Empty; 3]).is_err());
        assert!(Grid::from_cells(2, 2, vec![Cell::Empty; 4]).is_ok());
    }

    #[test]
    fn coords_are_row_major() {
        let grid = Grid::new(2, 3).unwrap();
        let coords: Vec<_> = grid.coords().map(|c| (c.row, c.col)).collect();
        assert_eq!(coords, [(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]);
    }

    #[test]
    fn random_is_deterministic() {
        let prior = [0.2, 0.4, 0.4];
        let a = Grid::random(20, 20, &prior, &mut SimRng::new(7)).unwrap();
        let b = Grid::random(20, 20, &prior, &mut SimRng::new(7)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn random_respects_degenerate_priors() {
        let all_empty = Grid::random(5, 5, &[1.0, 0.0, 0.0], &mut SimRng::new(1)).unwrap();
        assert_eq!(all_empty.counts().empty, 25);

        let all_b = Grid::random(5, 5, &[0.0, 0.0, 1.0], &mut SimRng::new(1)).unwrap();
        assert_eq!(all_b.counts().type_b, 25);
    }

    #[test]
    fn random_rejects_all_zero_weights() {
        let err = Grid::random(2, 2, &[0.0, 0.0, 0.0], &mut SimRng::new(1)).unwrap_err();
        assert!(err.is_config_error());
    }
}

#[cfg(test)]
mod neighborhood {
    use proptest::prelude::*;

    use crate::{Coord, SgError, neighbors};

    #[test]
    fn interior_cell_has_full_window() {
        let n: Vec<_> = neighbors(Coord::new(2, 2), 5, 5, 1).unwrap().collect();
        assert_eq!(n.len(), 8);
        assert_eq!(
            n,
            vec![
                Coord::new(1, 1), Coord::new(1, 2), Coord::new(1, 3),
                Coord::new(2, 1),                   Coord::new(2, 3),
                Coord::new(3, 1), Coord::new(3, 2), Coord::new(3, 3),
            ]
        );
    }

    #[test]
    fn corner_cell_is_clipped() {
        let n: Vec<_> = neighbors(Coord::new(0, 0), 5, 5, 1).unwrap().collect();
        assert_eq!(n, vec![Coord::new(0, 1), Coord::new(1, 0), Coord::new(1, 1)]);
    }

    #[test]
    fn radius_two_on_edge() {
        // Top edge, middle column: rows 0..=2, cols 0..=4 → 15 − 1.
        let n = neighbors(Coord::new(0, 2), 5, 5, 2).unwrap();
        assert_eq!(n.window_len(), 14);
        assert_eq!(n.count(), 14);
    }

    #[test]
    fn radius_larger_than_grid() {
        let n: Vec<_> = neighbors(Coord::new(0, 1), 1, 2, 10).unwrap().collect();
        assert_eq!(n, vec![Coord::new(0, 0)]);
        assert_eq!(neighbors(Coord::new(0, 0), 1, 1, 3).unwrap().count(), 0);
    }

    #[test]
    fn clone_restarts_sequence() {
        let n = neighbors(Coord::new(1, 1), 3, 3, 1).unwrap();
        let first: Vec<_> = n.clone().collect();
        let second: Vec<_> = n.collect();
        assert_eq!(first, second);
    }

    #[test]
    fn out_of_bounds_center_rejected() {
        let err = neighbors(Coord::new(3, 0), 3, 3, 1).unwrap_err();
        assert!(matches!(err, SgError::OutOfBounds { .. }));
        assert!(!err.is_config_error());
    }

    #[test]
    fn zero_radius_rejected() {
        assert!(matches!(neighbors(Coord::new(0, 0), 3, 3, 0), Err(SgError::Config(_))));
    }

    /// Number of window positions along one axis that fall inside `[0, len)`.
    fn clipped_span(center: usize, len: usize, radius: usize) -> usize {
        let lo = center.saturating_sub(radius);
        let hi = (center + radius).min(len - 1);
        hi - lo + 1
    }

    proptest! {
        #[test]
        fn never_center_never_out_of_bounds(
            rows in 1usize..12,
            cols in 1usize..12,
            radius in 1usize..5,
            seed_r in 0usize..1000,
            seed_c in 0usize..1000,
        ) {
            let center = Coord::new(seed_r % rows, seed_c % cols);
            for c in neighbors(center, rows, cols, radius).unwrap() {
                prop_assert_ne!(c, center);
                prop_assert!(c.in_bounds(rows, cols));
                prop_assert!(c.row.abs_diff(center.row) <= radius);
                prop_assert!(c.col.abs_diff(center.col) <= radius);
            }
        }

        #[test]
        fn count_matches_clipped_window(
            rows in 1usize..12,
            cols in 1usize..12,
            radius in 1usize..5,
            seed_r in 0usize..1000,
            seed_c in 0usize..1000,
        ) {
            let center = Coord::new(seed_r % rows, seed_c % cols);
            let full = (2 * radius + 1).pow(2) - 1;
            let kept = clipped_span(center.row, rows, radius) * clipped_span(center.col, cols, radius) - 1;
            let n = neighbors(center, rows, cols, radius).unwrap();
            prop_assert_eq!(n.window_len(), kept);
            prop_assert_eq!(n.count(), kept);
            prop_assert!(kept <= full);
        }

        #[test]
        fn output_is_row_major_sorted(
            rows in 1usize..10,
            cols in 1usize..10,
            radius in 1usize..4,
        ) {
            let center = Coord::new(rows / 2, cols / 2);
            let n: Vec<_> = neighbors(center, rows, cols, radius).unwrap().collect();
            let mut sorted = n.clone();
            sorted.sort();
            prop_assert_eq!(n, sorted);
        }
    }
}

#[cfg(test)]
mod config {
    use crate::{SgError, SimConfig};

    #[test]
    fn default_is_valid() {
        SimConfig::default().validate().unwrap();
    }

    #[test]
    fn prior_must_sum_to_one() {
        let cfg = SimConfig { prior_dist: [0.2, 0.4, 0.3], ..SimConfig::default() };
        assert!(matches!(cfg.validate(), Err(SgError::Config(_))));

        let close = SimConfig { prior_dist: [0.1, 0.2, 0.7], ..SimConfig::default() };
        close.validate().unwrap();
    }

    #[test]
    fn prior_rejects_negative_and_nan() {
        let neg = SimConfig { prior_dist: [-0.1, 0.6, 0.5], ..SimConfig::default() };
        assert!(neg.validate().is_err());
        let nan = SimConfig { prior_dist: [f64::NAN, 0.5, 0.5], ..SimConfig::default() };
        assert!(nan.validate().is_err());
    }

    #[test]
    fn non_positive_fields_rejected() {
        let base = SimConfig::default();
        for cfg in [
            SimConfig { height: 0, ..base.clone() },
            SimConfig { width: 0, ..base.clone() },
            SimConfig { neighbor_size: 0, ..base.clone() },
            SimConfig { max_frame: 0, ..base.clone() },
            SimConfig { show_every: 0, ..base.clone() },
            SimConfig { neighbor_tol: 1.5, ..base.clone() },
        ] {
            let err = cfg.validate().unwrap_err();
            assert!(err.is_config_error(), "{cfg:?} → {err}");
        }
    }

    #[test]
    fn overflowing_dimensions_rejected() {
        let cfg = SimConfig { height: 1 << 33, width: 1 << 33, ..SimConfig::default() };
        let err = cfg.validate().unwrap_err();
        assert!(matches!(err, SgError::Config(_)), "got {err}");
        assert!(cfg.cell_count().is_err());
        assert_eq!(SimConfig::default().cell_count().unwrap(), 2500);
    }

    #[test]
    fn single_cell_grid_is_isolated() {
        let cfg = SimConfig { height: 1, width: 1, ..SimConfig::default() };
        assert!(matches!(cfg.validate(), Err(SgError::Isolated { .. })));
    }
}

#[cfg(test)]
mod frame {
    use crate::Frame;

    #[test]
    fn render_cadence() {
        assert!(Frame(0).is_render_frame(5));
        assert!(!Frame(3).is_render_frame(5));
        assert!(Frame(10).is_render_frame(5));
        assert!(!Frame(0).is_render_frame(0));
    }

    #[test]
    fn arithmetic_and_display() {
        assert_eq!(Frame(4).next(), Frame(5));
        assert_eq!(Frame(12).to_string(), "F12");
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for len in 1..100 {
            assert_eq!(r1.choose_index(len), r2.choose_index(len));
        }
    }

    #[test]
    fn choose_index_in_bounds() {
        let mut rng = SimRng::new(0);
        assert_eq!(rng.choose_index(0), None);
        for _ in 0..1000 {
            let i = rng.choose_index(7).unwrap();
            assert!(i < 7);
        }
    }
}
