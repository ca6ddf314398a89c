//! 4-connected components of filled cells.
//!
//! Components are discovered by a row-major scan; each unvisited filled cell
//! starts an explicit-stack flood fill over its up/down/left/right neighbors.
//! Every cell is visited at most once, so the pass is O(rows * cols) in time
//! and space with no recursion.

use rulegrid_core::Grid;

/// Inclusive cell-space bounding box of a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min_row: usize,
    pub max_row: usize,
    pub min_col: usize,
    pub max_col: usize,
}

impl Bounds {
    fn at(row: usize, col: usize) -> Self {
        Self {
            min_row: row,
            max_row: row,
            min_col: col,
            max_col: col,
        }
    }

    fn include(&mut self, row: usize, col: usize) {
        self.min_row = self.min_row.min(row);
        self.max_row = self.max_row.max(row);
        self.min_col = self.min_col.min(col);
        self.max_col = self.max_col.max(col);
    }

    /// Width in cells.
    pub fn width(&self) -> usize {
        self.max_col - self.min_col + 1
    }

    /// Height in cells.
    pub fn height(&self) -> usize {
        self.max_row - self.min_row + 1
    }
}

/// A maximal 4-connected set of filled cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    /// `(row, col)` pairs in visitation order; the first is the cell that
    /// started the fill.
    pub cells: Vec<(usize, usize)>,
    pub bounds: Bounds,
}

/// Finds every 4-connected component of filled cells.
///
/// Components are returned in the row-major order of their first discovered
/// cell. Unset cells are treated as empty.
pub fn find_components(grid: &Grid) -> Vec<Component> {
    let rows = grid.rows();
    let cols = grid.cols();
    let mut visited = vec![false; rows * cols];
    let mut components = Vec::new();
    let mut stack = Vec::new();

    for row in 0..rows {
        for col in 0..cols {
            if visited[row * cols + col] || !grid.is_filled(row, col) {
                continue;
            }

            visited[row * cols + col] = true;
            stack.push((row, col));
            let mut cells = Vec::new();
            let mut bounds = Bounds::at(row, col);

            while let Some((r, c)) = stack.pop() {
                cells.push((r, c));
                bounds.include(r, c);

                let neighbors = [
                    (r > 0).then(|| (r - 1, c)),
                    (r + 1 < rows).then_some((r + 1, c)),
                    (c > 0).then(|| (r, c - 1)),
                    (c + 1 < cols).then_some((r, c + 1)),
                ];
                for (nr, nc) in neighbors.into_iter().flatten() {
                    let idx = nr * cols + nc;
                    if !visited[idx] && grid.is_filled(nr, nc) {
                        visited[idx] = true;
                        stack.push((nr, nc));
                    }
                }
            }

            components.push(Component { cells, bounds });
        }
    }

    components
}

#[cfg(test)]
mod tests {
    use super::*;
    use rulegrid_core::seed_row::parse_seed_row;

    fn grid(lines: &[&str]) -> Grid {
        let rows: Vec<Vec<bool>> = lines.iter().map(|l| parse_seed_row(l).unwrap()).collect();
        Grid::from_rows(&rows).unwrap()
    }

    #[test]
    fn empty_grid_has_no_components() {
        let g = grid(&[".....", ".....", ".....", ".....", "....."]);
        assert!(find_components(&g).is_empty());
    }

    #[test]
    fn block_at_origin_is_one_component() {
        let g = grid(&["##...", "##...", ".....", ".....", "....."]);
        let comps = find_components(&g);
        assert_eq!(comps.len(), 1);
        assert_eq!(comps[0].cells.len(), 4);
        assert_eq!(
            comps[0].bounds,
            Bounds {
                min_row: 0,
                max_row: 1,
                min_col: 0,
                max_col: 1
            }
        );
        assert_eq!(comps[0].cells[0], (0, 0));
    }

    #[test]
    fn diagonal_cells_are_separate_components() {
        let g = grid(&["#....", ".#...", "..#..", ".....", "....."]);
        let comps = find_components(&g);
        assert_eq!(comps.len(), 3);
        let starts: Vec<_> = comps.iter().map(|c| c.cells[0]).collect();
        assert_eq!(starts, vec![(0, 0), (1, 1), (2, 2)]);
    }

    #[test]
    fn l_shape_bounds_cover_concavity() {
        let g = grid(&["#....", "#....", "###..", ".....", "....."]);
        let comps = find_components(&g);
        assert_eq!(comps.len(), 1);
        assert_eq!(comps[0].cells.len(), 5);
        assert_eq!(comps[0].bounds.width(), 3);
        assert_eq!(comps[0].bounds.height(), 3);
    }

    #[test]
    fn components_ordered_by_first_cell_in_row_major_scan() {
        // The U-shape's first cell (0, 3) precedes the lone cell at (1, 0).
        let g = grid(&["...#.#", "#..#.#", "...###", "......", "......"]);
        let comps = find_components(&g);
        assert_eq!(comps.len(), 2);
        assert_eq!(comps[0].cells[0], (0, 3));
        assert_eq!(comps[0].cells.len(), 7);
        assert_eq!(comps[1].cells, vec![(1, 0)]);
    }

    #[test]
    fn unset_rows_are_treated_as_empty() {
        let seed = parse_seed_row("#####").unwrap();
        let g = Grid::with_seed(&seed, 5).unwrap();
        let comps = find_components(&g);
        assert_eq!(comps.len(), 1);
        assert_eq!(comps[0].bounds.height(), 1);
    }

    #[test]
    fn full_grid_is_one_component() {
        let rows: Vec<Vec<bool>> = (0..50).map(|_| vec![true; 50]).collect();
        let g = Grid::from_rows(&rows).unwrap();
        let comps = find_components(&g);
        assert_eq!(comps.len(), 1);
        assert_eq!(comps[0].cells.len(), 2500);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;
        use std::collections::HashSet;

        fn any_grid() -> impl Strategy<Value = Grid> {
            (5_usize..=20, 5_usize..=20).prop_flat_map(|(rows, cols)| {
                prop::collection::vec(prop::collection::vec(any::<bool>(), cols), rows)
                    .prop_map(|rows| Grid::from_rows(&rows).unwrap())
            })
        }

        proptest! {
            #[test]
            fn components_partition_filled_cells(g in any_grid()) {
                let comps = find_components(&g);
                let mut seen = HashSet::new();
                for comp in &comps {
                    for &cell in &comp.cells {
                        prop_assert!(seen.insert(cell), "cell {cell:?} in two components");
                    }
                }
                let filled: HashSet<(usize, usize)> = (0..g.rows())
                    .flat_map(|r| (0..g.cols()).map(move |c| (r, c)))
                    .filter(|&(r, c)| g.is_filled(r, c))
                    .collect();
                prop_assert_eq!(seen, filled);
            }

            #[test]
            fn bounds_contain_every_cell(g in any_grid()) {
                for comp in find_components(&g) {
                    let b = comp.bounds;
                    for &(r, c) in &comp.cells {
                        prop_assert!(b.min_row <= r && r <= b.max_row);
                        prop_assert!(b.min_col <= c && c <= b.max_col);
                    }
                }
            }

            #[test]
            fn first_cells_are_in_row_major_order(g in any_grid()) {
                let starts: Vec<_> = find_components(&g).iter().map(|c| c.cells[0]).collect();
                let mut sorted = starts.clone();
                sorted.sort();
                prop_assert_eq!(starts, sorted);
            }
        }
    }
}
