// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use serde::{Deserialize, Serialize};

use crate::model::Range;

/// A rendered multiplication grid: plain data, no widget types.
///
/// The header runs from `min_col - 1` through `max_col`, so its leading
/// value doubles as the corner placeholder above the row-label column.
/// Body rows put the row label in that corner column, keeping every row
/// exactly as wide as the header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableView {
    pub header: Vec<i64>,
    pub rows: Vec<Vec<i64>>,
}

impl TableView {
    pub fn column_count(&self) -> usize {
        self.header.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Materialize the product grid for a validated range.
///
/// Pure function of the range; the caller guarantees the range invariants
/// hold. Every input yields a grid, degenerate 1x1 included.
pub fn render(range: Range) -> TableView {
    let header: Vec<i64> = (range.min_col - 1..=range.max_col).collect();
    let rows = (range.min_row..=range.max_row)
        .map(|row| {
            (range.min_col - 1..=range.max_col)
                .map(|col| if col == range.min_col - 1 { row } else { row * col })
                .collect()
        })
        .collect();
    TableView { header, rows }
}

#[cfg(test)]
mod tests {
    use super::render;
    use crate::model::Range;

    fn range(min_col: i64, max_col: i64, min_row: i64, max_row: i64) -> Range {
        Range::new(min_col, max_col, min_row, max_row).expect("valid test range")
    }

    #[test]
    fn three_to_five_by_four_to_five() {
        let view = render(range(3, 5, 4, 5));
        assert_eq!(view.header, vec![2, 3, 4, 5]);
        assert_eq!(view.rows, vec![vec![4, 12, 16, 20], vec![5, 15, 20, 25]]);
    }

    #[test]
    fn header_and_rows_share_a_width_of_span_plus_one() {
        for (min_col, max_col, min_row, max_row) in
            [(-50, 50, -50, 50), (0, 0, 0, 0), (-3, 2, 1, 4), (50, 50, -50, -50)]
        {
            let r = range(min_col, max_col, min_row, max_row);
            let view = render(r);
            let width = (max_col - min_col + 2) as usize;
            assert_eq!(view.header.len(), width);
            assert_eq!(view.rows.len(), (max_row - min_row + 1) as usize);
            for row in &view.rows {
                assert_eq!(row.len(), width);
            }
        }
    }

    #[test]
    fn body_cells_are_products_of_their_row_and_column_labels() {
        let r = range(-3, 4, -2, 5);
        let view = render(r);
        for (i, row) in view.rows.iter().enumerate() {
            let row_label = r.min_row + i as i64;
            assert_eq!(row[0], row_label);
            for (j, cell) in row.iter().enumerate().skip(1) {
                assert_eq!(*cell, row_label * (r.min_col + j as i64 - 1));
            }
        }
    }

    #[test]
    fn corner_value_repeats_the_first_data_column_label() {
        let view = render(range(3, 5, 1, 1));
        // header leads with min_col - 1; the body puts the row label there
        assert_eq!(view.header[0], 2);
        assert_eq!(view.rows[0][0], 1);
    }

    #[test]
    fn degenerate_range_renders_a_single_row() {
        let view = render(range(7, 7, 9, 9));
        assert_eq!(view.header, vec![6, 7]);
        assert_eq!(view.rows, vec![vec![9, 63]]);
    }

    #[test]
    fn negative_ranges_multiply_with_sign() {
        let view = render(range(-2, -1, -3, -3));
        assert_eq!(view.header, vec![-3, -2, -1]);
        assert_eq!(view.rows, vec![vec![-3, 6, 3]]);
    }
}
