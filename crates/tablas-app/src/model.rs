// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use serde::{Deserialize, Serialize};

use crate::grid::TableView;
use crate::ids::TabId;

/// Shared closed bounds for all four range inputs.
pub const BOUND_MIN: i64 = -50;
pub const BOUND_MAX: i64 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Field {
    MinCol,
    MaxCol,
    MinRow,
    MaxRow,
}

impl Field {
    pub const ALL: [Self; 4] = [Self::MinCol, Self::MaxCol, Self::MinRow, Self::MaxRow];

    pub const fn label(self) -> &'static str {
        match self {
            Self::MinCol => "minimum column",
            Self::MaxCol => "maximum column",
            Self::MinRow => "minimum row",
            Self::MaxRow => "maximum row",
        }
    }

    pub const fn short_label(self) -> &'static str {
        match self {
            Self::MinCol => "min col",
            Self::MaxCol => "max col",
            Self::MinRow => "min row",
            Self::MaxRow => "max row",
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Self::MinCol => 0,
            Self::MaxCol => 1,
            Self::MinRow => 2,
            Self::MaxRow => 3,
        }
    }

    /// The other bound on the same axis.
    pub const fn partner(self) -> Self {
        match self {
            Self::MinCol => Self::MaxCol,
            Self::MaxCol => Self::MinCol,
            Self::MinRow => Self::MaxRow,
            Self::MaxRow => Self::MinRow,
        }
    }

    pub const fn is_lower_bound(self) -> bool {
        matches!(self, Self::MinCol | Self::MinRow)
    }
}

/// Validated bounds describing which rows and columns to multiply.
/// Invariant: both axes ordered, all four values inside [-50, 50]. The
/// validator is the normal producer; `new` guards the fixture paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Range {
    pub min_col: i64,
    pub max_col: i64,
    pub min_row: i64,
    pub max_row: i64,
}

impl Range {
    pub fn new(min_col: i64, max_col: i64, min_row: i64, max_row: i64) -> Option<Self> {
        let range = Self {
            min_col,
            max_col,
            min_row,
            max_row,
        };
        range.is_valid().then_some(range)
    }

    pub fn is_valid(self) -> bool {
        let bounds = BOUND_MIN..=BOUND_MAX;
        bounds.contains(&self.min_col)
            && bounds.contains(&self.max_col)
            && bounds.contains(&self.min_row)
            && bounds.contains(&self.max_row)
            && self.min_col <= self.max_col
            && self.min_row <= self.max_row
    }

    pub fn label(self) -> String {
        format!(
            "({} to {}) by ({} to {})",
            self.min_col, self.max_col, self.min_row, self.max_row
        )
    }

    pub const fn value_of(self, field: Field) -> i64 {
        match field {
            Field::MinCol => self.min_col,
            Field::MaxCol => self.max_col,
            Field::MinRow => self.min_row,
            Field::MaxRow => self.max_row,
        }
    }

    pub const fn column_count(self) -> usize {
        (self.max_col - self.min_col + 1) as usize
    }

    pub const fn row_count(self) -> usize {
        (self.max_row - self.min_row + 1) as usize
    }
}

/// One generated table bound to a closable tab. The tab and its view are
/// created together and destroyed together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tab {
    pub id: TabId,
    pub label: String,
    pub view: TableView,
}

/// Entry in the bulk-delete list, mirroring one live tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteCandidate {
    pub id: TabId,
    pub label: String,
}

#[cfg(test)]
mod tests {
    use super::{Field, Range};

    #[test]
    fn range_label_matches_tab_naming() {
        let range = Range::new(3, 5, 4, 5).expect("valid range");
        assert_eq!(range.label(), "(3 to 5) by (4 to 5)");
    }

    #[test]
    fn range_rejects_reversed_axes() {
        assert!(Range::new(10, 5, 1, 2).is_none());
        assert!(Range::new(1, 2, 10, 5).is_none());
    }

    #[test]
    fn range_rejects_out_of_bound_values() {
        assert!(Range::new(-51, 0, 0, 0).is_none());
        assert!(Range::new(0, 51, 0, 0).is_none());
        assert!(Range::new(-50, 50, -50, 50).is_some());
    }

    #[test]
    fn degenerate_single_cell_range_is_valid() {
        let range = Range::new(7, 7, 7, 7).expect("valid range");
        assert_eq!(range.column_count(), 1);
        assert_eq!(range.row_count(), 1);
    }

    #[test]
    fn field_partners_pair_by_axis() {
        assert_eq!(Field::MinCol.partner(), Field::MaxCol);
        assert_eq!(Field::MaxRow.partner(), Field::MinRow);
        assert!(Field::MinRow.is_lower_bound());
        assert!(!Field::MaxCol.is_lower_bound());
    }
}
