//! The fixed 10 × 3 layout matrix.
//!
//! Rows follow the ArchiMate layers from top to bottom, with the business,
//! application and technology layers split into an external sub-row
//! (services, interfaces) above an internal one. Columns follow the aspects
//! from left to right: passive structure, behavior, active structure.

pub const ROW_COUNT: usize = 10;
pub const COLUMN_COUNT: usize = 3;

/// An ArchiMate layer. Several rows can belong to the same layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    Motivation,
    Strategy,
    Business,
    Application,
    Technology,
    Physical,
    ImplementationMigration,
}

/// A matrix row, declared in top-to-bottom order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Row {
    Motivation,
    Strategy,
    BusinessExternal,
    BusinessInternal,
    ApplicationExternal,
    ApplicationInternal,
    TechnologyExternal,
    TechnologyInternal,
    Physical,
    ImplementationMigration,
}

impl Row {
    /// All rows, top to bottom.
    pub const ALL: [Row; ROW_COUNT] = [
        Row::Motivation,
        Row::Strategy,
        Row::BusinessExternal,
        Row::BusinessInternal,
        Row::ApplicationExternal,
        Row::ApplicationInternal,
        Row::TechnologyExternal,
        Row::TechnologyInternal,
        Row::Physical,
        Row::ImplementationMigration,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn layer(self) -> Layer {
        match self {
            Row::Motivation => Layer::Motivation,
            Row::Strategy => Layer::Strategy,
            Row::BusinessExternal | Row::BusinessInternal => Layer::Business,
            Row::ApplicationExternal | Row::ApplicationInternal => Layer::Application,
            Row::TechnologyExternal | Row::TechnologyInternal => Layer::Technology,
            Row::Physical => Layer::Physical,
            Row::ImplementationMigration => Layer::ImplementationMigration,
        }
    }
}

/// A matrix column, declared in left-to-right order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Column {
    Passive,
    Behavior,
    Active,
}

impl Column {
    /// All columns, left to right.
    pub const ALL: [Column; COLUMN_COUNT] = [Column::Passive, Column::Behavior, Column::Active];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Returns the column `offset` steps away, if it exists.
    pub fn offset(self, offset: isize) -> Option<Column> {
        let index = self.index().checked_add_signed(offset)?;
        Self::ALL.get(index).copied()
    }

    /// Returns the number of columns between `self` and `other`.
    pub fn distance(self, other: Column) -> usize {
        self.index().abs_diff(other.index())
    }
}

/// The address of one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellAddress {
    row: Row,
    column: Column,
}

impl CellAddress {
    pub fn new(row: Row, column: Column) -> Self {
        Self { row, column }
    }

    pub fn row(self) -> Row {
        self.row
    }

    pub fn column(self) -> Column {
        self.column
    }

    /// Iterates every cell address, row by row from the top left.
    pub fn all() -> impl Iterator<Item = CellAddress> {
        Row::ALL
            .into_iter()
            .flat_map(|row| Column::ALL.into_iter().map(move |column| Self::new(row, column)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_indices_follow_declaration_order() {
        for (i, row) in Row::ALL.into_iter().enumerate() {
            assert_eq!(row.index(), i);
        }
        assert_eq!(Row::Motivation.index(), 0);
        assert_eq!(Row::ImplementationMigration.index(), ROW_COUNT - 1);
    }

    #[test]
    fn test_sub_rows_share_a_layer() {
        assert_eq!(Row::BusinessExternal.layer(), Row::BusinessInternal.layer());
        assert_eq!(Row::TechnologyExternal.layer(), Layer::Technology);
        assert_ne!(Row::BusinessInternal.layer(), Row::ApplicationExternal.layer());
    }

    #[test]
    fn test_column_offset_and_distance() {
        assert_eq!(Column::Behavior.offset(-1), Some(Column::Passive));
        assert_eq!(Column::Behavior.offset(1), Some(Column::Active));
        assert_eq!(Column::Passive.offset(-1), None);
        assert_eq!(Column::Active.offset(1), None);
        assert_eq!(Column::Passive.offset(2), Some(Column::Active));

        assert_eq!(Column::Passive.distance(Column::Active), 2);
        assert_eq!(Column::Active.distance(Column::Behavior), 1);
    }

    #[test]
    fn test_all_addresses_row_major() {
        let all: Vec<_> = CellAddress::all().collect();
        assert_eq!(all.len(), ROW_COUNT * COLUMN_COUNT);
        assert_eq!(all[0], CellAddress::new(Row::Motivation, Column::Passive));
        assert_eq!(all[4], CellAddress::new(Row::Strategy, Column::Behavior));
    }
}
