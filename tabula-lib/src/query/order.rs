//! Sort descriptor and sort cycling.

/// Sort direction for ordering rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    /// Ascending order (A-Z, 0-9).
    #[default]
    Asc,
    /// Descending order (Z-A, 9-0).
    Desc,
}

impl Direction {
    /// Returns the opposite direction.
    pub fn flipped(self) -> Self {
        match self {
            Direction::Asc => Direction::Desc,
            Direction::Desc => Direction::Asc,
        }
    }
}

/// The active sort: one field and a direction.
///
/// # Example
///
/// ```
/// use tabula_lib::query::{Direction, SortDescriptor};
///
/// let sort = SortDescriptor::desc("price");
/// assert_eq!(sort.field(), "price");
/// assert_eq!(sort.direction(), Direction::Desc);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortDescriptor {
    field: String,
    direction: Direction,
}

impl SortDescriptor {
    /// Creates a descriptor with an explicit direction.
    pub fn new(field: impl Into<String>, direction: Direction) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }

    /// Creates an ascending descriptor.
    pub fn asc(field: impl Into<String>) -> Self {
        Self::new(field, Direction::Asc)
    }

    /// Creates a descending descriptor.
    pub fn desc(field: impl Into<String>) -> Self {
        Self::new(field, Direction::Desc)
    }

    /// Returns the sorted field key.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Returns the direction.
    pub fn direction(&self) -> Direction {
        self.direction
    }
}

/// How repeated header clicks on the same column cycle the sort.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortCycle {
    /// asc → desc → asc → ...
    #[default]
    Toggle,
    /// asc → desc → unsorted → asc → ...
    TriState,
}

impl SortCycle {
    /// Computes the sort that follows a click on `field`.
    ///
    /// A click on a different column always starts at ascending.
    pub fn next(self, current: Option<&SortDescriptor>, field: &str) -> Option<SortDescriptor> {
        match current {
            Some(active) if active.field == field => match (self, active.direction) {
                (SortCycle::TriState, Direction::Desc) => None,
                (_, direction) => Some(SortDescriptor::new(field, direction.flipped())),
            },
            _ => Some(SortDescriptor::asc(field)),
        }
    }
}
