use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TopologyError;

/// Topological location of a point relative to a geometry.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Location {
    /// Interior of the geometry.
    Interior,
    /// Boundary of the geometry.
    Boundary,
    /// Exterior of the geometry.
    Exterior,
}

impl Location {
    fn index(self) -> usize {
        match self {
            Location::Interior => 0,
            Location::Boundary => 1,
            Location::Exterior => 2,
        }
    }
}

/// Value of a DE-9IM matrix cell.
///
/// Values are ordered `F < 0 < 1 < 2 < T`. Cells of a matrix are only ever strengthened along this order by
/// [`RelateResult::update`].
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub enum Dimension {
    /// Empty intersection.
    #[default]
    False,
    /// Intersection consisting of points.
    Zero,
    /// Intersection of dimension one.
    One,
    /// Intersection of dimension two.
    Two,
    /// Non-empty intersection of unknown dimension.
    True,
}

impl Dimension {
    /// Dimension of a geometry of the given topological dimension.
    pub fn from_dimension(dimension: u8) -> Self {
        match dimension {
            0 => Dimension::Zero,
            1 => Dimension::One,
            _ => Dimension::Two,
        }
    }

    /// Character representation used in DE-9IM strings.
    pub fn as_char(&self) -> char {
        match self {
            Dimension::False => 'F',
            Dimension::Zero => '0',
            Dimension::One => '1',
            Dimension::Two => '2',
            Dimension::True => 'T',
        }
    }

    fn from_char(c: char) -> Option<Self> {
        Some(match c {
            'F' => Dimension::False,
            '0' => Dimension::Zero,
            '1' => Dimension::One,
            '2' => Dimension::Two,
            'T' => Dimension::True,
            _ => return None,
        })
    }

    /// Whether the intersection is not empty.
    pub fn is_true(&self) -> bool {
        *self != Dimension::False
    }
}

/// Dimensionally extended 9-intersection matrix.
///
/// Rows are the locations in the first geometry, columns are the locations in the second one. The string
/// representation lists the cells row by row: `II IB IE BI BB BE EI EB EE`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct IntersectionMatrix {
    cells: [Dimension; 9],
}

impl IntersectionMatrix {
    /// Matrix with all cells set to `F`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Value of the cell.
    pub fn get(&self, a: Location, b: Location) -> Dimension {
        self.cells[a.index() * 3 + b.index()]
    }

    /// Matrix with the roles of the two geometries swapped.
    pub fn transposed(&self) -> Self {
        let mut cells = [Dimension::False; 9];
        for row in 0..3 {
            for col in 0..3 {
                cells[col * 3 + row] = self.cells[row * 3 + col];
            }
        }

        Self { cells }
    }

    /// Whether the matrix satisfies the mask.
    pub fn matches(&self, mask: &Mask) -> bool {
        self.cells
            .iter()
            .zip(mask.cells.iter())
            .all(|(value, cell)| cell.matches(*value))
    }
}

impl RelateResult for IntersectionMatrix {
    fn get(&self, a: Location, b: Location) -> Dimension {
        IntersectionMatrix::get(self, a, b)
    }

    fn set(&mut self, a: Location, b: Location, value: Dimension) {
        self.cells[a.index() * 3 + b.index()] = value;
    }

    fn interrupt(&self) -> bool {
        false
    }
}

impl Display for IntersectionMatrix {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for cell in &self.cells {
            write!(f, "{}", cell.as_char())?;
        }

        Ok(())
    }
}

impl FromStr for IntersectionMatrix {
    type Err = TopologyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values: Vec<Dimension> = s
            .chars()
            .map(Dimension::from_char)
            .collect::<Option<_>>()
            .ok_or_else(|| TopologyError::InvalidMatrix(s.to_string()))?;
        let cells = values
            .try_into()
            .map_err(|_| TopologyError::InvalidMatrix(s.to_string()))?;

        Ok(Self { cells })
    }
}

/// Single cell of a [`Mask`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MaskCell {
    /// `*`, any value.
    Any,
    /// `T`, any non-empty intersection.
    True,
    /// `F`, empty intersection.
    False,
    /// `0`, `1` or `2`, intersection of exactly this dimension.
    Dim(Dimension),
}

impl MaskCell {
    fn matches(&self, value: Dimension) -> bool {
        match self {
            MaskCell::Any => true,
            MaskCell::True => value.is_true(),
            MaskCell::False => value == Dimension::False,
            MaskCell::Dim(d) => value == *d,
        }
    }

    /// Whether no further strengthening of the `value` can make it match the cell.
    fn is_violated(&self, value: Dimension) -> bool {
        match self {
            MaskCell::Any | MaskCell::True => false,
            MaskCell::False => value != Dimension::False,
            MaskCell::Dim(d) => value > *d,
        }
    }

    const fn from_byte(b: u8) -> Option<Self> {
        Some(match b {
            b'*' => MaskCell::Any,
            b'T' => MaskCell::True,
            b'F' => MaskCell::False,
            b'0' => MaskCell::Dim(Dimension::Zero),
            b'1' => MaskCell::Dim(Dimension::One),
            b'2' => MaskCell::Dim(Dimension::Two),
            _ => return None,
        })
    }

    fn as_char(&self) -> char {
        match self {
            MaskCell::Any => '*',
            MaskCell::True => 'T',
            MaskCell::False => 'F',
            MaskCell::Dim(d) => d.as_char(),
        }
    }
}

/// DE-9IM pattern such as `T*F**F***`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Mask {
    cells: [MaskCell; 9],
}

impl Mask {
    /// Builds a mask from a literal pattern. Invalid characters fail const evaluation.
    pub(crate) const fn from_bytes(pattern: &[u8; 9]) -> Self {
        let mut cells = [MaskCell::Any; 9];
        let mut i = 0;
        while i < 9 {
            cells[i] = match MaskCell::from_byte(pattern[i]) {
                Some(cell) => cell,
                None => panic!("invalid mask character"),
            };
            i += 1;
        }

        Self { cells }
    }

    /// Whether the mask can no longer be matched by any strengthening of the matrix.
    fn is_violated_by(&self, matrix: &IntersectionMatrix) -> bool {
        self.cells
            .iter()
            .zip(matrix.cells.iter())
            .any(|(cell, value)| cell.is_violated(*value))
    }
}

impl Display for Mask {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for cell in &self.cells {
            write!(f, "{}", cell.as_char())?;
        }

        Ok(())
    }
}

impl FromStr for Mask {
    type Err = TopologyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes: &[u8; 9] = s
            .as_bytes()
            .try_into()
            .map_err(|_| TopologyError::InvalidMask(s.to_string()))?;
        let mut cells = [MaskCell::Any; 9];
        for (cell, byte) in cells.iter_mut().zip(bytes) {
            *cell =
                MaskCell::from_byte(*byte).ok_or_else(|| TopologyError::InvalidMask(s.to_string()))?;
        }

        Ok(Self { cells })
    }
}

/// Sink of the relate algorithms.
///
/// The algorithms write their findings into a `RelateResult` and check [`RelateResult::interrupt`] to stop as soon
/// as the result is fully determined.
pub trait RelateResult {
    /// Current value of the cell.
    fn get(&self, a: Location, b: Location) -> Dimension;

    /// Assigns the cell unconditionally.
    fn set(&mut self, a: Location, b: Location, value: Dimension);

    /// Whether the computation can be stopped.
    fn interrupt(&self) -> bool;

    /// Assigns the cell if `value` is stronger than the current value.
    fn update(&mut self, a: Location, b: Location, value: Dimension) {
        if self.may_update(a, b, value) {
            self.set(a, b, value);
        }
    }

    /// Whether [`RelateResult::update`] with the value would change the cell.
    fn may_update(&self, a: Location, b: Location, value: Dimension) -> bool {
        value > self.get(a, b)
    }
}

/// Result that checks the matrix against a set of masks and interrupts the computation as soon as none of the
/// masks can be matched anymore.
#[derive(Debug, Clone)]
pub struct MaskMatcher {
    masks: Vec<Mask>,
    matrix: IntersectionMatrix,
    interrupt: bool,
}

impl MaskMatcher {
    /// Creates a matcher. The result is `true` if any of the masks is matched.
    pub fn new(masks: impl IntoIterator<Item = Mask>) -> Self {
        Self {
            masks: masks.into_iter().collect(),
            matrix: IntersectionMatrix::new(),
            interrupt: false,
        }
    }

    /// Whether the collected matrix matches at least one mask.
    pub fn result(&self) -> bool {
        !self.interrupt && self.masks.iter().any(|mask| self.matrix.matches(mask))
    }

    /// Matrix collected so far. If the computation was interrupted, the matrix is incomplete.
    pub fn matrix(&self) -> &IntersectionMatrix {
        &self.matrix
    }
}

impl RelateResult for MaskMatcher {
    fn get(&self, a: Location, b: Location) -> Dimension {
        self.matrix.get(a, b)
    }

    fn set(&mut self, a: Location, b: Location, value: Dimension) {
        self.matrix.set(a, b, value);
        if self
            .masks
            .iter()
            .all(|mask| mask.is_violated_by(&self.matrix))
        {
            log::trace!("Interrupting relate, no mask can be matched by {}", self.matrix);
            self.interrupt = true;
        }
    }

    fn interrupt(&self) -> bool {
        self.interrupt
    }
}

/// Adapter that swaps the roles of the two geometries of the wrapped result.
#[derive(Debug)]
pub struct Transposed<'a, R: RelateResult>(pub &'a mut R);

impl<R: RelateResult> RelateResult for Transposed<'_, R> {
    fn get(&self, a: Location, b: Location) -> Dimension {
        self.0.get(b, a)
    }

    fn set(&mut self, a: Location, b: Location, value: Dimension) {
        self.0.set(b, a, value);
    }

    fn interrupt(&self) -> bool {
        self.0.interrupt()
    }

    fn may_update(&self, a: Location, b: Location, value: Dimension) -> bool {
        self.0.may_update(b, a, value)
    }
}
