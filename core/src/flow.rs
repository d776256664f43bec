use crate::Orientation;

/// Records which orientation(s) of placement have touched an occupied cell.
/// Gates pivot selection in the generator loop: a cell already `Crossed`
/// has no free perpendicular direction left to extend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowTag {
    HorizontalOnly,
    VerticalOnly,
    Crossed,
}

impl FlowTag {
    pub fn from_orientation(orientation: Orientation) -> Self {
        match orientation {
            Orientation::Horizontal => FlowTag::HorizontalOnly,
            Orientation::Vertical => FlowTag::VerticalOnly,
        }
    }

    /// Upgrade this tag given a placement crossing it in `orientation`.
    /// `HorizontalOnly`/`VerticalOnly` become `Crossed` when crossed by the
    /// opposite orientation; same-orientation re-tagging and `Crossed` are
    /// no-ops (the transition is monotone and `Crossed` is terminal).
    pub fn upgrade(self, orientation: Orientation) -> Self {
        match (self, orientation) {
            (FlowTag::HorizontalOnly, Orientation::Vertical) => FlowTag::Crossed,
            (FlowTag::VerticalOnly, Orientation::Horizontal) => FlowTag::Crossed,
            (existing, _) => existing,
        }
    }

    /// The orientation a new word crossing this pivot must take, or `None`
    /// if the cell is already `Crossed` and has no free direction.
    pub fn free_orientation(self) -> Option<Orientation> {
        match self {
            FlowTag::HorizontalOnly => Some(Orientation::Vertical),
            FlowTag::VerticalOnly => Some(Orientation::Horizontal),
            FlowTag::Crossed => None,
        }
    }
}
