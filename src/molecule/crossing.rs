use std::ops::Index;

use serde::Serialize;

use super::assignment::RoleAssignment;
use super::util::Role;
use super::{CHAIN_LENGTH, MIN_TAIL};

/// First index a crossing may use
pub const INTERIOR_START: usize = MIN_TAIL;
/// Last index a crossing may use
pub const INTERIOR_END: usize = CHAIN_LENGTH - 1 - MIN_TAIL;

/// The two indices on one chain where the perpendicular chains cross it.
/// `start` is the crossing nearer the chain's first letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Distance between the two crossings
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Both crossings leave a tail on the chain and come in reading order
    pub fn is_interior(&self) -> bool {
        INTERIOR_START <= self.start && self.start < self.end && self.end <= INTERIOR_END
    }
}

/// Crossing positions on all four chains of an arrangement.
///
/// With the usual letters for the indices this is
/// `top = (a, b)`, `bottom = (c, d)`, `left = (e, f)`, `right = (g, h)`,
/// where the left chain crosses top and bottom at `a` and `c`, the right chain at `b` and `d`,
/// the top chain crosses left and right at `e` and `g`, and the bottom chain at `f` and `h`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Crossing {
    pub top: Span,
    pub bottom: Span,
    pub left: Span,
    pub right: Span,
}

impl Crossing {
    pub fn width(&self) -> usize {
        self.top.len()
    }

    pub fn height(&self) -> usize {
        self.left.len()
    }

    /// Every span is interior, and opposite sides of the rectangle have equal length
    pub fn is_consistent(&self) -> bool {
        Role::iter().all(|&r| self[r].is_interior())
            && self.top.len() == self.bottom.len()
            && self.left.len() == self.right.len()
    }

    /// The crossing of the mirrored rectangle, see `RoleAssignment::transpose`
    pub fn transpose(&self) -> Self {
        Self {
            top: self.left,
            bottom: self.right,
            left: self.top,
            right: self.bottom,
        }
    }
}

impl Index<Role> for Crossing {
    type Output = Span;

    fn index(&self, role: Role) -> &Self::Output {
        match role {
            Role::Top => &self.top,
            Role::Bottom => &self.bottom,
            Role::Left => &self.left,
            Role::Right => &self.right,
        }
    }
}

/// All interior spans of exactly `len`
fn spans_of_len(len: usize) -> impl Iterator<Item = Span> + Clone {
    (INTERIOR_START..=INTERIOR_END.saturating_sub(len)).map(move |start| Span::new(start, start + len))
}

/// Pairs of interior spans with equal length, one for each side of the rectangle
fn parallel_spans() -> impl Iterator<Item = (Span, Span)> + Clone {
    (1..=INTERIOR_END - INTERIOR_START).flat_map(|len| {
        spans_of_len(len).flat_map(move |near| spans_of_len(len).map(move |far| (near, far)))
    })
}

/// Enumerates the crossings worth checking for an arrangement.
///
/// Indices never touch the first or last letter of a chain, and spans on opposite
/// sides always have the same length, so a rectangle with mismatched sides is never produced.
#[derive(Debug, Clone, Copy, Default)]
pub struct CrossingEnumerator;

impl CrossingEnumerator {
    /// The candidate positions do not depend on the letters, only on the chain shape,
    /// so every assignment sees the same sequence
    pub fn crossings(&self, _assignment: &RoleAssignment) -> impl Iterator<Item = Crossing> + Clone {
        parallel_spans().flat_map(|(top, bottom)| {
            parallel_spans().map(move |(left, right)| Crossing {
                top,
                bottom,
                left,
                right,
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::molecule::assignment::RoleAssigner;

    fn any_assignment() -> RoleAssignment {
        RoleAssigner.assignments().next().unwrap()
    }

    #[test]
    fn test_interior_bounds() {
        assert_eq!(INTERIOR_START, 1);
        assert_eq!(INTERIOR_END, 10);
        assert!(Span::new(1, 10).is_interior());
        assert!(!Span::new(0, 5).is_interior());
        assert!(!Span::new(5, 11).is_interior());
        assert!(!Span::new(5, 5).is_interior());
        assert!(!Span::new(6, 5).is_interior());
    }

    #[test]
    fn test_parallel_span_count() {
        // sum over len of (10 - len)^2 for len in 1..=9
        assert_eq!(parallel_spans().count(), 285);
    }

    #[test]
    fn test_crossings_are_consistent() {
        let mut count = 0;
        for c in CrossingEnumerator.crossings(&any_assignment()) {
            assert!(c.is_consistent(), "{:?}", c);
            count += 1;
        }
        assert_eq!(count, 285 * 285);
    }

    #[test]
    fn test_no_crossing_on_chain_ends() {
        let touches_end = CrossingEnumerator.crossings(&any_assignment()).any(|c| {
            Role::iter().any(|&r| c[r].start == 0 || c[r].end == CHAIN_LENGTH - 1)
        });
        assert!(!touches_end);
    }

    #[test]
    fn test_transpose_swaps_width_and_height() {
        let c = Crossing {
            top: Span::new(1, 4),
            bottom: Span::new(3, 6),
            left: Span::new(2, 9),
            right: Span::new(1, 8),
        };
        assert!(c.is_consistent());
        let t = c.transpose();
        assert_eq!(t.width(), c.height());
        assert_eq!(t.height(), c.width());
        assert_eq!(t.transpose(), c);
    }
}
