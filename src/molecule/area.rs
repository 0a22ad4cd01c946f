use super::crossing::Crossing;

/// Vacant cells inside the rectangle. The chains themselves form the walls,
/// so a crossing with width `w` and height `h` encloses `(w - 1) * (h - 1)` cells
pub fn area(crossing: &Crossing) -> usize {
    crossing.width().saturating_sub(1) * crossing.height().saturating_sub(1)
}

/// Only rectangles with some vacant space count as molecules
pub fn is_admissible(area: usize) -> bool {
    area > 0
}
