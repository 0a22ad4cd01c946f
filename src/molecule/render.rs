use ndarray::Array2;

use super::chain::{Chain, ChainSet};
use super::util::{Direction, Role};
use super::Molecule;

pub const EMPTY: char = '.';
pub const CONFLICT: char = '*';

/// (row, col) of the first letter of the chain in `role`, relative to the top-left corner
/// of the rectangle
fn origin(molecule: &Molecule, role: Role) -> (isize, isize) {
    let c = &molecule.crossing;
    let (width, height) = (c.width() as isize, c.height() as isize);
    match role {
        Role::Top => (0, -(c.top.start as isize)),
        Role::Bottom => (height, -(c.bottom.start as isize)),
        Role::Left => (-(c.left.start as isize), 0),
        Role::Right => (-(c.right.start as isize), width),
    }
}

/// Draws a molecule as a grid of letters, one row per line and cells separated by spaces.
/// Empty cells are `.` and cells where two chains disagree are `*`
pub fn render(chains: &ChainSet, molecule: &Molecule) -> String {
    let placed = Role::iter()
        .map(|&role| {
            (
                chains.chain_for(&molecule.assignment, role),
                origin(molecule, role),
                role.direction(),
            )
        })
        .collect::<Vec<_>>();

    let end = |chain: &Chain, (row, col): (isize, isize), dir: Direction| {
        let last = chain.len() as isize - 1;
        match dir {
            Direction::Across => (row, col + last),
            Direction::Down => (row + last, col),
        }
    };

    let min_row = placed.iter().map(|&(_, (r, _), _)| r).min().unwrap_or(0);
    let min_col = placed.iter().map(|&(_, (_, c), _)| c).min().unwrap_or(0);
    let max_row = placed.iter().map(|&(ch, o, d)| end(ch, o, d).0).max().unwrap_or(0);
    let max_col = placed.iter().map(|&(ch, o, d)| end(ch, o, d).1).max().unwrap_or(0);

    let shape = ((max_row - min_row + 1) as usize, (max_col - min_col + 1) as usize);
    let mut grid = Array2::from_elem(shape, EMPTY);

    for &(chain, (row, col), dir) in placed.iter() {
        let (mut r, mut c) = ((row - min_row) as usize, (col - min_col) as usize);
        for letter in chain.iter() {
            let cell = &mut grid[[r, c]];
            *cell = if *cell == EMPTY || *cell == letter {
                letter
            } else {
                CONFLICT
            };
            match dir {
                Direction::Across => c += 1,
                Direction::Down => r += 1,
            }
        }
    }

    grid.rows()
        .into_iter()
        .map(|row| {
            row.iter()
                .map(|c| c.to_string())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::molecule::area::area;
    use crate::molecule::assignment::RoleAssignment;
    use crate::molecule::crossing::{Crossing, Span};

    fn molecule(assignment: RoleAssignment, crossing: Crossing) -> Molecule {
        Molecule {
            assignment,
            crossing,
            area: area(&crossing),
        }
    }

    #[test]
    fn test_render_documented_example() {
        let chains =
            ChainSet::from_strs(&["AZAAAAAAAAWA", "BWBBBBBBBXBB", "CYCCCCCCCCXC", "DZDDDDDDDYDD"]).unwrap();
        let m = molecule(
            RoleAssignment::new(0, 2, 3, 1).unwrap(),
            Crossing {
                top: Span::new(1, 10),
                bottom: Span::new(1, 10),
                left: Span::new(1, 9),
                right: Span::new(1, 9),
            },
        );
        let expected = [
            ". D . . . . . . . . B .",
            "A Z A A A A A A A A W A",
            ". D . . . . . . . . B .",
            ". D . . . . . . . . B .",
            ". D . . . . . . . . B .",
            ". D . . . . . . . . B .",
            ". D . . . . . . . . B .",
            ". D . . . . . . . . B .",
            ". D . . . . . . . . B .",
            "C Y C C C C C C C C X C",
            ". D . . . . . . . . B .",
            ". D . . . . . . . . B .",
        ]
        .join("\n");
        assert_eq!(m.area, 56);
        assert_eq!(render(&chains, &m), expected);
    }

    #[test]
    fn test_render_marks_conflicts() {
        let chains =
            ChainSet::from_strs(&["AAAAAAAAAAAA", "BBBBBBBBBBBB", "CCCCCCCCCCCC", "DDDDDDDDDDDD"]).unwrap();
        let m = molecule(
            RoleAssignment::new(0, 1, 2, 3).unwrap(),
            Crossing {
                top: Span::new(1, 3),
                bottom: Span::new(1, 3),
                left: Span::new(1, 3),
                right: Span::new(1, 3),
            },
        );
        let out = render(&chains, &m);
        assert_eq!(out.matches(CONFLICT).count(), 4);
        assert_eq!(out.lines().count(), 12);
        assert!(out.lines().all(|l| l.split(' ').count() == 12));
    }
}
