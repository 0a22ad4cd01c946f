// Four chains of 12 letters, A through P
pub mod area;
pub mod assignment;
pub mod chain;
pub mod constraint;
pub mod crossing;
pub mod render;
pub mod solver;
pub mod util;

/// Number of letters in every chain
pub const CHAIN_LENGTH: usize = 12;
/// Number of chains in one molecule
pub const NUM_CHAINS: usize = 4;
/// Letters a chain must keep beyond the rectangle on either end
pub const MIN_TAIL: usize = 1;

pub const FIRST_LETTER: char = 'A';
pub const LAST_LETTER: char = 'P';

use serde::Serialize;

use self::assignment::RoleAssignment;
use self::crossing::Crossing;

/// A validated arrangement of a chain set: which chain plays which role and where they cross
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Molecule {
    pub assignment: RoleAssignment,
    pub crossing: Crossing,
    pub area: usize,
}
