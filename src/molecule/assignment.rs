use std::ops::Index;

use serde::Serialize;

use super::util::Role;
use super::NUM_CHAINS;

/// Which chain (by position in its `ChainSet`) takes each role. Always a bijection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct RoleAssignment {
    pub top: usize,
    pub bottom: usize,
    pub left: usize,
    pub right: usize,
}

impl RoleAssignment {
    /// Returns None unless every chain gets exactly one role
    pub fn new(top: usize, bottom: usize, left: usize, right: usize) -> Option<Self> {
        let mut seen = [false; NUM_CHAINS];
        for &i in [top, bottom, left, right].iter() {
            if i >= NUM_CHAINS || seen[i] {
                return None;
            }
            seen[i] = true;
        }
        Some(Self {
            top,
            bottom,
            left,
            right,
        })
    }

    /// The same chains with the across and down pairs exchanged
    pub fn transpose(&self) -> Self {
        Self {
            top: self.left,
            bottom: self.right,
            left: self.top,
            right: self.bottom,
        }
    }
}

impl Index<Role> for RoleAssignment {
    type Output = usize;

    fn index(&self, role: Role) -> &Self::Output {
        match role {
            Role::Top => &self.top,
            Role::Bottom => &self.bottom,
            Role::Left => &self.left,
            Role::Right => &self.right,
        }
    }
}

/// Enumerates every way to hand the four roles to the four chains.
///
/// The across pair is picked first as an ordered (top, bottom) pair, and the two
/// remaining chains fill (left, right) in both orders, giving 4 * 3 * 2 = 24 assignments.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoleAssigner;

impl RoleAssigner {
    pub fn assignments(&self) -> impl Iterator<Item = RoleAssignment> + Clone {
        (0..NUM_CHAINS).flat_map(|top| {
            (0..NUM_CHAINS)
                .filter(move |&bottom| bottom != top)
                .flat_map(move |bottom| {
                    let mut rest = (0..NUM_CHAINS).filter(move |&i| i != top && i != bottom);
                    // Exactly two chains are left over
                    let first = rest.next().unwrap_or_default();
                    let second = rest.next().unwrap_or_default();
                    [(first, second), (second, first)]
                        .into_iter()
                        .map(move |(left, right)| RoleAssignment {
                            top,
                            bottom,
                            left,
                            right,
                        })
                })
        })
    }
}
