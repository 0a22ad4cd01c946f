use super::assignment::RoleAssignment;
use super::chain::ChainSet;
use super::crossing::Crossing;
use super::util::Corner;

/// Checks whether a crossing is legal for a chain set under some role assignment
#[derive(Debug, Clone, Copy)]
pub struct ConstraintChecker<'a> {
    pub chains: &'a ChainSet,
}

impl<'a> ConstraintChecker<'a> {
    pub fn new(chains: &'a ChainSet) -> Self {
        Self { chains }
    }

    /// Letters held by the (across, down) chains where they meet at `corner`
    pub fn corner_letters(
        &self,
        assignment: &RoleAssignment,
        crossing: &Crossing,
        corner: Corner,
    ) -> (char, char) {
        let (across, down) = corner.roles();
        let across_span = crossing[across];
        let down_span = crossing[down];
        let across_idx = if corner.is_left() {
            across_span.start
        } else {
            across_span.end
        };
        let down_idx = if corner.is_top() {
            down_span.start
        } else {
            down_span.end
        };
        (
            self.chains.chain_for(assignment, across)[across_idx],
            self.chains.chain_for(assignment, down)[down_idx],
        )
    }

    /// A crossing is valid when it is geometrically consistent and both chains hold
    /// the same letter at each of the four corners
    pub fn is_valid(&self, assignment: &RoleAssignment, crossing: &Crossing) -> bool {
        crossing.is_consistent()
            && Corner::iter().all(|&corner| {
                let (l1, l2) = self.corner_letters(assignment, crossing, corner);
                l1 == l2
            })
    }
}
