use rayon::prelude::*;
use tracing::{debug, trace};

use super::area::{area, is_admissible};
use super::assignment::{RoleAssigner, RoleAssignment};
use super::chain::ChainSet;
use super::constraint::ConstraintChecker;
use super::crossing::CrossingEnumerator;
use super::Molecule;

/// Exhaustive search over every arrangement of one chain set
#[derive(Debug, Clone, Copy)]
pub struct Solver<'a> {
    chains: &'a ChainSet,
    assigner: RoleAssigner,
    enumerator: CrossingEnumerator,
    /// Fan the role assignments out over the rayon pool
    parallel: bool,
}

impl<'a> Solver<'a> {
    pub fn new(chains: &'a ChainSet) -> Self {
        Self {
            chains,
            assigner: RoleAssigner,
            enumerator: CrossingEnumerator,
            parallel: true,
        }
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Valid molecules for one assignment, including the ones that enclose nothing
    fn arrangements(&self, assignment: RoleAssignment) -> impl Iterator<Item = Molecule> + 'a {
        let checker = ConstraintChecker::new(self.chains);
        self.enumerator
            .crossings(&assignment)
            .filter(move |crossing| checker.is_valid(&assignment, crossing))
            .map(move |crossing| Molecule {
                assignment,
                crossing,
                area: area(&crossing),
            })
    }

    /// Every molecule with a positive area, in enumeration order
    pub fn molecules(&self) -> impl Iterator<Item = Molecule> + 'a {
        let solver = *self;
        self.assigner
            .assignments()
            .flat_map(move |assignment| solver.arrangements(assignment))
            .filter(|m| is_admissible(m.area))
    }

    /// Largest admissible molecule for one assignment. Ties keep the first one found
    fn best_for(&self, assignment: RoleAssignment) -> Option<Molecule> {
        let best = self
            .arrangements(assignment)
            .filter(|m| is_admissible(m.area))
            .fold(None, keep_larger);
        trace!(?assignment, area = best.map(|m| m.area), "searched assignment");
        best
    }

    /// A molecule with the largest area, if any arrangement is admissible.
    /// The result does not depend on whether the search ran in parallel
    pub fn best(&self) -> Option<Molecule> {
        let assignments = self.assigner.assignments().collect::<Vec<_>>();
        let per_assignment: Vec<Option<Molecule>> = if self.parallel {
            assignments
                .into_par_iter()
                .map(|assignment| self.best_for(assignment))
                .collect()
        } else {
            assignments
                .into_iter()
                .map(|assignment| self.best_for(assignment))
                .collect()
        };
        per_assignment.into_iter().flatten().fold(None, keep_larger)
    }

    /// Maximum enclosed area, or 0 when the chains cannot form a molecule
    pub fn max_area(&self) -> usize {
        self.best().map(|m| m.area).unwrap_or(0)
    }
}

fn keep_larger(best: Option<Molecule>, candidate: Molecule) -> Option<Molecule> {
    match best {
        Some(b) if b.area >= candidate.area => Some(b),
        _ => Some(candidate),
    }
}

/// Maximum enclosed area for a chain set, 0 if no molecule can be built
pub fn solve(chains: &ChainSet) -> usize {
    Solver::new(chains).max_area()
}

/// Solves independent datasets, returning results in input order
pub fn solve_all(sets: &[ChainSet], parallel: bool) -> Vec<usize> {
    let solve_one = |(i, chains): (usize, &ChainSet)| {
        let result = Solver::new(chains).with_parallel(parallel).max_area();
        debug!(dataset = i, %chains, result, "solved dataset");
        result
    };
    if parallel {
        sets.par_iter().enumerate().map(solve_one).collect()
    } else {
        sets.iter().enumerate().map(solve_one).collect()
    }
}
