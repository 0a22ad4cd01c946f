use std::fmt;
use std::ops::Index;

use crate::error::{Error, Result};

use super::assignment::RoleAssignment;
use super::util::Role;
use super::{CHAIN_LENGTH, FIRST_LETTER, LAST_LETTER, NUM_CHAINS};

/// One strand of the molecule. Letters are stored upper case
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Chain {
    letters: [char; CHAIN_LENGTH],
}

impl Chain {
    /// Builds a chain from exactly `CHAIN_LENGTH` letters in `A..=P`, ignoring case
    pub fn new(text: &str) -> Result<Self> {
        let malformed = |reason: String| Error::MalformedChain {
            chain: text.to_string(),
            reason,
        };

        let count = text.chars().count();
        if count != CHAIN_LENGTH {
            return Err(malformed(format!(
                "expected {} letters, found {}",
                CHAIN_LENGTH, count
            )));
        }

        let mut letters = [FIRST_LETTER; CHAIN_LENGTH];
        for (i, c) in text.chars().enumerate() {
            let uc = c.to_ascii_uppercase();
            if !(FIRST_LETTER..=LAST_LETTER).contains(&uc) {
                return Err(malformed(format!(
                    "symbol {:?} at index {} is outside {}..={}",
                    c, i, FIRST_LETTER, LAST_LETTER
                )));
            }
            letters[i] = uc;
        }

        Ok(Self { letters })
    }

    /// Letter at `index`, failing for anything outside the chain
    pub fn letter(&self, index: usize) -> Result<char> {
        self.letters.get(index).copied().ok_or(Error::OutOfRange {
            index,
            len: CHAIN_LENGTH,
        })
    }

    pub fn len(&self) -> usize {
        CHAIN_LENGTH
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.letters.iter().copied()
    }
}

impl Index<usize> for Chain {
    type Output = char;

    fn index(&self, index: usize) -> &Self::Output {
        &self.letters[index]
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.letters.iter().try_for_each(|c| write!(f, "{}", c))
    }
}

impl fmt::Debug for Chain {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Chain({})", self)
    }
}

/// The four chains of a single dataset, in input order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainSet {
    chains: [Chain; NUM_CHAINS],
}

impl ChainSet {
    /// Validates and collects four chain strings. Anything other than four is malformed
    pub fn from_strs<S: AsRef<str>>(lines: &[S]) -> Result<Self> {
        if lines.len() != NUM_CHAINS {
            return Err(Error::IncompleteDataset { count: lines.len() });
        }
        let mut chains = [Chain {
            letters: [FIRST_LETTER; CHAIN_LENGTH],
        }; NUM_CHAINS];
        for (slot, line) in chains.iter_mut().zip(lines) {
            *slot = Chain::new(line.as_ref())?;
        }
        Ok(Self { chains })
    }

    /// The chain that `assignment` puts in `role`
    pub fn chain_for(&self, assignment: &RoleAssignment, role: Role) -> &Chain {
        &self.chains[assignment[role]]
    }
}

impl Index<usize> for ChainSet {
    type Output = Chain;

    fn index(&self, index: usize) -> &Self::Output {
        &self.chains[index]
    }
}

impl fmt::Display for ChainSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "({}, {}, {}, {})",
            self.chains[0], self.chains[1], self.chains[2], self.chains[3]
        )
    }
}
