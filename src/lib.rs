//! Search for interlocking rectangles ("molecules") built from four letter chains.
//!
//! Two chains run across, two run down, and each crosses both perpendicular chains
//! on a matching letter. The score of a set of chains is the largest vacant area such
//! a rectangle can enclose, or 0 when no arrangement exists.

pub mod config;
pub mod dataset;
pub mod error;
pub mod molecule;

pub use error::{Error, Result};
pub use molecule::solver::{solve, solve_all, Solver};
