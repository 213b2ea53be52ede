//! Pivot selection and minimum s-t cut module

pub mod pivot;
pub mod solver;

pub use solver::CutResult;
