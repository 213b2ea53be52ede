//! Graph representation and structural analysis module

pub mod connectivity;
pub mod model;

pub use connectivity::Connectivity;
pub use model::Graph;
