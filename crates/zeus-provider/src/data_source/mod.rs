//! Read-only lookups by ID. Unlike resource reads, a missing object is a
//! hard failure here — data sources never "remove from state".

pub mod assign;
pub mod pool;
