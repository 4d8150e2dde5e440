//! Word square search
//!
//! Seed validation and the two-phase enumerator that places seeds and completes squares.

mod enumerator;
mod seeds;

pub use enumerator::{Enumeration, Progress, SearchStats, SquareEnumerator};
pub use seeds::{MAX_SEEDS, MIN_SEEDS, SeedSet};
