//! Searching trace generators.
//!
//! Linear and binary search trace a scan over an array snapshot; hash
//! search first replays the construction of the table (one step per
//! insertion or probe) and then traces the lookup. All generators are
//! read-only over their declared input, apart from internally constructing
//! the hash table and binary search's own sorted working copy.

pub mod binary;
pub mod hash;
pub mod linear;
