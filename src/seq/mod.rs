//! Pure sequence transformations. Everything here is a single pass over
//! in-memory strings with no I/O; the command adapters own the edges.

pub mod counts;
pub mod gc;
pub mod generate;
pub mod growth;
pub mod hamming;
pub mod revcomp;
pub mod transcribe;
