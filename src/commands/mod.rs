pub mod count;
pub mod gc;
pub mod generate;
pub mod growth;
pub mod hamming;
pub mod revcomp;
pub mod transcribe;
