pub mod probe_rng;

pub use probe_rng::{OsSeededRng, SampleRng};
