pub mod sampled_lru;

pub use sampled_lru::{EvictHandler, SampledLruCache, PROBE_WIDTH};
