pub use crate::ds::{OsSeededRng, SampleRng};
pub use crate::error::{ConfigError, InvariantError};
pub use crate::policy::sampled_lru::{EvictHandler, SampledLruCache, PROBE_WIDTH};
pub use crate::traits::{CoreCache, MutableCache, ReadOnlyCache, SampledLruCacheTrait};
