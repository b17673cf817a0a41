//! Redis storage implementation
//!
//! ## Module Structure
//!
//! - `pool` - Connection pool, backpressure and retry
//! - `sentinel` - Master discovery through Redis sentinel
//! - `sets` - Set and key operations used by the permission cache
//! - `tests` - Module tests

mod pool;
mod sentinel;
mod sets;

pub use pool::RedisPool;
