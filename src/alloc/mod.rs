//! Arena storage for linked structures.
//!
//! - `pool`: slot arena with free-list reuse, addressed by stable indices
//! - `error`: allocation failure type

pub mod error;
pub mod pool;

pub use error::AllocError;
pub use pool::Pool;
