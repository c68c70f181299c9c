//! Keyed stores for shared and cloned values.

pub mod pool;
pub mod prototype;

pub use pool::SharedPool;
pub use prototype::Prototypes;
