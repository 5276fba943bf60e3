//! Normalized views over the attributes of a single node.
//!
//! Every accessor here is a pure read of `NodeDef::attr`: nothing is cached,
//! mutated or logged, and absence is reported as `None` rather than as an
//! error. What to do with a `None` is up to the caller.

pub mod konst;
pub mod nn;
pub mod shape;

pub use self::konst::CONST_OPS;
pub use self::shape::KernelShape;
