//! Concrete hash algorithm descriptors
//!
//! Fixed-output algorithms are unit structs; algorithms with a caller-chosen
//! output length validate it once in their constructor.

pub mod fixed;
pub mod variable;

pub use fixed::*;
pub use variable::*;
