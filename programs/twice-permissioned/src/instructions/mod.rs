#![allow(ambiguous_glob_reexports)]

pub mod lock;
pub mod preflight;
pub mod unlock;

pub use lock::*;
pub use preflight::*;
pub use unlock::*;
