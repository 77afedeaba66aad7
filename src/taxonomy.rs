//! Error code taxonomy: registered codes, caller-defined codes, and the kind joining them.

pub mod code;
pub mod custom;
pub mod kind;

pub use code::*;
pub use custom::*;
pub use kind::*;
