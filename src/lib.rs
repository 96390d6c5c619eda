/*
    Top-level
*/

mod error;
mod interval;
mod matrix;
mod number;
mod ops;
mod zero;

pub mod round;
pub use error::*;
pub use interval::*;
pub use matrix::*;
pub use number::*;
pub use ops::*;
pub use zero::*;
