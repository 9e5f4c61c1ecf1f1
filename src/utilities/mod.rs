mod lanes;
pub use self::lanes::*;

mod reinterpret;
pub use self::reinterpret::*;

pub mod matrix;
pub mod quaternion_ex;
