pub mod demo;
pub mod utilities;

pub use demo::VectorDemo;
pub use utilities::{reinterpret_bits, LaneError, Lanes, Reinterpret};

/// Provides a zero-cost abstraction for out parameters similar to C#'s `out` keyword.
///
/// # Examples
/// ```
/// use glam::Vec4;
/// use lane_vectors::{out, utilities::matrix::Matrix};
///
/// // Instead of:
/// let v = Vec4::new(1.0, 2.0, 3.0, 4.0);
/// let mut result = Vec4::ZERO;
/// Matrix::transform(&v, &Matrix::identity(), &mut result);
///
/// // You can write:
/// let mul = out!(Matrix::transform(&v, &Matrix::identity()));
/// assert_eq!(mul, result);
/// ```
/// The out parameter must be the last argument and must be fully written by the callee.
#[macro_export]
macro_rules! out {
    ($e:ident :: $method:ident ( $($arg:expr),* )) => {{
        let mut __result = std::mem::MaybeUninit::uninit();
        $e::$method($($arg,)* unsafe { &mut *(__result.as_mut_ptr()) });
        unsafe { __result.assume_init() }
    }};
}
