use glam::{IVec3, IVec4, Vec3, Vec4};
use thiserror::Error;

/// Fault raised when a lane index falls outside a vector's width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LaneError {
    /// The requested lane does not exist.
    #[error("lane index {index} out of range for a {lanes}-lane vector")]
    OutOfRange {
        /// Requested lane.
        index: usize,
        /// Width of the vector that was indexed.
        lanes: usize,
    },
}

/// Fixed-width vector whose lanes can be read and rearranged by index.
///
/// `N` is the lane count; it is part of the type, so a vector never changes width.
pub trait Lanes<const N: usize>: Copy {
    type Scalar: Copy;

    const LANES: usize = N;

    fn to_lanes(self) -> [Self::Scalar; N];

    fn from_lanes(lanes: [Self::Scalar; N]) -> Self;

    /// Reads lane `index`, rejecting anything past the last lane.
    #[inline(always)]
    fn lane(self, index: usize) -> Result<Self::Scalar, LaneError> {
        self.to_lanes()
            .get(index)
            .copied()
            .ok_or(LaneError::OutOfRange { index, lanes: N })
    }

    /// Builds a new vector where lane `i` is `self[indices[i]]`.
    ///
    /// Indices may repeat or reorder lanes. An index past the last lane fails the whole
    /// permutation; nothing wraps.
    #[inline]
    fn permute(self, indices: [usize; N]) -> Result<Self, LaneError> {
        let source = self.to_lanes();
        let mut permuted = source;
        for (slot, &index) in permuted.iter_mut().zip(indices.iter()) {
            *slot = *source
                .get(index)
                .ok_or(LaneError::OutOfRange { index, lanes: N })?;
        }
        Ok(Self::from_lanes(permuted))
    }
}

macro_rules! impl_lanes {
    ($vector:ty, $scalar:ty, $n:literal) => {
        impl Lanes<$n> for $vector {
            type Scalar = $scalar;

            #[inline(always)]
            fn to_lanes(self) -> [$scalar; $n] {
                self.to_array()
            }

            #[inline(always)]
            fn from_lanes(lanes: [$scalar; $n]) -> Self {
                <$vector>::from_array(lanes)
            }
        }
    };
}

impl_lanes!(Vec4, f32, 4);
impl_lanes!(IVec4, i32, 4);
impl_lanes!(Vec3, f32, 3);
impl_lanes!(IVec3, i32, 3);

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4Swizzles;

    #[test]
    fn test_permute_fixed_input() {
        let v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        let permuted = v.permute([3, 1, 0, 0]).unwrap();
        assert_eq!(permuted, Vec4::new(4.0, 2.0, 1.0, 1.0));
        assert_eq!(permuted, v.wyxx());
    }

    #[test]
    fn test_permute_three_lanes() {
        let v = IVec3::new(7, 8, 9);
        assert_eq!(v.permute([2, 2, 0]), Ok(IVec3::new(9, 9, 7)));
    }

    #[test]
    fn test_permute_out_of_range() {
        let v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(
            v.permute([0, 1, 4, 3]),
            Err(LaneError::OutOfRange { index: 4, lanes: 4 })
        );

        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(
            v.permute([3, 0, 0]),
            Err(LaneError::OutOfRange { index: 3, lanes: 3 })
        );
    }

    #[test]
    fn test_lane() {
        let v = IVec4::new(10, 20, 30, 40);
        assert_eq!(v.lane(3), Ok(40));
        assert_eq!(
            v.lane(usize::MAX),
            Err(LaneError::OutOfRange {
                index: usize::MAX,
                lanes: 4
            })
        );
        assert_eq!(<Vec3 as Lanes<3>>::LANES, 3);
    }

    #[test]
    fn test_error_message() {
        let err = LaneError::OutOfRange { index: 5, lanes: 4 };
        assert_eq!(err.to_string(), "lane index 5 out of range for a 4-lane vector");
    }

    #[test]
    #[should_panic]
    fn test_index_is_bounds_checked() {
        let v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        let index = v.to_array().len();
        let _ = v[index];
    }
}
