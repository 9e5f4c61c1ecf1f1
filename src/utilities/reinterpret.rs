use glam::{IVec3, IVec4, Vec3, Vec4};

/// Reads a vector's bits back as another vector type of the same total width.
///
/// No lane is converted numerically: `1.0f32` becomes `0x3F800000`, not `1`. Only pairs of
/// equal width implement this trait, so narrowing or widening does not compile:
///
/// ```compile_fail
/// use glam::{IVec4, Vec3};
/// use lane_vectors::Reinterpret;
///
/// let up_casted: IVec4 = Vec3::ONE.reinterpret();
/// ```
pub trait Reinterpret<T>: Sized {
    fn reinterpret(self) -> T;
}

macro_rules! impl_reinterpret {
    ($a:ty, $b:ty) => {
        const _: () = assert!(std::mem::size_of::<$a>() == std::mem::size_of::<$b>());

        impl Reinterpret<$b> for $a {
            #[inline(always)]
            fn reinterpret(self) -> $b {
                bytemuck::cast(self)
            }
        }

        impl Reinterpret<$a> for $b {
            #[inline(always)]
            fn reinterpret(self) -> $a {
                bytemuck::cast(self)
            }
        }
    };
}

// 128 bits.
impl_reinterpret!(Vec4, IVec4);
// 96 bits.
impl_reinterpret!(Vec3, IVec3);

/// Explicit spelling of [`Reinterpret::reinterpret`] with both types named at the call site.
#[inline(always)]
pub fn reinterpret_bits<T: Reinterpret<U>, U>(value: T) -> U {
    value.reinterpret()
}
