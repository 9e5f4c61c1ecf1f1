use crate::out;
use crate::utilities::matrix::Matrix;
use crate::utilities::{quaternion_ex, reinterpret_bits, LaneError, Lanes, Reinterpret};
use glam::{IVec4, Vec4};
use log::debug;
use std::fmt;

/// Input every demo step derives from.
pub const BASE: Vec4 = Vec4::new(1.0, 2.0, 3.0, 4.0);

/// Lane order `(w, y, x, x)`.
pub const SWIZZLE: [usize; 4] = [3, 1, 0, 0];

pub const ADDEND: Vec4 = Vec4::new(5.0, 6.0, 7.0, 8.0);

/// Results of each lane-vector step applied to [`BASE`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct VectorDemo {
    pub base: Vec4,
    pub swizzled: Vec4,
    pub elem_ops: Vec4,
    pub mul: Vec4,
    pub orientation: Vec4,
    pub casted: IVec4,
    pub implicit_casted: IVec4,
}

impl VectorDemo {
    pub fn run() -> Result<Self, LaneError> {
        let v = BASE;
        debug!("base: {}", v);

        let swizzled = v.permute(SWIZZLE)?;
        debug!("swizzled {:?}: {}", SWIZZLE, swizzled);

        let elem_ops = v + ADDEND;
        debug!("elementwise sum: {}", elem_ops);

        let m = Matrix::identity();
        let mul = out!(Matrix::transform(&v, &m));
        debug!("identity * base: {}", mul);

        let orientation = quaternion_ex::IDENTITY;
        debug!("orientation: {}", orientation);

        let casted = reinterpret_bits::<Vec4, IVec4>(v);
        let implicit_casted: IVec4 = v.reinterpret();
        debug_assert_eq!(casted, implicit_casted);
        debug!("bit-cast: {}", casted);

        Ok(Self {
            base: v,
            swizzled,
            elem_ops,
            mul,
            orientation,
            casted,
            implicit_casted,
        })
    }

    /// The single output line, without the trailing newline.
    pub fn summary_line(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for VectorDemo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.6} {:.6} {}",
            self.elem_ops.x, self.mul.x, self.casted.x
        )
    }
}
