use glam::{Quat, Vec4};

/// Identity orientation laid out as `(x, y, z, w)` lanes.
pub const IDENTITY: Vec4 = Vec4::new(0.0, 0.0, 0.0, 1.0);

/// Views a quaternion as its four lanes.
#[inline(always)]
pub fn to_lanes(q: Quat) -> Vec4 {
    Vec4::from(q)
}

/// Interprets four lanes as a quaternion. No normalization is applied.
#[inline(always)]
pub fn from_lanes(lanes: Vec4) -> Quat {
    Quat::from_vec4(lanes)
}

#[inline(always)]
pub fn is_identity(lanes: Vec4) -> bool {
    lanes == IDENTITY
}
