// The parry crate matching the active precision feature
#[cfg(feature = "f64")]
pub use parry3d_f64 as parry3d;

#[cfg(feature = "f32")]
pub use parry3d;

/// Scalar type of every coordinate, plane offset and volume in the crate.
#[cfg(feature = "f32")]
pub type Real = f32;
#[cfg(feature = "f64")]
pub type Real = f64;

use core::str::FromStr;
use std::sync::OnceLock;

/// Distance within which a vertex counts as lying on a clipping plane. Every
/// front/back decision a clip or subtraction makes goes through it, so it is
/// fixed once the first classification has happened.
static TOLERANCE_CELL: OnceLock<Real> = OnceLock::new();

const fn default_tolerance() -> Real {
    #[cfg(feature = "f32")]
    {
        1e-4
    }
    #[cfg(feature = "f64")]
    {
        1e-6
    }
}

/// Absolute tolerance for classifying brush vertices against planes.
///
/// On first use it takes `BRUSHCSG_TOLERANCE` as seen when this crate was
/// compiled (`BRUSHCSG_TOLERANCE=1e-5 cargo build`), or `1e-6` for `f64` and
/// `1e-4` for `f32` when that is unset or does not parse.
pub fn tolerance() -> Real {
    *TOLERANCE_CELL.get_or_init(|| {
        option_env!("BRUSHCSG_TOLERANCE")
            .and_then(|raw| Real::from_str(raw).ok())
            .map_or_else(default_tolerance, |value| value.max(Real::EPSILON))
    })
}

/// Fix the classification tolerance at runtime. Only takes effect when called
/// before the first clip, subtraction or [`tolerance`] call; later calls are
/// ignored.
pub fn set_tolerance(value: Real) {
    let _ = TOLERANCE_CELL.set(value.max(Real::EPSILON));
}

/// Angular tolerance used when deciding whether a plane normal is axis aligned
/// or lies in one of the axis planes.
#[cfg(feature = "f32")]
pub const ANGLE_EPSILON: Real = 1e-5;
/// Angular tolerance used when deciding whether a plane normal is axis aligned
/// or lies in one of the axis planes.
#[cfg(feature = "f64")]
pub const ANGLE_EPSILON: Real = 1e-8;

/// Default half extent of the world cube that brushes built from half-spaces
/// are carved out of (id Tech maps live inside ±4096 units, 8192 for some engines).
pub const WORLD_SIZE: Real = 16384.0;
