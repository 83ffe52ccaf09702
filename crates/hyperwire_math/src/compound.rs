//! Compound rotation driven by a single master angle
//!
//! A [`CompoundRotation`] is an ordered list of [`PlaneSpin`]s. Each spin turns
//! one plane by `master * rate / denominator`, and the spins are applied in
//! list order. Rates are integers over a shared denominator so the period of
//! the whole motion is exact: the pose at `θ` and `θ + period()` is the same.

use serde::{Serialize, Deserialize};
use std::f64::consts::TAU;
use std::fmt;
use crate::{RotationPlane, Vec4};

/// One plane of a compound rotation and its rate numerator
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaneSpin {
    pub plane: RotationPlane,
    pub rate: i32,
}

impl PlaneSpin {
    pub const fn new(plane: RotationPlane, rate: i32) -> Self {
        Self { plane, rate }
    }
}

/// Spins of the default motion: XW, YZ, XY, ZW at 1.0, 0.7, 0.5 and 0.3
/// times the master angle
pub const DEFAULT_SPINS: [PlaneSpin; 4] = [
    PlaneSpin::new(RotationPlane::XW, 10),
    PlaneSpin::new(RotationPlane::YZ, 7),
    PlaneSpin::new(RotationPlane::XY, 5),
    PlaneSpin::new(RotationPlane::ZW, 3),
];

/// Denominator shared by [`DEFAULT_SPINS`]
pub const DEFAULT_RATE_DENOMINATOR: u32 = 10;

/// Why a set of spins cannot drive the tesseract
#[derive(Debug, Clone, PartialEq)]
pub enum RotationError {
    /// Fewer than two planes were given
    TooFewPlanes(usize),
    /// Rate denominator was zero
    ZeroDenominator,
    /// A plane was given a zero rate and would never move
    ZeroRate(RotationPlane),
    /// Two planes share a rate, collapsing into one combined motion
    DuplicateRate {
        rate: i32,
        first: RotationPlane,
        second: RotationPlane,
    },
    /// No plane touches W, so the motion is an ordinary 3D rotation
    NoFourthDimension,
    /// Every pair of planes shares an axis
    NoIndependentPair,
}

impl fmt::Display for RotationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RotationError::TooFewPlanes(n) => {
                write!(f, "compound rotation needs at least 2 planes, got {}", n)
            }
            RotationError::ZeroDenominator => write!(f, "rate denominator must be non-zero"),
            RotationError::ZeroRate(plane) => write!(f, "plane {} has a zero rate", plane),
            RotationError::DuplicateRate { rate, first, second } => write!(
                f,
                "planes {} and {} share rate {}; rates must differ per plane",
                first, second, rate
            ),
            RotationError::NoFourthDimension => {
                write!(f, "no rotation plane involves W (XW, YW or ZW)")
            }
            RotationError::NoIndependentPair => {
                write!(f, "no two rotation planes rotate disjoint coordinate pairs")
            }
        }
    }
}

impl std::error::Error for RotationError {}

/// Ordered plane rotations sharing one master angle
#[derive(Clone, Debug, PartialEq)]
pub struct CompoundRotation {
    denominator: u32,
    spins: Vec<PlaneSpin>,
    /// Smallest positive master-angle period, in radians
    period: f64,
}

impl Default for CompoundRotation {
    fn default() -> Self {
        Self::build(DEFAULT_RATE_DENOMINATOR, DEFAULT_SPINS.to_vec())
    }
}

impl CompoundRotation {
    /// Create a compound rotation, rejecting degenerate motions
    ///
    /// # Arguments
    /// * `denominator` - Shared denominator of every spin rate
    /// * `spins` - Planes in application order with their rate numerators
    pub fn new(denominator: u32, spins: Vec<PlaneSpin>) -> Result<Self, RotationError> {
        if spins.len() < 2 {
            return Err(RotationError::TooFewPlanes(spins.len()));
        }
        if denominator == 0 {
            return Err(RotationError::ZeroDenominator);
        }
        for (i, spin) in spins.iter().enumerate() {
            if spin.rate == 0 {
                return Err(RotationError::ZeroRate(spin.plane));
            }
            if let Some(other) = spins[..i].iter().find(|s| s.rate == spin.rate) {
                return Err(RotationError::DuplicateRate {
                    rate: spin.rate,
                    first: other.plane,
                    second: spin.plane,
                });
            }
        }
        if !spins.iter().any(|s| s.plane.involves_w()) {
            return Err(RotationError::NoFourthDimension);
        }
        let has_independent_pair = spins.iter().enumerate().any(|(i, a)| {
            spins[i + 1..].iter().any(|b| a.plane.is_disjoint(b.plane))
        });
        if !has_independent_pair {
            return Err(RotationError::NoIndependentPair);
        }

        Ok(Self::build(denominator, spins))
    }

    fn build(denominator: u32, spins: Vec<PlaneSpin>) -> Self {
        // θ·n/d is a whole number of turns for every spin once θ/2π is a
        // multiple of d/gcd(d, n); the period is the lcm of those.
        let d = u64::from(denominator);
        let turns = spins.iter().fold(1u64, |acc, spin| {
            let n = u64::from(spin.rate.unsigned_abs());
            lcm(acc, d / gcd(d, n))
        });

        Self {
            denominator,
            spins,
            period: TAU * turns as f64,
        }
    }

    /// The spins in application order
    pub fn spins(&self) -> &[PlaneSpin] {
        &self.spins
    }

    /// Shared rate denominator
    pub fn denominator(&self) -> u32 {
        self.denominator
    }

    /// Angle multiplier of a spin (`rate / denominator`)
    pub fn multiplier(&self, spin: &PlaneSpin) -> f64 {
        f64::from(spin.rate) / f64::from(self.denominator)
    }

    /// Smallest master-angle period after which the pose repeats
    pub fn period(&self) -> f64 {
        self.period
    }

    /// Reduce an unbounded master angle into `[0, period)`
    ///
    /// Reducing by the full period rather than by 2π keeps every plane angle
    /// continuous across the wrap.
    #[inline]
    pub fn reduce(&self, angle: f64) -> f64 {
        wrap(angle, self.period)
    }

    /// The angle each plane is turned by for a master angle
    pub fn plane_angles(&self, angle: f64) -> Vec<(RotationPlane, f64)> {
        let master = self.reduce(angle);
        self.spins
            .iter()
            .map(|spin| (spin.plane, self.spin_angle(spin, master)))
            .collect()
    }

    #[inline]
    fn spin_angle(&self, spin: &PlaneSpin, reduced_master: f64) -> f64 {
        wrap(reduced_master * self.multiplier(spin), TAU)
    }

    /// Rotate a 4D point by the composed rotation at `angle`
    pub fn rotate(&self, v: Vec4, angle: f64) -> Vec4 {
        let master = self.reduce(angle);
        self.spins
            .iter()
            .fold(v, |p, spin| spin.plane.rotate(p, self.spin_angle(spin, master)))
    }

    /// Composed 4x4 rotation matrix at `angle`
    ///
    /// Each inner array is the image of one basis vector (column-major).
    pub fn to_matrix(&self, angle: f64) -> [[f64; 4]; 4] {
        [
            self.rotate(Vec4::X, angle).to_array(),
            self.rotate(Vec4::Y, angle).to_array(),
            self.rotate(Vec4::Z, angle).to_array(),
            self.rotate(Vec4::W, angle).to_array(),
        ]
    }
}

/// `value mod modulus` in `[0, modulus)`
///
/// `rem_euclid` rounds tiny negative values up to `modulus` itself.
#[inline]
fn wrap(value: f64, modulus: f64) -> f64 {
    let r = value.rem_euclid(modulus);
    if r >= modulus {
        0.0
    } else {
        r
    }
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

fn lcm(a: u64, b: u64) -> u64 {
    a / gcd(a, b) * b
}
