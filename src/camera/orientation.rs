use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::FlycamError;

/// Below this `cos(pitch)` a direction is treated as vertical and its yaw
/// as undefined.
const POLAR_EPSILON: f32 = 1e-4;

/// Euler angles in degrees.
///
/// Roll is carried along for completeness but does not take part in the
/// direction formula. No range is enforced here; [`Camera`] clamps pitch
/// before it reaches this type.
///
/// [`Camera`]: super::core::Camera
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Orientation {
    /// Rotation about the vertical axis.
    pub yaw: f32,
    /// Tilt up/down.
    pub pitch: f32,
    /// Rotation about the forward axis (unused by [`Self::to_direction`]).
    pub roll: f32,
}

impl Orientation {
    /// Create an orientation from yaw, pitch and roll in degrees.
    #[must_use]
    pub const fn new(yaw: f32, pitch: f32, roll: f32) -> Self {
        Self { yaw, pitch, roll }
    }

    /// Recover yaw and pitch from a direction vector. Roll is always 0.
    ///
    /// Yaw is taken from `atan2(z, x)` so its sign survives the round trip.
    ///
    /// # Errors
    ///
    /// [`FlycamError::DegenerateDirection`] for zero-length or non-finite
    /// input, [`FlycamError::PolarDirection`] when the vector is (nearly)
    /// parallel to the vertical axis.
    pub fn from_direction(direction: Vec3) -> Result<Self, FlycamError> {
        let dir = direction
            .try_normalize()
            .ok_or(FlycamError::DegenerateDirection)?;

        let pitch = dir.y.clamp(-1.0, 1.0).asin();
        if pitch.cos() < POLAR_EPSILON {
            return Err(FlycamError::PolarDirection);
        }
        let yaw = dir.z.atan2(dir.x);

        Ok(Self {
            yaw: yaw.to_degrees(),
            pitch: pitch.to_degrees(),
            roll: 0.0,
        })
    }

    /// Unit look vector for the current yaw and pitch.
    #[must_use]
    pub fn to_direction(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.to_radians().sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.to_radians().sin_cos();
        Vec3::new(cos_yaw * cos_pitch, sin_pitch, sin_yaw * cos_pitch)
            .normalize()
    }
}

impl From<Orientation> for Vec3 {
    fn from(orientation: Orientation) -> Self {
        orientation.to_direction()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn assert_close(a: Vec3, b: Vec3) {
        assert!(a.abs_diff_eq(b, EPS), "{a:?} != {b:?}");
    }

    #[test]
    fn zero_angles_look_down_positive_x() {
        assert_close(Orientation::default().to_direction(), Vec3::X);
    }

    #[test]
    fn quarter_yaw_looks_down_positive_z() {
        let dir = Orientation::new(90.0, 0.0, 0.0).to_direction();
        assert_close(dir, Vec3::Z);
    }

    #[test]
    fn straight_up_for_any_yaw() {
        for yaw in [0.0, 37.0, 90.0, 181.0, 300.0] {
            let dir = Orientation::new(yaw, 90.0, 0.0).to_direction();
            assert!((dir.y - 1.0).abs() < EPS);
            assert!(dir.x.abs() < EPS);
            assert!(dir.z.abs() < EPS);
        }
    }

    #[test]
    fn direction_is_unit_length_across_the_sweep() {
        for yaw in (0..360).step_by(7) {
            for pitch in (-88..89).step_by(4) {
                let dir =
                    Orientation::new(yaw as f32, pitch as f32, 0.0)
                        .to_direction();
                assert!(
                    (dir.length() - 1.0).abs() < EPS,
                    "yaw {yaw} pitch {pitch}: {}",
                    dir.length()
                );
            }
        }
    }

    #[test]
    fn roll_does_not_change_direction() {
        let a = Orientation::new(30.0, 10.0, 0.0).to_direction();
        let b = Orientation::new(30.0, 10.0, 75.0).to_direction();
        assert_close(a, b);
    }

    #[test]
    fn from_direction_keeps_negative_yaw() {
        let original = Orientation::new(-120.0, 25.0, 0.0);
        let recovered =
            Orientation::from_direction(original.to_direction()).unwrap();
        assert!((recovered.yaw - original.yaw).abs() < 1e-3);
        assert!((recovered.pitch - original.pitch).abs() < 1e-3);
        assert_eq!(recovered.roll, 0.0);
    }

    #[test]
    fn from_direction_accepts_unnormalized_input() {
        let recovered =
            Orientation::from_direction(Vec3::new(0.0, 0.0, 5.0)).unwrap();
        assert!((recovered.yaw - 90.0).abs() < 1e-3);
        assert!(recovered.pitch.abs() < 1e-3);
    }

    #[test]
    fn from_direction_rejects_poles_and_zero() {
        assert!(matches!(
            Orientation::from_direction(Vec3::Y),
            Err(FlycamError::PolarDirection)
        ));
        assert!(matches!(
            Orientation::from_direction(Vec3::NEG_Y * 3.0),
            Err(FlycamError::PolarDirection)
        ));
        assert!(matches!(
            Orientation::from_direction(Vec3::ZERO),
            Err(FlycamError::DegenerateDirection)
        ));
        assert!(matches!(
            Orientation::from_direction(Vec3::new(f32::NAN, 0.0, 1.0)),
            Err(FlycamError::DegenerateDirection)
        ));
    }
}
