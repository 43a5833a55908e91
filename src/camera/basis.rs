use glam::{Mat4, Vec3, Vec4};

/// World up axis used to derive the camera basis.
pub const WORLD_UP: Vec3 = Vec3::Y;

/// Right-handed orthonormal camera frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Basis {
    /// Look direction (unit).
    pub direction: Vec3,
    /// `normalize(cross(WORLD_UP, direction))`.
    pub right: Vec3,
    /// `normalize(cross(direction, right))`.
    pub up: Vec3,
}

impl Basis {
    /// Derive the frame for `direction`.
    ///
    /// Returns `None` when `direction` is zero or parallel to [`WORLD_UP`],
    /// where the cross product vanishes.
    #[must_use]
    pub fn new(direction: Vec3) -> Option<Self> {
        let direction = direction.try_normalize()?;
        let right = WORLD_UP.cross(direction).try_normalize()?;
        let up = direction.cross(right).try_normalize()?;
        Some(Self {
            direction,
            right,
            up,
        })
    }

    /// Matrix whose rows are `right`, `up`, `direction`: the inverse of the
    /// basis-as-columns rotation.
    #[must_use]
    pub fn rotation(&self) -> Mat4 {
        Mat4::from_cols(
            self.right.extend(0.0),
            self.up.extend(0.0),
            self.direction.extend(0.0),
            Vec4::W,
        )
        .transpose()
    }

    /// `rotation() * translate(-position)`.
    #[must_use]
    pub fn view_matrix(&self, position: Vec3) -> Mat4 {
        self.rotation() * Mat4::from_translation(-position)
    }
}
