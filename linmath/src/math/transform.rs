use crate::math::*;
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransformMode {
    /// The matrix follows the fields on every `update()`.
    #[default]
    Dynamic,

    /// The matrix is frozen at the value baked when entering this mode.
    Static,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Inputs {
    position: Vec3,
    rotation: Quat,
    scale: Vec3,
}

/// Position, rotation and scale together with the model matrix built from them.
///
/// The matrix is `scale * rotation * translate` in the row-vector convention,
/// i.e. a point is scaled first, then rotated, then moved. It is only rebuilt
/// by `update()`, and only when one of the fields changed since the last time.
#[derive(Debug, Clone)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
    matrix: Mat44,
    mode: TransformMode,
    baked: Option<Inputs>,
}

impl Transform {
    pub fn new(position: Vec3, rotation: Quat, scale: Vec3) -> Transform {
        Transform { position, rotation, scale, matrix: Mat44::IDENTITY, mode: TransformMode::Dynamic, baked: None }
    }

    /// The matrix as of the last rebuild. Identity until the first `update()`.
    pub fn matrix(&self) -> &Mat44 {
        &self.matrix
    }

    pub fn mode(&self) -> TransformMode {
        self.mode
    }

    pub fn is_static(&self) -> bool {
        self.mode == TransformMode::Static
    }

    /// Rebuilds the matrix if the transform is dynamic and its fields changed.
    /// Returns whether the matrix was rebuilt.
    pub fn update(&mut self) -> bool {
        if self.mode == TransformMode::Static {
            return false;
        }
        if self.baked == Some(self.inputs()) {
            return false;
        }
        self.rebuild();
        true
    }

    /// Switching to static bakes the current fields right away; switching back
    /// to dynamic lets the next `update()` pick up whatever changed meanwhile.
    pub fn set_static(&mut self, is_static: bool) {
        let mode = if is_static { TransformMode::Static } else { TransformMode::Dynamic };
        if mode == self.mode {
            return;
        }
        trace!(from = ?self.mode, to = ?mode, "transform mode change");
        if mode == TransformMode::Static {
            self.rebuild();
        }
        self.mode = mode;
    }

    fn inputs(&self) -> Inputs {
        Inputs { position: self.position, rotation: self.rotation, scale: self.scale }
    }

    fn rebuild(&mut self) {
        let inputs = self.inputs();
        self.matrix = Mat44::scale(inputs.scale) * inputs.rotation.matrix() * Mat44::translate(inputs.position);
        self.baked = Some(inputs);
        trace!(position = ?inputs.position, scale = ?inputs.scale, "transform matrix rebuilt");
    }
}

impl Default for Transform {
    fn default() -> Transform {
        Transform::new(Vec3::ZERO, Quat::IDENTITY, Vec3::ONE)
    }
}
