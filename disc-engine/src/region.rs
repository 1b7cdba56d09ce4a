use crate::Vector2;

/// Bounds of the simulation, spanning `[0, width] x [0, height]`.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Region {
    pub width: f64,
    pub height: f64,
}

impl Region {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Area with negative sides counted as empty
    pub fn area(&self) -> f64 {
        self.width.max(0.) * self.height.max(0.)
    }
}

/// Immovable disc following the pointer, pushing bodies out of its way.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerRepeller {
    pub position: Vector2,
    pub radius: f64,
}

impl PointerRepeller {
    pub fn new(position: Vector2, radius: f64) -> Self {
        Self { position, radius }
    }

    /// Just outside the top-left corner, where the repeller waits until the
    /// pointer has moved for the first time.
    pub fn parked(radius: f64) -> Self {
        Self::new(Vector2::splat(-radius), radius)
    }
}
