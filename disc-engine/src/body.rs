use crate::{ separation_direction, PointerRepeller, Region, Vector2 };

/// Identity of a body, unique for the lifetime of its world
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BodyId(pub(crate) u64);

/// Render attribute of a body. The engine only stores and forwards it.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

/// Everything needed to bring a new body into a world
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyTemplate {
    pub position: Vector2,
    pub radius: f64,
    pub color: Rgb,
}

/// A rigid disc moved by position extrapolation.
///
/// There is no velocity field: the displacement between `previous_position`
/// and `current_position` is the velocity, and anything that rewrites one of
/// the two (collisions, walls) changes the motion of the next steps.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub(crate) id: BodyId,
    pub previous_position: Vector2,
    pub current_position: Vector2,
    pub next_position: Vector2,
    pub radius: f64,
    pub color: Rgb,
}

impl Body {
    /// Creates a body at rest on the template's position
    pub fn new(id: BodyId, template: BodyTemplate) -> Self {
        Self {
            id,
            previous_position: template.position,
            current_position: template.position,
            next_position: template.position,
            radius: template.radius,
            color: template.color,
        }
    }

    pub fn id(&self) -> BodyId {
        self.id
    }

    pub fn left_edge(&self) -> f64 {
        self.current_position.x - self.radius
    }

    pub fn right_edge(&self) -> f64 {
        self.current_position.x + self.radius
    }

    /// Displacement the body will repeat on its next integration
    pub fn velocity(&self) -> Vector2 {
        self.current_position - self.previous_position
    }

    /// Advances the body by one step of constant-velocity extrapolation.
    ///
    /// Must run once per step, after every collision correction of that step.
    pub fn integrate(&mut self) {
        self.next_position = 2. * self.current_position - self.previous_position;
        self.previous_position = self.current_position;
        self.current_position = self.next_position;
    }

    /// Pushes `self` and `other` apart along the line between their centers
    /// until they just touch, each one taking half of the correction.
    ///
    /// Returns whether the two bodies were overlapping.
    pub fn resolve_overlap(&mut self, other: &mut Body) -> bool {
        let dist = self.current_position.distance(other.current_position);
        let reach = self.radius + other.radius;
        if dist >= reach {
            return false;
        }

        let correction = (reach - dist) / 2.;
        let dir = separation_direction(self.current_position, other.current_position);
        other.current_position += dir * correction;
        self.current_position -= dir * correction;
        true
    }

    /// Keeps the body inside the region.
    ///
    /// A clamped axis also gets its previous position overwritten, so the
    /// body loses all of its velocity along that axis instead of bouncing.
    /// Returns whether any of the four walls was hit.
    pub fn resolve_wall(&mut self, region: Region) -> bool {
        let r = self.radius;
        let mut hit = false;

        if self.current_position.x + r > region.width {
            self.current_position.x = region.width - r;
            self.previous_position.x = self.current_position.x;
            hit = true;
        }
        if self.current_position.y + r > region.height {
            self.current_position.y = region.height - r;
            self.previous_position.y = self.current_position.y;
            hit = true;
        }
        if self.current_position.x - r < 0. {
            self.current_position.x = r;
            self.previous_position.x = r;
            hit = true;
        }
        if self.current_position.y - r < 0. {
            self.current_position.y = r;
            self.previous_position.y = r;
            hit = true;
        }

        hit
    }

    /// Same correction as [`Body::resolve_overlap`] but against an immovable
    /// repeller, so only the body moves. Velocity is left untouched.
    pub fn resolve_pointer(&mut self, pointer: &PointerRepeller) -> bool {
        let dist = self.current_position.distance(pointer.position);
        let reach = self.radius + pointer.radius;
        if dist >= reach {
            return false;
        }

        let correction = (reach - dist) / 2.;
        let dir = separation_direction(pointer.position, self.current_position);
        self.current_position += dir * correction;
        true
    }
}
