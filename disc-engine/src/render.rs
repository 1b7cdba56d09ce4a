use crate::{ Body, BodyId, Rgb, Vector2 };

/// What a renderer gets to know about a body after a step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodySnapshot {
    pub id: BodyId,
    pub position: Vector2,
    pub radius: f64,
    pub color: Rgb,
}

impl From<&Body> for BodySnapshot {
    fn from(body: &Body) -> Self {
        Self {
            id: body.id(),
            position: body.current_position,
            radius: body.radius,
            color: body.color,
        }
    }
}

/// Receives the renderable state of every body at the end of a step
pub trait RenderSink {
    fn draw_body(&mut self, body: BodySnapshot);
}

impl RenderSink for Vec<BodySnapshot> {
    fn draw_body(&mut self, body: BodySnapshot) {
        self.push(body);
    }
}
