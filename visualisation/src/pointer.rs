use disc_engine as de;
use macroquad::prelude::mouse_position;

/// Turns the mouse into the simulation's repeller.
///
/// The repeller stays parked outside the window until the mouse has moved
/// once, so a cursor resting somewhere at startup does not carve a hole.
#[derive(Debug, Default)]
pub struct PointerTracker {
    last: Option<(f32, f32)>,
    moved: bool,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the mouse, to be called once per step
    pub fn sample(&mut self, radius: f64) -> de::PointerRepeller {
        self.observe(mouse_position(), radius)
    }

    fn observe(&mut self, pos: (f32, f32), radius: f64) -> de::PointerRepeller {
        if self.last.is_some_and(|last| last != pos) {
            self.moved = true;
        }
        self.last = Some(pos);

        if self.moved {
            de::PointerRepeller::new(de::Vector2::new(pos.0 as f64, pos.1 as f64), radius)
        }
        else {
            de::PointerRepeller::parked(radius)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parked_until_moved() {
        let mut tracker = PointerTracker::new();
        assert_eq!(tracker.observe((10., 10.), 30.), de::PointerRepeller::parked(30.));
        assert_eq!(tracker.observe((10., 10.), 30.), de::PointerRepeller::parked(30.));

        let pointer = tracker.observe((12., 10.), 30.);
        assert_eq!(pointer.position, de::Vector2::new(12., 10.));

        // Stays live even when the mouse rests again
        let pointer = tracker.observe((12., 10.), 30.);
        assert_eq!(pointer.position, de::Vector2::new(12., 10.));
        assert_eq!(pointer.radius, 30.);
    }
}
