use crate::settings::RenderSettings;

use disc_engine as de;
use macroquad::{ prelude::*, ui::root_ui };

pub fn draw_frame(frame: &[de::BodySnapshot], settings: &RenderSettings) {
    let [r, g, b] = settings.background;
    clear_background(Color::new(r, g, b, 1.));

    for body in frame {
        let color = Color::new(body.color.r, body.color.g, body.color.b, settings.body_alpha);
        draw_circle(body.position.x as f32, body.position.y as f32, body.radius as f32, color);
    }
}

pub fn draw_stats(stats: &de::StepStats, paused: bool) {
    root_ui().label(None, &format!("fps: {}", get_fps()));
    root_ui().label(None, &format!("step: {}", stats.step));
    root_ui().label(None, &format!("bodies: {} in {} clusters", stats.bodies, stats.clusters));
    root_ui().label(None, &format!("contacts: {}", stats.pair_corrections));
    if paused {
        root_ui().label(None, "PAUSED");
    }
}
