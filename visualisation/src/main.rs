mod canvas;
mod pointer;
mod settings;

use pointer::PointerTracker;
use settings::{ Args, Settings };

use anyhow::{ Context, Result };
use clap::Parser;
use disc_engine as de;
use macroquad::prelude::*;
use tracing::{ error, info };

fn window_conf() -> Conf {
    Conf {
        window_title: "Disc engine".to_owned(),
        window_resizable: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    tracing_subscriber::fmt()
        .with_target(false)
        .without_time()
        .init();

    if let Err(err) = run().await {
        error!("{err:#}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let args = Args::parse();
    let settings = Settings::from_args(&args)?;
    let seed = settings.seed();
    info!(seed, "starting simulation");

    let spawner = de::RandomSpawner::new(&settings.simulation, seed);
    let mut world = de::World::new(settings.simulation.clone(), spawner)
        .context("invalid simulation settings")?;

    let mut pointer = PointerTracker::new();
    let mut frame: Vec<de::BodySnapshot> = Vec::new();
    let mut stats = de::StepStats::default();
    let mut paused = false;

    loop {
        if is_key_pressed(KeyCode::Escape) {
            break;
        }
        if is_key_pressed(KeyCode::Space) {
            paused = !paused;
            info!(paused, "pause toggled");
        }

        // Region and pointer are read once, before the step
        let region = de::Region::new(screen_width() as f64, screen_height() as f64);
        let repeller = pointer.sample(world.config().pointer_radius);

        if !paused {
            frame.clear();
            stats = world.step(region, repeller, &mut frame);
        }

        canvas::draw_frame(&frame, &settings.render);
        if settings.render.show_stats || paused {
            canvas::draw_stats(&stats, paused);
        }

        next_frame().await;
    }

    info!(steps = world.step_count(), "simulation stopped");
    Ok(())
}
