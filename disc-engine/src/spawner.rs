use crate::{ BodyTemplate, Region, Rgb, SimConfig, Vector2 };

use rand::{ Rng, SeedableRng, rngs::SmallRng };

/// Source of new bodies when a world has to grow its population
pub trait Spawner {
    fn spawn(&mut self, region: Region) -> BodyTemplate;
}

/// Seeded random placement anywhere in the region, with a random radius and
/// color.
#[derive(Debug, Clone)]
pub struct RandomSpawner {
    rng: SmallRng,
    min_radius: f64,
    max_radius: f64,
    color_weights: [f32; 3],
}

impl RandomSpawner {
    pub fn new(config: &SimConfig, seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            min_radius: config.min_radius,
            max_radius: config.max_radius,
            color_weights: config.color_weights,
        }
    }
}

impl Spawner for RandomSpawner {
    fn spawn(&mut self, region: Region) -> BodyTemplate {
        // Scaling unit samples instead of `random_range` keeps empty or
        // inverted ranges (zero sized region, fixed radius) from panicking
        let position = Vector2::new(
            self.rng.random::<f64>() * region.width,
            self.rng.random::<f64>() * region.height,
        );
        let radius = self.min_radius + self.rng.random::<f64>() * (self.max_radius - self.min_radius);
        let [wr, wg, wb] = self.color_weights;
        let color = Rgb::new(
            wr * self.rng.random::<f32>(),
            wg * self.rng.random::<f32>(),
            wb * self.rng.random::<f32>(),
        );

        BodyTemplate { position, radius, color }
    }
}
