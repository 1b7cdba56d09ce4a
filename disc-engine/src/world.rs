use crate::{
    resolve_boundaries, resolve_clusters, Body, BodyId, BodySnapshot, BodyTemplate, ConfigError,
    PointerRepeller, Region, RenderSink, SimConfig, Spawner, SweepAndPrune, Vector2,
};

use tracing::{ debug, info, trace };

/// Steps between two progress log lines
const LOG_INTERVAL: u64 = 600;

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PopulationChange {
    pub spawned: usize,
    pub discarded: usize,
}

/// Summary of what happened during one [`World::step`]
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepStats {
    /// Index of the step, starting at 1
    pub step: u64,
    pub bodies: usize,
    pub clusters: usize,
    pub pair_corrections: usize,
    pub boundary_corrections: usize,
    pub spawned: usize,
    pub discarded: usize,
}

/// Population of bodies and the step driver moving them.
///
/// Bodies live in a contiguous arena. Their order in it is stable between
/// steps, new bodies are appended and shrinking drops the last ones.
pub struct World<S> {
    config: SimConfig,
    bodies: Vec<Body>,
    spawner: S,
    broad_phase: SweepAndPrune,
    next_id: u64,
    step_count: u64,
}

impl<S: Spawner> World<S> {
    pub fn new(config: SimConfig, spawner: S) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            bodies: Vec::new(),
            spawner,
            broad_phase: SweepAndPrune::new(),
            next_id: 0,
            step_count: 0,
        })
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn body(&self, id: BodyId) -> Option<&Body> {
        self.bodies.iter().find(|body| body.id == id)
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn step_count(&self) -> u64 {
        self.step_count
    }

    /// Pointer repeller at `position` with the configured radius
    pub fn pointer_at(&self, position: Vector2) -> PointerRepeller {
        PointerRepeller::new(position, self.config.pointer_radius)
    }

    pub fn push_body(&mut self, template: BodyTemplate) -> BodyId {
        let id = BodyId(self.next_id);
        self.next_id += 1;
        self.bodies.push(Body::new(id, template));
        id
    }

    /// Spawns or discards bodies until the population matches the region
    pub fn resize_population(&mut self, region: Region) -> PopulationChange {
        let target = self.config.target_population(region);
        let mut change = PopulationChange::default();

        while self.bodies.len() < target {
            let template = self.spawner.spawn(region);
            self.push_body(template);
            change.spawned += 1;
        }
        if self.bodies.len() > target {
            change.discarded = self.bodies.len() - target;
            self.bodies.truncate(target);
        }

        if change != PopulationChange::default() {
            debug!(
                spawned = change.spawned,
                discarded = change.discarded,
                population = self.bodies.len(),
                "population resized to fit {}x{}", region.width, region.height
            );
        }
        change
    }

    /// Runs one simulation step and hands the result to `sink`.
    ///
    /// `region` and `pointer` are snapshots taken by the caller, they stay
    /// the same for the whole step.
    pub fn step(&mut self, region: Region, pointer: PointerRepeller, sink: &mut impl RenderSink) -> StepStats {
        self.step_count += 1;

        let population = self.resize_population(region);

        let clusters = self.broad_phase.partition(&self.bodies);
        let pair_corrections = resolve_clusters(&mut self.bodies, &clusters);
        let cluster_count = clusters.len();

        let boundary_corrections = resolve_boundaries(&mut self.bodies, region, &pointer);

        for body in &mut self.bodies {
            body.integrate();
        }

        for body in &self.bodies {
            sink.draw_body(BodySnapshot::from(body));
        }

        let stats = StepStats {
            step: self.step_count,
            bodies: self.bodies.len(),
            clusters: cluster_count,
            pair_corrections,
            boundary_corrections,
            spawned: population.spawned,
            discarded: population.discarded,
        };
        trace!(?stats, "step");
        if self.step_count % LOG_INTERVAL == 0 {
            info!(
                "step #{}: {} bodies in {} clusters",
                self.step_count, stats.bodies, stats.clusters
            );
        }
        stats
    }
}
