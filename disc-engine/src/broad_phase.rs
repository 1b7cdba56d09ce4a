use crate::Body;

use ordered_float::OrderedFloat;

/// Sweep-and-prune along the x axis.
///
/// Keeps its buffers between calls so partitioning every step does not
/// reallocate once the population is stable.
#[derive(Default, Debug, Clone)]
pub struct SweepAndPrune {
    /// Body indices sorted by left edge
    order: Vec<usize>,
    /// Offset in `order` of the first body of each cluster
    starts: Vec<usize>,
}

impl SweepAndPrune {
    pub fn new() -> Self {
        Self::default()
    }

    /// Splits `bodies` into clusters whose horizontal extents transitively
    /// overlap. Bodies in different clusters can never touch.
    pub fn partition(&mut self, bodies: &[Body]) -> Clusters<'_> {
        self.order.clear();
        self.starts.clear();

        self.order.extend(0..bodies.len());
        // Stable sort, equal left edges keep their arena order
        self.order.sort_by_key(|&idx| OrderedFloat(bodies[idx].left_edge()));

        let mut max_right_edge = f64::NEG_INFINITY;
        for (slot, &idx) in self.order.iter().enumerate() {
            let body = &bodies[idx];
            if !self.starts.is_empty() && body.left_edge() < max_right_edge {
                max_right_edge = max_right_edge.max(body.right_edge());
            }
            else {
                self.starts.push(slot);
                max_right_edge = body.right_edge();
            }
        }

        Clusters {
            order: &self.order,
            starts: &self.starts,
        }
    }
}

/// Output of [`SweepAndPrune::partition`], every cluster being a slice of
/// body indices in sweep order.
#[derive(Debug, Clone, Copy)]
pub struct Clusters<'a> {
    order: &'a [usize],
    starts: &'a [usize],
}

impl<'a> Clusters<'a> {
    pub fn len(&self) -> usize {
        self.starts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.starts.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<&'a [usize]> {
        let start = *self.starts.get(idx)?;
        let end = self.starts.get(idx + 1).copied().unwrap_or(self.order.len());
        Some(&self.order[start..end])
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a [usize]> + use<'a> {
        let clusters = *self;
        (0..clusters.len()).filter_map(move |idx| clusters.get(idx))
    }
}
