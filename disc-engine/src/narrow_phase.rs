use crate::{ Body, Clusters, PointerRepeller, Region };

use itertools::Itertools;

/// Resolves every unordered pair of each cluster exactly once, in sweep
/// order. Returns the number of pairs that were overlapping.
///
/// This is a single pass: when three or more bodies overlap each other the
/// result is not a fully separated configuration, later steps keep pushing.
pub fn resolve_clusters(bodies: &mut [Body], clusters: &Clusters<'_>) -> usize {
    let mut corrected = 0;
    for cluster in clusters.iter() {
        for (a, b) in cluster.iter().copied().tuple_combinations() {
            let (body_a, body_b) = pair_mut(bodies, a, b);
            if body_a.resolve_overlap(body_b) {
                corrected += 1;
            }
        }
    }
    corrected
}

/// Applies the pointer then the walls to every body. Returns how many
/// bodies were moved by at least one of them.
pub fn resolve_boundaries(bodies: &mut [Body], region: Region, pointer: &PointerRepeller) -> usize {
    bodies.iter_mut()
        .map(|body| {
            let pushed = body.resolve_pointer(pointer);
            let clamped = body.resolve_wall(region);
            pushed || clamped
        })
        .filter(|&touched| touched)
        .count()
}

fn pair_mut(bodies: &mut [Body], a: usize, b: usize) -> (&mut Body, &mut Body) {
    debug_assert_ne!(a, b);
    if a < b {
        let (low, high) = bodies.split_at_mut(b);
        (&mut low[a], &mut high[0])
    }
    else {
        let (low, high) = bodies.split_at_mut(a);
        (&mut high[0], &mut low[b])
    }
}
