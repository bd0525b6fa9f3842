use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use crate::graph::{Graph, RouteLeg};
use crate::route::Route;
use crate::transport::TransportMode;
use crate::waypoint::WaypointId;
use crate::weight::WeightFunction;

/// A cost-annotated outgoing connection, one per edge, rebuilt for every
/// search because the cost depends on the weight function in effect.
#[derive(Debug, Clone, Copy)]
struct CostNode {
    target: WaypointId,
    cost: f64,
    distance: f64,
    mode: TransportMode,
}

/// One hop of the discovered path, recorded against the hop's end waypoint.
#[derive(Debug, Clone, Copy)]
struct Hop {
    parent: WaypointId,
    distance: f64,
    mode: TransportMode,
}

/// Find the lowest-cost route from `start` to `end` under the given weight
/// function.
///
/// Weights are non-negative by construction (distance, emissions and time
/// terms are all >= 0), so the first time the end waypoint is popped from
/// the queue its cost is optimal and the search stops. Returns `None` when
/// no path exists; the absence of a route is a normal outcome, not an error.
pub fn shortest_route(
    graph: &Graph,
    start: WaypointId,
    end: WaypointId,
    weight: &WeightFunction,
) -> Option<Route> {
    // A route needs at least one leg, so "already there" is the empty result.
    if start == end {
        return None;
    }
    graph.vertex(start)?;
    graph.vertex(end)?;

    let adjacency = build_adjacency(graph, weight);

    let mut distances: HashMap<WaypointId, f64> =
        adjacency.keys().map(|&id| (id, f64::INFINITY)).collect();
    let mut hops: HashMap<WaypointId, Hop> = HashMap::new();
    let mut visited: HashSet<WaypointId> = HashSet::new();
    let mut queue = BinaryHeap::new();

    distances.insert(start, 0.0);
    queue.push(QueueEntry::new(start, 0.0));

    let mut reached = false;
    while let Some(entry) = queue.pop() {
        if entry.node == end {
            reached = true;
            break;
        }

        let settled = distances.get(&entry.node).copied().unwrap_or(f64::INFINITY);
        if entry.cost.0 > settled {
            continue; // stale queue entry
        }
        if !visited.insert(entry.node) {
            continue;
        }

        for adjacent in adjacency.get(&entry.node).map(Vec::as_slice).unwrap_or(&[]) {
            if visited.contains(&adjacent.target) {
                continue;
            }

            let candidate = settled + adjacent.cost;
            let best = distances
                .get(&adjacent.target)
                .copied()
                .unwrap_or(f64::INFINITY);
            if candidate < best {
                distances.insert(adjacent.target, candidate);
                hops.insert(
                    adjacent.target,
                    Hop {
                        parent: entry.node,
                        distance: adjacent.distance,
                        mode: adjacent.mode,
                    },
                );
                queue.push(QueueEntry::new(adjacent.target, candidate));
            }
        }
    }

    if !reached {
        return None;
    }

    reconstruct_route(graph, &hops, start, end)
}

/// Build the cost-annotated adjacency list for every vertex.
fn build_adjacency(graph: &Graph, weight: &WeightFunction) -> HashMap<WaypointId, Vec<CostNode>> {
    let mut adjacency = HashMap::new();

    for vertex in graph.vertices() {
        let Some(id) = vertex.id else {
            continue;
        };
        let nodes: Vec<CostNode> = graph
            .neighbours(id)
            .iter()
            .filter_map(|leg| {
                let target = leg.end().id?;
                Some(CostNode {
                    target,
                    cost: weight.calculate(leg),
                    distance: leg.distance(),
                    mode: leg.mode(),
                })
            })
            .collect();
        adjacency.insert(id, nodes);
    }

    adjacency
}

/// Walk the recorded hops back from `end`, reverse, and convert consecutive
/// hops into route legs carrying the recorded distance and mode.
fn reconstruct_route(
    graph: &Graph,
    hops: &HashMap<WaypointId, Hop>,
    start: WaypointId,
    end: WaypointId,
) -> Option<Route> {
    let mut chain = Vec::new();
    let mut current = end;
    while current != start {
        let hop = hops.get(&current)?;
        chain.push((hop.parent, current, hop.distance, hop.mode));
        current = hop.parent;
    }
    chain.reverse();

    let mut legs = Vec::with_capacity(chain.len());
    for (from, to, distance, mode) in chain {
        let start_waypoint = graph.vertex(from)?.clone();
        let end_waypoint = graph.vertex(to)?.clone();
        let leg = RouteLeg::new(start_waypoint, end_waypoint, mode, Some(distance)).ok()?;
        legs.push(leg);
    }

    Route::new(legs).ok()
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry {
    node: WaypointId,
    cost: FloatOrd,
}

impl QueueEntry {
    fn new(node: WaypointId, cost: f64) -> Self {
        Self {
            node,
            cost: FloatOrd(cost),
        }
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queue_entries_pop_in_cost_order() {
        let mut queue = BinaryHeap::new();
        queue.push(QueueEntry::new(1, 5.0));
        queue.push(QueueEntry::new(2, 1.0));
        queue.push(QueueEntry::new(3, 3.0));

        assert_eq!(queue.pop().unwrap().node, 2);
        assert_eq!(queue.pop().unwrap().node, 3);
        assert_eq!(queue.pop().unwrap().node, 1);
    }

    #[test]
    fn float_ord_totally_orders_infinities() {
        assert!(FloatOrd(f64::INFINITY) > FloatOrd(1.0e18));
        assert!(FloatOrd(0.0) < FloatOrd(f64::INFINITY));
    }
}
