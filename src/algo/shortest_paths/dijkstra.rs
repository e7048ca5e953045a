use tracing::{debug, trace};

use crate::{
    common::PriorityQueue,
    core::{
        id::{IdType, VertexId},
        weight::{extend_distance, Distance},
    },
    graph::Graph,
};

use super::{Error, SearchTable, ShortestPaths, TieBreak};

pub fn dijkstra<'a>(
    graph: &'a Graph,
    source: VertexId,
    goal: Option<VertexId>,
    tie_break: TieBreak,
) -> Result<ShortestPaths<'a>, Error> {
    // Label as a secondary key is `None` for all entries unless requested, so
    // the order of equal distances is then given only by the heap structure.
    let priority = |dist: Distance, vertex: VertexId| -> (Distance, Option<&'a str>) {
        match tie_break {
            TieBreak::Arbitrary => (dist, None),
            TieBreak::Label => (dist, graph.label(vertex)),
        }
    };

    let mut table = SearchTable::new(graph.vertex_bound());
    let mut queue = PriorityQueue::with_capacity(graph.vertex_count());

    table.dist[source.as_usize()] = 0;
    queue.push(priority(0, source), source);

    while let Some((_, vertex)) = queue.pop() {
        // This can happen due to duplication of vertices when doing relaxation
        // in our implementation.
        if !table.finalize(vertex) {
            trace!(%vertex, "discarded stale queue entry");
            continue;
        }

        if goal == Some(vertex) {
            break;
        }

        let Some(record) = graph.vertex(vertex) else {
            continue;
        };

        let vertex_dist = table.dist[vertex.as_usize()];

        for &edge_id in record.edges() {
            // An edge that does not lead anywhere from this vertex is treated as
            // unreachable.
            let Some((next, weight)) = graph
                .edge(edge_id)
                .and_then(|edge| Some((edge.other_endpoint(vertex)?, edge.weight())))
            else {
                continue;
            };

            if table.is_finalized(next) {
                continue;
            }

            let next_dist = extend_distance(vertex_dist, weight);

            // Relaxation operation. If the distance is better than what we had
            // so far, update it. A textbook version of the algorithm would
            // update the priority of `next`, we add it as a new item instead.
            if next_dist < table.dist[next.as_usize()] {
                table.dist[next.as_usize()] = next_dist;
                table.pred[next.as_usize()] = Some(vertex);
                queue.push(priority(next_dist, next), next);
            }
        }
    }

    if let Some(goal) = goal {
        if !table.is_finalized(goal) {
            debug!(source = %source, goal = %goal, "goal not reached");
            return Err(Error::GoalNotReached);
        }
    }

    debug!(
        source = %source,
        finalized = table.finalized_count(),
        "shortest paths search finished"
    );

    Ok(ShortestPaths {
        graph,
        source,
        table,
    })
}
