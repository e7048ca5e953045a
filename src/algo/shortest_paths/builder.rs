use crate::graph::Graph;

use super::{dijkstra::dijkstra, Error, ShortestPaths, TieBreak};

pub struct ShortestPathsBuilder<'a, 'l> {
    graph: &'a Graph,
    goal: Option<&'l str>,
    tie_break: TieBreak,
}

impl<'a> ShortestPaths<'a> {
    pub fn on(graph: &'a Graph) -> ShortestPathsBuilder<'a, 'static> {
        ShortestPathsBuilder {
            graph,
            goal: None,
            tie_break: TieBreak::default(),
        }
    }
}

impl<'a, 'l> ShortestPathsBuilder<'a, 'l> {
    /// Stops the search as soon as the shortest path to the goal is known.
    ///
    /// The run fails if the goal is not reachable from the source.
    pub fn goal<'l2>(self, goal: &'l2 str) -> ShortestPathsBuilder<'a, 'l2> {
        ShortestPathsBuilder {
            graph: self.graph,
            goal: Some(goal),
            tie_break: self.tie_break,
        }
    }

    pub fn tie_break(self, tie_break: TieBreak) -> Self {
        Self { tie_break, ..self }
    }

    pub fn run(self, source: &str) -> Result<ShortestPaths<'a>, Error> {
        let ShortestPathsBuilder {
            graph,
            goal,
            tie_break,
        } = self;

        let source = graph.find_vertex(source).ok_or(Error::SourceAbsent)?;
        let goal = goal
            .map(|goal| graph.find_vertex(goal).ok_or(Error::GoalAbsent))
            .transpose()?;

        dijkstra(graph, source, goal, tie_break)
    }
}
