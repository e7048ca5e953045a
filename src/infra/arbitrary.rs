use std::fmt;

use arbitrary::{Arbitrary, Unstructured};

use crate::{core::id::IdType, graph::Graph};

use super::testing::{Index, MutOp, LABEL_POOL};

pub struct MutOpsSeq(pub Vec<MutOp>);

impl IntoIterator for MutOpsSeq {
    type Item = MutOp;
    type IntoIter = std::vec::IntoIter<MutOp>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl MutOpsSeq {
    /// Applies the operations while printing them as code using the public
    /// API of [`Graph`], ready to be pasted into a regression test.
    pub fn replay(self, graph: &mut Graph) {
        println!("let mut graph = Graph::new();");
        println!();

        for op in self {
            match &op {
                MutOp::AddVertex(index) => println!("graph.add_vertex({:?});", index.label()),
                MutOp::RemoveVertex(index) => {
                    println!("graph.remove_vertex({:?});", index.label())
                }
                MutOp::AddEdge(u, v, weight) => {
                    println!("graph.add_edge({:?}, {:?}, {weight});", u.label(), v.label())
                }
                MutOp::RemoveEdge(u, v) => {
                    println!("graph.remove_edge({:?}, {:?});", u.label(), v.label())
                }
                MutOp::RemoveEdgeById(index) => {
                    match index
                        .get(graph.edge_count())
                        .and_then(|nth| graph.edges().nth(nth))
                    {
                        Some(edge) => println!(
                            "graph.remove_edge_by_id(EdgeId::from_usize({}));",
                            edge.id.as_usize()
                        ),
                        None => println!("// no edge to remove"),
                    }
                }
                MutOp::Clear => println!("graph.clear();"),
                MutOp::ClearEdges => println!("graph.clear_edges();"),
            }

            op.apply(graph);
        }

        println!();
        println!("check_consistency(&graph).unwrap();");
    }
}

impl fmt::Debug for MutOpsSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "MutOpsSeq(vec![")?;

        for op in self.0.iter() {
            writeln!(f, "    MutOp::{:?},", op)?;
        }

        writeln!(f, "])")?;
        writeln!(f, ".replay(&mut graph);")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum OpKind {
    AddVertex,
    AddEdge,
    RemoveVertex,
    RemoveEdge,
    RemoveEdgeById,
    Clear,
    ClearEdges,
}

impl<'a> Arbitrary<'a> for MutOpsSeq {
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        let m_target = u.int_in_range(LABEL_POOL..=LABEL_POOL * LABEL_POOL / 2)?;

        let total = u.len();

        let mut m = 0usize;
        let mut seq = Vec::new();

        while !u.is_empty() {
            let re = (m as f64 / m_target as f64).min(1.0);
            let r = (total - u.len()) as f64 / total as f64;

            let op = match arbitrary_op(u, re, r) {
                Ok(op) => op,
                Err(_) => break,
            };

            match op {
                MutOp::AddEdge(..) => m += 1,
                MutOp::RemoveEdge(..) | MutOp::RemoveEdgeById(_) => m = m.saturating_sub(1),
                MutOp::Clear | MutOp::ClearEdges => m = 0,
                MutOp::AddVertex(_) | MutOp::RemoveVertex(_) => {}
            }

            seq.push(op);
        }

        Ok(MutOpsSeq(seq))
    }
}

fn arbitrary_op(u: &mut Unstructured<'_>, re: f64, r: f64) -> arbitrary::Result<MutOp> {
    // Edges create their endpoints, so explicit vertex additions matter only
    // for isolated vertices. The weight of adding edges decreases as the graph
    // gets denser and as the input is consumed.
    let we = non_linear_decrease(0.6 * re + 0.4 * r);

    let kind = u.choose_weighted(
        &[
            OpKind::AddVertex,
            OpKind::AddEdge,
            OpKind::RemoveVertex,
            OpKind::RemoveEdge,
            OpKind::RemoveEdgeById,
            OpKind::Clear,
            OpKind::ClearEdges,
        ],
        &[0.1, we, 0.05, (1.0 - we) * 0.4, (1.0 - we) * 0.1, 0.01, 0.01],
    )?;

    match kind {
        OpKind::AddVertex => Ok(MutOp::AddVertex(label_index(u)?)),
        OpKind::AddEdge => Ok(MutOp::AddEdge(
            label_index(u)?,
            label_index(u)?,
            u.arbitrary()?,
        )),
        OpKind::RemoveVertex => Ok(MutOp::RemoveVertex(label_index(u)?)),
        OpKind::RemoveEdge => Ok(MutOp::RemoveEdge(label_index(u)?, label_index(u)?)),
        OpKind::RemoveEdgeById => Ok(MutOp::RemoveEdgeById(u.arbitrary()?)),
        OpKind::Clear => Ok(MutOp::Clear),
        OpKind::ClearEdges => Ok(MutOp::ClearEdges),
    }
}

fn label_index(u: &mut Unstructured<'_>) -> arbitrary::Result<Index> {
    u.int_in_range(0..=LABEL_POOL - 1).map(Index)
}

trait UnstructuredExt {
    fn nice_f64(&mut self) -> arbitrary::Result<f64>;
    fn choose_weighted<T: Copy>(&mut self, choices: &[T], weights: &[f64]) -> arbitrary::Result<T>;
}

impl<'a> UnstructuredExt for Unstructured<'a> {
    fn nice_f64(&mut self) -> arbitrary::Result<f64> {
        const RESOLUTION: u8 = 100;
        let int = self.int_in_range(0..=RESOLUTION)?;
        Ok(int as f64 / RESOLUTION as f64)
    }

    fn choose_weighted<T: Copy>(&mut self, choices: &[T], weights: &[f64]) -> arbitrary::Result<T> {
        if choices.is_empty() || choices.len() != weights.len() {
            return Err(arbitrary::Error::EmptyChoose);
        }

        let weight_sum = weights.iter().copied().sum::<f64>();
        let bound = self.nice_f64()? * weight_sum;

        let mut acc = 0.0;
        for (&choice, weight) in choices.iter().zip(weights.iter().copied()) {
            acc += weight;

            if acc >= bound {
                return Ok(choice);
            }
        }

        // Rounding errors in the accumulated sum.
        Ok(choices[choices.len() - 1])
    }
}

// f(0) = 1, f(1) ~= 0.152
fn non_linear_decrease(x: f64) -> f64 {
    1.0 / (x + 1.0).powf(std::f64::consts::E)
}
