#![no_main]

use libfuzzer_sys::fuzz_target;

use label_graph::{
    infra::{
        arbitrary::MutOpsSeq,
        testing::{label, LABEL_POOL},
    },
    Graph, INFINITY,
};

fuzz_target!(|input: (MutOpsSeq, u8, u8)| {
    let (ops, start, end) = input;
    let mut graph = Graph::new();

    for op in ops {
        op.apply(&mut graph);
    }

    let start = label(start as usize % LABEL_POOL);
    let end = label(end as usize % LABEL_POOL);

    let mut path = vec![String::from("untouched")];
    let cost = graph.shortest_path(&start, &end, &mut path);

    if cost == INFINITY {
        assert_eq!(path, ["untouched"]);
        return;
    }

    assert_eq!(path.first(), Some(&start));
    assert_eq!(path.last(), Some(&end));

    // The path must consist of existing edges and its cost must be the sum of
    // the cheapest of them.
    let total = path
        .windows(2)
        .map(|pair| {
            graph
                .edges_between(&pair[0], &pair[1])
                .map(|edge| edge.weight)
                .min()
                .unwrap()
        })
        .fold(0u64, u64::saturating_add);

    assert_eq!(total, cost);
});
