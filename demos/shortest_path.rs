use label_graph::{algo::ShortestPaths, Graph, INFINITY};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(std::io::stderr)
        .init();

    let mut graph = Graph::new();

    graph.extend_with_edges([
        ("1", "2", 7),
        ("1", "3", 9),
        ("1", "6", 14),
        ("2", "3", 10),
        ("2", "4", 15),
        ("3", "4", 11),
        ("3", "6", 2),
        ("4", "5", 6),
        ("5", "6", 9),
    ]);

    let mut path = Vec::new();

    match graph.shortest_path("1", "5", &mut path) {
        INFINITY => println!("1 -> 5: no path"),
        cost => println!("1 -> 5: {cost} via {}", path.join(" - ")),
    }

    graph.remove_vertex("6");

    match graph.shortest_path("1", "5", &mut path) {
        INFINITY => println!("1 -> 5 without 6: no path"),
        cost => println!("1 -> 5 without 6: {cost} via {}", path.join(" - ")),
    }

    graph.add_vertex("7");

    match graph.shortest_path("1", "7", &mut path) {
        INFINITY => println!("1 -> 7: no path"),
        cost => println!("1 -> 7: {cost} via {}", path.join(" - ")),
    }

    let paths = ShortestPaths::on(&graph)
        .run("1")
        .expect("vertex 1 exists");

    for vertex in graph.vertices() {
        match paths.dist(vertex) {
            Some(dist) => println!("distance from 1 to {vertex}: {dist}"),
            None => println!("{vertex} is not reachable from 1"),
        }
    }
}
