use sparse_grid::prelude::*;

/// Edge weights of a directed graph, `0` meaning "no edge".
fn build(edges: &[(usize, usize, u32)]) -> Grid<u32> {
    let mut graph = Grid::<u32>::new(0);

    for &(from, to, weight) in edges {
        graph.at(from).at(to).commit(weight);
    }

    graph
}

fn main() {
    let mut graph = build(&[(0, 1, 4), (1, 2, 7), (2, 0, 1), (1_000_000, 3, 9)]);

    // make the first edge undirected
    graph.at(0).at(1).commit(4).commit_into([1, 0]);

    // drop light edges
    graph.update_each(|_, weight| {
        if *weight < 2 {
            *weight = 0;
        }
    });

    println!("{} edges", graph.len());
    for ([from, to], weight) in &graph {
        println!("{from} -> {to}: {weight}");
    }
}
