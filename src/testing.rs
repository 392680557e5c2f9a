use crate::{algo::*, prelude::*};

/// Reference bridge set computed from the definition: an edge is a bridge if removing one of its
/// occurrences increases the number of connected components. Returned normalized and sorted.
pub(crate) fn brute_force_bridges(graph: &AdjList) -> Vec<Edge> {
    let components = graph.number_of_connected_components();
    let mut graph = graph.clone();

    let candidates = graph.edges(true).filter(|e| !e.is_loop()).collect::<Vec<_>>();
    let bridges = candidates.into_iter().filter(|&Edge(u, v)| {
        let Some(slots) = graph.detach_edge(u, v) else {
            return false;
        };
        let split = graph.number_of_connected_components() > components;
        graph.reattach_edge(u, v, slots);
        split
    });

    normalized_bridges(bridges.collect::<Vec<_>>())
}

/// Asserts that `path` traverses every edge of `original` exactly once (respecting multiplicity)
/// and that consecutive vertices are adjacent.
pub(crate) fn assert_eulerian_path(original: &AdjList, path: &[Node]) {
    assert_eq!(
        path.len(),
        original.number_of_edges() as usize + 1,
        "walk of length {} for {} edges",
        path.len(),
        original.number_of_edges()
    );

    let mut remaining = original.clone();
    for (&u, &v) in path.iter().zip(path.iter().skip(1)) {
        assert!(
            remaining.try_remove_edge(u, v),
            "edge ({u},{v}) traversed more often than present"
        );
    }
    assert_eq!(remaining.number_of_edges(), 0);
}
