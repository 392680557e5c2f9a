/*!
# Substructure Generators

Deterministic helpers that add **paths** and **cycles** to an already existing graph. They are
mostly used to assemble small test instances and the spanning structure of random graphs.

```rust
use ubridges::{prelude::*, gens::*};

let mut g = AdjList::new(5);
g.connect_path([0, 1, 2]);
g.connect_cycle([2, 3, 4]);

assert_eq!(
    g.ordered_edges(true),
    vec![Edge(0, 1), Edge(1, 2), Edge(2, 3), Edge(2, 4), Edge(3, 4)]
);
```
*/

use itertools::Itertools;

use super::*;

/// Trait for creating additional **substructures** (paths, cycles) inside an already existing
/// graph. Implemented for all graphs that support edge editing.
pub trait GeneratorSubstructures {
    /// Connects the given nodes in order with a **path**.
    /// Each consecutive pair of nodes is joined by a new edge, even if they are already adjacent.
    fn connect_path<P>(&mut self, nodes_on_path: P)
    where
        P: IntoIterator<Item = Node>;

    /// Connects the given nodes with a **cycle**: a path through all of them plus an edge from
    /// the last node back to the first.
    ///
    /// A single node receives a self-loop and two nodes are joined by two parallel edges.
    fn connect_cycle<C>(&mut self, nodes_in_cycle: C)
    where
        C: IntoIterator<Item = Node>;
}

impl<G> GeneratorSubstructures for G
where
    G: GraphEdgeEditing,
{
    fn connect_path<P>(&mut self, nodes_on_path: P)
    where
        P: IntoIterator<Item = Node>,
    {
        for (u, v) in nodes_on_path.into_iter().tuple_windows() {
            self.add_edge(u, v);
        }
    }

    fn connect_cycle<C>(&mut self, nodes_in_cycle: C)
    where
        C: IntoIterator<Item = Node>,
    {
        let mut iter = nodes_in_cycle.into_iter();

        if let Some(first) = iter.next() {
            let last = iter.fold(first, |prev, cur| {
                self.add_edge(prev, cur);
                cur
            });

            self.add_edge(last, first);
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn connect_path() {
        let mut g = AdjList::new(6);
        g.connect_path([]);
        g.connect_path([1]);
        assert_eq!(g.number_of_edges(), 0);

        g.connect_path([0, 3, 1, 4]);
        assert_eq!(g.ordered_edges(true), vec![Edge(0, 3), Edge(1, 3), Edge(1, 4)]);
        assert_eq!(g.as_neighbors_slice(3), &[0, 1]);

        g.connect_path([3, 0]);
        assert_eq!(g.edge_multiplicity(0, 3), 2);
    }

    #[test]
    fn connect_cycle() {
        let mut g = AdjList::new(6);
        g.connect_cycle([]);
        assert_eq!(g.number_of_edges(), 0);

        g.connect_cycle([0, 3, 1, 4]);
        assert_eq!(
            g.ordered_edges(true),
            vec![Edge(0, 3), Edge(0, 4), Edge(1, 3), Edge(1, 4)]
        );
        assert!(g.degrees().all(|d| d % 2 == 0));

        let mut g = AdjList::new(3);
        g.connect_cycle([1]);
        g.connect_cycle([0, 2]);
        assert_eq!(g.edge_multiplicity(1, 1), 1);
        assert_eq!(g.edge_multiplicity(0, 2), 2);
    }
}
