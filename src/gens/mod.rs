/*!
# Graph Generators

This module provides builder-style random edge generators and the [`RandomGraph`] trait that turns
them into whole graph instances.

A generator is configured fluently (`Gnp::new().nodes(n).prob(p)`) and then asked for its
edges, either collected (`generate`) or lazily (`stream`).

Supported models include:
- G(n,p): every pair of distinct nodes independently with probability `p`
- G(n,m): uniform random graphs with a fixed number of edges
- Random recursive trees, used to guarantee connectivity

On top of that, [`RandomGraph::connected_gnp`] overlays a random tree with a `G(n,p)` graph and
[`RandomGraph::eulerian_gnp`] additionally fixes the degree parities (see [`GeneratorParity`]) so
that an Eulerian circuit or path exists.

```
use ubridges::{prelude::*, algo::*, gens::*};

let rng = &mut rand::rng();
let graph = AdjList::eulerian_gnp(rng, 50, 0.1, EulerianParity::Circuit);

assert!(graph.has_eulerian_path_strict());
assert_eq!(graph.odd_degree_vertices().count(), 0);
```
*/

use fxhash::FxHashSet;
use rand::Rng;
use tracing::debug;

use crate::prelude::*;

mod gnm;
mod gnp;
mod parity;
mod substructures;
mod tree;

pub use gnm::*;
pub use gnp::*;
pub use parity::*;
pub use substructures::*;
pub use tree::*;

/// Builder setter for the vertex count
pub trait NumNodesGen {
    /// Generate graphs on the vertices `0..n`
    fn nodes(self, n: NumNodes) -> Self;
}

/// Builder setter for an exact edge count
pub trait NumEdgesGen {
    /// Generate exactly `m` edges
    fn edges(self, m: NumEdges) -> Self;
}

/// Builder setter for the expected degree
pub trait AverageDegreeGen {
    /// Choose the model parameter such that a vertex has `deg` neighbors in expectation
    fn avg_deg(self, deg: f64) -> Self;
}

/// A configured random edge generator
pub trait GraphGenerator {
    /// Collects [`GraphGenerator::stream`] into a vector
    fn generate<R>(&self, rng: &mut R) -> Vec<Edge>
    where
        R: Rng,
    {
        self.stream(rng).collect()
    }

    /// Produces the random edges lazily where the model allows it; models that need global
    /// state (like rejection sampling) generate upfront and iterate the result
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = Edge>
    where
        R: Rng;
}

/// Random graph constructors, implemented for every editable graph.
///
/// All produced graphs have symmetric adjacency and vertex ids in `0..n`.
pub trait RandomGraph: Sized {
    /// Samples from `G(n,p)`; see [`Gnp`]
    fn gnp<R>(rng: &mut R, n: NumNodes, p: f64) -> Self
    where
        R: Rng;

    /// Samples from `G(n,m)`; see [`Gnm`]
    fn gnm<R>(rng: &mut R, n: NumNodes, m: NumEdges) -> Self
    where
        R: Rng;

    /// Creates a connected graph as union of a random tree and a `G(n,p)` graph.
    /// Pairs chosen by both are only added once, so the graph is simple.
    fn connected_gnp<R>(rng: &mut R, n: NumNodes, p: f64) -> Self
    where
        R: Rng;

    /// Creates a [connected `G(n,p)`](RandomGraph::connected_gnp) graph and adds edges until an
    /// Eulerian circuit or path exists.
    fn eulerian_gnp<R>(rng: &mut R, n: NumNodes, p: f64, parity: EulerianParity) -> Self
    where
        R: Rng;
}

impl<G> RandomGraph for G
where
    G: GraphFromScratch + GraphEdgeEditing + GraphEdgeOrder + AdjacencyList + AdjacencyTest,
{
    fn gnp<R>(rng: &mut R, n: NumNodes, p: f64) -> Self
    where
        R: Rng,
    {
        let graph = Self::from_edges(n, Gnp::new().nodes(n).prob(p).stream(rng));
        debug!(n, p, m = graph.number_of_edges(), "generated G(n,p)");
        graph
    }

    fn gnm<R>(rng: &mut R, n: NumNodes, m: NumEdges) -> Self
    where
        R: Rng,
    {
        let graph = Self::from_edges(n, Gnm::new().nodes(n).edges(m).stream(rng));
        debug!(n, m, "generated G(n,m)");
        graph
    }

    fn connected_gnp<R>(rng: &mut R, n: NumNodes, p: f64) -> Self
    where
        R: Rng,
    {
        let tree = RandomTree::new().nodes(n).generate(rng);
        let random = Gnp::new().nodes(n).prob(p).generate(rng);

        let mut seen = FxHashSet::default();
        let graph = Self::from_edges(
            n,
            tree.into_iter()
                .chain(random)
                .filter(|e| seen.insert(e.normalized())),
        );

        debug!(n, p, m = graph.number_of_edges(), "generated connected G(n,p)");
        graph
    }

    fn eulerian_gnp<R>(rng: &mut R, n: NumNodes, p: f64, parity: EulerianParity) -> Self
    where
        R: Rng,
    {
        let mut graph = Self::connected_gnp(rng, n, p);
        graph.fix_parity(rng, parity);

        debug!(n, p, m = graph.number_of_edges(), ?parity, "generated eulerian graph");
        graph
    }
}
