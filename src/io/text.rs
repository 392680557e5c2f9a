/*!
# Text format

```text
4
1 2
0 2
0 1 3
2
```

The first line holds the number of vertices `n`. Line `i + 1` (for `i` in `0..n`) lists the
neighbors of vertex `i`, separated by whitespace; an empty line denotes an isolated vertex. Every
undirected edge therefore appears in the lines of both endpoints.
*/

use std::io::{BufRead, ErrorKind, Result, Write};

use itertools::Itertools;
use tracing::debug;

use super::*;

/// A configurable reader for the text format.
#[derive(Debug, Copy, Clone)]
pub struct TextReader {
    /// Inputs declaring more vertices are rejected right after the first line
    max_nodes: NumNodes,
}

impl Default for TextReader {
    fn default() -> Self {
        Self {
            max_nodes: INVALID_NODE - 1,
        }
    }
}

impl TextReader {
    /// Creates a new [`TextReader`] accepting up to `2^32 - 2` vertices
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the largest accepted vertex count
    pub fn max_nodes(mut self, max_nodes: NumNodes) -> Self {
        self.max_nodes = max_nodes;
        self
    }

    /// Returns the next line or an `UnexpectedEof` error naming what was expected
    fn next_line<I>(lines: &mut I, expected: impl FnOnce() -> String) -> Result<String>
    where
        I: Iterator<Item = Result<String>>,
    {
        match lines.next() {
            Some(line) => line,
            None => Err(io_error!(
                ErrorKind::UnexpectedEof,
                format!("Premature end of input: missing {}", expected())
            )),
        }
    }
}

impl<G> GraphReader<G> for TextReader
where
    G: GraphNew + GraphEdgeEditing + GraphEdgeOrder + AdjacencyList,
{
    fn try_read_graph<R: BufRead>(&self, reader: R) -> Result<G> {
        let mut lines = reader.lines();

        let header = Self::next_line(&mut lines, || "vertex count".into())?;
        let mut tokens = header.split_whitespace();
        let n: i64 = parse_next_value!(tokens, "vertex count");
        raise_error_unless!(
            tokens.next().is_none(),
            ErrorKind::InvalidData,
            "The first line must only contain the vertex count"
        );
        let n = checked_vertex_count(n, self.max_nodes)?;

        let mut neighborhoods = Vec::new();
        for u in 0..n {
            let line = Self::next_line(&mut lines, || format!("neighbors of vertex {u}"))?;
            let neighbors = line
                .split_whitespace()
                .map(|token| {
                    let v = token.parse::<i64>().map_err(|_| {
                        io_error!(
                            ErrorKind::InvalidData,
                            format!("Invalid neighbor `{token}` of vertex {u}")
                        )
                    })?;
                    checked_neighbor(v, u, n)
                })
                .collect::<Result<Vec<_>>>()?;
            neighborhoods.push(neighbors);
        }

        for line in lines {
            raise_error_unless!(
                line?.trim().is_empty(),
                ErrorKind::InvalidData,
                format!("Unexpected content after the neighbors of all {n} vertices")
            );
        }

        let graph: G = graph_from_neighborhoods(neighborhoods);
        ensure_symmetric(&graph)?;
        debug!(n, m = graph.number_of_edges(), "read text graph");
        Ok(graph)
    }
}

/// Trait for creating graphs from the text format.
///
/// Provides shorthand methods for reading graphs using the default [`TextReader`] settings.
///
/// ```
/// use ubridges::{prelude::*, io::*};
///
/// let data = "3\n1 2\n0\n0\n";
/// let graph = AdjList::try_read_text(data.as_bytes()).unwrap();
///
/// assert_eq!(graph.number_of_edges(), 2);
/// assert_eq!(graph.as_neighbors_slice(0), &[1, 2]);
/// ```
pub trait TextRead: Sized {
    /// Tries to read a graph in the text format from a given buffered reader.
    ///
    /// # Errors
    /// Returns an error if the input is not a valid graph in the text format.
    fn try_read_text<R>(reader: R) -> Result<Self>
    where
        R: BufRead;
}

impl<G> TextRead for G
where
    G: GraphNew + GraphEdgeEditing + GraphEdgeOrder + AdjacencyList,
{
    fn try_read_text<R>(reader: R) -> Result<Self>
    where
        R: BufRead,
    {
        TextReader::new().try_read_graph(reader)
    }
}

/// Writer for the text format
#[derive(Debug, Copy, Clone, Default)]
pub struct TextWriter;

impl TextWriter {
    /// Creates a new [`TextWriter`]
    pub fn new() -> Self {
        Self
    }
}

impl<G> GraphWriter<G> for TextWriter
where
    G: AdjacencyList,
{
    fn try_write_graph<W: Write>(&self, graph: &G, mut writer: W) -> Result<()> {
        writeln!(writer, "{}", graph.number_of_nodes())?;
        for u in graph.vertices() {
            writeln!(writer, "{}", graph.neighbors_of(u).join(" "))?;
        }
        writer.flush()
    }
}

/// Trait for writing graphs in the text format
pub trait TextWrite {
    /// Writes the graph in the text format.
    ///
    /// # Errors
    /// Returns an error if writing fails.
    fn try_write_text<W>(&self, writer: W) -> Result<()>
    where
        W: Write;
}

impl<G> TextWrite for G
where
    G: AdjacencyList,
{
    fn try_write_text<W>(&self, writer: W) -> Result<()>
    where
        W: Write,
    {
        TextWriter::new().try_write_graph(self, writer)
    }
}

#[cfg(test)]
mod test {
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::gens::*;

    fn read(data: &str) -> Result<AdjList> {
        AdjList::try_read_text(data.as_bytes())
    }

    fn error_kind(data: &str) -> ErrorKind {
        read(data).unwrap_err().kind()
    }

    #[test]
    fn read_example() {
        let graph = read("4\n1 2\n0 2\n0   1 3\n2\n").unwrap();

        assert_eq!(graph.number_of_nodes(), 4);
        assert_eq!(graph.number_of_edges(), 4);
        assert_eq!(graph.as_neighbors_slice(2), &[0, 1, 3]);
    }

    #[test]
    fn isolated_vertices_and_crlf() {
        let graph = read("3\r\n\r\n2\r\n1\r\n").unwrap();
        assert_eq!(graph.degree_of(0), 0);
        assert!(graph.has_edge(1, 2));

        assert_eq!(read("0\n").unwrap().number_of_nodes(), 0);
        assert_eq!(read("2\n\n\n\n").unwrap().number_of_edges(), 0);
    }

    #[test]
    fn multigraph() {
        let graph = read("2\n1 1\n0 0\n").unwrap();
        assert_eq!(graph.edge_multiplicity(0, 1), 2);
    }

    #[test]
    fn malformed_inputs() {
        assert_eq!(error_kind(""), ErrorKind::UnexpectedEof);
        assert_eq!(error_kind("\n"), ErrorKind::InvalidData);
        assert_eq!(error_kind("x\n"), ErrorKind::InvalidData);
        assert_eq!(error_kind("-1\n"), ErrorKind::InvalidData);
        assert_eq!(error_kind("2 3\n\n\n"), ErrorKind::InvalidData);
        assert_eq!(error_kind("3\n1\n0\n"), ErrorKind::UnexpectedEof);
        assert_eq!(error_kind("2\n1\n0 a\n"), ErrorKind::InvalidData);
        assert_eq!(error_kind("2\n-1\n\n"), ErrorKind::InvalidData);
        assert_eq!(error_kind("2\n2\n\n"), ErrorKind::InvalidData);
        assert_eq!(error_kind("2\n1\n0\n1\n"), ErrorKind::InvalidData);
    }

    #[test]
    fn asymmetric_adjacency_is_rejected() {
        assert_eq!(error_kind("2\n1\n\n"), ErrorKind::InvalidData);
        assert_eq!(error_kind("2\n1 1\n0\n"), ErrorKind::InvalidData);
    }

    #[test]
    fn vertex_limit() {
        let reader = TextReader::new().max_nodes(3);
        let result: Result<AdjList> = reader.try_read_graph("4\n\n\n\n\n".as_bytes());
        assert_eq!(result.unwrap_err().kind(), ErrorKind::InvalidData);
    }

    #[test]
    fn huge_vertex_count_without_body() {
        let header = format!("{}\n", INVALID_NODE - 1);
        assert_eq!(error_kind(&header), ErrorKind::UnexpectedEof);
        assert_eq!(error_kind("2147483647\n1\n0\n"), ErrorKind::UnexpectedEof);
    }

    #[test]
    fn write_read_preserves_order() {
        let rng = &mut Pcg64Mcg::seed_from_u64(1);

        for n in [0, 1, 20, 100] {
            let graph = AdjList::gnp(rng, n, 0.1);

            let mut buffer = Vec::new();
            graph.try_write_text(&mut buffer).unwrap();
            assert_eq!(read(std::str::from_utf8(&buffer).unwrap()).unwrap(), graph);
        }
    }
}
