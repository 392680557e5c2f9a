/*!
# Binary format

A sequence of little-endian `i32` values:

```text
n  deg(0) nb(0,0) .. nb(0,deg(0)-1)  deg(1) nb(1,0) ..  ...  deg(n-1) ..
```

The input must end right after the neighbors of vertex `n - 1`.
*/

use std::io::{BufRead, ErrorKind, Read, Result, Write};

use tracing::debug;

use super::*;

/// A configurable reader for the binary format.
#[derive(Debug, Copy, Clone)]
pub struct BinaryReader {
    max_nodes: NumNodes,
}

impl Default for BinaryReader {
    fn default() -> Self {
        Self {
            max_nodes: i32::MAX as NumNodes,
        }
    }
}

impl BinaryReader {
    /// Creates a new [`BinaryReader`] accepting every vertex count the format can express
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the largest accepted vertex count
    pub fn max_nodes(mut self, max_nodes: NumNodes) -> Self {
        self.max_nodes = max_nodes;
        self
    }
}

/// Reads the next little-endian `i32`
fn read_i32<R: Read>(reader: &mut R, what: impl FnOnce() -> String) -> Result<i32> {
    let mut bytes = [0u8; 4];
    match reader.read_exact(&mut bytes) {
        Ok(()) => Ok(i32::from_le_bytes(bytes)),
        Err(err) if err.kind() == ErrorKind::UnexpectedEof => Err(io_error!(
            ErrorKind::UnexpectedEof,
            format!("Premature end of input: missing {}", what())
        )),
        Err(err) => Err(err),
    }
}

impl<G> GraphReader<G> for BinaryReader
where
    G: GraphNew + GraphEdgeEditing + GraphEdgeOrder + AdjacencyList,
{
    fn try_read_graph<R: BufRead>(&self, mut reader: R) -> Result<G> {
        let n = read_i32(&mut reader, || "vertex count".into())?;
        let n = checked_vertex_count(n as i64, self.max_nodes)?;

        let mut neighborhoods = Vec::new();
        for u in 0..n {
            let degree = read_i32(&mut reader, || format!("neighbor count of vertex {u}"))?;
            raise_error_unless!(
                degree >= 0,
                ErrorKind::InvalidData,
                format!("Negative neighbor count {degree} of vertex {u}")
            );

            let mut neighbors = Vec::new();
            for i in 0..degree {
                let v = read_i32(&mut reader, || format!("neighbor {i} of vertex {u}"))?;
                neighbors.push(checked_neighbor(v as i64, u, n)?);
            }
            neighborhoods.push(neighbors);
        }

        raise_error_unless!(
            reader.fill_buf()?.is_empty(),
            ErrorKind::InvalidData,
            format!("Unexpected bytes after the neighbors of all {n} vertices")
        );

        let graph: G = graph_from_neighborhoods(neighborhoods);
        ensure_symmetric(&graph)?;
        debug!(n, m = graph.number_of_edges(), "read binary graph");
        Ok(graph)
    }
}

/// Trait for creating graphs from the binary format.
///
/// ```
/// use ubridges::{prelude::*, io::*};
///
/// let words: [i32; 5] = [2, 1, 1, 1, 0];
/// let data = words.iter().flat_map(|x| x.to_le_bytes()).collect::<Vec<u8>>();
///
/// let graph = AdjList::try_read_binary(data.as_slice()).unwrap();
/// assert!(graph.has_edge(0, 1));
/// ```
pub trait BinaryRead: Sized {
    /// Tries to read a graph in the binary format from a given buffered reader.
    ///
    /// # Errors
    /// Returns an error if the input is not a valid graph in the binary format.
    fn try_read_binary<R>(reader: R) -> Result<Self>
    where
        R: BufRead;
}

impl<G> BinaryRead for G
where
    G: GraphNew + GraphEdgeEditing + GraphEdgeOrder + AdjacencyList,
{
    fn try_read_binary<R>(reader: R) -> Result<Self>
    where
        R: BufRead,
    {
        BinaryReader::new().try_read_graph(reader)
    }
}

/// Writer for the binary format
#[derive(Debug, Copy, Clone, Default)]
pub struct BinaryWriter;

impl BinaryWriter {
    /// Creates a new [`BinaryWriter`]
    pub fn new() -> Self {
        Self
    }
}

/// Converts a count into the `i32` stored on disk
fn to_i32(value: NumNodes, what: &str) -> Result<i32> {
    i32::try_from(value).map_err(|_| {
        io_error!(
            ErrorKind::InvalidInput,
            format!("{what} {value} does not fit into the binary format")
        )
    })
}

impl<G> GraphWriter<G> for BinaryWriter
where
    G: AdjacencyList,
{
    fn try_write_graph<W: Write>(&self, graph: &G, mut writer: W) -> Result<()> {
        writer.write_all(&to_i32(graph.number_of_nodes(), "Vertex count")?.to_le_bytes())?;

        for u in graph.vertices() {
            writer.write_all(&to_i32(graph.degree_of(u), "Degree")?.to_le_bytes())?;
            for v in graph.neighbors_of(u) {
                // `v < n <= i32::MAX` as the vertex count was checked above
                writer.write_all(&(v as i32).to_le_bytes())?;
            }
        }

        writer.flush()
    }
}

/// Trait for writing graphs in the binary format
pub trait BinaryWrite {
    /// Writes the graph in the binary format.
    ///
    /// # Errors
    /// Returns an error if writing fails or the graph has more than `i32::MAX` vertices.
    fn try_write_binary<W>(&self, writer: W) -> Result<()>
    where
        W: Write;
}

impl<G> BinaryWrite for G
where
    G: AdjacencyList,
{
    fn try_write_binary<W>(&self, writer: W) -> Result<()>
    where
        W: Write,
    {
        BinaryWriter::new().try_write_graph(self, writer)
    }
}
