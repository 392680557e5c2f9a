/*!
# IO

Utilities for reading and writing graphs from and to files.

## Formats

- **Text**: the first line holds the number of vertices `n`, followed by exactly `n` lines with the
  whitespace-separated (0-based) neighbors of vertex `0, 1, ..., n-1`. See [`TextReader`].
- **Binary**: the same information as little-endian `i32` values: `n`, then for every vertex its
  neighbor count followed by its neighbors. See [`BinaryReader`].

Both formats list every undirected edge twice (once per endpoint, parallel edges once per
occurrence). Readers insert the entries one direction at a time and reject the input if the
resulting adjacency is not symmetric. A reader never returns a partially read graph: any problem
with the input is reported as [`std::io::Error`] of kind `InvalidData` (or `UnexpectedEof` if
the input ends early).

## Traits

[`GraphReader`]/[`GraphWriter`] are implemented by the configurable per-format structs, while
[`GraphRead`]/[`GraphWrite`] live on the graph itself and pick the format from a [`FileFormat`].

```
use ubridges::{prelude::*, io::*};

let graph = AdjList::from_edges(3, [(0, 1), (1, 2)]);

let mut buffer = Vec::new();
graph.try_write_to_writer(&mut buffer, FileFormat::Text).unwrap();
assert_eq!(String::from_utf8(buffer.clone()).unwrap(), "3\n1\n0 2\n1\n");

let read = AdjList::try_from_reader(buffer.as_slice(), FileFormat::Text).unwrap();
assert_eq!(read, graph);
```
*/

/// Shorthand for creating a new IO-error
macro_rules! io_error {
    ($kind: expr, $info: expr) => {
        std::io::Error::new($kind, $info)
    };
}

/// Shorthand for returning `Err(std::io::Error)` early when a condition fails
macro_rules! raise_error_unless {
    ($cond : expr, $kind : expr, $info : expr) => {
        if !($cond) {
            return Err(io_error!($kind, $info));
        }
    };
}

/// Tries to parse the next value in an iterator and returns early if it fails
macro_rules! parse_next_value {
    ($iterator : expr, $name : expr) => {{
        let Some(next) = $iterator.next() else {
            return Err(io_error!(
                ErrorKind::InvalidData,
                format!("Premature end of line when parsing {}.", $name)
            ));
        };

        match next.parse() {
            Ok(value) => value,
            Err(_) => {
                return Err(io_error!(
                    ErrorKind::InvalidData,
                    format!("Invalid value `{next}` found. Cannot parse {}.", $name)
                ))
            }
        }
    }};
}

pub mod binary;
pub mod text;

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, ErrorKind, Result, Write},
    path::Path,
    str::FromStr,
};

use crate::prelude::*;

pub use binary::*;
pub use text::*;

/// The on-disk representations understood by [`GraphRead`] and [`GraphWrite`]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FileFormat {
    /// Line-based neighbor lists
    Text,
    /// Little-endian `i32` neighbor lists
    Binary,
}

impl FromStr for FileFormat {
    type Err = std::io::Error;

    /// Accepts `text`/`txt` and `binary`/`bin`, ignoring case
    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(FileFormat::Text),
            "binary" | "bin" => Ok(FileFormat::Binary),
            _ => Err(io_error!(
                ErrorKind::InvalidInput,
                format!("Unknown FileFormat: {s}")
            )),
        }
    }
}

/// A configured reader for one format
pub trait GraphReader<G> {
    /// Parses a complete graph from `reader`.
    ///
    /// # Errors
    /// Fails on IO errors and on any input that does not describe a valid symmetric adjacency
    /// in this format.
    fn try_read_graph<R>(&self, reader: R) -> Result<G>
    where
        R: BufRead;

    /// Like [`GraphReader::try_read_graph`], reading from the file at `path`
    fn try_read_graph_file<P>(&self, path: P) -> Result<G>
    where
        P: AsRef<Path>,
    {
        self.try_read_graph(BufReader::new(File::open(path)?))
    }
}

/// A configured writer for one format
pub trait GraphWriter<G> {
    /// Serializes `graph` into `writer`.
    ///
    /// # Errors
    /// Fails on IO errors or if the graph cannot be expressed in this format.
    fn try_write_graph<W>(&self, graph: &G, writer: W) -> Result<()>
    where
        W: Write;

    /// Like [`GraphWriter::try_write_graph`], creating (or truncating) the file at `path`
    fn try_write_graph_file<P>(&self, graph: &G, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        self.try_write_graph(graph, BufWriter::new(File::create(path)?))
    }
}

/// Reads graphs in a format chosen at runtime, using the default reader of that format
pub trait GraphRead: Sized {
    /// Parses a graph in `format` from `reader`.
    ///
    /// # Errors
    /// See [`GraphReader::try_read_graph`].
    fn try_from_reader<R>(reader: R, format: FileFormat) -> Result<Self>
    where
        R: BufRead;

    /// Parses a graph in `format` from the file at `path`
    fn try_from_file<P>(path: P, format: FileFormat) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        Self::try_from_reader(BufReader::new(File::open(path)?), format)
    }
}

impl<G> GraphRead for G
where
    G: TextRead + BinaryRead,
{
    fn try_from_reader<R>(reader: R, format: FileFormat) -> Result<Self>
    where
        R: BufRead,
    {
        match format {
            FileFormat::Text => Self::try_read_text(reader),
            FileFormat::Binary => Self::try_read_binary(reader),
        }
    }
}

/// Writes graphs in a format chosen at runtime
pub trait GraphWrite {
    /// Serializes the graph in `format` into `writer`.
    ///
    /// # Errors
    /// See [`GraphWriter::try_write_graph`].
    fn try_write_to_writer<W>(&self, writer: W, format: FileFormat) -> Result<()>
    where
        W: Write;

    /// Serializes the graph in `format` into the file at `path`
    fn try_write_to_file<P>(&self, path: P, format: FileFormat) -> Result<()>
    where
        P: AsRef<Path>,
    {
        self.try_write_to_writer(BufWriter::new(File::create(path)?), format)
    }
}

impl<G> GraphWrite for G
where
    G: TextWrite + BinaryWrite,
{
    fn try_write_to_writer<W>(&self, writer: W, format: FileFormat) -> Result<()>
    where
        W: Write,
    {
        match format {
            FileFormat::Text => self.try_write_text(writer),
            FileFormat::Binary => self.try_write_binary(writer),
        }
    }
}

/// Checks a vertex count read from an input against the limit of the reader
fn checked_vertex_count(n: i64, max_nodes: NumNodes) -> Result<NumNodes> {
    raise_error_unless!(
        n >= 0,
        ErrorKind::InvalidData,
        format!("Negative vertex count {n}")
    );
    raise_error_unless!(
        n <= max_nodes as i64,
        ErrorKind::InvalidData,
        format!("Vertex count {n} exceeds the limit of {max_nodes}")
    );
    Ok(n as NumNodes)
}

/// Checks a neighbor id read from an input
fn checked_neighbor(v: i64, u: Node, n: NumNodes) -> Result<Node> {
    raise_error_unless!(
        (0..n as i64).contains(&v),
        ErrorKind::InvalidData,
        format!("Neighbor {v} of vertex {u} is out of range 0..{n}")
    );
    Ok(v as Node)
}

/// Creates the graph once the neighbors of every vertex have been read, so that the declared
/// vertex count alone never causes an allocation
fn graph_from_neighborhoods<G>(neighborhoods: Vec<Vec<Node>>) -> G
where
    G: GraphNew + GraphEdgeEditing,
{
    let mut graph = G::new(neighborhoods.len() as NumNodes);
    for (u, neighbors) in neighborhoods.into_iter().enumerate() {
        for v in neighbors {
            graph.push_edge(u as Node, v);
        }
    }
    graph
}

/// Final validation shared by all readers
fn ensure_symmetric<G: AdjacencyList>(graph: &G) -> Result<()> {
    raise_error_unless!(
        graph.is_symmetric(),
        ErrorKind::InvalidData,
        "Adjacency is not symmetric"
    );
    Ok(())
}
