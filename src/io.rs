use crate::error::{ConnectivityError, Result};
use crate::graph::{BaseGraph, LiveGraph, MutableGraph};
use fxhash::FxHashSet;
use std::cmp::{max, min};
use std::convert::TryFrom;
use std::fs::File;
use std::io::{BufRead, BufWriter, Write};
use std::path::Path;

/// Writes one `"{v}: {neighbors}"` line per vertex in ascending order, with
/// neighbors in adjacency order separated by single spaces.
pub struct AdjacencyWriter<'a, G: BaseGraph, W: Write> {
    graph: &'a G,
    writer: W,
}

impl<'a, G: BaseGraph, W: Write> AdjacencyWriter<'a, G, W> {
    pub fn new(graph: &'a G, writer: W) -> Self {
        Self { graph, writer }
    }

    pub fn output(mut self) -> std::io::Result<()> {
        for v in self.graph.vertices() {
            let neighbors: Vec<String> = self
                .graph
                .neighborhood(v)
                .map(|u| u.to_string())
                .collect();
            writeln!(self.writer, "{}: {}", v, neighbors.join(" "))?;
        }
        self.writer.flush()
    }
}

pub fn write_adjacency_file<G: BaseGraph>(graph: &G, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    AdjacencyWriter::new(graph, BufWriter::new(file)).output()?;
    Ok(())
}

fn parse_error(line: usize, reason: impl Into<String>) -> ConnectivityError {
    ConnectivityError::Parse {
        line,
        reason: reason.into(),
    }
}

pub fn adjacency_line(line: &str, number: usize) -> Result<(usize, Vec<usize>)> {
    let mut parts = line.splitn(2, ':');
    let vertex = parts
        .next()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| parse_error(number, "missing vertex"))?;
    let rest = parts
        .next()
        .ok_or_else(|| parse_error(number, "missing ':'"))?;
    let vertex = vertex
        .parse::<usize>()
        .map_err(|e| parse_error(number, format!("vertex `{}`: {}", vertex, e)))?;
    let neighbors = rest
        .split_whitespace()
        .map(|s| {
            s.parse::<usize>()
                .map_err(|e| parse_error(number, format!("neighbor `{}`: {}", s, e)))
        })
        .collect::<Result<Vec<usize>>>()?;
    Ok((vertex, neighbors))
}

/// Reads the format produced by [`AdjacencyWriter`]. An edge listed at one or
/// both of its endpoints is added once; repeated pairs collapse.
pub struct AdjacencyRead<T: BufRead>(pub T);

impl<T: BufRead> TryFrom<AdjacencyRead<T>> for LiveGraph {
    type Error = ConnectivityError;

    fn try_from(reader: AdjacencyRead<T>) -> Result<Self> {
        let reader = reader.0;
        let mut rows = Vec::new();
        for (i, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            rows.push(adjacency_line(&line, i + 1)?);
        }

        let order = rows.iter().map(|(v, _)| v + 1).max().unwrap_or(0);
        let mut graph = LiveGraph::with_order(order);
        let mut seen: FxHashSet<(usize, usize)> = FxHashSet::default();
        for (v, neighbors) in rows {
            for u in neighbors {
                if u >= order {
                    return Err(ConnectivityError::VertexOutOfRange { vertex: u, order });
                }
                if u == v {
                    return Err(ConnectivityError::SelfLoop { vertex: v });
                }
                if seen.insert((min(u, v), max(u, v))) {
                    graph.add_edge(v, u);
                }
            }
        }
        Ok(graph)
    }
}
