//! # DOT / Graphviz renderer
//!
//! ## Description
//! A write-only renderer: it consumes a graph's adjacency map and
//! vertex/edge properties and emits a `strict graph`/`strict digraph`
//! block through a [`BufWriter<W>`] over anything implementing
//! [`std::io::Write`]. There is no reader: this format is never parsed
//! back into a graph.

use std::fmt::Debug;
use std::fs::File;
use std::hash::Hash;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::graph::ImmutableGraph;
use crate::properties::{EdgeProperties, VertexProperties};

/// # Write DOT to a sink
///
/// ## Description
/// Renders `graph` as a `strict graph`/`strict digraph` block into
/// `writer`. `name` becomes the optional graph identifier right after the
/// `graph`/`digraph` keyword. Vertices and edges are both emitted with
/// their full attribute set and a trailing `weight=<n>`; isolated
/// vertices still get a standalone statement since the adjacency map
/// carries an entry for every vertex regardless of degree.
pub fn write_dot<T, K, G, W>(graph: &G, name: Option<&str>, writer: &mut W) -> io::Result<()>
where
    T: Clone,
    K: Clone + Eq + Hash + Debug + ToString,
    G: ImmutableGraph<T, K> + ?Sized,
    W: Write,
{
    let edge_operator = if graph.traits().is_directed() { "->" } else { "--" };
    let keyword = if graph.traits().is_directed() { "digraph" } else { "graph" };

    write!(writer, "strict {}", keyword)?;
    if let Some(name) = name {
        write!(writer, " {}", quote(name))?;
    }
    writeln!(writer, " {{")?;

    let adjacency = graph.adjacency_map();
    let mut vertices: Vec<K> = adjacency.keys().cloned().collect();
    vertices.sort_by_key(|key| key.to_string());

    for key in &vertices {
        let Ok((_, properties)) = graph.vertex_with_properties(key) else { continue };
        writeln!(writer, "    {} {};", quote(&key.to_string()), vertex_attributes(&properties))?;
    }

    let mut emitted: std::collections::HashSet<(String, String)> = std::collections::HashSet::new();
    for key in &vertices {
        let Some(neighbors) = adjacency.get(key) else { continue };
        let mut targets: Vec<&K> = neighbors.keys().collect();
        targets.sort_by_key(|target| target.to_string());
        for target in targets {
            if !graph.traits().is_directed() {
                let pair = (key.to_string(), target.to_string());
                let reverse = (target.to_string(), key.to_string());
                if emitted.contains(&reverse) {
                    continue;
                }
                emitted.insert(pair);
            }
            let properties = &neighbors[target];
            writeln!(
                writer,
                "    {} {} {} {};",
                quote(&key.to_string()),
                edge_operator,
                quote(&target.to_string()),
                edge_attributes(properties),
            )?;
        }
    }

    writeln!(writer, "}}")
}

/// # Write DOT to a file
///
/// ## Description
/// Convenience wrapper around [`write_dot`]: creates (or truncates)
/// `directory.join(filename)` and renders into it through a
/// [`BufWriter`]. Meant for callers with no writer sink of their own — a
/// supplied writer always takes precedence over a directory/filename pair.
pub fn write_dot_to_file<T, K, G>(graph: &G, name: Option<&str>, directory: &Path, filename: &str) -> io::Result<()>
where
    T: Clone,
    K: Clone + Eq + Hash + Debug + ToString,
    G: ImmutableGraph<T, K> + ?Sized,
{
    let file = File::create(directory.join(filename))?;
    let mut buffer = BufWriter::new(file);
    write_dot(graph, name, &mut buffer)?;
    buffer.flush()
}

fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
}

fn vertex_attributes(properties: &VertexProperties) -> String {
    let mut pairs: Vec<String> = properties
        .attributes
        .iter()
        .map(|(key, value)| format!("{}={}", key, quote(value)))
        .collect();
    pairs.sort();
    pairs.push(format!("weight={}", properties.weight));
    format!("[ {} ]", pairs.join(", "))
}

fn edge_attributes(properties: &EdgeProperties) -> String {
    let mut pairs: Vec<String> = properties
        .attributes
        .iter()
        .map(|(key, value)| format!("{}={}", key, quote(value)))
        .collect();
    pairs.sort();
    pairs.push(format!("weight={}", properties.weight));
    format!("[ {} ]", pairs.join(", "))
}



#[cfg(test)]
mod tests {
    use super::*;
    use crate::directed::DirectedGraph;
    use crate::graph::MutableGraph;
    use crate::properties::{edge_weight, vertex_attribute};
    use crate::traits_config::{directed, Traits};
    use std::sync::Arc;

    #[test]
    fn directed_graph_uses_arrow_operator() {
        let mut g = DirectedGraph::new(Arc::new(|v: &i32| *v), Traits::from_options(vec![directed()]));
        g.add_vertex(1, vec![]).unwrap();
        g.add_vertex(2, vec![]).unwrap();
        g.add_edge(1, 2, vec![edge_weight(5)]).unwrap();

        let mut out = Vec::new();
        write_dot(&g, Some("example"), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("strict digraph \"example\" {"));
        assert!(text.contains("\"1\" -> \"2\""));
        assert!(text.contains("weight=5"));
    }

    #[test]
    fn undirected_graph_emits_each_edge_once() {
        use crate::undirected::UndirectedGraph;
        let mut g: UndirectedGraph<i32, i32> = UndirectedGraph::new(Arc::new(|v: &i32| *v), Traits::default());
        g.add_vertex(1, vec![]).unwrap();
        g.add_vertex(2, vec![]).unwrap();
        g.add_edge(1, 2, vec![]).unwrap();

        let mut out = Vec::new();
        write_dot(&g, None, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("--").count(), 1);
        assert!(text.starts_with("strict graph {"));
    }

    #[test]
    fn isolated_vertex_still_gets_a_statement() {
        let mut g = DirectedGraph::new(Arc::new(|v: &i32| *v), Traits::from_options(vec![directed()]));
        g.add_vertex(1, vec![vertex_attribute("color", "red")]).unwrap();

        let mut out = Vec::new();
        write_dot(&g, None, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("\"1\" [ color=\"red\", weight=0 ];"));
    }
}
