//! Edge-list file loading

use std::fs::File;
use std::io::{BufRead, BufReader};

use anyhow::{Context, Result};

use crate::error::ClusterError;
use crate::graph::Graph;

/// Load an undirected unit-capacity graph from a text edge list.
///
/// One edge per line, two integer node ids separated by whitespace or
/// a comma. Blank lines and `#` comment lines are skipped; fields
/// after the first two (edge attributes in some exports) are ignored.
/// Duplicate edges are idempotent.
pub fn load_edge_list(path: &str) -> Result<Graph> {
    log::info!("Reading edge list: {}", path);

    let file = File::open(path).with_context(|| format!("failed to open {path}"))?;
    let graph = parse_edge_list(BufReader::new(file))?;

    log::info!(
        "Loaded graph with {} nodes and {} edges",
        graph.node_count(),
        graph.edge_count()
    );

    Ok(graph)
}

/// Parse an edge list from any buffered reader
pub fn parse_edge_list<R: BufRead>(reader: R) -> Result<Graph> {
    let mut graph = Graph::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("failed to read line {}", index + 1))?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let mut fields = trimmed
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|field| !field.is_empty());
        let u = parse_node(fields.next(), index + 1)?;
        let v = parse_node(fields.next(), index + 1)?;

        graph.add_edge(u, v);
    }

    Ok(graph)
}

fn parse_node(field: Option<&str>, line: usize) -> Result<u32, ClusterError> {
    let field = field.ok_or_else(|| ClusterError::InvalidInput {
        line,
        reason: "expected two node ids".to_string(),
    })?;
    field.parse().map_err(|_| ClusterError::InvalidInput {
        line,
        reason: format!("not an integer node id: {field:?}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_whitespace_and_comma_separated_edges() {
        let input = "1 2\n2,3\n3\t1\n";
        let graph = parse_edge_list(input.as_bytes()).unwrap();
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn skips_comments_and_blank_lines() {
        let input = "# coauthor graph\n\n1 2\n  \n# trailer\n2 3\n";
        let graph = parse_edge_list(input.as_bytes()).unwrap();
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn ignores_trailing_attribute_fields() {
        let input = "1 2 {'weight': 3}\n";
        let graph = parse_edge_list(input.as_bytes()).unwrap();
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.capacity(1, 2), Some(1));
    }

    #[test]
    fn duplicate_lines_are_idempotent() {
        let input = "1 2\n2 1\n1 2\n";
        let graph = parse_edge_list(input.as_bytes()).unwrap();
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn non_numeric_id_reports_the_line() {
        let input = "1 2\nfoo 3\n";
        let err = parse_edge_list(input.as_bytes()).unwrap_err();
        let cluster_err = err.downcast_ref::<ClusterError>().unwrap();
        assert!(matches!(
            cluster_err,
            ClusterError::InvalidInput { line: 2, .. }
        ));
    }

    #[test]
    fn missing_second_id_is_invalid() {
        let err = parse_edge_list("42\n".as_bytes()).unwrap_err();
        assert!(err.downcast_ref::<ClusterError>().is_some());
    }
}
