use super::error::{self, Result};
use crate::{
    graph::{Adjacency, Graph},
    types::{VId, Weight},
};
use itertools::Itertools;
use log::{debug, info};
use pest::{
    error::{Error, ErrorVariant},
    iterators::Pair,
    Parser,
};
use pest_derive::Parser;
use std::path::Path;

pub type TopologyRule = Rule;

#[derive(Parser)]
#[grammar = "loader/grammar.pest"]
struct TopologyParser;

/// Parse a whole topology description.
///
/// Blank lines are skipped. A vertex that appears on several lines keeps the
/// adjacency of the last one.
pub fn parse(input: &str) -> Result<Graph> {
    let mut graph = Graph::new();
    for pair in TopologyParser::parse(Rule::topology, input)?.flat_map(|pair| pair.into_inner()) {
        match pair.as_rule() {
            Rule::line => {
                let (vid, adjacency) = parse_line(pair)?;
                if graph.contains_vertex(&vid) {
                    debug!("vertex {} redefined, keeping the last definition", vid);
                }
                graph.insert_vertex(vid, adjacency);
            }
            Rule::EOI => {}
            _ => unreachable!(),
        }
    }
    Ok(graph)
}

/// Read and parse the topology file at `path`.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Graph> {
    let path = path.as_ref();
    info!("loading {}...", path.display());
    let input = std::fs::read_to_string(path).map_err(|source| error::Err::Io {
        path: path.to_owned(),
        source,
    })?;
    let graph = parse(&input).map_err(|e| match e {
        error::Err::Syntax(e) => error::Err::Syntax(e.with_path(&path.to_string_lossy())),
        e => e,
    })?;
    info!(
        "loaded {} vertices and {} edges",
        graph.len(),
        graph.num_edges()
    );
    Ok(graph)
}

fn parse_line(pair: Pair<Rule>) -> Result<(VId, Adjacency)> {
    let mut pairs = pair.into_inner();
    let vid = match pairs.next() {
        Some(name) if name.as_rule() == Rule::name => name.as_str().to_owned(),
        _ => unreachable!(),
    };
    let mut adjacency = Adjacency::new();
    for (dst, weight) in pairs.tuples() {
        match (dst.as_rule(), weight.as_rule()) {
            (Rule::name, Rule::weight) => {
                adjacency.add_edge(dst.as_str().to_owned(), parse_weight(weight)?);
            }
            _ => unreachable!(),
        }
    }
    Ok((vid, adjacency))
}

fn parse_weight(pair: Pair<Rule>) -> Result<Weight> {
    match pair.as_str().parse::<Weight>() {
        Ok(w) if w.is_finite() => Ok(w),
        _ => Err(error::Err::Syntax(Error::new_from_span(
            ErrorVariant::CustomError {
                message: String::from("weight out of range"),
            },
            pair.as_span(),
        ))),
    }
}
