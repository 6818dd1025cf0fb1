use crate::error::BundleError;
use crate::graph::edges_from_graph;
use crate::io::read_json_file;
use crate::params::BundleParams;
use crate::types::Edge;
use nalgebra::Point2;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Config of the `bundle_demo` tool.
#[derive(Debug, Deserialize)]
pub struct BundleToolConfig {
    /// JSON file holding an [`EdgeInput`].
    pub input: PathBuf,
    #[serde(default)]
    pub params: BundleParams,
    pub output: BundleOutputConfig,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleOutputConfig {
    /// Destination of the bundled rows.
    pub rows_json: PathBuf,
    /// Optional destination of the run report.
    #[serde(default)]
    pub report_json: Option<PathBuf>,
}

/// Edges to bundle, either as explicit segments or as a node-link graph.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum EdgeInput {
    /// `{"edges": [[x1, y1, x2, y2], ...], "weights": [...]}`
    Edges {
        edges: Vec<Edge>,
        #[serde(default)]
        weights: Option<Vec<f64>>,
    },
    /// `{"nodes": [[x, y], ...], "links": [[a, b], ...], "weights": [...]}`
    Graph {
        nodes: Vec<[f64; 2]>,
        links: Vec<[usize; 2]>,
        #[serde(default)]
        weights: Option<Vec<f64>>,
    },
}

impl EdgeInput {
    /// Resolves the input to an edge list plus optional per-edge weights.
    pub fn into_edges(self) -> Result<(Vec<Edge>, Option<Vec<f64>>), BundleError> {
        match self {
            EdgeInput::Edges { edges, weights } => Ok((edges, weights)),
            EdgeInput::Graph {
                nodes,
                links,
                weights,
            } => {
                let nodes: Vec<Point2<f64>> =
                    nodes.iter().map(|&[x, y]| Point2::new(x, y)).collect();
                let links: Vec<(usize, usize)> = links.iter().map(|&[a, b]| (a, b)).collect();
                Ok((edges_from_graph(&nodes, &links)?, weights))
            }
        }
    }
}

pub fn load_config(path: &Path) -> Result<BundleToolConfig, String> {
    read_json_file(path, "config")
}

pub fn load_input(path: &Path) -> Result<EdgeInput, String> {
    read_json_file(path, "input")
}
