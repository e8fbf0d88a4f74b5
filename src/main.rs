//! Propgraph demo: builds a small sample graph and prints it

use anyhow::{Context, Result};
use clap::Parser;
use propgraph::export::{GraphmlWriter, GraphvizWriter};
use propgraph::graph::{Edge, Graph, GraphElement, Vertex, VertexId};
use propgraph::ExportConfig;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "propgraph", version, about = "Directed property graph demo")]
struct Cli {
    /// Output format
    #[arg(long, default_value = "summary")]
    format: OutputFormat,

    /// Exporter settings (YAML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write to a file instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Clone, clap::ValueEnum)]
enum OutputFormat {
    Summary,
    Dot,
    Graphml,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => ExportConfig::from_file(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => ExportConfig::default(),
    };

    let graph = sample_graph()?;
    info!(
        "Built sample graph with {} vertices and {} edges",
        graph.num_vertices(),
        graph.num_edges()
    );

    let mut sink: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("failed to create {}", path.display()))?,
        )),
        None => Box::new(io::stdout().lock()),
    };

    match cli.format {
        OutputFormat::Summary => {
            for vertex in graph.vertices() {
                vertex.print_summary(&mut sink)?;
                writeln!(sink)?;
            }
            for (_, edge) in graph.edges() {
                edge.print_summary(&mut sink)?;
                writeln!(sink)?;
            }
            graph.print_summary(&mut sink)?;
            writeln!(sink)?;
        }
        OutputFormat::Dot => {
            GraphvizWriter::new(&config.dot)
                .with_vertex_labeler(|v| match v.property::<String>("name") {
                    Ok(name) => name,
                    Err(_) => v.id().to_string(),
                })
                .with_edge_labeler(|e| e.property::<String>("rel").unwrap_or_default())
                .write(&graph, &mut sink)?;
        }
        OutputFormat::Graphml => {
            GraphmlWriter::new(&config.graphml).write(&graph, &mut sink)?;
        }
    }

    sink.flush()?;
    Ok(())
}

fn sample_graph() -> Result<Graph> {
    let mut graph = Graph::new();
    graph.set_property("title", "sample");

    let human = graph.add_vertex(
        Vertex::new(VertexId::new(1))
            .with_property("name", "human")
            .with_property("weight", 0.8)
            .with_property("type", "AND"),
    )?;
    let primate = graph.add_vertex(Vertex::new(VertexId::new(2)))?;

    let edge = graph.add_edge(Edge::new(human, primate))?;
    graph.get_edge_mut(edge)?.set_property("rel", "is_a");

    Ok(graph)
}
