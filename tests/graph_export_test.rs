use propgraph::export::{GraphmlWriter, GraphvizWriter};
use propgraph::graph::{Edge, Graph, GraphElement, PropertyValue, Vertex, VertexId};
use propgraph::ExportConfig;
use std::fs;
use std::io::Write;
use tempfile::TempDir;

fn vid(id: u64) -> VertexId {
    VertexId::new(id)
}

fn sample_graph() -> Graph {
    let mut graph = Graph::new();
    graph
        .add_vertex(
            Vertex::new(vid(1))
                .with_property("name", "human")
                .with_property("weight", 0.8)
                .with_property("type", "AND"),
        )
        .unwrap();
    graph.add_vertex(Vertex::new(vid(2))).unwrap();
    graph.add_edge(Edge::new(vid(1), vid(2))).unwrap();
    graph
}

#[test]
fn test_sample_graph_degrees() {
    let graph = sample_graph();

    assert_eq!(graph.get_in_degree(vid(1)).unwrap(), 0);
    assert_eq!(graph.get_out_degree(vid(1)).unwrap(), 1);
    assert_eq!(graph.get_in_degree(vid(2)).unwrap(), 1);
    assert_eq!(graph.get_out_degree(vid(2)).unwrap(), 0);
}

#[test]
fn test_graphviz_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("sample.dot");
    let graph = sample_graph();

    let mut file = fs::File::create(&path).unwrap();
    graph
        .write_graphviz(
            &mut file,
            Some(&|v: &Vertex| v.id().to_string()),
            Some(&|e: &Edge| format!("{} to {}", e.source(), e.target())),
        )
        .unwrap();
    file.flush().unwrap();
    drop(file);

    let contents = fs::read_to_string(&path).unwrap();
    assert_eq!(
        contents,
        "digraph g {\n1[label=\"1\"];\n1 -> 2 [ label= \"1 to 2\"];\n2[label=\"2\"];\n}\n"
    );
}

#[test]
fn test_graphml_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("sample.graphml");
    let graph = sample_graph();

    let mut file = fs::File::create(&path).unwrap();
    graph.write_graphml(&mut file).unwrap();
    drop(file);

    let contents = fs::read_to_string(&path).unwrap();
    assert!(contents.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<graphml "));
    assert!(contents.contains("xmlns=\"http://graphml.graphdrawing.org/xmlns\""));
    assert!(contents.contains("<key id=\"nameV\" for=\"node\" attr.name=\"name\" attr.type=\"string\"/>"));
    assert!(contents.contains("<graph id=\"G\" edgedefault=\"directed\">"));
    assert_eq!(contents.matches("<node ").count(), 2);
    assert_eq!(contents.matches("<edge ").count(), 1);
    assert!(contents.contains("<edge source=\"1\" target=\"2\"/>"));
    assert!(contents.trim_end().ends_with("</graphml>"));
}

#[test]
fn test_exporters_with_yaml_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("export.yaml");
    fs::write(
        &config_path,
        "dot:\n  graph_name: taxonomy\ngraphml:\n  graph_id: T\n  indent: 4\n",
    )
    .unwrap();

    let config = ExportConfig::from_file(&config_path).unwrap();
    let graph = sample_graph();

    let dot = GraphvizWriter::new(&config.dot).render(&graph).unwrap();
    assert_eq!(dot, "digraph taxonomy {\n}\n");

    let xml = GraphmlWriter::new(&config.graphml).render(&graph).unwrap();
    assert!(xml.contains("\n    <graph id=\"T\" edgedefault=\"directed\">\n"));
    assert!(xml.contains("\n        <node id=\"2\"/>\n"));
}

#[test]
fn test_export_reflects_later_mutation() {
    let mut graph = sample_graph();
    let edge_id = graph.out_edge_ids(vid(1)).unwrap()[0];
    graph.get_edge_mut(edge_id).unwrap().set_property("rel", "is_a");

    let config = ExportConfig::default();
    let dot = GraphvizWriter::new(&config.dot)
        .with_edge_labeler(|e| e.property::<String>("rel").unwrap_or_default())
        .render(&graph)
        .unwrap();
    assert!(dot.contains("1 -> 2 [ label= \"is_a\"];"));

    let xml = GraphmlWriter::new(&config.graphml).render(&graph).unwrap();
    assert!(xml.contains("<key id=\"relE\" for=\"edge\""));
    assert!(xml.contains("<data key=\"relE\">is_a</data>"));
}

#[test]
fn test_property_value_serde_shape() {
    let value = PropertyValue::from("human");
    assert_eq!(serde_json::to_string(&value).unwrap(), r#"{"String":"human"}"#);

    let value = PropertyValue::List(vec![PropertyValue::Integer(1), PropertyValue::Boolean(true)]);
    let json = serde_json::to_string(&value).unwrap();
    assert_eq!(json, r#"{"List":[{"Integer":1},{"Boolean":true}]}"#);
    let back: PropertyValue = serde_json::from_str(&json).unwrap();
    assert_eq!(back, value);
}

#[test]
fn test_vertex_serde_shape() {
    let vertex = Vertex::new(vid(1))
        .with_property("name", "human")
        .with_property("weight", 0.8);
    let json = serde_json::to_value(&vertex).unwrap();

    assert_eq!(json["id"], 1);
    assert_eq!(json["properties"]["name"]["String"], "human");
    assert_eq!(json["properties"]["weight"]["Float"], 0.8);
}
