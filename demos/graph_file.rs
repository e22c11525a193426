//! Build a small route graph, store it in both file forms, load it back and walk it.

use anyhow::{Context, Result};
use linkgraph::graph::{depth_first, has_path};
use linkgraph::persist;
use linkgraph::LinkedGraph;

fn main() -> Result<()> {
    println!("linkgraph File Round Trip");
    println!("=========================");

    let mut graph = LinkedGraph::new();
    for id in [1, 2, 3] {
        graph.insert_vertex(id)?;
    }
    graph.insert_edge(1, 2, 7)?;
    graph.insert_edge(1, 3, 9)?;
    graph.insert_edge(2, 4, 15)?; // creates vertex 4
    graph.insert_edge(3, 4, 11)?;
    graph.insert_edge(4, 5, 6)?; // creates vertex 5

    println!("Built: {graph:?}");
    println!(
        "  {} vertices, {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );

    let dir = std::env::temp_dir();
    let text_path = dir.join("linkgraph-demo.txt");
    let json_path = dir.join("linkgraph-demo.json");

    persist::export_data(&text_path, &graph)
        .with_context(|| format!("exporting to {}", text_path.display()))?;
    println!("\nText form ({}):", text_path.display());
    print!("{}", std::fs::read_to_string(&text_path)?);

    let mut imported = persist::import_data(&text_path)?;
    println!("Imported: {imported:?}");

    persist::save_graph(&json_path, &graph)
        .with_context(|| format!("saving to {}", json_path.display()))?;
    let opened = persist::open_graph(&json_path)?;
    println!("Opened snapshot: {opened:?}");

    println!("\nDepth-first from 1: {:?}", depth_first(&mut imported, 1)?);
    println!("5 reaches 1? {}", has_path(&mut imported, 5, 1)?);

    let released = imported.delete_vertex(4)?;
    println!("\nDeleted vertex 4, releasing {released} edges");
    println!("Now: {imported:?}");
    println!("Depth-first from 1: {:?}", depth_first(&mut imported, 1)?);

    std::fs::remove_file(&text_path)?;
    std::fs::remove_file(&json_path)?;
    Ok(())
}
