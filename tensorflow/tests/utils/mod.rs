#![allow(dead_code)]

use tfnorm_tensorflow::prelude::*;

pub fn setup_test_logger() {
    let _ = env_logger::Builder::from_env("TFNORM_LOG").try_init();
}

pub fn spatial_op(op: &str, attr: &str, values: Vec<i64>, format: Option<&str>) -> NodeDef {
    let node = tfpb::node().name(op.to_lowercase()).op(op).input("input").attr(attr, values);
    match format {
        Some(fmt) => node.attr("data_format", fmt),
        None => node,
    }
}

/// Encodes a graph made of `nodes` and decodes it back, as a loader would.
pub fn through_the_wire(nodes: Vec<NodeDef>) -> TfResult<GraphDef> {
    setup_test_logger();
    let graph = nodes.into_iter().fold(tfpb::graph(), |g, n| g.node(n));
    let bytes = graph.write_to_bytes()?;
    tensorflow().graph_for_read(&mut &*bytes)
}
