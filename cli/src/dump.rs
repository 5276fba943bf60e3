use std::io::Write;

use anyhow::Context;
use tfnorm_tensorflow::prelude::*;

use crate::display_params::DisplayParams;

/// Writes the parameters of every selected node.
///
/// A node the accessors cannot be called on (short or negative geometry
/// lists) is reported on its own and does not stop the dump.
pub fn handle(graph: &GraphDef, params: &DisplayParams, out: &mut dyn Write) -> TfResult<()> {
    let mut dumped = vec![];
    for (node, result) in tensorflow().node_params(graph, |n| params.filter(n)) {
        match result {
            Ok(p) if params.json => dumped.push(p),
            Ok(p) => {
                writeln!(out, "{}", p)?;
                dumped.push(p);
            }
            Err(e) => {
                warn!("Skipping {} ({}): {}", node.name, node.op, e);
                if !params.json {
                    writeln!(out, "{} ({}) error: {}", node.name, node.op, e)?;
                }
            }
        }
    }
    debug!("{} of {} nodes dumped", dumped.len(), graph.node.len());
    if params.json {
        serde_json::to_writer_pretty(&mut *out, &dumped).context("Serializing node parameters")?;
        writeln!(out)?;
    }
    Ok(())
}
