use std::{fs, io, path};

use prost::Message;

use crate::internal::*;
use crate::params::NodeParams;
use crate::tfpb::tensorflow::{GraphDef, NodeDef};

/// Entry point for reading TensorFlow graphs.
#[derive(Clone, Debug, Default)]
pub struct Tensorflow;

impl Tensorflow {
    /// Load a TensorFlow protobuf graph def from a reader.
    pub fn graph_for_read(&self, r: &mut dyn io::Read) -> TfResult<GraphDef> {
        let mut buf = vec![];
        r.read_to_end(&mut buf)?;
        let graph = GraphDef::decode(buf.as_slice())
            .map_err(|e| format_err!("Prost/Protobuf decoding error : {:?}", e))?;
        debug!(
            "Decoded GraphDef: {} nodes, producer {:?}",
            graph.node.len(),
            graph.versions.as_ref().map(|v| v.producer)
        );
        Ok(graph)
    }

    /// Load a TensorFlow protobuf graph def from a path.
    pub fn graph_for_path<P: AsRef<path::Path>>(&self, p: P) -> TfResult<GraphDef> {
        let p = p.as_ref();
        let mut file = fs::File::open(p).with_context(|| format!("Could not open {:?}", p))?;
        self.graph_for_read(&mut file).with_context(|| format!("While loading {:?}", p))
    }

    /// Normalized parameters of the nodes accepted by `filter`, in graph order.
    ///
    /// A node that cannot be normalized carries its own error and does not
    /// hide the others.
    pub fn node_params<'g, F>(
        &self,
        graph: &'g GraphDef,
        filter: F,
    ) -> impl Iterator<Item = (&'g NodeDef, TfResult<NodeParams>)>
    where
        F: Fn(&NodeDef) -> bool,
    {
        graph.node.iter().filter(move |n| filter(*n)).map(|n| {
            trace!("Normalizing {} ({})", n.name, n.op);
            (n, NodeParams::for_node(n))
        })
    }
}
