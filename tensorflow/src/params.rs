use std::fmt;

use serde::Serialize;

use crate::internal::*;
use crate::ops::nn::{ActivationNeuron, DataFormat, Spatial};
use crate::ops::shape::KernelShape;
use crate::tfpb::tensorflow::NodeDef;

const GEOMETRY_ATTRS: [&str; 3] = ["strides", "dilations", "ksize"];

/// Everything the accessors report for one node, gathered in one go.
///
/// No defaults are substituted: a field is `None` exactly when its accessor
/// says so.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NodeParams {
    pub name: String,
    pub op: String,
    pub data_format: Option<DataFormat>,
    pub strides: Option<Spatial>,
    pub dilations: Option<Spatial>,
    pub ksize: Option<Spatial>,
    pub shape: Option<Vec<i64>>,
    pub is_bias: bool,
    pub kernel: Option<KernelShape>,
    pub value_bytes: Option<usize>,
    pub value_scalar: Option<f32>,
    pub activation: ActivationNeuron,
}

impl NodeParams {
    /// Fails instead of panicking when a geometry list does not have the
    /// 4 non-negative entries the accessors rely on.
    pub fn for_node(node: &NodeDef) -> TfResult<NodeParams> {
        for attr in GEOMETRY_ATTRS {
            if let Some(values) = node.get_attr_opt_list_int(attr) {
                if values.len() < 4 || values.iter().any(|&v| v < 0) {
                    bail!("Attribute '{}' expects 4 non-negative ints, found {:?}", attr, values)
                }
            }
        }
        let shape = node.shape();
        let kernel = shape
            .filter(|s| s.dim.len() == 4 && s.dim.iter().all(|d| d.size >= 0))
            .map(|s| s.to_shape());
        Ok(NodeParams {
            name: node.name.clone(),
            op: node.op.clone(),
            data_format: node.data_format(),
            strides: node.strides(),
            dilations: node.dilations(),
            ksize: node.ksize(),
            shape: shape.map(|s| s.dim.iter().map(|d| d.size).collect()),
            is_bias: shape.map(|s| s.is_bias()).unwrap_or(false),
            kernel,
            value_bytes: node.value_data().map(|d| d.len()),
            value_scalar: node.value_scalar(),
            activation: node.activation_neuron(),
        })
    }
}

impl fmt::Display for NodeParams {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.op)?;
        if let Some(df) = self.data_format {
            write!(f, " format={:?}", df)?;
        }
        for (label, pair) in
            [("strides", self.strides), ("dilations", self.dilations), ("ksize", self.ksize)]
        {
            if let Some(p) = pair {
                write!(f, " {}={}x{}", label, p.x, p.y)?;
            }
        }
        if let Some(shape) = &self.shape {
            write!(f, " shape={:?}", shape)?;
        }
        if self.is_bias {
            write!(f, " bias")?;
        }
        if let Some(k) = self.kernel {
            write!(
                f,
                " kernel={}x{} {}->{}",
                k.width, k.height, k.input_channels, k.output_channels
            )?;
        }
        if let Some(len) = self.value_bytes {
            write!(f, " content={}B", len)?;
        }
        if let Some(v) = self.value_scalar {
            write!(f, " scalar={}", v)?;
        }
        if self.activation != ActivationNeuron::None {
            write!(f, " activation={:?}", self.activation)?;
        }
        Ok(())
    }
}
