use serde::Serialize;

use crate::tfpb::tensorflow::NodeDef;

/// Custom attribute carrying the name of an activation fused into its
/// producer node.
pub const NEURON_ATTR: &str = "neuron";

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub enum ActivationNeuron {
    #[default]
    None,
    Relu,
    Tanh,
    Sigmoid,
}

impl ActivationNeuron {
    pub fn from_op_name(op: &str) -> ActivationNeuron {
        match op {
            "Relu" => ActivationNeuron::Relu,
            "Tanh" => ActivationNeuron::Tanh,
            "Sigmoid" => ActivationNeuron::Sigmoid,
            _ => ActivationNeuron::None,
        }
    }
}

impl NodeDef {
    /// Fused activation of this node, `ActivationNeuron::None` when there is
    /// none or it is not one we know.
    pub fn activation_neuron(&self) -> ActivationNeuron {
        self.get_attr_opt_str(NEURON_ATTR).map(ActivationNeuron::from_op_name).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tfpb;

    fn fused(neuron: &str) -> NodeDef {
        tfpb::node().op("Conv2D").attr(NEURON_ATTR, neuron)
    }

    #[test]
    fn known() {
        assert_eq!(fused("Relu").activation_neuron(), ActivationNeuron::Relu);
        assert_eq!(fused("Tanh").activation_neuron(), ActivationNeuron::Tanh);
        assert_eq!(fused("Sigmoid").activation_neuron(), ActivationNeuron::Sigmoid);
    }

    #[test]
    fn unknown_or_missing() {
        assert_eq!(fused("Elu").activation_neuron(), ActivationNeuron::None);
        assert_eq!(fused("relu").activation_neuron(), ActivationNeuron::None);
        assert_eq!(tfpb::node().op("Conv2D").activation_neuron(), ActivationNeuron::None);
        let n = tfpb::node().attr(NEURON_ATTR, &[0x80u8][..]);
        assert_eq!(n.activation_neuron(), ActivationNeuron::None);
    }

    #[test]
    fn wrong_variant() {
        let n = tfpb::node().attr(NEURON_ATTR, 3i64);
        assert_eq!(n.activation_neuron(), ActivationNeuron::None);
    }
}
