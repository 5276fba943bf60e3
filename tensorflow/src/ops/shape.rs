use serde::Serialize;

use crate::tfpb::tensorflow::{NodeDef, TensorShapeProto};

/// Convolution kernel geometry in the layout-free form graph builders use.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, new)]
pub struct KernelShape {
    pub width: usize,
    pub height: usize,
    pub input_channels: usize,
    pub output_channels: usize,
}

impl NodeDef {
    /// Shape of the node: the `shape` attribute (VariableV2, Placeholder),
    /// or the shape of the tensor held in `value` (Const).
    pub fn shape(&self) -> Option<&TensorShapeProto> {
        self.get_attr_opt_shape("shape")
            .or_else(|| self.get_attr_opt_tensor("value").and_then(|t| t.tensor_shape.as_ref()))
    }
}

// Named dimensions follow the HWIO kernel order of Conv2D. They panic on
// shapes with fewer dims than the one they read.
impl TensorShapeProto {
    fn dim_size(&self, ix: usize) -> usize {
        let dim = self.dim[ix].size;
        usize::try_from(dim).unwrap_or_else(|_| panic!("shape has a negative dim {}", dim))
    }

    pub fn is_bias(&self) -> bool {
        self.dim.len() == 1
    }

    pub fn kernel_height(&self) -> usize {
        self.dim_size(0)
    }

    pub fn kernel_width(&self) -> usize {
        self.dim_size(1)
    }

    pub fn input_channels(&self) -> usize {
        self.dim_size(2)
    }

    pub fn output_channels(&self) -> usize {
        self.dim_size(3)
    }

    pub fn total_count(&self) -> usize {
        self.output_channels() * self.input_channels() * self.kernel_width() * self.kernel_height()
    }

    pub fn to_shape(&self) -> KernelShape {
        KernelShape::new(
            self.kernel_width(),
            self.kernel_height(),
            self.input_channels(),
            self.output_channels(),
        )
    }
}
