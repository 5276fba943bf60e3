use serde::Serialize;

use crate::tfpb::tensorflow::NodeDef;

/// Channel ordering of a 4-D activation tensor.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum DataFormat {
    /// Channel-last: `[batch, height, width, channels]`.
    NHWC,
    /// Channel-first: `[batch, channels, height, width]`.
    NCHW,
}

impl DataFormat {
    /// Only the exact `"NHWC"` literal is channel-last; every other string
    /// TensorFlow accepts here (`"NCHW"`, `"NCHW_VECT_C"`, ...) puts channels
    /// at axis 1.
    pub fn from_tf_str(s: &str) -> DataFormat {
        if s == "NHWC" { DataFormat::NHWC } else { DataFormat::NCHW }
    }

    #[inline]
    pub fn c_axis(&self) -> usize {
        match self {
            DataFormat::NHWC => 3,
            DataFormat::NCHW => 1,
        }
    }

    #[inline]
    pub fn h_axis(&self) -> usize {
        match self {
            DataFormat::NHWC => 1,
            DataFormat::NCHW => 2,
        }
    }

    #[inline]
    pub fn w_axis(&self) -> usize {
        self.h_axis() + 1
    }
}

impl NodeDef {
    /// Resolves the `data_format` attribute.
    ///
    /// `None` when the attribute is missing or is not valid UTF-8; never
    /// cached, so it reflects the node as it is now.
    pub fn data_format(&self) -> Option<DataFormat> {
        self.get_attr_opt_str("data_format").map(DataFormat::from_tf_str)
    }
}
