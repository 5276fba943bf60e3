#![allow(clippy::len_zero)]
//! # TensorFlow attribute normalization
//!
//! Reads the loosely typed attribute maps of TensorFlow `NodeDef`s and
//! projects them into layout-independent operator parameters: strides,
//! dilations and pooling windows as (x, y) pairs, kernel shapes, constant
//! payloads and fused activations.
//!
//! ## Example
//!
//! ```
//! # extern crate tfnorm_tensorflow;
//! # fn main() {
//! use tfnorm_tensorflow::prelude::*;
//!
//! let conv = tfpb::node()
//!     .name("conv")
//!     .op("Conv2D")
//!     .attr("data_format", "NCHW")
//!     .attr("strides", vec![1, 1, 2, 3]);
//!
//! // channel-first: x is read at axis 3, y at axis 2
//! assert_eq!(conv.data_format(), Some(DataFormat::NCHW));
//! assert_eq!(conv.strides(), Some(Spatial::new(3, 2)));
//!
//! // attributes that are not there are reported as such
//! assert_eq!(conv.dilations(), None);
//! assert_eq!(conv.activation_neuron(), ActivationNeuron::None);
//! # }
//! ```
//!

#[macro_use]
extern crate derive_new;
#[allow(unused_imports)]
#[macro_use]
extern crate log;

pub mod model;
pub mod ops;
pub mod params;
pub mod tensor;
pub mod tfpb;

pub use model::Tensorflow;

pub fn tensorflow() -> Tensorflow {
    Tensorflow
}

pub type TVec<T> = smallvec::SmallVec<[T; 4]>;
pub type TfResult<T> = anyhow::Result<T>;
pub type TfError = anyhow::Error;

pub mod internal {
    pub use crate::{TVec, TfError, TfResult};
    pub use anyhow::{Context, bail, format_err};
    pub use std::collections::HashMap;
}

pub mod prelude {
    pub use crate::ops::nn::{ActivationNeuron, DataFormat, Spatial};
    pub use crate::ops::shape::KernelShape;
    pub use crate::params::NodeParams;
    pub use crate::tensorflow;
    pub use crate::tfpb;
    pub use crate::tfpb::tensorflow::{DataType, GraphDef, NodeDef, TensorProto, TensorShapeProto};
    pub use crate::{TfError, TfResult};
}

#[cfg(test)]
#[allow(dead_code)]
pub fn setup_test_logger() {
    let _ = env_logger::Builder::from_env("TFNORM_LOG").try_init();
}
