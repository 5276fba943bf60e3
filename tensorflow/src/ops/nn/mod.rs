pub mod activation;
pub mod data_formats;
pub mod geometry;

pub use self::activation::{ActivationNeuron, NEURON_ATTR};
pub use self::data_formats::DataFormat;
pub use self::geometry::{Spatial, spatial_pair};
