use serde::Serialize;

use super::DataFormat;
use crate::tfpb::tensorflow::NodeDef;

/// A spatial (x, y) pair. For `ksize` the same pair reads as (width, height).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, new)]
pub struct Spatial {
    pub x: usize,
    pub y: usize,
}

impl Spatial {
    #[inline]
    pub fn width(&self) -> usize {
        self.x
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.y
    }
}

/// Picks the two spatial entries of a 4-long TensorFlow geometry list.
///
/// With no declared format the entries at 1 and 2 are returned in stored
/// order as (x, y). With a declared format, x comes from the width axis and
/// y from the height axis of that format.
///
/// # Panics
///
/// If `values` has fewer than 4 entries or a picked entry is negative.
pub fn spatial_pair(name: &str, values: &[i64], format: Option<DataFormat>) -> Spatial {
    assert!(values.len() >= 4, "attribute '{}' must have 4 entries, got {:?}", name, values);
    let (x, y) = match format {
        None => (values[1], values[2]),
        Some(fmt) => (values[fmt.w_axis()], values[fmt.h_axis()]),
    };
    let dim = |v: i64| {
        usize::try_from(v)
            .unwrap_or_else(|_| panic!("attribute '{}' has a negative entry: {:?}", name, values))
    };
    Spatial::new(dim(x), dim(y))
}

impl NodeDef {
    fn spatial_attr(&self, name: &str) -> Option<Spatial> {
        let values = self.get_attr_opt_list_int(name)?;
        Some(spatial_pair(name, values, self.data_format()))
    }

    /// `strides` as (x, y). See [`spatial_pair`] for the preconditions.
    pub fn strides(&self) -> Option<Spatial> {
        self.spatial_attr("strides")
    }

    /// `dilations` as (x, y). See [`spatial_pair`] for the preconditions.
    pub fn dilations(&self) -> Option<Spatial> {
        self.spatial_attr("dilations")
    }

    /// Pooling window `ksize` as (width, height).
    pub fn ksize(&self) -> Option<Spatial> {
        self.spatial_attr("ksize")
    }
}
