use crate::internal::*;

use crate::tfpb::tensorflow::{DataType, TensorProto, TensorShapeProto};

impl DataType {
    /// Byte width of one element, for fixed-size numeric types.
    pub fn size_of(&self) -> Option<usize> {
        match self {
            DataType::DtBool | DataType::DtInt8 | DataType::DtUint8 => Some(1),
            DataType::DtQint8 | DataType::DtQuint8 => Some(1),
            DataType::DtInt16 | DataType::DtUint16 | DataType::DtHalf => Some(2),
            DataType::DtBfloat16 | DataType::DtQint16 | DataType::DtQuint16 => Some(2),
            DataType::DtInt32 | DataType::DtUint32 | DataType::DtFloat => Some(4),
            DataType::DtQint32 => Some(4),
            DataType::DtInt64 | DataType::DtUint64 | DataType::DtDouble => Some(8),
            DataType::DtComplex64 => Some(8),
            DataType::DtComplex128 => Some(16),
            _ => None,
        }
    }
}

impl<'a> TryFrom<&'a TensorShapeProto> for TVec<usize> {
    type Error = TfError;
    fn try_from(t: &'a TensorShapeProto) -> TfResult<TVec<usize>> {
        if t.unknown_rank {
            bail!("Shape of unknown rank")
        }
        if t.dim.iter().any(|d| d.size < 0) {
            bail!("Negative dim found")
        }
        Ok(t.dim.iter().map(|d| d.size as usize).collect::<TVec<_>>())
    }
}

impl TensorProto {
    /// Declared element type, `None` for values out of the enum.
    pub fn datum_type(&self) -> Option<DataType> {
        DataType::from_i32(self.dtype)
    }

    pub fn element_count(&self) -> TfResult<usize> {
        let shape = self.tensor_shape.as_ref().context("Tensor without a shape")?;
        let dims: TVec<usize> = TVec::try_from(shape)?;
        Ok(dims.iter().product())
    }

    /// Checks `tensor_content` holds exactly one full element per shape slot.
    pub fn check_content_len(&self) -> TfResult<()> {
        let dt = self.datum_type().with_context(|| format!("Unknown dtype {}", self.dtype))?;
        let size = dt.size_of().with_context(|| format!("{:?} has no fixed element size", dt))?;
        let expected = self.element_count()? * size;
        if self.tensor_content.len() != expected {
            bail!(
                "{:?} tensor content is {} bytes, shape calls for {}",
                dt,
                self.tensor_content.len(),
                expected
            )
        }
        Ok(())
    }
}
