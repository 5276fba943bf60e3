use crate::tfpb::tensorflow::{DataType, NodeDef};

/// Operators whose output is the tensor embedded in their `value` attribute.
pub const CONST_OPS: &[&str] = &["Const"];

impl NodeDef {
    pub fn is_const_op(&self) -> bool {
        CONST_OPS.contains(&self.op.as_str())
    }

    /// Raw `tensor_content` bytes of a constant node.
    ///
    /// Constants stored as typed value lists (usually scalars and splats) have
    /// no raw content and report an empty slice.
    pub fn value_data(&self) -> Option<&[u8]> {
        if !self.is_const_op() {
            return None;
        }
        self.get_attr_opt_tensor("value").map(|t| t.tensor_content.as_slice())
    }

    /// First typed value of a constant node, as f32.
    ///
    /// Doubles are narrowed, small integer types widened. Other element types,
    /// and tensors with an empty value list for their type, give `None`.
    pub fn value_scalar(&self) -> Option<f32> {
        if !self.is_const_op() {
            return None;
        }
        let tensor = self.get_attr_opt_tensor("value")?;
        match tensor.datum_type()? {
            DataType::DtFloat => tensor.float_val.first().copied(),
            DataType::DtDouble => tensor.double_val.first().map(|&d| d as f32),
            DataType::DtInt8 | DataType::DtInt16 | DataType::DtInt32 | DataType::DtUint8 => {
                tensor.int_val.first().map(|&i| i as f32)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tfpb;
    use crate::tfpb::tensorflow::TensorProto;

    fn konst(t: TensorProto) -> NodeDef {
        let dtype = DataType::from_i32(t.dtype).unwrap();
        tfpb::node().name("k").op("Const").attr("dtype", dtype).attr("value", t)
    }

    fn typed(dtype: DataType, fill: impl FnOnce(&mut TensorProto)) -> TensorProto {
        let mut t = tfpb::empty_tensor_proto(dtype, &[]);
        fill(&mut t);
        t
    }

    #[test]
    fn float_scalar() {
        let n = konst(tfpb::tensor_f32(&[], vec![3.5]));
        assert_eq!(n.value_scalar(), Some(3.5));
    }

    #[test]
    fn non_const_op_is_gated() {
        let n = konst(tfpb::tensor_f32(&[], vec![3.5])).op("Identity");
        assert_eq!(n.value_scalar(), None);
        let raw = tfpb::tensor_raw(DataType::DtFloat, &[1], 3.5f32.to_le_bytes().to_vec());
        let n = konst(raw).op("VariableV2");
        assert_eq!(n.value_data(), None);
    }

    #[test]
    fn double_is_narrowed() {
        let n = konst(typed(DataType::DtDouble, |t| t.double_val = vec![0.1f64, 2.0]));
        assert_eq!(n.value_scalar(), Some(0.1f32));
    }

    #[test]
    fn small_ints_are_widened() {
        for dt in [DataType::DtInt8, DataType::DtInt16, DataType::DtInt32, DataType::DtUint8] {
            let n = konst(typed(dt, |t| t.int_val = vec![-7, 1]));
            assert_eq!(n.value_scalar(), Some(-7.0), "{:?}", dt);
        }
    }

    #[test]
    fn other_types_and_empty_lists() {
        let n = konst(typed(DataType::DtInt64, |t| t.int64_val = vec![4]));
        assert_eq!(n.value_scalar(), None);
        let n = konst(typed(DataType::DtInt32, |t| t.int64_val = vec![4]));
        assert_eq!(n.value_scalar(), None);
        let n = konst(tfpb::tensor_f32(&[], vec![]));
        assert_eq!(n.value_scalar(), None);
    }

    #[test]
    fn raw_content() {
        let bytes = 2.5f32.to_le_bytes().to_vec();
        let n = konst(tfpb::tensor_raw(DataType::DtFloat, &[1], bytes.clone()));
        assert_eq!(n.value_data(), Some(&*bytes));
        // raw content does not feed the typed scalar path
        assert_eq!(n.value_scalar(), None);
    }

    #[test]
    fn typed_values_have_empty_content() {
        let n = konst(tfpb::tensor_f32(&[1], vec![1.0]));
        assert_eq!(n.value_data(), Some(&[][..]));
        assert_eq!(tfpb::node().op("Const").value_data(), None);
    }
}
