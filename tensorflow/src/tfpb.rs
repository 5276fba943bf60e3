use std::fs;

pub mod tensorflow {
    include!("prost/tensorflow.rs");
}

use self::tensorflow::attr_value::ListValue;
use self::tensorflow::attr_value::Value;
use self::tensorflow::tensor_shape_proto::Dim;
use self::tensorflow::{AttrValue, DataType, GraphDef, NodeDef, TensorProto, TensorShapeProto};

use crate::internal::*;

pub fn graph() -> GraphDef {
    GraphDef { node: vec![], versions: None, version: 0 }
}

pub fn node() -> NodeDef {
    NodeDef {
        name: String::new(),
        op: String::new(),
        input: vec![],
        device: String::new(),
        attr: HashMap::new(),
    }
}

pub fn shape(dims: &[i64]) -> TensorShapeProto {
    TensorShapeProto {
        dim: dims.iter().map(|&size| Dim { size, name: String::new() }).collect(),
        unknown_rank: false,
    }
}

pub fn tensor_f32(dims: &[i64], values: Vec<f32>) -> TensorProto {
    let mut tensor = empty_tensor_proto(DataType::DtFloat, dims);
    tensor.float_val = values;
    tensor
}

pub fn tensor_raw(dtype: DataType, dims: &[i64], content: Vec<u8>) -> TensorProto {
    let mut tensor = empty_tensor_proto(dtype, dims);
    tensor.tensor_content = content;
    tensor
}

pub(crate) fn empty_tensor_proto(dtype: DataType, dims: &[i64]) -> TensorProto {
    TensorProto {
        dtype: dtype.into(),
        tensor_shape: Some(shape(dims)),
        version_number: 0,
        tensor_content: vec![],
        half_val: vec![],
        float_val: vec![],
        double_val: vec![],
        int_val: vec![],
        string_val: vec![],
        scomplex_val: vec![],
        int64_val: vec![],
        bool_val: vec![],
        dcomplex_val: vec![],
        uint32_val: vec![],
        uint64_val: vec![],
    }
}

impl GraphDef {
    pub fn node(mut self, n: NodeDef) -> Self {
        self.node.push(n);
        self
    }

    pub fn node_by_name(&self, name: &str) -> TfResult<&NodeDef> {
        self.node
            .iter()
            .find(|n| n.name == name)
            .ok_or_else(|| format_err!("No node found for name: \"{}\"", name))
    }

    pub fn write_to_bytes(&self) -> TfResult<Vec<u8>> {
        use prost::Message;
        let mut buf = vec![];
        self.encode(&mut buf).map_err(|e| format_err!("Prost/Protobuf encoding error : {:?}", e))?;
        Ok(buf)
    }

    pub fn save_to<P: AsRef<::std::path::Path>>(self, p: P) -> TfResult<()> {
        let buf = self.write_to_bytes()?;
        fs::write(p, buf)?;
        Ok(())
    }
}

impl NodeDef {
    pub fn name<S: ToString>(mut self, n: S) -> NodeDef {
        self.name = n.to_string();
        self
    }
    pub fn op<S: ToString>(mut self, n: S) -> NodeDef {
        self.op = n.to_string();
        self
    }
    pub fn input<S: ToString>(mut self, n: S) -> NodeDef {
        self.input.push(n.to_string());
        self
    }
    pub fn attr<S: ToString, V: Into<AttrValue>>(mut self, n: S, v: V) -> NodeDef {
        self.attr.insert(n.to_string(), v.into());
        self
    }
}

/// Raw attribute access.
///
/// The `get_attr_opt_*` family never fails: a missing key, or a key holding
/// another variant than the one asked for, both read as `None`. The
/// `get_attr_*` counterparts turn that `None` into an error naming the node.
impl NodeDef {
    fn attr_value(&self, name: &str) -> Option<&Value> {
        self.attr.get(name).and_then(|a| a.value.as_ref())
    }

    fn missing(&self, kind: &str, name: &str) -> TfError {
        format_err!("Node {} ({}) expected {} attribute '{}'", self.name, self.op, kind, name)
    }

    pub fn get_attr_opt_raw_str(&self, name: &str) -> Option<&[u8]> {
        match self.attr_value(name)? {
            Value::S(bytes) => Some(bytes.as_slice()),
            _ => None,
        }
    }

    /// Undecodable bytes are reported as absent.
    pub fn get_attr_opt_str(&self, name: &str) -> Option<&str> {
        std::str::from_utf8(self.get_attr_opt_raw_str(name)?).ok()
    }

    pub fn get_attr_str(&self, name: &str) -> TfResult<&str> {
        self.get_attr_opt_str(name).ok_or_else(|| self.missing("UTF-8 string", name))
    }

    pub fn get_attr_opt_list_int(&self, name: &str) -> Option<&[i64]> {
        match self.attr_value(name)? {
            Value::List(list) => Some(list.i.as_slice()),
            _ => None,
        }
    }

    pub fn get_attr_list_int(&self, name: &str) -> TfResult<&[i64]> {
        self.get_attr_opt_list_int(name).ok_or_else(|| self.missing("list<int>", name))
    }

    pub fn get_attr_opt_shape(&self, name: &str) -> Option<&TensorShapeProto> {
        match self.attr_value(name)? {
            Value::Shape(shape) => Some(shape),
            _ => None,
        }
    }

    pub fn get_attr_opt_tensor(&self, name: &str) -> Option<&TensorProto> {
        match self.attr_value(name)? {
            Value::Tensor(tensor) => Some(tensor),
            _ => None,
        }
    }

    pub fn get_attr_tensor(&self, name: &str) -> TfResult<&TensorProto> {
        self.get_attr_opt_tensor(name).ok_or_else(|| self.missing("tensor", name))
    }

    /// Unknown enum values are reported as absent.
    pub fn get_attr_opt_datum_type(&self, name: &str) -> Option<DataType> {
        match self.attr_value(name)? {
            Value::Type(t) => DataType::from_i32(*t),
            _ => None,
        }
    }
}

impl From<DataType> for AttrValue {
    fn from(t: DataType) -> AttrValue {
        AttrValue { value: Some(Value::Type(t.into())) }
    }
}

impl<'a> From<&'a str> for AttrValue {
    fn from(t: &'a str) -> AttrValue {
        AttrValue::from(t.as_bytes())
    }
}

impl<'a> From<&'a [u8]> for AttrValue {
    fn from(t: &'a [u8]) -> AttrValue {
        AttrValue { value: Some(Value::S(t.to_vec())) }
    }
}

impl From<i32> for AttrValue {
    fn from(t: i32) -> AttrValue {
        AttrValue::from(t as i64)
    }
}

impl From<i64> for AttrValue {
    fn from(t: i64) -> AttrValue {
        AttrValue { value: Some(Value::I(t)) }
    }
}

impl From<f32> for AttrValue {
    fn from(t: f32) -> AttrValue {
        AttrValue { value: Some(Value::F(t)) }
    }
}

impl From<bool> for AttrValue {
    fn from(t: bool) -> AttrValue {
        AttrValue { value: Some(Value::B(t)) }
    }
}

impl From<Vec<i64>> for AttrValue {
    fn from(t: Vec<i64>) -> AttrValue {
        AttrValue {
            value: Some(Value::List(ListValue {
                s: vec![],
                i: t,
                f: vec![],
                b: vec![],
                r#type: vec![],
                shape: vec![],
                tensor: vec![],
            })),
        }
    }
}

impl From<TensorProto> for AttrValue {
    fn from(t: TensorProto) -> AttrValue {
        AttrValue { value: Some(Value::Tensor(t)) }
    }
}

impl From<TensorShapeProto> for AttrValue {
    fn from(t: TensorShapeProto) -> AttrValue {
        AttrValue { value: Some(Value::Shape(t)) }
    }
}
