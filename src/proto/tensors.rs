//! Tensor payloads carried inside artifacts.

/// Element type of a serialized tensor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum Dtype {
    Invalid = 0,
    Float32 = 1,
    Float64 = 2,
    Float16 = 3,
    Bfloat16 = 4,
    Complex64 = 5,
    Complex128 = 6,
    Uint8 = 7,
    Int8 = 8,
    Int16 = 9,
    Int32 = 10,
    Int64 = 11,
}

/// A dense tensor in row-major layout. `data` holds the raw little-endian
/// element bytes; its length must equal the shape product times the element
/// width.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Tensor {
    #[prost(enumeration = "Dtype", tag = "1")]
    pub dtype: i32,
    #[prost(int64, repeated, tag = "2")]
    pub shape: Vec<i64>,
    #[prost(bytes = "vec", tag = "3")]
    pub data: Vec<u8>,
}

impl Tensor {
    /// Number of elements implied by the shape.
    pub fn element_count(&self) -> i64 {
        self.shape.iter().product()
    }
}
