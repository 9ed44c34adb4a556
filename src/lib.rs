#![doc = include_str!("../README.md")]

pub mod array;
pub mod mesh;
pub mod prelude;
mod reformat;
pub mod table;
mod traits;
mod write_vtk;

pub use traits::Grid;
pub use traits::Numeric;

pub use array::{inspect, spatial_dims, ArrayInfo, FieldArray, Precision};

pub use mesh::{CellType, DataLocation, Extent, GridKind};
pub use mesh::{PolyLine, PolyLineBuilder};
pub use mesh::{RectilinearGrid, RectilinearGridBuilder};
pub use mesh::{StructuredGrid, StructuredGridBuilder};
pub use mesh::{UnstructuredGrid, UnstructuredGridBuilder};

pub use reformat::Reformat;
pub use write_vtk::{write_inline_dataarray, write_inline_dataarray_rows, Encoding};
pub use write_vtk::{write_vtk, write_vtk_file, WriteOptions};

pub use ndarray;

pub use quick_xml::writer::Writer;

/// general purpose error enumeration for possible causes of failure.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("An io error occured: `{0}`")]
    Io(#[from] std::io::Error),
    #[error("Could not write XML data: `{0}`")]
    XmlWrite(#[from] quick_xml::Error),
    #[error("Could not reshape array: `{0}`")]
    Reshape(#[from] ndarray::ShapeError),
    #[error("{0}")]
    Shape(#[from] ShapeError),
    #[error("missing required input `{field}`")]
    MissingInput { field: &'static str },
    #[error("unsupported data type `{dtype}`. Expected one of int32, int64, float32, float64")]
    UnsupportedDataType { dtype: String },
    #[error("array `{name}` contains non-integral values and cannot be used as an index table")]
    NonIntegral { name: String },
    #[error("no VTK cell type is defined for elements with {nodes} nodes")]
    UnsupportedElementType { nodes: usize },
    #[error("unknown VTK cell type name `{name}`")]
    UnknownCellType { name: String },
    #[error("element table references node {index}, but only {nodes} nodes exist")]
    NodeIndexOutOfRange { index: i64, nodes: usize },
    #[error("could not parse extent `{extent}`. Expected six integers")]
    InvalidExtent { extent: String },
    #[error("could not read table `{path}` at line {line}: {reason}")]
    Table {
        path: String,
        line: usize,
        reason: String,
    },
}

impl From<derive_builder::UninitializedFieldError> for Error {
    fn from(x: derive_builder::UninitializedFieldError) -> Self {
        Error::MissingInput {
            field: x.field_name(),
        }
    }
}

/// Problems with the shape of an input array. Every variant names the array it refers to.
#[derive(derive_more::Display, Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    #[display(fmt = "array `{name}` has {ndim} dimensions, at most 4 are supported")]
    TooManyDimensions { name: String, ndim: usize },
    #[display(fmt = "array `{name}` is zero dimensional")]
    ZeroDimensional { name: String },
    #[display(fmt = "array `{name}` has {spatial} spatial dimensions, at most 3 are supported")]
    TooManySpatialDimensions { name: String, spatial: usize },
    #[display(fmt = "array `{name}` has {len} values which cannot be split into rows of {components}")]
    ComponentMismatch {
        name: String,
        len: usize,
        components: usize,
    },
    #[display(fmt = "array `{name}` must have {expected} dimensions, got shape {actual:?}")]
    Dimensions {
        name: String,
        expected: usize,
        actual: Vec<usize>,
    },
    #[display(fmt = "array `{name}` must have shape (N, {expected}), got {actual:?}")]
    Columns {
        name: String,
        expected: usize,
        actual: Vec<usize>,
    },
    #[display(fmt = "array `{name}` has {actual} entries, expected {expected}")]
    Length {
        name: String,
        expected: usize,
        actual: usize,
    },
}

impl std::error::Error for ShapeError {}
