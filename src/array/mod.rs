//! container types for data to be written to files
//!
//! Every array handed to a grid is stored as a [`FieldArray`]: an n-dimensional
//! [`ndarray`] array of one of the four element types VTK ascii files are written with.
//! [`inspect`] derives the metadata a `DataArray` element needs from such an array, and
//! [`spatial_dims`] normalizes its shape to the three spatial axes of a structured grid.

mod field;

pub use field::FieldArray;

use crate::Error;
use crate::ShapeError;

/// The element type of an array, as written in the `type` attribute of a `DataArray`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precision {
    Int32,
    Int64,
    Float32,
    Float64,
}

impl Precision {
    /// The VTK name of this element type
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Int32 => "Int32",
            Self::Int64 => "Int64",
            Self::Float32 => "Float32",
            Self::Float64 => "Float64",
        }
    }

    /// Resolve a dtype name to a precision.
    ///
    /// Both numpy style (`"int32"`, `"float64"`) and VTK style (`"Int32"`, `"Float64"`)
    /// names are accepted. Everything else, such as `"bool"` or `"uint8"`, fails with
    /// [`Error::UnsupportedDataType`].
    pub fn from_dtype(dtype: &str) -> Result<Self, Error> {
        match dtype {
            "int32" | "i32" | "Int32" => Ok(Self::Int32),
            "int64" | "i64" | "Int64" => Ok(Self::Int64),
            "float32" | "f32" | "Float32" => Ok(Self::Float32),
            "float64" | "f64" | "Float64" => Ok(Self::Float64),
            _ => Err(Error::UnsupportedDataType {
                dtype: dtype.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for Precision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metadata of an array as it will be described in its `DataArray` header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrayInfo {
    pub precision: Precision,
    /// `NumberOfComponents` of the array
    pub components: usize,
    /// number of tuples (points, cells, ...) the array holds
    pub elements: usize,
}

/// Derive the `DataArray` metadata of `array`.
///
/// For scalar data every value is its own element. For vector data the trailing axis
/// holds the components and every other axis indexes elements, so an array of shape
/// `(nx, ny, 3)` has 3 components and `nx * ny` elements.
pub fn inspect(array: &FieldArray, vector: bool, name: &str) -> Result<ArrayInfo, Error> {
    let shape = checked_shape(array, name)?;

    let (components, elements) = match (vector, shape.split_last()) {
        (true, Some((last, rest))) => (*last, rest.iter().product()),
        _ => (1, array.len()),
    };

    Ok(ArrayInfo {
        precision: array.precision(),
        components,
        elements,
    })
}

/// Normalize the spatial shape of `array` to exactly three axes.
///
/// The spatial axes are all axes of a scalar array, or all but the trailing component
/// axis of a vector array. Missing trailing axes are filled with `1`, so a scalar array
/// of shape `(101, 101)` has spatial dimensions `[101, 101, 1]`.
pub fn spatial_dims(array: &FieldArray, vector: bool, name: &str) -> Result<[usize; 3], Error> {
    let shape = checked_shape(array, name)?;

    let spatial = if vector {
        &shape[..shape.len() - 1]
    } else {
        shape
    };

    if spatial.len() > 3 {
        return Err(ShapeError::TooManySpatialDimensions {
            name: name.to_string(),
            spatial: spatial.len(),
        }
        .into());
    }

    let mut dims = [1; 3];
    dims[..spatial.len()].copy_from_slice(spatial);

    Ok(dims)
}

fn checked_shape<'a>(array: &'a FieldArray, name: &str) -> Result<&'a [usize], Error> {
    let shape = array.shape();

    if shape.is_empty() {
        return Err(ShapeError::ZeroDimensional {
            name: name.to_string(),
        }
        .into());
    }

    if shape.len() > 4 {
        return Err(ShapeError::TooManyDimensions {
            name: name.to_string(),
            ndim: shape.len(),
        }
        .into());
    }

    Ok(shape)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{Array1, Array2, ArrayD, IxDyn};

    #[test]
    fn precision_tags() {
        let cases: [(FieldArray, &str); 4] = [
            (Array1::<i32>::zeros(3).into(), "Int32"),
            (Array1::<i64>::zeros(3).into(), "Int64"),
            (Array1::<f32>::zeros(3).into(), "Float32"),
            (Array1::<f64>::zeros(3).into(), "Float64"),
        ];

        for (array, tag) in cases {
            let info = inspect(&array, false, "Data").unwrap();
            assert_eq!(info.precision.as_str(), tag);
        }
    }

    #[test]
    fn dtype_names() {
        assert_eq!(Precision::from_dtype("int32").unwrap(), Precision::Int32);
        assert_eq!(Precision::from_dtype("Int64").unwrap(), Precision::Int64);
        assert_eq!(Precision::from_dtype("float32").unwrap(), Precision::Float32);
        assert_eq!(Precision::from_dtype("f64").unwrap(), Precision::Float64);

        let err = Precision::from_dtype("bool").unwrap_err();
        assert!(matches!(err, Error::UnsupportedDataType { dtype } if dtype == "bool"));
    }

    #[test]
    fn scalar_info() {
        let array: FieldArray = Array1::<f64>::zeros(7).into();
        let info = inspect(&array, false, "Data").unwrap();

        assert_eq!(info.components, 1);
        assert_eq!(info.elements, 7);
    }

    #[test]
    fn vector_info() {
        let array: FieldArray = Array2::<f32>::zeros((5, 3)).into();
        let info = inspect(&array, true, "Data").unwrap();

        assert_eq!(info.components, 3);
        assert_eq!(info.elements, 5);

        let array: FieldArray = ArrayD::<f64>::zeros(IxDyn(&[4, 6, 2, 3])).into();
        let info = inspect(&array, true, "Data").unwrap();

        assert_eq!(info.components, 3);
        assert_eq!(info.elements, 48);
    }

    #[test]
    fn five_dimensions_rejected() {
        let array: FieldArray = ArrayD::<f64>::zeros(IxDyn(&[1, 1, 1, 1, 1])).into();
        let err = inspect(&array, false, "Data").unwrap_err();

        assert!(matches!(
            err,
            Error::Shape(ShapeError::TooManyDimensions { ndim: 5, .. })
        ));
    }

    #[test]
    fn spatial_padding() {
        let array: FieldArray = Array2::<f64>::zeros((101, 51)).into();
        assert_eq!(spatial_dims(&array, false, "Data").unwrap(), [101, 51, 1]);

        let array: FieldArray = Array2::<f64>::zeros((9, 3)).into();
        assert_eq!(spatial_dims(&array, true, "Data").unwrap(), [9, 1, 1]);
    }

    #[test]
    fn four_spatial_axes_rejected() {
        let array: FieldArray = ArrayD::<f64>::zeros(IxDyn(&[2, 2, 2, 2])).into();

        assert!(spatial_dims(&array, true, "Data").is_ok());
        assert!(matches!(
            spatial_dims(&array, false, "Data").unwrap_err(),
            Error::Shape(ShapeError::TooManySpatialDimensions { spatial: 4, .. })
        ));
    }
}
