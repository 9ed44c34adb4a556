//! # Grid Types
//!
//! Each VTK XML serial dataset type is a struct in this module implementing the
//! [`Grid`](crate::Grid) trait:
//!
//! | type                  | root element       | extension |
//! |-----------------------|--------------------|-----------|
//! | [`PolyLine`]          | `PolyData`         | `.vtp`    |
//! | [`RectilinearGrid`]   | `RectilinearGrid`  | `.vtr`    |
//! | [`StructuredGrid`]    | `StructuredGrid`   | `.vts`    |
//! | [`UnstructuredGrid`]  | `UnstructuredGrid` | `.vtu`    |
//!
//! A grid owns exactly one payload array and its topology. Grids are constructed with
//! their builders; a required array that is never supplied makes `build` fail with
//! [`Error::MissingInput`](crate::Error::MissingInput). All other validation (shapes,
//! lengths, element types) happens when the grid is written, before any output reaches
//! a file.
//!
//! ## Point ordering of structured data
//!
//! Rectilinear and structured grids interpret the first axis of their payload as `x`,
//! the second as `y` and the third as `z`. A scalar field of shape `(nx, ny, nz)` (or a
//! vector field of shape `(nx, ny, nz, components)`) is written in VTK point order,
//! where `x` varies fastest. Two dimensional fields get a `z` axis of length 1.

mod cell_type;
mod extent;
mod poly_line;
mod rectilinear;
mod structured;
mod unstructured;

pub use cell_type::CellType;
pub use extent::Extent;
pub use poly_line::{PolyLine, PolyLineBuilder};
pub use rectilinear::{RectilinearGrid, RectilinearGridBuilder};
pub use structured::{StructuredGrid, StructuredGridBuilder};
pub use unstructured::{UnstructuredGrid, UnstructuredGridBuilder};

use crate::array::FieldArray;
use crate::Error;
use crate::ShapeError;

/// The VTK XML dataset types this crate writes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridKind {
    PolyData,
    RectilinearGrid,
    StructuredGrid,
    UnstructuredGrid,
}

impl GridKind {
    /// name of the dataset element, also used as the `type` of the `VTKFile` element
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PolyData => "PolyData",
            Self::RectilinearGrid => "RectilinearGrid",
            Self::StructuredGrid => "StructuredGrid",
            Self::UnstructuredGrid => "UnstructuredGrid",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::PolyData => "vtp",
            Self::RectilinearGrid => "vtr",
            Self::StructuredGrid => "vts",
            Self::UnstructuredGrid => "vtu",
        }
    }

    /// file written when no destination is given
    pub fn default_file_name(&self) -> &'static str {
        match self {
            Self::PolyData => "out.vtp",
            Self::RectilinearGrid => "out.vtr",
            Self::StructuredGrid => "out.vts",
            Self::UnstructuredGrid => "out.vtu",
        }
    }
}

impl std::fmt::Display for GridKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether the payload of a grid is attached to its points or to its cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DataLocation {
    #[default]
    Point,
    Cell,
}

impl DataLocation {
    pub(crate) fn element_name(&self) -> &'static str {
        match self {
            Self::Point => "PointData",
            Self::Cell => "CellData",
        }
    }
}

/// Reorder a structured field so that a row-major walk visits `x` fastest.
///
/// `dims` are the normalized spatial dimensions of `array` (see
/// [`spatial_dims`](crate::spatial_dims)). The field is reshaped to exactly three
/// spatial axes (plus the component axis for vector data) and its spatial axes are
/// reversed.
pub(crate) fn point_order(
    array: &FieldArray,
    dims: [usize; 3],
    vector: bool,
) -> Result<FieldArray, Error> {
    if vector {
        let components = array.shape().last().copied().unwrap_or(1);
        let reshaped = array.reshape(&[dims[0], dims[1], dims[2], components])?;
        Ok(reshaped.permuted(&[2, 1, 0, 3]))
    } else {
        let reshaped = array.reshape(&dims)?;
        Ok(reshaped.permuted(&[2, 1, 0]))
    }
}

/// Check that a coordinate array has the shape `(N, 3)` and return `N`
pub(crate) fn coordinate_rows(array: &FieldArray, name: &str) -> Result<usize, Error> {
    match array.shape() {
        [rows, 3] => Ok(*rows),
        shape => Err(ShapeError::Columns {
            name: name.to_string(),
            expected: 3,
            actual: shape.to_vec(),
        }
        .into()),
    }
}

/// Fail unless `actual == expected`
pub(crate) fn check_length(name: &str, expected: usize, actual: usize) -> Result<(), Error> {
    if expected != actual {
        return Err(ShapeError::Length {
            name: name.to_string(),
            expected,
            actual,
        }
        .into());
    }

    Ok(())
}
