//! # Traits
//!
//! The two capabilities shared by the whole crate. [`Numeric`] is implemented for the
//! four element types VTK ascii arrays are written with, and [`Grid`] is implemented by
//! every grid type in [`mesh`](crate::mesh) so that [`write_vtk`](crate::write_vtk()) can
//! wrap any of them in a `VTKFile` document.

use crate::array::{FieldArray, Precision};
use crate::mesh::GridKind;
use crate::write_vtk::Encoding;
use crate::Error;
use ndarray::ArrayD;
use num_traits::AsPrimitive;
use quick_xml::Writer;
use std::io::Write;

/// Element types that can be stored in a [`FieldArray`] and written to a `DataArray`.
///
/// Implemented for `i32`, `i64`, `f32` and `f64` only. These are exactly the types with a
/// [`Precision`] tag, so there is no way to hold data whose VTK type is unknown.
pub trait Numeric:
    Copy
    + PartialEq
    + std::fmt::Debug
    + num_traits::Zero
    + AsPrimitive<i32>
    + AsPrimitive<i64>
    + AsPrimitive<f32>
    + AsPrimitive<f64>
    + 'static
{
    /// The VTK `type` attribute for arrays of this element
    fn as_precision() -> Precision;

    /// append the ascii representation of this value to `out`
    fn push_ascii(&self, out: &mut String);

    /// wrap an array of this element type in the matching [`FieldArray`] variant
    fn into_field(array: ArrayD<Self>) -> FieldArray;
}

macro_rules! numeric_float {
    ($float:ty, $variant:ident) => {
        impl Numeric for $float {
            fn as_precision() -> Precision {
                Precision::$variant
            }

            fn push_ascii(&self, out: &mut String) {
                let mut buffer = ryu::Buffer::new();
                out.push_str(buffer.format(*self));
            }

            fn into_field(array: ArrayD<Self>) -> FieldArray {
                FieldArray::$variant(array)
            }
        }
    };
}

macro_rules! numeric_int {
    ($int:ty, $variant:ident) => {
        impl Numeric for $int {
            fn as_precision() -> Precision {
                Precision::$variant
            }

            fn push_ascii(&self, out: &mut String) {
                out.push_str(&self.to_string());
            }

            fn into_field(array: ArrayD<Self>) -> FieldArray {
                FieldArray::$variant(array)
            }
        }
    };
}

numeric_int!(i32, Int32);
numeric_int!(i64, Int64);
numeric_float!(f32, Float32);
numeric_float!(f64, Float64);

/// A grid that can write the body of a `VTKFile` document.
///
/// Implementors describe their own topology: which root element they live in
/// ([`kind`](Grid::kind)) and how to emit everything between the `<VTKFile>` tags
/// ([`write_grid`](Grid::write_grid)). Validation of the input arrays happens while
/// writing, so a grid that fails to write never produces a partial document through
/// [`write_vtk_file`](crate::write_vtk_file).
pub trait Grid {
    /// The VTK dataset type of this grid
    fn kind(&self) -> GridKind;

    /// Write the `<PolyData>` / `<RectilinearGrid>` / ... element and everything it contains
    fn write_grid<W: Write>(&self, writer: &mut Writer<W>, encoding: Encoding)
        -> Result<(), Error>;
}
