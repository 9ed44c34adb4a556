use super::{check_length, point_order, DataLocation, Extent, GridKind};
use crate::array::{spatial_dims, FieldArray};
use crate::traits::Grid;
use crate::write_vtk::{self, Encoding};
use crate::Error;

use derive_builder::Builder;
use quick_xml::Writer;
use std::io::Write;

/// A field on the outer product of three independent coordinate axes, written as
/// `RectilinearGrid`.
///
/// The extent is derived from the shape of `data` unless one is given explicitly. Each
/// axis that is left out is the single coordinate `0.0`, which is what a two dimensional
/// field wants for its `z` axis.
///
/// ```
/// use vtk_grids::RectilinearGrid;
/// use ndarray::Array;
///
/// let grid = RectilinearGrid::builder()
///     .data(Array::<f64, _>::zeros((11, 21)))
///     .x_axis(Array::linspace(0.0, 1.0, 11))
///     .y_axis(Array::linspace(0.0, 2.0, 21))
///     .build()
///     .unwrap();
///
/// assert_eq!(grid.whole_extent().unwrap().to_string(), "0 10 0 20 0 0");
/// ```
#[derive(Debug, Clone, Builder)]
#[builder(build_fn(error = "crate::Error"))]
pub struct RectilinearGrid {
    #[builder(setter(into))]
    pub data: FieldArray,
    /// the trailing axis of `data` holds vector components
    #[builder(default)]
    pub vector: bool,
    #[builder(default)]
    pub location: DataLocation,
    #[builder(setter(into), default = "String::from(\"Data\")")]
    pub name: String,
    #[builder(setter(into, strip_option), default)]
    pub x_axis: Option<FieldArray>,
    #[builder(setter(into, strip_option), default)]
    pub y_axis: Option<FieldArray>,
    #[builder(setter(into, strip_option), default)]
    pub z_axis: Option<FieldArray>,
    /// written instead of the extent derived from `data`
    #[builder(setter(strip_option), default)]
    pub extent: Option<Extent>,
}

impl RectilinearGrid {
    pub fn builder() -> RectilinearGridBuilder {
        RectilinearGridBuilder::default()
    }

    pub fn whole_extent(&self) -> Result<Extent, Error> {
        match &self.extent {
            Some(extent) => Ok(extent.clone()),
            None => Ok(Extent::from_dims(spatial_dims(
                &self.data,
                self.vector,
                &self.name,
            )?)),
        }
    }

    /// the `x`, `y` and `z` coordinates, with `[0.0]` standing in for missing axes
    pub fn axes(&self) -> [FieldArray; 3] {
        let axis = |axis: &Option<FieldArray>| {
            axis.clone().unwrap_or_else(|| FieldArray::from(vec![0.0f64]))
        };

        [axis(&self.x_axis), axis(&self.y_axis), axis(&self.z_axis)]
    }
}

impl Grid for RectilinearGrid {
    fn kind(&self) -> GridKind {
        GridKind::RectilinearGrid
    }

    fn write_grid<W: Write>(
        &self,
        writer: &mut Writer<W>,
        encoding: Encoding,
    ) -> Result<(), Error> {
        let dims = spatial_dims(&self.data, self.vector, &self.name)?;
        let extent = self.whole_extent()?.to_string();
        let axes = self.axes();
        let names = ["xAxis", "yAxis", "zAxis"];

        if self.location == DataLocation::Point {
            for ((axis, name), dim) in axes.iter().zip(names).zip(dims) {
                check_length(name, dim, axis.len())?;
            }
        }

        log::debug!("rectilinear grid with extent {}", extent);

        let data = point_order(&self.data, dims, self.vector)?;

        write_vtk::start_element(writer, "RectilinearGrid", &[("WholeExtent", extent.as_str())])?;
        write_vtk::start_element(writer, "Piece", &[("Extent", extent.as_str())])?;

        write_vtk::write_field(writer, self.location, self.vector, &self.name, &data, encoding)?;

        write_vtk::start_element(writer, "Coordinates", &[])?;
        for (axis, name) in axes.iter().zip(names) {
            write_vtk::write_inline_dataarray(writer, axis, name, 1, encoding)?;
        }
        write_vtk::end_element(writer, "Coordinates")?;

        write_vtk::end_element(writer, "Piece")?;
        write_vtk::end_element(writer, "RectilinearGrid")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ShapeError;
    use ndarray::{Array, Array2, Array3};

    fn render(grid: &RectilinearGrid) -> Result<String, Error> {
        let mut output = Vec::new();
        crate::write_vtk(&mut output, grid, Encoding::Ascii)?;
        Ok(String::from_utf8(output).unwrap())
    }

    #[test]
    fn whole_extent_of_planar_field() {
        let grid = RectilinearGrid::builder()
            .data(Array2::<f64>::zeros((101, 101)))
            .x_axis(Array::linspace(-1.0, 1.0, 101))
            .y_axis(Array::linspace(-1.0, 1.0, 101))
            .z_axis(vec![0.0f64])
            .build()
            .unwrap();

        let output = render(&grid).unwrap();

        assert!(output.contains("<RectilinearGrid WholeExtent=\"0 100 0 100 0 0\">"));
        assert!(output.contains("<Piece Extent=\"0 100 0 100 0 0\">"));
        assert!(output.contains("<PointData Scalars=\"Data\">"));
        assert!(output.contains("<DataArray Name=\"zAxis\" type=\"Float64\" NumberOfComponents=\"1\" format=\"ascii\">\n0.0 \n"));
    }

    #[test]
    fn values_written_x_fastest() {
        // value = 10 * i + j with i along x
        let data = Array2::from_shape_fn((3, 2), |(i, j)| (10 * i + j) as i32);
        let grid = RectilinearGrid::builder()
            .data(data)
            .x_axis(vec![0.0f64, 1.0, 2.0])
            .y_axis(vec![0.0f64, 1.0])
            .build()
            .unwrap();

        let output = render(&grid).unwrap();

        assert!(output.contains("type=\"Int32\" NumberOfComponents=\"1\" format=\"ascii\">\n0 10 20 1 11 21 \n"));
    }

    #[test]
    fn missing_axes_default_to_origin() {
        let grid = RectilinearGrid::builder()
            .data(vec![1.0f32])
            .build()
            .unwrap();

        let output = render(&grid).unwrap();

        assert!(output.contains("WholeExtent=\"0 0 0 0 0 0\""));
        assert!(output.contains("Name=\"xAxis\" type=\"Float64\" NumberOfComponents=\"1\" format=\"ascii\">\n0.0 \n"));
        assert!(output.contains("Name=\"yAxis\""));
    }

    #[test]
    fn axis_length_must_match_point_data() {
        let grid = RectilinearGrid::builder()
            .data(Array3::<f64>::zeros((4, 3, 2)))
            .x_axis(vec![0.0f64, 1.0, 2.0, 3.0])
            .y_axis(vec![0.0f64, 1.0])
            .z_axis(vec![0.0f64, 1.0])
            .build()
            .unwrap();

        assert!(matches!(
            render(&grid).unwrap_err(),
            Error::Shape(ShapeError::Length { expected: 3, actual: 2, .. })
        ));
    }

    #[test]
    fn cell_data_skips_axis_check() {
        let grid = RectilinearGrid::builder()
            .data(Array2::<f64>::zeros((2, 2)))
            .location(DataLocation::Cell)
            .x_axis(vec![0.0f64, 1.0, 2.0])
            .y_axis(vec![0.0f64, 1.0, 2.0])
            .build()
            .unwrap();

        let output = render(&grid).unwrap();
        assert!(output.contains("<CellData Scalars=\"Data\">"));
    }

    #[test]
    fn vector_field_and_explicit_extent() {
        let grid = RectilinearGrid::builder()
            .data(Array3::<f64>::ones((2, 2, 3)))
            .vector(true)
            .name("Velocity")
            .x_axis(vec![0.0f64, 1.0])
            .y_axis(vec![0.0f64, 1.0])
            .extent("4 5 4 5 0 0".parse::<Extent>().unwrap())
            .build()
            .unwrap();

        let output = render(&grid).unwrap();

        assert!(output.contains("<RectilinearGrid WholeExtent=\"4 5 4 5 0 0\">"));
        assert!(output.contains("<PointData Vectors=\"Velocity\">"));
        assert!(output.contains("NumberOfComponents=\"3\" format=\"ascii\">\n1.0 1.0 1.0\n"));
    }

    #[test]
    fn data_is_required() {
        let err = RectilinearGrid::builder()
            .x_axis(vec![0.0f64])
            .build()
            .unwrap_err();

        assert!(matches!(err, Error::MissingInput { field: "data" }));
    }
}
