use super::{check_length, coordinate_rows, point_order, DataLocation, Extent, GridKind};
use crate::array::{spatial_dims, FieldArray};
use crate::traits::Grid;
use crate::write_vtk::{self, Encoding};
use crate::Error;

use derive_builder::Builder;
use ndarray::Array2;
use quick_xml::Writer;
use std::io::Write;

/// A field on a curvilinear grid with explicit point coordinates, written as
/// `StructuredGrid`.
///
/// The coordinates are either given directly through `points`, or meshed from the
/// three axes so that `x` varies fastest, then `y`, then `z`. Explicit points are
/// either a flat `(N, 3)` list already in VTK point order, or shaped like the field
/// itself (`(nx, ny, 3)` or `(nx, ny, nz, 3)`), in which case they are reordered the
/// same way the field is.
#[derive(Debug, Clone, Builder)]
#[builder(build_fn(error = "crate::Error"))]
pub struct StructuredGrid {
    #[builder(setter(into))]
    pub data: FieldArray,
    #[builder(default)]
    pub vector: bool,
    #[builder(default)]
    pub location: DataLocation,
    #[builder(setter(into), default = "String::from(\"Data\")")]
    pub name: String,
    /// explicit point coordinates, used instead of the axes when present
    #[builder(setter(into, strip_option), default)]
    pub points: Option<FieldArray>,
    #[builder(setter(into, strip_option), default)]
    pub x_axis: Option<FieldArray>,
    #[builder(setter(into, strip_option), default)]
    pub y_axis: Option<FieldArray>,
    #[builder(setter(into, strip_option), default)]
    pub z_axis: Option<FieldArray>,
    #[builder(setter(strip_option), default)]
    pub extent: Option<Extent>,
}

impl StructuredGrid {
    pub fn builder() -> StructuredGridBuilder {
        StructuredGridBuilder::default()
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

    /// The point coordinates as an `(N, 3)` list in VTK point order.
    pub fn point_list(&self) -> Result<FieldArray, Error> {
        match &self.points {
            Some(points) if points.ndim() <= 2 => {
                coordinate_rows(points, "Axis")?;
                Ok(points.clone())
            }
            Some(points) => {
                let dims = spatial_dims(points, true, "Axis")?;
                let ordered = point_order(points, dims, true)?;
                let rows: usize = dims.iter().product();
                let list = ordered.reshape(&[rows, ordered.len() / rows.max(1)])?;
                coordinate_rows(&list, "Axis")?;
                Ok(list)
            }
            None => Ok(self.meshed_axes().into()),
        }
    }

    /// the outer product of the three axes, `x` fastest
    fn meshed_axes(&self) -> Array2<f64> {
        let axis = |axis: &Option<FieldArray>| match axis {
            Some(axis) => axis.to_f64().iter().copied().collect::<Vec<_>>(),
            None => vec![0.0],
        };

        let (x, y, z) = (axis(&self.x_axis), axis(&self.y_axis), axis(&self.z_axis));

        let mut points = Array2::zeros((x.len() * y.len() * z.len(), 3));
        let mut row = 0;

        for &zk in z.iter() {
            for &yj in y.iter() {
                for &xi in x.iter() {
                    points[[row, 0]] = xi;
                    points[[row, 1]] = yj;
                    points[[row, 2]] = zk;
                    row += 1;
                }
            }
        }

        points
    }
}

impl Grid for StructuredGrid {
    fn kind(&self) -> GridKind {
        GridKind::StructuredGrid
    }

    fn write_grid<W: Write>(
        &self,
        writer: &mut Writer<W>,
        encoding: Encoding,
    ) -> Result<(), Error> {
        let dims = spatial_dims(&self.data, self.vector, &self.name)?;
        let extent = self.whole_extent()?.to_string();
        let points = self.point_list()?;
        let number_of_points = coordinate_rows(&points, "Axis")?;

        if self.location == DataLocation::Point {
            check_length("Axis", dims.iter().product(), number_of_points)?;
        }

        log::debug!(
            "structured grid with extent {} and {} points",
            extent,
            number_of_points
        );

        let data = point_order(&self.data, dims, self.vector)?;

        write_vtk::start_element(writer, "StructuredGrid", &[("WholeExtent", extent.as_str())])?;
        write_vtk::start_element(writer, "Piece", &[("Extent", extent.as_str())])?;

        write_vtk::write_field(writer, self.location, self.vector, &self.name, &data, encoding)?;

        write_vtk::start_element(writer, "Points", &[])?;
        write_vtk::write_inline_dataarray(writer, &points, "Axis", 3, encoding)?;
        write_vtk::end_element(writer, "Points")?;

        write_vtk::end_element(writer, "Piece")?;
        write_vtk::end_element(writer, "StructuredGrid")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ShapeError;
    use ndarray::{arr2, Array2, Array3};

    fn render(grid: &StructuredGrid) -> Result<String, Error> {
        let mut output = Vec::new();
        crate::write_vtk(&mut output, grid, Encoding::Ascii)?;
        Ok(String::from_utf8(output).unwrap())
    }

    #[test]
    fn axes_meshed_x_fastest() {
        let grid = StructuredGrid::builder()
            .data(Array2::<f64>::zeros((2, 2)))
            .x_axis(vec![0.0f64, 1.0])
            .y_axis(vec![5.0f64, 6.0])
            .build()
            .unwrap();

        let points = grid.point_list().unwrap();
        assert_eq!(
            points,
            FieldArray::from(arr2(&[
                [0.0f64, 5.0, 0.0],
                [1.0, 5.0, 0.0],
                [0.0, 6.0, 0.0],
                [1.0, 6.0, 0.0],
            ]))
        );

        let output = render(&grid).unwrap();
        assert!(output.contains("<StructuredGrid WholeExtent=\"0 1 0 1 0 0\">"));
        assert!(output.contains("<Points>"));
        assert!(output.contains(
            "<DataArray Name=\"Axis\" type=\"Float64\" NumberOfComponents=\"3\" format=\"ascii\">\n\
             0.0 5.0 0.0\n1.0 5.0 0.0\n0.0 6.0 0.0\n1.0 6.0 0.0\n</DataArray>"
        ));
    }

    #[test]
    fn explicit_point_list() {
        let grid = StructuredGrid::builder()
            .data(vec![1i64, 2])
            .points(arr2(&[[0.0f32, 0.0, 0.0], [0.5, 0.5, 0.0]]))
            .build()
            .unwrap();

        let output = render(&grid).unwrap();

        assert!(output.contains("WholeExtent=\"0 1 0 0 0 0\""));
        assert!(output.contains("type=\"Float32\" NumberOfComponents=\"3\" format=\"ascii\">\n0.0 0.0 0.0\n0.5 0.5 0.0\n"));
        assert!(output.contains("type=\"Int64\" NumberOfComponents=\"1\" format=\"ascii\">\n1 2 \n"));
    }

    #[test]
    fn gridded_points_are_reordered() {
        // points shaped like the field: (nx=2, ny=2, 3)
        let points = Array3::from_shape_fn((2, 2, 3), |(i, j, c)| match c {
            0 => i as f64,
            1 => j as f64,
            _ => 0.0,
        });
        let grid = StructuredGrid::builder()
            .data(Array2::<f64>::zeros((2, 2)))
            .points(points)
            .build()
            .unwrap();

        assert_eq!(
            grid.point_list().unwrap(),
            FieldArray::from(arr2(&[
                [0.0f64, 0.0, 0.0],
                [1.0, 0.0, 0.0],
                [0.0, 1.0, 0.0],
                [1.0, 1.0, 0.0],
            ]))
        );
    }

    #[test]
    fn point_count_must_match_field() {
        let grid = StructuredGrid::builder()
            .data(Array2::<f64>::zeros((3, 3)))
            .x_axis(vec![0.0f64, 1.0])
            .y_axis(vec![0.0f64, 1.0])
            .build()
            .unwrap();

        assert!(matches!(
            render(&grid).unwrap_err(),
            Error::Shape(ShapeError::Length { expected: 9, actual: 4, .. })
        ));
    }

    #[test]
    fn points_need_three_coordinates() {
        let grid = StructuredGrid::builder()
            .data(vec![0.0f64, 1.0])
            .points(arr2(&[[0.0f64, 0.0], [1.0, 0.0]]))
            .build()
            .unwrap();

        assert!(matches!(
            render(&grid).unwrap_err(),
            Error::Shape(ShapeError::Columns { expected: 3, .. })
        ));
    }
}
