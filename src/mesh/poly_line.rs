use super::{check_length, coordinate_rows, DataLocation, GridKind};
use crate::array::{FieldArray, Precision};
use crate::traits::Grid;
use crate::write_vtk::{self, Encoding};
use crate::Error;

use derive_builder::Builder;
use ndarray::{Array1, Array2};
use quick_xml::Writer;
use std::io::Write;

/// A single polyline through an ordered sequence of points, written as `PolyData`.
///
/// Point `i` is connected to point `i + 1`, so `N` points make `N - 1` line segments.
/// The payload is one scalar per point. If no data is given, a field of zeros is
/// written in its place.
///
/// ```
/// use vtk_grids::PolyLine;
///
/// let points = ndarray::arr2(&[[0.0f64, 0.0, 0.0], [1.0, 0.0, 0.0], [1.0, 1.0, 0.0]]);
/// let line = PolyLine::builder()
///     .points(points)
///     .data(vec![0.0f64, 0.5, 1.0])
///     .build()
///     .unwrap();
///
/// assert_eq!(line.number_of_lines(), 2);
/// ```
#[derive(Debug, Clone, Builder)]
#[builder(build_fn(error = "crate::Error"))]
pub struct PolyLine {
    /// point coordinates, shape `(N, 3)`
    #[builder(setter(into))]
    pub points: FieldArray,
    /// one scalar per point
    #[builder(setter(into, strip_option), default)]
    pub data: Option<FieldArray>,
    #[builder(setter(into), default = "String::from(\"Line\")")]
    pub name: String,
}

impl PolyLine {
    pub fn builder() -> PolyLineBuilder {
        PolyLineBuilder::default()
    }

    pub fn number_of_points(&self) -> usize {
        self.points.shape().first().copied().unwrap_or(0)
    }

    pub fn number_of_lines(&self) -> usize {
        self.number_of_points().saturating_sub(1)
    }

    /// the point pairs `(i, i + 1)` of every segment
    pub fn connectivity(&self) -> Array2<i64> {
        Array2::from_shape_fn((self.number_of_lines(), 2), |(segment, end)| {
            (segment + end) as i64
        })
    }

    /// the end offset of every segment into [`connectivity`](PolyLine::connectivity)
    pub fn offsets(&self) -> Array1<i64> {
        Array1::from_shape_fn(self.number_of_lines(), |segment| 2 * (segment as i64 + 1))
    }
}

impl Grid for PolyLine {
    fn kind(&self) -> GridKind {
        GridKind::PolyData
    }

    fn write_grid<W: Write>(
        &self,
        writer: &mut Writer<W>,
        encoding: Encoding,
    ) -> Result<(), Error> {
        let points = coordinate_rows(&self.points, "points")?;

        let data = match &self.data {
            Some(data) => {
                check_length(&self.name, points, data.len())?;
                data.clone()
            }
            None => FieldArray::zeros(&[points], Precision::Float64),
        };

        let lines = self.number_of_lines();
        log::debug!("polyline with {} points and {} segments", points, lines);

        let number_of_points = points.to_string();
        let number_of_lines = lines.to_string();

        write_vtk::start_element(writer, "PolyData", &[])?;
        write_vtk::start_element(
            writer,
            "Piece",
            &[
                ("NumberOfPoints", number_of_points.as_str()),
                ("NumberOfLines", number_of_lines.as_str()),
                ("NumberOfVerts", "0"),
                ("NumberOfStrips", "0"),
                ("NumberOfPolys", "0"),
            ],
        )?;

        write_vtk::write_field(writer, DataLocation::Point, false, &self.name, &data, encoding)?;

        write_vtk::start_element(writer, "Points", &[])?;
        write_vtk::write_inline_dataarray(writer, &self.points, "points", 3, encoding)?;
        write_vtk::end_element(writer, "Points")?;

        write_vtk::start_element(writer, "Lines", &[])?;
        write_vtk::write_inline_dataarray(
            writer,
            &self.connectivity().into(),
            "connectivity",
            1,
            encoding,
        )?;
        write_vtk::write_inline_dataarray(writer, &self.offsets().into(), "offsets", 1, encoding)?;
        write_vtk::end_element(writer, "Lines")?;

        write_vtk::end_element(writer, "Piece")?;
        write_vtk::end_element(writer, "PolyData")
    }
}
