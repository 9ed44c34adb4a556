use super::{check_length, coordinate_rows, CellType, DataLocation, GridKind};
use crate::array::{inspect, FieldArray};
use crate::traits::Grid;
use crate::write_vtk::{self, Encoding};
use crate::Error;
use crate::ShapeError;

use derive_builder::Builder;
use ndarray::{Array1, Array2, Ix2};
use quick_xml::Writer;
use std::io::Write;

/// A mesh of explicit nodes and elements of a single cell type, written as
/// `UnstructuredGrid`.
///
/// Every row of `elements` lists the (zero based) node indices of one element. The cell
/// type is looked up from the number of nodes per element through
/// [`CellType::from_node_count`] unless `element_type` is set. Element tables read from
/// text files hold floats; they are accepted as long as every value is integral.
///
/// ```
/// use vtk_grids::{CellType, UnstructuredGrid};
/// use ndarray::arr2;
///
/// let grid = UnstructuredGrid::builder()
///     .nodes(arr2(&[[0.0f64, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]))
///     .elements(arr2(&[[0i64, 1, 2, 3]]))
///     .data(vec![1.0f64])
///     .build()
///     .unwrap();
///
/// assert_eq!(grid.cell_type().unwrap(), CellType::Tetra);
/// ```
#[derive(Debug, Clone, Builder)]
#[builder(build_fn(error = "crate::Error"))]
pub struct UnstructuredGrid {
    /// node coordinates, shape `(N, 3)`
    #[builder(setter(into))]
    pub nodes: FieldArray,
    /// node indices of every element, shape `(M, k)`
    #[builder(setter(into))]
    pub elements: FieldArray,
    #[builder(setter(into))]
    pub data: FieldArray,
    #[builder(default)]
    pub vector: bool,
    #[builder(default = "DataLocation::Cell")]
    pub location: DataLocation,
    #[builder(setter(into), default = "String::from(\"Data\")")]
    pub name: String,
    /// cell type written for every element instead of the one derived from `k`
    #[builder(setter(strip_option), default)]
    pub element_type: Option<CellType>,
}

impl UnstructuredGrid {
    pub fn builder() -> UnstructuredGridBuilder {
        UnstructuredGridBuilder::default()
    }

    /// `(M, k)`: the number of elements and the number of nodes per element
    pub fn element_shape(&self) -> Result<(usize, usize), Error> {
        match self.elements.shape() {
            &[elements, nodes] => Ok((elements, nodes)),
            shape => Err(ShapeError::Dimensions {
                name: "elements".to_string(),
                expected: 2,
                actual: shape.to_vec(),
            }
            .into()),
        }
    }

    pub fn cell_type(&self) -> Result<CellType, Error> {
        match self.element_type {
            Some(cell) => Ok(cell),
            None => CellType::from_node_count(self.element_shape()?.1),
        }
    }

    /// The element table as node indices, checked against the number of nodes
    pub fn connectivity(&self) -> Result<Array2<i64>, Error> {
        let nodes = coordinate_rows(&self.nodes, "nodes")?;
        self.element_shape()?;

        let connectivity = self
            .elements
            .to_i64("elements")?
            .into_dimensionality::<Ix2>()?;

        if let Some(&index) = connectivity
            .iter()
            .find(|&&index| index < 0 || index as usize >= nodes)
        {
            return Err(Error::NodeIndexOutOfRange { index, nodes });
        }

        Ok(connectivity)
    }

    /// cumulative end offset `(i + 1) * k` of every element
    pub fn offsets(&self) -> Result<Array1<i64>, Error> {
        let (elements, nodes) = self.element_shape()?;
        Ok(Array1::from_shape_fn(elements, |i| ((i + 1) * nodes) as i64))
    }

    /// the cell type code of every element
    pub fn types(&self) -> Result<Array1<i64>, Error> {
        let (elements, _) = self.element_shape()?;
        Ok(Array1::from_elem(elements, self.cell_type()?.code()))
    }
}

impl Grid for UnstructuredGrid {
    fn kind(&self) -> GridKind {
        GridKind::UnstructuredGrid
    }

    fn write_grid<W: Write>(
        &self,
        writer: &mut Writer<W>,
        encoding: Encoding,
    ) -> Result<(), Error> {
        let number_of_points = coordinate_rows(&self.nodes, "nodes")?;
        let (number_of_cells, nodes_per_cell) = self.element_shape()?;
        let cell_type = self.cell_type()?;
        let connectivity = self.connectivity()?;

        let info = inspect(&self.data, self.vector, &self.name)?;
        let expected = match self.location {
            DataLocation::Point => number_of_points,
            DataLocation::Cell => number_of_cells,
        };
        check_length(&self.name, expected, info.elements)?;

        log::debug!(
            "unstructured grid with {} nodes and {} {} elements",
            number_of_points,
            number_of_cells,
            cell_type
        );

        let points = number_of_points.to_string();
        let cells = number_of_cells.to_string();

        write_vtk::start_element(writer, "UnstructuredGrid", &[])?;
        write_vtk::start_element(
            writer,
            "Piece",
            &[
                ("NumberOfPoints", points.as_str()),
                ("NumberOfCells", cells.as_str()),
            ],
        )?;

        write_vtk::write_field(writer, self.location, self.vector, &self.name, &self.data, encoding)?;

        write_vtk::start_element(writer, "Points", &[])?;
        write_vtk::write_inline_dataarray(writer, &self.nodes, "Nodes", 3, encoding)?;
        write_vtk::end_element(writer, "Points")?;

        write_vtk::start_element(writer, "Cells", &[])?;
        write_vtk::write_inline_dataarray_rows(
            writer,
            &connectivity.into(),
            "connectivity",
            nodes_per_cell,
            encoding,
        )?;
        write_vtk::write_inline_dataarray(writer, &self.offsets()?.into(), "offsets", 1, encoding)?;
        write_vtk::write_inline_dataarray(writer, &self.types()?.into(), "types", 1, encoding)?;
        write_vtk::end_element(writer, "Cells")?;

        write_vtk::end_element(writer, "Piece")?;
        write_vtk::end_element(writer, "UnstructuredGrid")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::arr2;

    fn nodes() -> Array2<f64> {
        arr2(&[
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [0.0, 0.0, 1.0],
            [1.0, 1.0, 1.0],
        ])
    }

    fn two_tetras() -> UnstructuredGrid {
        UnstructuredGrid::builder()
            .nodes(nodes())
            .elements(arr2(&[[0i64, 1, 2, 3], [1, 2, 3, 4]]))
            .data(vec![0.25f64, 0.75])
            .build()
            .unwrap()
    }

    fn render(grid: &UnstructuredGrid) -> Result<String, Error> {
        let mut output = Vec::new();
        crate::write_vtk(&mut output, grid, Encoding::Ascii)?;
        Ok(String::from_utf8(output).unwrap())
    }

    #[test]
    fn tetra_cells() {
        let grid = two_tetras();

        assert_eq!(grid.cell_type().unwrap(), CellType::Tetra);
        assert_eq!(grid.offsets().unwrap().to_vec(), vec![4, 8]);
        assert_eq!(grid.types().unwrap().to_vec(), vec![10, 10]);

        let output = render(&grid).unwrap();

        assert!(output.contains("<Piece NumberOfPoints=\"5\" NumberOfCells=\"2\">"));
        assert!(output.contains("<CellData Scalars=\"Data\">"));
        assert!(output.contains("<DataArray Name=\"Nodes\" type=\"Float64\" NumberOfComponents=\"3\" format=\"ascii\">"));
        assert!(output.contains(
            "<DataArray Name=\"connectivity\" type=\"Int64\" NumberOfComponents=\"1\" format=\"ascii\">\n\
             0 1 2 3\n1 2 3 4\n</DataArray>"
        ));
        assert!(output.contains(">\n4 8 \n</DataArray>"));
        assert!(output.contains(">\n10 10 \n</DataArray>"));
    }

    #[test]
    fn float_element_tables_are_accepted() {
        let grid = UnstructuredGrid::builder()
            .nodes(nodes())
            .elements(arr2(&[[0.0f64, 1.0, 2.0]]))
            .data(vec![1i32])
            .build()
            .unwrap();

        assert_eq!(grid.cell_type().unwrap(), CellType::Triangle);
        assert_eq!(grid.connectivity().unwrap(), arr2(&[[0i64, 1, 2]]));
    }

    #[test]
    fn unmapped_node_count() {
        let grid = UnstructuredGrid::builder()
            .nodes(nodes())
            .elements(arr2(&[[0i64, 1, 2, 3, 4, 0, 1]]))
            .data(vec![0.0f64])
            .build()
            .unwrap();

        assert!(matches!(
            render(&grid).unwrap_err(),
            Error::UnsupportedElementType { nodes: 7 }
        ));
    }

    #[test]
    fn explicit_element_type() {
        let grid = UnstructuredGrid::builder()
            .nodes(nodes())
            .elements(arr2(&[[0i64, 1, 4, 2]]))
            .data(vec![0.0f64])
            .element_type(CellType::Quad)
            .build()
            .unwrap();

        let output = render(&grid).unwrap();
        assert!(output.contains(">\n9 \n</DataArray>"));
    }

    #[test]
    fn node_index_out_of_range() {
        let grid = UnstructuredGrid::builder()
            .nodes(nodes())
            .elements(arr2(&[[0i64, 1, 2, 5]]))
            .data(vec![0.0f64])
            .build()
            .unwrap();

        assert!(matches!(
            render(&grid).unwrap_err(),
            Error::NodeIndexOutOfRange { index: 5, nodes: 5 }
        ));
    }

    #[test]
    fn point_data_counts_nodes() {
        let mut grid = two_tetras();
        grid.location = DataLocation::Point;

        assert!(matches!(
            render(&grid).unwrap_err(),
            Error::Shape(ShapeError::Length { expected: 5, actual: 2, .. })
        ));

        grid.data = vec![0.0f64; 5].into();
        let output = render(&grid).unwrap();
        assert!(output.contains("<PointData Scalars=\"Data\">"));
    }

    #[test]
    fn elements_must_be_a_table() {
        let grid = UnstructuredGrid::builder()
            .nodes(nodes())
            .elements(vec![0i64, 1, 2])
            .data(vec![0.0f64])
            .build()
            .unwrap();

        assert!(matches!(
            render(&grid).unwrap_err(),
            Error::Shape(ShapeError::Dimensions { expected: 2, .. })
        ));
    }

    #[test]
    fn missing_elements_fail_loudly() {
        let err = UnstructuredGrid::builder()
            .nodes(nodes())
            .data(vec![0.0f64])
            .build()
            .unwrap_err();

        assert!(matches!(err, Error::MissingInput { field: "elements" }));
    }
}
