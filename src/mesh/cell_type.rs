use crate::Error;
use std::str::FromStr;

/// VTK cell type codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellType {
    Vertex = 1,
    PolyVertex = 2,
    Line = 3,
    PolyLine = 4,
    Triangle = 5,
    Polygon = 7,
    Pixel = 8,
    Quad = 9,
    Tetra = 10,
    Voxel = 11,
    Hexahedron = 12,
    Pyramid = 14,
}

impl CellType {
    /// Resolve the cell type of elements with `nodes` nodes each.
    ///
    /// Only the table `1: vertex, 2: line, 3: triangle, 4: tetra, 5: pyramid,
    /// 6: hexahedron` is consulted. Any other node count fails with
    /// [`Error::UnsupportedElementType`]; pass an explicit cell type to the grid for
    /// those (or for quads, which share their node count with tetrahedra).
    pub fn from_node_count(nodes: usize) -> Result<Self, Error> {
        match nodes {
            1 => Ok(Self::Vertex),
            2 => Ok(Self::Line),
            3 => Ok(Self::Triangle),
            4 => Ok(Self::Tetra),
            5 => Ok(Self::Pyramid),
            6 => Ok(Self::Hexahedron),
            _ => Err(Error::UnsupportedElementType { nodes }),
        }
    }

    /// the integer written to the `types` array
    pub fn code(&self) -> i64 {
        *self as i64
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Vertex => "vertex",
            Self::PolyVertex => "poly_vertex",
            Self::Line => "line",
            Self::PolyLine => "poly_line",
            Self::Triangle => "triangle",
            Self::Polygon => "polygon",
            Self::Pixel => "pixel",
            Self::Quad => "quad",
            Self::Tetra => "tetra",
            Self::Voxel => "voxel",
            Self::Hexahedron => "hexahedron",
            Self::Pyramid => "pyramid",
        }
    }
}

impl FromStr for CellType {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let cell = match name {
            "vertex" => Self::Vertex,
            "poly_vertex" => Self::PolyVertex,
            "line" => Self::Line,
            "poly_line" => Self::PolyLine,
            "triangle" => Self::Triangle,
            "polygon" => Self::Polygon,
            "pixel" => Self::Pixel,
            "quad" => Self::Quad,
            "tetra" => Self::Tetra,
            "voxel" => Self::Voxel,
            "hexahedron" | "hexa" => Self::Hexahedron,
            "pyramid" => Self::Pyramid,
            _ => {
                return Err(Error::UnknownCellType {
                    name: name.to_string(),
                })
            }
        };

        Ok(cell)
    }
}

impl std::fmt::Display for CellType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[test]
fn node_count_table() {
    let expected = [
        (1, "vertex", 1),
        (2, "line", 3),
        (3, "triangle", 5),
        (4, "tetra", 10),
        (5, "pyramid", 14),
        (6, "hexahedron", 12),
    ];

    for (nodes, name, code) in expected {
        let cell = CellType::from_node_count(nodes).unwrap();
        assert_eq!(cell.name(), name);
        assert_eq!(cell.code(), code);
    }

    assert!(matches!(
        CellType::from_node_count(7),
        Err(Error::UnsupportedElementType { nodes: 7 })
    ));
}

#[test]
fn names_and_aliases() {
    assert_eq!("hexa".parse::<CellType>().unwrap(), CellType::Hexahedron);
    assert_eq!("quad".parse::<CellType>().unwrap().code(), 9);
    assert!("wedge".parse::<CellType>().is_err());
}
