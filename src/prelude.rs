//! Common traits and types that are useful for working with `vtk_grids`

pub use crate::array::{FieldArray, Precision};
pub use crate::mesh::{CellType, DataLocation, Extent, GridKind};
pub use crate::mesh::{PolyLine, RectilinearGrid, StructuredGrid, UnstructuredGrid};
pub use crate::traits::{Grid, Numeric};
pub use crate::write_vtk::{write_vtk, write_vtk_file, Encoding, WriteOptions};
pub use crate::{Error, Reformat};
