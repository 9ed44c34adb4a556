//! Write a tetrahedral mesh read from `nodes.dat` and `elems.dat`.
//!
//! `nodes.dat` has one `x y z` row per node. Every row of `elems.dat` starts with the
//! element number followed by the four node indices of the element. Both paths can be
//! passed on the command line; without them a unit cube split into five tetrahedra is
//! written to a temporary directory and read back.
//!
//! The cell data is the mean `z` coordinate of the nodes of every element.

use ndarray::{s, Array1, Array2};
use std::path::{Path, PathBuf};
use vtk_grids::prelude::*;
use vtk_grids::table::read_table;

const CUBE_NODES: &str = "\
# x y z
0 0 0
1 0 0
0 1 0
1 1 0
0 0 1
1 0 1
0 1 1
1 1 1
";

const CUBE_ELEMS: &str = "\
# element  n0 n1 n2 n3
0  1 0 3 5
1  2 0 3 6
2  4 0 5 6
3  7 3 5 6
4  0 3 5 6
";

fn cube_tables(dir: &Path) -> std::io::Result<(PathBuf, PathBuf)> {
    let nodes = dir.join("nodes.dat");
    let elems = dir.join("elems.dat");

    std::fs::write(&nodes, CUBE_NODES)?;
    std::fs::write(&elems, CUBE_ELEMS)?;

    Ok((nodes, elems))
}

fn mean_height(nodes: &Array2<f64>, elements: &Array2<f64>) -> Array1<f64> {
    elements
        .rows()
        .into_iter()
        .map(|element| {
            let total: f64 = element.iter().map(|&node| nodes[[node as usize, 2]]).sum();
            total / element.len() as f64
        })
        .collect()
}

fn main() -> Result<(), Error> {
    env_logger::init();

    let scratch = tempfile::tempdir()?;

    let mut args = std::env::args().skip(1);
    let (node_file, elem_file) = match (args.next(), args.next()) {
        (Some(nodes), Some(elems)) => (PathBuf::from(nodes), PathBuf::from(elems)),
        _ => cube_tables(scratch.path())?,
    };

    let nodes = read_table(&node_file)?;
    // the first column numbers the elements
    let elements = read_table(&elem_file)?.slice(s![.., 1..]).to_owned();

    let data = mean_height(&nodes, &elements);

    let grid = UnstructuredGrid::builder()
        .nodes(nodes)
        .elements(elements)
        .data(data)
        .build()?;

    write_vtk_file(&grid, &WriteOptions::new("tetra.vtu"))?;

    Ok(())
}
