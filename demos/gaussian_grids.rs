//! The same two dimensional Gaussian written on a rectilinear and on a structured grid.

use ndarray::{Array, Array1, Array2};
use vtk_grids::prelude::*;

fn gaussian(x: &Array1<f64>, y: &Array1<f64>, width: f64) -> Array2<f64> {
    Array2::from_shape_fn((x.len(), y.len()), |(i, j)| {
        let r2 = x[i] * x[i] + y[j] * y[j];
        (-r2 / (2.0 * width * width)).exp()
    })
}

fn main() -> Result<(), Error> {
    env_logger::init();

    let x: Array1<f64> = Array::linspace(-1.0, 1.0, 101);
    let y: Array1<f64> = Array::linspace(-1.0, 1.0, 101);
    let z: Array1<f64> = Array::zeros(1);

    let rectilinear = RectilinearGrid::builder()
        .data(gaussian(&x, &y, 0.3))
        .x_axis(x.clone())
        .y_axis(y.clone())
        .z_axis(z.clone())
        .build()?;

    write_vtk_file(&rectilinear, &WriteOptions::new("gaussian.vtr"))?;

    // a coarser copy with its points meshed from the axes
    let x: Array1<f64> = Array::linspace(-1.0, 1.0, 5);
    let y: Array1<f64> = Array::linspace(-1.0, 1.0, 5);

    let structured = StructuredGrid::builder()
        .data(gaussian(&x, &y, 0.3))
        .x_axis(x)
        .y_axis(y)
        .z_axis(z)
        .build()?;

    write_vtk_file(&structured, &WriteOptions::new("gaussian.vts"))?;

    Ok(())
}
