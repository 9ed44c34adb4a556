//! A helix winding slowly upwards, written as a polyline with the curve parameter as data.

use ndarray::{Array, Array1, Array2};
use vtk_grids::prelude::*;

fn main() -> Result<(), Error> {
    env_logger::init();

    let t: Array1<f64> = Array::linspace(0.0, 100.0, 10001);
    let tau = 2.0 * std::f64::consts::PI;

    let points = Array2::from_shape_fn((t.len(), 3), |(i, axis)| match axis {
        0 => (tau * t[i]).cos(),
        1 => (tau * t[i]).sin(),
        _ => (tau * t[i] * 0.01).sin(),
    });

    let line = PolyLine::builder().points(points).data(t).build()?;

    write_vtk_file(&line, &WriteOptions::new("helix.vtp"))?;

    Ok(())
}
