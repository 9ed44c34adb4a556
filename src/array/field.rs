use super::Precision;
use crate::traits::Numeric;
use crate::Error;
use ndarray::{Array, Array1, ArrayD, Dimension, IxDyn};
use num_traits::AsPrimitive;

/// run `$body` with `$arr` bound to the array inside whichever variant `$field` holds
macro_rules! with_array {
    ($field:expr, $arr:ident => $body:expr) => {
        match $field {
            FieldArray::Int32($arr) => $body,
            FieldArray::Int64($arr) => $body,
            FieldArray::Float32($arr) => $body,
            FieldArray::Float64($arr) => $body,
        }
    };
}

/// An owned numeric array of any dimension, tagged with its element type.
///
/// Any `ndarray` array (or `Vec`) of `i32`, `i64`, `f32` or `f64` converts into a
/// `FieldArray` with `.into()`, which is how the grid builders accept their inputs:
///
/// ```
/// use vtk_grids::{FieldArray, Precision};
///
/// let field: FieldArray = ndarray::Array2::<f32>::zeros((4, 3)).into();
/// assert_eq!(field.precision(), Precision::Float32);
/// assert_eq!(field.shape(), &[4, 3]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum FieldArray {
    Int32(ArrayD<i32>),
    Int64(ArrayD<i64>),
    Float32(ArrayD<f32>),
    Float64(ArrayD<f64>),
}

impl FieldArray {
    /// an array of zeros with the given shape and element type
    pub fn zeros(shape: &[usize], precision: Precision) -> Self {
        match precision {
            Precision::Int32 => Self::Int32(ArrayD::zeros(IxDyn(shape))),
            Precision::Int64 => Self::Int64(ArrayD::zeros(IxDyn(shape))),
            Precision::Float32 => Self::Float32(ArrayD::zeros(IxDyn(shape))),
            Precision::Float64 => Self::Float64(ArrayD::zeros(IxDyn(shape))),
        }
    }

    pub fn precision(&self) -> Precision {
        match self {
            Self::Int32(_) => Precision::Int32,
            Self::Int64(_) => Precision::Int64,
            Self::Float32(_) => Precision::Float32,
            Self::Float64(_) => Precision::Float64,
        }
    }

    pub fn shape(&self) -> &[usize] {
        with_array!(self, arr => arr.shape())
    }

    pub fn ndim(&self) -> usize {
        self.shape().len()
    }

    /// total number of values in the array
    pub fn len(&self) -> usize {
        with_array!(self, arr => arr.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// convert every value to another element type with `as` semantics
    pub fn cast(&self, precision: Precision) -> FieldArray {
        match precision {
            Precision::Int32 => FieldArray::Int32(with_array!(self, arr => cast_array(arr))),
            Precision::Int64 => FieldArray::Int64(with_array!(self, arr => cast_array(arr))),
            Precision::Float32 => FieldArray::Float32(with_array!(self, arr => cast_array(arr))),
            Precision::Float64 => FieldArray::Float64(with_array!(self, arr => cast_array(arr))),
        }
    }

    pub fn to_f64(&self) -> ArrayD<f64> {
        with_array!(self, arr => cast_array(arr))
    }

    /// Convert to an index array. Floating point values are accepted as long as they
    /// have no fractional part, which is what tables read from text files contain.
    pub fn to_i64(&self, name: &str) -> Result<ArrayD<i64>, Error> {
        with_array!(self, arr => integral_array(arr, name))
    }

    /// copy the values (in row-major order) into an array of a new shape
    pub(crate) fn reshape(&self, shape: &[usize]) -> Result<FieldArray, Error> {
        let reshaped = with_array!(self, arr => FieldArray::from(reshape_array(arr, shape)?));
        Ok(reshaped)
    }

    /// reorder the axes of the array without copying
    pub(crate) fn permuted(self, axes: &[usize]) -> FieldArray {
        with_array!(self, arr => FieldArray::from(arr.permuted_axes(IxDyn(axes))))
    }

    /// The ascii body of a `DataArray`: all values in row-major order, either on a
    /// single line each followed by a space (`row_width <= 1`), or `row_width` space
    /// separated values per line.
    pub(crate) fn ascii_text(&self, row_width: usize) -> String {
        with_array!(self, arr => ascii_rows(arr, row_width))
    }
}

impl<T, D> From<Array<T, D>> for FieldArray
where
    T: Numeric,
    D: Dimension,
{
    fn from(x: Array<T, D>) -> Self {
        T::into_field(x.into_dyn())
    }
}

impl<T> From<Vec<T>> for FieldArray
where
    T: Numeric,
{
    fn from(x: Vec<T>) -> Self {
        T::into_field(Array1::from(x).into_dyn())
    }
}

fn cast_array<A, B>(array: &ArrayD<A>) -> ArrayD<B>
where
    A: AsPrimitive<B>,
    B: Copy + 'static,
{
    array.mapv(|value| value.as_())
}

fn integral_array<A: Numeric>(array: &ArrayD<A>, name: &str) -> Result<ArrayD<i64>, Error> {
    let mut indices = Vec::with_capacity(array.len());

    for &value in array.iter() {
        let float = <A as AsPrimitive<f64>>::as_(value);
        let int = <A as AsPrimitive<i64>>::as_(value);

        if int as f64 != float {
            return Err(Error::NonIntegral {
                name: name.to_string(),
            });
        }

        indices.push(int);
    }

    Ok(ArrayD::from_shape_vec(array.raw_dim(), indices)?)
}

fn reshape_array<A: Clone>(
    array: &ArrayD<A>,
    shape: &[usize],
) -> Result<ArrayD<A>, ndarray::ShapeError> {
    ArrayD::from_shape_vec(IxDyn(shape), array.iter().cloned().collect())
}

fn ascii_rows<A: Numeric>(array: &ArrayD<A>, row_width: usize) -> String {
    let mut data = String::with_capacity(array.len() * 8 + 1);

    if row_width <= 1 {
        for value in array.iter() {
            value.push_ascii(&mut data);
            data.push(' ');
        }
        data.push('\n');
        return data;
    }

    for (idx, value) in array.iter().enumerate() {
        value.push_ascii(&mut data);

        if (idx + 1) % row_width == 0 {
            data.push('\n');
        } else {
            data.push(' ');
        }
    }

    data
}
