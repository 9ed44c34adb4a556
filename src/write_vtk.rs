use crate::array::{inspect, FieldArray};
use crate::mesh::{DataLocation, GridKind};
use crate::reformat::Reformat;
use crate::traits::Grid;
use crate::Error;
use crate::ShapeError;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::io::Write;
use std::path::PathBuf;

/// the encoding to use when writing an inline dataarray
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Encoding {
    #[default]
    Ascii,
}

impl Encoding {
    fn to_str(&self) -> &'static str {
        match &self {
            Self::Ascii => "ascii",
        }
    }
}

/// Settings for a single call to [`write_vtk_file`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WriteOptions {
    /// destination of the file. `None` writes to the default file name of the grid type
    /// (`out.vtp`, `out.vtr`, `out.vts` or `out.vtu`) in the working directory
    pub path: Option<PathBuf>,
    pub encoding: Encoding,
    /// pretty printing pass run on the file after it is written
    pub reformat: Reformat,
}

impl WriteOptions {
    /// write to `path` with the default encoding and reformatting
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: Some(path.into()),
            ..Default::default()
        }
    }

    pub fn reformat(mut self, reformat: Reformat) -> Self {
        self.reformat = reformat;
        self
    }

    /// the path a grid of type `kind` is written to with these options
    pub fn destination(&self, kind: GridKind) -> PathBuf {
        self.path
            .clone()
            .unwrap_or_else(|| PathBuf::from(kind.default_file_name()))
    }
}

/// Write a complete vtk document for `grid` to a `Writer`
///
/// The output is the xml declaration, the `VTKFile` element of the grid's type and the
/// body written by [`Grid::write_grid`]. Elements are indented by two spaces per level.
pub fn write_vtk<W, G>(writer: W, grid: &G, encoding: Encoding) -> Result<(), Error>
where
    W: Write,
    G: Grid,
{
    let mut writer = Writer::new_with_indent(writer, b' ', 2);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", None, None)))?;

    let kind = grid.kind();
    start_element(&mut writer, "VTKFile", &[("type", kind.as_str())])?;

    grid.write_grid(&mut writer, encoding)?;

    end_element(&mut writer, "VTKFile")?;

    let mut inner = writer.into_inner();
    inner.write_all(b"\n")?;

    Ok(())
}

/// Write `grid` to the file described by `options` and return the path that was written.
///
/// The document is rendered in memory before the file is opened, so a grid that fails
/// validation leaves no file behind. After writing, the file is handed to the
/// [`Reformat`] step of the options. A failing reformat is logged and otherwise ignored.
pub fn write_vtk_file<G: Grid>(grid: &G, options: &WriteOptions) -> Result<PathBuf, Error> {
    let path = options.destination(grid.kind());

    let mut contents = Vec::new();
    write_vtk(&mut contents, grid, options.encoding)?;

    {
        let mut file = std::fs::File::create(&path)?;
        file.write_all(&contents)?;
        file.flush()?;
    }

    options.reformat.apply(&path);

    log::info!("VTK file output :: {}", path.display());

    Ok(path)
}

/// write a single (inline) array of data (such as a pressure field)
/// to the vtk file.
///
/// With one component every value is written on a single line. With more than one
/// component, each tuple of `components` values gets its own line. The number of values
/// in `array` must be a multiple of `components`.
pub fn write_inline_dataarray<W: Write>(
    writer: &mut Writer<W>,
    array: &FieldArray,
    name: &str,
    components: usize,
    encoding: Encoding,
) -> Result<(), Error> {
    let components = components.max(1);
    check_rows(array, name, components)?;

    write_dataarray(writer, array, name, components, components, encoding)
}

/// Write an array declared with a single component, but laid out with `row_width`
/// values per line. This is how connectivity tables are written: one cell per line.
pub fn write_inline_dataarray_rows<W: Write>(
    writer: &mut Writer<W>,
    array: &FieldArray,
    name: &str,
    row_width: usize,
    encoding: Encoding,
) -> Result<(), Error> {
    let row_width = row_width.max(1);
    check_rows(array, name, row_width)?;

    write_dataarray(writer, array, name, 1, row_width, encoding)
}

fn check_rows(array: &FieldArray, name: &str, row_width: usize) -> Result<(), Error> {
    if array.len() % row_width != 0 {
        return Err(ShapeError::ComponentMismatch {
            name: name.to_string(),
            len: array.len(),
            components: row_width,
        }
        .into());
    }

    Ok(())
}

fn write_dataarray<W: Write>(
    writer: &mut Writer<W>,
    array: &FieldArray,
    name: &str,
    components: usize,
    row_width: usize,
    encoding: Encoding,
) -> Result<(), Error> {
    let components = components.to_string();

    start_element(
        writer,
        "DataArray",
        &[
            ("Name", name),
            ("type", array.precision().as_str()),
            ("NumberOfComponents", components.as_str()),
            ("format", encoding.to_str()),
        ],
    )?;

    // the values start on their own line
    let data = format!("\n{}", array.ascii_text(row_width));
    writer.write_event(Event::Text(BytesText::new(&data)))?;

    end_element(writer, "DataArray")
}

/// Write the `<PointData>` or `<CellData>` section holding the payload of a grid
pub(crate) fn write_field<W: Write>(
    writer: &mut Writer<W>,
    location: DataLocation,
    vector: bool,
    name: &str,
    array: &FieldArray,
    encoding: Encoding,
) -> Result<(), Error> {
    let info = inspect(array, vector, name)?;
    let attribute = if vector { "Vectors" } else { "Scalars" };

    start_element(writer, location.element_name(), &[(attribute, name)])?;
    write_inline_dataarray(writer, array, name, info.components, encoding)?;
    end_element(writer, location.element_name())
}

pub(crate) fn start_element<W: Write>(
    writer: &mut Writer<W>,
    name: &str,
    attributes: &[(&str, &str)],
) -> Result<(), Error> {
    let start = BytesStart::new(name).with_attributes(attributes.iter().copied());
    writer.write_event(Event::Start(start))?;

    Ok(())
}

pub(crate) fn end_element<W: Write>(writer: &mut Writer<W>, name: &str) -> Result<(), Error> {
    writer.write_event(Event::End(BytesEnd::new(name)))?;

    Ok(())
}
