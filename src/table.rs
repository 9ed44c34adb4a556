//! Reading node and element tables from whitespace delimited text files.
//!
//! These are the plain numeric tables mesh generators commonly dump, one row per line:
//!
//! ```text
//! # node   x     y     z
//! 0.0  0.0  0.0
//! 1.0  0.0  0.0
//! ```
//!
//! Everything after a `#` is ignored and blank lines are skipped. Every remaining line
//! must have the same number of columns.

use crate::array::{FieldArray, Precision};
use crate::Error;

use ndarray::Array2;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Read the table at `path` as an `(rows, columns)` array of floats
pub fn read_table<P: AsRef<Path>>(path: P) -> Result<Array2<f64>, Error> {
    let path = path.as_ref();
    let reader = BufReader::new(File::open(path)?);

    let table_error = |line: usize, reason: String| Error::Table {
        path: path.display().to_string(),
        line,
        reason,
    };

    let mut values = Vec::new();
    let mut columns = None;
    let mut rows = 0;

    for (line_num, line) in reader.lines().enumerate() {
        let line = line?;
        let content = match line.split_once('#') {
            Some((content, _comment)) => content,
            None => line.as_str(),
        };

        if content.trim().is_empty() {
            continue;
        }

        let start = values.len();
        for token in content.split_ascii_whitespace() {
            let value = token
                .parse::<f64>()
                .map_err(|_| table_error(line_num + 1, format!("`{}` is not a number", token)))?;
            values.push(value);
        }

        let width = values.len() - start;
        match columns {
            None => columns = Some(width),
            Some(expected) if expected != width => {
                return Err(table_error(
                    line_num + 1,
                    format!("expected {} columns, found {}", expected, width),
                ));
            }
            Some(_) => (),
        }

        rows += 1;
    }

    let columns = columns.unwrap_or(0);
    log::debug!("read {}x{} table from {}", rows, columns, path.display());

    Ok(Array2::from_shape_vec((rows, columns), values)?)
}

/// Read the table at `path` and store it with the element type named by `dtype`.
///
/// `dtype` is resolved with [`Precision::from_dtype`]. Values are converted with `as`
/// semantics, so reading an index table as `"int64"` truncates any fractional part.
pub fn read_table_as<P: AsRef<Path>>(path: P, dtype: &str) -> Result<FieldArray, Error> {
    let precision = Precision::from_dtype(dtype)?;
    let table = FieldArray::from(read_table(path)?);

    Ok(table.cast(precision))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn table_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn comments_and_blank_lines() {
        let file = table_file("# x y z\n0.0 0.0 0.0\n\n1.0 2.0 3.0  # second node\n");
        let table = read_table(file.path()).unwrap();

        assert_eq!(table, ndarray::arr2(&[[0.0f64, 0.0, 0.0], [1.0, 2.0, 3.0]]));
    }

    #[test]
    fn ragged_rows_name_the_line() {
        let file = table_file("0 1 2 3\n1 2 3\n");
        let err = read_table(file.path()).unwrap_err();

        match err {
            Error::Table { line, reason, .. } => {
                assert_eq!(line, 2);
                assert_eq!(reason, "expected 4 columns, found 3");
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn bad_token() {
        let file = table_file("0 1\n2 three\n");
        assert!(matches!(
            read_table(file.path()).unwrap_err(),
            Error::Table { line: 2, .. }
        ));
    }

    #[test]
    fn typed_tables() {
        let file = table_file("0 1 2 3\n4 5 6 7\n");

        let table = read_table_as(file.path(), "int64").unwrap();
        assert_eq!(table.precision(), Precision::Int64);
        assert_eq!(table.shape(), &[2, 4]);

        assert!(matches!(
            read_table_as(file.path(), "bool").unwrap_err(),
            Error::UnsupportedDataType { .. }
        ));
    }

    #[test]
    fn empty_table() {
        let file = table_file("# nothing here\n");
        assert_eq!(read_table(file.path()).unwrap().shape(), &[0, 0]);
    }
}
