use crate::Error;
use std::str::FromStr;

/// Describes the index range of a structured dataset, written as the
/// `WholeExtent` of the grid and the `Extent` of its piece.
///
/// Most often you want [`Extent::from_dims`], which covers the full index
/// range of a field with the given number of values along each axis.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extent {
    pub x_start: usize,
    pub x_end: usize,
    pub y_start: usize,
    pub y_end: usize,
    pub z_start: usize,
    pub z_end: usize,
}

impl Extent {
    /// the extent `0 nx-1 0 ny-1 0 nz-1`. Axes of length zero produce `0 0`.
    pub fn from_dims(dims: [usize; 3]) -> Self {
        let [nx, ny, nz] = dims;

        Self {
            x_start: 0,
            x_end: nx.saturating_sub(1),
            y_start: 0,
            y_end: ny.saturating_sub(1),
            z_start: 0,
            z_end: nz.saturating_sub(1),
        }
    }

    /// Get the total length in the X direction for this
    /// local segment as paraview would interpret it
    pub fn x_len(&self) -> usize {
        self.x_end - self.x_start + 1
    }

    /// Get the total length in the Y direction for this
    /// local segment as paraview would interpret it
    pub fn y_len(&self) -> usize {
        self.y_end - self.y_start + 1
    }

    /// Get the total length in the Z direction for this
    /// local segment as paraview would interpret it
    pub fn z_len(&self) -> usize {
        self.z_end - self.z_start + 1
    }
}

impl std::fmt::Display for Extent {
    /// Format the extent into a string that would be written to a vtk file
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {} {} {} {}",
            self.x_start, self.x_end, self.y_start, self.y_end, self.z_start, self.z_end
        )
    }
}

impl FromStr for Extent {
    type Err = Error;

    /// Parse an extent in the form you would find in a vtk file:
    /// `"x_start x_end y_start y_end z_start z_end"`
    ///
    /// # Example
    /// ```
    /// let extent: vtk_grids::Extent = "0 10 0 20 0 0".parse().unwrap();
    /// assert_eq!(extent.x_len(), 11);
    /// assert_eq!(extent.z_len(), 1);
    /// ```
    fn from_str(span_string: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidExtent {
            extent: span_string.to_string(),
        };

        let values = span_string
            .split_ascii_whitespace()
            .map(|value| value.parse::<usize>().map_err(|_| invalid()))
            .collect::<Result<Vec<_>, _>>()?;

        match values.as_slice() {
            &[x_start, x_end, y_start, y_end, z_start, z_end]
                if x_start <= x_end && y_start <= y_end && z_start <= z_end =>
            {
                Ok(Self {
                    x_start,
                    x_end,
                    y_start,
                    y_end,
                    z_start,
                    z_end,
                })
            }
            _ => Err(invalid()),
        }
    }
}

#[test]
fn whole_extent_from_dims() {
    let extent = Extent::from_dims([101, 101, 1]);
    assert_eq!(extent.to_string(), "0 100 0 100 0 0");

    let extent = Extent::from_dims([0, 4, 1]);
    assert_eq!(extent.to_string(), "0 0 0 3 0 0");
}

#[test]
fn parse_round_trip() {
    let extent: Extent = "2 5 0 3 1 1".parse().unwrap();
    assert_eq!(extent.x_len(), 4);
    assert_eq!(extent.y_len(), 4);
    assert_eq!(extent.z_len(), 1);
    assert_eq!(extent.to_string(), "2 5 0 3 1 1");

    assert!("0 1 0 1".parse::<Extent>().is_err());
    assert!("3 1 0 1 0 1".parse::<Extent>().is_err());
}
