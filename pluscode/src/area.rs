//! The rectangle a decoded Plus Code covers.

/// Bounding box of a decoded code.
///
/// The area includes its south and west edges but not its north and east
/// edges, so neighbouring cells never overlap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CodeArea {
    south_latitude: f64,
    west_longitude: f64,
    north_latitude: f64,
    east_longitude: f64,
    length: usize,
}

impl CodeArea {
    /// Create an area from its bounds and the number of digits that produced it.
    pub fn new(
        south_latitude: f64,
        west_longitude: f64,
        north_latitude: f64,
        east_longitude: f64,
        length: usize,
    ) -> Self {
        Self {
            south_latitude,
            west_longitude,
            north_latitude,
            east_longitude,
            length,
        }
    }

    pub fn south_latitude(&self) -> f64 {
        self.south_latitude
    }

    pub fn west_longitude(&self) -> f64 {
        self.west_longitude
    }

    pub fn north_latitude(&self) -> f64 {
        self.north_latitude
    }

    pub fn east_longitude(&self) -> f64 {
        self.east_longitude
    }

    /// Number of significant digits in the code, excluding separator and padding.
    pub fn length(&self) -> usize {
        self.length
    }

    pub fn center_latitude(&self) -> f64 {
        (self.south_latitude + self.north_latitude) / 2.0
    }

    pub fn center_longitude(&self) -> f64 {
        (self.west_longitude + self.east_longitude) / 2.0
    }

    /// Height of the area in degrees.
    pub fn latitude_height(&self) -> f64 {
        self.north_latitude - self.south_latitude
    }

    /// Width of the area in degrees.
    pub fn longitude_width(&self) -> f64 {
        self.east_longitude - self.west_longitude
    }

    /// Check whether a point lies in the area.
    ///
    /// South and west edges are inside; north and east edges are not.
    pub fn contains(&self, latitude: f64, longitude: f64) -> bool {
        self.south_latitude <= latitude
            && latitude < self.north_latitude
            && self.west_longitude <= longitude
            && longitude < self.east_longitude
    }
}
