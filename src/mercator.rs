use crate::errors::TileError;

const PI: f64 = std::f64::consts::PI;

/// Column/row of a tile at some zoom level, without the zoom itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileIndex {
    pub x: i64,
    pub y: i64,
}

impl TileIndex {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

pub struct MercatorProjection;

impl MercatorProjection {
    /// Number of tiles along one axis at `zoom_level`, as a float so that
    /// zoom levels past 63 still scale instead of overflowing.
    fn scale(zoom_level: u8) -> f64 {
        2f64.powi(zoom_level as i32)
    }

    /// Saturates at `i64::MAX` from zoom 63 up.
    pub fn tile_count(zoom_level: u8) -> i64 {
        if zoom_level >= 63 {
            i64::MAX
        } else {
            1i64 << zoom_level
        }
    }

    pub fn longitude_to_tile_x_f64(longitude: f64, zoom_level: u8) -> f64 {
        ((longitude + 180.0) / 360.0 * Self::scale(zoom_level)).floor()
    }

    /// No clamping to the Mercator latitude limit: +-90 degrees gives a
    /// non-finite or wildly out-of-range result, and anything beyond +-90
    /// gives NaN.
    pub fn latitude_to_tile_y_f64(latitude: f64, zoom_level: u8) -> f64 {
        let lat_rad = latitude * PI / 180.0;
        let merc = (lat_rad.tan() + 1.0 / lat_rad.cos()).ln();
        ((1.0 - merc / PI) / 2.0 * Self::scale(zoom_level)).floor()
    }

    pub fn longitude_to_tile_x(longitude: f64, zoom_level: u8) -> i64 {
        Self::longitude_to_tile_x_f64(longitude, zoom_level) as i64
    }

    pub fn latitude_to_tile_y(latitude: f64, zoom_level: u8) -> i64 {
        Self::latitude_to_tile_y_f64(latitude, zoom_level) as i64
    }

    /// West edge of column `tile_x`.
    pub fn tile_x_to_longitude(tile_x: i64, zoom_level: u8) -> f64 {
        tile_x as f64 * 360.0 / Self::scale(zoom_level) - 180.0
    }

    /// North edge of row `tile_y`.
    pub fn tile_y_to_latitude(tile_y: i64, zoom_level: u8) -> f64 {
        let n = PI - 2.0 * PI * tile_y as f64 / Self::scale(zoom_level);
        n.sinh().atan().to_degrees()
    }
}

/// Maps a coordinate to the tile containing it.
///
/// Inputs are not validated. Non-finite intermediate results saturate on the
/// integer conversion (`+inf` to `i64::MAX`, `-inf` to `i64::MIN`, NaN to 0),
/// so a latitude beyond +-90 lands on row 0 here. [`TileRange::from_bounds`]
/// treats such a corner as covering nothing; use [`try_latlon_to_tile`] to
/// reject it outright.
///
/// [`TileRange::from_bounds`]: crate::TileRange::from_bounds
pub fn latlon_to_tile(latitude: f64, longitude: f64, zoom: u8) -> TileIndex {
    TileIndex {
        x: MercatorProjection::longitude_to_tile_x(longitude, zoom),
        y: MercatorProjection::latitude_to_tile_y(latitude, zoom),
    }
}

pub fn try_latlon_to_tile(latitude: f64, longitude: f64, zoom: u8) -> Result<TileIndex, TileError> {
    let x = MercatorProjection::longitude_to_tile_x_f64(longitude, zoom);
    let y = MercatorProjection::latitude_to_tile_y_f64(latitude, zoom);

    // Anything outside the i64 range would saturate just like an infinity.
    let representable = |v: f64| v.is_finite() && v >= i64::MIN as f64 && v < i64::MAX as f64;
    if !representable(x) || !representable(y) {
        return Err(TileError::NonFiniteIndex {
            latitude,
            longitude,
            zoom,
        });
    }

    Ok(TileIndex::new(x as i64, y as i64))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equator_at_zoom_one() {
        assert_eq!(latlon_to_tile(0.0, 0.0, 1), TileIndex::new(1, 1));
    }

    #[test]
    fn known_city_tile() {
        // Berlin, zoom 10
        assert_eq!(latlon_to_tile(52.52, 13.405, 10), TileIndex::new(550, 335));
    }

    #[test]
    fn inverse_edges() {
        assert_eq!(MercatorProjection::tile_x_to_longitude(0, 3), -180.0);
        assert_eq!(MercatorProjection::tile_x_to_longitude(8, 3), 180.0);
        assert!(MercatorProjection::tile_y_to_latitude(4, 3).abs() < 1e-9);
        assert!((MercatorProjection::tile_y_to_latitude(0, 0) - 85.0511287798).abs() < 1e-9);
    }

    #[test]
    fn tile_count_saturates() {
        assert_eq!(MercatorProjection::tile_count(0), 1);
        assert_eq!(MercatorProjection::tile_count(16), 65536);
        assert_eq!(MercatorProjection::tile_count(62), 1i64 << 62);
        assert_eq!(MercatorProjection::tile_count(63), i64::MAX);
        assert_eq!(MercatorProjection::tile_count(64), i64::MAX);
    }

    #[test]
    fn north_pole_lands_above_row_zero() {
        // tan(pi/2) is finite in f64, so the row is finite but negative.
        assert!(latlon_to_tile(90.0, 0.0, 4).y < 0);
        assert!(try_latlon_to_tile(90.0, 0.0, 4).unwrap().y < 0);
    }

    #[test]
    fn beyond_pole_is_nan() {
        assert!(MercatorProjection::latitude_to_tile_y_f64(100.0, 4).is_nan());
        assert_eq!(latlon_to_tile(100.0, 0.0, 4).y, 0);
        assert!(try_latlon_to_tile(100.0, 0.0, 4).is_err());
    }

    #[test]
    fn pole_is_rejected_by_checked_mapper() {
        assert!(matches!(
            try_latlon_to_tile(-90.0, 0.0, 4),
            Err(TileError::NonFiniteIndex { zoom: 4, .. })
        ));
        assert_eq!(try_latlon_to_tile(0.0, 0.0, 1), Ok(TileIndex::new(1, 1)));
    }
}
