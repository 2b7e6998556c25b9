use tracing::{debug, trace};

use crate::errors::TileError;
use crate::mercator::{latlon_to_tile, try_latlon_to_tile, MercatorProjection, TileIndex};
use crate::tile::Tile;
use crate::types::BoundingBox;

pub const DEFAULT_ZOOM: u8 = 16;

/// Inclusive rectangle of tiles at a single zoom level.
///
/// Empty whenever the top-left corner lies right of or below the
/// bottom-right corner, which is what an inverted bounding box produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileRange {
    pub zoom_level: u8,
    pub top_left: TileIndex,
    pub bottom_right: TileIndex,
}

impl TileRange {
    pub fn new(zoom_level: u8, top_left: TileIndex, bottom_right: TileIndex) -> Self {
        Self {
            zoom_level,
            top_left,
            bottom_right,
        }
    }

    /// A range that yields no tiles.
    pub fn empty(zoom_level: u8) -> Self {
        Self::new(zoom_level, TileIndex::new(0, 0), TileIndex::new(-1, -1))
    }

    /// North-west corner comes from (max_lat, min_lon), south-east from
    /// (min_lat, max_lon). Antimeridian wraparound is not recognised.
    ///
    /// A corner whose index is NaN (latitude beyond +-90, NaN input) bounds
    /// nothing, so the range is empty.
    pub fn from_bounds(
        min_latitude: f64,
        max_latitude: f64,
        min_longitude: f64,
        max_longitude: f64,
        zoom_level: u8,
    ) -> Self {
        let raw = [
            MercatorProjection::latitude_to_tile_y_f64(max_latitude, zoom_level),
            MercatorProjection::latitude_to_tile_y_f64(min_latitude, zoom_level),
            MercatorProjection::longitude_to_tile_x_f64(min_longitude, zoom_level),
            MercatorProjection::longitude_to_tile_x_f64(max_longitude, zoom_level),
        ];
        if raw.iter().any(|v| v.is_nan()) {
            debug!("Tile range at zoom {} has a NaN corner", zoom_level);
            return Self::empty(zoom_level);
        }

        let top_left = latlon_to_tile(max_latitude, min_longitude, zoom_level);
        let bottom_right = latlon_to_tile(min_latitude, max_longitude, zoom_level);
        debug!(
            "Tile range at zoom {}: ({}, {}) to ({}, {})",
            zoom_level, top_left.x, top_left.y, bottom_right.x, bottom_right.y
        );
        Self::new(zoom_level, top_left, bottom_right)
    }

    pub fn try_from_bounds(
        min_latitude: f64,
        max_latitude: f64,
        min_longitude: f64,
        max_longitude: f64,
        zoom_level: u8,
    ) -> Result<Self, TileError> {
        let top_left = try_latlon_to_tile(max_latitude, min_longitude, zoom_level)?;
        let bottom_right = try_latlon_to_tile(min_latitude, max_longitude, zoom_level)?;
        Ok(Self::new(zoom_level, top_left, bottom_right))
    }

    pub fn from_bounding_box(bbox: &BoundingBox, zoom_level: u8) -> Self {
        Self::from_bounds(
            bbox.min_latitude,
            bbox.max_latitude,
            bbox.min_longitude,
            bbox.max_longitude,
            zoom_level,
        )
    }

    pub fn is_empty(&self) -> bool {
        self.top_left.x > self.bottom_right.x || self.top_left.y > self.bottom_right.y
    }

    /// Tile count, saturating at `u64::MAX`.
    pub fn len(&self) -> u64 {
        if self.is_empty() {
            return 0;
        }
        let width = (self.bottom_right.x as i128 - self.top_left.x as i128 + 1) as u128;
        let height = (self.bottom_right.y as i128 - self.top_left.y as i128 + 1) as u128;
        width
            .checked_mul(height)
            .and_then(|n| u64::try_from(n).ok())
            .unwrap_or(u64::MAX)
    }

    pub fn contains(&self, tile: &Tile) -> bool {
        tile.zoom_level == self.zoom_level
            && (self.top_left.x..=self.bottom_right.x).contains(&tile.tile_x)
            && (self.top_left.y..=self.bottom_right.y).contains(&tile.tile_y)
    }

    pub fn iter(&self) -> TileRangeIter {
        TileRangeIter {
            range: *self,
            next: (!self.is_empty()).then_some(self.top_left),
        }
    }
}

impl IntoIterator for TileRange {
    type Item = Tile;
    type IntoIter = TileRangeIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for &TileRange {
    type Item = Tile;
    type IntoIter = TileRangeIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Column-major walk: x outer, y inner, both ascending.
#[derive(Debug, Clone)]
pub struct TileRangeIter {
    range: TileRange,
    next: Option<TileIndex>,
}

impl Iterator for TileRangeIter {
    type Item = Tile;

    fn next(&mut self) -> Option<Tile> {
        let current = self.next?;
        let TileRange {
            top_left,
            bottom_right,
            ..
        } = self.range;

        self.next = if current.y < bottom_right.y {
            Some(TileIndex::new(current.x, current.y + 1))
        } else if current.x < bottom_right.x {
            Some(TileIndex::new(current.x + 1, top_left.y))
        } else {
            None
        };

        Some(Tile::from_index(self.range.zoom_level, current))
    }
}

/// All tiles covering the given box at `zoom`, x outer and y inner.
///
/// The box is not validated: an inverted box yields an empty vector.
pub fn get_tiles_in_range(
    min_latitude: f64,
    max_latitude: f64,
    min_longitude: f64,
    max_longitude: f64,
    zoom: u8,
) -> Vec<Tile> {
    let range = TileRange::from_bounds(min_latitude, max_latitude, min_longitude, max_longitude, zoom);
    let tiles: Vec<Tile> = range.iter().collect();
    trace!("Collected {} tiles", tiles.len());
    tiles
}

pub fn get_tiles_in_range_default(
    min_latitude: f64,
    max_latitude: f64,
    min_longitude: f64,
    max_longitude: f64,
) -> Vec<Tile> {
    get_tiles_in_range(min_latitude, max_latitude, min_longitude, max_longitude, DEFAULT_ZOOM)
}

pub fn try_get_tiles_in_range(
    min_latitude: f64,
    max_latitude: f64,
    min_longitude: f64,
    max_longitude: f64,
    zoom: u8,
) -> Result<Vec<Tile>, TileError> {
    let range =
        TileRange::try_from_bounds(min_latitude, max_latitude, min_longitude, max_longitude, zoom)?;
    Ok(range.iter().collect())
}
