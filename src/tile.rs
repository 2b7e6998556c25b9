use std::fmt;

use crate::mercator::{MercatorProjection, TileIndex};
use crate::types::BoundingBox;

/// A slippy-map tile addressed as `zoom_level/tile_x/tile_y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tile {
    pub zoom_level: u8,
    pub tile_x: i64,
    pub tile_y: i64,
}

impl Tile {
    pub fn new(zoom_level: u8, tile_x: i64, tile_y: i64) -> Self {
        Self {
            zoom_level,
            tile_x,
            tile_y,
        }
    }

    pub fn from_index(zoom_level: u8, index: TileIndex) -> Self {
        Self::new(zoom_level, index.x, index.y)
    }

    pub fn index(&self) -> TileIndex {
        TileIndex::new(self.tile_x, self.tile_y)
    }

    pub fn bounding_box(&self) -> BoundingBox {
        // Rows grow southwards, so the next row's north edge is our south edge.
        BoundingBox {
            min_latitude: MercatorProjection::tile_y_to_latitude(self.tile_y + 1, self.zoom_level),
            max_latitude: MercatorProjection::tile_y_to_latitude(self.tile_y, self.zoom_level),
            min_longitude: MercatorProjection::tile_x_to_longitude(self.tile_x, self.zoom_level),
            max_longitude: MercatorProjection::tile_x_to_longitude(self.tile_x + 1, self.zoom_level),
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.zoom_level, self.tile_x, self.tile_y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::latlon_to_tile;

    #[test]
    fn display_is_zxy() {
        assert_eq!(Tile::new(16, 54912, 28054).to_string(), "16/54912/28054");
    }

    #[test]
    fn bounding_box_center_maps_back() {
        let tile = Tile::new(12, 3430, 1755);
        let (latitude, longitude) = tile.bounding_box().center();
        let index = latlon_to_tile(latitude, longitude, tile.zoom_level);
        assert_eq!(Tile::from_index(12, index), tile);
    }

    #[test]
    fn world_tile_spans_mercator_limits() {
        let bbox = Tile::new(0, 0, 0).bounding_box();
        assert_eq!(bbox.min_longitude, -180.0);
        assert_eq!(bbox.max_longitude, 180.0);
        assert!((bbox.max_latitude - 85.0511287798).abs() < 1e-9);
        assert!((bbox.min_latitude + 85.0511287798).abs() < 1e-9);
    }
}
