mod errors;
mod mercator;
mod tile;
mod tile_range;
mod types;

pub use errors::TileError;
pub use mercator::{latlon_to_tile, try_latlon_to_tile, MercatorProjection, TileIndex};
pub use tile::Tile;
pub use tile_range::{
    get_tiles_in_range, get_tiles_in_range_default, try_get_tiles_in_range, TileRange,
    TileRangeIter, DEFAULT_ZOOM,
};
pub use types::BoundingBox;
