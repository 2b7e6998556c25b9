use crate::TileError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_latitude: f64,
    pub max_latitude: f64,
    pub min_longitude: f64,
    pub max_longitude: f64,
}

impl BoundingBox {
    /// Checked constructor. The range enumerator itself accepts any box; this
    /// is for callers that want inverted input reported rather than silently
    /// producing no tiles.
    pub fn new(
        min_latitude: f64,
        max_latitude: f64,
        min_longitude: f64,
        max_longitude: f64,
    ) -> Result<Self, TileError> {
        if min_latitude > max_latitude || min_longitude > max_longitude {
            return Err(TileError::InvalidBoundingBox {
                min_latitude,
                min_longitude,
                max_latitude,
                max_longitude,
            });
        }
        Ok(Self {
            min_latitude,
            max_latitude,
            min_longitude,
            max_longitude,
        })
    }

    /// Midpoint as `(latitude, longitude)`, halfway in degrees rather than
    /// in projected space.
    pub fn center(&self) -> (f64, f64) {
        (
            (self.min_latitude + self.max_latitude) / 2.0,
            (self.min_longitude + self.max_longitude) / 2.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_inverted_box() {
        assert!(BoundingBox::new(10.0, 5.0, 0.0, 1.0).is_err());
        assert!(BoundingBox::new(0.0, 1.0, 20.0, -20.0).is_err());
    }

    #[test]
    fn point_box_is_accepted() {
        let bbox = BoundingBox::new(25.0, 25.0, 121.5, 121.5).unwrap();
        assert_eq!(bbox.center(), (25.0, 121.5));
    }

    #[test]
    fn center_is_degree_midpoint() {
        let bbox = BoundingBox::new(20.0, 30.0, 100.0, 120.0).unwrap();
        assert_eq!(bbox.center(), (25.0, 110.0));
    }
}
