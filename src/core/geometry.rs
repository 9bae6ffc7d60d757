use geo_types::{Coord, LineString, Point, Polygon};

/// Creates an axis-aligned square footprint of side `size` around a center.
pub fn create_footprint(center_x: f64, center_y: f64, size: f64) -> Polygon<f64> {
    let h = size / 2.0;
    let coords = vec![
        Coord { x: center_x - h, y: center_y - h },
        Coord { x: center_x + h, y: center_y - h },
        Coord { x: center_x + h, y: center_y + h },
        Coord { x: center_x - h, y: center_y + h },
        Coord { x: center_x - h, y: center_y - h },
    ];

    Polygon::new(LineString::from(coords), vec![])
}

pub fn create_footprint_from_point(center: &Point<f64>, size: f64) -> Polygon<f64> {
    create_footprint(center.x(), center.y(), size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::{Area, Centroid};
    use geo_types::point;

    #[test]
    fn test_create_footprint() {
        let fp = create_footprint(100.0, 100.0, 10.0);
        let exterior = fp.exterior();
        assert_eq!(exterior.coords().count(), 5); // 4 corners + 1 to close
        assert_eq!(exterior.0[0], exterior.0[4]);
        assert!((fp.unsigned_area() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_create_footprint_from_point() {
        let center = point! { x: 72.8777, y: 19.076 };
        let fp = create_footprint_from_point(&center, 0.0002);
        let c = fp.centroid().map(|p| (p.x(), p.y()));
        assert!(matches!(
            c,
            Some((x, y)) if (x - 72.8777).abs() < 1e-9 && (y - 19.076).abs() < 1e-9
        ));
    }
}
