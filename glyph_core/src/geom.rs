use glam::Vec2;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Build from a top-left origin and a size
    pub fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self {
            min: origin,
            max: origin + size,
        }
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_origin_size() {
        let rect = Aabb::from_origin_size(Vec2::new(10.0, 20.0), Vec2::new(5.0, 8.0));
        assert_eq!(rect.min, Vec2::new(10.0, 20.0));
        assert_eq!(rect.max, Vec2::new(15.0, 28.0));
        assert_eq!(rect.width(), 5.0);
        assert_eq!(rect.height(), 8.0);
    }

    #[test]
    fn test_contains() {
        let rect = Aabb::from_origin_size(Vec2::ZERO, Vec2::new(2.0, 2.0));
        assert!(rect.contains(Vec2::new(1.0, 1.0)));
        assert!(!rect.contains(Vec2::new(3.0, 1.0)));
    }
}
