use glam::Vec2;

/// Axis-aligned bounding box in screen coordinates (y grows downward)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    pub fn left(&self) -> f32 {
        self.min.x
    }

    pub fn right(&self) -> f32 {
        self.max.x
    }

    pub fn top(&self) -> f32 {
        self.min.y
    }

    pub fn bottom(&self) -> f32 {
        self.max.y
    }

    /// Strict overlap; boxes that only share an edge do not intersect
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

/// Playing surface dimensions and spawn positions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Court {
    pub width: f32,
    pub height: f32,
}

impl Court {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Top-left corner of the computer racket at match start (left edge)
    pub fn cpu_spawn(&self, racket_size: Vec2) -> Vec2 {
        Vec2::new(0.0, self.height / 2.0 - racket_size.y / 2.0)
    }

    /// Top-left corner of the player racket at match start (right edge)
    pub fn player_spawn(&self, racket_size: Vec2, inset: f32) -> Vec2 {
        Vec2::new(self.width - inset, self.height / 2.0 - racket_size.y / 2.0)
    }

    /// Horizontal position the ball is served from
    pub fn ball_spawn_x(&self, ball_width: f32) -> f32 {
        self.width / 2.0 - ball_width / 2.0
    }

    /// Clamp a racket's top edge so the whole racket stays on court
    pub fn clamp_top(&self, top: f32, height: f32) -> f32 {
        let top = top.max(0.0);
        if top + height > self.height {
            self.height - height
        } else {
            top
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intersects_overlapping() {
        let a = Aabb::from_pos_size(Vec2::new(0.0, 0.0), Vec2::new(20.0, 100.0));
        let b = Aabb::from_pos_size(Vec2::new(10.0, 50.0), Vec2::new(20.0, 20.0));
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_touching_edges_do_not_intersect() {
        let a = Aabb::from_pos_size(Vec2::new(0.0, 0.0), Vec2::new(20.0, 100.0));
        let b = Aabb::from_pos_size(Vec2::new(20.0, 50.0), Vec2::new(20.0, 20.0));
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_edges() {
        let rect = Aabb::from_pos_size(Vec2::new(100.0, 250.0), Vec2::new(20.0, 100.0));
        assert_eq!(rect.left(), 100.0);
        assert_eq!(rect.right(), 120.0);
        assert_eq!(rect.top(), 250.0);
        assert_eq!(rect.bottom(), 350.0);
    }

    #[test]
    fn test_spawn_positions() {
        let court = Court::new(800.0, 600.0);
        let racket = Vec2::new(20.0, 100.0);
        assert_eq!(court.cpu_spawn(racket), Vec2::new(0.0, 250.0));
        assert_eq!(court.player_spawn(racket, 50.0), Vec2::new(750.0, 250.0));
        assert_eq!(court.ball_spawn_x(20.0), 390.0);
    }

    #[test]
    fn test_clamp_top() {
        let court = Court::new(800.0, 600.0);
        assert_eq!(court.clamp_top(-6.0, 100.0), 0.0);
        assert_eq!(court.clamp_top(505.0, 100.0), 500.0);
        assert_eq!(court.clamp_top(250.0, 100.0), 250.0);
        assert_eq!(court.clamp_top(500.0, 100.0), 500.0);
    }
}
