use glam::Vec2;
use rand::Rng;

use crate::{Aabb, Court, GameRng};

/// Which side of the net a racket (or a point) belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Cpu,    // Left edge, tracking AI
    Player, // Right edge, keyboard
}

/// Racket component - an axis-aligned paddle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Racket {
    pub side: Side,
    pub pos: Vec2, // Top-left corner
    pub size: Vec2,
}

impl Racket {
    pub fn new(side: Side, pos: Vec2, size: Vec2) -> Self {
        Self { side, pos, size }
    }

    /// Shift vertically; bounds are the caller's concern
    pub fn move_by(&mut self, speed_y: f32) {
        self.pos.y += speed_y;
    }

    pub fn rect(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size)
    }

    pub fn center_y(&self) -> f32 {
        self.pos.y + self.size.y / 2.0
    }
}

/// Ball component - the tennis ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2, // Top-left corner
    pub size: Vec2,
    pub vel: Vec2, // Units per tick, sign is direction
}

impl Ball {
    pub fn new(pos: Vec2, size: Vec2, vel: Vec2) -> Self {
        Self { pos, size, vel }
    }

    /// Advance one tick. No bounds enforcement.
    pub fn advance(&mut self) {
        self.pos += self.vel;
    }

    pub fn bounce_vertical(&mut self) {
        self.vel.y = -self.vel.y;
    }

    /// Reverse horizontal direction and scale its magnitude by `speedup`
    pub fn bounce_horizontal(&mut self, speedup: f32) {
        self.vel.x *= -speedup;
    }

    /// Serve from mid-court at a random height with a random direction.
    ///
    /// Speed magnitudes carry over from the previous rally, so any speed-up
    /// gained from racket hits persists across points.
    pub fn reset(&mut self, court: &Court, margin: f32, rng: &mut GameRng) {
        self.pos.x = court.ball_spawn_x(self.size.x);
        self.pos.y = rng.0.gen_range(margin..=court.height - margin);

        let sign_x = if rng.0.gen_bool(0.5) { 1.0 } else { -1.0 };
        let sign_y = if rng.0.gen_bool(0.5) { 1.0 } else { -1.0 };
        self.vel = Vec2::new(sign_x * self.vel.x.abs(), sign_y * self.vel.y.abs());
    }

    pub fn rect(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size)
    }

    pub fn center_y(&self) -> f32 {
        self.pos.y + self.size.y / 2.0
    }
}
