pub mod components;
pub mod config;
pub mod game;
pub mod map;
pub mod params;
pub mod resources;
pub mod snapshot;
pub mod systems;

pub use components::*;
pub use config::*;
pub use game::*;
pub use map::*;
pub use params::*;
pub use resources::*;
pub use snapshot::*;

use glam::Vec2;
use hecs::World;

/// Helper to create a racket entity
pub fn create_racket(world: &mut World, side: Side, pos: Vec2, size: Vec2) -> hecs::Entity {
    world.spawn((Racket::new(side, pos, size),))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: Vec2, size: Vec2, vel: Vec2) -> hecs::Entity {
    world.spawn((Ball::new(pos, size, vel),))
}
