use hecs::World;

use crate::{Aabb, Ball, Court, Racket, Score, Side};

/// Read-only view of a match for one render pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot {
    pub court: Court,
    pub ball: Aabb,
    pub player: Aabb,
    pub cpu: Aabb,
    pub cpu_score: u32,
    pub player_score: u32,
}

impl Snapshot {
    /// Copy the drawable state out of the world
    pub fn capture(world: &World, court: Court, score: &Score) -> Self {
        let ball = world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| ball.rect())
            .unwrap_or_default();

        let mut player = Aabb::default();
        let mut cpu = Aabb::default();
        for (_e, racket) in world.query::<&Racket>().iter() {
            match racket.side {
                Side::Player => player = racket.rect(),
                Side::Cpu => cpu = racket.rect(),
            }
        }

        Self {
            court,
            ball,
            player,
            cpu,
            cpu_score: score.cpu,
            player_score: score.player,
        }
    }
}
