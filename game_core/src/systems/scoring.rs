use crate::{Ball, Config, Court, Events, GameRng, Score, Side};
use hecs::World;

/// Award a point when the ball reaches the left or right edge, then re-serve
pub fn check_scoring(
    world: &mut World,
    court: &Court,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
    config: &Config,
) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        // Past the player's side
        if ball.rect().right() >= court.width {
            award(Side::Cpu, ball, court, score, events, rng, config);
        }

        // Past the computer's side
        if ball.rect().left() <= 0.0 {
            award(Side::Player, ball, court, score, events, rng, config);
        }
    }
}

fn award(
    side: Side,
    ball: &mut Ball,
    court: &Court,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
    config: &Config,
) {
    score.increment(side);
    events.scored(side);
    ball.reset(court, config.spawn_margin, rng);
}
