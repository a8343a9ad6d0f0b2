use crate::{Ball, Court, Racket, Side};
use hecs::World;

/// Move ball based on velocity
pub fn move_ball(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.advance();
    }
}

/// Apply the player's vertical command, keeping the racket on court
pub fn move_player(world: &mut World, court: &Court, speed_y: f32) {
    for (_entity, racket) in world.query_mut::<&mut Racket>() {
        if racket.side == Side::Player {
            racket.move_by(speed_y);
            racket.pos.y = court.clamp_top(racket.pos.y, racket.size.y);
        }
    }
}

/// Track the ball's vertical center with a fixed step.
///
/// The computer racket is not clamped to the court.
pub fn move_cpu(world: &mut World, step: f32) {
    let target = world
        .query::<&Ball>()
        .iter()
        .next()
        .map(|(_e, ball)| ball.center_y());

    let Some(target) = target else {
        return; // No ball in world
    };

    for (_entity, racket) in world.query_mut::<&mut Racket>() {
        if racket.side != Side::Cpu {
            continue;
        }
        let center = racket.center_y();
        if target < center {
            racket.move_by(-step);
        } else if target > center {
            racket.move_by(step);
        }
    }
}
