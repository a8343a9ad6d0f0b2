use crate::{Aabb, Ball, Config, Court, Events, Racket};
use hecs::World;

/// Check ball collisions with rackets and the top/bottom walls
pub fn check_collisions(world: &mut World, court: &Court, config: &Config, events: &mut Events) {
    // Collect racket boxes first so the ball can be borrowed mutably
    let rackets: Vec<Aabb> = world
        .query::<&Racket>()
        .iter()
        .map(|(_e, racket)| racket.rect())
        .collect();

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let rect = ball.rect();

        // A single bounce per tick even if both rackets overlap the ball
        if rackets.iter().any(|racket| rect.intersects(racket)) {
            ball.bounce_horizontal(config.ball_speedup);
            events.ball_hit_racket = true;
            log::debug!("ball hit racket, speed_x now {:.3}", ball.vel.x);
        }

        if rect.bottom() >= court.height || rect.top() <= 0.0 {
            ball.bounce_vertical();
            events.ball_hit_wall = true;
            log::debug!("ball hit wall at y {:.1}", ball.pos.y);
        }
    }
}
