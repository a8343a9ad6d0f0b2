use glam::Vec2;
use hecs::{Entity, World};

use crate::systems::*;
use crate::{
    create_ball, create_racket, Ball, Config, ConfigError, Court, Events, GameRng, Racket, Score,
    Side, Snapshot,
};

/// One human-vs-computer match: the entities, the score and the RNG.
///
/// Nothing here enforces the win threshold; the outer loop decides when to
/// stop calling [`Match::tick`], and scores keep counting if it doesn't.
pub struct Match {
    pub world: World,
    pub ball_entity: Entity,
    pub player_entity: Entity,
    pub cpu_entity: Entity,
    pub court: Court,
    pub config: Config,
    pub score: Score,
    pub events: Events,
    pub rng: GameRng,
}

impl Match {
    pub fn new(config: Config, mut rng: GameRng) -> Result<Self, ConfigError> {
        config.validate()?;

        let court = Court::new(config.screen_width, config.screen_height);
        let racket_size = Vec2::new(config.racket_width, config.racket_height);
        let mut world = World::new();

        // Create rackets
        let cpu_entity = create_racket(
            &mut world,
            Side::Cpu,
            court.cpu_spawn(racket_size),
            racket_size,
        );
        let player_entity = create_racket(
            &mut world,
            Side::Player,
            court.player_spawn(racket_size, config.player_inset),
            racket_size,
        );

        // Create ball, served with a random direction from the start
        let mut ball = Ball::new(
            Vec2::new(court.width / 2.0, court.height / 2.0),
            Vec2::splat(config.ball_size),
            Vec2::splat(config.ball_speed),
        );
        ball.reset(&court, config.spawn_margin, &mut rng);
        let ball_entity = create_ball(&mut world, ball.pos, ball.size, ball.vel);

        Ok(Self {
            world,
            ball_entity,
            player_entity,
            cpu_entity,
            court,
            config,
            score: Score::new(),
            events: Events::new(),
            rng,
        })
    }

    /// Advance the ball, resolve bounces and award points
    pub fn move_objects(&mut self) {
        // Clear events at start of tick
        self.events.clear();

        // 1. Move ball
        move_ball(&mut self.world);

        // 2-3. Racket and wall bounces
        check_collisions(&mut self.world, &self.court, &self.config, &mut self.events);

        // 4-5. Ball reached the left or right edge
        check_scoring(
            &mut self.world,
            &self.court,
            &mut self.score,
            &mut self.events,
            &mut self.rng,
            &self.config,
        );
    }

    pub fn move_player(&mut self, speed_y: f32) {
        move_player(&mut self.world, &self.court, speed_y);
    }

    pub fn move_cpu(&mut self) {
        move_cpu(&mut self.world, self.config.cpu_step);
    }

    /// One full simulation step with the player's vertical command
    pub fn tick(&mut self, speed_y: f32) {
        self.move_objects();
        self.move_player(speed_y);
        self.move_cpu();
    }

    /// Start a new match; ball and rackets stay where they are
    pub fn reset_scores(&mut self) {
        self.score.reset();
    }

    pub fn winner(&self) -> Option<Side> {
        self.score.has_winner(self.config.win_score)
    }

    pub fn is_complete(&self) -> bool {
        self.winner().is_some()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.world, self.court, &self.score)
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world.get::<&Ball>(self.ball_entity).ok().map(|ball| *ball)
    }

    pub fn racket(&self, side: Side) -> Option<Racket> {
        let entity = match side {
            Side::Cpu => self.cpu_entity,
            Side::Player => self.player_entity,
        };
        self.world.get::<&Racket>(entity).ok().map(|racket| *racket)
    }
}
