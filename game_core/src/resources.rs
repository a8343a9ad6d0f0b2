use crate::Side;

/// Match score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub cpu: u32,
    pub player: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Cpu => self.cpu += 1,
            Side::Player => self.player += 1,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn has_winner(&self, win_score: u32) -> Option<Side> {
        if self.cpu >= win_score {
            Some(Side::Cpu)
        } else if self.player >= win_score {
            Some(Side::Player)
        } else {
            None
        }
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

/// Events that occurred during the last tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Events {
    pub ball_hit_racket: bool,
    pub ball_hit_wall: bool,
    pub cpu_scored: bool,
    pub player_scored: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn scored(&mut self, side: Side) {
        match side {
            Side::Cpu => self.cpu_scored = true,
            Side::Player => self.player_scored = true,
        }
    }
}
