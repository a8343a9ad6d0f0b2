/// Game tuning parameters for Tennis Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Court (screen pixels)
    pub const SCREEN_WIDTH: f32 = 1200.0;
    pub const SCREEN_HEIGHT: f32 = 675.0;

    // Racket
    pub const RACKET_WIDTH: f32 = 20.0;
    pub const RACKET_HEIGHT: f32 = 100.0;
    pub const PLAYER_INSET: f32 = 50.0; // Distance of the player racket from the right edge
    pub const PLAYER_SPEED: f32 = 6.0; // Units per tick while a key is held
    pub const CPU_STEP: f32 = 5.5; // Units per tick

    // Ball
    pub const BALL_SIZE: f32 = 20.0;
    pub const BALL_SPEED: f32 = 6.0;
    pub const BALL_SPEEDUP: f32 = 1.002; // Multiply |speed_x| on racket hit
    pub const SPAWN_MARGIN: f32 = 10.0;

    // Score
    pub const WIN_SCORE: u32 = 5; // First to 5 wins

    // Loop
    pub const TICK_RATE: u32 = 60;
}
