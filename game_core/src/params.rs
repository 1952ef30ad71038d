/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena (pixel units, y down)
    pub const ARENA_WIDTH: f32 = 1024.0;
    pub const ARENA_HEIGHT: f32 = 576.0;
    pub const WALL_MARGIN: f32 = 10.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 80.0;
    pub const PADDLE_SPEED: f32 = 600.0; // pixels per second

    // Ball
    pub const BALL_SIZE: f32 = 10.0;
    pub const BALL_SPEED_MIN: f32 = 520.0;
    pub const BALL_SPEED_MAX: f32 = 670.0;

    // Serving
    pub const SERVE_OFFSET: f32 = 400.0; // spawn distance behind center
    pub const SERVE_CONE: f32 = 0.4636; // |vy| <= vx / 2
    pub const BOUNCE_CONE: f32 = 0.785; // ~45 degrees

    // Physics
    pub const FIXED_DT: f32 = 0.0166; // ~60 Hz
    pub const MAX_DT: f32 = 0.1; // Clamp to prevent large jumps
}
