use crate::{Config, GameRng, Params};
use glam::Vec2;

/// Paddle component - represents a player's paddle
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub player_id: u8, // 0 = left, 1 = right
    pub y: f32,        // Top edge, clamped to the arena
}

impl Paddle {
    pub fn new(player_id: u8, y: f32) -> Self {
        Self { player_id, y }
    }
}

/// Movement intent for a paddle
#[derive(Debug, Clone, Copy, Default)]
pub struct PaddleIntent {
    pub dir: i8, // -1 = up, 0 = stop, 1 = down
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Ball component - the pong ball.
///
/// `pos` is the top-left corner of the ball square.
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    /// Serve toward `dir_x` (-1.0 = left player, 1.0 = right player).
    ///
    /// The ball spawns offset behind center on the half it will travel away
    /// from, with a random speed in the configured range and a shallow
    /// vertical angle.
    pub fn serve(&mut self, dir_x: f32, config: &Config, rng: &mut GameRng) {
        use rand::Rng;
        let speed = rng.0.gen_range(config.ball_speed_min..config.ball_speed_max);
        let angle: f32 = rng.0.gen_range(-Params::SERVE_CONE..Params::SERVE_CONE);

        let center = config.center();
        self.pos = Vec2::new(center.x - dir_x * config.serve_offset, center.y);
        self.vel = Vec2::new(angle.cos() * dir_x, angle.sin()) * speed;
    }

    /// Re-randomize velocity off a paddle, away from it (`dir_x` as above).
    pub fn bounce(&mut self, dir_x: f32, config: &Config, rng: &mut GameRng) {
        use rand::Rng;
        let speed = rng.0.gen_range(config.ball_speed_min..config.ball_speed_max);
        let angle: f32 = rng.0.gen_range(-Params::BOUNCE_CONE..Params::BOUNCE_CONE);

        self.vel = Vec2::new(angle.cos() * dir_x, angle.sin()) * speed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_spawns_behind_center() {
        let config = Config::new();
        let mut rng = GameRng::new(7);
        let mut ball = Ball::new(Vec2::ZERO, Vec2::ZERO);

        ball.serve(-1.0, &config, &mut rng);
        assert_eq!(ball.pos.x, config.center().x + config.serve_offset);
        assert_eq!(ball.pos.y, config.center().y);
        assert!(ball.vel.x < 0.0, "serve should travel left");

        ball.serve(1.0, &config, &mut rng);
        assert_eq!(ball.pos.x, config.center().x - config.serve_offset);
        assert!(ball.vel.x > 0.0, "serve should travel right");
    }

    #[test]
    fn test_serve_speed_within_range() {
        let config = Config::new();
        let mut rng = GameRng::new(7);
        let mut ball = Ball::new(Vec2::ZERO, Vec2::ZERO);

        for i in 0..200 {
            ball.serve(if i % 2 == 0 { 1.0 } else { -1.0 }, &config, &mut rng);
            let speed = ball.vel.length();
            assert!(
                speed >= config.ball_speed_min && speed <= config.ball_speed_max,
                "serve speed {speed} out of range"
            );
        }
    }

    #[test]
    fn test_bounce_speed_within_range_and_away_from_paddle() {
        let config = Config::new();
        let mut rng = GameRng::new(99);
        let mut ball = Ball::new(Vec2::ZERO, Vec2::new(-600.0, 0.0));

        for i in 0..200 {
            let dir = if i % 2 == 0 { 1.0 } else { -1.0 };
            ball.bounce(dir, &config, &mut rng);
            let speed = ball.vel.length();
            assert!(
                speed >= config.ball_speed_min && speed <= config.ball_speed_max,
                "bounce speed {speed} out of range"
            );
            assert!(ball.vel.x * dir > 0.0, "bounce should leave the paddle");
        }
    }
}
