use crate::{Ball, Config, Events, GameRng, Paddle};
use hecs::World;

/// Check ball collisions with the top/bottom walls and the paddles
pub fn check_collisions(world: &mut World, config: &Config, events: &mut Events, rng: &mut GameRng) {
    let paddles: Vec<(u8, f32)> = {
        let mut query = world.query::<&Paddle>();
        query.iter().map(|(_e, p)| (p.player_id, p.y)).collect()
    };

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        // Top/bottom walls sit a fixed margin inside the arena
        let top = config.wall_margin;
        let bottom = config.arena_height - config.wall_margin - config.ball_size;
        if ball.pos.y <= top || ball.pos.y >= bottom {
            ball.vel.y = -ball.vel.y;
            // Clamp position to prevent stuck
            ball.pos.y = ball.pos.y.clamp(top, bottom);
            events.ball_hit_wall = true;
        }

        for &(player_id, paddle_y) in &paddles {
            let overlaps_span = ball.pos.y + config.ball_size >= paddle_y
                && ball.pos.y <= paddle_y + config.paddle_height;
            if !overlaps_span {
                continue;
            }

            // Only bounce while the ball is moving toward the paddle
            let hit = if player_id == 0 {
                ball.pos.x <= config.paddle_width && ball.vel.x < 0.0
            } else {
                ball.pos.x + config.ball_size >= config.arena_width - config.paddle_width
                    && ball.vel.x > 0.0
            };

            if hit {
                let away = if player_id == 0 { 1.0 } else { -1.0 };
                ball.bounce(away, config, rng);
                events.ball_hit_paddle = true;
            }
        }
    }
}
