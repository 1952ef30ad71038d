use crate::{Ball, Config, Events, GameRng, Score};
use hecs::World;

/// Check if the ball left the arena (scoring).
///
/// The conceding side's opponent scores and the ball is served back toward
/// the conceder from the scorer's half.
pub fn check_scoring(
    world: &mut World,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.pos.x <= 0.0 {
            score.increment_right();
            events.right_scored = true;
            ball.serve(-1.0, config, rng);
        } else if ball.pos.x + config.ball_size >= config.arena_width {
            score.increment_left();
            events.left_scored = true;
            ball.serve(1.0, config, rng);
        }
    }
}
