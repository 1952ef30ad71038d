use crate::{Ball, Config, Events, GameRng, Score};
use hecs::World;

/// Manual score reset: zero both counters and serve toward a random side.
///
/// Paddles keep their positions, matching the in-game reset action rather
/// than a fresh match.
pub fn reset_scores(
    world: &mut World,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) {
    use rand::Rng;

    score.reset();
    events.scores_reset = true;

    let dir = if rng.0.gen_bool(0.5) { 1.0 } else { -1.0 };
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.serve(dir, config, rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_ball;
    use glam::Vec2;

    #[test]
    fn test_reset_zeroes_scores_and_reserves_in_range() {
        let mut world = World::new();
        let config = Config::new();
        let mut score = Score::new();
        let mut events = Events::new();
        let mut rng = GameRng::new(12345);

        score.increment_left();
        score.increment_right();
        score.increment_right();
        create_ball(&mut world, Vec2::new(30.0, 30.0), Vec2::new(-600.0, 50.0));

        reset_scores(&mut world, &config, &mut score, &mut events, &mut rng);

        assert_eq!(score.left, 0);
        assert_eq!(score.right, 0);
        assert!(events.scores_reset);

        let mut query = world.query::<&Ball>();
        let (_e, ball) = query.iter().next().unwrap();
        let speed = ball.vel.length();
        assert!(
            speed >= config.ball_speed_min && speed <= config.ball_speed_max,
            "reset serve speed {speed} out of range"
        );
        assert_eq!(ball.pos.y, config.center().y);
    }
}
