use crate::{FrameInput, Paddle, PaddleIntent};
use hecs::World;

/// Write the frame's sampled input into paddle intents
pub fn apply_inputs(world: &mut World, input: &FrameInput) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&Paddle, &mut PaddleIntent)>() {
        intent.dir = if paddle.player_id == 0 {
            input.left_dir
        } else {
            input.right_dir
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_paddle;

    #[test]
    fn test_inputs_route_to_the_right_paddle() {
        let mut world = World::new();
        let left = create_paddle(&mut world, 0, 100.0);
        let right = create_paddle(&mut world, 1, 100.0);

        let input = FrameInput {
            left_dir: -1,
            right_dir: 1,
            reset: false,
        };
        apply_inputs(&mut world, &input);

        assert_eq!(world.get::<&PaddleIntent>(left).unwrap().dir, -1);
        assert_eq!(world.get::<&PaddleIntent>(right).unwrap().dir, 1);
    }
}
