//! Local match state bundling the simulation world and its resources

use game_core::{
    create_ball, create_paddle, step, Ball, Config, Events, FrameInput, GameRng, Paddle, Score,
    Time,
};
use glam::Vec2;
use hecs::World;

pub struct LocalGame {
    pub world: World,
    pub time: Time,
    pub config: Config,
    pub score: Score,
    pub events: Events,
    pub rng: GameRng,
}

impl LocalGame {
    pub fn new(seed: u64) -> Self {
        let config = Config::new();
        let mut world = World::new();
        let mut rng = GameRng::new(seed);

        create_paddle(&mut world, 0, config.paddle_spawn_y());
        create_paddle(&mut world, 1, config.paddle_spawn_y());

        let mut ball = Ball::new(Vec2::ZERO, Vec2::ZERO);
        let dir = random_dir(&mut rng);
        ball.serve(dir, &config, &mut rng);
        create_ball(&mut world, ball.pos, ball.vel);

        Self {
            world,
            time: Time::new(0.016, 0.0),
            config,
            score: Score::new(),
            events: Events::new(),
            rng,
        }
    }

    /// Fresh match: zero the score, recenter the paddles, serve again
    pub fn init_match(&mut self) {
        self.score.reset();

        let spawn_y = self.config.paddle_spawn_y();
        for (_entity, paddle) in self.world.query_mut::<&mut Paddle>() {
            paddle.y = spawn_y;
        }

        let dir = random_dir(&mut self.rng);
        for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
            ball.serve(dir, &self.config, &mut self.rng);
        }
    }

    /// Advance the simulation by one frame
    pub fn step_frame(&mut self, input: &FrameInput, dt: f32) {
        self.time.dt = dt;
        step(
            &mut self.world,
            &mut self.time,
            &self.config,
            &mut self.score,
            &mut self.events,
            input,
            &mut self.rng,
        );
    }

    /// Top edge of a paddle, for rendering
    pub fn paddle_y(&self, player_id: u8) -> f32 {
        let mut query = self.world.query::<&Paddle>();
        let y = query
            .iter()
            .find(|(_entity, p)| p.player_id == player_id)
            .map(|(_entity, p)| p.y);
        y.unwrap_or_else(|| self.config.paddle_spawn_y())
    }

    /// Ball position and velocity, for rendering and diagnostics
    pub fn ball(&self) -> (Vec2, Vec2) {
        let mut query = self.world.query::<&Ball>();
        let state = query.iter().next().map(|(_entity, b)| (b.pos, b.vel));
        state.unwrap_or((self.config.center(), Vec2::ZERO))
    }
}

fn random_dir(rng: &mut GameRng) -> f32 {
    use rand::Rng;
    if rng.0.gen_bool(0.5) {
        1.0
    } else {
        -1.0
    }
}
