use ggez::conf::{WindowMode, WindowSetup};
use ggez::event::{self, EventHandler};
use ggez::glam::Vec2 as GVec2;
use ggez::graphics::{self, Color, DrawMode, DrawParam, Mesh, Text};
use ggez::input::keyboard::{KeyCode, KeyInput};
use ggez::{Context, ContextBuilder, GameResult};
use log::warn;

use disc_physics::{PhysicsWorld, Vec2};

struct MainState {
    world: PhysicsWorld,
    // Updates per second, one per configured frame_time
    update_rate: u32,
    player: Option<usize>,
    player_speed: f64,
}

impl MainState {
    fn new(world: PhysicsWorld, player: Option<usize>, player_speed: f64) -> Self {
        let update_rate = update_rate(world.config().frame_time);
        MainState {
            world,
            update_rate,
            player,
            player_speed,
        }
    }

    fn steer_player(&mut self, keycode: KeyCode) {
        let Some(player) = self.player else {
            return;
        };
        let speed = self.player_speed;
        let velocity = match keycode {
            KeyCode::Up => Vec2::new(0.0, speed),
            KeyCode::Down => Vec2::new(0.0, -speed),
            KeyCode::Left => Vec2::new(-speed, 0.0),
            KeyCode::Right => Vec2::new(speed, 0.0),
            _ => return,
        };
        if let Err(e) = self.world.set_velocity(player, velocity) {
            warn!("cannot steer player: {e}");
        }
    }
}

impl EventHandler for MainState {
    fn update(&mut self, ctx: &mut Context) -> GameResult {
        // Fixed frame_time steps, however fast the window redraws
        while ctx.time.check_update_time(self.update_rate) {
            self.world.step_frame();
        }
        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> GameResult {
        let mut canvas = graphics::Canvas::from_frame(ctx, Color::BLACK);
        let screen_height = self.world.config().bounds.height;

        for body in self.world.bodies() {
            if body.radius() <= 0.0 {
                continue;
            }
            let c = body.color();
            let circle_mesh = Mesh::new_circle(
                ctx,
                DrawMode::fill(),
                GVec2::new(0.0, 0.0),
                body.radius() as f32,
                0.1,
                Color::from_rgba(c.r, c.g, c.b, c.a),
            )?;

            let rect = body.screen_rect(screen_height);
            let center = GVec2::new((rect.x + rect.w / 2.0) as f32, (rect.y + rect.h / 2.0) as f32);
            canvas.draw(
                &circle_mesh,
                DrawParam::new()
                    .dest(center)
                    .rotation(-body.rotation() as f32),
            );
        }

        if self.world.is_paused() {
            canvas.draw(
                &Text::new("paused (space to resume)"),
                DrawParam::new().dest(GVec2::new(10.0, 10.0)),
            );
        }

        canvas.finish(ctx)?;
        Ok(())
    }

    fn key_down_event(&mut self, ctx: &mut Context, input: KeyInput, _repeated: bool) -> GameResult {
        match input.keycode {
            Some(KeyCode::Escape) => ctx.request_quit(),
            Some(KeyCode::Space) => self.world.toggle_pause(),
            Some(keycode) => self.steer_player(keycode),
            None => {}
        }
        Ok(())
    }
}

/// Steps per wall-clock second for a frame of `frame_time` seconds.
fn update_rate(frame_time: f64) -> u32 {
    (1.0 / frame_time).round().clamp(1.0, u32::MAX as f64) as u32
}

/// Opens a window sized to the arena and runs the world until it closes.
pub fn run(world: PhysicsWorld, player: Option<usize>, player_speed: f64) -> GameResult {
    let bounds = world.config().bounds;
    let (ctx, event_loop) = ContextBuilder::new("disc_playground", "disc_physics")
        .window_setup(WindowSetup::default().title("Disc Playground"))
        .window_mode(WindowMode::default().dimensions(bounds.width as f32, bounds.height as f32))
        .build()?;

    let state = MainState::new(world, player, player_speed);
    event::run(ctx, event_loop, state)
}
