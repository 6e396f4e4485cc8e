use ggez::event::{self, EventHandler};
use ggez::graphics::{self, Color, DrawParam};
use ggez::input::keyboard::{KeyCode, KeyMods};
use ggez::timer;
use ggez::{Context, ContextBuilder, GameResult};

mod actor;
mod collision;
mod game;
mod ghost;
mod maze;

use actor::Direction;
use game::{GameState, InputState, Phase, SCARED_SECS};
use maze::{WallShape, MAP, TILE_SIZE};

const WALL_COLOR: Color = Color::new(0.1, 0.2, 0.9, 1.0);
const BLOCK_COLOR: Color = Color::new(0.2, 0.35, 1.0, 1.0);
const POWER_UP_COLOR: Color = Color::new(1.0, 0.6, 0.1, 1.0);
const SCARED_COLOR: Color = Color::new(0.6, 0.2, 0.8, 1.0);

struct App {
    game: GameState,
    input: InputState,
}

impl App {
    fn new() -> App {
        let mut game = GameState::new();
        game.scared_secs = read_scared_secs();
        App {
            game,
            input: InputState::default(),
        }
    }
}

fn read_scared_secs() -> f32 {
    std::env::var("PACMAZE_SCARED_SECS")
        .ok()
        .and_then(|v| v.parse::<f32>().ok())
        .filter(|v| *v > 0.0)
        .unwrap_or(SCARED_SECS)
}

fn key_direction(keycode: KeyCode) -> Option<Direction> {
    match keycode {
        KeyCode::Up | KeyCode::W => Some(Direction::Up),
        KeyCode::Down | KeyCode::S => Some(Direction::Down),
        KeyCode::Left | KeyCode::A => Some(Direction::Left),
        KeyCode::Right | KeyCode::D => Some(Direction::Right),
        _ => None,
    }
}

impl EventHandler<ggez::GameError> for App {
    fn update(&mut self, ctx: &mut Context) -> GameResult {
        let dt = timer::delta(ctx).as_secs_f32();
        let mut rng = rand::thread_rng();
        self.game.tick(&self.input, dt, &mut rng);
        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> GameResult {
        graphics::clear(ctx, Color::BLACK);

        for wall in &self.game.walls {
            let color = match wall.shape {
                WallShape::Block => BLOCK_COLOR,
                _ => WALL_COLOR,
            };
            let mesh = graphics::Mesh::new_rectangle(
                ctx,
                graphics::DrawMode::fill(),
                wall.rect,
                color,
            )?;
            graphics::draw(ctx, &mesh, DrawParam::default())?;
        }

        for pellet in &self.game.pellets {
            let mesh = graphics::Mesh::new_circle(
                ctx,
                graphics::DrawMode::fill(),
                pellet.pos,
                pellet.radius,
                0.1,
                Color::WHITE,
            )?;
            graphics::draw(ctx, &mesh, DrawParam::default())?;
        }

        for power_up in &self.game.power_ups {
            let mesh = graphics::Mesh::new_circle(
                ctx,
                graphics::DrawMode::fill(),
                power_up.pos,
                power_up.radius,
                0.1,
                POWER_UP_COLOR,
            )?;
            graphics::draw(ctx, &mesh, DrawParam::default())?;
        }

        for ghost in &self.game.ghosts {
            let color = if ghost.scared {
                SCARED_COLOR
            } else {
                ghost.color
            };
            let mesh = graphics::Mesh::new_circle(
                ctx,
                graphics::DrawMode::fill(),
                ghost.pos,
                ghost.radius,
                0.1,
                color,
            )?;
            graphics::draw(ctx, &mesh, DrawParam::default())?;
        }

        let player = &self.game.player;
        let mesh = graphics::Mesh::new_circle(
            ctx,
            graphics::DrawMode::fill(),
            ggez::mint::Point2 { x: 0.0, y: 0.0 },
            player.radius,
            0.1,
            Color::YELLOW,
        )?;
        graphics::draw(
            ctx,
            &mesh,
            DrawParam::default()
                .dest(player.pos)
                .rotation(player.rotation),
        )?;

        let score_text = graphics::Text::new(format!("Score: {}", self.game.score));
        graphics::draw(
            ctx,
            &score_text,
            DrawParam::default()
                .dest(ggez::mint::Point2 { x: 10.0, y: 10.0 })
                .color(Color::WHITE),
        )?;

        let banner = match self.game.phase {
            Phase::Won => Some(("VICTORY!", Color::GREEN)),
            Phase::Lost => Some(("DEFEAT!", Color::RED)),
            Phase::Playing => None,
        };
        if let Some((label, color)) = banner {
            let text = graphics::Text::new(label);
            let dims = text.dimensions(ctx);
            let (w, h) = graphics::drawable_size(ctx);
            graphics::draw(
                ctx,
                &text,
                DrawParam::default()
                    .dest(ggez::mint::Point2 {
                        x: (w - dims.w) / 2.0,
                        y: (h - dims.h) / 2.0,
                    })
                    .color(color)
                    .scale([2.0, 2.0]),
            )?;
        }

        graphics::present(ctx)?;
        timer::yield_now();
        Ok(())
    }

    fn key_down_event(
        &mut self,
        ctx: &mut Context,
        keycode: KeyCode,
        _keymods: KeyMods,
        _repeat: bool,
    ) {
        if keycode == KeyCode::Escape {
            event::quit(ctx);
            return;
        }
        if let Some(dir) = key_direction(keycode) {
            self.input.press(dir);
        }
    }

    fn key_up_event(&mut self, _ctx: &mut Context, keycode: KeyCode, _keymods: KeyMods) {
        if let Some(dir) = key_direction(keycode) {
            self.input.release(dir);
        }
    }
}

fn main() -> GameResult {
    let width = MAP[0].len() as f32 * TILE_SIZE;
    let height = MAP.len() as f32 * TILE_SIZE;

    let cb = ContextBuilder::new("pacmaze", "pacmaze")
        .window_setup(ggez::conf::WindowSetup::default().title("Pacmaze"))
        .window_mode(
            ggez::conf::WindowMode::default()
                .dimensions(width, height)
                .resizable(false),
        );

    let (ctx, event_loop) = cb.build()?;
    let app = App::new();
    event::run(ctx, event_loop, app)
}
