use ggez::graphics::Color;
use ggez::mint::Point2;
use rand::Rng;

use crate::actor::{Direction, Ghost, Pellet, Player, PowerUp, PLAYER_SPEED};
use crate::collision::{circle_hits_rect, circles_touch};
use crate::ghost;
use crate::maze::{self, Maze, Wall, MAP};

pub const PELLET_SCORE: u32 = 10;
pub const SCARED_SECS: f32 = 5.0;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Phase {
    Playing,
    Won,
    Lost,
}

#[derive(Default)]
pub struct InputState {
    held: [bool; 4],
    last_pressed: Option<Direction>,
}

fn dir_index(dir: Direction) -> usize {
    match dir {
        Direction::Up => 0,
        Direction::Down => 1,
        Direction::Left => 2,
        Direction::Right => 3,
    }
}

impl InputState {
    pub fn press(&mut self, dir: Direction) {
        self.held[dir_index(dir)] = true;
        self.last_pressed = Some(dir);
    }

    pub fn release(&mut self, dir: Direction) {
        self.held[dir_index(dir)] = false;
    }

    /// The direction the player is asking for: the most recently pressed
    /// key, and only while it is still held.
    pub fn current(&self) -> Option<Direction> {
        self.last_pressed.filter(|dir| self.held[dir_index(*dir)])
    }
}

pub struct GameState {
    pub walls: Vec<Wall>,
    pub pellets: Vec<Pellet>,
    pub power_ups: Vec<PowerUp>,
    pub ghosts: Vec<Ghost>,
    pub player: Player,
    pub score: u32,
    pub phase: Phase,
    pub scared_secs: f32,
}

fn spawn_ghosts() -> Vec<Ghost> {
    vec![
        Ghost::new(maze::tile_center(6, 1), Color::RED),
        Ghost::new(maze::tile_center(6, 3), Color::new(1.0, 0.7, 1.0, 1.0)),
        Ghost::new(maze::tile_center(3, 1), Color::BLUE),
    ]
}

impl GameState {
    pub fn new() -> GameState {
        let maze = Maze::parse(&MAP);
        GameState {
            walls: maze.walls,
            pellets: maze.pellets,
            power_ups: maze.power_ups,
            ghosts: spawn_ghosts(),
            player: Player::new(maze::tile_center(1, 1)),
            score: 0,
            phase: Phase::Playing,
            scared_secs: SCARED_SECS,
        }
    }

    /// One frame of game time. `dt` only drives the scared countdowns;
    /// movement is a fixed step per tick.
    pub fn tick(&mut self, input: &InputState, dt: f32, rng: &mut impl Rng) {
        if self.phase != Phase::Playing {
            return;
        }

        self.steer_player(input);

        if self.pellets.is_empty() {
            self.phase = Phase::Won;
            return;
        }

        let player = &self.player;
        let mut caught = false;
        self.ghosts.retain(|ghost| {
            if circles_touch(ghost.pos, ghost.radius, player.pos, player.radius) {
                if ghost.scared {
                    return false;
                }
                caught = true;
            }
            true
        });
        if caught {
            self.phase = Phase::Lost;
            return;
        }

        let ghosts = &mut self.ghosts;
        let scared_secs = self.scared_secs;
        self.power_ups.retain(|power_up| {
            if circles_touch(power_up.pos, power_up.radius, player.pos, player.radius) {
                for ghost in ghosts.iter_mut() {
                    ghost.scare(scared_secs);
                }
                return false;
            }
            true
        });

        let score = &mut self.score;
        self.pellets.retain(|pellet| {
            if circles_touch(pellet.pos, pellet.radius, player.pos, player.radius) {
                *score += PELLET_SCORE;
                return false;
            }
            true
        });

        // Safety net: the steering probe covers the requested direction, but
        // a leftover cross-axis velocity can still run into a wall.
        if self
            .walls
            .iter()
            .any(|wall| circle_hits_rect(self.player.pos, self.player.radius, self.player.vel, &wall.rect))
        {
            self.player.vel = Point2 { x: 0.0, y: 0.0 };
        }
        self.player.advance();

        for ghost in &mut self.ghosts {
            ghost.advance();
            ghost::steer(ghost, &self.walls, rng);
            ghost.tick_scared(dt);
        }

        self.player.update_rotation();
    }

    fn steer_player(&mut self, input: &InputState) {
        let dir = match input.current() {
            Some(dir) => dir,
            None => return,
        };

        let probe = dir.velocity(PLAYER_SPEED);
        let blocked = self
            .walls
            .iter()
            .any(|wall| circle_hits_rect(self.player.pos, self.player.radius, probe, &wall.rect));

        match dir {
            Direction::Up | Direction::Down => {
                self.player.vel.y = if blocked { 0.0 } else { probe.y };
            }
            Direction::Left | Direction::Right => {
                self.player.vel.x = if blocked { 0.0 } else { probe.x };
            }
        }
    }
}
