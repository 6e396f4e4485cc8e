use rand::seq::SliceRandom;
use rand::Rng;

use crate::actor::{Direction, Ghost};
use crate::collision::circle_hits_rect;
use crate::maze::Wall;

impl Ghost {
    pub fn scare(&mut self, secs: f32) {
        self.scared = true;
        self.scared_left = secs;
    }

    pub fn tick_scared(&mut self, dt: f32) {
        if !self.scared {
            return;
        }
        self.scared_left -= dt;
        if self.scared_left <= 0.0 {
            self.scared = false;
            self.scared_left = 0.0;
        }
    }
}

fn blocked_directions(ghost: &Ghost, walls: &[Wall]) -> Vec<Direction> {
    Direction::ALL
        .iter()
        .copied()
        .filter(|dir| {
            let probe = dir.velocity(ghost.speed);
            walls
                .iter()
                .any(|wall| circle_hits_rect(ghost.pos, ghost.radius, probe, &wall.rect))
        })
        .collect()
}

fn same_set(a: &[Direction], b: &[Direction]) -> bool {
    a.len() == b.len() && a.iter().all(|dir| b.contains(dir))
}

/// Re-evaluate a ghost's direction of travel against the current walls.
///
/// The ghost remembers the largest blocked-direction set it has seen since
/// its last turn. When the probe result stops matching that memory the ghost
/// has reached a decision point: its own heading joins the remembered set,
/// and it turns into one of the remembered directions that just opened up,
/// chosen uniformly. An intersection therefore offers every exit except the
/// one it came in through.
pub fn steer(ghost: &mut Ghost, walls: &[Wall], rng: &mut impl Rng) {
    let blocked = blocked_directions(ghost, walls);

    // Entering a tighter passage: adopt the larger constraint set wholesale
    // so the next comparison is against what the ghost can actually do here.
    if blocked.len() > ghost.prev_blocked.len() {
        ghost.prev_blocked = blocked.clone();
    }

    if !same_set(&blocked, &ghost.prev_blocked) {
        if let Some(heading) = ghost.heading() {
            ghost.prev_blocked.push(heading);
        }

        let openings: Vec<Direction> = ghost
            .prev_blocked
            .iter()
            .copied()
            .filter(|dir| !blocked.contains(dir))
            .collect();

        if let Some(&dir) = openings.choose(rng) {
            ghost.vel = dir.velocity(ghost.speed);
        }
        ghost.prev_blocked.clear();
    }
}
