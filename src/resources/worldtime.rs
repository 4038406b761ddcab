//! Simulation clock.
use bevy_ecs::prelude::Resource;

/// Time since start and the delta of the current frame, in seconds.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct WorldTime {
    pub elapsed: f32,
    pub delta: f32,
}

impl WorldTime {
    /// Start a new frame of `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        self.delta = dt;
        self.elapsed += dt;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_accumulates_elapsed() {
        let mut time = WorldTime::default();
        time.advance(0.25);
        time.advance(0.5);
        assert_eq!(time.delta, 0.5);
        assert_eq!(time.elapsed, 0.75);
    }
}
