//! Movement domain: the rail the player is confined to and the boundary
//! service that limits progress along it.

use bevy::prelude::*;

/// Maps a scalar rail position to world placement and owns the player's
/// current position on the rail.
pub trait TrackCursor {
    fn current_position(&self) -> f32;

    fn rail_length(&self) -> f32;

    fn clamp(&self, position: f32) -> f32 {
        position.clamp(0.0, self.rail_length())
    }

    fn set_position(&mut self, position: f32);

    /// World point for a rail position lifted by `vertical_offset`.
    fn place(&self, position: f32, vertical_offset: f32) -> Vec2;
}

/// Progression limits along the rail.
pub trait BoundaryService {
    /// May report a stricter upper bound than the rail length.
    fn clamp_to_active_boundary(&self, position: f32) -> f32;

    /// Progression check run after every position write.
    fn check_within_boundary(&mut self, position: f32);

    fn current_boundary_index(&self) -> usize;
}

/// Clamp `target` to the rail and then to the active boundary, write it
/// through the cursor and run the progression check. Returns the written
/// position.
///
/// Passing a lifted boundary can make a later, still locked one active in
/// the same write; the position is clamped again until the active index
/// settles so it never ends past a locked limit.
pub(crate) fn write_rail_position(
    track: &mut dyn TrackCursor,
    boundary: &mut dyn BoundaryService,
    target: f32,
) -> f32 {
    let mut position = track.clamp(target);
    loop {
        let index = boundary.current_boundary_index();
        position = boundary.clamp_to_active_boundary(position);
        track.set_position(position);
        boundary.check_within_boundary(position);
        if boundary.current_boundary_index() == index {
            break;
        }
    }
    debug_assert!(
        (0.0..=track.rail_length()).contains(&position),
        "rail position {position} escaped [0, {}]",
        track.rail_length()
    );
    position
}

/// Straight rail starting at `origin` and running along +X.
#[derive(Resource, Debug, Clone)]
pub struct RailTrack {
    origin: Vec2,
    length: f32,
    position: f32,
}

impl RailTrack {
    pub fn new(origin: Vec2, length: f32, start: f32) -> Self {
        Self {
            origin,
            length,
            position: start.clamp(0.0, length),
        }
    }
}

impl TrackCursor for RailTrack {
    fn current_position(&self) -> f32 {
        self.position
    }

    fn rail_length(&self) -> f32 {
        self.length
    }

    fn set_position(&mut self, position: f32) {
        self.position = self.clamp(position);
    }

    fn place(&self, position: f32, vertical_offset: f32) -> Vec2 {
        self.origin + Vec2::new(position, vertical_offset)
    }
}
