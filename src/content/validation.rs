//! Validation for loaded content and the cross-references between defs.

use super::data::TrackDef;
use super::error::{ConfigError, require_non_negative, require_positive};
use crate::movement::LocomotionParams;

/// Validate locomotion tuning and the track layout together.
/// Returns a list of errors, empty if everything is usable.
pub fn validate_content(params: &LocomotionParams, track: &TrackDef) -> Vec<ConfigError> {
    let mut errors = Vec::new();
    if let Err(e) = params.validate() {
        errors.push(e);
    }
    errors.extend(validate_track(track));
    errors
}

/// Validate a track layout. Every problem found is reported.
pub fn validate_track(track: &TrackDef) -> Vec<ConfigError> {
    let mut errors = Vec::new();

    if let Err(e) = require_positive("rail_length", track.rail_length) {
        errors.push(e);
        // Nothing else can be range-checked without a usable rail
        return errors;
    }

    if !(0.0..=track.rail_length).contains(&track.player_start) {
        errors.push(ConfigError::OutOfRange {
            field: "player_start",
            value: track.player_start,
            min: 0.0,
            max: track.rail_length,
        });
    }

    for archetype in &track.archetypes {
        errors.extend(require_positive("archetype.health", archetype.health).err());
        errors.extend(require_positive("archetype.radius", archetype.radius).err());
    }

    for (index, boundary) in track.boundaries.iter().enumerate() {
        if !(0.0..=track.rail_length).contains(&boundary.rail_limit) {
            errors.push(ConfigError::OutOfRange {
                field: "boundary.rail_limit",
                value: boundary.rail_limit,
                min: 0.0,
                max: track.rail_length,
            });
        }
        if index > 0 && boundary.rail_limit <= track.boundaries[index - 1].rail_limit {
            errors.push(ConfigError::BoundaryOrder {
                index,
                previous: index - 1,
            });
        }
    }

    for region in &track.regions {
        if track.archetype(&region.archetype).is_none() {
            errors.push(ConfigError::UnknownArchetype {
                region: region.id.clone(),
                archetype: region.archetype.clone(),
            });
        }
        if region.boundary_index >= track.boundaries.len() {
            errors.push(ConfigError::UnknownBoundary {
                region: region.id.clone(),
                index: region.boundary_index,
            });
        }
        let (min, max) = region.offset_range;
        if !min.is_finite() || !max.is_finite() || min > max {
            errors.push(ConfigError::OffsetRange {
                region: region.id.clone(),
                min,
                max,
            });
        }
        errors.extend(require_non_negative("region.rail_position", region.rail_position).err());
    }

    errors
}
