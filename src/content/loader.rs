//! Loader for RON content files at startup.

use ron::Options;
use std::fs;
use std::path::Path;

use super::data::TrackDef;
use super::error::ConfigError;
use super::validation::validate_content;
use crate::movement::LocomotionParams;

pub const LOCOMOTION_FILE: &str = "locomotion.ron";
pub const TRACK_FILE: &str = "track.ron";

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse RON text; `file` only labels errors.
pub fn parse_ron<T>(file: &str, contents: &str) -> Result<T, ConfigError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    ron_options()
        .from_str(contents)
        .map_err(|e| ConfigError::Parse {
            file: file.to_string(),
            message: e.to_string(),
        })
}

/// Load a single RON struct.
fn load_single_file<T>(path: &Path) -> Result<T, ConfigError>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        file: file_name.clone(),
        source,
    })?;

    parse_ron(&file_name, &contents)
}

/// Load and validate locomotion tuning and the track layout from `base_path`.
/// Returns every error found, not just the first.
pub fn load_all_content(
    base_path: &Path,
) -> Result<(LocomotionParams, TrackDef), Vec<ConfigError>> {
    let params = load_single_file::<LocomotionParams>(&base_path.join(LOCOMOTION_FILE));
    let track = load_single_file::<TrackDef>(&base_path.join(TRACK_FILE));

    let (params, track) = match (params, track) {
        (Ok(params), Ok(track)) => (params, track),
        (params, track) => {
            return Err(params.err().into_iter().chain(track.err()).collect());
        }
    };

    let errors = validate_content(&params, &track);
    if errors.is_empty() {
        Ok((params, track))
    } else {
        Err(errors)
    }
}
