//! CSV profile-preset loader.
//!
//! # CSV format
//!
//! One row per named profile; rows become `ProfileId`s in file order.
//!
//! ```csv
//! name,personality,obstacle_weight,obstacle_strength,obstacle_range,agent_weight,agent_strength,agent_range,direction_weight,range_dir_factor,angular_range,angular_range_large,wall_weight,wall_strength,wall_range,driving_weight,desired_speed,attraction_weight,attraction_strength,attraction_range
//! commuter,standard,1,5,1.5,1,45,5,2,0.4,2,3,1,2,0.4,1,0.5,0,0,0
//! tourist,distracted,1,5,1.5,1,45,5,2,0.4,2,3,1,2,0.4,1,0.4,1,2,6
//! ```
//!
//! **`personality`** is one of `standard`, `aggressive`, `cautious`,
//! `distracted`, `reckless` (case-insensitive).  Every row is validated with
//! [`PersonalityProfile::validate`]; the first bad row aborts the load.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use sf_core::PersonalityType;

use crate::profile::{ForceTerm, InteractionShape, PersonalityProfile, ProfileTable};
use crate::{ProfileError, ProfileResult};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct ProfileRecord {
    name:                String,
    personality:         String,
    obstacle_weight:     f32,
    obstacle_strength:   f32,
    obstacle_range:      f32,
    agent_weight:        f32,
    agent_strength:      f32,
    agent_range:         f32,
    direction_weight:    f32,
    range_dir_factor:    f32,
    angular_range:       f32,
    angular_range_large: f32,
    wall_weight:         f32,
    wall_strength:       f32,
    wall_range:          f32,
    driving_weight:      f32,
    desired_speed:       f32,
    attraction_weight:   f32,
    attraction_strength: f32,
    attraction_range:    f32,
}

impl ProfileRecord {
    fn into_profile(self, line: usize) -> ProfileResult<PersonalityProfile> {
        let personality = self
            .personality
            .parse::<PersonalityType>()
            .map_err(|e| ProfileError::Parse(format!("row {line}: {e}")))?;

        Ok(PersonalityProfile {
            name: self.name,
            personality,
            obstacle: ForceTerm::new(self.obstacle_weight, self.obstacle_strength, self.obstacle_range),
            agent:    ForceTerm::new(self.agent_weight, self.agent_strength, self.agent_range),
            shape: InteractionShape {
                direction_weight:    self.direction_weight,
                range_dir_factor:    self.range_dir_factor,
                angular_range:       self.angular_range,
                angular_range_large: self.angular_range_large,
            },
            wall:       ForceTerm::new(self.wall_weight, self.wall_strength, self.wall_range),
            attraction: ForceTerm::new(self.attraction_weight, self.attraction_strength, self.attraction_range),
            driving_weight: self.driving_weight,
            desired_speed:  self.desired_speed,
        })
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a [`ProfileTable`] from a CSV file.
pub fn load_profiles_csv(path: &Path) -> ProfileResult<ProfileTable> {
    let file = std::fs::File::open(path)?;
    load_profiles_reader(file)
}

/// Like [`load_profiles_csv`] but accepts any `Read` source.
pub fn load_profiles_reader<R: Read>(reader: R) -> ProfileResult<ProfileTable> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut table = ProfileTable::new();

    for (i, result) in csv_reader.deserialize::<ProfileRecord>().enumerate() {
        // Header is line 1.
        let line = i + 2;
        let row = result.map_err(|e| ProfileError::Parse(format!("row {line}: {e}")))?;
        table.insert(row.into_profile(line)?)?;
    }

    Ok(table)
}
