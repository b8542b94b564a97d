//! Personality profiles: immutable force-tuning bundles shared by index.
//!
//! Every agent stores a [`ProfileId`] into the session's [`ProfileTable`]
//! rather than its own copy of the coefficients.  The table is built once at
//! session start, owned by the simulation, and borrowed read-only by every
//! worker during the force phase.

use std::ops::Index;

use rustc_hash::FxHashMap;

use sf_core::{PersonalityType, ProfileId};

use crate::{ProfileError, ProfileResult};

// ── Coefficient groups ────────────────────────────────────────────────────────

/// Weight, strength and range of one force term.
///
/// `weight` scales the term in the net-force sum; `strength` and `range`
/// parameterise the interaction kernel itself.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ForceTerm {
    pub weight:   f32,
    pub strength: f32,
    pub range:    f32,
}

impl ForceTerm {
    pub const fn new(weight: f32, strength: f32, range: f32) -> Self {
        Self { weight, strength, range }
    }
}

/// Shape of the anisotropic agent/obstacle repulsion.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InteractionShape {
    /// How strongly relative velocity bends the interaction direction.
    pub direction_weight: f32,
    /// Multiplier turning the interaction-vector length into the
    /// interaction scale `B`.
    pub range_dir_factor: f32,
    /// Angular falloff of the lateral (sideways) component.
    pub angular_range: f32,
    /// Angular falloff of the forward (decelerating) component.
    pub angular_range_large: f32,
}

// ── PersonalityProfile ────────────────────────────────────────────────────────

/// Named, immutable bundle of social-force coefficients.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PersonalityProfile {
    pub name:        String,
    pub personality: PersonalityType,

    pub obstacle:    ForceTerm,
    pub agent:       ForceTerm,
    pub shape:       InteractionShape,
    pub wall:        ForceTerm,
    pub attraction:  ForceTerm,

    pub driving_weight: f32,
    /// Cruising speed; also the velocity clamp.  Must be positive.
    pub desired_speed:  f32,
}

impl PersonalityProfile {
    /// Built-in coefficients for each personality.
    ///
    /// `Standard` carries the values of the reference scenes; the others are
    /// tuned around it.
    pub fn preset(personality: PersonalityType) -> Self {
        let shape = InteractionShape {
            direction_weight:    2.0,
            range_dir_factor:    0.4,
            angular_range:       2.0,
            angular_range_large: 3.0,
        };
        let standard = Self {
            name:           personality.as_str().to_owned(),
            personality,
            obstacle:       ForceTerm::new(1.0, 5.0, 1.5),
            agent:          ForceTerm::new(1.0, 45.0, 5.0),
            shape,
            wall:           ForceTerm::new(1.0, 2.0, 0.4),
            attraction:     ForceTerm::new(0.2, 0.5, 3.0),
            driving_weight: 1.0,
            desired_speed:  0.5,
        };

        match personality {
            PersonalityType::Standard => standard,
            PersonalityType::Aggressive => Self {
                obstacle:      ForceTerm::new(1.0, 4.0, 1.2),
                agent:         ForceTerm::new(1.0, 30.0, 3.0),
                desired_speed: 0.8,
                ..standard
            },
            PersonalityType::Cautious => Self {
                obstacle:      ForceTerm::new(1.0, 7.0, 2.0),
                agent:         ForceTerm::new(1.0, 60.0, 7.0),
                wall:          ForceTerm::new(1.0, 3.0, 0.6),
                desired_speed: 0.35,
                ..standard
            },
            PersonalityType::Distracted => Self {
                attraction:    ForceTerm::new(1.0, 2.0, 6.0),
                desired_speed: 0.4,
                ..standard
            },
            PersonalityType::Reckless => Self {
                obstacle:      ForceTerm::new(0.5, 2.5, 1.0),
                agent:         ForceTerm::new(1.0, 35.0, 4.0),
                wall:          ForceTerm::new(0.5, 1.0, 0.25),
                desired_speed: 0.9,
                ..standard
            },
        }
    }

    /// Rename the profile (builder-style).
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Check the invariants the force kernel relies on: all coefficients
    /// finite, ranges and strengths non-negative, desired speed positive.
    pub fn validate(&self) -> ProfileResult<()> {
        let invalid = |reason: String| ProfileError::Invalid {
            name: self.name.clone(),
            reason,
        };

        let terms = [
            ("obstacle", self.obstacle),
            ("agent", self.agent),
            ("wall", self.wall),
            ("attraction", self.attraction),
        ];
        for (label, term) in terms {
            if !(term.weight.is_finite() && term.strength.is_finite() && term.range.is_finite()) {
                return Err(invalid(format!("{label} coefficients must be finite")));
            }
            if term.strength < 0.0 || term.range < 0.0 {
                return Err(invalid(format!(
                    "{label} strength and range must be non-negative (got {}, {})",
                    term.strength, term.range
                )));
            }
        }

        let shape = [
            ("direction_weight", self.shape.direction_weight),
            ("range_dir_factor", self.shape.range_dir_factor),
            ("angular_range", self.shape.angular_range),
            ("angular_range_large", self.shape.angular_range_large),
        ];
        for (label, value) in shape {
            if !value.is_finite() || value < 0.0 {
                return Err(invalid(format!("{label} must be finite and non-negative, got {value}")));
            }
        }

        if !self.driving_weight.is_finite() {
            return Err(invalid("driving_weight must be finite".into()));
        }
        if !(self.desired_speed.is_finite() && self.desired_speed > 0.0) {
            return Err(invalid(format!(
                "desired_speed must be positive, got {}",
                self.desired_speed
            )));
        }
        Ok(())
    }
}

impl Default for PersonalityProfile {
    fn default() -> Self {
        Self::preset(PersonalityType::Standard)
    }
}

// ── ProfileTable ──────────────────────────────────────────────────────────────

/// Registry of validated profiles, indexed by [`ProfileId`] in insertion
/// order and searchable by name.
#[derive(Clone, Debug, Default)]
pub struct ProfileTable {
    profiles: Vec<PersonalityProfile>,
    by_name:  FxHashMap<String, ProfileId>,
}

impl ProfileTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// One profile per [`PersonalityType`], in declaration order, so that
    /// `ProfileId(p.index())` is the preset for `p`.
    pub fn presets() -> Self {
        let mut table = Self::new();
        for personality in PersonalityType::ALL {
            // Presets are valid and uniquely named by construction.
            table.profiles.push(PersonalityProfile::preset(personality));
            table
                .by_name
                .insert(personality.as_str().to_owned(), ProfileId(personality.index() as u16));
        }
        table
    }

    /// Validate and register `profile`, returning its id.
    pub fn insert(&mut self, profile: PersonalityProfile) -> ProfileResult<ProfileId> {
        profile.validate()?;
        if self.by_name.contains_key(&profile.name) {
            return Err(ProfileError::DuplicateName(profile.name));
        }
        let id = ProfileId::try_from(self.profiles.len())
            .ok()
            .filter(|id| *id != ProfileId::INVALID)
            .ok_or(ProfileError::TableFull(self.profiles.len()))?;
        self.by_name.insert(profile.name.clone(), id);
        self.profiles.push(profile);
        Ok(id)
    }

    #[inline]
    pub fn get(&self, id: ProfileId) -> Option<&PersonalityProfile> {
        self.profiles.get(id.index())
    }

    /// Look a profile up by its registered name.
    pub fn id_of(&self, name: &str) -> ProfileResult<ProfileId> {
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| ProfileError::UnknownName(name.to_owned()))
    }

    /// `Err` unless `id` refers to a registered profile.
    pub fn require(&self, id: ProfileId) -> ProfileResult<&PersonalityProfile> {
        self.get(id).ok_or(ProfileError::UnknownProfile(id))
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// `(ProfileId, &PersonalityProfile)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (ProfileId, &PersonalityProfile)> + '_ {
        self.profiles
            .iter()
            .enumerate()
            .map(|(i, p)| (ProfileId(i as u16), p))
    }
}

impl Index<ProfileId> for ProfileTable {
    type Output = PersonalityProfile;

    /// # Panics
    /// Panics if `id` is not registered.  Agent stores only hold ids checked
    /// against the table at build time.
    #[inline]
    fn index(&self, id: ProfileId) -> &PersonalityProfile {
        &self.profiles[id.index()]
    }
}
