//! Unit tests for sf-agent.

#[cfg(test)]
mod profile {
    use sf_core::{PersonalityType, ProfileId};

    use crate::{ForceTerm, PersonalityProfile, ProfileError, ProfileTable};

    #[test]
    fn every_preset_is_valid() {
        for p in PersonalityType::ALL {
            let profile = PersonalityProfile::preset(p);
            assert!(profile.validate().is_ok(), "{p} preset should validate");
            assert_eq!(profile.personality, p);
            assert_eq!(profile.name, p.as_str());
        }
    }

    #[test]
    fn standard_preset_matches_reference_scene() {
        let p = PersonalityProfile::default();
        assert_eq!(p.agent.strength, 45.0);
        assert_eq!(p.agent.range, 5.0);
        assert_eq!(p.wall, ForceTerm::new(1.0, 2.0, 0.4));
        assert_eq!(p.desired_speed, 0.5);
    }

    #[test]
    fn negative_range_rejected() {
        let mut p = PersonalityProfile::default();
        p.obstacle.range = -1.0;
        assert!(matches!(p.validate(), Err(ProfileError::Invalid { .. })));
    }

    #[test]
    fn zero_desired_speed_rejected() {
        let mut p = PersonalityProfile::default();
        p.desired_speed = 0.0;
        assert!(p.validate().is_err());
    }

    #[test]
    fn nan_coefficient_rejected() {
        let mut p = PersonalityProfile::default();
        p.shape.range_dir_factor = f32::NAN;
        assert!(p.validate().is_err());
    }

    #[test]
    fn presets_table_indexes_by_personality() {
        let table = ProfileTable::presets();
        assert_eq!(table.len(), PersonalityType::ALL.len());
        for p in PersonalityType::ALL {
            let id = ProfileId(p.index() as u16);
            assert_eq!(table[id].personality, p);
            assert_eq!(table.id_of(p.as_str()).unwrap(), id);
        }
    }

    #[test]
    fn insert_assigns_sequential_ids() {
        let mut table = ProfileTable::new();
        let a = table.insert(PersonalityProfile::default().named("a")).unwrap();
        let b = table.insert(PersonalityProfile::default().named("b")).unwrap();
        assert_eq!(a, ProfileId(0));
        assert_eq!(b, ProfileId(1));
        assert_eq!(table.iter().map(|(_, p)| p.name.as_str()).collect::<Vec<_>>(), ["a", "b"]);
    }

    #[test]
    fn duplicate_name_rejected() {
        let mut table = ProfileTable::new();
        table.insert(PersonalityProfile::default()).unwrap();
        let err = table.insert(PersonalityProfile::default()).unwrap_err();
        assert!(matches!(err, ProfileError::DuplicateName(n) if n == "standard"));
    }

    #[test]
    fn invalid_profile_not_inserted() {
        let mut table = ProfileTable::new();
        let mut bad = PersonalityProfile::default();
        bad.agent.strength = -3.0;
        assert!(table.insert(bad).is_err());
        assert!(table.is_empty());
    }

    #[test]
    fn unknown_lookups_error() {
        let table = ProfileTable::presets();
        assert!(table.require(ProfileId(99)).is_err());
        assert!(matches!(table.id_of("nobody"), Err(ProfileError::UnknownName(_))));
    }
}

#[cfg(test)]
mod loader {
    use std::io::Cursor;

    use sf_core::PersonalityType;

    use crate::{ProfileError, load_profiles_reader};

    const HEADER: &str = "name,personality,obstacle_weight,obstacle_strength,obstacle_range,\
agent_weight,agent_strength,agent_range,direction_weight,range_dir_factor,angular_range,\
angular_range_large,wall_weight,wall_strength,wall_range,driving_weight,desired_speed,\
attraction_weight,attraction_strength,attraction_range\n";

    fn csv(rows: &str) -> Cursor<String> {
        Cursor::new(format!("{HEADER}{rows}"))
    }

    #[test]
    fn loads_rows_in_order() {
        let table = load_profiles_reader(csv(
            "commuter,standard,1,5,1.5,1,45,5,2,0.4,2,3,1,2,0.4,1,0.5,0,0,0\n\
             tourist, Distracted ,1,5,1.5,1,45,5,2,0.4,2,3,1,2,0.4,1,0.4,1,2,6\n",
        ))
        .unwrap();

        assert_eq!(table.len(), 2);
        let tourist = &table[table.id_of("tourist").unwrap()];
        assert_eq!(tourist.personality, PersonalityType::Distracted);
        assert_eq!(tourist.attraction.range, 6.0);
        assert_eq!(tourist.desired_speed, 0.4);
    }

    #[test]
    fn unknown_personality_is_parse_error() {
        let err = load_profiles_reader(csv(
            "x,sleepy,1,5,1.5,1,45,5,2,0.4,2,3,1,2,0.4,1,0.5,0,0,0\n",
        ))
        .unwrap_err();
        assert!(matches!(err, ProfileError::Parse(msg) if msg.contains("row 2")));
    }

    #[test]
    fn invalid_values_rejected() {
        // desired_speed = 0
        let err = load_profiles_reader(csv(
            "x,standard,1,5,1.5,1,45,5,2,0.4,2,3,1,2,0.4,1,0,0,0,0\n",
        ))
        .unwrap_err();
        assert!(matches!(err, ProfileError::Invalid { .. }));
    }

    #[test]
    fn missing_column_is_parse_error() {
        let err = load_profiles_reader(Cursor::new("name,personality\nx,standard\n")).unwrap_err();
        assert!(matches!(err, ProfileError::Parse(_)));
    }

    #[test]
    fn empty_file_gives_empty_table() {
        let table = load_profiles_reader(csv("")).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn missing_file_is_io_error() {
        let path = std::env::temp_dir().join("sf-agent-no-such-profiles.csv");
        let err = crate::load_profiles_csv(&path).unwrap_err();
        assert!(matches!(err, ProfileError::Io(_)));
    }
}

#[cfg(test)]
mod store {
    use sf_core::{AgentId, DestinationId, PersonalityType, ProfileId, Tick, Vec3};

    use crate::{AgentSpawn, AgentStoreBuilder, ProfileError, ProfileTable};

    fn pid(p: PersonalityType) -> ProfileId {
        ProfileId(p.index() as u16)
    }

    #[test]
    fn builder_fills_defaults() {
        let profiles = ProfileTable::presets();
        let store = AgentStoreBuilder::new(0.5)
            .spawn(AgentSpawn::at(Vec3::ZERO, pid(PersonalityType::Standard)))
            .spawn(AgentSpawn::at(Vec3::X, pid(PersonalityType::Reckless)).radius(0.25))
            .build(&profiles)
            .unwrap();

        assert_eq!(store.count, 2);
        assert_eq!(store.radius, vec![0.5, 0.25]);
        assert_eq!(store.velocity[0], Vec3::ZERO);
        assert_eq!(store.max_speed[1], profiles[pid(PersonalityType::Reckless)].desired_speed);
        assert_eq!(store.destination[0], DestinationId::INVALID);
        assert!(!store.reached[0]);
        assert_eq!(store.leg_start[1], Tick::ZERO);
    }

    #[test]
    fn zero_agents() {
        let store = AgentStoreBuilder::new(0.5).build(&ProfileTable::presets()).unwrap();
        assert!(store.is_empty());
        assert_eq!(store.agent_ids().count(), 0);
    }

    #[test]
    fn unknown_profile_rejected_at_build() {
        let result = AgentStoreBuilder::new(0.5)
            .spawn(AgentSpawn::at(Vec3::ZERO, ProfileId(42)))
            .build(&ProfileTable::presets());
        assert!(matches!(result, Err(ProfileError::UnknownProfile(ProfileId(42)))));
    }

    #[test]
    fn negative_radius_rejected() {
        let result = AgentStoreBuilder::new(0.5)
            .spawn(AgentSpawn::at(Vec3::ZERO, ProfileId(0)).radius(-0.1))
            .build(&ProfileTable::presets());
        assert!(matches!(result, Err(ProfileError::InvalidRadius { agent: 0, .. })));
    }

    #[test]
    fn set_profile_rederives_max_speed() {
        let profiles = ProfileTable::presets();
        let mut store = AgentStoreBuilder::new(0.5)
            .spawn(AgentSpawn::at(Vec3::ZERO, pid(PersonalityType::Standard)))
            .build(&profiles)
            .unwrap();

        let aggressive = pid(PersonalityType::Aggressive);
        store.set_profile(AgentId(0), aggressive, &profiles).unwrap();
        assert_eq!(store.profile[0], aggressive);
        assert_eq!(store.max_speed[0], profiles[aggressive].desired_speed);

        assert!(store.set_profile(AgentId(0), ProfileId(77), &profiles).is_err());
        assert!(store.set_profile(AgentId(5), aggressive, &profiles).is_err());
        assert_eq!(store.profile[0], aggressive, "failed swaps leave the agent untouched");
    }

    #[test]
    fn speed_and_heading() {
        let profiles = ProfileTable::presets();
        let store = AgentStoreBuilder::new(0.5)
            .spawn(AgentSpawn::at(Vec3::ZERO, ProfileId(0)).velocity(Vec3::new(0.3, 0.0, 0.4)))
            .spawn(AgentSpawn::at(Vec3::ZERO, ProfileId(0)))
            .build(&profiles)
            .unwrap();
        assert!((store.speed(AgentId(0)) - 0.5).abs() < 1e-6);
        assert!(store.heading(AgentId(0)).is_some());
        assert_eq!(store.heading(AgentId(1)), None);
    }

    #[test]
    fn agent_ids_iterator() {
        let store = AgentStoreBuilder::new(0.5)
            .spawn_all((0..3).map(|i| AgentSpawn::at(Vec3::new(i as f32, 0.0, 0.0), ProfileId(0))))
            .build(&ProfileTable::presets())
            .unwrap();
        let ids: Vec<AgentId> = store.agent_ids().collect();
        assert_eq!(ids, vec![AgentId(0), AgentId(1), AgentId(2)]);
    }
}
