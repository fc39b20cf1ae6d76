mod tests {
    use embassy_time::{Duration, Instant};
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use serpentine_show::config::{LifeConfig, ShowConfig};
    use serpentine_show::grid::PixelGrid;
    use serpentine_show::pattern::{PatternEngine, PatternId, WaveDirection, random_duration};

    type Engine = PatternEngine<12, 3, 4>;

    fn show(life_enabled: bool) -> ShowConfig {
        ShowConfig {
            pattern_duration_min: Duration::from_secs(3),
            pattern_duration_max: Duration::from_secs(15),
            life_enabled,
        }
    }

    #[test]
    fn test_pattern_id_names() {
        for raw in 0..5 {
            let id = PatternId::from_raw(raw).unwrap();
            assert_eq!(id as u8, raw);
        }
        assert_eq!(PatternId::from_raw(5), None);
        assert_eq!(PatternId::WaveDown.as_str(), "wave_down");
        assert_eq!(PatternId::Life.as_str(), "life");
        assert_eq!(PatternId::WaveLeft.wave_direction(), Some(WaveDirection::Left));
        assert_eq!(PatternId::Life.wave_direction(), None);
    }

    #[test]
    fn test_random_duration_inclusive_bounds() {
        let mut rng = SmallRng::seed_from_u64(3);
        let min = Duration::from_millis(10);
        let max = Duration::from_millis(20);
        for _ in 0..1000 {
            let duration = random_duration(&mut rng, min, max);
            assert!(duration >= min && duration <= max);
        }
        assert_eq!(random_duration(&mut rng, max, max), max);
    }

    #[test]
    fn test_reseed_stays_within_config() {
        let mut engine = Engine::new(&show(false), &LifeConfig::default(), Instant::from_millis(0));
        let mut rng = SmallRng::seed_from_u64(11);
        assert_eq!(engine.available(), 4);

        for _ in 0..1000 {
            engine.reseed(&mut rng);
            assert_ne!(engine.current(), PatternId::Life);
            assert!(engine.duration() >= Duration::from_secs(3));
            assert!(engine.duration() <= Duration::from_secs(15));
        }
    }

    #[test]
    fn test_reseed_reaches_life_when_enabled() {
        let mut engine = Engine::new(&show(true), &LifeConfig::default(), Instant::from_millis(0));
        let mut rng = SmallRng::seed_from_u64(11);
        assert_eq!(engine.available(), 5);

        let mut seen = [false; 5];
        for _ in 0..1000 {
            engine.reseed(&mut rng);
            seen[engine.current() as usize] = true;
        }
        assert!(seen.iter().all(|hit| *hit));
    }

    #[test]
    fn test_rotation_after_duration() {
        let config = ShowConfig {
            pattern_duration_min: Duration::from_secs(5),
            pattern_duration_max: Duration::from_secs(5),
            life_enabled: false,
        };
        let mut engine = Engine::new(&config, &LifeConfig::default(), Instant::from_millis(0));
        let mut grid = PixelGrid::<12, 3, 4>::new();
        let mut rng = SmallRng::seed_from_u64(5);

        engine.reseed(&mut rng);
        engine.start(Instant::from_millis(1000));
        assert_eq!(engine.duration(), Duration::from_secs(5));

        engine.render(Instant::from_millis(5999), &mut grid, &mut rng);
        assert_eq!(engine.rotation().last_fired(), Instant::from_millis(1000));

        engine.render(Instant::from_millis(6000), &mut grid, &mut rng);
        assert_eq!(engine.rotation().last_fired(), Instant::from_millis(6000));
        assert_eq!(engine.rotation().period(), Duration::from_secs(5));
    }

    #[test]
    fn test_only_selected_wave_moves() {
        let mut engine = Engine::new(&show(false), &LifeConfig::default(), Instant::from_millis(0));
        let mut grid = PixelGrid::<12, 3, 4>::new();
        let mut rng = SmallRng::seed_from_u64(5);
        engine.select(PatternId::WaveLeft);
        engine.start(Instant::from_millis(0));

        engine.render(Instant::from_millis(10), &mut grid, &mut rng);
        assert_eq!(engine.wave(WaveDirection::Left).state().cursor, 1);
        assert_eq!(engine.wave(WaveDirection::Up).state().cursor, 0);
        assert_eq!(engine.wave(WaveDirection::Down).state().cursor, 3);
        assert_eq!(engine.wave(WaveDirection::Right).state().cursor, 2);
    }
}
