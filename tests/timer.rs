mod tests {
    use embassy_time::{Duration, Instant};
    use serpentine_show::timer::{Timer, elapsed_since};

    #[test]
    fn test_timer_due_after_period() {
        let timer = Timer::new(Instant::from_millis(0), Duration::from_millis(100));
        assert!(!timer.due(Instant::from_millis(0)));
        assert!(!timer.due(Instant::from_millis(99)));
        assert!(timer.due(Instant::from_millis(100)));
        assert!(timer.due(Instant::from_millis(500)));
    }

    #[test]
    fn test_timer_fire_resets_origin() {
        let mut timer = Timer::new(Instant::from_millis(0), Duration::from_millis(100));
        assert!(!timer.poll(Instant::from_millis(50)));
        assert!(timer.poll(Instant::from_millis(150)));
        assert_eq!(timer.last_fired(), Instant::from_millis(150));
        assert!(!timer.due(Instant::from_millis(200)));
        assert!(timer.due(Instant::from_millis(250)));
    }

    #[test]
    fn test_timer_rearm_changes_period() {
        let mut timer = Timer::new(Instant::from_millis(0), Duration::from_millis(100));
        timer.rearm(Instant::from_millis(300), Duration::from_millis(50));
        assert_eq!(timer.period(), Duration::from_millis(50));
        assert!(!timer.due(Instant::from_millis(349)));
        assert!(timer.due(Instant::from_millis(350)));
    }

    #[test]
    fn test_elapsed_survives_counter_wrap() {
        let before_wrap = Instant::from_ticks(u64::MAX - 9);
        assert_eq!(
            elapsed_since(Instant::from_ticks(5), before_wrap),
            Duration::from_ticks(15)
        );

        let timer = Timer::new(before_wrap, Duration::from_ticks(10));
        assert!(!timer.due(Instant::from_ticks(u64::MAX)));
        assert!(timer.due(Instant::from_ticks(0)));
    }
}
