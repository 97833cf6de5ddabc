mod tests {
    use myrtio_strip_animator::animation::{
        Animation, AnimationSettings, RAINBOW_CYCLE, RainbowAnimation, RainbowLayout,
        StripIdAnimation, WhiteAnimation,
    };
    use myrtio_strip_animator::color::{BLACK, Rgb, WHITE};
    use myrtio_strip_animator::{AnimationId, AnimationRegistry, Duration, Instant, RenderError};
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    const CHARTREUSE: Rgb = Rgb { r: 127, g: 255, b: 0 };
    const CYAN: Rgb = Rgb { r: 0, g: 255, b: 255 };
    const VIOLET: Rgb = Rgb { r: 127, g: 0, b: 255 };

    fn render<A: Animation>(animation: &mut A, settings: AnimationSettings, ms: u64) -> [Rgb; 24] {
        let mut leds = [BLACK; 24];
        let mut rng = SmallRng::seed_from_u64(7);
        animation.reset(settings);
        animation.render(Instant::from_millis(ms), &mut leds, &mut rng);
        leds
    }

    #[test]
    fn test_white_fills_led_count_only() {
        let leds = render(&mut WhiteAnimation::new(), AnimationSettings::new(3, 0), 0);
        assert_eq!(leds[..3], [WHITE; 3]);
        assert!(leds[3..].iter().all(|led| *led == BLACK));
    }

    #[test]
    fn test_white_ignores_time() {
        let mut white = WhiteAnimation::new();
        let settings = AnimationSettings::new(10, 2);
        assert_eq!(render(&mut white, settings, 0), render(&mut white, settings, 123_456));
    }

    #[test]
    fn test_strip_id_marker() {
        let mut marker = StripIdAnimation::new();

        let leds = render(&mut marker, AnimationSettings::new(10, 0), 0);
        assert_eq!(leds[..5], [WHITE; 5]);
        assert_eq!(leds[5..10], [BLACK; 5]);

        let leds = render(&mut marker, AnimationSettings::new(20, 1), 0);
        assert_eq!(leds[..15], [WHITE; 15]);
        assert_eq!(leds[15..20], [BLACK; 5]);
        assert_eq!(marker.marker_len(), 15);
    }

    #[test]
    fn test_strip_id_marker_clears_previous_frame() {
        let mut marker = StripIdAnimation::new();
        let mut leds = [WHITE; 8];
        let mut rng = SmallRng::seed_from_u64(1);
        marker.reset(AnimationSettings::new(8, 0));
        marker.render(Instant::from_millis(0), &mut leds, &mut rng);
        assert_eq!(leds[5..], [BLACK; 3]);
    }

    #[test]
    fn test_strip_id_marker_ignores_time() {
        let mut marker = StripIdAnimation::new();
        let settings = AnimationSettings::new(24, 1);
        assert_eq!(render(&mut marker, settings, 0), render(&mut marker, settings, 4_999));
    }

    #[test]
    fn test_rainbow_spreads_one_turn() {
        let mut rainbow = RainbowAnimation::new(RainbowLayout::Linear);
        let leds = render(&mut rainbow, AnimationSettings::new(4, 0), 0);
        assert_eq!(leds[..4], [RED, CHARTREUSE, CYAN, VIOLET]);
    }

    #[test]
    fn test_rainbow_rotates_over_cycle() {
        let mut rainbow = RainbowAnimation::new(RainbowLayout::Linear);
        let settings = AnimationSettings::new(4, 0);

        let half = render(&mut rainbow, settings, RAINBOW_CYCLE.as_millis() / 2);
        assert_eq!(half[..4], [CYAN, VIOLET, RED, CHARTREUSE]);

        let start = render(&mut rainbow, settings, 0);
        let wrapped = render(&mut rainbow, settings, RAINBOW_CYCLE.as_millis());
        assert_eq!(start, wrapped);
    }

    #[test]
    fn test_circle_rainbow_quadrants() {
        let mut circle = RainbowAnimation::new(RainbowLayout::Circle);

        let strip0 = render(&mut circle, AnimationSettings::new(16, 0), 0);
        let strip1 = render(&mut circle, AnimationSettings::new(16, 1), 0);
        let strip2 = render(&mut circle, AnimationSettings::new(16, 2), 0);
        let strip3 = render(&mut circle, AnimationSettings::new(16, 3), 0);
        let strip4 = render(&mut circle, AnimationSettings::new(16, 4), 0);

        // Each strip covers a quarter turn, so halfway along strip 0 is 45 degrees
        assert_eq!(strip0[0], RED);
        assert_eq!(strip0[8], Rgb::new(255, 191, 0));

        assert_eq!(strip1[0], CHARTREUSE);
        assert_eq!(strip2[0], CYAN);
        assert_eq!(strip3[0], VIOLET);
        assert_eq!(strip4, strip0);
    }

    #[test]
    fn test_rainbow_builder() {
        let mut rainbow = RainbowAnimation::new(RainbowLayout::Linear)
            .with_cycle_duration(Duration::from_millis(1_000))
            .with_value(0);
        let leds = render(&mut rainbow, AnimationSettings::new(24, 0), 250);
        assert!(leds.iter().all(|led| *led == BLACK));

        let mut rainbow =
            RainbowAnimation::new(RainbowLayout::Linear).with_cycle_duration(Duration::from_millis(1_000));
        let quarter = render(&mut rainbow, AnimationSettings::new(4, 0), 250);
        assert_eq!(quarter[0], CHARTREUSE);
        assert_eq!(rainbow.layout(), RainbowLayout::Linear);
    }

    #[test]
    fn test_zero_leds_render_nothing() {
        let mut registry = AnimationRegistry::new();
        let mut rng = SmallRng::seed_from_u64(3);
        for id in AnimationId::ALL {
            let slot = registry.get_mut(id);
            let mut leds: [Rgb; 0] = [];
            slot.reset(AnimationSettings::new(0, 1));
            slot.render(Instant::from_millis(10), &mut leds, &mut rng);
        }
    }

    #[test]
    fn test_registry_lookup() {
        let mut registry = AnimationRegistry::new();
        assert_eq!(registry.count(), AnimationId::ALL.len());
        for id in AnimationId::ALL {
            assert_eq!(registry.get_animation(id.raw()).map(|slot| slot.id()), Ok(id));
        }
        let out_of_range = u8::try_from(registry.count()).unwrap();
        assert_eq!(
            registry.get_animation(out_of_range).map(|slot| slot.id()),
            Err(RenderError::InvalidAnimationId(out_of_range))
        );
    }
}
