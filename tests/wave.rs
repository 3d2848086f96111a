mod tests {
    use segment_clock_composer::{
        ScrollPhase,
        color::{ColorWave, DefaultColorWave, Rgb, WaveConfig, wave_channel},
        phase::PHASE_STEP,
    };

    #[test]
    fn test_first_sample() {
        let wave = DefaultColorWave::default();
        // blue starts below zero and wraps into the upper byte range
        assert_eq!(
            wave.sample(0),
            Rgb {
                r: 64,
                g: 173,
                b: 211
            }
        );
    }

    #[test]
    fn test_channel_truncates_toward_zero() {
        // sin(pi/2) * 127 + 64 = 191
        assert_eq!(wave_channel(core::f64::consts::FRAC_PI_2, 1, 0.0), 191);
        // sin(-pi/2) * 127 + 64 = -63 -> 0xC1
        assert_eq!(wave_channel(core::f64::consts::FRAC_PI_2, 3, 0.0), 193);
    }

    #[test]
    fn test_index_wraps() {
        let wave = DefaultColorWave::default();
        assert_eq!(wave.len(), 100);
        assert_eq!(wave.sample(100), wave.sample(0));
        assert_eq!(wave.sample(257), wave.sample(57));
    }

    #[test]
    fn test_deterministic() {
        let config = WaveConfig { frequency: 0.3 };
        let a = ColorWave::<16>::build(&config);
        let b = ColorWave::<16>::build(&config);
        assert_eq!(a.samples(), b.samples());
        assert_ne!(a.samples(), &DefaultColorWave::default().samples()[..16]);
    }

    #[test]
    fn test_phase_wraps_at_length() {
        let mut phase = ScrollPhase::new(100);
        let mut wrapped = false;
        for _ in 0..5_000 {
            let next = phase.advanced();
            assert!(next.value() < 100.0);
            assert!(next.value() >= 0.0);
            if next.value() < phase.value() {
                assert_eq!(next.value(), 0.0);
                wrapped = true;
            }
            phase = next;
        }
        assert!(wrapped);
    }

    #[test]
    fn test_phase_steps() {
        let phase = ScrollPhase::new(3);
        assert_eq!(phase.advanced().value(), PHASE_STEP);

        let phase = phase.advanced_by(1.0).advanced_by(1.0);
        assert_eq!(phase.value(), 2.0);
        assert_eq!(phase.advanced_by(1.0).value(), 0.0);
    }

    #[test]
    fn test_wave_index() {
        let phase = ScrollPhase::new(100).advanced_by(2.7);
        assert_eq!(phase.wave_index(0, 0), 2);
        assert_eq!(phase.wave_index(3, 6), 11);
    }
}
