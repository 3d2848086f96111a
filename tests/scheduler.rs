mod tests {
    use embedded_hal::spi::{ErrorKind, ErrorType, Operation, SpiDevice};
    use segment_clock_composer::{
        BusConfig, ClockSource, DisplayIntent, Error, Face, FrameAssembler, FrameScheduler,
        FrameSink, IntentChannel, Result, SchedulerConfig, ScrollPhase, SpiDeviceSink,
        TICK_INTERVAL, Text, TimeOfDay, blank_frame, color::DefaultColorWave,
    };

    const WAVE_LEN: usize = 100;

    #[derive(Default)]
    struct RecordingSink {
        frames: Vec<Vec<u8>>,
        fail: bool,
    }

    impl FrameSink for RecordingSink {
        fn transmit(&mut self, frame: &[u8]) -> Result<()> {
            if self.fail {
                return Err(Error::TransmissionFault(ErrorKind::Other));
            }
            self.frames.push(frame.to_vec());
            Ok(())
        }
    }

    struct FixedClock(Option<TimeOfDay>);

    impl ClockSource for FixedClock {
        fn now(&mut self) -> Result<TimeOfDay> {
            self.0.ok_or(Error::ClockUnavailable)
        }
    }

    fn morning() -> TimeOfDay {
        TimeOfDay::new(9, 5, 23, 0).unwrap()
    }

    type Scheduler<'a> = FrameScheduler<'a, RecordingSink, FixedClock, WAVE_LEN, 4>;

    fn scheduler<'a>(channel: &'a IntentChannel<4>, clock: FixedClock) -> Scheduler<'a> {
        FrameScheduler::new(
            RecordingSink::default(),
            clock,
            channel.receiver(),
            &SchedulerConfig::default(),
        )
    }

    #[test]
    fn test_tick_sends_time_frame() {
        let channel = IntentChannel::new();
        let mut scheduler = scheduler(&channel, FixedClock(Some(morning())));

        let result = scheduler.tick().unwrap();
        assert!(!result.stopped);
        assert_eq!(result.sleep_duration, TICK_INTERVAL);

        let expected = FrameAssembler::default()
            .assemble(morning(), ScrollPhase::new(WAVE_LEN), &DefaultColorWave::default())
            .unwrap();
        assert_eq!(scheduler.sink().frames, vec![expected.to_vec()]);
        assert_eq!(scheduler.phase(), ScrollPhase::new(WAVE_LEN).advanced());
    }

    #[test]
    fn test_frames_follow_the_phase() {
        let channel = IntentChannel::new();
        let mut scheduler = scheduler(&channel, FixedClock(Some(morning())));
        let wave = DefaultColorWave::default();
        let assembler = FrameAssembler::default();

        let mut phase = ScrollPhase::new(WAVE_LEN);
        for _ in 0..25 {
            scheduler.tick().unwrap();
            let expected = assembler.assemble(morning(), phase, &wave).unwrap();
            assert_eq!(scheduler.sink().frames.last().unwrap(), &expected.to_vec());
            phase = phase.advanced();
        }
        assert_eq!(scheduler.sink().frames.len(), 25);
    }

    #[test]
    fn test_transmission_fault_keeps_phase() {
        let channel = IntentChannel::new();
        let mut scheduler = scheduler(&channel, FixedClock(Some(morning())));
        scheduler.sink_mut().fail = true;

        assert_eq!(
            scheduler.tick().unwrap_err(),
            Error::TransmissionFault(ErrorKind::Other)
        );
        assert_eq!(scheduler.phase(), ScrollPhase::new(WAVE_LEN));

        // the next tick recovers
        scheduler.sink_mut().fail = false;
        scheduler.tick().unwrap();
        assert_eq!(scheduler.sink().frames.len(), 1);
    }

    #[test]
    fn test_clock_unavailable() {
        let channel = IntentChannel::new();
        let mut scheduler = scheduler(&channel, FixedClock(None));

        assert_eq!(scheduler.tick().unwrap_err(), Error::ClockUnavailable);
        assert!(scheduler.sink().frames.is_empty());
    }

    #[test]
    fn test_stop_blanks_display() {
        let channel = IntentChannel::new();
        let mut scheduler = scheduler(&channel, FixedClock(Some(morning())));
        scheduler.tick().unwrap();

        channel.sender().try_send(DisplayIntent::Stop).unwrap();
        let result = scheduler.tick().unwrap();
        assert!(result.stopped);

        let frames = &scheduler.sink().frames;
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[1], blank_frame(Default::default()).to_vec());
    }

    #[test]
    fn test_text_intent() {
        let channel = IntentChannel::new();
        let mut scheduler = scheduler(&channel, FixedClock(Some(morning())));

        channel
            .sender()
            .try_send(DisplayIntent::text("hello").unwrap())
            .unwrap();
        scheduler.tick().unwrap();

        let expected = FrameAssembler::default()
            .assemble_text(
                "hello",
                morning(),
                ScrollPhase::new(WAVE_LEN),
                &DefaultColorWave::default(),
            )
            .unwrap();
        assert_eq!(scheduler.sink().frames, vec![expected.to_vec()]);

        channel.sender().try_send(DisplayIntent::ShowTime).unwrap();
        scheduler.tick().unwrap();
        assert_eq!(scheduler.face(), &Face::Time);
    }

    #[test]
    fn test_unsupported_text_is_rejected() {
        assert_eq!(DisplayIntent::text("ok"), Err(Error::UnknownGlyph('k')));

        let channel = IntentChannel::new();
        let mut scheduler = scheduler(&channel, FixedClock(Some(morning())));
        let mut text = Text::new();
        text.push_str("kw").unwrap();
        channel
            .sender()
            .try_send(DisplayIntent::ShowText(text))
            .unwrap();

        scheduler.tick().unwrap();
        assert_eq!(scheduler.face(), &Face::Time);
        assert_eq!(scheduler.sink().frames.len(), 1);
    }

    #[test]
    fn test_text_intent_is_cut() {
        let DisplayIntent::ShowText(text) = DisplayIntent::text("hello there").unwrap() else {
            panic!("expected a text intent");
        };
        assert_eq!(text.as_str(), "hello th");
    }

    #[test]
    fn test_blank_intent() {
        let channel = IntentChannel::new();
        let mut scheduler = scheduler(&channel, FixedClock(None));
        channel.sender().try_send(DisplayIntent::Blank).unwrap();

        // a blank face does not need the clock
        let result = scheduler.tick().unwrap();
        assert!(!result.stopped);
        assert_eq!(scheduler.face(), &Face::Blank);
        assert_eq!(scheduler.sink().frames[0], blank_frame(Default::default()).to_vec());
    }

    #[test]
    fn test_channel_is_bounded() {
        let channel = IntentChannel::<2>::new();
        let sender = channel.sender();
        sender.try_send(DisplayIntent::ShowTime).unwrap();
        sender.try_send(DisplayIntent::Blank).unwrap();
        assert!(sender.try_send(DisplayIntent::Stop).is_err());

        let receiver = channel.receiver();
        assert_eq!(receiver.len(), 2);
        assert_eq!(receiver.try_receive(), Some(DisplayIntent::ShowTime));
        assert_eq!(receiver.try_receive(), Some(DisplayIntent::Blank));
        assert!(receiver.is_empty());
    }

    #[derive(Default)]
    struct MockSpi {
        writes: Vec<Vec<u8>>,
        delays: Vec<u32>,
        fail: bool,
    }

    impl ErrorType for MockSpi {
        type Error = ErrorKind;
    }

    impl SpiDevice for MockSpi {
        fn transaction(
            &mut self,
            operations: &mut [Operation<'_, u8>],
        ) -> core::result::Result<(), Self::Error> {
            if self.fail {
                return Err(ErrorKind::ModeFault);
            }
            for operation in operations {
                match operation {
                    Operation::Write(bytes) => self.writes.push(bytes.to_vec()),
                    Operation::DelayNs(ns) => self.delays.push(*ns),
                    _ => {}
                }
            }
            Ok(())
        }
    }

    #[test]
    fn test_spi_sink_holds_chip_select() {
        let mut sink = SpiDeviceSink::new(MockSpi::default(), &BusConfig::default());
        sink.transmit(&[1, 2, 3]).unwrap();

        let device = sink.into_inner();
        assert_eq!(device.writes, vec![vec![1, 2, 3]]);
        assert_eq!(device.delays, vec![500_000]);
    }

    #[test]
    fn test_spi_sink_maps_errors() {
        let device = MockSpi {
            fail: true,
            ..MockSpi::default()
        };
        let mut sink = SpiDeviceSink::new(device, &BusConfig::default());
        assert_eq!(
            sink.transmit(&[0; 3]),
            Err(Error::TransmissionFault(ErrorKind::ModeFault))
        );
    }

    #[test]
    fn test_bus_config() {
        let config = BusConfig::default();
        assert_eq!(config.clock_speed_hz, 1_000_000);
        assert_eq!(config.bits_per_word, 8);
        assert!(!config.lsb_first);
        assert_eq!(config.mode, embedded_hal::spi::MODE_0);
        assert_eq!(config.chip_select_delay.as_micros(), 500);
    }
}
