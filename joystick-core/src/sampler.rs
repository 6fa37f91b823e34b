//! Sampler: reads the joystick panel and writes one record line per period.

use crate::config::NodeConfig;
use crate::input::{InputError, InputSource};
use crate::output::{LineSink, OutputError};
use embedded_hal_async::delay::DelayNs;
use joystick_proto::{SampleRecord, Serialize, SerializeError, MAX_LINE_SIZE};

/// The periodic sampling loop.
///
/// Each iteration is independent: read all inputs, scale, serialize, write
/// one line, then pause for [`NodeConfig::sample_period_ms`]. The pause is
/// taken whether or not the iteration succeeded, so the cadence does not
/// depend on input values or faults.
pub struct Sampler<I, O, D> {
    input: I,
    output: O,
    delay: D,
    config: NodeConfig,
}

impl<I: InputSource, O: LineSink, D: DelayNs> Sampler<I, O, D> {
    /// Create a sampler from the panel, the console and a delay provider.
    pub fn new(input: I, output: O, delay: D, config: NodeConfig) -> Self {
        Self {
            input,
            output,
            delay,
            config,
        }
    }

    /// Sample and emit forever.
    ///
    /// This method never returns under normal operation.
    pub async fn run(&mut self) -> ! {
        loop {
            let _ = self.process_one().await;
        }
    }

    /// One full iteration, including the trailing pause.
    ///
    /// Returns the emitted record for testing purposes.
    pub async fn process_one(&mut self) -> Result<SampleRecord, SampleError> {
        let result = self.emit().await;
        self.delay.delay_ms(self.config.sample_period_ms).await;
        result
    }

    async fn emit(&mut self) -> Result<SampleRecord, SampleError> {
        let raw = self.input.sample().await?;
        let record = raw.scale(&self.config.scale);

        let mut buf = [0u8; MAX_LINE_SIZE];
        let len = record.serialize_line(&mut buf)?;
        self.output.write(&buf[..len]).await?;

        Ok(record)
    }

    /// Get a reference to the active configuration.
    pub fn config(&self) -> &NodeConfig {
        &self.config
    }
}

/// Error type for a single sampling iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SampleError {
    /// Reading the panel failed; nothing was written.
    Input(InputError),
    /// The record did not fit the line buffer.
    Serialize(SerializeError),
    /// Writing the line to the console failed.
    Output(OutputError),
}

impl From<InputError> for SampleError {
    fn from(err: InputError) -> Self {
        SampleError::Input(err)
    }
}

impl From<SerializeError> for SampleError {
    fn from(err: SerializeError) -> Self {
        SampleError::Serialize(err)
    }
}

impl From<OutputError> for SampleError {
    fn from(err: OutputError) -> Self {
        SampleError::Output(err)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::input::{RawJoystick, RawSample};
    use crate::testing::{block_on, MockDelay, MockSink};
    use core::future::Future;
    use joystick_proto::{parse, JoystickReading, Key};
    use std::vec;
    use std::vec::Vec;

    // Replays a fixed list of reads, then reports I/O errors
    struct MockPanel {
        reads: Vec<Result<RawSample, InputError>>,
        index: usize,
    }

    impl MockPanel {
        fn new(reads: Vec<Result<RawSample, InputError>>) -> Self {
            Self { reads, index: 0 }
        }
    }

    impl InputSource for MockPanel {
        fn sample(&mut self) -> impl Future<Output = Result<RawSample, InputError>> {
            let result = self.reads.get(self.index).copied().unwrap_or(Err(InputError::Io));
            self.index += 1;
            core::future::ready(result)
        }
    }

    fn scenario_sample() -> RawSample {
        RawSample::new(
            RawJoystick::new(true, 2068, 2028),
            RawJoystick::new(false, 2048, 4095),
        )
    }

    #[test]
    fn test_emits_exact_line() {
        let sink = MockSink::new();
        let lines = sink.handle();
        let mut sampler = Sampler::new(
            MockPanel::new(vec![Ok(scenario_sample())]),
            sink,
            MockDelay::new(),
            NodeConfig::DEFAULT,
        );

        let record = block_on(sampler.process_one()).unwrap();

        assert_eq!(record.joystick1, JoystickReading::new(true, 1, -1));
        assert_eq!(record.joystick2, JoystickReading::new(false, 0, 102));
        assert_eq!(
            lines.raw(),
            b"{\"S1\":1,\"H1\":1,\"V1\":-1,\"S2\":0,\"H2\":0,\"V2\":102}\r\n"
        );
    }

    #[test]
    fn test_one_line_per_iteration_with_fixed_keys() {
        let reads = vec![
            Ok(RawSample::new(RawJoystick::new(false, 0, 0), RawJoystick::new(true, 4095, 4095))),
            Ok(scenario_sample()),
            Ok(RawSample::default()),
        ];
        let sink = MockSink::new();
        let lines = sink.handle();
        let mut sampler = Sampler::new(MockPanel::new(reads), sink, MockDelay::new(), NodeConfig::DEFAULT);

        for _ in 0..3 {
            block_on(sampler.process_one()).unwrap();
        }

        let lines = lines.lines();
        assert_eq!(lines.len(), 3);
        for line in &lines {
            let keys: Vec<&str> = line
                .split(|c: char| c == '{' || c == ',' || c == '}')
                .filter(|field| !field.is_empty())
                .map(|field| field.split(':').next().unwrap().trim_matches('"'))
                .collect();
            assert_eq!(keys, Key::ALL.map(Key::as_str));
            assert!(parse(line.as_bytes()).is_ok());
        }
        assert_eq!(lines[0], r#"{"S1":0,"H1":-102,"V1":-102,"S2":1,"H2":102,"V2":102}"#);
    }

    #[test]
    fn test_fixed_cadence_regardless_of_outcome() {
        let reads = vec![
            Ok(scenario_sample()),
            Err(InputError::Conversion),
            Ok(RawSample::default()),
        ];
        let delay = MockDelay::new();
        let mut sampler = Sampler::new(MockPanel::new(reads), MockSink::new(), delay.clone(), NodeConfig::DEFAULT);

        assert!(block_on(sampler.process_one()).is_ok());
        assert_eq!(
            block_on(sampler.process_one()),
            Err(SampleError::Input(InputError::Conversion))
        );
        assert!(block_on(sampler.process_one()).is_ok());

        assert_eq!(delay.calls(), [100, 100, 100]);
    }

    #[test]
    fn test_input_error_writes_nothing() {
        let sink = MockSink::new();
        let lines = sink.handle();
        let mut sampler = Sampler::new(
            MockPanel::new(vec![Err(InputError::Conversion)]),
            sink,
            MockDelay::new(),
            NodeConfig::DEFAULT,
        );

        assert!(block_on(sampler.process_one()).is_err());
        assert!(lines.raw().is_empty());
    }

    #[test]
    fn test_output_error_does_not_stop_sampling() {
        let delay = MockDelay::new();
        let mut sampler = Sampler::new(
            MockPanel::new(vec![Ok(scenario_sample()), Ok(scenario_sample())]),
            MockSink::failing(),
            delay.clone(),
            NodeConfig::DEFAULT,
        );

        assert_eq!(
            block_on(sampler.process_one()),
            Err(SampleError::Output(OutputError::Io))
        );
        assert_eq!(
            block_on(sampler.process_one()),
            Err(SampleError::Output(OutputError::Io))
        );
        assert_eq!(delay.calls(), [100, 100]);
    }

    #[test]
    fn test_custom_period() {
        let delay = MockDelay::new();
        let config = NodeConfig {
            sample_period_ms: 250,
            ..NodeConfig::DEFAULT
        };
        let mut sampler = Sampler::new(
            MockPanel::new(vec![Ok(RawSample::default())]),
            MockSink::new(),
            delay.clone(),
            config,
        );

        let _ = block_on(sampler.process_one());
        assert_eq!(delay.calls(), [250]);
        assert_eq!(sampler.config().sample_period_ms, 250);
    }
}
