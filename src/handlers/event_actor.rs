use std::collections::VecDeque;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, Lines};
use tracing::{debug, info};
use crate::config::CollectorConfig;
use crate::handlers::display::render_log;
use crate::handlers::events::{Command, StateKind};
use crate::handlers::processor::{CoordinateProcessor, UpdateProcessor};
use crate::models::coordinate_log::CoordinateLog;
use crate::models::error::CollectorError;

/// Drives the prompt loop and owns the coordinate log for the whole run.
pub struct CollectorActor<R, W> {
    input: Lines<R>,
    output: W,
    processor: Box<dyn UpdateProcessor + Send>,
    config: CollectorConfig,
    log: CoordinateLog,
    current_state: StateKind,
}

impl<R, W> CollectorActor<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(input: R, output: W, config: CollectorConfig) -> Self {
        Self {
            input: input.lines(),
            output,
            processor: Box::new(CoordinateProcessor::new(&config.sentinel)),
            config,
            log: CoordinateLog::new(),
            current_state: StateKind::AwaitingInput,
        }
    }

    /// Runs until the sentinel or end of input, returning the final log.
    pub async fn run_actor(mut self) -> Result<CoordinateLog, CollectorError> {
        while self.current_state == StateKind::AwaitingInput {
            let prompt = self.config.latitude_prompt.clone();
            let commands = match self.prompt(&prompt).await? {
                Some(latitude) => self.processor.process_latitude(latitude),
                None => {
                    info!("Input closed while awaiting latitude");
                    vec![Command::Transition(StateKind::Terminated)]
                }
            };
            self.execute(commands).await?;
        }

        if self.config.export_json {
            self.export_json().await?;
        }
        Ok(self.log)
    }

    async fn execute(&mut self, commands: Vec<Command>) -> Result<(), CollectorError> {
        let mut queue = VecDeque::from(commands);
        while let Some(command) = queue.pop_front() {
            match command {
                Command::RequestLongitude(latitude) => {
                    let prompt = self.config.longitude_prompt.clone();
                    match self.prompt(&prompt).await? {
                        Some(longitude) => {
                            queue.extend(self.processor.process_pair(latitude, longitude))
                        }
                        None => {
                            info!("Input closed while awaiting longitude, dropping pending pair");
                            self.transition(StateKind::Terminated);
                        }
                    }
                }
                Command::Append(coordinate) => {
                    self.log.push(coordinate);
                    debug!(lat = coordinate.lat, lon = coordinate.lon, entries = self.log.len(), "Appended coordinate");
                }
                Command::PrintLog => {
                    let rendered = render_log(&self.log, self.config.precision, self.config.separator_width);
                    self.write(&rendered).await?;
                }
                Command::InputError(e) => {
                    debug!("Discarding pair: {}", e);
                    let notice = format!("{}\n", self.config.invalid_input_notice);
                    self.write(&notice).await?;
                }
                Command::Transition(tr) => self.transition(tr),
            }
        }
        Ok(())
    }

    fn transition(&mut self, tr: StateKind) {
        info!("Transitioning to {} with {} coordinates", tr, self.log.len());
        self.current_state = tr;
    }

    async fn prompt(&mut self, prompt: &str) -> Result<Option<String>, CollectorError> {
        self.write(prompt).await?;
        Ok(self.input.next_line().await?)
    }

    async fn write(&mut self, text: &str) -> Result<(), CollectorError> {
        self.output.write_all(text.as_bytes()).await?;
        self.output.flush().await?;
        Ok(())
    }

    async fn export_json(&mut self) -> Result<(), CollectorError> {
        let mut json = serde_json::to_string_pretty(&self.log)?;
        json.push('\n');
        self.write(&json).await
    }
}
