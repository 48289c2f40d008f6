//! Line-by-line ranting over async input and output streams.
//!
//! In plain mode every input line becomes one rant line. In JSON mode every
//! line is a [`RantRequest`] and is answered with a [`RantResponse`].

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::sync::broadcast;
use tracing::{debug, info, warn};

use crate::announce::announce;
use crate::error::{RantError, Result};
use crate::random::SharedRandom;
use crate::ranter::Ranter;
use crate::wire::{RantRequest, RantResponse};

/// How input lines are interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StreamMode {
    /// Each line is raw text
    #[default]
    Plain,
    /// Each line is a JSON request
    Json,
}

/// Result of pumping a stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamResult {
    /// Input was exhausted
    Finished {
        /// Lines turned into rants
        ranted: usize,
        /// JSON lines that could not be decoded
        rejected: usize,
    },
    /// Shutdown was requested before the input ended
    Shutdown {
        /// Lines turned into rants before shutdown
        ranted: usize,
    },
}

/// Reads lines, rants them, writes the results
pub struct RantStream {
    ranter: Ranter,
    mode: StreamMode,
    announce_as: Option<String>,
    ranted: usize,
    rejected: usize,
}

impl RantStream {
    pub fn new(ranter: Ranter, mode: StreamMode) -> Self {
        Self {
            ranter,
            mode,
            announce_as: None,
            ranted: 0,
            rejected: 0,
        }
    }

    /// Attribute every rant to `user`
    pub fn with_announcer(mut self, user: Option<String>) -> Self {
        self.announce_as = user;
        self
    }

    /// Rant a single piece of text, applying the announcer if set
    pub fn rant_text(&self, text: &str) -> String {
        let rant = self.ranter.rant(text);
        match &self.announce_as {
            Some(user) => announce(user, &rant, SharedRandom),
            None => rant,
        }
    }

    /// Pump `reader` into `writer` until the input ends or shutdown fires
    pub async fn run<R, W>(
        &mut self,
        reader: R,
        writer: &mut W,
        mut shutdown_rx: broadcast::Receiver<()>,
    ) -> Result<StreamResult>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        info!("Reading {:?} lines", self.mode);
        let mut lines = reader.lines();

        loop {
            tokio::select! {
                biased;

                Ok(()) = shutdown_rx.recv() => {
                    warn!("Shutdown signal received");
                    writer.flush().await.map_err(RantError::OutputError)?;
                    return Ok(StreamResult::Shutdown { ranted: self.ranted });
                }
                line = lines.next_line() => {
                    match line.map_err(RantError::InputError)? {
                        Some(line) => self.process_line(&line, writer).await?,
                        None => {
                            debug!("input stream closed");
                            break;
                        }
                    }
                }
            }
        }

        writer.flush().await.map_err(RantError::OutputError)?;
        info!(
            "Input finished: {} ranted, {} rejected",
            self.ranted, self.rejected
        );
        Ok(StreamResult::Finished {
            ranted: self.ranted,
            rejected: self.rejected,
        })
    }

    async fn process_line<W>(&mut self, line: &str, writer: &mut W) -> Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        let line = line.trim_end_matches('\r');

        let out = match self.mode {
            StreamMode::Plain => self.rant_text(line),
            StreamMode::Json => {
                if line.trim().is_empty() {
                    return Ok(());
                }
                let request = match RantRequest::parse(line) {
                    Ok(r) => r,
                    Err(e) => {
                        warn!("Skipping line: {}", e);
                        self.rejected += 1;
                        return Ok(());
                    }
                };
                RantResponse::new(self.rant_text(&request.t)).to_line()?
            }
        };

        writer
            .write_all(out.as_bytes())
            .await
            .map_err(RantError::OutputError)?;
        writer
            .write_all(b"\n")
            .await
            .map_err(RantError::OutputError)?;
        self.ranted += 1;
        Ok(())
    }
}
