use crate::constants::{DEFAULT_QUALITY, MAX_QUALITY, MIN_QUALITY};
use crate::engine::{self, CompressOptions, CompressedImage, SourceImage};
use crate::error::{CompressionError, Result};
use crate::report::SizeReport;

/// Per-session lifecycle. `Loaded` and `Compressed` re-enter `Compressing`
/// on each invocation; loading a new source from any state returns to
/// `Loaded` and clears prior output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Empty,
    Loaded,
    Compressing,
    Compressed,
}

/// Snapshot handed out by [`CompressSession::start_compress`]. Carries
/// everything the pixel work needs so it can run without holding the
/// session, plus the generation it was issued under.
#[derive(Debug, Clone)]
pub struct CompressTicket {
    generation: u64,
    source: SourceImage,
    quality: u8,
}

impl CompressTicket {
    pub fn quality(&self) -> u8 {
        self.quality
    }

    /// The engine call for this ticket. CPU-bound; callers on an async
    /// runtime should run it on the blocking pool.
    pub fn run(&self) -> Result<CompressedImage> {
        engine::compress(&self.source, &CompressOptions { quality: self.quality })
    }
}

/// What happened to a finished compression when handed back to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressOutcome {
    /// Result belongs to the current source and is now held by the session.
    Applied,
    /// A newer source was loaded while the work was in flight; the result
    /// was dropped.
    Discarded,
}

/// The state behind one compression page session: current source, quality
/// setting, latest output, and the in-flight bookkeeping.
///
/// Output from an older source is never observable: `load_source` clears
/// the held output and bumps the generation, so a compression that was
/// already running completes but its result is discarded at apply time.
#[derive(Debug)]
pub struct CompressSession {
    state: SessionState,
    source: Option<SourceImage>,
    quality: u8,
    compressed: Option<CompressedImage>,
    generation: u64,
}

impl Default for CompressSession {
    fn default() -> Self {
        Self::new()
    }
}

impl CompressSession {
    pub fn new() -> Self {
        Self {
            state: SessionState::Empty,
            source: None,
            quality: DEFAULT_QUALITY,
            compressed: None,
            generation: 0,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn quality(&self) -> u8 {
        self.quality
    }

    pub fn source(&self) -> Option<&SourceImage> {
        self.source.as_ref()
    }

    pub fn compressed(&self) -> Option<&CompressedImage> {
        self.compressed.as_ref()
    }

    /// Size comparison for the held output. `Some` only in `Compressed`,
    /// so a report can never describe a source/output mismatch.
    pub fn report(&self) -> Option<SizeReport> {
        match (&self.source, &self.compressed) {
            (Some(source), Some(compressed)) => {
                Some(SizeReport::new(source.byte_len(), compressed.byte_len()))
            }
            _ => None,
        }
    }

    pub fn can_download(&self) -> bool {
        self.state == SessionState::Compressed && self.compressed.is_some()
    }

    /// Replace the session's source. Prior output and report are cleared
    /// in the same step; any compression still in flight is invalidated.
    pub fn load_source(&mut self, source: SourceImage) {
        self.generation += 1;
        self.source = Some(source);
        self.compressed = None;
        self.state = SessionState::Loaded;
    }

    /// Slider semantics: values outside 10-100 are clamped, and the new
    /// value only affects the next invocation.
    pub fn set_quality(&mut self, quality: u8) {
        self.quality = quality.clamp(MIN_QUALITY, MAX_QUALITY);
    }

    /// Begin a compression run. Refused while one is already in flight and
    /// when no source is loaded.
    pub fn start_compress(&mut self) -> Result<CompressTicket> {
        if self.state == SessionState::Compressing {
            return Err(CompressionError::CompressionInFlight);
        }
        let source = self.source.as_ref().ok_or(CompressionError::NoSource)?;

        let ticket = CompressTicket {
            generation: self.generation,
            source: source.clone(),
            quality: self.quality,
        };
        self.state = SessionState::Compressing;
        Ok(ticket)
    }

    /// Hand a finished run back to the session. Results issued under an
    /// older generation are dropped (`Discarded`) whether they succeeded
    /// or not. A failure for the current generation returns the session to
    /// `Loaded` with no output held, and the error is propagated.
    pub fn finish_compress(
        &mut self,
        ticket: CompressTicket,
        result: Result<CompressedImage>,
    ) -> Result<CompressOutcome> {
        if ticket.generation != self.generation {
            return Ok(CompressOutcome::Discarded);
        }

        match result {
            Ok(compressed) => {
                self.compressed = Some(compressed);
                self.state = SessionState::Compressed;
                Ok(CompressOutcome::Applied)
            }
            Err(e) => {
                self.compressed = None;
                self.state = SessionState::Loaded;
                Err(e)
            }
        }
    }

    /// One full invocation: snapshot, run on the blocking pool, apply.
    /// Holding `&mut self` across the await keeps single-owner callers
    /// race-free; shared callers use the ticket protocol directly.
    pub async fn compress(&mut self) -> Result<CompressOutcome> {
        let ticket = self.start_compress()?;
        let worker = ticket.clone();
        let result = tokio::task::spawn_blocking(move || worker.run())
            .await
            .map_err(|e| CompressionError::TaskJoin(e.to_string()))?;
        self.finish_compress(ticket, result)
    }
}
