// Result assembly and output sinks

use std::io::Write;

use passperm_core::{Candidate, SinkError};

use crate::combiner::Tiers;

/// Destination for generated lines.
///
/// The generator never opens, flushes or closes the underlying resource;
/// that stays with whoever owns the sink.
pub trait CandidateSink {
    /// Accept one output line (without a trailing newline).
    fn accept(&mut self, line: &str) -> Result<(), SinkError>;

    /// Accept a full candidate. Defaults to its text; sinks that record
    /// provenance override this.
    fn accept_candidate(&mut self, candidate: &Candidate) -> Result<(), SinkError> {
        self.accept(&candidate.text)
    }
}

impl CandidateSink for Vec<String> {
    fn accept(&mut self, line: &str) -> Result<(), SinkError> {
        self.push(line.to_string());
        Ok(())
    }
}

impl<S: CandidateSink + ?Sized> CandidateSink for &mut S {
    fn accept(&mut self, line: &str) -> Result<(), SinkError> {
        (**self).accept(line)
    }

    fn accept_candidate(&mut self, candidate: &Candidate) -> Result<(), SinkError> {
        (**self).accept_candidate(candidate)
    }
}

/// Writes each line followed by `\n` to an `io::Write`.
#[derive(Debug)]
pub struct LineWriter<W: Write> {
    inner: W,
}

impl<W: Write> LineWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Hand the writer back, e.g. to flush it.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> CandidateSink for LineWriter<W> {
    fn accept(&mut self, line: &str) -> Result<(), SinkError> {
        writeln!(self.inner, "{line}")?;
        Ok(())
    }
}

/// Concatenates tiers into the final output sequence.
///
/// No deduplication happens here: the same text may legitimately arise
/// from different seed combinations.
pub struct ResultAssembler;

impl ResultAssembler {
    /// Texts of every candidate, tier one first.
    pub fn assemble(tiers: &Tiers) -> Vec<String> {
        tiers.iter().map(|c| c.text.clone()).collect()
    }

    /// Feed candidates to a sink in order, returning how many were written.
    pub fn drain<'c, S>(
        candidates: impl IntoIterator<Item = &'c Candidate>,
        sink: &mut S,
    ) -> Result<usize, SinkError>
    where
        S: CandidateSink + ?Sized,
    {
        let mut written = 0;
        for candidate in candidates {
            sink.accept_candidate(candidate)?;
            written += 1;
        }
        Ok(written)
    }

    /// Like [`ResultAssembler::drain`], for owned candidates from a stream.
    pub fn drain_owned<S>(
        candidates: impl IntoIterator<Item = Candidate>,
        sink: &mut S,
    ) -> Result<usize, SinkError>
    where
        S: CandidateSink + ?Sized,
    {
        let mut written = 0;
        for candidate in candidates {
            sink.accept_candidate(&candidate)?;
            written += 1;
        }
        Ok(written)
    }
}
