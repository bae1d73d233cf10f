//! Pipeline run metrics.
//!
//! Small structs used to observe where time goes when normalizing a corpus.
//!
//! - [`Pipeline::run`](super::Pipeline::run) records nothing.
//! - [`Pipeline::run_traced`](super::Pipeline::run_traced) keeps one
//!   [`StageTrace`] per stage, including the text after the stage.
//! - [`RunMetrics`] aggregates durations over many chunks and is what
//!   [`Normalizer`](crate::Normalizer) reports.

use std::time::Duration;

use super::trigger::Features;

// --- Metrics -----------------------------------------------------------------

/// Output and timing of one stage for one chunk.
#[derive(Debug, Clone)]
pub struct StageTrace {
    pub stage: &'static str,
    pub duration: Duration,
    /// Text (or joined tokens) after the stage, markers made visible.
    pub output: String,
}

/// Cumulative timing for one stage over a run.
#[derive(Debug, Default, Clone)]
pub struct StageMetrics {
    pub stage: &'static str,
    pub duration: Duration,
    /// How many chunks ran the stage (skipped stages do not count).
    pub runs: usize,
}

/// Aggregated timings over every chunk processed by one normalizer.
#[derive(Debug, Default, Clone)]
pub struct RunMetrics {
    /// Total elapsed time spent inside the pipeline.
    pub total: Duration,
    /// Number of chunks processed.
    pub chunks: usize,
    /// Per-stage totals, in first-seen order.
    pub stages: Vec<StageMetrics>,
    /// Chunks in which each feature bit was present.
    pub feature_hits: Vec<(Features, usize)>,
}

impl RunMetrics {
    /// Fold one chunk's traces into the totals.
    pub fn record(&mut self, features: Features, traces: &[StageTrace], elapsed: Duration) {
        self.total += elapsed;
        self.chunks += 1;

        for trace in traces {
            match self.stages.iter_mut().find(|s| s.stage == trace.stage) {
                Some(stage) => {
                    stage.duration += trace.duration;
                    stage.runs += 1;
                }
                None => self.stages.push(StageMetrics { stage: trace.stage, duration: trace.duration, runs: 1 }),
            }
        }

        for flag in features.iter() {
            match self.feature_hits.iter_mut().find(|(f, _)| *f == flag) {
                Some((_, count)) => *count += 1,
                None => self.feature_hits.push((flag, 1)),
            }
        }
    }

    /// The stage with the largest cumulative duration.
    pub fn slowest_stage(&self) -> Option<&StageMetrics> {
        self.stages.iter().max_by_key(|s| s.duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trace(stage: &'static str, micros: u64) -> StageTrace {
        StageTrace { stage, duration: Duration::from_micros(micros), output: String::new() }
    }

    #[test]
    fn record_accumulates_per_stage() {
        let mut metrics = RunMetrics::default();
        metrics.record(Features::DIGITS, &[trace("fold", 5), trace("numerals", 20)], Duration::from_micros(30));
        metrics.record(Features::DIGITS | Features::DASH, &[trace("fold", 7)], Duration::from_micros(10));

        assert_eq!(metrics.chunks, 2);
        assert_eq!(metrics.total, Duration::from_micros(40));
        assert_eq!(metrics.stages.len(), 2);
        assert_eq!(metrics.stages[0].runs, 2);
        assert_eq!(metrics.stages[0].duration, Duration::from_micros(12));
        assert_eq!(metrics.slowest_stage().map(|s| s.stage), Some("numerals"));
        assert_eq!(metrics.feature_hits, vec![(Features::DIGITS, 2), (Features::DASH, 1)]);
    }
}
