use crate::Mode;
use crate::engine::{Features, Pipeline, RunMetrics, StageTrace};
use crate::rules::{DEFAULT_TABLES, RuleTables};
use std::time::{Duration, Instant};

/// Options that affect normalization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    pub mode: Mode,
}

impl Options {
    pub fn basic() -> Self {
        Options { mode: Mode::Basic }
    }

    pub fn extended() -> Self {
        Options { mode: Mode::Extended }
    }

    pub fn is_extended(&self) -> bool {
        self.mode == Mode::Extended
    }
}

/// Result from [`normalize_verbose`].
#[derive(Debug, Clone)]
pub struct NormalizeVerbose {
    /// The normalized output, identical to what [`normalize`] returns.
    pub text: String,
    /// Character classes found in the chunk; decides which stages ran.
    pub features: Features,
    /// Text after every stage that ran, in order.
    pub stages: Vec<StageTrace>,
    /// Total elapsed time.
    pub elapsed: Duration,
}

/// Join raw lines into one padded chunk, the unit every stage works on.
pub fn join_chunk<S: AsRef<str>>(lines: &[S]) -> String {
    let mut chunk = String::from(" ");
    for line in lines {
        chunk.push_str(line.as_ref());
        chunk.push(' ');
    }
    chunk
}

/// Normalize `lines` as one chunk using the default German rule tables.
///
/// # Example
/// ```
/// use wortform::{Options, normalize};
///
/// assert_eq!(normalize(&["Der 17. Juni"], &Options::basic()), "der 17. juni");
/// assert_eq!(normalize(&["Der 17. Juni"], &Options::extended()), "der siebzehnte juni");
/// ```
pub fn normalize<S: AsRef<str>>(lines: &[S], options: &Options) -> String {
    normalize_with(lines, options, &DEFAULT_TABLES)
}

/// Normalize `lines` with caller-supplied rule tables.
pub fn normalize_with<S: AsRef<str>>(lines: &[S], options: &Options, tables: &RuleTables) -> String {
    Pipeline::new(tables, options.mode).run(&join_chunk(lines))
}

/// Normalize `lines` and return the text after every stage.
///
/// Useful when a rule misfires: the trace shows which stage introduced the
/// change, with protection markers made visible. The plain [`normalize`] path
/// does not allocate these snapshots.
pub fn normalize_verbose<S: AsRef<str>>(lines: &[S], options: &Options) -> NormalizeVerbose {
    let start = Instant::now();
    let run = Pipeline::new(&DEFAULT_TABLES, options.mode).run_traced(&join_chunk(lines));
    NormalizeVerbose { text: run.output, features: run.features, stages: run.stages, elapsed: start.elapsed() }
}

/// A reusable normalizer that keeps timing totals across chunks.
///
/// Used by the file and URL drivers, which push a corpus through in batches
/// and report where the time went once they are done.
#[derive(Debug)]
pub struct Normalizer<'t> {
    pipeline: Pipeline<'t>,
    metrics: RunMetrics,
    collect: bool,
}

impl Normalizer<'static> {
    pub fn new(options: &Options) -> Self {
        Normalizer::with_tables(options, &DEFAULT_TABLES)
    }
}

impl<'t> Normalizer<'t> {
    pub fn with_tables(options: &Options, tables: &'t RuleTables) -> Self {
        Normalizer { pipeline: Pipeline::new(tables, options.mode), metrics: RunMetrics::default(), collect: false }
    }

    /// Record per-stage timings for every chunk (slower; off by default).
    pub fn collect_metrics(mut self, collect: bool) -> Self {
        self.collect = collect;
        self
    }

    pub fn normalize_chunk<S: AsRef<str>>(&mut self, lines: &[S]) -> String {
        let chunk = join_chunk(lines);
        let start = Instant::now();

        if self.collect {
            let run = self.pipeline.run_traced(&chunk);
            self.metrics.record(run.features, &run.stages, start.elapsed());
            run.output
        } else {
            let output = self.pipeline.run(&chunk);
            self.metrics.total += start.elapsed();
            self.metrics.chunks += 1;
            output
        }
    }

    pub fn metrics(&self) -> &RunMetrics {
        &self.metrics
    }
}
