//! Stage orchestration.
//!
//! A [`Pipeline`] runs the fixed stage order over one chunk. The order is
//! load-bearing: protection must precede stripping, abbreviations must be seen
//! before periods are stripped, and dates must be split before numerals are
//! spelled out.

use std::time::Instant;

use log::{debug, trace};

use super::metrics::StageTrace;
use super::tokens::{self, Token};
use super::trigger::Features;
use super::{abbreviations, clock, codec, dashes, dates, lexical, numerals, symbols, years};
use crate::Mode;
use crate::rules::RuleTables;

/// Stage outputs that can be shown in a trace.
trait Snapshot {
    fn snapshot(&self) -> String;
}

impl Snapshot for String {
    fn snapshot(&self) -> String {
        codec::reveal(self)
    }
}

impl Snapshot for Vec<Token> {
    fn snapshot(&self) -> String {
        codec::reveal(&tokens::join(self))
    }
}

/// Collects per-stage traces when asked to; otherwise only logs.
struct Recorder {
    traces: Option<Vec<StageTrace>>,
}

impl Recorder {
    fn step<T: Snapshot>(&mut self, stage: &'static str, run: impl FnOnce() -> T) -> T {
        let start = Instant::now();
        let out = run();
        let duration = start.elapsed();

        if log::log_enabled!(log::Level::Trace) {
            trace!("stage {stage:<18} {:>8.1?} | {}", duration, out.snapshot());
        }
        if let Some(traces) = self.traces.as_mut() {
            traces.push(StageTrace { stage, duration, output: out.snapshot() });
        }
        out
    }
}

/// Result of [`Pipeline::run_traced`].
#[derive(Debug, Clone)]
pub struct PipelineRun {
    pub output: String,
    pub features: Features,
    pub stages: Vec<StageTrace>,
}

#[derive(Debug, Clone, Copy)]
pub struct Pipeline<'t> {
    tables: &'t RuleTables,
    mode: Mode,
}

impl<'t> Pipeline<'t> {
    pub fn new(tables: &'t RuleTables, mode: Mode) -> Self {
        Pipeline { tables, mode }
    }

    /// Normalize one padded chunk.
    pub fn run(&self, chunk: &str) -> String {
        self.execute(chunk, &mut Recorder { traces: None }).0
    }

    /// Normalize one padded chunk and keep the text after every stage.
    pub fn run_traced(&self, chunk: &str) -> PipelineRun {
        let mut recorder = Recorder { traces: Some(Vec::new()) };
        let (output, features) = self.execute(chunk, &mut recorder);
        PipelineRun { output, features, stages: recorder.traces.unwrap_or_default() }
    }

    fn execute(&self, chunk: &str, rec: &mut Recorder) -> (String, Features) {
        let mode = self.mode;
        let tables = self.tables;

        let mut text = rec.step("fold", || lexical::fold(chunk));
        let features = Features::scan(&text);
        debug!("chunk of {} chars, features {:?}, mode {:?}", text.len(), features, mode);

        if features.contains(Features::DIGITS) {
            text = rec.step("protect_numeric", || codec::protect_numeric(&text, mode));
        }
        text = rec.step("strip_typographic", || lexical::strip_typographic(&text));
        if features.intersects(Features::PERIOD | Features::SLASH) {
            text = rec.step("abbreviations", || abbreviations::resolve(&text, tables, mode));
        }
        if features.contains(Features::DASH) {
            text = rec.step("dashes", || dashes::disambiguate(&text));
        }
        if features.contains(Features::PERIOD) {
            text = rec.step("initials", || codec::protect_initials(&text));
            text = rec.step("umlaut_initials", || codec::protect_umlaut_initials(&text));
        }
        text = rec.step("strip_punctuation", || lexical::strip_punctuation(&text));

        match mode {
            Mode::Extended => {
                if features.contains(Features::SYMBOL) {
                    text = rec.step("symbols", || symbols::spell_out(&text));
                }
                if features.contains(Features::DIGITS) {
                    text = rec.step("clock", || clock::merge_clock_times(&text));
                }
                if features.contains(Features::COLON) {
                    text = rec.step("loose_colons", || codec::release_colons(&text));
                }

                let mut words = tokens::tokenize(&text);
                words = rec.step("dates", || dates::clarify(words));
                words = rec.step("stray_characters", || tokens::drop_stray(words));
                if features.contains(Features::DIGITS) {
                    words = rec.step("numerals", || numerals::expand(words, tables));
                }
                words = rec.step("zero_minutes", || clock::drop_zero_minutes(words));
                if features.contains(Features::DIGITS) {
                    words = rec.step("years", || years::detect(words, tables));
                }
                text = tokens::join(&words);
            }
            Mode::Basic => {
                if features.contains(Features::SYMBOL) {
                    text = rec.step("symbols", || symbols::space_out(&text));
                }
            }
        }

        text = rec.step("restore", || codec::restore(&text, mode));
        let output = rec.step("finish", || lexical::finish(&text));
        (output, features)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::DEFAULT_TABLES;

    #[test]
    fn traced_run_matches_plain_run() {
        let pipeline = Pipeline::new(&DEFAULT_TABLES, Mode::Extended);
        let chunk = " Am 3.4.2020 um 14:30 Uhr, z.B. im Online-Shop ";

        let traced = pipeline.run_traced(chunk);
        assert_eq!(traced.output, pipeline.run(chunk));
        assert_eq!(traced.stages.first().map(|s| s.stage), Some("fold"));
        assert_eq!(traced.stages.last().map(|s| s.stage), Some("finish"));
        assert!(traced.features.contains(Features::DIGITS | Features::DASH | Features::PERIOD));
    }

    #[test]
    fn stages_without_triggers_are_skipped() {
        let pipeline = Pipeline::new(&DEFAULT_TABLES, Mode::Extended);
        let traced = pipeline.run_traced(" ganz normaler text ");

        let names: Vec<&str> = traced.stages.iter().map(|s| s.stage).collect();
        assert!(!names.contains(&"numerals"));
        assert!(!names.contains(&"dashes"));
        assert!(names.contains(&"dates"));
        assert_eq!(traced.output, "ganz normaler text");
    }

    #[test]
    fn colon_stage_runs_only_when_a_colon_was_seen() {
        let pipeline = Pipeline::new(&DEFAULT_TABLES, Mode::Extended);
        let cases: Vec<(bool, &str)> = vec![(true, " 2:1 "), (true, " 14:30 uhr "), (false, " 14.30 uhr "), (false, " 21 ")];

        for (expected, chunk) in cases {
            let traced = pipeline.run_traced(chunk);
            let ran = traced.stages.iter().any(|s| s.stage == "loose_colons");
            assert_eq!(ran, expected, "chunk {chunk:?}");
            assert_eq!(traced.features.contains(Features::COLON), expected, "chunk {chunk:?}");
        }
    }
}
