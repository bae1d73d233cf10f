use crate::NormalizeVerbose;
use crate::engine::RunMetrics;

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";
}

/// ANSI colouring that can be switched off for pipes and tests.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    fn wrap(&self, s: impl AsRef<str>, code: &str) -> String {
        if self.enabled { format!("{}{}{}", code, s.as_ref(), ansi::RESET) } else { s.as_ref().to_string() }
    }

    pub fn bold(&self, s: impl AsRef<str>) -> String {
        self.wrap(s, ansi::BOLD)
    }

    pub fn dim(&self, s: impl AsRef<str>) -> String {
        self.wrap(s, ansi::DIM)
    }

    fn section(&self, title: &str) -> String {
        self.wrap(format!("━━━ {title} ━━━"), ansi::GRAY)
    }
}

/// Render a per-stage report for one chunk.
///
/// Stages whose output equals the previous text are listed dimmed, so the
/// stage that introduced a change stands out.
pub fn render_trace(input: &str, res: &NormalizeVerbose, palette: &Palette) -> String {
    let mut out = String::new();
    out.push_str(&palette.bold(palette.wrap(format!("⚙  Normalizing: \"{input}\""), ansi::CYAN)));
    out.push('\n');

    out.push_str(&format!("\n{}\n", palette.section("Features")));
    if res.features.is_empty() {
        out.push_str(&format!("  {}\n", palette.dim("none (letters only)")));
    } else {
        let names: Vec<&str> = res.features.iter_names().map(|(name, _)| name).collect();
        out.push_str(&format!("  {}\n", palette.wrap(names.join(" | "), ansi::BLUE)));
    }

    out.push_str(&format!("\n{}\n", palette.section("Stages")));
    let mut previous = String::new();
    for trace in &res.stages {
        let label = format!("{:<18}", trace.stage);
        let timing = palette.dim(format!("{:?}", trace.duration));
        if trace.output == previous {
            out.push_str(&format!("  {} {} {}\n", palette.dim(label), palette.dim("(unchanged)"), timing));
        } else {
            out.push_str(&format!(
                "  {} {} {}\n",
                palette.wrap(label, ansi::BLUE),
                palette.wrap(format!("\"{}\"", trace.output), ansi::YELLOW),
                timing
            ));
        }
        previous.clone_from(&trace.output);
    }

    out.push_str(&format!("\n{}\n", palette.section("Result")));
    out.push_str(&format!("  {}\n", palette.bold(palette.wrap(&res.text, ansi::GREEN))));
    out.push_str(&format!("  {} {}\n", palette.dim("Total:"), palette.wrap(format!("{:?}", res.elapsed), ansi::GREEN)));
    out
}

/// Summarize where time went over a whole run.
pub fn render_metrics(metrics: &RunMetrics, palette: &Palette) -> String {
    let mut out = format!("{}\n", palette.section("Timing"));
    out.push_str(&format!(
        "  Total: {}  │  Chunks: {}\n",
        palette.wrap(format!("{:?}", metrics.total), ansi::GREEN),
        palette.wrap(metrics.chunks.to_string(), ansi::BLUE)
    ));

    let slowest = metrics.slowest_stage().map(|s| s.stage);
    for stage in &metrics.stages {
        let name = format!("{:<18}", stage.stage);
        let name = if Some(stage.stage) == slowest { palette.bold(palette.wrap(name, ansi::CYAN)) } else { palette.wrap(name, ansi::CYAN) };
        out.push_str(&format!(
            "  {} {}  {} {}\n",
            name,
            palette.dim(format!("{:?}", stage.duration)),
            palette.dim("runs:"),
            palette.wrap(stage.runs.to_string(), ansi::YELLOW)
        ));
    }
    out
}
