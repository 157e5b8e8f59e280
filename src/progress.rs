use console::{Term, style};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
#[cfg(test)]
use indicatif::ProgressDrawTarget;

use crate::constants::progress::{SPINNER_FRAMES, TICK_INTERVAL};

// Progress bar style templates as constants
const PROGRESS_BAR_TEMPLATE: &str =
    "{msg} [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {per_sec}";
const SPINNER_TEMPLATE: &str = "{spinner:.cyan} {msg}";

pub struct ProgressReporter {
    term: Term,
    multi_progress: MultiProgress,
    current_bar: Option<ProgressBar>,
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            term: Term::stderr(),
            multi_progress: MultiProgress::new(),
            current_bar: None,
        }
    }

    /// Reporter whose bars are tracked but never drawn
    #[cfg(test)]
    pub(crate) fn hidden() -> Self {
        Self {
            term: Term::stderr(),
            multi_progress: MultiProgress::with_draw_target(ProgressDrawTarget::hidden()),
            current_bar: None,
        }
    }

    #[cfg(test)]
    pub(crate) fn position(&self) -> Option<u64> {
        self.current_bar.as_ref().map(ProgressBar::position)
    }

    fn create_progress_bar(&self, len: u64, message: &str) -> ProgressBar {
        let pb = self.multi_progress.add(ProgressBar::new(len));
        if let Ok(bar_style) = ProgressStyle::default_bar().template(PROGRESS_BAR_TEMPLATE) {
            pb.set_style(bar_style.progress_chars("█▉▊▋▌▍▎▏ "));
        }
        pb.set_message(message.to_string());
        pb.enable_steady_tick(TICK_INTERVAL);
        pb
    }

    fn create_spinner(&self, message: &str) -> ProgressBar {
        let pb = self.multi_progress.add(ProgressBar::new_spinner());
        if let Ok(spinner_style) = ProgressStyle::default_spinner().template(SPINNER_TEMPLATE) {
            pb.set_style(spinner_style.tick_strings(SPINNER_FRAMES));
        }
        pb.set_message(message.to_string());
        pb.enable_steady_tick(TICK_INTERVAL);
        pb
    }

    pub fn start_generation(&mut self, vertex_count: usize, density: u32) {
        let _ = self.term.clear_line();
        eprintln!(
            "{} Generating graph: {} vertices, {}% density...",
            style("🎲").cyan(),
            style(vertex_count).yellow(),
            style(density).yellow()
        );
        self.current_bar = Some(self.create_spinner("Flipping edge coins..."));
    }

    pub fn finish_generation(&mut self, edge_count: usize) {
        if let Some(pb) = self.current_bar.take() {
            pb.finish_and_clear();
        }
        eprintln!(
            "{} Graph ready with {} edge{}",
            style("✓").green(),
            style(edge_count).yellow().bold(),
            if edge_count == 1 { "" } else { "s" }
        );
    }

    pub fn start_enumeration(&mut self, vertex_count: usize) {
        eprintln!("\n{} Enumerating simple cycles...", style("🔄").yellow());
        let pb = self.create_progress_bar(vertex_count as u64, "Start vertices");
        self.current_bar = Some(pb);
    }

    pub fn start_vertex_done(&self, start: usize) {
        if let Some(ref pb) = self.current_bar {
            pb.set_message(format!("Finished start vertex {start}"));
            pb.inc(1);
        }
    }

    pub fn finish_enumeration(&mut self, cycles_found: usize) {
        if let Some(pb) = self.current_bar.take() {
            pb.finish_and_clear();
        }
        if cycles_found == 0 {
            eprintln!(
                "{} No cycles found {}",
                style("✓").green().bold(),
                style("🎉").dim()
            );
        } else {
            eprintln!(
                "{} Found {} cycle{}",
                style("⚠").yellow().bold(),
                style(cycles_found).red().bold(),
                if cycles_found == 1 { "" } else { "s" }
            );
        }
    }
}
