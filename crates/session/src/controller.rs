//! The interactive session loop.

use qbank_core::{Catalog, ProgressState};
use qbank_ranking::{DescriptorCounts, DescriptorRanking};
use qbank_storage::ProgressStore;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{info, warn};

use crate::command::Command;
use crate::error::Result;

const HELP_TEXT: &str = "\nCommand        Description\n\
------------------------------------------------------------------------------------------------------\n\
get            Get a question of the descriptor sorted on top.\n\
done [ID]      Declare a question as done. If no ID provided, the last fetched question will be saved.\n\
mark [ID]      Mark a question. If no ID provided, the last fetched question will be saved.\n\
stats          Get statistics.\n\
help           Display list of commands.\n\
quit           Quit and save your changes.\n";

const FILTER_HINT: &str =
    "To filter by specific descriptors, use the 'relevant_descriptors.json' file.";
const QUIT_HINT: &str = "Make sure to exit using the 'quit' command to save your changes.";

/// An interactive session over a loaded catalog.
///
/// The session recomputes the descriptor ranking after every recorded
/// `done` and persists progress only when the user quits.
pub struct Session<S> {
    catalog: Catalog,
    progress: ProgressState,
    store: S,
    counts: DescriptorCounts,
    ranking: DescriptorRanking,
    last_fetched: Option<String>,
    dirty: bool,
}

impl<S: ProgressStore> Session<S> {
    /// Create a session and compute the initial ranking.
    pub fn new(catalog: Catalog, progress: ProgressState, store: S) -> Self {
        let counts = DescriptorCounts::tally(&catalog, &progress);
        let ranking = DescriptorRanking::rank(&counts);
        Self {
            catalog,
            progress,
            store,
            counts,
            ranking,
            last_fetched: None,
            dirty: false,
        }
    }

    /// Current progress state, including appends made this session.
    pub fn progress(&self) -> &ProgressState {
        &self.progress
    }

    /// Run the loop until `quit` or end of input.
    ///
    /// Reads newline-delimited commands from `input`; all user-facing
    /// output goes to `output`. Progress is written only by `quit`; end of
    /// input ends the session without saving.
    pub async fn run<R, W>(&mut self, input: R, mut output: W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        write_line(&mut output, HELP_TEXT).await?;
        write_line(&mut output, FILTER_HINT).await?;
        write_line(&mut output, QUIT_HINT).await?;

        let mut lines = input.lines();
        while let Some(line) = lines.next_line().await? {
            let Some(command) = Command::parse(&line) else {
                continue;
            };

            let reply = match command {
                Command::Get => self.fetch_next(),
                Command::Done(id) => self.record_done(id),
                Command::Mark(id) => self.record_mark(id),
                Command::Stats => self.render_stats(),
                Command::Help => HELP_TEXT.to_string(),
                Command::Quit => {
                    self.store.save(&self.progress).await?;
                    info!(
                        "Progress saved ({} done, {} marked)",
                        self.progress.done.len(),
                        self.progress.marked.len()
                    );
                    return Ok(());
                }
            };
            write_line(&mut output, &reply).await?;
        }

        if self.dirty {
            warn!("Input ended before 'quit'; progress from this session was not saved");
        }
        Ok(())
    }

    fn fetch_next(&mut self) -> String {
        let top = match self.ranking.top() {
            Some(descriptor) => descriptor.to_string(),
            None => return "No relevant descriptors found.".to_string(),
        };

        for question in self.catalog.questions() {
            if question.has_descriptor(&top)
                && !self.progress.is_done(&question.id)
                && !self.progress.is_marked(&question.id)
            {
                self.last_fetched = Some(question.id.clone());
                return format!(
                    "Question: {}, Question ID: {}, Descriptor: {}, Link: {}",
                    question.title, question.id, top, question.link
                );
            }
        }

        "No available question for the top descriptor.".to_string()
    }

    fn record_done(&mut self, id: Option<String>) -> String {
        let Some(id) = id.or_else(|| self.last_fetched.clone()) else {
            return "No question to declare as done. Fetch one with 'get' or provide an ID."
                .to_string();
        };

        self.progress.record_done(id);
        self.dirty = true;
        self.recompute();
        "Questions successfully declared as done.".to_string()
    }

    fn record_mark(&mut self, id: Option<String>) -> String {
        let Some(id) = id.or_else(|| self.last_fetched.clone()) else {
            return "No question to mark. Fetch one with 'get' or provide an ID.".to_string();
        };

        self.progress.record_marked(id);
        self.dirty = true;
        "Question successfully marked.".to_string()
    }

    // Completion accounting changes only when a question is declared done.
    fn recompute(&mut self) {
        self.counts = DescriptorCounts::tally(&self.catalog, &self.progress);
        self.ranking = DescriptorRanking::rank(&self.counts);
    }

    fn render_stats(&self) -> String {
        if self.ranking.is_empty() {
            return "No relevant descriptors found.".to_string();
        }

        let mut out = String::new();
        out.push_str(&format!(
            "Total Questions: {}\n",
            self.counts.total_questions()
        ));
        out.push_str(&format!(
            "Percent of questions done: {:.2}%\n\n",
            self.counts.overall_ratio() * 100.0
        ));
        out.push_str(&format!(
            "{:<10} {:>9} {:>15}\n",
            "Descriptor", "Total", "Percent Done"
        ));
        out.push_str(&"-".repeat(36));
        out.push('\n');
        for descriptor in self.ranking.descriptors() {
            out.push_str(&format!(
                "{:<10}{:>10} {:>15}\n",
                descriptor,
                self.counts.total(descriptor),
                format!("{:.2}%", self.counts.ratio(descriptor) * 100.0)
            ));
        }
        out
    }
}

async fn write_line<W>(output: &mut W, text: &str) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    output.write_all(text.as_bytes()).await?;
    output.write_all(b"\n").await?;
    output.flush().await
}
