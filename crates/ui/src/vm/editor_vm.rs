use primer_core::runner::{HELLO_WORLD_PROGRAM, OUTPUT_PROMPT, RUNNING_BANNER};
use services::{CodeRunner, RunTicket};

/// Editor text and output panel of the interactive pane.
///
/// Every transition that replaces the output also retires pending runs on
/// the shared runner, so a late result only lands while its run is current.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditorVm {
    code: String,
    output: String,
}

impl Default for EditorVm {
    fn default() -> Self {
        Self {
            code: HELLO_WORLD_PROGRAM.to_string(),
            output: OUTPUT_PROMPT.to_string(),
        }
    }
}

impl EditorVm {
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    #[must_use]
    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn edit(&mut self, code: String) {
        self.code = code;
    }

    /// Show the running banner and hand back the ticket to finish.
    pub fn start_run(&mut self, runner: &CodeRunner) -> RunTicket {
        self.output = RUNNING_BANNER.to_string();
        runner.start(self.code.clone())
    }

    /// Apply a finished run. `None` means it was superseded.
    pub fn finish_run(&mut self, result: Option<String>) {
        if let Some(output) = result {
            self.output = output;
        }
    }

    pub fn reset(&mut self, runner: &CodeRunner) {
        let reset = runner.reset();
        self.code = reset.code.to_string();
        self.output = reset.output.to_string();
    }

    pub fn load_example(&mut self, runner: &CodeRunner, snippet: String) {
        runner.cancel();
        self.code = snippet;
        self.output = OUTPUT_PROMPT.to_string();
    }
}
