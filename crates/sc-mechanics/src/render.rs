//! Rendering sinks for markdown output.
//!
//! A [`Renderer`] stands in for the host environment's "display this
//! markdown" call, so checks can be computed and tested without a host.

/// Something that can display a block of markdown.
pub trait Renderer {
    /// Display one markdown block.
    fn display(&mut self, markdown: &str);
}

/// Prints each markdown block to stdout on its own line.
#[derive(Debug, Default)]
pub struct StdoutRenderer;

impl Renderer for StdoutRenderer {
    fn display(&mut self, markdown: &str) {
        println!("{markdown}");
    }
}

/// Keeps every displayed block in memory.
#[derive(Debug, Default, Clone)]
pub struct RecordingRenderer {
    blocks: Vec<String>,
}

impl RecordingRenderer {
    /// An empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Blocks displayed so far, oldest first.
    pub fn blocks(&self) -> &[String] {
        &self.blocks
    }

    /// Consume the recorder, returning its blocks.
    pub fn into_blocks(self) -> Vec<String> {
        self.blocks
    }

    /// All blocks joined with newlines.
    pub fn joined(&self) -> String {
        self.blocks.join("\n")
    }
}

impl Renderer for RecordingRenderer {
    fn display(&mut self, markdown: &str) {
        self.blocks.push(markdown.to_string());
    }
}
