//! Rendering through the external Graphviz `dot` program.

use std::{
    io::Write,
    process::{Command, Stdio},
};

use log::{debug, error, info};

use crate::{
    export::{self, Exporter, OutputFormat, dot::to_dot},
    structure::Digraph,
};

/// Program invoked unless another one is configured.
pub const DEFAULT_PROGRAM: &str = "dot";

/// Renders a graph to `file_name` by running Graphviz.
///
/// The DOT source is written to the program's stdin and the program is
/// asked to write the output file itself (`dot -T<format> -o <file>`).
pub struct Graphviz {
    file_name: String,
    format: OutputFormat,
    program: String,
}

impl Graphviz {
    pub fn new(file_name: &str, format: OutputFormat) -> Self {
        Self {
            file_name: file_name.to_string(),
            format,
            program: DEFAULT_PROGRAM.to_string(),
        }
    }

    /// Use `program` instead of `dot`.
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Render DOT `source` to the output file.
    ///
    /// # Errors
    ///
    /// Returns [`export::Error::Render`] if the program cannot be started or
    /// exits unsuccessfully, with its stderr in the message.
    pub fn render_source(&self, source: &str) -> Result<(), export::Error> {
        debug!(program = self.program, format:% = self.format; "Starting renderer");

        let mut child = Command::new(&self.program)
            .arg(format!("-T{}", self.format))
            .arg("-o")
            .arg(&self.file_name)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|err| {
                export::Error::Render(format!("failed to run `{}`: {err}", self.program))
            })?;

        // Dropping stdin closes the pipe so the renderer sees end of input.
        // The renderer is always waited on: if it exits before reading all
        // of its input, its status and stderr explain the broken pipe.
        let written = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(source.as_bytes()),
            None => Ok(()),
        };

        let output = child.wait_with_output()?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            error!(status:% = output.status; "Renderer failed");
            return Err(export::Error::Render(format!(
                "`{}` exited with {}: {}",
                self.program,
                output.status,
                stderr.trim()
            )));
        }
        written?;

        info!(file_name = self.file_name, format:% = self.format; "Graph rendered");
        Ok(())
    }
}

impl Exporter for Graphviz {
    fn export_graph(&self, graph: &Digraph) -> Result<(), export::Error> {
        self.render_source(&to_dot(graph))
    }
}
