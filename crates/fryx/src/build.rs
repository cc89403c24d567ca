//! Project build.
//!
//! Source files are parsed and compiled in parallel. Each successful file
//! writes its server code to `<output_dir>/<name>.out` and its client
//! scripts to `<static_root>/<js_url>/<module id>.js`. A failing file is
//! recorded in the [`BuildReport`] and does not stop the others.
//!
//! A full build rewrites the stylesheet from every file's utilities; a
//! rebuild appends the utilities of the given files to the existing sheet.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use fryx_atelier::{
    compile_document, is_html_attribute, CompileError, CompiledUnit, CompilerOptions,
};
use fryx_pigment::{CssCollector, Stylesheet, StylesheetError};
use fryx_relief::{Document, SourceParser};
use rayon::prelude::*;
use thiserror::Error;

use crate::config::FryxConfig;

/// One source file of a project.
#[derive(Debug, Clone)]
pub struct SourceFile {
    /// Path relative to the project root, e.g. `pages/home.fx`.
    pub name: String,
    pub source: String,
}

impl SourceFile {
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
        }
    }
}

/// Errors that abort a whole build.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Stylesheet(#[from] StylesheetError),
}

/// A file that did not compile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildFailure {
    pub file: String,
    pub error: CompileError,
}

/// Outcome of one build.
#[derive(Debug, Clone, Default)]
pub struct BuildReport {
    /// Names of the files that compiled, in input order.
    pub compiled: Vec<String>,
    /// Client script files written.
    pub scripts: usize,
    /// Stylesheet rules written.
    pub rules: usize,
    pub failures: Vec<BuildFailure>,
}

impl BuildReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StyleMode {
    Full,
    Append,
}

/// Builds a project with one parser and configuration.
pub struct Builder<P> {
    config: FryxConfig,
    options: CompilerOptions,
    parser: P,
    stylesheet: Stylesheet,
}

impl<P: SourceParser> Builder<P> {
    pub fn new(config: FryxConfig, parser: P) -> Self {
        let options = config.compiler_options();
        let stylesheet = Stylesheet::new(config.css_path());
        Self {
            config,
            options,
            parser,
            stylesheet,
        }
    }

    pub fn config(&self) -> &FryxConfig {
        &self.config
    }

    /// Compile every file and regenerate the whole stylesheet.
    pub fn build(&self, files: &[SourceFile]) -> Result<BuildReport, BuildError> {
        self.run(files, StyleMode::Full)
    }

    /// Recompile `files` and append their rules to the existing stylesheet.
    pub fn rebuild(&self, files: &[SourceFile]) -> Result<BuildReport, BuildError> {
        self.run(files, StyleMode::Append)
    }

    fn run(&self, files: &[SourceFile], mode: StyleMode) -> Result<BuildReport, BuildError> {
        let start = Instant::now();

        let results: Vec<Result<(Document, CompiledUnit), CompileError>> = files
            .par_iter()
            .map(|file| -> Result<(Document, CompiledUnit), CompileError> {
                let document = self.parser.parse(&file.source)?;
                let unit = compile_document(&document, &self.options)?;
                tracing::debug!(file = %file.name, scripts = unit.scripts.len(), "compiled");
                Ok((document, unit))
            })
            .collect();

        let js_dir = self.config.js_dir();
        create_dir(&self.config.output_dir)?;
        create_dir(&js_dir)?;

        let mut report = BuildReport::default();
        let mut collector = CssCollector::new();
        for (file, result) in files.iter().zip(results) {
            let (document, unit) = match result {
                Ok(compiled) => compiled,
                Err(error) => {
                    tracing::warn!(file = %file.name, %error, "compile failed");
                    report.failures.push(BuildFailure {
                        file: file.name.clone(),
                        error,
                    });
                    continue;
                }
            };

            let out_path = self.config.output_dir.join(format!("{}.out", file.name));
            if let Some(parent) = out_path.parent() {
                create_dir(parent)?;
            }
            write_file(&out_path, &unit.code)?;
            for script in &unit.scripts {
                write_file(&js_dir.join(script.file_name()), &script.code)?;
            }

            collector.add_document(&document);
            report.scripts += unit.scripts.len();
            report.compiled.push(file.name.clone());
        }

        let rules = collector.rules(|key| !is_html_attribute("", key));
        report.rules = match mode {
            StyleMode::Full => self.stylesheet.write_full(&rules)?,
            StyleMode::Append => self.stylesheet.append(&rules)?,
        };

        tracing::info!(
            files = files.len(),
            compiled = report.compiled.len(),
            failed = report.failures.len(),
            scripts = report.scripts,
            rules = report.rules,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "build finished"
        );
        Ok(report)
    }
}

fn create_dir(path: &Path) -> Result<(), BuildError> {
    fs::create_dir_all(path).map_err(|source| BuildError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn write_file(path: &Path, content: &str) -> Result<(), BuildError> {
    fs::write(path, content).map_err(|source| BuildError::Io {
        path: path.to_path_buf(),
        source,
    })
}
