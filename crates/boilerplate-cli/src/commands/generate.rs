//! Generate command implementation.
//!
//! This command:
//! 1. Validates the language and function name
//! 2. Asks the user to confirm (unless assumed yes)
//! 3. Renders the stub
//! 4. Writes `<name><ext>` into the output directory, replacing any existing file

use crate::formatters::format_output;
use crate::prompt::Prompter;
use anyhow::{Context, Result};
use boilerplate_codegen::{GeneratedFile, generate};
use boilerplate_core::cli::{ExitCode, OutputFormat};
use boilerplate_core::{FunctionName, GenerationRequest, Language, split_inputs};
use colored::Colorize;
use serde::Serialize;
use std::fmt;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info};

/// Inputs to the generate command, after configuration has been applied.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Function name as given on the command line
    pub name: String,
    /// Language as given on the command line (any case)
    pub language: String,
    /// Comma-separated parameter names
    pub inputs: String,
    /// Directory the file is written into
    pub output_dir: PathBuf,
    /// Skip the confirmation prompt
    pub assume_yes: bool,
}

/// Result of a successful generation.
#[derive(Debug, Serialize)]
pub struct GenerationResult {
    /// Function name
    pub function_name: String,
    /// Target language
    pub language: Language,
    /// Parameter names in order
    pub parameters: Vec<String>,
    /// Path of the written file
    pub file_path: String,
    /// Number of lines written
    pub line_count: usize,
}

impl fmt::Display for GenerationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Boilerplate saved to: {}", self.file_path.cyan())
    }
}

/// Runs the generate command.
///
/// Returns `ExitCode::ERROR` for an unsupported language and
/// `ExitCode::INVALID_INPUT` for an invalid function name; in both cases
/// nothing is written. A declined confirmation is a successful run that
/// writes nothing.
///
/// # Errors
///
/// Returns an error if:
/// - The confirmation prompt cannot be shown
/// - Stub generation fails
/// - The file cannot be written
pub fn run<P: Prompter + ?Sized>(
    options: GenerateOptions,
    prompter: &P,
    output_format: OutputFormat,
) -> Result<ExitCode> {
    let language = match options.language.parse::<Language>() {
        Ok(language) => language,
        Err(e) => {
            debug!("Rejected language: {e}");
            eprintln!(
                "{}",
                format!("Supported languages are: {}", Language::supported_list()).red()
            );
            return Ok(ExitCode::ERROR);
        }
    };

    let function_name = match FunctionName::new(&options.name) {
        Ok(name) => name,
        Err(e) => {
            debug!("Rejected function name {:?}: {e}", options.name);
            eprintln!("{}", e.to_string().red());
            return Ok(ExitCode::INVALID_INPUT);
        }
    };

    let parameters = split_inputs(&options.inputs);
    let request = GenerationRequest::new(function_name, language, parameters);

    if options.assume_yes {
        debug!("Confirmation skipped");
    } else {
        let message = format!(
            "Generate boilerplate code for function \"{}\" in {}?",
            request.function_name, options.language
        );

        if !prompter.confirm(&message)? {
            println!("{}", "Operation cancelled.".yellow());
            return Ok(ExitCode::SUCCESS);
        }
    }

    let file = GeneratedFile {
        file_name: request.file_name(),
        language: request.language,
        content: generate(
            request.function_name.as_str(),
            &options.language,
            &request.parameters,
        )
        .context("Failed to generate boilerplate")?,
    };

    let file_path = options.output_dir.join(&file.file_name);
    fs::write(&file_path, &file.content)
        .with_context(|| format!("Failed to write boilerplate to {}", file_path.display()))?;

    info!("Wrote {} stub to {}", request.language, file_path.display());

    let result = GenerationResult {
        function_name: request.function_name.to_string(),
        language: request.language,
        parameters: request.parameters,
        file_path: file_path.display().to_string(),
        line_count: file.line_count(),
    };

    println!("{}", format_output(&result, output_format)?);

    Ok(ExitCode::SUCCESS)
}
