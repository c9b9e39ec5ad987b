//! Interactive front-end that builds a [`ScanRequest`] from two console prompts.
//!
//! The reader and writer are generic so tests can drive the prompts with
//! in-memory buffers instead of a terminal.

use crate::data::ScanRequest;
use crate::error::InventoryError;
use crate::utils::parse_extension_list;
use std::io::{BufRead, Write};
use std::path::PathBuf;

pub const PATH_PROMPT: &str = "Enter the path for the files you want to collect: ";

pub const EXTENSIONS_PROMPT: &str = "Enter the extensions to consider (comma-separated), if nothing is entered, all files will be considered: ";

/// Asks for the root path and, unless `preset_extensions` is given, the extension list.
///
/// The path prompt is asked first and an empty answer fails straight away,
/// before the extension prompt is shown.
///
/// # Arguments
/// * `input` - Source of the answers, one per line
/// * `output` - Receives the prompts
/// * `preset_extensions` - Extensions already given as flags; skips the second prompt
///
/// # Returns
/// The [`ScanRequest`] built from the answers.
///
/// # Errors
/// * [`InventoryError::EmptyRootPath`] if the path answer is blank
/// * [`InventoryError::Console`] if reading or writing the console fails
pub fn prompt_request<R, W>(
    input: &mut R,
    output: &mut W,
    preset_extensions: Option<&[String]>,
) -> Result<ScanRequest, InventoryError>
where
    R: BufRead,
    W: Write,
{
    let root = ask(input, output, PATH_PROMPT)?;
    if root.is_empty() {
        return Err(InventoryError::EmptyRootPath);
    }

    let extensions: Vec<String> = match preset_extensions {
        Some(preset) => preset.to_vec(),
        None => {
            writeln!(output).map_err(InventoryError::Console)?;
            let answer = ask(input, output, EXTENSIONS_PROMPT)?;
            parse_extension_list(&answer).into_iter().collect()
        }
    };

    ScanRequest::new(PathBuf::from(root), extensions)
}

/// Prints `prompt` and returns the next input line, trimmed.
///
/// End of input counts as an empty answer.
fn ask<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<String, InventoryError> {
    write!(output, "{}", prompt).map_err(InventoryError::Console)?;
    output.flush().map_err(InventoryError::Console)?;

    let mut line = String::new();
    input.read_line(&mut line).map_err(InventoryError::Console)?;
    Ok(line.trim().to_string())
}
