//! Bridge to an external text editor for composing issues.
//!
//! A template is written to a scratch file, the user's editor is run on it,
//! and the saved file is parsed back into an [`IssueDraft`].

pub mod draft;

use std::io::{BufRead, Write};
use std::path::PathBuf;

use tracing::{info, warn};

use crate::context::ServiceContext;

pub use draft::{parse_draft, render, template, DraftError, IssueDraft};

/// Question asked when no editor is configured.
pub const EDITOR_PROMPT: &str =
    "Enter the binary for the editor you would like to use (nvim, nano, etc.):";

/// Picks the editor program: the explicit flag, then `$VISUAL`, then
/// `$EDITOR`. Blank values are skipped.
pub fn resolve_editor<F>(flag: Option<&str>, env: F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    flag.map(str::to_string)
        .into_iter()
        .chain(env("VISUAL"))
        .chain(env("EDITOR"))
        .map(|candidate| candidate.trim().to_string())
        .find(|candidate| !candidate.is_empty())
}

/// Asks the user which editor to run and reads one line of answer.
///
/// # Errors
///
/// Returns an error if the terminal cannot be read or the answer is blank.
pub fn prompt_for_editor<R: BufRead, W: Write>(
    mut reader: R,
    mut writer: W,
) -> Result<String, String> {
    writeln!(writer, "{EDITOR_PROMPT}").map_err(|e| format!("Failed to write prompt: {e}"))?;
    writer.flush().map_err(|e| format!("Failed to write prompt: {e}"))?;

    let mut answer = String::new();
    reader.read_line(&mut answer).map_err(|e| format!("Failed to read editor name: {e}"))?;
    let answer = answer.trim();
    if answer.is_empty() {
        return Err("No editor provided".to_string());
    }
    Ok(answer.to_string())
}

/// Runs `program` on a scratch file pre-filled with `initial` and parses
/// the result.
///
/// The scratch file is removed once it parses. When the editor fails or
/// the file cannot be parsed it is left in place so the text is not lost;
/// the error names its path.
///
/// # Errors
///
/// Returns an error if the file cannot be written or read, the editor
/// cannot be started or exits unsuccessfully, or the template is malformed.
pub fn compose(ctx: &ServiceContext, program: &str, initial: &str) -> Result<IssueDraft, String> {
    let path = scratch_path(&ctx.id_gen.generate_id());
    ctx.fs
        .write(&path, initial)
        .map_err(|e| format!("Failed to write template {}: {e}", path.display()))?;

    info!(editor = program, path = %path.display(), "launching editor");
    let exit = ctx.editor.open(program, &path).map_err(|e| e.to_string())?;
    if !exit.success() {
        let status = exit.code.map_or_else(|| "signal".to_string(), |c| c.to_string());
        return Err(format!(
            "editor {program} exited with status {status}; draft kept at {}",
            path.display()
        ));
    }
    info!("{} successfully edited", path.display());

    let content = ctx
        .fs
        .read_to_string(&path)
        .map_err(|e| format!("Failed to read template {}: {e}", path.display()))?;
    let draft = parse_draft(&content, &path).map_err(|e| e.to_string())?;

    if let Err(e) = ctx.fs.remove_file(&path) {
        warn!(path = %path.display(), error = %e, "failed to remove template");
    }
    Ok(draft)
}

fn scratch_path(id: &str) -> PathBuf {
    std::env::temp_dir().join(format!("ghicli-issue-{id}.txt"))
}
