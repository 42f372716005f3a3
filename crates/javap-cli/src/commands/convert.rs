//! Batch conversion of compiled classes into JSON records.
//!
//! Every `*.class` file below the classes directory is disassembled with
//! `javap -l <Name>`, run from the class's own directory. The record lands at
//! the same relative path under the output directory with a `.json`
//! extension, replacing any earlier file. Transcripts the grammar does not
//! accept are skipped with a warning.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

use javap_core::Colors;
use javap_lib::{Error, MismatchPrinter, parse_transcript};
use walkdir::WalkDir;

pub struct ConvertArgs {
    pub classes_dir: PathBuf,
    pub output_dir: PathBuf,
    pub javap: String,
    pub color: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("failed to walk class directory: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("failed to run '{program}': {source}")]
    Spawn { program: String, source: io::Error },

    #[error("'{program} -l {class}' exited with {status}: {stderr}")]
    Javap {
        program: String,
        class: String,
        status: std::process::ExitStatus,
        stderr: String,
    },

    #[error("failed to write '{}': {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("failed to serialize record for '{}': {source}", path.display())]
    Serialize {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// What happened to one transcript.
#[derive(Debug, PartialEq, Eq)]
pub enum Converted {
    Written(PathBuf),
    /// Not a transcript the grammar accepts; carries a one-line reason.
    Skipped(String),
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub written: usize,
    pub skipped: usize,
}

pub fn run(args: ConvertArgs) {
    match convert_all(&args) {
        Ok(summary) => {
            eprintln!(
                "converted {} classes, skipped {}",
                summary.written, summary.skipped
            );
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}

fn convert_all(args: &ConvertArgs) -> Result<Summary, ConvertError> {
    let mut summary = Summary::default();
    for class in find_classes(&args.classes_dir)? {
        let transcript = run_javap(&args.javap, &class)?;
        let target = output_path(&args.classes_dir, &class, &args.output_dir);
        match convert_transcript(&transcript, &target)? {
            Converted::Written(_) => summary.written += 1,
            Converted::Skipped(reason) => {
                warn(&class, &reason, args.color);
                summary.skipped += 1;
            }
        }
    }
    Ok(summary)
}

fn warn(class: &Path, reason: &str, color: bool) {
    let c = Colors::new(color);
    eprintln!(
        "{}warning{}: skipping {}: {reason}",
        c.yellow,
        c.reset,
        class.display()
    );
}

/// Class files below `root`, in a stable order.
pub fn find_classes(root: &Path) -> Result<Vec<PathBuf>, ConvertError> {
    let mut classes = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry?;
        let is_class = entry.path().extension().is_some_and(|ext| ext == "class");
        if entry.file_type().is_file() && is_class {
            classes.push(entry.into_path());
        }
    }
    Ok(classes)
}

/// `<output>/<path of class relative to root>` with a `.json` extension.
pub fn output_path(root: &Path, class: &Path, output: &Path) -> PathBuf {
    let relative = class.strip_prefix(root).unwrap_or(class);
    output.join(relative).with_extension("json")
}

/// Runs `<program> -l <Name>` in the directory holding `class`.
pub fn run_javap(program: &str, class: &Path) -> Result<String, ConvertError> {
    let name = class
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    let mut command = Command::new(program);
    command.arg("-l").arg(&name);
    if let Some(dir) = class.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        command.current_dir(dir);
    }

    let output = command.output().map_err(|source| ConvertError::Spawn {
        program: program.to_owned(),
        source,
    })?;
    if !output.status.success() {
        return Err(ConvertError::Javap {
            program: program.to_owned(),
            class: name,
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_owned(),
        });
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Parses and projects one transcript, writing the record to `target`.
pub fn convert_transcript(transcript: &str, target: &Path) -> Result<Converted, ConvertError> {
    let record = match parse_transcript(transcript) {
        Ok(record) => record,
        Err(Error::Mismatch(mismatch)) => {
            let reason = MismatchPrinter::new(&mismatch, transcript).summary();
            return Ok(Converted::Skipped(reason));
        }
        Err(Error::Project(e)) => return Ok(Converted::Skipped(e.to_string())),
    };

    let json = serde_json::to_string_pretty(&record).map_err(|source| ConvertError::Serialize {
        path: target.to_owned(),
        source,
    })?;
    if let Some(dir) = target.parent() {
        fs::create_dir_all(dir).map_err(|source| ConvertError::Write {
            path: dir.to_owned(),
            source,
        })?;
    }
    fs::write(target, json + "\n").map_err(|source| ConvertError::Write {
        path: target.to_owned(),
        source,
    })?;
    Ok(Converted::Written(target.to_owned()))
}
