//! Command implementations for the Garble CLI.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::Result;
use crate::mixer::VowelMixer;

/// Execute a CLI command.
pub fn execute_command(args: GarbleArgs) -> Result<()> {
    match &args.command {
        Command::Mix(mix_args) => mix_lines(mix_args.clone(), &args),
        Command::Inspect(inspect_args) => inspect_text(inspect_args.clone(), &args),
    }
}

/// Mix text line by line from a file or stdin.
fn mix_lines(args: MixArgs, cli_args: &GarbleArgs) -> Result<()> {
    let mixer = build_mixer(&args.algorithm)?;

    let reader: Box<dyn BufRead> = match &args.input {
        Some(path) => Box::new(BufReader::new(open_input(path)?)),
        None => Box::new(BufReader::new(io::stdin())),
    };

    let summary = mix_reader(&mixer, reader, cli_args)?;

    match cli_args.output_format {
        // Mixed lines own stdout; the summary goes to stderr, and only
        // when asked for.
        OutputFormat::Human => {
            if cli_args.verbosity() > 1 {
                eprintln!(
                    "{} lines processed, {} changed",
                    summary.lines_processed, summary.lines_changed
                );
            }
        }
        OutputFormat::Json => output_result("", &summary, cli_args)?,
    }

    Ok(())
}

/// Mix every line of `reader`, emitting each mixed line as it goes.
///
/// Returns the summary so the caller can report it in the requested format.
fn mix_reader<R: BufRead>(
    mixer: &VowelMixer,
    reader: R,
    cli_args: &GarbleArgs,
) -> Result<MixResult> {
    let mut lines_processed = 0;
    let mut lines_changed = 0;

    for line in reader.lines() {
        let line = line?;
        let mixed = mixer.mix(&line)?;

        lines_processed += 1;
        if mixed != line {
            lines_changed += 1;
        }

        match cli_args.output_format {
            OutputFormat::Human => println!("{mixed}"),
            OutputFormat::Json => {
                let row = serde_json::json!({ "input": line, "output": mixed });
                println!("{row}");
            }
        }
    }

    Ok(MixResult {
        lines_processed,
        lines_changed,
    })
}

/// Trace the per-token pipeline values for a piece of text.
fn inspect_text(args: InspectArgs, cli_args: &GarbleArgs) -> Result<()> {
    let mixer = build_mixer(&args.algorithm)?;

    let substitutions = mixer.trace(&args.text)?;
    let mixed = mixer.mix(&args.text)?;

    match cli_args.output_format {
        OutputFormat::Human => {
            for sub in &substitutions {
                println!("{}", format_substitution(sub));
            }
            println!("=> {mixed}");
        }
        OutputFormat::Json => {
            let result = InspectResult {
                text: args.text.clone(),
                mixed,
                substitutions,
            };
            output_result("", &result, cli_args)?;
        }
    }

    Ok(())
}

fn build_mixer(algorithm: &str) -> Result<VowelMixer> {
    let digest = crate::cipher::digest::LemmaDigest::new(algorithm)?;
    Ok(VowelMixer::new().with_digest(digest))
}

fn open_input(path: &Path) -> Result<File> {
    Ok(File::open(path)?)
}
