//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{GarbleArgs, OutputFormat};
use crate::error::Result;
use crate::mixer::TokenSubstitution;

/// Result structure for the mix command.
#[derive(Debug, Serialize, Deserialize)]
pub struct MixResult {
    pub lines_processed: usize,
    pub lines_changed: usize,
}

/// Result structure for the inspect command.
#[derive(Debug, Serialize, Deserialize)]
pub struct InspectResult {
    pub text: String,
    pub mixed: String,
    pub substitutions: Vec<TokenSubstitution>,
}

/// Emit a serializable result in the requested format.
///
/// In human format prints `message`; in JSON format serializes `result`
/// (pretty-printed when `--pretty` is set).
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &GarbleArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            if args.verbosity() > 0 {
                println!("{message}");
            }
        }
        OutputFormat::Json => {
            let json = if args.pretty {
                serde_json::to_string_pretty(result)?
            } else {
                serde_json::to_string(result)?
            };
            println!("{json}");
        }
    }
    Ok(())
}

/// Render one substitution row as a human-readable table line.
pub fn format_substitution(sub: &TokenSubstitution) -> String {
    match (&sub.lemma, sub.seed, &sub.permutation) {
        (Some(lemma), Some(seed), Some(pairs)) => {
            let perm: Vec<String> = pairs
                .iter()
                .map(|(from, to)| format!("{from}→{to}"))
                .collect();
            format!(
                "{:<16} lemma={:<12} seed={:#018x}  [{}]  => {}",
                sub.token,
                lemma,
                seed,
                perm.join(" "),
                sub.replacement
            )
        }
        _ => format!("{:<16} (unresolved, left as-is)", sub.token),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_resolved_substitution() {
        let sub = TokenSubstitution {
            token: "running".to_string(),
            lemma: Some("run".to_string()),
            seed: Some(0x1234),
            permutation: Some(vec![('a', 'e'), ('e', 'a')]),
            replacement: "runneng".to_string(),
        };

        let line = format_substitution(&sub);
        assert!(line.contains("running"));
        assert!(line.contains("lemma=run"));
        assert!(line.contains("a→e"));
        assert!(line.contains("runneng"));
    }

    #[test]
    fn test_mix_result_serializes() {
        let result = MixResult {
            lines_processed: 3,
            lines_changed: 2,
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["lines_processed"], 3);
        assert_eq!(json["lines_changed"], 2);
    }

    #[test]
    fn test_format_unresolved_substitution() {
        let sub = TokenSubstitution {
            token: "zzq".to_string(),
            lemma: None,
            seed: None,
            permutation: None,
            replacement: "zzq".to_string(),
        };

        assert!(format_substitution(&sub).contains("unresolved"));
    }
}
