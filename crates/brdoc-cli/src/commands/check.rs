//! Check command implementation.

use brdoc_core::{clean, parse, IdClass};
use serde_json::json;
use std::io::{self, Read};

use crate::output;

/// Outcome for one input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Verdict {
    Valid,
    Invalid,
    Malformed,
}

fn verdict(class: IdClass, line: &str) -> Verdict {
    match parse(class, line, false) {
        Ok(parsed) if parsed.valid => Verdict::Valid,
        Ok(_) => Verdict::Invalid,
        Err(_) => Verdict::Malformed,
    }
}

pub fn run(
    class: IdClass,
    input: Option<String>,
    json_output: bool,
    strict: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    // Read lines from file or stdin
    let text = if let Some(path) = input {
        std::fs::read_to_string(&path)
            .map_err(|e| format!("Failed to read file {}: {}", path, e))?
    } else {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    };

    let mut all_ok = true;
    let mut results = Vec::new();
    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let verdict = verdict(class, line);
        all_ok = all_ok && verdict == Verdict::Valid;
        results.push((line.to_string(), clean(line), verdict));
    }
    tracing::info!(%class, checked = results.len(), all_ok, "check finished");

    if json_output {
        let json_results: Vec<_> = results
            .into_iter()
            .map(|(input, canonical, verdict)| {
                json!({
                    "input": input,
                    "canonical": canonical,
                    "verdict": format!("{:?}", verdict)
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&json_results)?);
    } else {
        output::print_table_header();
        for (input, canonical, verdict) in results {
            println!(
                "{}",
                output::format_table_row(&input, &canonical, &format!("{:?}", verdict))
            );
        }
    }

    if strict && !all_ok {
        std::process::exit(1);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verdicts() {
        assert_eq!(verdict(IdClass::Cpf, "968.811.342-58"), Verdict::Valid);
        assert_eq!(verdict(IdClass::Cpf, "968.811.342-59"), Verdict::Invalid);
        assert_eq!(verdict(IdClass::Cpf, "968.811"), Verdict::Malformed);
        assert_eq!(verdict(IdClass::Cpf, "no digits"), Verdict::Malformed);
        assert_eq!(verdict(IdClass::Cpf, "968.811.342-580"), Verdict::Malformed);
    }
}
