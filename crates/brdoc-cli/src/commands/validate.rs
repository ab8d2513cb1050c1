//! Validate command implementation.

use brdoc_core::{clean, validate, IdClass};
use serde_json::json;

pub fn run(class: IdClass, text: String, json_output: bool) -> Result<(), Box<dyn std::error::Error>> {
    let valid = validate(class, &text);

    if json_output {
        let result = json!({
            "class": class,
            "input": text,
            "canonical": clean(&text),
            "valid": valid,
        });
        println!("{}", serde_json::to_string(&result)?);
    } else {
        println!("{}", if valid { "valid" } else { "invalid" });
    }

    if !valid {
        std::process::exit(1);
    }
    Ok(())
}
