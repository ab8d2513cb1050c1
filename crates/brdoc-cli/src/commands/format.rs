//! Format and clean command implementations.

use brdoc_core::{clean, format, IdClass};

pub fn run_format(class: IdClass, text: String) -> Result<(), Box<dyn std::error::Error>> {
    let formatted = format(class, &text)?;
    println!("{}", formatted);
    Ok(())
}

pub fn run_clean(class: IdClass, text: String) -> Result<(), Box<dyn std::error::Error>> {
    let digits = clean(&text);
    let expected = class.schema().total_width;
    if digits.len() != expected {
        tracing::warn!(%class, found = digits.len(), expected, "unexpected digit count");
    }
    println!("{}", digits);
    Ok(())
}
