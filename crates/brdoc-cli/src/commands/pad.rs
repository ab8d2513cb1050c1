//! Pad command implementation.

use brdoc_core::{pad_text, IdClass};

pub fn run(class: IdClass, number: String, validate: bool) -> Result<(), Box<dyn std::error::Error>> {
    let padded = pad_text(class, &number, validate)?;
    println!("{}", padded);
    Ok(())
}
