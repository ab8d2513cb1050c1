//! Check-digits command implementation.

use brdoc_core::{check_digits, IdClass};

pub fn run(class: IdClass, base: String) -> Result<(), Box<dyn std::error::Error>> {
    let digits = check_digits(class, &base)?;
    let rendered: Vec<String> = digits.iter().map(|d| d.to_string()).collect();
    println!("{}", rendered.join(" "));
    Ok(())
}
