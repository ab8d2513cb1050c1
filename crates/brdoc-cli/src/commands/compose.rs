//! Compose command implementation.

use brdoc_core::{cnpj_from_firm_id, format_cnpj};

pub fn run(
    firm: String,
    establishment: String,
    formatted: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let cnpj = cnpj_from_firm_id(&firm, Some(&establishment))?;
    if formatted {
        println!("{}", format_cnpj(&cnpj)?);
    } else {
        println!("{}", cnpj);
    }
    Ok(())
}
