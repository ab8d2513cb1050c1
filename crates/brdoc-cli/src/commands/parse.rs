//! Parse command implementation.

use brdoc_core::{parse, parse_cnpj, IdClass};

use crate::output;

pub fn run(
    class: IdClass,
    text: String,
    formatted: bool,
    json_output: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let value = match class {
        IdClass::Cnpj => serde_json::to_value(parse_cnpj(&text, formatted)?)?,
        _ => serde_json::to_value(parse(class, &text, formatted)?)?,
    };

    if json_output {
        println!("{}", output::format_json(&value));
    } else {
        output::print_fields(&value);
    }
    Ok(())
}
