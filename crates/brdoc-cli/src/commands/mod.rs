pub mod check;
pub mod check_digits;
pub mod compose;
pub mod format;
pub mod generate;
pub mod pad;
pub mod parse;
pub mod validate;
