//! Random command implementation.

use brdoc_core::{random_with, IdClass};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub fn run(
    class: IdClass,
    count: u32,
    formatted: bool,
    seed: Option<u64>,
) -> Result<(), Box<dyn std::error::Error>> {
    match seed {
        Some(seed) => emit(class, count, formatted, &mut StdRng::seed_from_u64(seed)),
        None => emit(class, count, formatted, &mut rand::rng()),
    }
    Ok(())
}

fn emit<R: Rng + ?Sized>(class: IdClass, count: u32, formatted: bool, rng: &mut R) {
    for _ in 0..count {
        println!("{}", random_with(class, rng, formatted));
    }
}
