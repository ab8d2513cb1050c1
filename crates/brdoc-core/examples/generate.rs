use brdoc_core::{random, IdClass};

fn main() {
    for class in IdClass::ALL {
        println!("{:<5} {}", class, random(class, true));
    }
}
