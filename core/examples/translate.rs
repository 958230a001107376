//! Small end-to-end translation demo using an in-memory rule table.
//!
//! Run with: cargo run --example translate

use libvoynich_core::{Direction, Translator};

fn main() {
    let rules: Vec<(String, String)> = [
        ("qo", "Q"),
        ("ch", "C"),
        ("sh", "S"),
        ("dy", "D"),
        ("o", "0"),
        ("y", "1"),
    ]
    .iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();

    let mut translator = Translator::new(&rules, Direction::Forward);
    println!("{translator}");

    let text = "qochy shody.qody";
    let encoded = translator.translate(text);
    println!("  {text} -> {encoded}");

    translator.reverse_direction();
    let decoded = translator.translate(&encoded);
    println!("  {encoded} -> {decoded}");
}
