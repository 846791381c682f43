// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with **some** *content* and a [link](/page).\n\n![diagram](diagram.png)\n---\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n";
    base.repeat(size)
}

/// A single long line full of near-miss markers, the slow case for the
/// lazy inline patterns.
#[allow(dead_code)]
pub fn generate_long_line(words: usize) -> String {
    let mut line = String::from("Start");
    for i in 0..words {
        match i % 4 {
            0 => line.push_str(" *open"),
            1 => line.push_str(" [label"),
            2 => line.push_str(" ~~strike"),
            _ => line.push_str(" plain"),
        }
    }
    line
}
