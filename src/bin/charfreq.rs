use std::{env, fs, process};

fn main() {
    let args: Vec<String> = env::args().collect();

    // With no argument the program counts its own source.
    let contents = match args.get(1) {
        Some(path) => match fs::read(path) {
            Ok(bytes) => bytes,
            Err(error) => {
                println!("Failed to open {path}: {error}");
                process::exit(1);
            }
        },
        None => include_bytes!("charfreq.rs").to_vec(),
    };

    for (character, count) in count_frequencies(&contents) {
        println!("{character} : {count}");
    }
}

/// Counts every byte except space, tab, and newline, keeping entries in
/// first-appearance order.
fn count_frequencies(bytes: &[u8]) -> Vec<(char, usize)> {
    let mut counts: Vec<(char, usize)> = Vec::new();

    for &byte in bytes {
        if byte == b' ' || byte == b'\t' || byte == b'\n' {
            continue;
        }

        let character = byte as char;
        match counts.iter_mut().find(|entry| entry.0 == character) {
            Some(entry) => entry.1 += 1,
            None => counts.push((character, 1)),
        }
    }

    counts
}

#[cfg(test)]
mod tests {
    use super::count_frequencies;

    #[test]
    fn test_count_frequencies_keeps_first_appearance_order() {
        let counts = count_frequencies(b"abcabca");
        assert_eq!(counts, vec![('a', 3), ('b', 2), ('c', 2)]);
    }

    #[test]
    fn test_count_frequencies_skips_blank_characters() {
        let counts = count_frequencies(b"a b\tc\nd\r");
        assert_eq!(counts, vec![('a', 1), ('b', 1), ('c', 1), ('d', 1), ('\r', 1)]);
    }
}
