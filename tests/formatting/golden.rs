#[cfg(test)]
mod examples {
    use std::fs;
    use std::path::Path;

    use beautify::formatting::format;
    use beautify::language::Grammar;

    /// Golden test for the format command
    ///
    /// This test:
    /// 1. Reads all files from tests/golden/
    /// 2. Runs the equivalent of the `format` command on each file
    /// 3. Compares the formatted output with the original input
    /// 4. Shows clear diffs when differences are found
    ///
    /// The files are expected to be in their canonical formatted form. If
    /// one fails this test, either a scanner or the emitter is wrong (a bug
    /// that needs to be fixed!) or possibly the sample itself is wrong and
    /// needs reformatting.

    /// Simple diff function to show line-by-line differences
    fn show_diff(original: &str, formatted: &str, file_path: &Path) {
        let original_lines: Vec<&str> = original
            .lines()
            .collect();
        let formatted_lines: Vec<&str> = formatted
            .lines()
            .collect();

        let max_lines = original_lines
            .len()
            .max(formatted_lines.len());

        println!("\nDifferences found in file: {:?}", file_path);
        println!("--- Original");
        println!("+++ Formatted");

        for i in 0..max_lines {
            let orig_line = original_lines
                .get(i)
                .unwrap_or(&"");
            let fmt_line = formatted_lines
                .get(i)
                .unwrap_or(&"");

            if orig_line != fmt_line {
                println!("@@ Line {} @@", i + 1);
                println!("- {}", orig_line);
                println!("+ {}", fmt_line);
            }
        }
    }

    #[test]
    fn ensure_canonical_output() {
        let dir = Path::new("tests/golden");

        assert!(dir.exists(), "golden directory missing");

        let entries = fs::read_dir(dir).expect("Failed to read golden directory");

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.expect("Failed to read directory entry");
            files.push(entry.path());
        }

        assert!(!files.is_empty(), "No samples found in golden directory");

        let mut failures = Vec::new();

        for file in &files {
            let grammar = Grammar::from_extension(file)
                .unwrap_or_else(|| panic!("No grammar for golden file {:?}", file));

            let original = fs::read_to_string(file)
                .unwrap_or_else(|e| panic!("Failed to load file {:?}: {:?}", file, e));

            let formatted = format(&original, grammar);

            // The emitter trims the overall result, so compare against the
            // sample minus its trailing newline.
            if formatted != original.trim_end() {
                failures.push((
                    file.clone(),
                    original,
                    formatted,
                ));
            }
        }

        if !failures.is_empty() {
            for (file, original, formatted) in &failures {
                show_diff(original, formatted, file);
            }

            panic!("All golden samples must format unchanged");
        }
    }
}
