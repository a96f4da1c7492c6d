use distinct::dedup;
use std::fs::read_dir;
use test_utils::load_dedup_fixture;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dedup_matches_expected_for_all_fixture_files() {
        // Directory containing the fixture files
        let test_dir = "tests/test_files";

        // Read all files in the directory
        let files = read_dir(test_dir).expect("Failed to read test files directory");

        let mut checked = 0;
        for file in files {
            let file = file.expect("Failed to read file");
            let file_path = file.path();

            if !file_path.is_file() {
                continue;
            }

            let file_path = file_path.to_str().expect("Non-UTF-8 fixture path");
            let (input, expected) =
                load_dedup_fixture(file_path).expect("Failed to load fixture");

            assert_eq!(
                dedup(&input),
                expected,
                "Fixture mismatch in {}",
                file_path
            );
            checked += 1;
        }

        // Guard against the fixture directory silently going empty.
        assert!(checked > 0, "No fixture files were checked");
    }
}
