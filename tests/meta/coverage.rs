//! Checks that every source file has a unit test mirror and every test file tests something

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::{Path, PathBuf};

    /// Files that only declare modules or wire up an entry point
    fn is_organizational(path: &Path) -> bool {
        matches!(
            path.file_name().and_then(|name| name.to_str()),
            Some("mod.rs" | "lib.rs" | "main.rs")
        )
    }

    fn rust_files(dir: &Path) -> Result<Vec<PathBuf>, io::Error> {
        let mut files = Vec::new();
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.is_dir() {
                files.extend(rust_files(&path)?);
            } else if path.extension().and_then(|ext| ext.to_str()) == Some("rs") {
                files.push(path);
            }
        }
        Ok(files)
    }

    fn relative_sources(dir: &Path) -> BTreeSet<PathBuf> {
        rust_files(dir)
            .unwrap_or_else(|error| panic!("failed to scan {}: {error}", dir.display()))
            .into_iter()
            .filter(|path| !is_organizational(path))
            .filter_map(|path| path.strip_prefix(dir).ok().map(Path::to_path_buf))
            .collect()
    }

    fn report(header: &str, paths: &[&PathBuf]) -> String {
        let lines: Vec<String> = paths
            .iter()
            .map(|path| format!("  - {}", path.display()))
            .collect();
        format!("{header}:\n{}", lines.join("\n"))
    }

    #[test]
    fn test_all_src_files_have_unit_tests() {
        let sources = relative_sources(Path::new("src"));
        let tests = relative_sources(Path::new("tests/unit"));

        let missing: Vec<&PathBuf> = sources.difference(&tests).collect();
        assert!(
            missing.is_empty(),
            "{}",
            report("Source files without tests/unit counterparts", &missing)
        );
    }

    #[test]
    fn test_all_unit_tests_have_src_counterparts() {
        let sources = relative_sources(Path::new("src"));
        let tests = relative_sources(Path::new("tests/unit"));

        let orphaned: Vec<&PathBuf> = tests.difference(&sources).collect();
        assert!(
            orphaned.is_empty(),
            "{}",
            report("Unit test files without src counterparts", &orphaned)
        );
    }

    #[test]
    fn test_all_test_files_contain_tests() {
        let files = rust_files(Path::new("tests"))
            .unwrap_or_else(|error| panic!("failed to scan tests: {error}"));

        let mut empty = Vec::new();
        for path in files.iter().filter(|path| !is_organizational(path)) {
            let content = fs::read_to_string(path)
                .unwrap_or_else(|error| panic!("failed to read {}: {error}", path.display()));
            if !content.contains("#[test]") {
                empty.push(path);
            }
        }

        assert!(
            empty.is_empty(),
            "{}",
            report("Test files without any #[test] functions", &empty)
        );
    }

    #[test]
    fn test_all_test_files_have_module_docs() {
        let files = rust_files(Path::new("tests"))
            .unwrap_or_else(|error| panic!("failed to scan tests: {error}"));

        let mut undocumented = Vec::new();
        for path in files
            .iter()
            .filter(|path| path.file_name().and_then(|name| name.to_str()) != Some("mod.rs"))
        {
            let content = fs::read_to_string(path)
                .unwrap_or_else(|error| panic!("failed to read {}: {error}", path.display()));
            if !content.starts_with("//!") {
                undocumented.push(path);
            }
        }

        assert!(
            undocumented.is_empty(),
            "{}",
            report("Test files without a //! module comment", &undocumented)
        );
    }
}
