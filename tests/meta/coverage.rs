//! Checks that `tests/unit` mirrors `src` one file per module

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::Path;

    const SRC_DIR: &str = "src";
    const UNIT_DIR: &str = "tests/unit";
    const TESTS_DIR: &str = "tests";

    /// Source and unit test paths, relative to their roots
    fn mirrored_paths() -> (BTreeSet<String>, BTreeSet<String>) {
        let src_dir = Path::new(SRC_DIR);
        let unit_dir = Path::new(UNIT_DIR);
        assert!(src_dir.is_dir(), "missing {SRC_DIR} directory");

        let src = relative_paths(src_dir, src_dir)
            .unwrap_or_else(|error| panic!("failed to scan {SRC_DIR}: {error}"));
        let unit = relative_paths(unit_dir, unit_dir).unwrap_or_default();
        (src, unit)
    }

    fn is_module_file(path: &str) -> bool {
        path == "main.rs" || path == "lib.rs" || path.ends_with("mod.rs")
    }

    #[test]
    fn test_every_source_module_has_unit_tests() {
        let (src, unit) = mirrored_paths();

        let missing: Vec<String> = src
            .iter()
            .filter(|path| !is_module_file(path) && !unit.contains(*path))
            .map(|path| format!("  - src/{path} -> {UNIT_DIR}/{path}"))
            .collect();

        assert!(
            missing.is_empty(),
            "source files without unit test counterparts:\n{}",
            missing.join("\n")
        );
    }

    #[test]
    fn test_every_unit_test_has_source_module() {
        let (src, unit) = mirrored_paths();

        let orphaned: Vec<String> = unit
            .iter()
            .filter(|path| !path.ends_with("mod.rs") && !src.contains(*path))
            .map(|path| format!("  - {UNIT_DIR}/{path} -> src/{path} (missing)"))
            .collect();

        assert!(
            orphaned.is_empty(),
            "unit test files without source modules:\n{}",
            orphaned.join("\n")
        );
    }

    #[test]
    fn test_every_test_file_declares_tests() {
        let tests_dir = Path::new(TESTS_DIR);
        let mut empty = Vec::new();

        collect_files_without_tests(tests_dir, &mut empty)
            .unwrap_or_else(|error| panic!("failed to scan {TESTS_DIR}: {error}"));

        assert!(
            empty.is_empty(),
            "test files without any #[test] functions:\n{}",
            empty.join("\n")
        );
    }

    // A harness root resolves `mod x;` beside itself, so every child of its
    // same-named directory needs an explicit `#[path]`
    #[test]
    fn test_harness_roots_point_at_their_directories() {
        let mut undeclared = Vec::new();

        for name in ["unit", "meta"] {
            let root = Path::new(TESTS_DIR).join(format!("{name}.rs"));
            let harness = fs::read_to_string(&root)
                .unwrap_or_else(|error| panic!("failed to read {}: {error}", root.display()));

            let entries = fs::read_dir(Path::new(TESTS_DIR).join(name))
                .unwrap_or_else(|error| panic!("failed to scan tests/{name}: {error}"));
            for entry in entries.flatten() {
                let path = entry.path();
                let child = entry.file_name().to_string_lossy().to_string();

                let target = if path.is_dir() {
                    format!("{name}/{child}/mod.rs")
                } else if path.extension().is_some_and(|ext| ext == "rs") {
                    format!("{name}/{child}")
                } else {
                    continue;
                };

                if !harness.contains(&format!("#[path = \"{target}\"]")) {
                    undeclared.push(format!("  - {} -> {target}", root.display()));
                }
            }
        }

        assert!(
            undeclared.is_empty(),
            "harness roots missing #[path] declarations:\n{}",
            undeclared.join("\n")
        );
    }

    fn relative_paths(dir: &Path, base: &Path) -> io::Result<BTreeSet<String>> {
        let mut paths = BTreeSet::new();
        if !dir.is_dir() {
            return Ok(paths);
        }

        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            let relative = path
                .strip_prefix(base)
                .map_err(io::Error::other)?
                .to_string_lossy()
                .to_string();

            if path.is_dir() {
                paths.extend(relative_paths(&path, base)?);
                paths.insert(relative);
            } else if path.extension().is_some_and(|ext| ext == "rs") {
                paths.insert(relative);
            }
        }

        Ok(paths)
    }

    // Harness files such as `tests/unit.rs` only declare the modules in
    // their same-named directory
    fn collect_files_without_tests(dir: &Path, empty: &mut Vec<String>) -> io::Result<()> {
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();

            if path.is_dir() {
                collect_files_without_tests(&path, empty)?;
                continue;
            }
            if path.extension().is_none_or(|ext| ext != "rs") {
                continue;
            }

            let is_mod = path.file_name().is_some_and(|name| name == "mod.rs");
            let is_harness = path.with_extension("").is_dir();
            if is_mod || is_harness {
                continue;
            }

            if !fs::read_to_string(&path)?.contains("#[test]") {
                empty.push(format!("  - {}", path.display()));
            }
        }

        Ok(())
    }
}
