//! End-to-end render tests.
//!
//! Exercises the full pipeline against real files in a scratch
//! directory: template and data directory in, substituted README out.

use std::fs;

use pretty_assertions::assert_eq;
use tempfile::TempDir;

use csv2readme::commands::{execute_render, RenderOptions};
use csv2readme::{available_sources, substitute, RenderError};

/// Lay out a project directory: README.template.md plus a data/
/// subdirectory of CSV files.
fn project(template: &str, data_files: &[(&str, &str)]) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("README.template.md"), template).unwrap();
    let data = dir.path().join("data");
    fs::create_dir(&data).unwrap();
    for (name, content) in data_files {
        fs::write(data.join(name), content).unwrap();
    }
    dir
}

fn options(dir: &TempDir) -> RenderOptions {
    RenderOptions {
        template: dir.path().join("README.template.md"),
        data_dir: dir.path().join("data"),
        output: dir.path().join("README.md"),
        dry_run: false,
        json: false,
    }
}

// =============================================================================
// Full pipeline
// =============================================================================

mod pipeline_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_writes_fully_substituted_readme() {
        let dir = project(
            "# My Project\n\n## People\n\n{{ people }}\n\n## Tools\n\n{{ tools }}\n",
            &[
                ("people.csv", "name,role\nalice,maintainer\nbob,docs\n"),
                ("tools.csv", "tool,purpose\ncargo,build\n"),
            ],
        );

        execute_render(options(&dir)).unwrap();

        let readme = fs::read_to_string(dir.path().join("README.md")).unwrap();
        assert_eq!(
            readme,
            "# My Project\n\n\
             ## People\n\n\
             | name  | role       |\n\
             | ----- | ---------- |\n\
             | alice | maintainer |\n\
             | bob   | docs       |\n\n\
             ## Tools\n\n\
             | tool  | purpose |\n\
             | ----- | ------- |\n\
             | cargo | build   |\n"
        );
    }

    #[test]
    fn test_unmatched_placeholder_survives_verbatim() {
        let dir = project(
            "{{ people }}\n\n{{ roadmap }}\n",
            &[("people.csv", "name\nalice\n")],
        );

        execute_render(options(&dir)).unwrap();

        let readme = fs::read_to_string(dir.path().join("README.md")).unwrap();
        assert!(readme.contains("| alice |"));
        assert!(readme.contains("{{ roadmap }}"));
    }

    #[test]
    fn test_template_without_placeholders_copies_through() {
        let dir = project("# Plain\n\nNothing to do here.\n", &[]);

        execute_render(options(&dir)).unwrap();

        let readme = fs::read_to_string(dir.path().join("README.md")).unwrap();
        assert_eq!(readme, "# Plain\n\nNothing to do here.\n");
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let dir = project("{{ people }}\n", &[("people.csv", "name\nalice\n")]);
        let opts = RenderOptions {
            dry_run: true,
            ..options(&dir)
        };

        execute_render(opts).unwrap();

        assert!(!dir.path().join("README.md").exists());
    }

    #[test]
    fn test_multiline_cell_stays_on_one_table_row() {
        let dir = project(
            "{{ notes }}\n",
            &[("notes.csv", "id,note\n1,\"line one\nline two\"\n")],
        );

        execute_render(options(&dir)).unwrap();

        let readme = fs::read_to_string(dir.path().join("README.md")).unwrap();
        assert!(readme.contains("line one<br>line two"));
    }
}

// =============================================================================
// Failure modes
// =============================================================================

mod error_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_missing_template_aborts() {
        let dir = project("unused", &[]);
        let opts = RenderOptions {
            template: dir.path().join("no-such-template.md"),
            ..options(&dir)
        };

        let err = execute_render(opts).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<RenderError>(),
            Some(RenderError::TemplateRead { .. })
        ));
    }

    #[test]
    fn test_missing_data_directory_aborts() {
        let dir = project("{{ people }}", &[]);
        let opts = RenderOptions {
            data_dir: dir.path().join("no-such-data"),
            ..options(&dir)
        };

        let err = execute_render(opts).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<RenderError>(),
            Some(RenderError::DataDir { .. })
        ));
    }

    #[test]
    fn test_malformed_csv_for_matched_placeholder_aborts() {
        let dir = project("{{ broken }}", &[("broken.csv", "a,b\n1,2,3\n")]);

        let err = execute_render(options(&dir)).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<RenderError>(),
            Some(RenderError::CsvData { .. })
        ));
        assert!(!dir.path().join("README.md").exists());
    }

    #[test]
    fn test_header_only_csv_for_matched_placeholder_aborts() {
        let dir = project("{{ empty }}", &[("empty.csv", "a,b\n")]);

        let err = execute_render(options(&dir)).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<RenderError>(),
            Some(RenderError::EmptyTable { .. })
        ));
    }
}

// =============================================================================
// Substitution report
// =============================================================================

mod report_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_report_lists_substituted_and_skipped_in_scan_order() {
        let dir = project(
            "{{ b }} {{ missing }} {{ a }}",
            &[("a.csv", "x\n1\n"), ("b.csv", "y\n2\n")],
        );
        let sources = available_sources(&dir.path().join("data")).unwrap();
        let template = fs::read_to_string(dir.path().join("README.template.md")).unwrap();

        let (_, report) = substitute(&template, &sources).unwrap();

        assert_eq!(report.substituted, ["b", "a"]);
        assert_eq!(report.skipped, ["missing"]);
    }

    #[test]
    fn test_report_serializes_for_json_output() {
        let dir = project("{{ a }} {{ gone }}", &[("a.csv", "x\n1\n")]);
        let sources = available_sources(&dir.path().join("data")).unwrap();
        let template = fs::read_to_string(dir.path().join("README.template.md")).unwrap();

        let (_, report) = substitute(&template, &sources).unwrap();
        let value = serde_json::to_value(&report).unwrap();

        assert_eq!(value["substituted"][0], "a");
        assert_eq!(value["skipped"][0], "gone");
    }
}
