use anyhow::Context;
use oad_diff::{diff_documents, render};
use oad_model::load_document;
use tracing::debug;

use crate::cli::Cli;
use crate::config::CliConfig;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let output = diff_command(&cli)?;
    println!("{output}");
    Ok(())
}

/// Exit status for a finished run: 0 on success, 1 on any failure.
pub fn exit_code<T>(result: &anyhow::Result<T>) -> u8 {
    match result {
        Ok(_) => 0,
        Err(_) => 1,
    }
}

/// Load both documents, diff them, and render the result.
fn diff_command(cli: &Cli) -> anyhow::Result<String> {
    let config = match &cli.config {
        Some(path) => CliConfig::load(path)?,
        None => CliConfig::default(),
    };
    let options = config.render_options(cli);
    debug!(?options, "resolved render options");

    let before = load_document(&cli.before)
        .with_context(|| format!("failed to load {}", cli.before.display()))?;
    let after = load_document(&cli.after)
        .with_context(|| format!("failed to load {}", cli.after.display()))?;

    let diff = diff_documents(&before, &after);
    Ok(render(&diff, &options))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::path::Path;

    const BEFORE: &str = r#"
openapi: 3.1.0
info:
  title: Pet Store
  version: 1.0.0
paths:
  /pets:
    get:
      summary: List pets
      responses:
        "200":
          description: A list of pets
"#;

    const AFTER: &str = r#"
openapi: 3.1.0
info:
  title: Pet Store
  version: 1.1.0
paths:
  /pets:
    get:
      summary: List all pets
      responses:
        "200":
          description: A list of pets
"#;

    fn write(dir: &Path, name: &str, text: &str) -> String {
        let path = dir.join(name);
        std::fs::write(&path, text).unwrap();
        path.display().to_string()
    }

    fn run(args: &[&str]) -> anyhow::Result<String> {
        let mut argv = vec!["openapi-diff"];
        argv.extend_from_slice(args);
        diff_command(&Cli::try_parse_from(argv).unwrap())
    }

    #[test]
    fn plaintext_diff() {
        let dir = tempfile::tempdir().unwrap();
        let before = write(dir.path(), "before.yaml", BEFORE);
        let after = write(dir.path(), "after.yaml", AFTER);

        let out = run(&[&before, &after]).unwrap();
        assert!(out.starts_with("Changed Pet Store"));
        assert!(out.contains("Updated API version from '1.0.0' to '1.1.0'"));
        assert!(out.contains("Updated summary from 'List pets' to 'List all pets'"));
        assert!(!out.contains("No Difference"));
    }

    #[test]
    fn stats_diff() {
        let dir = tempfile::tempdir().unwrap();
        let before = write(dir.path(), "before.yaml", BEFORE);
        let after = write(dir.path(), "after.yaml", AFTER);

        let out = run(&[&before, &after, "--format", "stats"]).unwrap();
        assert_eq!(out, "Additions: 0\nRemovals: 0\nChanges: 2");
    }

    #[test]
    fn identical_documents() {
        let dir = tempfile::tempdir().unwrap();
        let before = write(dir.path(), "before.yaml", BEFORE);

        let out = run(&[&before, &before]).unwrap();
        assert_eq!(out, "No Difference to Pet Store");
    }

    #[test]
    fn config_file_sets_style() {
        let dir = tempfile::tempdir().unwrap();
        let before = write(dir.path(), "before.yaml", BEFORE);
        let after = write(dir.path(), "after.yaml", AFTER);
        let config = write(dir.path(), "diff.toml", "style = \"markdown\"\n");

        let out = run(&[&before, &after, "--config", &config]).unwrap();
        assert!(out.starts_with("# Changed Pet Store"));
    }

    #[test]
    fn load_failure_names_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let before = write(dir.path(), "before.yaml", BEFORE);
        let missing = dir.path().join("missing.yaml").display().to_string();

        let result = run(&[&before, &missing]);
        assert_eq!(exit_code(&result), 1);
        let err = result.unwrap_err();
        assert!(format!("{err:#}").contains("missing.yaml"));
    }

    #[test]
    fn successful_run_exits_zero() {
        let dir = tempfile::tempdir().unwrap();
        let before = write(dir.path(), "before.yaml", BEFORE);
        let after = write(dir.path(), "after.yaml", AFTER);

        assert_eq!(exit_code(&run(&[&before, &after])), 0);
    }

    #[test]
    fn malformed_document_exits_one() {
        let dir = tempfile::tempdir().unwrap();
        let before = write(dir.path(), "before.yaml", BEFORE);
        let broken = write(dir.path(), "broken.json", "{ \"openapi\": ");

        let result = run(&[&before, &broken]);
        assert_eq!(exit_code(&result), 1);
        assert!(format!("{:#}", result.unwrap_err()).contains("broken.json"));
    }
}
