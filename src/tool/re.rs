use std::path::PathBuf;
use std::process::{Command, Output};

use super::{ToolError, WorkLog};
use crate::config::NudgeConfig;
use crate::core::bullet::{HomeLookup, resolve_bullet};
use crate::core::work_item::{WorkItem, parse_work_log};

/// Drives the `re` work-log tool. `EDITOR` is overridden on each child so the tool never
/// opens an interactive editor: a printing editor dumps the log, an echoing one reveals its path.
#[derive(Debug, Clone)]
pub struct ReTool {
    program: PathBuf,
    header_lines: usize,
    dump_editor: String,
    path_editor: String,
    rc_paths: Vec<PathBuf>,
    home_lookup: HomeLookup,
}

impl ReTool {
    pub fn from_config(config: &NudgeConfig) -> Result<Self, ToolError> {
        let program =
            which::which(&config.tool).map_err(|_| ToolError::NotFound(config.tool.clone()))?;
        log::info!("Using work-log tool at {}", program.display());
        Ok(Self {
            program,
            header_lines: config.header_lines,
            dump_editor: config.dump_editor.clone(),
            path_editor: config.path_editor.clone(),
            rc_paths: config.rc_paths.clone(),
            home_lookup: config.home_lookup,
        })
    }

    pub fn program(&self) -> &std::path::Path {
        &self.program
    }

    fn run(&self, editor: &str, args: &[&str]) -> Result<String, ToolError> {
        let program = self.program.display().to_string();
        log::debug!("Running {} {:?} with EDITOR={}", program, args, editor);

        let Output { status, stdout, stderr } = Command::new(&self.program)
            .args(args)
            .env("EDITOR", editor)
            .output()
            .map_err(|source| ToolError::Spawn { program: program.clone(), source })?;

        if !status.success() {
            return Err(ToolError::Failed {
                program,
                status,
                stderr: String::from_utf8_lossy(&stderr).trim().to_string(),
            });
        }
        Ok(String::from_utf8_lossy(&stdout).into_owned())
    }
}

impl WorkLog for ReTool {
    fn dump(&self) -> Result<String, ToolError> {
        self.run(&self.dump_editor, &[])
    }

    fn list_items(&self) -> Result<Vec<WorkItem>, ToolError> {
        let output = self.dump()?;
        let bullet = resolve_bullet(&self.rc_paths, self.home_lookup);
        let items = parse_work_log(&output, self.header_lines, bullet);
        log::debug!("Work log has {} in-progress item(s) (bullet '{}')", items.len(), bullet);
        Ok(items)
    }

    fn append_item(&self, text: &str) -> Result<(), ToolError> {
        self.run(&self.dump_editor, &[text])?;
        log::info!("Added work item: {}", text);
        Ok(())
    }

    fn discover_target_path(&self) -> Result<PathBuf, ToolError> {
        let output = self.run(&self.path_editor, &[])?;
        output
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .last()
            .map(PathBuf::from)
            .ok_or_else(|| ToolError::NoTargetPath(self.program.display().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::os::unix::fs::PermissionsExt;

    const FAKE_RE: &str = r#"#!/bin/sh
log="$(dirname "$0")/log.txt"
if [ -n "$1" ]; then
    echo "* $1" >> "$log"
    exit 0
fi
echo "Work log"
"$EDITOR" "$log"
"#;

    fn fake_tool(script: &str, log: &str) -> (tempfile::TempDir, NudgeConfig) {
        let dir = tempfile::tempdir().unwrap();

        let program = dir.path().join("re");
        std::fs::write(&program, script).unwrap();
        std::fs::set_permissions(&program, std::fs::Permissions::from_mode(0o755)).unwrap();
        std::fs::write(dir.path().join("log.txt"), log).unwrap();

        let rc = dir.path().join("rerc");
        std::fs::write(&rc, "BULLET => '*',\n").unwrap();

        let config = NudgeConfig {
            tool: program.display().to_string(),
            rc_paths: vec![rc],
            ..NudgeConfig::default()
        };
        (dir, config)
    }

    #[test]
    fn missing_tool_is_reported() {
        let config = NudgeConfig {
            tool: "nudge-no-such-tool-xyz".into(),
            ..NudgeConfig::default()
        };
        let err = ReTool::from_config(&config).unwrap_err();
        assert!(matches!(err, ToolError::NotFound(ref name) if name == "nudge-no-such-tool-xyz"));
    }

    #[test]
    fn bare_names_resolve_through_path() {
        let config = NudgeConfig {
            tool: "sh".into(),
            ..NudgeConfig::default()
        };
        let tool = ReTool::from_config(&config).unwrap();
        assert!(tool.program().is_absolute());
        assert!(tool.program().ends_with("sh"));
    }

    #[test]
    fn explicit_path_is_kept() {
        let (dir, config) = fake_tool(FAKE_RE, "");
        let tool = ReTool::from_config(&config).unwrap();
        assert_eq!(tool.program(), dir.path().join("re"));
    }

    #[test]
    fn lists_bulleted_items() {
        let (_dir, config) = fake_tool(FAKE_RE, "* Write report\n- misc note\n* Buy milk\n");
        let tool = ReTool::from_config(&config).unwrap();

        let items = tool.list_items().unwrap();
        assert_eq!(items, vec![WorkItem::new("Write report"), WorkItem::new("Buy milk")]);
        assert!(tool.dump().unwrap().starts_with("Work log\n"));
    }

    #[test]
    fn append_then_list() {
        let (_dir, config) = fake_tool(FAKE_RE, "");
        let tool = ReTool::from_config(&config).unwrap();

        tool.append_item("Call the plumber").unwrap();
        assert_eq!(tool.list_items().unwrap(), vec![WorkItem::new("Call the plumber")]);
    }

    #[test]
    fn discovers_backing_file() {
        let (dir, config) = fake_tool(FAKE_RE, "");
        let tool = ReTool::from_config(&config).unwrap();
        assert_eq!(tool.discover_target_path().unwrap(), dir.path().join("log.txt"));
    }

    #[test]
    fn failing_tool_surfaces_stderr() {
        let (_dir, config) = fake_tool("#!/bin/sh\necho broken >&2\nexit 3\n", "");
        let tool = ReTool::from_config(&config).unwrap();
        match tool.list_items() {
            Err(ToolError::Failed { stderr, .. }) => assert_eq!(stderr, "broken"),
            other => panic!("expected failure, got {:?}", other),
        }
    }

    #[test]
    fn silent_tool_has_no_path() {
        let (_dir, config) = fake_tool("#!/bin/sh\nexit 0\n", "");
        let tool = ReTool::from_config(&config).unwrap();
        assert!(matches!(tool.discover_target_path(), Err(ToolError::NoTargetPath(_))));
    }
}
