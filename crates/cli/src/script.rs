use anyhow::Context;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScriptActionKind {
    Play,
    Discard,
    Restart,
}

/// One scripted request. `indices` point into the hand as it stands when the
/// action runs.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ScriptAction {
    pub action: ScriptActionKind,
    #[serde(default)]
    pub indices: Vec<usize>,
}

#[derive(Debug, Clone)]
pub struct Script {
    pub seed: Option<u64>,
    pub actions: Vec<ScriptAction>,
}

#[derive(Debug, Clone, Deserialize)]
struct ScriptFile {
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    actions: Vec<ScriptAction>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum ScriptPayload {
    Script(ScriptFile),
    Actions(Vec<ScriptAction>),
}

pub fn load_script(path: &Path) -> anyhow::Result<Script> {
    let body = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    parse_script(&body).with_context(|| format!("parse {}", path.display()))
}

pub fn parse_script(body: &str) -> anyhow::Result<Script> {
    let payload: ScriptPayload = serde_json::from_str(body)?;
    let script = match payload {
        ScriptPayload::Script(file) => Script {
            seed: file.seed,
            actions: file.actions,
        },
        ScriptPayload::Actions(actions) => Script {
            seed: None,
            actions,
        },
    };
    Ok(script)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    #[test]
    fn parses_bare_action_array() {
        let script = parse_script(
            r#"[
  {"action":"play","indices":[0,1,2]},
  {"action":"restart"}
]"#,
        )
        .expect("script");
        assert_eq!(script.seed, None);
        assert_eq!(script.actions.len(), 2);
        assert_eq!(script.actions[0].indices, vec![0, 1, 2]);
        assert_eq!(script.actions[1].action, ScriptActionKind::Restart);
        assert!(script.actions[1].indices.is_empty());
    }

    #[test]
    fn parses_script_object_with_seed() {
        let script = parse_script(
            r#"{"seed":99,"actions":[{"action":"discard","indices":[4]}]}"#,
        )
        .expect("script");
        assert_eq!(script.seed, Some(99));
        assert_eq!(script.actions[0].action, ScriptActionKind::Discard);
    }

    #[test]
    fn rejects_unknown_action() {
        assert!(parse_script(r#"[{"action":"shop"}]"#).is_err());
    }

    #[test]
    fn load_reads_from_disk() {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("time")
            .as_nanos();
        let file: PathBuf = std::env::temp_dir().join(format!(
            "icelatro_cli_script_test_{}_{}.json",
            std::process::id(),
            nanos
        ));
        fs::write(&file, r#"{"seed":5,"actions":[]}"#).expect("write");
        let script = load_script(&file).expect("load");
        assert_eq!(script.seed, Some(5));
        assert!(script.actions.is_empty());
        let _ = fs::remove_file(file);
    }
}
