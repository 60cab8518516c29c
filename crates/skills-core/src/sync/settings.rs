//! Settings document merge (`settings.json`)
//!
//! The destination's settings file belongs to the user except for the
//! top-level `hooks` key, which is rebuilt on every run from the active hook
//! scripts. All other keys are carried through untouched, in their original
//! order.

use serde_json::{Map, Value, json};
use skills_fs::{NormalizedPath, io};

use crate::{Error, Result};

/// File name of the settings document at the destination root
pub const SETTINGS_FILE: &str = "settings.json";

/// Top-level key owned by the engine
pub const HOOKS_KEY: &str = "hooks";

/// Event a hook script is registered for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookEvent {
    PreToolUse,
    Notification,
    Stop,
}

impl HookEvent {
    /// Registration order inside the `hooks` section
    pub const ALL: [HookEvent; 3] = [Self::PreToolUse, Self::Notification, Self::Stop];

    pub fn key(self) -> &'static str {
        match self {
            Self::PreToolUse => "PreToolUse",
            Self::Notification => "Notification",
            Self::Stop => "Stop",
        }
    }

    /// Event for a hook script, by base name without `.sh`.
    ///
    /// Scripts with any other name are still synced as files but never
    /// registered.
    pub fn for_hook(stem: &str) -> Option<Self> {
        match stem {
            "block-main-commit" => Some(Self::PreToolUse),
            "notify-waiting" => Some(Self::Notification),
            "notify-stop" => Some(Self::Stop),
            _ => None,
        }
    }

    /// Tool matcher the registration is scoped to
    fn matcher(self) -> Option<&'static str> {
        match self {
            Self::PreToolUse => Some("Bash"),
            Self::Notification | Self::Stop => None,
        }
    }
}

/// Shell command registered for a synced hook script
pub fn hook_command(file_name: &str) -> String {
    format!("bash $HOME/.claude/hooks/{file_name}")
}

/// Outcome of merging the hook section into a destination's settings
#[derive(Debug, Clone, PartialEq)]
pub struct SettingsMerge {
    /// Full document after the rebuild
    pub document: Value,
    /// Whether a settings file was present
    pub existed: bool,
    /// Whether the rebuild changed the serialized document
    pub changed: bool,
}

impl SettingsMerge {
    /// Pretty-printed JSON as written to disk
    pub fn render(&self, path: &NormalizedPath) -> Result<String> {
        serde_json::to_string_pretty(&self.document).map_err(|source| Error::Settings {
            path: path.to_native(),
            source,
        })
    }
}

/// Read the settings at `path` and rebuild its hook section for `hook_files`.
///
/// A missing file starts from an empty object. Content that does not decode
/// as JSON (including non-UTF-8 bytes), or JSON that is not an object, is
/// replaced by an empty object rather than failing the run.
pub fn merge_settings(path: &NormalizedPath, hook_files: &[String]) -> Result<SettingsMerge> {
    let existed = path.is_file();
    let original = if existed {
        let content = io::read_bytes(path)?;
        match serde_json::from_slice::<Value>(&content) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(path = %path, error = %e, "Invalid settings JSON, starting fresh");
                json!({})
            }
        }
    } else {
        json!({})
    };

    let mut settings = match &original {
        Value::Object(map) => map.clone(),
        _ => Map::new(),
    };
    rebuild_hooks(&mut settings, hook_files);
    let document = Value::Object(settings);

    let changed = original.to_string() != document.to_string();
    Ok(SettingsMerge {
        document,
        existed,
        changed,
    })
}

/// Replace the `hooks` key of `settings` with registrations for `hook_files`.
///
/// Events with no registrations are omitted; if none remain the key is
/// removed entirely.
pub fn rebuild_hooks(settings: &mut Map<String, Value>, hook_files: &[String]) {
    let mut section = Map::new();

    for event in HookEvent::ALL {
        let entries: Vec<Value> = hook_files
            .iter()
            .filter(|file| {
                let stem = file.strip_suffix(".sh").unwrap_or(file);
                HookEvent::for_hook(stem) == Some(event)
            })
            .map(|file| registration(event, file))
            .collect();

        if !entries.is_empty() {
            section.insert(event.key().to_string(), Value::Array(entries));
        }
    }

    // Existing keys keep their position; a new section goes last
    if section.is_empty() {
        settings.shift_remove(HOOKS_KEY);
    } else {
        settings.insert(HOOKS_KEY.to_string(), Value::Object(section));
    }
}

fn registration(event: HookEvent, file_name: &str) -> Value {
    let mut entry = Map::new();
    if let Some(matcher) = event.matcher() {
        entry.insert("matcher".to_string(), json!(matcher));
    }
    entry.insert(
        "hooks".to_string(),
        json!([{ "type": "command", "command": hook_command(file_name) }]),
    );
    Value::Object(entry)
}
