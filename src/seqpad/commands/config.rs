use crate::commands::{CmdMessage, CmdResult};
use crate::config::{SeqpadConfig, KEYS};
use crate::error::Result;
use std::path::Path;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

/// Reads or edits `seqpad.json` in `graph_root`. Bad keys and values come
/// back as error messages; only I/O and JSON failures are `Err`.
pub fn run(graph_root: &Path, action: ConfigAction) -> Result<CmdResult> {
    let mut config = SeqpadConfig::load(graph_root)?;
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll => return Ok(result.with_config(config)),
        ConfigAction::ShowKey(key) => match config.get(&key) {
            Some(value) => result.add_message(CmdMessage::info(format!("{} = {}", key, value))),
            None => result.add_message(unknown_key(&key)),
        },
        ConfigAction::Set(key, value) => {
            let Some(previous) = config.get(&key) else {
                result.add_message(unknown_key(&key));
                return Ok(result);
            };
            if let Err(e) = config.set(&key, &value) {
                result.add_message(CmdMessage::error(e.to_string()));
                return Ok(result);
            }
            config.save(graph_root)?;
            log::info!("[config] {} changed in {}", key, graph_root.display());

            let current = config.get(&key).unwrap_or(value);
            result.add_message(CmdMessage::success(format!(
                "{}: {} -> {}",
                key, previous, current
            )));
            return Ok(result.with_config(config));
        }
    }
    Ok(result)
}

fn unknown_key(key: &str) -> CmdMessage {
    CmdMessage::error(format!(
        "Unknown config key: {} (expected one of {})",
        key,
        KEYS.join(", ")
    ))
}
