//! The plugin's built-in manifest

use super::entities::{
    CommandMode, CommandSpec, Manifest, MenuEntry, ParamSpec, ParamType, BROWSE_COMMAND,
    DIR_PARAM,
};

/// Manifest announcing the browse command and its two launcher entries.
pub fn builtin_manifest() -> Manifest {
    Manifest {
        title: "File Browser".to_string(),
        description: "Browse files and folders".to_string(),
        root: vec![
            MenuEntry::run("Browse Home Directory", BROWSE_COMMAND, [(DIR_PARAM, "~")]),
            MenuEntry::run("Browse Current Directory", BROWSE_COMMAND, [(DIR_PARAM, ".")]),
        ],
        commands: vec![CommandSpec {
            name: BROWSE_COMMAND.to_string(),
            mode: CommandMode::Filter,
            params: vec![ParamSpec {
                name: DIR_PARAM.to_string(),
                kind: ParamType::String,
                optional: true,
            }],
        }],
    }
}
