//! Domain entities: the documents exchanged with the host

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Name of the directory listing command.
pub const BROWSE_COMMAND: &str = "browse";

/// Name of the directory parameter of [`BROWSE_COMMAND`].
pub const DIR_PARAM: &str = "dir";

/// Self-description emitted on a bare invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub title: String,
    pub description: String,
    /// Top-level launcher entries
    pub root: Vec<MenuEntry>,
    /// Invokable commands and their parameters
    pub commands: Vec<CommandSpec>,
}

/// Kind of a top-level launcher entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Run,
}

/// A launcher entry that invokes one of the declared commands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuEntry {
    pub title: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    pub command: String,
    pub params: BTreeMap<String, String>,
}

impl MenuEntry {
    /// Entry running `command` with the given parameters.
    pub fn run<'a>(
        title: impl Into<String>,
        command: impl Into<String>,
        params: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Self {
        Self {
            title: title.into(),
            kind: EntryKind::Run,
            command: command.into(),
            params: params
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

/// How the host should present a command's output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommandMode {
    /// Filterable, interactive list
    Filter,
}

/// Declared command with its parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandSpec {
    pub name: String,
    pub mode: CommandMode,
    pub params: Vec<ParamSpec>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamType {
    String,
}

/// Parameter declaration of a [`CommandSpec`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamSpec {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ParamType,
    pub optional: bool,
}

/// Output of the browse command.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    /// One item per visible entry, in enumeration order
    pub items: Vec<Item>,
}

/// One renderable row, corresponding to one directory entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Base name of the entry
    pub title: String,
    /// Exactly one element: the absolute path
    pub accessories: Vec<String>,
    pub actions: Vec<Action>,
}

impl Item {
    /// Build the item for an entry at `path` (absolute).
    ///
    /// Directories get `Browse` then `Open`; everything else only `Open`.
    pub fn for_entry(title: impl Into<String>, path: &str, is_dir: bool) -> Self {
        let mut actions = Vec::with_capacity(2);
        if is_dir {
            actions.push(Action::browse(path));
        }
        actions.push(Action::open(path));

        Self {
            title: title.into(),
            accessories: vec![path.to_string()],
            actions,
        }
    }
}

/// Operation attached to an [`Item`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    pub title: String,
    #[serde(flatten)]
    pub kind: ActionKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ActionKind {
    /// Re-invoke a command of this plugin
    Run {
        command: String,
        params: BTreeMap<String, String>,
    },
    /// Let the host open the target with the OS default handler
    Open { target: String },
}

impl Action {
    /// `Browse` action listing the directory at `dir`.
    pub fn browse(dir: &str) -> Self {
        Self {
            title: "Browse".to_string(),
            kind: ActionKind::Run {
                command: BROWSE_COMMAND.to_string(),
                params: BTreeMap::from([(DIR_PARAM.to_string(), dir.to_string())]),
            },
        }
    }

    /// `Open` action for `target`.
    pub fn open(target: &str) -> Self {
        Self {
            title: "Open".to_string(),
            kind: ActionKind::Open {
                target: target.to_string(),
            },
        }
    }
}
