//! ABI entry types.
//!
//! An ABI is an ordered list of entries. Each entry is one of six closed
//! variants, tagged by the JSON `"type"` field. Parameter types are kept
//! verbatim as they appear in the input (no canonicalization).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::identity::{derive_key, EntryKey};

/// The category tag of an ABI entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Function,
    Event,
    Error,
    Constructor,
    Fallback,
    Receive,
}

impl EntryKind {
    /// All kinds in display order.
    pub const ALL: [EntryKind; 6] = [
        EntryKind::Function,
        EntryKind::Event,
        EntryKind::Error,
        EntryKind::Constructor,
        EntryKind::Fallback,
        EntryKind::Receive,
    ];

    /// The lowercase tag used in ABI JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Function => "function",
            Self::Event => "event",
            Self::Error => "error",
            Self::Constructor => "constructor",
            Self::Fallback => "fallback",
            Self::Receive => "receive",
        }
    }

    /// Whether entries of this kind are special handlers without a name.
    pub fn is_special(&self) -> bool {
        matches!(self, Self::Constructor | Self::Fallback | Self::Receive)
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntryKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                format!(
                    "unknown entry type '{}' (expected one of: {})",
                    s,
                    Self::ALL.map(|k| k.as_str()).join(", ")
                )
            })
    }
}

/// Declared state mutability of a function, constructor or handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StateMutability {
    Pure,
    View,
    Nonpayable,
    Payable,
}

impl StateMutability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pure => "pure",
            Self::View => "view",
            Self::Nonpayable => "nonpayable",
            Self::Payable => "payable",
        }
    }
}

impl fmt::Display for StateMutability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// JSON fields the model does not name (`constant`, `payable`, `gas`, ...).
///
/// Carried through so a re-serialized entry is the entry that was read.
pub type ExtraFields = Map<String, Value>;

/// A function/error/constructor parameter, or a tuple component.
///
/// Optional fields stay `None` when absent from the input and are not written
/// back; the accessors fill in the empty defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Param {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub components: Option<Vec<Param>>,
    #[serde(rename = "internalType", default, skip_serializing_if = "Option::is_none")]
    pub internal_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl Param {
    /// Create an unnamed parameter of the given type.
    pub fn new(ty: impl Into<String>) -> Self {
        Self {
            ty: ty.into(),
            ..Self::default()
        }
    }

    /// Create a named parameter.
    pub fn named(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ty: ty.into(),
            ..Self::default()
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    pub fn components(&self) -> &[Param] {
        self.components.as_deref().unwrap_or_default()
    }
}

/// An event parameter. Same as [`Param`] plus the `indexed` flag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventParam {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub components: Option<Vec<Param>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indexed: Option<bool>,
    #[serde(rename = "internalType", default, skip_serializing_if = "Option::is_none")]
    pub internal_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub ty: String,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl EventParam {
    pub fn new(name: impl Into<String>, ty: impl Into<String>, indexed: bool) -> Self {
        Self {
            name: Some(name.into()),
            ty: ty.into(),
            indexed: Some(indexed),
            ..Self::default()
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    pub fn components(&self) -> &[Param] {
        self.components.as_deref().unwrap_or_default()
    }

    pub fn is_indexed(&self) -> bool {
        self.indexed.unwrap_or(false)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Function {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inputs: Option<Vec<Param>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outputs: Option<Vec<Param>>,
    #[serde(rename = "stateMutability", default, skip_serializing_if = "Option::is_none")]
    pub state_mutability: Option<StateMutability>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl Function {
    pub fn new(name: impl Into<String>, inputs: Vec<Param>) -> Self {
        Self {
            name: Some(name.into()),
            inputs: Some(inputs),
            ..Self::default()
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    pub fn inputs(&self) -> &[Param] {
        self.inputs.as_deref().unwrap_or_default()
    }

    pub fn outputs(&self) -> &[Param] {
        self.outputs.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anonymous: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inputs: Option<Vec<EventParam>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl Event {
    pub fn new(name: impl Into<String>, inputs: Vec<EventParam>) -> Self {
        Self {
            name: Some(name.into()),
            inputs: Some(inputs),
            ..Self::default()
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    pub fn inputs(&self) -> &[EventParam] {
        self.inputs.as_deref().unwrap_or_default()
    }

    pub fn is_anonymous(&self) -> bool {
        self.anonymous.unwrap_or(false)
    }
}

/// A custom error declaration (`error Name(...)`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomError {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inputs: Option<Vec<Param>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl CustomError {
    pub fn new(name: impl Into<String>, inputs: Vec<Param>) -> Self {
        Self {
            name: Some(name.into()),
            inputs: Some(inputs),
            ..Self::default()
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    pub fn inputs(&self) -> &[Param] {
        self.inputs.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Constructor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inputs: Option<Vec<Param>>,
    #[serde(rename = "stateMutability", default, skip_serializing_if = "Option::is_none")]
    pub state_mutability: Option<StateMutability>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl Constructor {
    pub fn inputs(&self) -> &[Param] {
        self.inputs.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fallback {
    #[serde(rename = "stateMutability", default, skip_serializing_if = "Option::is_none")]
    pub state_mutability: Option<StateMutability>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receive {
    #[serde(rename = "stateMutability", default, skip_serializing_if = "Option::is_none")]
    pub state_mutability: Option<StateMutability>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// One item of a contract ABI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum AbiEntry {
    Function(Function),
    Event(Event),
    Error(CustomError),
    Constructor(Constructor),
    Fallback(Fallback),
    Receive(Receive),
}

impl AbiEntry {
    pub fn kind(&self) -> EntryKind {
        match self {
            Self::Function(_) => EntryKind::Function,
            Self::Event(_) => EntryKind::Event,
            Self::Error(_) => EntryKind::Error,
            Self::Constructor(_) => EntryKind::Constructor,
            Self::Fallback(_) => EntryKind::Fallback,
            Self::Receive(_) => EntryKind::Receive,
        }
    }

    /// Entry name. `None` for constructor, fallback and receive.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Function(f) => Some(f.name()),
            Self::Event(e) => Some(e.name()),
            Self::Error(e) => Some(e.name()),
            Self::Constructor(_) | Self::Fallback(_) | Self::Receive(_) => None,
        }
    }

    /// Input types in declaration order, spelled exactly as in the input.
    pub fn input_types(&self) -> Vec<&str> {
        match self {
            Self::Function(f) => f.inputs().iter().map(|p| p.ty.as_str()).collect(),
            Self::Event(e) => e.inputs().iter().map(|p| p.ty.as_str()).collect(),
            Self::Error(e) => e.inputs().iter().map(|p| p.ty.as_str()).collect(),
            Self::Constructor(c) => c.inputs().iter().map(|p| p.ty.as_str()).collect(),
            Self::Fallback(_) | Self::Receive(_) => Vec::new(),
        }
    }

    /// Declared mutability, if any.
    pub fn state_mutability(&self) -> Option<StateMutability> {
        match self {
            Self::Function(f) => f.state_mutability,
            Self::Constructor(c) => c.state_mutability,
            Self::Fallback(f) => f.state_mutability,
            Self::Receive(r) => r.state_mutability,
            Self::Event(_) | Self::Error(_) => None,
        }
    }

    /// The stable identity of this entry.
    pub fn key(&self) -> EntryKey {
        derive_key(self)
    }
}
