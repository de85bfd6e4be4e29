//! Per-entry detail lines shown in listings.
//!
//! ```text
//! FUNCTION transfer [nonpayable]
//! Inputs: to: address, amount: uint256
//! Outputs: : bool
//! ```

use crate::abi::{AbiEntry, EntryKind, Param};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryDetails {
    /// Upper-case kind tag, e.g. `FUNCTION`.
    pub tag: String,
    pub name: String,
    pub mutability: Option<String>,
    pub inputs: String,
    /// `None` for events and errors.
    pub outputs: Option<String>,
}

impl EntryDetails {
    pub fn from_entry(entry: &AbiEntry) -> Self {
        let inputs: Vec<(&str, &str)> = match entry {
            AbiEntry::Function(f) => pairs(f.inputs()),
            AbiEntry::Event(e) => e.inputs().iter().map(|p| (p.name(), p.ty.as_str())).collect(),
            AbiEntry::Error(e) => pairs(e.inputs()),
            AbiEntry::Constructor(c) => pairs(c.inputs()),
            AbiEntry::Fallback(_) | AbiEntry::Receive(_) => Vec::new(),
        };
        let outputs = match entry {
            AbiEntry::Event(_) | AbiEntry::Error(_) => None,
            AbiEntry::Function(f) => Some(join_params(&pairs(f.outputs()))),
            _ => Some(join_params(&[])),
        };

        Self {
            tag: entry.kind().as_str().to_uppercase(),
            name: entry.name().unwrap_or_default().to_string(),
            mutability: entry.state_mutability().map(|m| m.to_string()),
            inputs: join_params(&inputs),
            outputs,
        }
    }

    /// Header line: tag, name and mutability.
    pub fn header(&self) -> String {
        let mut parts = vec![self.tag.clone()];
        if !self.name.is_empty() {
            parts.push(self.name.clone());
        }
        if let Some(m) = &self.mutability {
            parts.push(format!("[{}]", m));
        }
        parts.join(" ")
    }

    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![self.header(), format!("Inputs: {}", self.inputs)];
        if let Some(outputs) = &self.outputs {
            lines.push(format!("Outputs: {}", outputs));
        }
        lines
    }

    pub fn shows_outputs(kind: EntryKind) -> bool {
        !matches!(kind, EntryKind::Event | EntryKind::Error)
    }
}

fn pairs(params: &[Param]) -> Vec<(&str, &str)> {
    params.iter().map(|p| (p.name(), p.ty.as_str())).collect()
}

fn join_params(params: &[(&str, &str)]) -> String {
    if params.is_empty() {
        return "none".to_string();
    }
    params
        .iter()
        .map(|(name, ty)| format!("{}: {}", name, ty))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abi::parse_abi;

    fn details(json: &str) -> EntryDetails {
        let entries = parse_abi(&format!("[{}]", json)).unwrap();
        EntryDetails::from_entry(&entries[0])
    }

    #[test]
    fn function_details() {
        let d = details(
            r#"{"type":"function","name":"transfer","inputs":[{"name":"to","type":"address"},{"name":"amount","type":"uint256"}],"outputs":[{"type":"bool"}],"stateMutability":"nonpayable"}"#,
        );
        assert_eq!(
            d.lines(),
            vec![
                "FUNCTION transfer [nonpayable]",
                "Inputs: to: address, amount: uint256",
                "Outputs: : bool",
            ]
        );
    }

    #[test]
    fn events_have_no_outputs_line() {
        let d = details(r#"{"type":"event","name":"Paused","inputs":[]}"#);
        assert_eq!(d.lines(), vec!["EVENT Paused", "Inputs: none"]);
        assert!(!EntryDetails::shows_outputs(EntryKind::Event));
    }

    #[test]
    fn special_entries_have_no_name() {
        let d = details(r#"{"type":"receive","stateMutability":"payable"}"#);
        assert_eq!(
            d.lines(),
            vec!["RECEIVE [payable]", "Inputs: none", "Outputs: none"]
        );
    }
}
