//! Human-readable signatures.
//!
//! Follows the abitype `formatAbiItem` convention, e.g.
//! `function balanceOf(address owner) view returns (uint256)` or
//! `event Transfer(address indexed from, address indexed to, uint256 value)`.
//!
//! Functions and events are formatted by `alloy_json_abi`. Its full
//! signatures spell tuple parameters as `tuple(...)` where abitype writes a
//! bare `(...)`, so that prefix is dropped. Errors, constructors and the
//! fallback/receive handlers are not covered by alloy's full signatures and
//! are assembled here from alloy's parameter formatting.

use alloy_json_abi as alloy;

use crate::abi::{AbiEntry, EventParam, Function, Param, StateMutability};

/// Conversion into the matching `alloy_json_abi` item.
trait ToAlloy {
    type To;

    fn to_alloy(&self) -> Self::To;
}

impl ToAlloy for Param {
    type To = alloy::Param;

    fn to_alloy(&self) -> Self::To {
        alloy::Param {
            ty: self.ty.clone(),
            name: self.name().to_string(),
            components: self.components().iter().map(ToAlloy::to_alloy).collect(),
            internal_type: None,
        }
    }
}

impl ToAlloy for EventParam {
    type To = alloy::EventParam;

    fn to_alloy(&self) -> Self::To {
        alloy::EventParam {
            ty: self.ty.clone(),
            name: self.name().to_string(),
            indexed: self.is_indexed(),
            components: self.components().iter().map(ToAlloy::to_alloy).collect(),
            internal_type: None,
        }
    }
}

impl ToAlloy for StateMutability {
    type To = alloy::StateMutability;

    fn to_alloy(&self) -> Self::To {
        match self {
            Self::Pure => alloy::StateMutability::Pure,
            Self::View => alloy::StateMutability::View,
            Self::Nonpayable => alloy::StateMutability::NonPayable,
            Self::Payable => alloy::StateMutability::Payable,
        }
    }
}

impl ToAlloy for Function {
    type To = alloy::Function;

    fn to_alloy(&self) -> Self::To {
        alloy::Function {
            name: self.name().to_string(),
            inputs: self.inputs().iter().map(ToAlloy::to_alloy).collect(),
            outputs: self.outputs().iter().map(ToAlloy::to_alloy).collect(),
            // an undeclared mutability prints nothing, same as nonpayable
            state_mutability: self
                .state_mutability
                .map_or(alloy::StateMutability::NonPayable, |m| m.to_alloy()),
        }
    }
}

/// Format one entry as a signature line.
pub fn format_entry(entry: &AbiEntry) -> String {
    match entry {
        AbiEntry::Function(f) => bare_tuples(&f.to_alloy().full_signature()),
        AbiEntry::Event(e) => {
            let event = alloy::Event {
                name: e.name().to_string(),
                inputs: e.inputs().iter().map(ToAlloy::to_alloy).collect(),
                anonymous: e.is_anonymous(),
            };
            bare_tuples(&event.full_signature())
        }
        AbiEntry::Error(e) => format!("error {}({})", e.name(), format_params(e.inputs())),
        AbiEntry::Constructor(c) => {
            let payable = if c.state_mutability == Some(StateMutability::Payable) {
                " payable"
            } else {
                ""
            };
            format!("constructor({}){}", format_params(c.inputs()), payable)
        }
        AbiEntry::Fallback(f) => {
            if f.state_mutability == Some(StateMutability::Payable) {
                "fallback() external payable".to_string()
            } else {
                "fallback() external".to_string()
            }
        }
        AbiEntry::Receive(_) => "receive() external payable".to_string(),
    }
}

/// Format entries one-to-one, preserving order.
pub fn format_abi<'a, I>(entries: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a AbiEntry>,
{
    entries.into_iter().map(format_entry).collect()
}

/// Comma-joined parameter list without the surrounding parentheses.
pub fn format_params(params: &[Param]) -> String {
    params
        .iter()
        .map(format_param)
        .collect::<Vec<_>>()
        .join(", ")
}

/// `type name`, with tuple components expanded.
pub fn format_param(param: &Param) -> String {
    let mut out = String::new();
    param.to_alloy().full_selector_type_raw(&mut out);
    if !param.name().is_empty() {
        out.push(' ');
        out.push_str(param.name());
    }
    bare_tuples(&out)
}

/// `tuple(address a, uint256 b)[]` becomes `(address a, uint256 b)[]`.
fn bare_tuples(signature: &str) -> String {
    signature.replace("tuple(", "(")
}
