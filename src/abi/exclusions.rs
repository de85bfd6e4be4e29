//! Catalogue of boilerplate entry names removed by trimming.
//!
//! The built-in lists never change at runtime. Extra names from the user's
//! config are layered on top through [`ExclusionSet`].

use std::collections::HashSet;
use std::fmt;
use std::sync::LazyLock;

const DIAMOND_EVENTS: &[&str] = &["DiamondCut", "DiamondOwnershipTransferred"];
const DIAMOND_FUNCTIONS: &[&str] = &[
    "diamondCut",
    "facetAddress",
    "facetAddresses",
    "facetFunctionSelectors",
    "facets",
];

const INTROSPECTION_EVENTS: &[&str] = &[];
const INTROSPECTION_FUNCTIONS: &[&str] = &["supportsInterface"];

const OWNERSHIP_EVENTS: &[&str] = &["OwnershipTransferred"];
const OWNERSHIP_FUNCTIONS: &[&str] = &["owner", "renounceOwnership", "transferOwnership"];

const INITIALIZATION_EVENTS: &[&str] = &["Initialized"];
const INITIALIZATION_FUNCTIONS: &[&str] = &["initialize"];

const ACCESS_CONTROL_EVENTS: &[&str] = &["RoleAdminChanged", "RoleGranted", "RoleRevoked"];
const ACCESS_CONTROL_FUNCTIONS: &[&str] = &[
    "addAuthorized",
    "authorized",
    "getRoleAdmin",
    "getRoleMember",
    "getRoleMemberCount",
    "grantRole",
    "hasRole",
    "removeAuthorized",
    "renounceRole",
    "revokeRole",
];

const PAUSABLE_EVENTS: &[&str] = &["Paused", "Unpaused"];
const PAUSABLE_FUNCTIONS: &[&str] = &[
    "enabled",
    "pause",
    "paused",
    "unpause",
    "toggleEnabled",
    "togglePause",
];

/// Group of boilerplate names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExclusionCategory {
    /// Multi-facet (diamond) dispatch control
    Diamond,
    /// ERC-165 interface introspection
    Introspection,
    Ownership,
    /// Initializer / proxy setup
    Initialization,
    AccessControl,
    Pausable,
}

impl ExclusionCategory {
    pub const ALL: [ExclusionCategory; 6] = [
        ExclusionCategory::Diamond,
        ExclusionCategory::Introspection,
        ExclusionCategory::Ownership,
        ExclusionCategory::Initialization,
        ExclusionCategory::AccessControl,
        ExclusionCategory::Pausable,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Diamond => "diamond dispatch",
            Self::Introspection => "interface introspection",
            Self::Ownership => "ownership",
            Self::Initialization => "initialization",
            Self::AccessControl => "access control",
            Self::Pausable => "pausability",
        }
    }

    pub fn events(&self) -> &'static [&'static str] {
        match self {
            Self::Diamond => DIAMOND_EVENTS,
            Self::Introspection => INTROSPECTION_EVENTS,
            Self::Ownership => OWNERSHIP_EVENTS,
            Self::Initialization => INITIALIZATION_EVENTS,
            Self::AccessControl => ACCESS_CONTROL_EVENTS,
            Self::Pausable => PAUSABLE_EVENTS,
        }
    }

    pub fn functions(&self) -> &'static [&'static str] {
        match self {
            Self::Diamond => DIAMOND_FUNCTIONS,
            Self::Introspection => INTROSPECTION_FUNCTIONS,
            Self::Ownership => OWNERSHIP_FUNCTIONS,
            Self::Initialization => INITIALIZATION_FUNCTIONS,
            Self::AccessControl => ACCESS_CONTROL_FUNCTIONS,
            Self::Pausable => PAUSABLE_FUNCTIONS,
        }
    }

    /// The category whose event list contains `name`.
    pub fn of_event(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.events().contains(&name))
    }

    /// The category whose function list contains `name`.
    pub fn of_function(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.functions().contains(&name))
    }
}

impl fmt::Display for ExclusionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

static UNUSED_EVENTS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    ExclusionCategory::ALL
        .iter()
        .flat_map(|c| c.events().iter().copied())
        .collect()
});

static UNUSED_FUNCTIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    ExclusionCategory::ALL
        .iter()
        .flat_map(|c| c.functions().iter().copied())
        .collect()
});

/// Whether `name` is in the built-in union of boilerplate event names.
pub fn is_unused_event(name: &str) -> bool {
    UNUSED_EVENTS.contains(name)
}

/// Whether `name` is in the built-in union of boilerplate function names.
pub fn is_unused_function(name: &str) -> bool {
    UNUSED_FUNCTIONS.contains(name)
}

/// Built-in catalogue plus optional user-supplied names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSet {
    extra_events: HashSet<String>,
    extra_functions: HashSet<String>,
}

impl ExclusionSet {
    /// Only the built-in catalogue.
    pub fn builtin() -> Self {
        Self::default()
    }

    pub fn with_extra_events<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_events.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn with_extra_functions<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_functions.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn excludes_event(&self, name: &str) -> bool {
        is_unused_event(name) || self.extra_events.contains(name)
    }

    pub fn excludes_function(&self, name: &str) -> bool {
        is_unused_function(name) || self.extra_functions.contains(name)
    }

    pub fn is_extra_event(&self, name: &str) -> bool {
        self.extra_events.contains(name)
    }

    pub fn is_extra_function(&self, name: &str) -> bool {
        self.extra_functions.contains(name)
    }
}
