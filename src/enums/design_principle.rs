use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::errors::CodeGuardError;

/// SOLID design principles the analysis can emphasize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DesignPrinciple {
    Srp,
    Ocp,
    Lsp,
    Isp,
    Dip,
}

impl DesignPrinciple {
    pub const ALL: [DesignPrinciple; 5] = [
        DesignPrinciple::Srp,
        DesignPrinciple::Ocp,
        DesignPrinciple::Lsp,
        DesignPrinciple::Isp,
        DesignPrinciple::Dip,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Self::Srp => "srp",
            Self::Ocp => "ocp",
            Self::Lsp => "lsp",
            Self::Isp => "isp",
            Self::Dip => "dip",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Srp => "Single Responsibility Principle (SRP)",
            Self::Ocp => "Open/Closed Principle (OCP)",
            Self::Lsp => "Liskov Substitution Principle (LSP)",
            Self::Isp => "Interface Segregation Principle (ISP)",
            Self::Dip => "Dependency Inversion Principle (DIP)",
        }
    }
}

impl fmt::Display for DesignPrinciple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DesignPrinciple {
    type Err = CodeGuardError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|principle| principle.id().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| CodeGuardError::validation_error("principle", &format!("Unknown design principle '{}'.", value)))
    }
}
