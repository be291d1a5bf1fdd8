//! Free-form special instructions.

use serde::{Deserialize, Serialize};

/// Classification of a special instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InstructionKind {
    FuneralWishes,
    OrganDonation,
    DigitalAssets,
    PersonalMessage,
    CharitableBequest,
}

/// A free-form instruction attached to the will.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpecialInstruction {
    pub kind: InstructionKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub content: String,
    /// For personal messages: who the message is addressed to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instruction_kind_serde() {
        assert_eq!(
            serde_json::to_string(&InstructionKind::OrganDonation).unwrap(),
            "\"organ_donation\""
        );
    }
}
