//! Guardianship appointments for minor children.

use serde::{Deserialize, Serialize};

use crate::contact::ContactInfo;

/// A person nominated as guardian of a minor child.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuardianNominee {
    pub name: String,
    pub relationship: String,
    #[serde(default)]
    pub contact: ContactInfo,
}

impl GuardianNominee {
    /// The email on file, if any.
    pub fn email(&self) -> Option<&str> {
        self.contact.email.as_deref()
    }
}

/// A guardianship appointment for one child.
///
/// The alternate steps in if the primary guardian cannot serve. Special
/// instructions carry the testator's wishes about upbringing, residence,
/// religion and the like, verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuardianshipAppointment {
    /// Name of the child this appointment covers. Matched against
    /// `family.children` by name during validation.
    pub child_name: String,
    pub primary: GuardianNominee,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternate: Option<GuardianNominee>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_instructions: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appointment_without_alternate_roundtrip() {
        let appt = GuardianshipAppointment {
            child_name: "Anna".to_string(),
            primary: GuardianNominee {
                name: "Jana Kováčová".to_string(),
                relationship: "sibling".to_string(),
                contact: ContactInfo {
                    email: Some("jana@example.sk".to_string()),
                    phone: None,
                },
            },
            alternate: None,
            special_instructions: None,
        };
        let json = serde_json::to_string(&appt).unwrap();
        assert!(!json.contains("alternate"));
        let back: GuardianshipAppointment = serde_json::from_str(&json).unwrap();
        assert_eq!(back, appt);
    }
}
