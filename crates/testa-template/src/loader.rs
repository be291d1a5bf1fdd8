//! # Template Loading
//!
//! Deserialize template definitions from YAML or JSON and run the
//! consistency check before handing them out. Templates authored outside
//! the built-in catalog (per-deployment customizations) come through here.

use crate::consistency::verify_template;
use crate::error::TemplateError;
use crate::model::WillTemplate;

/// Parse a template from a YAML document and verify it.
///
/// # Errors
///
/// [`TemplateError::YamlParse`] on malformed YAML; any [`verify_template`]
/// failure on a structurally broken template.
pub fn from_yaml_str(yaml: &str) -> Result<WillTemplate, TemplateError> {
    let template: WillTemplate = serde_yaml::from_str(yaml)?;
    verify_template(&template)?;
    Ok(template)
}

/// Parse a template from a JSON document and verify it.
///
/// # Errors
///
/// [`TemplateError::JsonParse`] on malformed JSON; any [`verify_template`]
/// failure on a structurally broken template.
pub fn from_json_str(json: &str) -> Result<WillTemplate, TemplateError> {
    let template: WillTemplate = serde_json::from_str(json)?;
    verify_template(&template)?;
    Ok(template)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL_YAML: &str = r#"
id: sk-holographic-sk
jurisdiction: SK
will_type: holographic
language: sk
version: 1.0.0
sections:
  - id: intro
    title: "I. PORUČITEĽ"
    body: "Ja, {{testator_name}}, vyhlasujem..."
    required: true
    order: 1
    placement: header
variables:
  - key: testator_name
    label: "Full name"
    data_type: text
    required: true
    source: personal
    rules:
      - check: min_length
        value: 3
        message: "Name too short"
clauses: []
execution:
  title: "Pokyny"
  steps: ["Napíšte celý závet vlastnou rukou"]
  requirements: ["Musí byť podpísaný"]
  warnings: []
"#;

    #[test]
    fn yaml_template_roundtrip() {
        let template = from_yaml_str(MINIMAL_YAML).unwrap();
        assert_eq!(template.id.as_str(), "sk-holographic-sk");
        assert_eq!(template.sections.len(), 1);
        assert_eq!(template.variables[0].key, "testator_name");
    }

    #[test]
    fn yaml_with_undeclared_placeholder_fails_verification() {
        let broken = MINIMAL_YAML.replace("{{testator_name}}", "{{heir_name}}");
        let err = from_yaml_str(&broken).unwrap_err();
        assert!(matches!(
            err,
            TemplateError::UnresolvedVariableReference { .. }
        ));
    }

    #[test]
    fn malformed_yaml_is_a_parse_error() {
        let err = from_yaml_str("sections: [{{{").unwrap_err();
        assert!(matches!(err, TemplateError::YamlParse(_)));
    }

    #[test]
    fn json_loading_works_for_the_same_shape() {
        let template = from_yaml_str(MINIMAL_YAML).unwrap();
        let json = serde_json::to_string(&template).unwrap();
        let back = from_json_str(&json).unwrap();
        assert_eq!(back, template);
    }
}
