//! Extraction of single-field JSON objects from model output.

use serde_json::Value;

use crate::ports::GenerationError;

/// Returns the trimmed string under `field` in a JSON object.
///
/// Tolerates a surrounding markdown code fence. Anything else that is not a
/// JSON object with a non-empty string `field` is rejected.
pub fn extract_text_field(content: &str, field: &str) -> Result<String, GenerationError> {
    let body = strip_code_fence(content.trim());
    if body.is_empty() {
        return Err(GenerationError::EmptyOutput);
    }

    let value: Value = serde_json::from_str(body)
        .map_err(|e| GenerationError::Malformed(format!("invalid JSON: {}", e)))?;

    let text = value
        .as_object()
        .ok_or_else(|| GenerationError::Malformed("expected a JSON object".to_string()))?
        .get(field)
        .ok_or_else(|| GenerationError::Malformed(format!("missing field '{}'", field)))?
        .as_str()
        .ok_or_else(|| GenerationError::Malformed(format!("field '{}' is not a string", field)))?
        .trim();

    if text.is_empty() {
        return Err(GenerationError::EmptyOutput);
    }
    Ok(text.to_string())
}

fn strip_code_fence(content: &str) -> &str {
    let Some(rest) = content.strip_prefix("```") else {
        return content;
    };
    // Drop the optional language tag on the opening line
    let rest = rest.split_once('\n').map_or("", |(_, body)| body);
    rest.trim_end().strip_suffix("```").unwrap_or(rest).trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_plain_object() {
        let text = extract_text_field(r#"{"narrative": "  Si todos... "}"#, "narrative").unwrap();
        assert_eq!(text, "Si todos...");
    }

    #[test]
    fn extracts_from_fenced_block() {
        let content = "```json\n{\"dilemmaText\": \"¿Qué harías?\"}\n```";
        assert_eq!(
            extract_text_field(content, "dilemmaText").unwrap(),
            "¿Qué harías?"
        );
    }

    #[test]
    fn empty_content_is_empty_output() {
        assert_eq!(
            extract_text_field("   ", "narrative").unwrap_err(),
            GenerationError::EmptyOutput
        );
    }

    #[test]
    fn blank_field_is_empty_output() {
        assert_eq!(
            extract_text_field(r#"{"narrative": ""}"#, "narrative").unwrap_err(),
            GenerationError::EmptyOutput
        );
    }

    #[test]
    fn prose_is_malformed() {
        assert!(matches!(
            extract_text_field("Aquí tienes tu narrativa", "narrative").unwrap_err(),
            GenerationError::Malformed(_)
        ));
    }

    #[test]
    fn wrong_shape_is_malformed() {
        for content in [r#"["narrative"]"#, r#"{"other": "x"}"#, r#"{"narrative": 3}"#] {
            assert!(matches!(
                extract_text_field(content, "narrative").unwrap_err(),
                GenerationError::Malformed(_)
            ));
        }
    }
}
