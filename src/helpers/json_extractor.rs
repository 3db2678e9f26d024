use serde::de::DeserializeOwned;
use crate::enums::ai_provider_error::AiProviderError;

/// Read a model reply as `T`.
///
/// Models wrap JSON in Markdown fences or prose often enough that the reply
/// is tried as-is, then as the first fenced block, then as the outermost
/// `{ ... }` span.
pub fn parse_reply<T: DeserializeOwned>(reply: &str) -> Result<T, AiProviderError> {
    let trimmed = reply.trim();
    if trimmed.is_empty() {
        return Err(AiProviderError::InvalidResponse("empty reply".to_string()));
    }

    let candidates = [Some(trimmed), fenced_block(trimmed), brace_span(trimmed)];
    let mut last_error = None;

    for candidate in candidates.into_iter().flatten() {
        match serde_json::from_str::<T>(candidate) {
            Ok(value) => return Ok(value),
            Err(e) => last_error = Some(e),
        }
    }

    Err(AiProviderError::InvalidResponse(match last_error {
        Some(e) => format!("reply does not match the expected schema: {}", e),
        None => "reply contains no JSON object".to_string(),
    }))
}

fn fenced_block(text: &str) -> Option<&str> {
    let open = text.find("```")?;
    let after_fence = &text[open + 3..];
    // Skip the info string (```json).
    let body_start = after_fence.find('\n')? + 1;
    let body = &after_fence[body_start..];
    let close = body.rfind("```")?;
    Some(body[..close].trim())
}

fn brace_span(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (end > start).then(|| &text[start..=end])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structs::code_analysis_output::CodeAnalysisOutput;
    use crate::structs::improve_code_output::ImproveCodeOutput;

    #[test]
    fn parses_bare_json() {
        let output: CodeAnalysisOutput = parse_reply(r#"{"recommendations":"use TLS"}"#).unwrap();
        assert_eq!(output.recommendations, "use TLS");
    }

    #[test]
    fn parses_fenced_json_with_code_inside() {
        let reply = "Here you go:\n```json\n{\"improvedCode\":\"```py\\nprint(1)\\n```\",\"explanation\":\"wrapped\"}\n```\nThanks";
        let output: ImproveCodeOutput = parse_reply(reply).unwrap();
        assert_eq!(output.explanation, "wrapped");
        assert!(output.improved_code.contains("print(1)"));
        assert_eq!(output.language, None);
    }

    #[test]
    fn parses_json_surrounded_by_prose() {
        let output: CodeAnalysisOutput = parse_reply("Sure! {\"recommendations\": \"validate input\"} Hope it helps").unwrap();
        assert_eq!(output.recommendations, "validate input");
    }

    #[test]
    fn schema_violations_are_invalid_responses() {
        let error = parse_reply::<ImproveCodeOutput>(r#"{"explanation":"no code"}"#).unwrap_err();
        assert!(matches!(error, AiProviderError::InvalidResponse(_)));
        assert!(error.detail().contains("improvedCode"));

        let error = parse_reply::<CodeAnalysisOutput>("   ").unwrap_err();
        assert_eq!(error.detail(), "empty reply");

        assert!(parse_reply::<CodeAnalysisOutput>("no json here").is_err());
    }
}
