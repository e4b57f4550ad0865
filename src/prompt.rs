use crate::VideoMetadata;
use crate::language::Language;

const TEMPLATE: &str = r#"
Content Summary Request

Language: {language}
Word Count: Approximately 300 words
Source: {text}

Objective:
Provide a concise yet comprehensive summary of the given content in the specified language. The summary should be accessible to readers unfamiliar with the original material.

Key Focus Areas:
1. Main points and central themes
2. Key arguments and supporting evidence
3. Significant conclusions or findings
4. Notable insights or implications
5. Methodologies used (if applicable)

Summary Guidelines:
- Begin with a brief introduction contextualizing the content.
- Organize information logically, using clear transitions between ideas.
- Prioritize the most crucial information from the source material.
- Maintain objectivity, avoiding personal interpretations or biases.
- Include relevant statistics, data points, or examples that substantiate main ideas.
- Conclude with the overarching message or significance of the content.

Additional Considerations:
- Identify any limitations, potential biases, or areas of controversy in the source material.
- Highlight any unique or innovative aspects of the content.
- If relevant, briefly mention the credibility or expertise of the source.

Formatting:
- Use clear, concise language appropriate for the target audience.
- Employ bullet points or numbered lists for clarity when presenting multiple related points.
- Include subheadings if it enhances readability and organization.

Note: Ensure the summary stands alone as an informative piece, providing value even without access to the original content.
"#;

/// Title, description and transcript as one source block
pub fn combined_text(metadata: &VideoMetadata, transcript: &str) -> String {
    format!(
        "Title: {}\n\nDescription: {}\n\nTranscript: {transcript}",
        metadata.title, metadata.description
    )
}

/// Fill the summary template with the source text and target language
pub fn render(text: &str, language: Language) -> String {
    // `{text}` last so placeholders inside the video's own text stay untouched
    TEMPLATE
        .replacen("{language}", language.name(), 1)
        .replacen("{text}", text, 1)
}

/// Full prompt for one video
pub fn assemble(metadata: &VideoMetadata, transcript: &str, language: Language) -> String {
    render(&combined_text(metadata, transcript), language)
}
