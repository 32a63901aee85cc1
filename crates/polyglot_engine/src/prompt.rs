/// Builds the single-turn instruction sent to the translation capability.
pub fn build_translation_prompt(code: &str, source_name: &str, target_name: &str) -> String {
    format!(
        "Translate the following {source_name} code to {target_name}.

Rules:
1. Respond with the translated code only. No explanations, no Markdown code fences.
2. Keep the behaviour and logic of the original program.
3. Write idiomatic {target_name} and follow its naming conventions.
4. Add every import, include or using directive the code needs.
5. The result must be self-contained and syntactically valid {target_name}.
6. Keep comments, translating them where it makes sense.

{source_name} code:
{code}

{target_name} translation:"
    )
}
