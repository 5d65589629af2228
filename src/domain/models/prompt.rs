use super::ExtractionRequest;

/// System instruction describing the extraction task.
pub const SYSTEM_PROMPT: &str = "\
You are a helpful coding assistant.
You are given a Rust source file, and your task is to extract only the type definitions from it.
These types include structs, enums, and type aliases.
You should remove everything else, including functions, derive macros, and impl blocks.
Names that are imported from outside the file should be replaced with the fully qualified name \
(e.g. replace Rc<...> with std::rc::Rc<...>).
The resulting code should not require any imports.
Your output should only contain: structs, enums, and type aliases from the input file, and nothing \
else e.g. no derive annotations or use statements.
Do not include any additional commentary or explanations in your output.
Return only valid Rust code that fits these requirements, without any markdown.";

const USER_PROMPT_PREFIX: &str = "Here is the Rust source code. Please return the file with only \
the type definitions (structs, enums, type aliases), using fully qualified names: ";

/// The two messages sent for one extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptPayload {
    system: String,
    user: String,
}

impl PromptPayload {
    pub fn for_source(request: &ExtractionRequest) -> Self {
        Self {
            system: SYSTEM_PROMPT.to_string(),
            user: format!("{USER_PROMPT_PREFIX}{}", request.source()),
        }
    }

    pub fn system(&self) -> &str {
        &self.system
    }

    pub fn user(&self) -> &str {
        &self.user
    }
}
