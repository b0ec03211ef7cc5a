mod support;

pub(super) mod gemini;
pub(super) mod openai;
pub(super) mod xai;
