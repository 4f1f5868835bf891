//! AI generation use cases.

mod generate_text;
mod prompts;

pub use generate_text::GenerateText;
pub use prompts::{
    build_comment_reply_prompt, build_issue_analysis_prompt, build_pull_request_review_prompt,
    DIFF_CHAR_BUDGET, MAX_LISTED_FILES,
};
