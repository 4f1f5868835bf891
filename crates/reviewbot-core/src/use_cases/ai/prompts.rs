//! Prompt assembly.

use reviewbot_ghapi_interface::types::GhPullRequestFile;

/// Character budget for diff text embedded in a review prompt.
pub const DIFF_CHAR_BUDGET: usize = 3000;
/// Maximum number of changed files listed in a review prompt.
pub const MAX_LISTED_FILES: usize = 20;

/// Build the code review prompt for a pull request.
pub fn build_pull_request_review_prompt(
    title: &str,
    body: Option<&str>,
    diff: &str,
    files: &[GhPullRequestFile],
) -> String {
    let file_list = files
        .iter()
        .take(MAX_LISTED_FILES)
        .map(|file| format!("- {}", file.filename))
        .collect::<Vec<_>>()
        .join("\n");
    let truncated_diff: String = diff.chars().take(DIFF_CHAR_BUDGET).collect();

    format!(
        "You are a security-focused code reviewer for an open-source project.\n\
        Analyze this pull request and provide a comprehensive review with a focus on:\n\
        \n\
        1. **Security**: Identify potential vulnerabilities, security risks, or unsafe practices\n\
        2. **Code Quality**: Check for bugs, anti-patterns, and maintainability issues\n\
        3. **Best Practices**: Ensure the code follows language-specific best practices\n\
        4. **Performance**: Identify potential performance issues\n\
        5. **Testing**: Assess test coverage and quality\n\
        \n\
        Pull Request Details:\n\
        Title: {title}\n\
        Description: {description}\n\
        \n\
        Changed Files:\n\
        {file_list}\n\
        \n\
        Code Diff (first {DIFF_CHAR_BUDGET} chars):\n\
        {truncated_diff}\n\
        \n\
        Provide your review in the following format:\n\
        - Start with an overall assessment (APPROVE, REQUEST CHANGES, or COMMENT)\n\
        - List specific issues found with file names and line numbers\n\
        - Highlight any security concerns\n\
        - Suggest improvements\n\
        - Keep it concise and actionable\n\
        \n\
        Generate the review:",
        description = body.unwrap_or("No description provided"),
    )
}

/// Build the triage prompt for an issue.
pub fn build_issue_analysis_prompt(title: &str, body: Option<&str>) -> String {
    format!(
        "You are an AI assistant helping with GitHub issue triage and analysis.\n\
        \n\
        Issue Title: {title}\n\
        Issue Description: {description}\n\
        \n\
        Your task:\n\
        1. Categorize the issue (bug, feature request, question, documentation, etc.)\n\
        2. Assess the issue's priority and severity\n\
        3. Identify if it's a security-related issue\n\
        4. Suggest appropriate labels\n\
        5. Ask clarifying questions if the issue is unclear\n\
        6. Provide helpful initial guidance or resources\n\
        \n\
        Keep your response concise, friendly, and professional.\n\
        \n\
        Generate your analysis:",
        description = body.unwrap_or("No description provided"),
    )
}

/// Build the reply prompt for a comment mentioning the bot.
pub fn build_comment_reply_prompt(comment: &str, context: &str) -> String {
    format!(
        "You are a helpful GitHub bot assistant. Respond to this comment in a professional \
        and helpful manner.\n\
        \n\
        Context: {context}\n\
        Comment: {comment}\n\
        \n\
        Your response should:\n\
        1. Address the specific question or request\n\
        2. Provide actionable advice\n\
        3. Be concise and friendly\n\
        4. Include relevant links or documentation if applicable\n\
        \n\
        Generate your response:"
    )
}
