//! Notepad-style plain text rendering of a strategy document.

use crate::domain::foundation::Timestamp;
use crate::domain::wizard::AnswerSet;

use super::document::StrategyDocument;
use super::hashtag::format_hashtag;

const BANNER: [&str; 3] = [
    "╔═══════════════════════════════════════════════════════════╗",
    "║           SOCIAL MEDIA CONTENT STRATEGY DOCUMENT          ║",
    "╚═══════════════════════════════════════════════════════════╝",
];

const RULE_WIDTH: usize = 70;

/// Cosmetic offset added to the footer line estimate.
const LINE_ESTIMATE_OFFSET: usize = 50;

const EXPORT_SUFFIX: &str = "_Content_Strategy.txt";

/// Everything besides the document that shows up in the rendered text.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub answers: &'a AnswerSet,
    pub generated_at: Timestamp,
}

impl<'a> RenderContext<'a> {
    pub fn new(answers: &'a AnswerSet, generated_at: Timestamp) -> Self {
        Self {
            answers,
            generated_at,
        }
    }
}

/// Footer estimate: calendar entries + post ideas + 50. Not a real count.
pub fn line_estimate(document: &StrategyDocument) -> usize {
    document.calendar.len() + document.post_ideas.len() + LINE_ESTIMATE_OFFSET
}

/// Download name for a rendered document.
pub fn export_filename(filename_base: &str) -> String {
    format!("{}{}", filename_base, EXPORT_SUFFIX)
}

/// Renders `document` into the monospace notepad layout.
///
/// Deterministic for a given document and context.
pub fn render(document: &StrategyDocument, ctx: &RenderContext<'_>) -> String {
    let thin = "─".repeat(RULE_WIDTH);
    let thick = "═".repeat(RULE_WIDTH);
    let answers = ctx.answers;

    let mut lines: Vec<String> = BANNER.iter().map(|l| l.to_string()).collect();
    lines.push(String::new());
    lines.push(format!("Generated: {}", ctx.generated_at.to_display_string()));
    lines.push(format!("Brand: {} | Niche: {}", answers.brand, answers.niche));
    lines.push(format!("Platform: {} | Goal: {}", answers.platform, answers.goal));
    lines.push(String::new());
    lines.push(thin.clone());
    lines.push(String::new());

    section(&mut lines, &thin, "[1] STRATEGY OVERVIEW");
    lines.push(document.overview.clone());
    lines.push(String::new());

    section(&mut lines, &thin, "[2] 30-DAY CONTENT ROADMAP");
    for entry in &document.calendar {
        lines.push(format!("{}: {}", entry.day, entry.theme));
        lines.push(format!("    └─ Type: {}", entry.content_type));
    }
    lines.push(String::new());

    section(&mut lines, &thin, "[3] VIRAL POST IDEAS");
    for idea in &document.post_ideas {
        lines.push(format!("• {}", idea.title));
        lines.push(format!("    Hook: \"{}\"", idea.hook));
        lines.push(String::new());
    }

    section(&mut lines, &thin, "[4] READY-TO-USE CAPTIONS");
    for caption in &document.captions {
        lines.push(format!("[{}]", caption.kind.to_uppercase()));
        lines.push(caption.content.clone());
        lines.push(String::new());
    }

    section(&mut lines, &thin, "[5] HASHTAG STRATEGY");
    hashtag_group(&mut lines, "BROAD REACH:", &document.hashtags.broad);
    hashtag_group(&mut lines, "NICHE SPECIFIC:", &document.hashtags.niche);
    if !document.hashtags.branded.is_empty() {
        hashtag_group(&mut lines, "BRANDED:", &document.hashtags.branded);
    }

    lines.push(thick.clone());
    lines.push("END OF DOCUMENT".to_string());
    lines.push(format!(
        "Generated by AI Content Strategist | Total Lines: ~{}",
        line_estimate(document)
    ));
    lines.push(thick);

    let mut text = lines.join("\n");
    text.push('\n');
    text
}

fn section(lines: &mut Vec<String>, rule: &str, heading: &str) {
    lines.push(heading.to_string());
    lines.push(rule.to_string());
    lines.push(String::new());
}

fn hashtag_group(lines: &mut Vec<String>, label: &str, tags: &[String]) {
    lines.push(label.to_string());
    let rendered: Vec<String> = tags.iter().map(|t| format_hashtag(t)).collect();
    lines.push(rendered.join(" "));
    lines.push(String::new());
}
