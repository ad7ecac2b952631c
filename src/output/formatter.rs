use std::io::IsTerminal;

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use serde::Serialize;
use terminal_size::{terminal_size, Width};

use crate::assessment::{Dimension, SectionProgress};
use crate::scoring::{
    round_percent, GapLevel, GuidanceContent, RecommendationTier, ScoreReport, SkillGap,
};

/// Bar width used when stdout is not a terminal
const DEFAULT_BAR_WIDTH: usize = 20;
const MIN_BAR_WIDTH: usize = 10;
const MAX_BAR_WIDTH: usize = 40;

/// Label column plus score column; the bar takes the rest
const LABEL_WIDTH: usize = 24;
const SCORE_WIDTH: usize = 5;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Get terminal width, defaulting to None for pipes
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

fn bar_width(term_width: Option<usize>) -> usize {
    match term_width {
        Some(width) => width
            .saturating_sub(LABEL_WIDTH + SCORE_WIDTH + 4)
            .clamp(MIN_BAR_WIDTH, MAX_BAR_WIDTH),
        None => DEFAULT_BAR_WIDTH,
    }
}

/// Format a percentage rounded to the nearest integer ("78%")
pub fn format_score(score: f64) -> String {
    format!("{}%", round_percent(score))
}

/// Render a percentage as a fixed-width bar, e.g. "█████░░░░░" for 50%.
/// Values outside 0-100 are clamped.
pub fn format_bar(percent: f64, width: usize) -> String {
    let filled = ((percent.clamp(0.0, 100.0) / 100.0) * width as f64).round() as usize;
    let filled = filled.min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

fn paint_tier(text: &str, tier: RecommendationTier) -> String {
    match tier {
        RecommendationTier::Yes => text.green().bold().to_string(),
        RecommendationTier::Maybe => text.yellow().bold().to_string(),
        RecommendationTier::No => text.red().bold().to_string(),
    }
}

fn paint_level(text: &str, level: GapLevel) -> String {
    match level {
        GapLevel::Strength => text.green().to_string(),
        GapLevel::Developing => text.yellow().to_string(),
        GapLevel::Gap => text.red().to_string(),
    }
}

fn score_line(label: &str, score: f64, width: usize) -> String {
    format!(
        "{:<label$}{:>score$}  {}",
        label,
        format_score(score),
        format_bar(score, width),
        label = LABEL_WIDTH,
        score = SCORE_WIDTH
    )
}

/// Format the full human-readable report: overall verdict, section scores,
/// WISCAR breakdown, skill-gap table and next steps.
pub fn format_report(
    report: &ScoreReport,
    gaps: &[SkillGap],
    guidance: &GuidanceContent,
    use_colors: bool,
) -> String {
    let width = bar_width(get_terminal_width());
    let tier = report.recommendation_tier;
    let mut lines = Vec::new();

    let verdict = format!("{} - {}", tier.verdict(), tier.status());
    let overall = format!("Overall Readiness Score: {}%", report.display_overall());
    if use_colors {
        lines.push(overall.bold().to_string());
        lines.push(paint_tier(&verdict, tier));
    } else {
        lines.push(overall);
        lines.push(verdict);
    }
    lines.push(format_bar(report.overall_score, width));
    lines.push(String::new());

    lines.push(heading("Section Scores", use_colors));
    lines.push(score_line("Psychometric", report.psychometric_score, width));
    lines.push(score_line("Technical", report.technical_score, width));
    lines.push(score_line("WISCAR", report.wiscar_average, width));
    lines.push(String::new());

    lines.push(heading("WISCAR Breakdown", use_colors));
    for dimension in Dimension::ALL {
        let label = format!("{} {}", dimension.code(), dimension.name());
        lines.push(score_line(&label, report.wiscar_score(dimension), width));
    }
    lines.push(String::new());

    lines.push(heading("Skill Gaps", use_colors));
    lines.push(format_skill_gaps(gaps, use_colors));
    lines.push(String::new());

    lines.push(heading("Next Steps", use_colors));
    lines.push(format_guidance(guidance, use_colors));

    lines.join("\n")
}

fn heading(text: &str, use_colors: bool) -> String {
    if use_colors {
        text.bold().underline().to_string()
    } else {
        text.to_string()
    }
}

/// One line per area: name, rounded score, level
pub fn format_skill_gaps(gaps: &[SkillGap], use_colors: bool) -> String {
    gaps.iter()
        .map(|gap| {
            let level = if use_colors {
                paint_level(gap.level.label(), gap.level)
            } else {
                gap.level.label().to_string()
            };
            format!(
                "{:<label$}{:>score$}  {}",
                gap.area,
                format_score(gap.score),
                level,
                label = LABEL_WIDTH,
                score = SCORE_WIDTH
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Headline, summary and a numbered list of steps or alternative roles
pub fn format_guidance(guidance: &GuidanceContent, use_colors: bool) -> String {
    let mut lines = Vec::new();
    if use_colors {
        lines.push(guidance.headline().bold().to_string());
    } else {
        lines.push(guidance.headline().to_string());
    }
    lines.push(guidance.summary().to_string());
    for (i, item) in guidance.items().iter().enumerate() {
        lines.push(format!("{:>3}. {}", i + 1, item));
    }
    lines.join("\n")
}

/// Tab-separated `section\tscore` lines for scripting, rounded, no colors
pub fn format_tsv(report: &ScoreReport) -> String {
    let mut rows = vec![
        ("psychometric".to_string(), round_percent(report.psychometric_score).to_string()),
        ("technical".to_string(), round_percent(report.technical_score).to_string()),
    ];
    rows.extend(Dimension::ALL.into_iter().map(|d| {
        (
            format!("wiscar.{}", d.code()),
            round_percent(report.wiscar_score(d)).to_string(),
        )
    }));
    rows.push(("wiscar".to_string(), round_percent(report.wiscar_average).to_string()));
    rows.push(("overall".to_string(), report.display_overall().to_string()));
    rows.push((
        "recommendation".to_string(),
        report.recommendation_tier.verdict().to_string(),
    ));

    rows.into_iter()
        .map(|(key, value)| format!("{}\t{}", key, value))
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Serialize)]
struct JsonReport<'a> {
    report: &'a ScoreReport,
    skill_gaps: &'a [SkillGap],
    guidance: &'a GuidanceContent,
}

/// Pretty-printed JSON with unrounded scores
pub fn format_json(
    report: &ScoreReport,
    gaps: &[SkillGap],
    guidance: &GuidanceContent,
) -> Result<String> {
    serde_json::to_string_pretty(&JsonReport {
        report,
        skill_gaps: gaps,
        guidance,
    })
    .context("Failed to serialize report")
}

/// Answered/expected per section, marking incomplete ones
pub fn format_progress(rows: &[SectionProgress], use_colors: bool) -> String {
    rows.iter()
        .map(|row| {
            let status = if row.is_complete() { "complete" } else { "incomplete" };
            let status = match (use_colors, row.is_complete()) {
                (true, true) => status.green().to_string(),
                (true, false) => status.red().to_string(),
                (false, _) => status.to_string(),
            };
            format!(
                "{:<32}{:>3}/{:<3} {}",
                row.section.to_string(),
                row.answered,
                row.expected,
                status
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::{progress, ResponseSet};
    use crate::scoring::{
        aggregate, derive_guidance, skill_gaps, GuidanceConfig, ScoringConfig, Thresholds,
    };
    use std::collections::BTreeMap;

    fn sample_report() -> ScoreReport {
        let wiscar: BTreeMap<Dimension, f64> = Dimension::ALL
            .into_iter()
            .map(|d| (d, 80.0))
            .collect();
        aggregate(78.0, 85.0, &wiscar, &Thresholds::default())
    }

    #[test]
    fn test_format_score_rounds() {
        assert_eq!(format_score(78.4), "78%");
        assert_eq!(format_score(78.5), "79%");
        assert_eq!(format_score(0.0), "0%");
        assert_eq!(format_score(100.0), "100%");
    }

    #[test]
    fn test_format_bar() {
        assert_eq!(format_bar(50.0, 10), "█████░░░░░");
        assert_eq!(format_bar(0.0, 4), "░░░░");
        assert_eq!(format_bar(100.0, 4), "████");
    }

    #[test]
    fn test_format_bar_clamps() {
        assert_eq!(format_bar(150.0, 5), "█████");
        assert_eq!(format_bar(-20.0, 5), "░░░░░");
    }

    #[test]
    fn test_bar_width() {
        assert_eq!(bar_width(None), DEFAULT_BAR_WIDTH);
        assert_eq!(bar_width(Some(20)), MIN_BAR_WIDTH);
        assert_eq!(bar_width(Some(300)), MAX_BAR_WIDTH);
        assert_eq!(bar_width(Some(53)), 20);
    }

    #[test]
    fn test_format_report_plain() {
        let report = sample_report();
        let gaps = skill_gaps(&report, &Thresholds::default());
        let guidance = derive_guidance(
            report.recommendation_tier,
            "Scrum Master",
            &GuidanceConfig::default(),
        );

        let result = format_report(&report, &gaps, &guidance, false);
        assert!(result.starts_with("Overall Readiness Score: 81%"));
        assert!(result.contains("YES - Strong Match"));
        assert!(result.contains("Psychometric"));
        assert!(result.contains("78%"));
        assert!(result.contains("R Real-World Alignment"));
        assert!(result.contains("Skill Gaps"));
        assert!(result.contains("Strong Match - Begin Training"));
        assert!(result.contains("  1. Enroll in Certified ScrumMaster (CSM) training"));
    }

    #[test]
    fn test_format_skill_gaps() {
        let report = sample_report();
        let gaps = skill_gaps(&report, &Thresholds::default());
        let result = format_skill_gaps(&gaps, false);
        let lines: Vec<&str> = result.lines().collect();
        assert_eq!(lines.len(), 8);
        assert!(lines[0].starts_with("Psychometric"));
        assert!(lines[0].ends_with("Strength"));
    }

    #[test]
    fn test_format_guidance_alternatives() {
        let guidance =
            derive_guidance(RecommendationTier::No, "Scrum Master", &GuidanceConfig::default());
        let result = format_guidance(&guidance, false);
        let lines: Vec<&str> = result.lines().collect();
        assert_eq!(lines[0], "Consider Alternative Paths");
        assert_eq!(lines[2], "  1. Project Coordinator");
        assert_eq!(lines.len(), 6);
    }

    #[test]
    fn test_format_tsv() {
        let report = sample_report();
        let result = format_tsv(&report);
        let lines: Vec<&str> = result.lines().collect();
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[0], "psychometric\t78");
        assert_eq!(lines[1], "technical\t85");
        assert_eq!(lines[2], "wiscar.W\t80");
        assert_eq!(lines[8], "wiscar\t80");
        assert_eq!(lines[9], "overall\t81");
        assert_eq!(lines[10], "recommendation\tYES");
    }

    #[test]
    fn test_format_json() {
        let report = sample_report();
        let gaps = skill_gaps(&report, &Thresholds::default());
        let guidance = derive_guidance(
            report.recommendation_tier,
            "Scrum Master",
            &GuidanceConfig::default(),
        );

        let json = format_json(&report, &gaps, &guidance).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["report"]["recommendation_tier"], "YES");
        assert_eq!(value["report"]["wiscar_scores"]["C"], 80.0);
        assert_eq!(value["skill_gaps"].as_array().unwrap().len(), 8);
        assert_eq!(value["guidance"]["kind"], "learning_path");
    }

    #[test]
    fn test_format_progress() {
        let config = ScoringConfig::default();
        let mut responses = ResponseSet::new();
        for q in 0..10 {
            responses.record_psychometric(q, 3);
        }
        let rows = progress(&responses, &config);
        let result = format_progress(&rows, false);
        let lines: Vec<&str> = result.lines().collect();
        assert_eq!(lines.len(), 8);
        assert!(lines[0].starts_with("Psychometric"));
        assert!(lines[0].contains(" 10/10"));
        assert!(lines[0].ends_with("complete"));
        assert!(lines[1].ends_with("incomplete"));
        assert!(lines[1].contains("  0/8"));
    }
}
