pub mod formatter;

pub use formatter::{
    format_bar, format_guidance, format_json, format_progress, format_report, format_score,
    format_skill_gaps, format_tsv, should_use_colors,
};
