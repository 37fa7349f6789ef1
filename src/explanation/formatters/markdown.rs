use crate::explanation::types::OutfitExplanation;

/// Markdown formatter for explanations
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    /// Format explanation as markdown
    pub fn format(explanation: &OutfitExplanation) -> String {
        let mut md = String::with_capacity(1024);

        // Title with stars and score
        md.push_str(&format!(
            "# {} - {}\n\n",
            explanation.overall.stars, explanation.overall.label
        ));
        md.push_str(&format!(
            "**Compatibility:** {}/100\n\n",
            explanation.overall.score
        ));

        // Context
        let ctx = &explanation.context;
        md.push_str("## Context\n\n");
        md.push_str(&format!(
            "- Weather: {}\n",
            ctx.weather.as_deref().unwrap_or("not given")
        ));
        md.push_str(&format!(
            "- Occasion: {}\n",
            ctx.occasion.as_deref().unwrap_or("any")
        ));
        md.push_str(&format!("- Season: {}\n", ctx.season.as_deref().unwrap_or("any")));
        if ctx.excluded_items > 0 {
            md.push_str(&format!("- Excluded items: {}\n", ctx.excluded_items));
        }
        md.push('\n');

        // Slots
        if !explanation.slots.is_empty() {
            md.push_str("## Outfit\n\n");
            md.push_str("| Slot | Item | Category | Score | Why |\n");
            md.push_str("|------|------|----------|-------|-----|\n");
            for note in &explanation.slots {
                md.push_str(&format!(
                    "| {} | {} | {} | {} | {} |\n",
                    note.slot,
                    note.garment_id,
                    note.category,
                    note.score,
                    note.reasons.join(", ")
                ));
            }
            md.push('\n');
        }

        // Warnings
        if !explanation.warnings.is_empty() {
            md.push_str("## Warnings\n\n");
            for warning in &explanation.warnings {
                md.push_str(&format!(
                    "- ⚠️ **{}** ({:?}): {}  \n  *Advice:* {}\n",
                    warning.warning_type, warning.severity, warning.message, warning.advice
                ));
            }
            md.push('\n');
        }

        md
    }
}
