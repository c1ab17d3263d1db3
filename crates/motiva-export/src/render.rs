use tera::{Context, Tera};

use motiva_core::interpretations::interpretation;
use motiva_core::models::report::Report;

use crate::error::ExportError;

/// Report template in the Markdown subset [`crate::layout`] understands.
/// Horizontal rules separate the profile summary and each expanded driver
/// onto their own pages.
const REPORT_TEMPLATE: &str = "\
# Career Motivation Map

Prepared for {{ participant }} on {{ date_human }}.

## Your motivation profile

{% for score in scores -%}
- {{ score.label }}: {{ score.scaled }}/100
{% endfor %}
Higher scores mean the driver weighs more heavily in your day-to-day motivation.
Read the expanded notes for your top drivers on the following pages.

---

## {{ primary.title }}

{{ primary.meaning }}

### What to seek

{% for item in primary.seek -%}
- {{ item }}
{% endfor %}
### What to avoid

{% for item in primary.avoid -%}
- {{ item }}
{% endfor %}
### Questions to ask

{% for item in primary.prompts -%}
- {{ item }}
{% endfor %}
{% if secondary -%}
---

## {{ secondary.title }}

{{ secondary.meaning }}

### What to seek

{% for item in secondary.seek -%}
- {{ item }}
{% endfor %}
### What to avoid

{% for item in secondary.avoid -%}
- {{ item }}
{% endfor %}
### Questions to ask

{% for item in secondary.prompts -%}
- {{ item }}
{% endfor %}
{% endif -%}
";

/// Render the report to the Markdown-ish text the layout pass consumes.
/// Interpretations are expanded for the primary and, when the ranking has
/// more than one entry, the secondary driver.
pub fn render_report(report: &Report) -> Result<String, ExportError> {
    let primary = report.primary().map(|score| interpretation(score.driver));
    let secondary = report.secondary().map(|score| interpretation(score.driver));

    let value = serde_json::json!({
        "participant": report.participant,
        "date_human": report.date_human(),
        "scores": report.scores,
        "primary": primary,
        "secondary": secondary,
    });
    let context = Context::from_value(value)
        .map_err(|e| ExportError::TemplateRender(e.to_string()))?;

    let mut tera = Tera::default();
    tera.add_raw_template("report", REPORT_TEMPLATE)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let rendered = tera.render("report", &context)?;
    Ok(rendered)
}
