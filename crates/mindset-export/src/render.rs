use tera::{Context, Tera};

use mindset_core::models::report::AssessmentReport;

use crate::error::ExportError;

/// Default layout of the results view: totals first, then one
/// interpretation paragraph per dimension.
pub const SUMMARY_TEMPLATE: &str = "\
{{ instrument_name }} · 评估结果
完成度：{{ completion_percent }}% ({{ answered }}/{{ total }})
{% for d in dimensions %}
{{ d.label }}：{{ d.score }}/{{ d.max_score }}
{%- endfor %}

维度解释
{% for d in dimensions %}
{{ d.label }} ({{ d.score }}/{{ d.max_score }})
  {{ d.sentence }}
{% endfor %}";

/// Render a Tera template with an AssessmentReport.
///
/// The report fields become template variables, plus `completion_percent`
/// (the completion rate rounded to a whole number).
pub fn render_template(
    template_name: &str,
    template_content: &str,
    report: &AssessmentReport,
) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let value = serde_json::to_value(report)?;
    let mut context = Context::from_value(value)
        .map_err(|e| ExportError::TemplateRender(e.to_string()))?;
    context.insert("completion_percent", &(report.completion_rate.round() as u32));

    let rendered = tera.render(template_name, &context)?;
    tracing::debug!(template_name, bytes = rendered.len(), "template rendered");
    Ok(rendered)
}

/// Render the built-in results summary.
pub fn render_summary(report: &AssessmentReport) -> Result<String, ExportError> {
    render_template("summary.txt", SUMMARY_TEMPLATE, report)
}

/// The report as pretty JSON, for chart renderers and scripts.
pub fn render_json(report: &AssessmentReport) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(report)?)
}
