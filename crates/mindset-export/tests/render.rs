use mindset_core::models::report::{AssessmentReport, DimensionResult, RadarPoint, Tier};
use mindset_export::chart::{render_progress, render_radar_bars};
use mindset_export::error::ExportError;
use mindset_export::render::{render_json, render_summary, render_template};
use mindset_export::styles::ChartStyle;

fn sample_report() -> AssessmentReport {
    let dimensions = vec![
        DimensionResult {
            dimension_id: "growth_mindset".to_string(),
            label: "成长信念".to_string(),
            score: 27,
            max_score: 45,
            tier: Tier::Mid,
            sentence: "您具有一定的成长型思维特征，但在某些领域可能还存在固定型思维。".to_string(),
        },
        DimensionResult {
            dimension_id: "openness".to_string(),
            label: "开放性".to_string(),
            score: 40,
            max_score: 40,
            tier: Tier::High,
            sentence: "您展现出高度的开放性，愿意尝试新事物并接纳不同观点。".to_string(),
        },
    ];
    let radar = dimensions
        .iter()
        .map(|d| RadarPoint {
            dimension: d.label.clone(),
            score: d.score,
            full_mark: d.max_score,
        })
        .collect();

    AssessmentReport {
        session_id: uuid::Uuid::new_v4(),
        instrument_id: "mindset".to_string(),
        instrument_name: "思维模式评估".to_string(),
        answered: 17,
        total: 33,
        completion_rate: 17.0 / 33.0 * 100.0,
        dimensions,
        radar,
        generated_at: jiff::Timestamp::UNIX_EPOCH,
    }
}

#[test]
fn summary_lists_scores_and_sentences() {
    let text = render_summary(&sample_report()).unwrap();
    assert!(text.starts_with("思维模式评估 · 评估结果"));
    assert!(text.contains("完成度：52% (17/33)"));
    assert!(text.contains("成长信念：27/45"));
    assert!(text.contains("开放性：40/40"));
    assert!(text.contains("维度解释"));
    assert!(text.contains("成长信念 (27/45)"));
    assert!(text.contains("您展现出高度的开放性"));
}

#[test]
fn custom_template_sees_report_fields() {
    let text = render_template(
        "tiers.txt",
        "{% for d in dimensions %}{{ d.dimension_id }}={{ d.tier }};{% endfor %}",
        &sample_report(),
    )
    .unwrap();
    assert_eq!(text, "growth_mindset=mid;openness=high;");
}

#[test]
fn broken_template_is_a_parse_error() {
    let err = render_template("bad.txt", "{% for d in %}", &sample_report()).unwrap_err();
    assert!(matches!(err, ExportError::TemplateParse(_)));
}

#[test]
fn json_output_uses_chart_field_names() {
    let json: serde_json::Value =
        serde_json::from_str(&render_json(&sample_report()).unwrap()).unwrap();
    assert_eq!(json["radar"][0]["dimension"], "成长信念");
    assert_eq!(json["radar"][0]["fullMark"], 45);
    assert_eq!(json["dimensions"][1]["tier"], "high");
}

#[test]
fn radar_bars_scale_to_full_mark() {
    let report = sample_report();
    let text = render_radar_bars(&report.radar, &ChartStyle::with_width(10));
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "成长信念 ██████░░░░ 27分 / 45");
    assert_eq!(lines[1], "开放性   ██████████ 40分 / 40");
}

#[test]
fn radar_bar_is_capped_when_score_exceeds_full_mark() {
    let points = [RadarPoint {
        dimension: "应对模式".to_string(),
        score: 44,
        full_mark: 40,
    }];
    let text = render_radar_bars(&points, &ChartStyle::with_width(4));
    assert_eq!(text, "应对模式 ████ 44分 / 40\n");
}

#[test]
fn progress_line() {
    let style = ChartStyle::with_width(4);
    assert_eq!(render_progress(0.0, &style), "[░░░░] 0%");
    assert_eq!(render_progress(50.0, &style), "[██░░] 50%");
    assert_eq!(render_progress(100.0, &style), "[████] 100%");
}
