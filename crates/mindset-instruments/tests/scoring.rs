use mindset_core::models::answer::AnswerSet;
use mindset_core::models::report::Tier;
use mindset_instruments::error::InstrumentError;
use mindset_instruments::instruments::mindset::MindsetAssessment;
use mindset_instruments::scoring::{build_radar_data, compute_scores, scale_legend};
use mindset_instruments::{Instrument, get_instrument};

fn rate_all(instrument: &dyn Instrument, value: i64) -> AnswerSet {
    let mut answers = AnswerSet::new();
    for statement in instrument.statements() {
        answers.record(&statement.id, value).unwrap();
    }
    answers
}

fn rate_dimension(instrument: &dyn Instrument, dimension_id: &str, value: i64) -> AnswerSet {
    let mut answers = AnswerSet::new();
    let dimension = instrument
        .dimensions()
        .iter()
        .find(|d| d.id == dimension_id)
        .unwrap();
    for statement in &dimension.statements {
        answers.record(&statement.id, value).unwrap();
    }
    answers
}

fn score_of(instrument: &dyn Instrument, answers: &AnswerSet, dimension_id: &str) -> u32 {
    instrument
        .compute_scores(answers)
        .into_iter()
        .find(|s| s.dimension_id == dimension_id)
        .unwrap()
        .score
}

#[test]
fn catalog_shape() {
    let instrument = MindsetAssessment;
    let shape: Vec<_> = instrument
        .dimensions()
        .iter()
        .map(|d| (d.id.as_str(), d.statements.len(), d.max_score()))
        .collect();
    assert_eq!(
        shape,
        [
            ("growth_mindset", 9, 45),
            ("coping_style", 8, 40),
            ("self_awareness", 8, 40),
            ("openness", 8, 40),
        ]
    );
    assert_eq!(instrument.statement_count(), 33);
}

#[test]
fn statement_ids_are_unique() {
    let instrument = MindsetAssessment;
    let mut ids: Vec<_> = instrument.statements().iter().map(|s| s.id.clone()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 33);
}

#[test]
fn polarity_counts() {
    let instrument = MindsetAssessment;
    let counts: Vec<_> = instrument
        .dimensions()
        .iter()
        .map(|d| (d.positive_count(), d.negative_count()))
        .collect();
    assert_eq!(counts, [(5, 4), (4, 4), (5, 3), (4, 4)]);
}

#[test]
fn all_minimum_ratings() {
    let instrument = MindsetAssessment;
    let answers = rate_all(&instrument, 1);
    for (dimension, score) in instrument.dimensions().iter().zip(instrument.compute_scores(&answers)) {
        let expected = dimension.positive_count() as u32 + 5 * dimension.negative_count() as u32;
        assert_eq!(score.score, expected, "{}", dimension.id);
    }
}

#[test]
fn all_maximum_ratings() {
    let instrument = MindsetAssessment;
    let answers = rate_all(&instrument, 5);
    for (dimension, score) in instrument.dimensions().iter().zip(instrument.compute_scores(&answers)) {
        let expected = 5 * dimension.positive_count() as u32 + dimension.negative_count() as u32;
        assert_eq!(score.score, expected, "{}", dimension.id);
    }
}

#[test]
fn best_possible_answers_reach_max() {
    let instrument = MindsetAssessment;
    let mut answers = AnswerSet::new();
    for statement in instrument.statements() {
        let value = if statement.positive { 5 } else { 1 };
        answers.record(&statement.id, value).unwrap();
    }
    for score in instrument.compute_scores(&answers) {
        assert_eq!(score.score, score.max_score);
    }
}

#[test]
fn empty_answers_count_missing_negatives_as_six() {
    let instrument = MindsetAssessment;
    let answers = AnswerSet::new();
    let scores = compute_scores(instrument.dimensions(), &answers);
    let actual: Vec<_> = scores.iter().map(|s| s.score).collect();
    assert_eq!(actual, [24, 24, 18, 24]);
}

#[test]
fn missing_negatives_can_exceed_nominal_max() {
    let instrument = MindsetAssessment;
    let mut answers = AnswerSet::new();
    for id in ["cs1", "cs3", "cs5", "cs7"] {
        answers.record(id, 5).unwrap();
    }
    let score = score_of(&instrument, &answers, "coping_style");
    assert_eq!(score, 44);
    let dimension = &instrument.dimensions()[1];
    assert_eq!(dimension.interpret(score), Tier::High);
}

#[test]
fn growth_mindset_all_threes_is_mid() {
    let instrument = MindsetAssessment;
    let answers = rate_dimension(&instrument, "growth_mindset", 3);
    let scores = instrument.compute_scores(&answers);
    assert_eq!(scores[0].score, 27);

    let results = instrument.interpret(&scores);
    assert_eq!(results[0].tier, Tier::Mid);
    assert!(results[0].sentence.starts_with("您具有一定的成长型思维特征"));
}

#[test]
fn coping_style_all_fives_sits_on_mid_boundary() {
    let instrument = MindsetAssessment;
    let answers = rate_dimension(&instrument, "coping_style", 5);
    let score = score_of(&instrument, &answers, "coping_style");
    assert_eq!(score, 24);
    assert_eq!(instrument.dimensions()[1].interpret(score), Tier::Mid);
    assert_eq!(instrument.dimensions()[1].interpret(23), Tier::Low);
}

#[test]
fn thresholds_are_eighty_and_sixty_percent() {
    let instrument = MindsetAssessment;
    let thresholds: Vec<_> = instrument
        .dimensions()
        .iter()
        .map(|d| (d.high_threshold(), d.mid_threshold()))
        .collect();
    assert_eq!(thresholds, [(36, 27), (32, 24), (32, 24), (32, 24)]);
}

#[test]
fn tiers_are_monotonic() {
    let instrument = MindsetAssessment;
    for dimension in instrument.dimensions() {
        let mut previous = Tier::Low;
        for score in 0..=dimension.max_score() + 10 {
            let tier = dimension.interpret(score);
            assert!(tier >= previous, "{} at {score}", dimension.id);
            previous = tier;
        }
        assert_eq!(dimension.interpret(0), Tier::Low);
        assert_eq!(dimension.interpret(dimension.max_score()), Tier::High);
    }
}

#[test]
fn each_dimension_has_three_distinct_sentences() {
    let instrument = MindsetAssessment;
    for dimension in instrument.dimensions() {
        let sentences = [Tier::High, Tier::Mid, Tier::Low].map(|t| dimension.interpretation.sentence(t));
        assert!(sentences.iter().all(|s| !s.is_empty()));
        assert_ne!(sentences[0], sentences[1]);
        assert_ne!(sentences[1], sentences[2]);
    }
}

#[test]
fn completion_rate_bounds() {
    let instrument = MindsetAssessment;
    assert_eq!(instrument.completion_rate(&AnswerSet::new()), 0.0);
    assert_eq!(instrument.completion_rate(&rate_all(&instrument, 4)), 100.0);

    let mut answers = AnswerSet::new();
    answers.record("gm1", 2).unwrap();
    let rate = instrument.completion_rate(&answers);
    assert!((rate - 100.0 / 33.0).abs() < 1e-9);
}

#[test]
fn completion_rate_ignores_ids_outside_catalog() {
    let instrument = MindsetAssessment;
    let mut answers = AnswerSet::new();
    answers.record("not_a_statement", 3).unwrap();
    assert_eq!(instrument.completion_rate(&answers), 0.0);
}

#[test]
fn radar_data_in_display_order() {
    let instrument = MindsetAssessment;
    let answers = rate_all(&instrument, 3);
    let radar = build_radar_data(&instrument.compute_scores(&answers));
    let labels: Vec<_> = radar.iter().map(|p| (p.dimension.as_str(), p.full_mark)).collect();
    assert_eq!(
        labels,
        [("成长信念", 45), ("应对模式", 40), ("自我认知", 40), ("开放性", 40)]
    );
    assert_eq!(radar[0].score, 27);
}

#[test]
fn radar_point_serializes_for_chart() {
    let instrument = MindsetAssessment;
    let radar = build_radar_data(&instrument.compute_scores(&AnswerSet::new()));
    let json = serde_json::to_value(&radar[1]).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "dimension": "应对模式", "score": 24, "fullMark": 40 })
    );
}

#[test]
fn report_counts_answers() {
    let instrument = MindsetAssessment;
    let mut answers = AnswerSet::new();
    answers.record("o1", 5).unwrap();
    answers.record("o2", 1).unwrap();
    let report = instrument.report(uuid::Uuid::new_v4(), &answers);
    assert_eq!(report.instrument_id, "mindset");
    assert_eq!(report.answered, 2);
    assert_eq!(report.total, 33);
    assert_eq!(report.dimensions.len(), 4);
    assert_eq!(report.radar.len(), 4);
}

#[test]
fn unknown_statement_is_rejected() {
    let instrument = MindsetAssessment;
    assert!(instrument.statement("gm9").is_ok());
    assert!(matches!(
        instrument.statement("gm10"),
        Err(InstrumentError::UnknownStatement { .. })
    ));
}

#[test]
fn instrument_lookup() {
    assert_eq!(get_instrument("mindset").unwrap().name(), "思维模式评估");
    assert!(matches!(
        get_instrument("big_five"),
        Err(InstrumentError::UnknownInstrument(_))
    ));
}

#[test]
fn legend_lists_scale() {
    assert_eq!(
        scale_legend(),
        "1=非常不符合, 2=比较不符合, 3=一般, 4=比较符合, 5=非常符合"
    );
}
