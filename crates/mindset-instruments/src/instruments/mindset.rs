use crate::Instrument;
use crate::scoring::{Dimension, Interpretation, Statement};

fn statements(defs: &[(&str, &str, bool)]) -> Vec<Statement> {
    defs.iter()
        .map(|(id, text, positive)| Statement {
            id: id.to_string(),
            text: text.to_string(),
            positive: *positive,
        })
        .collect()
}

fn interpretation(high: &str, mid: &str, low: &str) -> Interpretation {
    Interpretation {
        high: high.to_string(),
        mid: mid.to_string(),
        low: low.to_string(),
    }
}

/// 思维模式评估: growth mindset, coping style, self-awareness and openness.
/// 33 statements rated 1–5; negative-polarity items are reverse scored.
pub struct MindsetAssessment;

impl Instrument for MindsetAssessment {
    fn id(&self) -> &str {
        "mindset"
    }

    fn name(&self) -> &str {
        "思维模式评估"
    }

    fn dimensions(&self) -> &[Dimension] {
        static DIMENSIONS: std::sync::LazyLock<Vec<Dimension>> = std::sync::LazyLock::new(|| {
            vec![
                Dimension {
                    id: "growth_mindset".to_string(),
                    label: "成长信念".to_string(),
                    statements: statements(&[
                        ("gm1", "当遇到挫折时，我倾向于将其视为学习的机会", true),
                        ("gm2", "当有人指出我的不足时，我会感到不安", false),
                        ("gm3", "我相信每个人都有持续进步的潜力", true),
                        ("gm4", "如果一件事我天生就不擅长，那最好避免去做", false),
                        ("gm5", "我认为天赋决定了一个人能达到的高度", false),
                        ("gm6", "即使很有天赋的人，不努力也难有大的成就", true),
                        ("gm7", "面对新的挑战，我相信通过努力能够掌握所需的能力", true),
                        ("gm8", "看到别人轻松做好某事时，我会怀疑自己的能力", false),
                        ("gm9", "犯错让我明白还有哪些需要学习", true),
                    ]),
                    interpretation: interpretation(
                        "您展现出强烈的成长型思维倾向，相信通过努力能够提升能力和实现突破。",
                        "您具有一定的成长型思维特征，但在某些领域可能还存在固定型思维。",
                        "您在一些方面可能倾向于固定型思维，建议探索更多发展的可能性。",
                    ),
                },
                Dimension {
                    id: "coping_style".to_string(),
                    label: "应对模式".to_string(),
                    statements: statements(&[
                        ("cs1", "面对困难时，我通常能保持冷静思考", true),
                        ("cs2", "当问题变得复杂时，我容易感到焦虑", false),
                        ("cs3", "我倾向于把问题分解成小步骤来解决", true),
                        ("cs4", "遇到障碍时，我常常不知道从何下手", false),
                        ("cs5", "遇到问题时，我会主动寻求解决方案", true),
                        ("cs6", "我倾向于回避令我不舒服的情况", false),
                        ("cs7", "我能够从多个角度思考问题", true),
                        ("cs8", "遇到挫折后，我需要较长时间才能调整心态", false),
                    ]),
                    interpretation: interpretation(
                        "您展现出积极有效的问题解决方式，能够冷静思考并采取行动。",
                        "您的应对方式较为灵活，但在某些情况下可能需要更多策略支持。",
                        "您可以尝试发展更多元的问题解决策略，提升应对效能。",
                    ),
                },
                Dimension {
                    id: "self_awareness".to_string(),
                    label: "自我认知".to_string(),
                    statements: statements(&[
                        ("sa1", "我能清楚地认识自己的优势和局限", true),
                        ("sa2", "我经常怀疑自己的决定是否正确", false),
                        ("sa3", "我知道什么对我来说是最重要的", true),
                        ("sa4", "我总觉得自己比不上其他人", false),
                        ("sa5", "我能根据实际情况调整自己的期望", true),
                        ("sa6", "我很在意别人对我的评价", false),
                        ("sa7", "我能客观评估自己的表现", true),
                        ("sa8", "即使犯错，我也不会过分苛责自己", true),
                    ]),
                    interpretation: interpretation(
                        "您对自己有清晰的认识，能够客观评估自己的优势和发展空间。",
                        "您具备基本的自我认知能力，可以进一步提升自我觉察。",
                        "您可以投入更多关注在自我探索和认知上，建立更清晰的自我认识。",
                    ),
                },
                Dimension {
                    id: "openness".to_string(),
                    label: "开放性".to_string(),
                    statements: statements(&[
                        ("o1", "我愿意尝试新的方法和思路", true),
                        ("o2", "改变既定计划让我感到不安", false),
                        ("o3", "我对未知的事物感到好奇", true),
                        ("o4", "我更倾向于使用已经熟悉的方式", false),
                        ("o5", "我能灵活调整计划来适应新情况", true),
                        ("o6", "面对变化，我更多看到风险而非机会", false),
                        ("o7", "我喜欢听取不同的观点和建议", true),
                        ("o8", "我觉得按照惯例做事更有保障", false),
                    ]),
                    interpretation: interpretation(
                        "您展现出高度的开放性，愿意尝试新事物并接纳不同观点。",
                        "您在开放性方面表现中等，在某些情况下会尝试新的可能。",
                        "您可能更倾向于保持在熟悉的范围内，可以尝试逐步探索新的可能性。",
                    ),
                },
            ]
        });
        &DIMENSIONS
    }
}
