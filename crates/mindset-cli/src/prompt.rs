use std::io::{BufRead, Write};

use mindset_core::models::report::AssessmentReport;
use mindset_core::models::view::ViewMode;
use mindset_export::chart::{render_progress, render_radar_bars};
use mindset_export::render::{render_json, render_summary};
use mindset_export::styles::ChartStyle;
use mindset_instruments::scoring::scale_legend;

use crate::config::{MindsetConfig, OutputFormat};
use crate::session::{Session, SessionError};

#[derive(Debug, Clone)]
pub struct PromptOptions {
    pub style: ChartStyle,
    pub show_legend: bool,
    pub output: OutputFormat,
}

impl PromptOptions {
    /// Options from the config file; `force_json` is the `--json` flag.
    pub fn from_config(config: &MindsetConfig, force_json: bool) -> Self {
        Self {
            style: config.chart_style(),
            show_legend: config.show_legend,
            output: if force_json {
                OutputFormat::Json
            } else {
                config.output
            },
        }
    }
}

impl Default for PromptOptions {
    fn default() -> Self {
        Self::from_config(&MindsetConfig::default(), false)
    }
}

/// What a line typed at a statement prompt means.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Rate(i64),
    /// Empty line: keep the current answer, or leave it unanswered.
    Keep,
    /// `s`: stop here and show results.
    Submit,
    /// `q`: leave without showing results.
    Quit,
    Invalid(String),
}

pub fn parse_input(line: &str) -> Input {
    let line = line.trim();
    match line {
        "" => Input::Keep,
        "s" | "S" => Input::Submit,
        "q" | "Q" => Input::Quit,
        _ => line
            .parse::<i64>()
            .map(Input::Rate)
            .unwrap_or_else(|_| Input::Invalid(line.to_string())),
    }
}

/// How the questionnaire pass ended.
enum Pass {
    Submitted,
    Quit,
}

fn read_line<R: BufRead>(input: &mut R) -> eyre::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

/// Drive a session until the respondent quits or input runs out.
///
/// The questionnaire view asks every statement in order; the results view
/// prints the report and offers `r` to go back with all answers kept.
pub fn run<R: BufRead, W: Write>(
    session: &mut Session,
    input: &mut R,
    out: &mut W,
    options: &PromptOptions,
) -> eyre::Result<()> {
    loop {
        match session.view() {
            ViewMode::Questionnaire => match questionnaire_pass(session, input, out, options)? {
                Pass::Submitted => {
                    session.show_results();
                }
                Pass::Quit => return Ok(()),
            },
            ViewMode::Results => {
                write_report(out, &session.report(), options)?;
                loop {
                    writeln!(out, "r=返回问卷, q=退出")?;
                    out.flush()?;
                    match read_line(input)?.as_deref().map(str::trim) {
                        Some("r") | Some("R") => {
                            session.return_to_questionnaire();
                            break;
                        }
                        Some("q") | Some("Q") | None => return Ok(()),
                        Some(other) => writeln!(out, "无法识别的输入 '{other}': 请输入 r 或 q")?,
                    }
                }
            }
        }
    }
}

fn questionnaire_pass<R: BufRead, W: Write>(
    session: &mut Session,
    input: &mut R,
    out: &mut W,
    options: &PromptOptions,
) -> eyre::Result<Pass> {
    let instrument = session.instrument();
    writeln!(out, "{}", instrument.name())?;
    if options.show_legend {
        writeln!(out, "{}", scale_legend())?;
    }
    writeln!(out, "回车跳过或保留当前答案, s=查看结果, q=退出")?;

    let dimensions = instrument.dimensions().to_vec();
    for dimension in &dimensions {
        writeln!(out)?;
        writeln!(out, "{}", dimension.label)?;
        for (index, statement) in dimension.statements.iter().enumerate() {
            loop {
                writeln!(out, "{}", render_progress(session.completion_rate(), &options.style))?;
                match session.answers().get(&statement.id) {
                    Some(current) => write!(
                        out,
                        "{}. {} [{current} {}] > ",
                        index + 1,
                        statement.text,
                        current.label()
                    )?,
                    None => write!(out, "{}. {} > ", index + 1, statement.text)?,
                }
                out.flush()?;

                let Some(line) = read_line(input)? else {
                    // Input closed: score whatever has been answered.
                    writeln!(out)?;
                    return Ok(Pass::Submitted);
                };
                match parse_input(&line) {
                    Input::Keep => break,
                    Input::Submit => return Ok(Pass::Submitted),
                    Input::Quit => return Ok(Pass::Quit),
                    Input::Rate(value) => match session.record(&statement.id, value) {
                        Ok(_) => break,
                        Err(SessionError::Core(e)) => writeln!(out, "{e}")?,
                        Err(e) => return Err(e.into()),
                    },
                    Input::Invalid(text) => {
                        writeln!(out, "无法识别的输入 '{text}': 请输入 1-5, s 或 q")?
                    }
                }
            }
        }
    }
    Ok(Pass::Submitted)
}

/// Print a report as text (summary plus radar bars) or as JSON.
pub fn write_report<W: Write>(
    out: &mut W,
    report: &AssessmentReport,
    options: &PromptOptions,
) -> eyre::Result<()> {
    match options.output {
        OutputFormat::Text => {
            writeln!(out, "{}", render_summary(report)?)?;
            write!(out, "{}", render_radar_bars(&report.radar, &options.style))?;
        }
        OutputFormat::Json => writeln!(out, "{}", render_json(report)?)?,
    }
    Ok(())
}
