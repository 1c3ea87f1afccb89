use std::io::{self, Write};

use eyre::Result;
use mindset_cli::config::{self, MindsetConfig};
use mindset_cli::prompt::{self, PromptOptions};
use mindset_cli::session::Session;
use mindset_instruments::get_instrument;
use mindset_instruments::scoring::scale_legend;

use crate::opt::{Commands, ConfigCommand, Questions, Score, Take};

pub(crate) fn exec(command: Commands) -> Result<()> {
    match command {
        Commands::Take(o) => take(o, &config::load_config()?),
        Commands::Score(o) => score(o, &config::load_config()?),
        Commands::Questions(o) => questions(o),
        Commands::Config(c) => manage_config(c),
    }
}

fn take(opts: Take, config: &MindsetConfig) -> Result<()> {
    let mut session = Session::for_instrument(&opts.instrument)?;
    let options = PromptOptions::from_config(config, opts.json);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout().lock();
    prompt::run(&mut session, &mut input, &mut out, &options)
}

fn score(opts: Score, config: &MindsetConfig) -> Result<()> {
    let mut session = Session::for_instrument(&opts.instrument)?;
    session.record_events(&opts.answers)?;
    let report = session.show_results();

    let options = PromptOptions::from_config(config, opts.json);
    let mut out = io::stdout().lock();
    prompt::write_report(&mut out, &report, &options)
}

fn questions(opts: Questions) -> Result<()> {
    let instrument = get_instrument(&opts.instrument)?;
    let mut out = io::stdout().lock();

    writeln!(out, "{}", instrument.name())?;
    writeln!(out, "{}", scale_legend())?;
    for dimension in instrument.dimensions() {
        writeln!(out)?;
        writeln!(out, "{} (0-{})", dimension.label, dimension.max_score())?;
        for (index, statement) in dimension.statements.iter().enumerate() {
            writeln!(out, "  {}. [{}] {}", index + 1, statement.id, statement.text)?;
        }
    }
    Ok(())
}

fn manage_config(command: ConfigCommand) -> Result<()> {
    let mut out = io::stdout().lock();
    match command {
        ConfigCommand::Show => {
            let path = config::config_path()?;
            let config = config::load_config()?;
            let source = if config::has_config() { "file" } else { "defaults" };
            writeln!(out, "# {} ({source})", path.display())?;
            writeln!(out, "{}", serde_json::to_string_pretty(&config)?)?;
        }
        ConfigCommand::Init => {
            if config::has_config() {
                writeln!(out, "config already exists at {}", config::config_path()?.display())?;
            } else {
                let path = config::save_config(&MindsetConfig::default())?;
                writeln!(out, "wrote {}", path.display())?;
            }
        }
        ConfigCommand::Reset => {
            config::delete_config()?;
            writeln!(out, "config removed")?;
        }
    }
    Ok(())
}
