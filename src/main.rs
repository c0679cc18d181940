use std::fs;
use std::io::{self, BufRead};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use hint_cards::hints::format::{csv, grouping};
use hint_cards::hints::source;
use hint_cards::{load_and_render, BodyFormat, CardRenderer, Config, GroupingMode, HtmlPage, TextSurface};

#[derive(Debug, Parser)]
#[command(name = "hint-cards", version, about = "Render staged puzzle hints as collapsible cards")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Write the HTML page.
    Render {
        #[command(flatten)]
        common: CommonArgs,
        /// Output file (stdout if omitted).
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Title clicks to simulate before writing the page.
        #[arg(long, default_value_t = 0)]
        clicks: u32,
    },
    /// Print the cards to the terminal; each line read from stdin is one title click.
    Show {
        #[command(flatten)]
        common: CommonArgs,
    },
    /// Print the parsed groups and header diagnostics.
    Inspect {
        #[command(flatten)]
        common: CommonArgs,
    },
}

#[derive(Debug, Args)]
struct CommonArgs {
    /// Hint CSV (defaults to the configured source; `-` for stdin).
    csv: Option<PathBuf>,
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Fail when a required header column is missing.
    #[arg(long)]
    strict: bool,
    /// Emit the answer body as markup instead of text.
    #[arg(long)]
    markup_answers: bool,
    /// Override the hidden group title.
    #[arg(long)]
    hidden: Option<String>,
    /// Override the number of clicks needed to reveal.
    #[arg(long)]
    threshold: Option<u32>,
}

impl CommonArgs {
    fn resolve(&self) -> hint_cards::Result<(PathBuf, Config, GroupingMode)> {
        let mut config = match &self.config {
            Some(path) => Config::from_file(path)?,
            None => Config::default(),
        };
        if self.markup_answers {
            config.answer_format = BodyFormat::Markup;
        }
        if let Some(hidden) = &self.hidden {
            config.hidden_title = Some(hidden.clone());
        }
        if let Some(threshold) = self.threshold {
            config.reveal.threshold = threshold;
        }
        let path = self.csv.clone().unwrap_or_else(|| config.source.clone());
        let mode = if self.strict { GroupingMode::Strict } else { GroupingMode::Lenient };
        Ok((path, config, mode))
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Render { common, output, clicks } => render(&common, output, clicks),
        Command::Show { common } => show(&common),
        Command::Inspect { common } => inspect(&common),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("ERROR: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn render(common: &CommonArgs, output: Option<PathBuf>, clicks: u32) -> hint_cards::Result<ExitCode> {
    let (path, config, mode) = common.resolve()?;
    let mut page = HtmlPage::new(config.page.clone());
    let loaded = load_and_render(&path, config, mode, &mut page)?;
    let failed = loaded.is_none();
    if let Some(mut board) = loaded {
        for _ in 0..clicks {
            board.trigger(&mut page)?;
        }
    }

    let document = page.to_document();
    match output {
        Some(out) => fs::write(out, document)?,
        None => print!("{}", document),
    }
    Ok(exit_code(failed))
}

fn show(common: &CommonArgs) -> hint_cards::Result<ExitCode> {
    let (path, config, mode) = common.resolve()?;
    let mut surface = TextSurface::new(io::stdout());
    let Some(mut board) = load_and_render(&path, config, mode, &mut surface)? else {
        return Ok(exit_code(true));
    };
    if board.hidden().is_some() {
        eprintln!("(press Enter to click the title, Ctrl-D to quit)");
        for line in io::stdin().lock().lines() {
            line?;
            board.trigger(&mut surface)?;
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn inspect(common: &CommonArgs) -> hint_cards::Result<ExitCode> {
    let (path, config, mode) = common.resolve()?;
    let text = source::load(&path)?;
    let rows = csv::parse(&text);
    println!("Source: {}", path.display());
    println!("Rows: {} (including header)", rows.len());

    let index = rows
        .first()
        .map(|header| grouping::HeaderIndex::locate(header, &config.columns))
        .unwrap_or_default();
    let missing = index.missing();
    for role in &missing {
        println!("  missing column: {}", role);
    }

    let groups = match mode {
        GroupingMode::Lenient => grouping::group(&rows, &config.columns),
        GroupingMode::Strict => grouping::group_strict(&rows, &config.columns)?,
    };
    let renderer = CardRenderer::from_config(&config);
    println!("Groups: {}", groups.len());
    for (i, group) in groups.iter().enumerate() {
        let card = renderer.render(group);
        let answers = group.hints.iter().filter(|h| h.stage == renderer.answer_stage()).count();
        let hidden = config.hidden_title.as_deref() == Some(group.title.as_str());
        println!(
            "  {}. {} [{}] ({} hints, {} answer){}",
            i + 1,
            card.title,
            card.badge,
            card.hints.len(),
            answers,
            if hidden { " [hidden]" } else { "" }
        );
        if answers > 1 {
            println!("     only the first {:?} row is shown", renderer.answer_stage());
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn exit_code(failed: bool) -> ExitCode {
    if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS }
}
