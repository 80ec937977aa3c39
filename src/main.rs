use clap::Parser;
use pgtutor::config::{ConfigOverrides, TableStyle, TutorConfig};
use pgtutor::{ContentLibrary, Reply, Tutor, logging};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::path::PathBuf;
use tracing::{info, warn};

/// Interactive PostgreSQL design tutorial
#[derive(Parser, Debug)]
#[command(name = "pgtutor")]
#[command(version, about = "Interactive PostgreSQL design tutorial with simulated queries", long_about = None)]
struct Args {
    /// Lesson to open at startup (part number or slug)
    #[arg(short, long)]
    lesson: Option<String>,

    /// Directory with content JSON files overriding the built-in content
    #[arg(long)]
    content_dir: Option<PathBuf>,

    /// Config file (default: /etc/pgtutor/pgtutor.toml, then ./pgtutor.toml)
    #[arg(long = "config")]
    config_file: Option<PathBuf>,

    /// Draw tables with plain ASCII
    #[arg(long)]
    ascii: bool,

    /// Log level or filter directives (RUST_LOG takes precedence)
    #[arg(long)]
    log_level: Option<String>,

    /// Do not read or write the history file
    #[arg(long)]
    no_history: bool,

    /// Run one command or SQL statement and exit
    #[arg(short = 'c', long = "command")]
    command: Option<String>,
}

impl Args {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            config_file: self.config_file.clone(),
            lesson: self.lesson.clone(),
            content_dir: self.content_dir.clone(),
            table_style: self.ascii.then_some(TableStyle::Ascii),
            log_level: self.log_level.clone(),
            no_history: self.no_history,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = TutorConfig::load(&args.overrides())?;
    logging::init_logging(&config.log_level)?;

    let library = match &config.content_dir {
        Some(dir) => ContentLibrary::from_dir(dir)?,
        None => ContentLibrary::embedded()?,
    };
    let mut tutor = Tutor::new(library, config.table_style)?;

    if let Some(command) = &args.command {
        if let Some(lesson) = &config.lesson {
            tutor.open_lesson(lesson)?;
        }
        let line = if command.trim_start().starts_with('\\') || command.trim_end().ends_with(';') {
            command.clone()
        } else {
            format!("{command};")
        };
        if let Reply::Output(text) = tutor.feed_line(&line) {
            print!("{text}");
        }
        return Ok(());
    }

    println!("╔══════════════════════════════════════════════════════════╗");
    println!("║          pgtutor - PostgreSQL Design Tutorial            ║");
    println!("╚══════════════════════════════════════════════════════════╝");
    println!("Queries are simulated: results are canned examples, not a live database.");
    println!("Type \\? for help, \\lessons to list lessons, \\q to quit.\n");

    if let Some(lesson) = &config.lesson {
        match tutor.open_lesson(lesson) {
            Ok(text) => print!("{text}"),
            Err(e) => eprintln!("Error: {e}"),
        }
    }

    let mut rl = DefaultEditor::new()?;

    let history_file = if config.history {
        dirs::home_dir().map(|mut p| {
            p.push(".pgtutor_history");
            p
        })
    } else {
        None
    };

    if let Some(ref path) = history_file {
        if rl.load_history(path).is_err() {
            info!(path = %path.display(), "no history file yet");
        }
    }

    loop {
        match rl.readline(&tutor.prompt()) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = rl.add_history_entry(line.trim());
                }

                match tutor.feed_line(&line) {
                    Reply::Output(text) => print!("{text}"),
                    Reply::Quit => break,
                }
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl+C abandons a half-typed statement, or quits at an empty prompt
                if tutor.is_buffering() {
                    tutor.clear_buffer();
                    continue;
                }
                println!("^C");
                break;
            }
            Err(ReadlineError::Eof) => {
                println!("\\q");
                break;
            }
            Err(err) => {
                eprintln!("Error: {err:?}");
                save_history(&mut rl, history_file.as_ref());
                return Err(err.into());
            }
        }
    }

    save_history(&mut rl, history_file.as_ref());

    println!("\n╔══════════════════════════════════════════════════════════╗");
    println!("║                    Session closed                        ║");
    println!("╚══════════════════════════════════════════════════════════╝");
    Ok(())
}

fn save_history(rl: &mut DefaultEditor, path: Option<&PathBuf>) {
    if let Some(path) = path {
        if let Err(e) = rl.save_history(path) {
            warn!(path = %path.display(), error = %e, "could not save history");
        }
    }
}
