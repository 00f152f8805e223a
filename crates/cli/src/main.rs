use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use tracing_subscriber::EnvFilter;
use vandor_rename_core::{
    read_confirmation, run_session, Confirmation, DirRenamer, Identity, NamingRules,
    SessionOutcome, CONFIRM_PROMPT,
};

const USAGE: &str =
    "Usage example: vandor-rename [class_name] [your_name] [your_registration_number]";
const STAR_REMINDER: &str =
    "Cool application? Please give a star on Github: https://github.com/icaropires/vandor-rename !";

#[derive(Debug, Parser)]
#[command(name = "vandor-rename")]
#[command(about = "Renames classroom exercise files to class_Type_name_registration.ext")]
struct Cli {
    #[arg(allow_hyphen_values = true)]
    class_name: Option<String>,
    #[arg(allow_hyphen_values = true)]
    student_name: Option<String>,
    #[arg(allow_hyphen_values = true)]
    registration_number: Option<String>,
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    _rest: Vec<String>,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let (Some(class_name), Some(student_name), Some(registration_number)) =
        (cli.class_name, cli.student_name, cli.registration_number)
    else {
        println!("{USAGE}");
        return Ok(());
    };

    let identity = Identity::new(class_name, student_name, registration_number);
    let rules = NamingRules::standard();
    let cwd = std::env::current_dir().context("could not resolve the current directory")?;
    let mut renamer = DirRenamer::new(&cwd);

    let mut out = io::stdout().lock();
    let outcome = run_session(
        &cwd,
        &identity,
        &rules,
        &mut out,
        |out| prompt_confirmation(out),
        &mut renamer,
    )?;

    match outcome {
        SessionOutcome::NothingToRename => {}
        SessionOutcome::Cancelled => {
            writeln!(out, "\n\nRenaming cancelled! No files were touched!")?;
        }
        SessionOutcome::Applied(_) => {
            writeln!(out, "\nFinished! Renamings applied!")?;
            writeln!(out, "{STAR_REMINDER}")?;
        }
    }

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Waits for ENTER on stdin or Ctrl-C, whichever comes first.
fn prompt_confirmation<W: Write>(out: &mut W) -> Result<Confirmation> {
    write!(out, "{CONFIRM_PROMPT}")?;
    out.flush()?;

    let (tx, rx) = mpsc::channel::<io::Result<Confirmation>>();
    let interrupt_tx = tx.clone();
    ctrlc::set_handler(move || {
        let _ = interrupt_tx.send(Ok(Confirmation::Cancelled));
    })
    .context("could not install the Ctrl-C handler")?;

    await_confirmation(tx, rx, || read_confirmation(&mut io::stdin().lock()))
}

/// Runs `read_answer` on its own thread and returns the first answer on the
/// channel, whether it comes from the reader or from the interrupt handler.
fn await_confirmation<F>(
    tx: Sender<io::Result<Confirmation>>,
    rx: Receiver<io::Result<Confirmation>>,
    read_answer: F,
) -> Result<Confirmation>
where
    F: FnOnce() -> io::Result<Confirmation> + Send + 'static,
{
    thread::spawn(move || {
        let _ = tx.send(read_answer());
    });

    let answer = rx.recv().context("confirmation channel closed")?;
    answer.context("could not read the confirmation")
}
