mod args;
mod history;

use args::{Args, LOG_ENV};
use history::History;
use lcas_compute::{eval::try_evaluate, EvalOptions, SYNTAX_ERROR};
use log::debug;
use rustyline::{error::ReadlineError, DefaultEditor};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use std::{
    fs::File,
    io::{self, BufRead, BufReader, IsTerminal},
    ops::ControlFlow,
    process::ExitCode,
};

/// Evaluates one line of input, returning the line to print. Failures are reported to stderr
/// in verbose mode.
fn eval_line(input: &str, options: &EvalOptions, verbose: bool) -> String {
    match try_evaluate(input, options) {
        Ok(evaluation) => {
            debug!("{} simplification steps", evaluation.steps.len());
            evaluation.output
        },
        Err(failure) => {
            if verbose {
                failure.report_to_stderr();
            }
            SYNTAX_ERROR.to_string()
        },
    }
}

/// Evaluates each non-blank line from the given reader, printing one result per line.
fn run_lines(reader: impl BufRead, options: &EvalOptions, verbose: bool) -> io::Result<()> {
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        println!("{}", eval_line(&line, options, verbose));
    }
    Ok(())
}

/// Reads and handles one line in interactive mode.
fn process_line(
    rl: &mut DefaultEditor,
    history: &mut History,
    options: &EvalOptions,
    verbose: bool,
) -> Result<ControlFlow<()>, ReadlineError> {
    let mut input = rl.readline(">> ")?;

    if input.eq_ignore_ascii_case("q") || input.eq_ignore_ascii_case("exit") {
        return Ok(ControlFlow::Break(()));
    }

    if input == "h" {
        for (i, entry) in history.iter().enumerate() {
            println!("{}: {}", i, entry);
        }
        return Ok(ControlFlow::Continue(()));
    }

    if input == ".." {
        if let Some(last) = history.last() {
            input = last.to_owned();
            println!(">> {}", input);
        }
    }

    if !input.trim().is_empty() {
        history.push(&input);
        rl.add_history_entry(&input)?;
        println!("ans: {}", eval_line(&input, options, verbose));
    }

    Ok(ControlFlow::Continue(()))
}

fn main() -> ExitCode {
    let args = match Args::parse(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(err) => {
            eprintln!("error: {}", err);
            eprintln!("usage: lcas [--verbose] [--passes N] [FILE]");
            return ExitCode::FAILURE;
        },
    };

    let level = args.log_level(std::env::var(LOG_ENV).ok().as_deref());
    if let Err(err) = TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto) {
        eprintln!("could not set up logging: {}", err);
    }

    let options = args.options();

    let result = if let Some(path) = &args.file {
        // evaluate each line of a file
        match File::open(path) {
            Ok(file) => run_lines(BufReader::new(file), &options, args.verbose),
            Err(err) => Err(err),
        }
    } else if !io::stdin().is_terminal() {
        // evaluate each line of stdin
        run_lines(io::stdin().lock(), &options, args.verbose)
    } else {
        // run the repl / interactive mode
        let mut rl = match DefaultEditor::new() {
            Ok(rl) => rl,
            Err(err) => {
                eprintln!("{}", err);
                return ExitCode::FAILURE;
            },
        };
        let mut history = History::new();

        println!("Light CAS Pro");
        println!("History: '..'=last, 'h'=list | Exit: 'q'");

        loop {
            match process_line(&mut rl, &mut history, &options, args.verbose) {
                Ok(ControlFlow::Continue(())) => (),
                Ok(ControlFlow::Break(())) => break,
                Err(ReadlineError::Eof | ReadlineError::Interrupted) => break,
                Err(err) => {
                    eprintln!("{}", err);
                    break;
                },
            }
        }

        Ok(())
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        },
    }
}
