mod cli;

use std::{path::PathBuf, process::ExitCode, time::Instant};

use clap::Parser;
use cli::{init_tracing, print_failed, print_finished, print_parsing, print_running};
use egg_core::{
    interpreter::{read_source, Interpreter},
    parser::prelude::parse_program,
    utils::prelude::Error,
};

#[derive(Parser)]
#[command(about = "Runs programs written in Egg")]
enum Command {
    /// Parses and evaluates a program
    Run {
        /// Path of source file
        path: PathBuf,
        /// Print the value the program evaluates to
        #[arg(short, long, default_value_t = false)]
        print_result: bool,
    },
    /// Parses a program and prints it in canonical form
    Parse {
        /// Path of source file
        path: PathBuf,
        /// Print ast instead of canonical source code
        #[arg(long, default_value_t = false)]
        print_ast: bool,
    },
}

fn main() -> ExitCode {
    init_tracing();

    let result = match Command::parse() {
        Command::Run { path, print_result } => run(path, print_result),
        Command::Parse { path, print_ast } => parse(path, print_ast),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report(&err);
            ExitCode::FAILURE
        }
    }
}

fn run(path: PathBuf, print_result: bool) -> Result<(), Error> {
    let interpreter = Interpreter::stdout();

    print_running(&path.display().to_string());
    let start = Instant::now();

    match interpreter.run_path(path) {
        Ok(value) => {
            print_finished(start.elapsed(), interpreter.evaluator().output().count());

            if print_result {
                println!("{value}");
            }

            Ok(())
        },
        Err(err) => {
            print_failed(start.elapsed());
            Err(err)
        }
    }
}

fn parse(path: PathBuf, print_ast: bool) -> Result<(), Error> {
    print_parsing(&path.display().to_string());

    let src = read_source(&path)?;

    let parsed = match parse_program(&src) {
        Ok(parsed) => parsed,
        Err(error) => return Err(Error::Parse { path, src, error }),
    };

    if print_ast {
        println!("{:#?}", parsed.program);
    } else {
        println!("{}", parsed.program);
    }

    Ok(())
}

fn report(err: &Error) {
    let buf_writer = cli::stderr_buffer_writer();
    let mut buf = buf_writer.buffer();

    if let Err(io_err) = err.pretty(&mut buf).and_then(|_| buf_writer.print(&buf)) {
        tracing::error!(%io_err, "failed to write diagnostic");
        eprintln!("error: {err}");
    }
}
