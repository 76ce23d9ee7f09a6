use std::{path::{Path, PathBuf}, rc::Rc};

use utf8_chars::BufReadCharsExt;

use crate::{
    environment::prelude::{Environment, Scope, Value},
    eval::prelude::{global_scope, Evaluator},
    parser::prelude::parse_program,
    utils::prelude::{EggError, Error, PrintSink, StdoutPrintSink},
};

/// Runs programs against a shared root scope of builtins.
///
/// Every call to [`Interpreter::run`] evaluates in its own child of the root,
/// so top-level definitions never leak from one program into the next.
///
/// ```
/// # use std::rc::Rc;
/// # use egg_core::{interpreter::Interpreter, environment::prelude::Value, utils::prelude::VectorPrintSink};
/// let output = VectorPrintSink::new();
/// let interpreter = Interpreter::new(Rc::new(output.clone()));
///
/// let value = interpreter.run(r#"
///     do(define(plusOne, fun(a, +(a, 1))),
///        print("plusOne(10):", plusOne(10)),
///        plusOne(1))
/// "#)?;
///
/// assert_eq!(value, Value::number(2.0));
/// assert_eq!(output.rendered(), vec!["plusOne(10): 11"]);
/// # Ok::<(), egg_core::utils::prelude::EggError>(())
/// ```
pub struct Interpreter {
    global: Scope,
    evaluator: Evaluator,
}

impl Interpreter {
    pub fn new(sink: Rc<dyn PrintSink>) -> Self {
        Self {
            global: global_scope(),
            evaluator: Evaluator::new(sink),
        }
    }

    /// An interpreter whose `print` writes to standard output.
    pub fn stdout() -> Self {
        Self::new(Rc::new(StdoutPrintSink))
    }

    pub fn global(&self) -> &Scope {
        &self.global
    }

    pub fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }

    /// A new top-level frame for one program run.
    pub fn fresh_scope(&self) -> Scope {
        Environment::child(&self.global)
    }

    pub fn run(&self, src: &str) -> Result<Value, EggError> {
        tracing::debug!(bytes = src.len(), "running program");

        let parsed = parse_program(src)?;
        let value = self.evaluator.evaluate(&parsed.program, &self.fresh_scope())?;

        tracing::debug!(result = %value, prints = self.evaluator.output().count(), "program finished");

        Ok(value)
    }

    /// Reads and runs a program file. Errors carry the file text so they can
    /// be rendered with [`Error::pretty`].
    pub fn run_path(&self, path: PathBuf) -> Result<Value, Error> {
        let src = read_source(&path)?;

        self.run(&src).map_err(|err| err.with_source(path, src))
    }
}

/// Runs `src` in a fresh interpreter printing to standard output.
pub fn run(src: &str) -> Result<Value, EggError> {
    Interpreter::stdout().run(src)
}

/// Reads a program file as a stream of UTF-8 characters.
pub fn read_source(path: &Path) -> Result<String, Error> {
    let file = std::fs::File::open(path)
        .map_err(|err| Error::StdIo { err: err.kind() })?;

    let file_size = file.metadata()
        .map_err(|err| Error::StdIo { err: err.kind() })?.len() as usize;

    let mut src = String::with_capacity(file_size);
    let mut reader = std::io::BufReader::new(file);

    for ch in reader.chars() {
        src.push(ch.map_err(|err| Error::StdIo { err: err.kind() })?);
    }

    tracing::debug!(path = %path.display(), bytes = src.len(), "loaded source");

    Ok(src)
}
