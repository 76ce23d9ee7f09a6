use std::{cell::{Cell, RefCell}, io::Write, rc::Rc};

use crate::environment::prelude::Value;

/// Receiver for the arguments of every `print` call, in call order.
pub trait PrintSink {
    fn print(&self, values: &[Value]);
}

#[derive(Debug, Clone, Copy)]
pub struct NullPrintSink;

impl PrintSink for NullPrintSink {
    fn print(&self, _values: &[Value]) {}
}

/// Records every `print` call. Clones share the same record.
#[derive(Debug, Default, Clone)]
pub struct VectorPrintSink {
    pub lines: Rc<RefCell<Vec<Vec<Value>>>>
}

impl VectorPrintSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take(&self) -> Vec<Vec<Value>> {
        std::mem::take(&mut *self.lines.borrow_mut())
    }

    pub fn pop(&self) -> Option<Vec<Value>> {
        self.lines.borrow_mut().pop()
    }

    /// Recorded calls rendered the way [`StdoutPrintSink`] would print them.
    pub fn rendered(&self) -> Vec<String> {
        self.lines.borrow()
            .iter()
            .map(|values| render_line(values))
            .collect()
    }
}

impl PrintSink for VectorPrintSink {
    fn print(&self, values: &[Value]) {
        self.lines.borrow_mut().push(values.to_vec());
    }
}

/// Writes each call as one line, arguments separated by a space.
#[derive(Debug, Clone, Copy)]
pub struct StdoutPrintSink;

impl PrintSink for StdoutPrintSink {
    fn print(&self, values: &[Value]) {
        let mut stdout = std::io::stdout().lock();

        if let Err(err) = writeln!(stdout, "{}", render_line(values)) {
            tracing::warn!(%err, "failed to write print output");
        }
    }
}

pub fn render_line(values: &[Value]) -> String {
    values.iter()
        .map(|value| value.to_string())
        .collect::<Vec<String>>()
        .join(" ")
}

/// Forwards to a [`PrintSink`] and counts how many calls went through.
pub struct PrintEmitter {
    count: Cell<usize>,
    sink: Rc<dyn PrintSink>
}

impl PrintEmitter {
    pub fn new(sink: Rc<dyn PrintSink>) -> Self {
        Self {
            count: Cell::new(0),
            sink,
        }
    }

    pub fn null() -> Self {
        Self::new(Rc::new(NullPrintSink))
    }

    pub fn reset_count(&self) {
        self.count.set(0);
    }

    pub fn count(&self) -> usize {
        self.count.get()
    }

    pub fn emit(&self, values: &[Value]) {
        self.count.set(self.count.get() + 1);
        self.sink.print(values);
    }
}
