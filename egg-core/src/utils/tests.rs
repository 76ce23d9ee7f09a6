use std::{path::PathBuf, rc::Rc};

use pretty_assertions::assert_eq;

use crate::{
    environment::prelude::{Value, TRUE},
    eval::prelude::{RuntimeError, RuntimeErrorType},
    parser::prelude::parse_program,
};

use super::prelude::{render_line, Error, PrintEmitter, PrintSink, SrcSpan, VectorPrintSink};

#[test]
fn test_vector_sink_records_calls() {
    let sink = VectorPrintSink::new();
    let shared = sink.clone();

    shared.print(&[Value::string("a"), Value::number(1.0)]);
    shared.print(&[]);

    assert_eq!(sink.rendered(), vec!["a 1", ""]);
    assert_eq!(sink.pop(), Some(vec![]));
    assert_eq!(sink.take(), vec![vec![Value::string("a"), Value::number(1.0)]]);
    assert!(sink.take().is_empty());
}

#[test]
fn test_emitter_counts() {
    let sink = VectorPrintSink::new();
    let emitter = PrintEmitter::new(Rc::new(sink.clone()));

    emitter.emit(&[TRUE]);
    emitter.emit(&[TRUE, TRUE]);

    assert_eq!(emitter.count(), 2);
    assert_eq!(sink.rendered(), vec!["true", "true true"]);

    emitter.reset_count();
    assert_eq!(emitter.count(), 0);

    let null = PrintEmitter::null();
    null.emit(&[TRUE]);
    assert_eq!(null.count(), 1);
}

#[test]
fn test_render_line() {
    assert_eq!(render_line(&[Value::string("total:"), Value::number(55.0)]), "total: 55");
}

#[test]
fn test_span_merge() {
    let span = SrcSpan::from(4, 6).merge(SrcSpan::from(1, 5));

    assert_eq!(span, SrcSpan::from(1, 6));
    assert_eq!(span.to_string(), "1..6");
    assert!(SrcSpan::from(3, 3).is_empty());
}

#[test]
fn test_unexpected_eof_points_at_end_of_file() {
    let src = "print(1,";
    let error = parse_program(src).unwrap_err();

    let err = Error::Parse { path: PathBuf::from("eof.egg"), src: src.into(), error };
    let pretty = err.pretty_string();

    assert!(pretty.contains("Unexpected end of input"), "{pretty}");
    assert!(pretty.contains("eof.egg:1:9"), "{pretty}");
}

#[test]
fn test_spans_past_the_source_are_clamped() {
    let src = "x";
    let error = RuntimeError::new(
        RuntimeErrorType::UndefinedBinding { name: "y".into() },
        SrcSpan::from(5, 9)
    );

    let err = Error::Runtime { path: PathBuf::from("short.egg"), src: src.into(), error };

    let diagnostics = err.to_diagnostics();
    assert_eq!(diagnostics.len(), 1);

    let pretty = err.pretty_string();
    assert!(pretty.contains("Reference error"), "{pretty}");
    assert!(pretty.contains("short.egg:1:2"), "{pretty}");
}
