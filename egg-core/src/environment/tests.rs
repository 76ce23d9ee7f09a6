use pretty_assertions::assert_eq;

use super::prelude::{format_number, Environment, Value, FALSE, TRUE};

#[test]
fn test_lookup_walks_outward() {
    let root = Environment::root();
    root.borrow_mut().define("x", Value::number(1.0));

    let middle = Environment::child(&root);
    middle.borrow_mut().define("y", Value::number(2.0));

    let inner = Environment::child(&middle);

    assert_eq!(inner.borrow().get("x"), Some(Value::number(1.0)));
    assert_eq!(inner.borrow().get("y"), Some(Value::number(2.0)));
    assert_eq!(inner.borrow().get("z"), None);
    assert_eq!(inner.borrow().depth(), 2);
}

#[test]
fn test_define_is_always_local() {
    let root = Environment::root();
    let outer = Environment::child(&root);
    outer.borrow_mut().define("x", Value::number(1.0));

    let inner = Environment::child(&outer);
    inner.borrow_mut().define("x", Value::number(2.0));

    assert_eq!(inner.borrow().get("x"), Some(Value::number(2.0)));
    assert_eq!(outer.borrow().get("x"), Some(Value::number(1.0)));
    assert!(inner.borrow().has_own("x"));
}

#[test]
fn test_assign_mutates_nearest_owner() {
    let root = Environment::root();
    let outer = Environment::child(&root);
    outer.borrow_mut().define("x", Value::number(1.0));

    let inner = Environment::child(&outer);

    assert!(inner.borrow_mut().assign("x", Value::number(50.0)));
    assert!(!inner.borrow().has_own("x"));
    assert_eq!(outer.borrow().get("x"), Some(Value::number(50.0)));
}

#[test]
fn test_assign_prefers_inner_owner() {
    let root = Environment::root();
    let outer = Environment::child(&root);
    outer.borrow_mut().define("x", Value::number(1.0));

    let inner = Environment::child(&outer);
    inner.borrow_mut().define("x", Value::number(2.0));

    assert!(inner.borrow_mut().assign("x", Value::number(3.0)));
    assert_eq!(inner.borrow().get("x"), Some(Value::number(3.0)));
    assert_eq!(outer.borrow().get("x"), Some(Value::number(1.0)));
}

#[test]
fn test_assign_unbound_fails() {
    let root = Environment::root();
    let scope = Environment::child(&root);

    assert!(!scope.borrow_mut().assign("missing", TRUE));
    assert_eq!(scope.borrow().get("missing"), None);
}

#[test]
fn test_root_is_never_assigned() {
    let root = Environment::root();
    root.borrow_mut().define("shared", TRUE);

    let scope = Environment::child(&root);

    assert!(!scope.borrow_mut().assign("shared", FALSE));
    assert!(!root.borrow_mut().assign("shared", FALSE));
    assert_eq!(root.borrow().get("shared"), Some(TRUE));
}

#[test]
fn test_truthiness() {
    assert!(!FALSE.is_truthy());
    assert!(TRUE.is_truthy());
    assert!(Value::number(0.0).is_truthy());
    assert!(Value::string("").is_truthy());
    assert!(Value::array(vec![]).is_truthy());
}

#[test]
fn test_display() {
    assert_eq!(Value::number(55.0).to_string(), "55");
    assert_eq!(Value::number(2.5).to_string(), "2.5");
    assert_eq!(Value::string("hi").to_string(), "hi");
    assert_eq!(
        Value::array(vec![Value::number(1.0), Value::string("a"), FALSE]).to_string(),
        "[1, \"a\", false]"
    );
    assert_eq!(format_number(f64::INFINITY), "Infinity");
    assert_eq!(format_number(-0.0), "0");
    assert_eq!(format_number(f64::NAN), "NaN");
}

#[test]
fn test_display_switches_to_exponent_form() {
    assert_eq!(format_number(1e24), "1e+24");
    assert_eq!(format_number(1e21), "1e+21");
    assert_eq!(format_number(-2.5e30), "-2.5e+30");
    assert_eq!(format_number(1e-7), "1e-7");
    assert_eq!(format_number(-1.5e-9), "-1.5e-9");

    assert_eq!(format_number(1e20), "100000000000000000000");
    assert_eq!(format_number(0.000001), "0.000001");
}
