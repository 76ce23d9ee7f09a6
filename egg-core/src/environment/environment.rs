use std::{cell::RefCell, collections::HashMap, fmt::Debug, rc::Rc};

use super::prelude::Value;

/// A shared handle to one frame of the scope chain.
pub type Scope = Rc<RefCell<Environment>>;

/// One level of the lexical environment: local bindings plus the enclosing
/// frame. A frame without a parent is the root, which holds the builtins.
#[derive(Default)]
pub struct Environment {
    store: HashMap<String, Value>,
    parent: Option<Scope>,
}

impl Environment {
    pub fn new() -> Self {
        Self {
            store: HashMap::new(),
            parent: None,
        }
    }

    pub fn root() -> Scope {
        Rc::new(RefCell::new(Self::new()))
    }

    pub fn child(parent: &Scope) -> Scope {
        Rc::new(RefCell::new(Self {
            store: HashMap::new(),
            parent: Some(parent.clone()),
        }))
    }

    /// Resolves `name`, innermost frame first.
    pub fn get(&self, name: &str) -> Option<Value> {
        match self.store.get(name) {
            Some(value) => Some(value.clone()),
            None => self.parent.as_ref().and_then(|parent| parent.borrow().get(name)),
        }
    }

    pub fn has_own(&self, name: &str) -> bool {
        self.store.contains_key(name)
    }

    /// Binds `name` in this frame, shadowing or replacing any earlier binding.
    pub fn define(&mut self, name: impl Into<String>, value: Value) {
        self.store.insert(name.into(), value);
    }

    /// Rebinds `name` in the nearest frame that already owns it. The root
    /// frame is shared by every run and is never rebound; returns `false` when
    /// no other frame owns the name.
    pub fn assign(&mut self, name: &str, value: Value) -> bool {
        let Some(parent) = &self.parent else {
            return false;
        };

        match self.store.get_mut(name) {
            Some(slot) => {
                *slot = value;
                true
            },
            None => parent.borrow_mut().assign(name, value),
        }
    }

    /// Names bound in this frame, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names = self.store.keys()
            .map(String::as_str)
            .collect::<Vec<&str>>();

        names.sort_unstable();
        names
    }

    /// Number of frames above this one.
    pub fn depth(&self) -> usize {
        match &self.parent {
            Some(parent) => parent.borrow().depth() + 1,
            None => 0,
        }
    }
}

impl Debug for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Environment")
            .field("names", &self.names())
            .field("depth", &self.depth())
            .finish()
    }
}
