use std::rc::Rc;

use rustc_hash::FxHashMap;

use crate::runtime::value::{
    core::Value,
    list::{ListDefinition, ListItem, ListValue},
};

/// Read-only view of story variable state consulted during evaluation.
///
/// The store is owned by the host; the evaluator only reads it. The host
/// must guarantee that no concurrent mutation of story state happens for the
/// duration of one top-level evaluation. Externally bound functions invoked
/// mid-evaluation that mutate the very store being read are undefined
/// behavior from the evaluator's perspective; that is a caller obligation.
pub trait VariableStore {
    /// Primary lookup of a declared variable by name.
    fn value_of(&self, name: &str) -> Option<Value>;

    /// Fallback lookup consulted when [`value_of`](Self::value_of) finds
    /// nothing: resolves a list item name, bare (`calm`) or qualified
    /// (`moods.calm`), to a singleton list. A name may denote a plain
    /// variable and a list item at the same time; the variable wins.
    fn list_item(&self, name: &str) -> Option<Value>;
}

/// Read-only function dispatch consulted during evaluation.
///
/// Story-defined functions live in the script's own compiled content;
/// external functions are callbacks bound by the host application. Either
/// may perform arbitrary host-side effects; the evaluator only sequences the
/// calls. The `call_*` methods are only invoked for names the matching
/// `has_*` method reported, and return `None` when the function produces no
/// value.
pub trait FunctionTable {
    /// Returns `true` when a function with this name is defined in the
    /// script itself.
    fn has_story_function(&self, name: &str) -> bool;

    /// Runs a story-defined function to completion and returns its result.
    fn call_story_function(&self, name: &str, arguments: &[Value]) -> Option<Value>;

    /// Returns `true` when the host has bound an external function under
    /// this name.
    fn has_external_function(&self, name: &str) -> bool;

    /// Invokes an externally bound function and returns its result.
    fn call_external_function(&self, name: &str, arguments: &[Value]) -> Option<Value>;
}

/// In-memory [`VariableStore`] holding plain variables and list definitions.
///
/// Hosts embedding a full playback engine implement [`VariableStore`] over
/// their own state instead; `MemoryStore` covers tests and standalone use.
///
/// ## Example
/// ```
/// use quill::runtime::{
///     state::{MemoryStore, VariableStore},
///     value::{core::Value, list::ListDefinition},
/// };
///
/// let mut store = MemoryStore::new();
/// store.set("torch_lit", true);
/// store.define_list(ListDefinition::new("moods", [("calm", 1), ("wary", 2)]));
///
/// assert_eq!(store.value_of("torch_lit"), Some(Value::Bool(true)));
/// assert!(store.list_item("wary").is_some());
/// assert!(store.list_item("moods.calm").is_some());
/// assert!(store.list_item("bored").is_none());
/// ```
#[derive(Default)]
pub struct MemoryStore {
    variables:   FxHashMap<String, Value>,
    definitions: Vec<Rc<ListDefinition>>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a variable, replacing any previous value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.variables.insert(name.into(), value.into());
    }

    /// Registers a list definition so its items resolve by name, and returns
    /// the shared handle for building values from it.
    pub fn define_list(&mut self, definition: ListDefinition) -> Rc<ListDefinition> {
        let definition = Rc::new(definition);
        self.definitions.push(definition.clone());
        definition
    }
}

impl VariableStore for MemoryStore {
    fn value_of(&self, name: &str) -> Option<Value> {
        self.variables.get(name).cloned()
    }

    fn list_item(&self, name: &str) -> Option<Value> {
        let (origin, item) = match name.split_once('.') {
            Some((origin, item)) => (Some(origin), item),
            None => (None, name),
        };

        for definition in &self.definitions {
            if let Some(origin) = origin
               && origin != definition.name()
            {
                continue;
            }
            if let Some(ordinal) = definition.ordinal_of(item) {
                let list = ListValue::from_item(ListItem::new(definition.name(), item),
                                                ordinal,
                                                Some(definition.clone()));
                return Some(Value::List(Rc::new(list)));
            }
        }
        None
    }
}

/// Signature shared by story-defined and externally bound callbacks: a slice
/// of evaluated arguments in, an optional result out.
pub type HostFunction = Box<dyn Fn(&[Value]) -> Option<Value>>;

/// In-memory [`FunctionTable`] backed by boxed closures.
///
/// A playback engine resolves story-defined functions against its compiled
/// content and implements [`FunctionTable`] directly; `FunctionRegistry`
/// covers tests and hosts that only bind callbacks.
#[derive(Default)]
pub struct FunctionRegistry {
    story:    FxHashMap<String, HostFunction>,
    external: FxHashMap<String, HostFunction>,
}

impl FunctionRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a story-defined function.
    ///
    /// Story-defined functions take precedence over external functions of
    /// the same name.
    pub fn define_story_function(&mut self,
                                 name: impl Into<String>,
                                 function: impl Fn(&[Value]) -> Option<Value> + 'static) {
        self.story.insert(name.into(), Box::new(function));
    }

    /// Binds an external host function.
    ///
    /// ## Example
    /// ```
    /// use quill::runtime::{
    ///     state::{FunctionRegistry, FunctionTable},
    ///     value::core::Value,
    /// };
    ///
    /// let mut functions = FunctionRegistry::new();
    /// functions.bind_external("lantern_fuel", |_args| Some(Value::Number(3.0)));
    ///
    /// assert!(functions.has_external_function("lantern_fuel"));
    /// assert_eq!(functions.call_external_function("lantern_fuel", &[]),
    ///            Some(Value::Number(3.0)));
    /// ```
    pub fn bind_external(&mut self,
                         name: impl Into<String>,
                         function: impl Fn(&[Value]) -> Option<Value> + 'static) {
        self.external.insert(name.into(), Box::new(function));
    }
}

impl FunctionTable for FunctionRegistry {
    fn has_story_function(&self, name: &str) -> bool {
        self.story.contains_key(name)
    }

    fn call_story_function(&self, name: &str, arguments: &[Value]) -> Option<Value> {
        self.story.get(name).and_then(|function| function(arguments))
    }

    fn has_external_function(&self, name: &str) -> bool {
        self.external.contains_key(name)
    }

    fn call_external_function(&self, name: &str, arguments: &[Value]) -> Option<Value> {
        self.external.get(name).and_then(|function| function(arguments))
    }
}
