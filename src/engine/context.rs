//! Grid Context - Ambient configuration from containers to items.
//!
//! A container pushes a [`GridContext`] while its children are created and
//! pops it afterwards. Any item created in between reads the innermost
//! context, so configuration flows down the subtree without being passed
//! through every intermediate component. Items only ever read it.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::types::GridConfig;

/// Shared configuration getter.
pub type ConfigGetter = Rc<dyn Fn() -> GridConfig>;

/// Configuration published by one grid container.
#[derive(Clone)]
pub struct GridContext {
    owner: usize,
    config: ConfigGetter,
}

impl GridContext {
    pub fn new(owner: usize, config: ConfigGetter) -> Self {
        Self { owner, config }
    }

    /// Index of the container that published this context.
    pub fn owner(&self) -> usize {
        self.owner
    }

    /// The container's current full configuration.
    pub fn config(&self) -> GridConfig {
        (self.config)()
    }

    /// The options items inherit, read fresh on every call.
    pub fn item_defaults(&self) -> GridConfig {
        self.config().item_defaults()
    }
}

impl fmt::Debug for GridContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GridContext")
            .field("owner", &self.owner)
            .finish_non_exhaustive()
    }
}

thread_local! {
    static GRID_CONTEXT_STACK: RefCell<Vec<Rc<GridContext>>> = const { RefCell::new(Vec::new()) };
}

/// The innermost enclosing grid context, if any.
pub fn current_grid_context() -> Option<Rc<GridContext>> {
    GRID_CONTEXT_STACK.with(|stack| stack.borrow().last().cloned())
}

pub fn push_grid_context(context: Rc<GridContext>) {
    GRID_CONTEXT_STACK.with(|stack| stack.borrow_mut().push(context));
}

pub fn pop_grid_context() {
    GRID_CONTEXT_STACK.with(|stack| {
        stack.borrow_mut().pop();
    });
}

/// Pops the context it was created for, also when unwinding.
struct ContextGuard;

impl Drop for ContextGuard {
    fn drop(&mut self) {
        pop_grid_context();
    }
}

/// Run `f` with `context` as the innermost grid context.
pub fn with_grid_context<R>(context: Rc<GridContext>, f: impl FnOnce() -> R) -> R {
    push_grid_context(context);
    let _guard = ContextGuard;
    f()
}

/// Clear the stack (for testing).
pub fn reset_grid_context() {
    GRID_CONTEXT_STACK.with(|stack| stack.borrow_mut().clear());
}
