//! Stack safety for deeply nested expressions.
//!
//! Parsing, reading, printing and evaluating Flispy are all plain tree
//! recursion, one native frame per nesting level. A line such as
//! `((((...))))` nested a hundred thousand deep would exhaust a default
//! thread stack, so every recursive step goes through
//! [`ensure_sufficient_stack`], which grows the stack on demand.
//!
//! # Platform Support
//!
//! - **Native targets**: `stacker::maybe_grow` allocates a new segment when
//!   the remaining space drops below the red zone.
//! - **WASM targets**: passthrough, the runtime manages its own stack.

/// Minimum stack space to keep available (100KB red zone).
const RED_ZONE: usize = 100 * 1024;

/// Stack space to allocate per growth (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
///
/// ```text
/// fn eval(&self, value: Value) -> Value {
///     ensure_sufficient_stack(|| match value {
///         Value::SExpr(list) => self.eval_sexpr(list),
///         other => other,
///     })
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM version, calls `f` directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
