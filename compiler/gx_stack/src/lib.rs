//! Stack safety for deep recursion.
//!
//! Galaxy scripts nest applications hundreds of levels deep, and forcing a
//! node recurses through every function position it depends on. Long cons
//! lists recurse once per element when modulated or printed. Each of those
//! recursive entry points wraps itself in [`ensure_sufficient_stack`].
//!
//! - **Native targets**: grows the stack on demand via `stacker`.
//! - **WASM targets**: calls straight through.

/// If less than this much stack remains, grow before recursing (128KB).
const RED_ZONE: usize = 128 * 1024;

/// Size of each new stack segment (2MB).
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, first growing the stack if the red zone has been reached.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// WASM manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deep_cons_chain_length() {
        // Mirrors walking a right-nested list one element per frame.
        fn walk(remaining: u64) -> u64 {
            ensure_sufficient_stack(|| if remaining == 0 { 0 } else { walk(remaining - 1) + 1 })
        }

        assert_eq!(walk(200_000), 200_000);
    }

    #[test]
    fn test_returns_closure_result() {
        assert_eq!(ensure_sufficient_stack(|| "ap"), "ap");
    }
}
