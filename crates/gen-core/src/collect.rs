//! Collecting move-only generators into a `Vec`.
//!
//! Generators are not `Copy` and usually not cheap to clone, and composing
//! them should hand over ownership rather than duplicate state. These macros
//! build a `Vec` as a single expression by moving each argument into it, in
//! argument order.

use crate::traits::{BoxedGenerator, Generator};

/// Build a `Vec` by moving each argument into it, preserving order.
///
/// All arguments must have the same type and at least one is required.
///
/// ```rust
/// use gen_core::{move_into_vec, Values};
///
/// let generators = move_into_vec![
///     Values::new(vec![1]).unwrap(),
///     Values::new(vec![2, 3]).unwrap(),
/// ];
/// assert_eq!(generators.len(), 2);
/// ```
#[macro_export]
macro_rules! move_into_vec {
    (@one $ignored:expr) => {
        1usize
    };
    ($($movable:expr),+ $(,)?) => {{
        let mut moved_into_vec =
            ::std::vec::Vec::with_capacity(0usize $(+ $crate::move_into_vec!(@one $movable))+);
        $(moved_into_vec.push($movable);)+
        moved_into_vec
    }};
}

/// Like [`move_into_vec!`], but boxes each generator so generators of
/// different concrete types with the same `Item` can share one `Vec`.
///
/// ```rust
/// use gen_core::{gather, Generator, GeneratorExt, Values};
///
/// let generators = gather![
///     Values::new(vec!['a']).unwrap(),
///     Values::new(vec!['b', 'c']).unwrap().take(1).unwrap(),
/// ];
/// assert_eq!(*generators[1].current(), 'b');
/// ```
#[macro_export]
macro_rules! gather {
    ($($generator:expr),+ $(,)?) => {
        $crate::move_into_vec![$($crate::collect::boxed($generator)),+]
    };
}

/// Box a generator as a [`BoxedGenerator`]; used by [`gather!`].
pub fn boxed<G>(generator: G) -> BoxedGenerator<G::Item>
where
    G: Generator + 'static,
{
    Box::new(generator)
}
