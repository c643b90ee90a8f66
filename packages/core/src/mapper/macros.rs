//! `node!` literal macro

/// Build a [`Node`](crate::mapper::Node) with JSON-like syntax
///
/// Mapping keys are single tokens: string literals or parenthesised
/// expressions. Values are `null`, nested `[...]`/`{...}` literals, or any
/// expression convertible into a `Node` (including the `Result`-unwrapped
/// output of `get_node`).
///
/// ```
/// use dendro_core::{mapper::{DropLevel, Node}, node};
///
/// let key = "dynamic";
/// let tree = node!({
///     "a": [1, null, {"b": true}],
///     (key): Node::Drop(DropLevel::ThisObject),
/// });
/// assert!(tree.get("dynamic").is_some_and(Node::is_drop));
/// ```
#[macro_export]
macro_rules! node {
    // Sequence elements
    (@list [$($elems:expr,)*]) => {
        ::std::vec![$($elems,)*]
    };
    (@list [$($elems:expr,)*] null $(, $($rest:tt)*)?) => {
        $crate::node!(@list [$($elems,)* $crate::node!(null),] $($($rest)*)?)
    };
    (@list [$($elems:expr,)*] [$($array:tt)*] $(, $($rest:tt)*)?) => {
        $crate::node!(@list [$($elems,)* $crate::node!([$($array)*]),] $($($rest)*)?)
    };
    (@list [$($elems:expr,)*] {$($map:tt)*} $(, $($rest:tt)*)?) => {
        $crate::node!(@list [$($elems,)* $crate::node!({$($map)*}),] $($($rest)*)?)
    };
    (@list [$($elems:expr,)*] $next:expr $(, $($rest:tt)*)?) => {
        $crate::node!(@list [$($elems,)* $crate::node!($next),] $($($rest)*)?)
    };

    // Mapping entries
    (@map [$(($key:expr, $value:expr),)*]) => {
        $crate::mapper::Node::from_entries(::std::vec![
            $((::std::string::ToString::to_string(&$key), $value),)*
        ])
    };
    (@map [$($entries:tt)*] $key:tt : null $(, $($rest:tt)*)?) => {
        $crate::node!(@map [$($entries)* ($key, $crate::node!(null)),] $($($rest)*)?)
    };
    (@map [$($entries:tt)*] $key:tt : [$($array:tt)*] $(, $($rest:tt)*)?) => {
        $crate::node!(@map [$($entries)* ($key, $crate::node!([$($array)*])),] $($($rest)*)?)
    };
    (@map [$($entries:tt)*] $key:tt : {$($map:tt)*} $(, $($rest:tt)*)?) => {
        $crate::node!(@map [$($entries)* ($key, $crate::node!({$($map)*})),] $($($rest)*)?)
    };
    (@map [$($entries:tt)*] $key:tt : $value:expr $(, $($rest:tt)*)?) => {
        $crate::node!(@map [$($entries)* ($key, $crate::node!($value)),] $($($rest)*)?)
    };

    (null) => {
        $crate::mapper::Node::Value($crate::value::Value::Null)
    };
    ([]) => {
        $crate::mapper::Node::List(::std::vec::Vec::new())
    };
    ([ $($tt:tt)+ ]) => {
        $crate::mapper::Node::List($crate::node!(@list [] $($tt)+))
    };
    ({}) => {
        $crate::mapper::Node::map()
    };
    ({ $($tt:tt)+ }) => {
        $crate::node!(@map [] $($tt)+)
    };
    ($other:expr) => {
        $crate::mapper::Node::from($other)
    };
}
