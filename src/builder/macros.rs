//! Macros for ergonomic machine declaration.

/// Build a [`Context`](crate::core::Context) from `field: value` pairs.
///
/// # Example
///
/// ```
/// use waypoint::context;
///
/// let ctx = context! {
///     ordersCompleted: 0,
///     ordersCanceled: 0,
/// };
///
/// assert_eq!(ctx.get("ordersCompleted"), 0);
/// ```
#[macro_export]
macro_rules! context {
    () => {
        $crate::core::Context::new()
    };
    ($($field:ident : $value:expr),* $(,)?) => {{
        let ctx = $crate::core::Context::new();
        $(let ctx = ctx.with(stringify!($field), $value);)*
        ctx
    }};
}
