/// Asserts that an expression matches a pattern, optionally guarded by a
/// predicate.
///
/// ```rust
/// # use smartjus_utils::assert_matches;
/// let result: Result<u8, &str> = Ok(7);
/// assert_matches!(result, Ok(7));
/// assert_matches!(result, Ok(x) if *x > 3);
/// ```
#[macro_export]
macro_rules! assert_matches {
    ($expr:expr, $pat:pat $(if $pred:expr)? $(,)?) => {{
        let val = $expr;
        match &val {
            $pat $(if $pred)? => (),
            _ => ::core::panic!(
                "Assertion failed: Value {:?} did not match `{}`",
                val,
                ::core::stringify!($pat $(if $pred)?),
            ),
        }
    }};
}
