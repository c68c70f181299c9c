use proc_macro::TokenStream;

mod capability;

/// Turn a function into a unit struct implementing `Capability`.
///
/// The function must take one argument and return
/// `Result<Output, OperationError>`. It may not be async or generic, and
/// references in its signature need a named lifetime. The generated struct has the function's
/// name (or `name = "..."`). With `key = "..."` the capability is also
/// submitted to the program-wide collection read by `Registry::collected`,
/// which needs the `inventory` feature.
///
/// ```rust,ignore
/// #[switchyard::capability(key = "ascending")]
/// fn ascending(mut input: Vec<i32>) -> Result<Vec<i32>, OperationError> {
///     input.sort();
///     Ok(input)
/// }
///
/// let sorted = ascending.execute(vec![3, 1, 2])?;
/// ```
#[proc_macro_attribute]
pub fn capability(attr: TokenStream, item: TokenStream) -> TokenStream {
    capability::capability_impl(attr, item)
}
