use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod check_type;

/// Derive macro for implementing the `CheckType` trait on a taxonomy enum.
///
/// Exactly one variant must carry `#[check(all)]`: it becomes `CheckType::ALL`.
/// Other variants may name their parent with `#[check(group = Variant)]` and
/// override their log name with `#[check(name = "...")]`; the default name
/// is the variant identifier.
///
/// # Example
///
/// ```rust,ignore
/// #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, CheckType)]
/// enum Check {
///     #[check(all, name = "ALL")]
///     All,
///     #[check(name = "MOVING")]
///     Moving,
///     #[check(group = Moving, name = "MOVING_SURVIVALFLY")]
///     MovingSurvivalFly,
/// }
/// ```
#[proc_macro_derive(CheckType, attributes(check))]
pub fn derive_check_type(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    check_type::derive_check_type_impl(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
