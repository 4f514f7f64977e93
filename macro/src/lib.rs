use proc_macro::TokenStream;
use syn::punctuated::Punctuated;
use syn::{parse_macro_input, DeriveInput, ItemFn, Meta, Token};

mod limited;
mod record;
mod reflect;

/// Derives `value::Reflect` for a newtype, keeping the kind of the wrapped type.
///
/// ```
/// use value::{Kind, Reflect};
///
/// #[derive(Reflect)]
/// struct Epoch(i64);
///
/// assert_eq!(Epoch::type_info().kind(), Kind::Int);
/// assert_ne!(Epoch::type_info(), i64::type_info());
/// ```
#[proc_macro_derive(Reflect)]
pub fn derive_reflect(item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    reflect::expand(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Derives `value::Record` and `value::Reflect` for a struct, fields are
/// addressed in declaration order.
#[proc_macro_derive(Record)]
pub fn derive_record(item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    record::expand(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// A procedural macro to time a test and fail it if it exceeds a duration.
///
/// Usage:
/// ```
/// use r#macro::limited;
///
/// #[limited(s = 100)]
/// fn my_test() {
///     // ... test code
/// }
///
/// #[limited(ms = 1000)]
///  fn my_other_test() {
///     // ... test code
/// }
/// ```
#[proc_macro_attribute]
pub fn limited(args: TokenStream, item: TokenStream) -> TokenStream {
    let args = parse_macro_input!(args with Punctuated::<Meta, Token![,]>::parse_terminated);
    let input = parse_macro_input!(item as ItemFn);
    limited::expand(args, input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
