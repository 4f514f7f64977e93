use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use std::time::Duration;
use syn::punctuated::Punctuated;
use syn::{Expr, ExprLit, ItemFn, Lit, Meta, Token};

const DEFAULT_LIMIT: Duration = Duration::from_millis(1000);

/// Reads `ms = ..`, `s = ..` or `min = ..`, nothing means one second.
fn parse_limit(args: Punctuated<Meta, Token![,]>) -> syn::Result<Duration> {
    let Some(meta) = args.first() else {
        return Ok(DEFAULT_LIMIT);
    };
    let Meta::NameValue(nv) = meta else {
        return Err(syn::Error::new_spanned(meta, "expected `ms = ..`, `s = ..` or `min = ..`"));
    };
    let Expr::Lit(ExprLit {
        lit: Lit::Int(amount),
        ..
    }) = &nv.value
    else {
        return Err(syn::Error::new_spanned(&nv.value, "time limit must be an integer"));
    };
    let amount: u64 = amount.base10_parse()?;

    match nv.path.get_ident().map(|unit| unit.to_string()).as_deref() {
        Some("ms") => Ok(Duration::from_millis(amount)),
        Some("s") => Ok(Duration::from_secs(amount)),
        Some("min") => Ok(Duration::from_secs(amount * 60)),
        _ => Err(syn::Error::new_spanned(&nv.path, "unknown unit, use ms, s or min")),
    }
}

/// Wraps the function so its body runs on a helper thread which is watched
/// until it finishes or the limit elapses.
pub(crate) fn expand(args: Punctuated<Meta, Token![,]>, mut input: ItemFn) -> syn::Result<TokenStream> {
    let limit_ms = parse_limit(args)?.as_millis() as u64;

    let name = input.sig.ident.clone();
    let inner = format_ident!("_timed_{}", name);
    let helper = format_ident!("_timed_helper_{}", name);
    input.sig.ident = inner.clone();

    // attributes such as #[test] belong on the watching wrapper
    let attributes = input.attrs.drain(..).collect::<Vec<_>>();

    Ok(quote! {
        #(#attributes)*
        fn #name() {
            let start = ::std::time::Instant::now();
            let limit = ::std::time::Duration::from_millis(#limit_ms);

            let finished = ::std::sync::Arc::new(::std::sync::atomic::AtomicBool::new(false));
            let flag = finished.clone();

            let handle = ::std::thread::Builder::new()
                .name("limited_test".to_string())
                .spawn(move || #helper(flag))
                .expect("could not spawn limited test thread");

            while !finished.load(::std::sync::atomic::Ordering::SeqCst) && !handle.is_finished() {
                if start.elapsed() > limit {
                    panic!("Test duration of {:?} exceeded the limit of {:?}", start.elapsed(), limit);
                }
                ::std::thread::sleep(::std::time::Duration::from_millis(10));
            }
            if let Err(panic) = handle.join() {
                ::std::panic::resume_unwind(panic);
            }
        }

        fn #helper(flag: ::std::sync::Arc<::std::sync::atomic::AtomicBool>) {
            #inner();
            flag.store(true, ::std::sync::atomic::Ordering::SeqCst);
        }

        #input
    })
}
