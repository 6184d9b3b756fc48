//! The `#[deepclone_testhelpers::test]` attribute.

use unsynn::*;

// Everything before the body: attributes, `fn`, name, arguments, return type.
unsynn! {
    struct Signature {
        tokens: Any<Cons<Except<BraceGroup>, TokenTree>>,
    }

    struct TestFn {
        signature: Signature,
        body: BraceGroup,
    }
}

impl quote::ToTokens for Signature {
    fn to_tokens(&self, tokens: &mut unsynn::TokenStream) {
        self.tokens.to_tokens(tokens)
    }
}

/// Marks a test and runs `deepclone_testhelpers::setup()` before its body.
///
/// ```ignore
/// #[deepclone_testhelpers::test]
/// fn clones_cycles() {
///     // tracing output from deepclone shows up here
/// }
/// ```
#[proc_macro_attribute]
pub fn test(
    attr: proc_macro::TokenStream,
    item: proc_macro::TokenStream,
) -> proc_macro::TokenStream {
    if !attr.is_empty() {
        return quote::quote! {
            ::core::compile_error!("#[deepclone_testhelpers::test] takes no arguments");
        }
        .into();
    }

    let item = TokenStream::from(item);
    let mut iter = item.to_token_iter();
    let TestFn { signature, body } = match iter.parse::<TestFn>() {
        Ok(parsed) => parsed,
        Err(_) => {
            return quote::quote! {
                ::core::compile_error!("#[deepclone_testhelpers::test] expects a function");
            }
            .into();
        }
    };
    let body = body.0.stream();

    quote::quote! {
        #[::core::prelude::rust_2024::test]
        #signature {
            ::deepclone_testhelpers::setup();

            #body
        }
    }
    .into()
}
