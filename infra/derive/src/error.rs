use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{Attribute, Data, DeriveInput, Field, Fields, Ident, Type};

struct ErrorVariant<'a> {
    ident: &'a Ident,
    source: Option<(&'a Ident, &'a Type)>,
    has_context: bool,
    cfg: Vec<&'a Attribute>,
}

impl<'a> ErrorVariant<'a> {
    fn parse(variant: &'a syn::Variant) -> syn::Result<Self> {
        let Fields::Named(fields) = &variant.fields else {
            return Err(syn::Error::new_spanned(
                variant,
                "aqua_error variants must use named fields",
            ));
        };

        let mut has_context = false;
        let mut source = None;
        for field in &fields.named {
            let Some(name) = field.ident.as_ref() else { continue };
            if name == "context" {
                if !is_context_type(&field.ty) {
                    return Err(syn::Error::new_spanned(
                        &field.ty,
                        "context field must be Option<Cow<'static, str>>",
                    ));
                }
                has_context = true;
            } else if name == "source" || has_attr(field, "source") {
                source = Some((name, &field.ty));
            }
        }

        if source.is_some() && !has_context {
            return Err(syn::Error::new_spanned(
                &variant.ident,
                "aqua_error variants with a source need `context: Option<Cow<'static, str>>`",
            ));
        }

        Ok(Self {
            ident: &variant.ident,
            source,
            has_context,
            cfg: variant.attrs.iter().filter(|a| a.path().is_ident("cfg")).collect(),
        })
    }

    fn is_internal(&self) -> bool {
        self.ident == "Internal"
    }
}

pub fn expand(input: DeriveInput) -> syn::Result<TokenStream> {
    let Data::Enum(data) = &input.data else {
        return Err(syn::Error::new_spanned(&input.ident, "aqua_error can only be applied to enums"));
    };

    let variants =
        data.variants.iter().map(ErrorVariant::parse).collect::<syn::Result<Vec<_>>>()?;

    let name = &input.ident;
    let ext = format_ident!("{}Ext", name);

    let derives = missing_derives(&input.attrs);
    let context_arms = variants.iter().filter(|v| v.has_context).map(|v| {
        let (ident, cfg) = (v.ident, &v.cfg);
        quote! { #(#cfg)* #name::#ident { context, .. } => *context = Some(ctx.into()), }
    });
    let source_impls = variants
        .iter()
        .filter(|v| !v.is_internal())
        .filter_map(|v| source_impl(name, &ext, v));
    let internal_impls = variants.iter().find(|v| v.is_internal()).map(|v| {
        let cfg = &v.cfg;
        quote! {
            #(#cfg)*
            impl From<&'static str> for #name {
                #[inline]
                fn from(message: &'static str) -> Self {
                    Self::Internal { message: ::std::borrow::Cow::Borrowed(message), context: None }
                }
            }

            #(#cfg)*
            impl From<String> for #name {
                #[inline]
                fn from(message: String) -> Self {
                    Self::Internal { message: ::std::borrow::Cow::Owned(message), context: None }
                }
            }
        }
    });

    Ok(quote! {
        #derives
        #input

        /// Attaches human readable context to a failed result.
        pub trait #ext<T> {
            /// Records `ctx` on the error, if any.
            ///
            /// # Errors
            /// Returns the original error converted into the workspace error type.
            fn context(self, ctx: impl Into<::std::borrow::Cow<'static, str>>) -> Result<T, #name>;
        }

        #[automatically_derived]
        impl<T> #ext<T> for Result<T, #name> {
            #[inline]
            fn context(self, ctx: impl Into<::std::borrow::Cow<'static, str>>) -> Self {
                self.map_err(|mut error| {
                    #[allow(unreachable_patterns)]
                    match &mut error {
                        #(#context_arms)*
                        _ => {},
                    }
                    error
                })
            }
        }

        #(#source_impls)*
        #internal_impls

        #[allow(dead_code, clippy::ref_option)]
        fn format_context(
            context: &Option<::std::borrow::Cow<'static, str>>,
        ) -> ::std::borrow::Cow<'static, str> {
            match context {
                Some(ctx) => ::std::borrow::Cow::Owned(format!(" ({ctx})")),
                None => ::std::borrow::Cow::Borrowed(""),
            }
        }
    })
}

fn source_impl(name: &Ident, ext: &Ident, v: &ErrorVariant<'_>) -> Option<TokenStream> {
    let (field, ty) = v.source?;
    let (ident, cfg) = (v.ident, &v.cfg);

    Some(quote! {
        #(#cfg)*
        #[automatically_derived]
        impl From<#ty> for #name {
            #[inline]
            fn from(#field: #ty) -> Self {
                Self::#ident { #field, context: None }
            }
        }

        #(#cfg)*
        #[automatically_derived]
        impl<T> #ext<T> for Result<T, #ty> {
            #[inline]
            fn context(self, ctx: impl Into<::std::borrow::Cow<'static, str>>) -> Result<T, #name> {
                self.map_err(|#field| #name::#ident { #field, context: Some(ctx.into()) })
            }
        }
    })
}

fn missing_derives(attrs: &[Attribute]) -> TokenStream {
    let mut derived = Vec::new();
    for attr in attrs.iter().filter(|a| a.path().is_ident("derive")) {
        let _ = attr.parse_nested_meta(|meta| {
            if let Some(last) = meta.path.segments.last() {
                derived.push(last.ident.to_string());
            }
            Ok(())
        });
    }

    let mut tokens = Vec::new();
    if !derived.iter().any(|d| d == "Debug") {
        tokens.push(quote! { Debug });
    }
    if !derived.iter().any(|d| d == "Error") {
        tokens.push(quote! { ::thiserror::Error });
    }

    if tokens.is_empty() { quote! {} } else { quote! { #[derive(#(#tokens),*)] } }
}

fn has_attr(field: &Field, name: &str) -> bool {
    field.attrs.iter().any(|attr| attr.path().is_ident(name))
}

/// Accepts `Option<Cow<'static, str>>` with any path prefix on either type.
fn is_context_type(ty: &Type) -> bool {
    let rendered: String =
        quote!(#ty).to_string().chars().filter(|c| !c.is_whitespace()).collect();
    let Some(inner) = rendered
        .strip_suffix('>')
        .and_then(|s| s.rsplit_once("Option<").map(|(_, inner)| inner))
    else {
        return false;
    };
    inner.ends_with("Cow<'static,str>") && !inner.contains("Option<")
}
