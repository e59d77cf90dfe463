use proc_macro::TokenStream;
use quote::quote;
use syn::{
    Attribute, Data, DeriveInput, Fields, LitStr, Type, ext::IdentExt, parse_macro_input,
};

/// How a field's type is coerced
enum FieldKind {
    Supported,
    Unsupported(String),
}

const INTEGER_TYPES: &[&str] = &[
    "i8", "i16", "i32", "i64", "i128", "isize", "u8", "u16", "u32", "u64", "u128", "usize",
];

/// Derive `config_bindr::Extract` for a struct with named fields
///
/// Field attributes:
/// - `#[field(name = "PORT")]` or `#[field("PORT")]` sets the lookup name
/// - `#[field(skip)]` makes the field read-only
#[proc_macro_derive(Extract, attributes(field))]
pub fn derive_extract(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match generate_extract(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn generate_extract(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let struct_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    input,
                    "Extract can only be derived for structs with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                input,
                "Extract can only be derived for structs",
            ));
        }
    };

    let mut slot_pushes = Vec::new();

    for field in fields {
        let Some(field_name) = field.ident.as_ref() else {
            continue;
        };
        let ident_str = field_name.unraw().to_string();
        let config = parse_field_attr(&field.attrs)?;

        // Keep feature-gated fields feature-gated
        let cfg_attrs: Vec<&Attribute> = field
            .attrs
            .iter()
            .filter(|attr| attr.path().is_ident("cfg"))
            .collect();

        let tag = match &config.name {
            Some(name) => quote! { ::std::option::Option::Some(#name) },
            None => quote! { ::std::option::Option::None },
        };

        let value = match (config.skip, classify_type(&field.ty)) {
            (false, FieldKind::Supported) => quote! {
                ::config_bindr::FieldValue::from(&mut self.#field_name)
            },
            (_, FieldKind::Unsupported(type_name)) => quote! {
                ::config_bindr::FieldValue::Unsupported(#type_name)
            },
            (true, FieldKind::Supported) => {
                let type_name = type_to_string(&field.ty);
                quote! { ::config_bindr::FieldValue::Unsupported(#type_name) }
            }
        };
        let writable = !config.skip;

        slot_pushes.push(quote! {
            #(#cfg_attrs)*
            fields.push(::config_bindr::FieldSlot {
                ident: #ident_str,
                tag: #tag,
                writable: #writable,
                value: #value,
            });
        });
    }

    Ok(quote! {
        impl #impl_generics ::config_bindr::Extract for #struct_name #ty_generics #where_clause {
            fn fields(&mut self) -> ::std::vec::Vec<::config_bindr::FieldSlot<'_>> {
                let mut fields = ::std::vec::Vec::new();
                #(#slot_pushes)*
                fields
            }
        }
    })
}

#[derive(Debug, Default)]
struct FieldAttr {
    name: Option<LitStr>,
    skip: bool,
}

/// Parse `#[field("X")]`, `#[field(name = "X")]` and `#[field(skip)]`
fn parse_field_attr(attrs: &[Attribute]) -> syn::Result<FieldAttr> {
    let mut config = FieldAttr::default();

    for attr in attrs.iter().filter(|attr| attr.path().is_ident("field")) {
        if let Ok(name) = attr.parse_args::<LitStr>() {
            config.name = Some(name);
            continue;
        }

        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("name") {
                let value: LitStr = meta.value()?.parse()?;
                config.name = Some(value);
                Ok(())
            } else if meta.path.is_ident("skip") {
                config.skip = true;
                Ok(())
            } else {
                Err(meta.error("expected `name = \"...\"` or `skip`"))
            }
        })?;
    }

    if let Some(name) = &config.name {
        if name.value().is_empty() {
            return Err(syn::Error::new_spanned(name, "field name must not be empty"));
        }
    }

    Ok(config)
}

/// Decide from the written type whether a coercion rule exists
fn classify_type(ty: &Type) -> FieldKind {
    if let Type::Path(type_path) = ty {
        if type_path.qself.is_none() {
            if let Some(segment) = type_path.path.segments.last() {
                let ident = segment.ident.to_string();
                let plain = matches!(segment.arguments, syn::PathArguments::None);
                if plain
                    && (ident == "String" || ident == "bool" || INTEGER_TYPES.contains(&ident.as_str()))
                {
                    return FieldKind::Supported;
                }
            }
        }
    }
    FieldKind::Unsupported(type_to_string(ty))
}

fn type_to_string(ty: &Type) -> String {
    quote!(#ty).to_string().replace(' ', "")
}
