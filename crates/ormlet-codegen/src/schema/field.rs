#[derive(Debug)]
pub(crate) struct Field {
    /// Index of field in the containing record
    pub(crate) id: usize,

    /// Field identifier
    pub(crate) ident: syn::Ident,

    /// True for `pub` fields. Restricted visibility counts as private.
    pub(crate) public: bool,

    /// Field attributes
    pub(crate) attrs: FieldAttr,

    /// Declared field type
    pub(crate) ty: syn::Type,
}

#[derive(Debug, Default)]
pub(crate) struct FieldAttr {
    /// True if the field is annotated with `#[key]`
    pub(crate) key: bool,

    /// True if the field is annotated with `#[embed]`
    pub(crate) embed: bool,

    /// Raw text of `#[tag = "..."]`
    pub(crate) tag: Option<syn::LitStr>,
}

impl Field {
    pub(super) fn from_ast(field: &syn::Field, id: usize) -> syn::Result<Self> {
        let Some(ident) = &field.ident else {
            return Err(syn::Error::new_spanned(field, "record fields must be named"));
        };

        let mut errs = super::ErrorSet::new();
        let mut attrs = FieldAttr::default();

        for attr in &field.attrs {
            if attr.path().is_ident("key") {
                if attrs.key {
                    errs.push(syn::Error::new_spanned(attr, "duplicate #[key] attribute"));
                } else {
                    attrs.key = true;
                }
            } else if attr.path().is_ident("embed") {
                if attrs.embed {
                    errs.push(syn::Error::new_spanned(
                        attr,
                        "duplicate #[embed] attribute",
                    ));
                } else {
                    attrs.embed = true;
                }
            } else if attr.path().is_ident("tag") {
                if attrs.tag.is_some() {
                    errs.push(syn::Error::new_spanned(attr, "duplicate #[tag] attribute"));
                } else {
                    match parse_tag(attr) {
                        Ok(tag) => attrs.tag = Some(tag),
                        Err(err) => errs.push(err),
                    }
                }
            }
        }

        if attrs.embed && attrs.key {
            errs.push(syn::Error::new_spanned(
                field,
                "#[key] cannot be used on an embedded field",
            ));
        }

        if attrs.embed && attrs.tag.is_some() {
            errs.push(syn::Error::new_spanned(
                field,
                "#[tag] cannot be used on an embedded field",
            ));
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        Ok(Self {
            id,
            ident: ident.clone(),
            public: matches!(field.vis, syn::Visibility::Public(_)),
            attrs,
            ty: field.ty.clone(),
        })
    }
}

fn parse_tag(attr: &syn::Attribute) -> syn::Result<syn::LitStr> {
    let syn::Meta::NameValue(meta) = &attr.meta else {
        return Err(syn::Error::new_spanned(
            attr,
            "expected #[tag = \"...\"]",
        ));
    };

    match &meta.value {
        syn::Expr::Lit(syn::ExprLit {
            lit: syn::Lit::Str(lit),
            ..
        }) => Ok(lit.clone()),
        value => Err(syn::Error::new_spanned(value, "tag must be a string literal")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(field: syn::Field) -> syn::Result<Field> {
        Field::from_ast(&field, 0)
    }

    #[test]
    fn tag_is_kept_verbatim() {
        let field = parse(syn::parse_quote! {
            #[tag = "column=USER_NAME,size=60"]
            pub name: String
        })
        .unwrap();

        assert_eq!(
            field.attrs.tag.map(|tag| tag.value()).as_deref(),
            Some("column=USER_NAME,size=60")
        );
    }

    #[test]
    fn non_string_tag_is_rejected() {
        assert!(parse(syn::parse_quote! {
            #[tag = 3]
            pub name: String
        })
        .is_err());
    }

    #[test]
    fn embed_and_key_conflict() {
        let err = parse(syn::parse_quote! {
            #[key]
            #[embed]
            pub audit: Audit
        })
        .unwrap_err();

        assert_eq!(
            err.to_string(),
            "#[key] cannot be used on an embedded field"
        );
    }

    #[test]
    fn restricted_visibility_is_private() {
        let field = parse(syn::parse_quote! {
            pub(crate) name: String
        })
        .unwrap();

        assert!(!field.public);
    }
}
