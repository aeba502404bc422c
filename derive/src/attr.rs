use darling::FromDeriveInput;
use syn::{
    Attribute, Error, Expr, Ident, Lit, LitBool, LitStr, Token,
    parse::{Parse, ParseStream},
};

/// `#[options(..)]` on the container.
#[derive(FromDeriveInput, Default)]
#[darling(default, attributes(options))]
pub(crate) struct OptionsAttr {
    pub name: Option<String>,
    pub about: Option<String>,
}

/// `#[opt("--flag", "-f", required, description = "..", read_only)]` on a field.
#[derive(Default)]
pub(crate) struct OptAttr {
    pub flags: Vec<LitStr>,
    pub required: bool,
    pub read_only: bool,
    pub description: Option<String>,
}

impl Parse for OptAttr {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut attr = OptAttr::default();

        while !input.is_empty() {
            if input.peek(LitStr) {
                let flag: LitStr = input.parse()?;
                let value = flag.value();
                if value.is_empty() || value.chars().any(char::is_whitespace) {
                    return Err(Error::new_spanned(
                        flag,
                        "flags must be non-empty and contain no whitespace",
                    ));
                }
                attr.flags.push(flag);
            } else {
                let key: Ident = input.parse()?;
                if key == "required" {
                    attr.required = parse_switch(input)?;
                } else if key == "read_only" {
                    attr.read_only = parse_switch(input)?;
                } else if key == "description" {
                    input.parse::<Token![=]>()?;
                    let value: Expr = input.parse()?;
                    if let Expr::Lit(syn::ExprLit {
                        lit: Lit::Str(lit_str),
                        ..
                    }) = value
                    {
                        attr.description = Some(lit_str.value());
                    } else {
                        return Err(Error::new_spanned(
                            value,
                            "Expected string literal for 'description' (e.g., description = \"text\")",
                        ));
                    }
                } else {
                    return Err(Error::new_spanned(
                        key,
                        "Unsupported attribute key. Expected a flag string, `required`, `description` or `read_only`",
                    ));
                }
            }

            if input.is_empty() {
                break;
            }
            input.parse::<Token![,]>()?;
        }

        Ok(attr)
    }
}

/// `key` alone means `key = true`.
fn parse_switch(input: ParseStream) -> syn::Result<bool> {
    if input.peek(Token![=]) {
        input.parse::<Token![=]>()?;
        Ok(input.parse::<LitBool>()?.value)
    } else {
        Ok(true)
    }
}

/// Doc comment lines joined by spaces, used when `description` is absent.
pub(crate) fn doc_description(attrs: &[Attribute]) -> Option<String> {
    let lines: Vec<String> = attrs
        .iter()
        .filter(|attr| attr.path().is_ident("doc"))
        .filter_map(|attr| match &attr.meta {
            syn::Meta::NameValue(nv) => match &nv.value {
                Expr::Lit(syn::ExprLit {
                    lit: Lit::Str(s), ..
                }) => Some(s.value().trim().to_owned()),
                _ => None,
            },
            _ => None,
        })
        .filter(|line| !line.is_empty())
        .collect();
    (!lines.is_empty()).then(|| lines.join(" "))
}
