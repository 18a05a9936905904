use proc_macro::TokenStream;
use quote::quote;
use syn::{Attribute, Data, DataEnum, DeriveInput, Expr, ExprLit, Fields, Lit, Meta, Variant, parse_macro_input};

/// 提取文档注释，每行去掉`///`之后的一个前导空格。
fn extract_doc(attrs: &[Attribute]) -> String {
    let mut lines = Vec::new();
    for attr in attrs {
        if attr.path().is_ident("doc")
            && let Meta::NameValue(nv) = &attr.meta
            && let Expr::Lit(ExprLit { lit: Lit::Str(s), .. }) = &nv.value
        {
            let line = s.value();
            lines.push(line.strip_prefix(' ').map(str::to_string).unwrap_or(line));
        }
    }
    lines.join("\n")
}

/// 命令名：文档的第一个单词，没有文档时使用小写的变体名。
fn extract_name(variant: &Variant) -> String {
    let doc = extract_doc(&variant.attrs);
    match doc.split_whitespace().next() {
        Some(name) => name.to_string(),
        None => variant.ident.to_string().to_lowercase(),
    }
}

fn ignore_fields(variant: &Variant) -> proc_macro2::TokenStream {
    let variant_name = &variant.ident;
    match &variant.fields {
        Fields::Unit => quote! { #variant_name },
        Fields::Unnamed(fields) => {
            let wildcards = std::iter::repeat_n(quote! { _ }, fields.unnamed.len());
            quote! { #variant_name(#(#wildcards),*) }
        }
        Fields::Named(_) => quote! { #variant_name { .. } },
    }
}

/// 从枚举变体的文档注释生成帮助信息，文档的第一个单词作为命令名：
///  - `help(&self)`：当前变体的帮助信息；
///  - `name(&self)`：当前变体的命令名；
///  - `all_help()`：按声明顺序排列的全部`(name, help)`；
///  - `names()`：按声明顺序排列的全部命令名。
#[proc_macro_derive(CmdHelp)]
pub fn cmd_help_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let enum_name = &input.ident;

    let Data::Enum(DataEnum { variants, .. }) = &input.data else {
        return syn::Error::new_spanned(&input, "CmdHelp can only be derived on enums").to_compile_error().into();
    };

    let docs = variants.iter().map(|v| extract_doc(&v.attrs)).collect::<Vec<_>>();
    let names = variants.iter().map(extract_name).collect::<Vec<_>>();
    let patterns = variants.iter().map(ignore_fields).collect::<Vec<_>>();

    let expanded = quote! {
        impl #enum_name {
            /// 获取帮助信息。
            pub fn help(&self) -> &'static str {
                match self {
                    #(Self::#patterns => #docs,)*
                }
            }

            /// 获取命令名。
            pub fn name(&self) -> &'static str {
                match self {
                    #(Self::#patterns => #names,)*
                }
            }

            /// 获取全部帮助信息：[(name, help), ...]
            pub fn all_help() -> &'static [(&'static str, &'static str)] {
                &[#((#names, #docs)),*]
            }

            /// 获取全部命令名。
            pub fn names() -> &'static [&'static str] {
                &[#(#names),*]
            }
        }
    };

    TokenStream::from(expanded)
}
