//! Parsers for canonical type names using winnow.
//!
//! The grammar is the one produced by the renderer:
//!
//! ```text
//! type      = base [" " extent+] cv ("*" cv)* ["&" | "&&"]
//! extent    = "[" digits "]"
//! cv        = [" const"] [" volatile"]
//! type-list = [type ("," " "* type)*]
//! ```
//!
//! Base names may contain spaces, `::` and balanced `<...>` or `(...)`.

use alloc::{
    format,
    string::{String, ToString},
    vec::Vec,
};
use winnow::{
    ascii::{dec_uint, space0},
    combinator::{alt, delimited, not, opt, preceded, repeat, separated, terminated},
    error::InputError,
    token::{literal, one_of},
    ModalResult, Parser,
};

use super::{Cv, ReferenceKind, TypeDescriptor};
use crate::Error;

/// Whether `c` can continue an identifier.
fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Whether `rest` starts with `keyword` as a whole word.
fn starts_with_keyword(rest: &str, keyword: &str) -> bool {
    rest.strip_prefix(keyword)
        .is_some_and(|after| !after.starts_with(is_ident_char))
}

/// Whether the space at the start of `rest` ends the base name.
fn ends_base(rest: &str) -> bool {
    let word = &rest[1..];
    word.starts_with('[')
        || starts_with_keyword(word, "const")
        || starts_with_keyword(word, "volatile")
}

/// Parse a base name, up to the first qualifier, extent, pointer or reference marker.
///
/// Commas and markers nested in `<...>` or `(...)` belong to the name.
fn base_name<'a>(input: &mut &'a str) -> ModalResult<&'a str, InputError<&'a str>> {
    let s: &'a str = *input;
    let mut depth = 0usize;
    let mut end = s.len();

    for (pos, c) in s.char_indices() {
        match c {
            '<' | '(' => depth += 1,
            '>' | ')' => depth = depth.saturating_sub(1),
            '*' | '&' | ',' if depth == 0 => {
                end = pos;
                break;
            }
            ' ' if depth == 0 && ends_base(&s[pos..]) => {
                end = pos;
                break;
            }
            _ => {}
        }
    }

    let (name, rest) = s.split_at(end);
    *input = rest;
    Ok(name.trim_end())
}

/// Parse a single qualifier keyword preceded by a space.
fn qualifier<'a>(input: &mut &'a str) -> ModalResult<Cv, InputError<&'a str>> {
    let keyword = alt((
        literal(" const").value(Cv::CONST),
        literal(" volatile").value(Cv::VOLATILE),
    ));

    terminated(keyword, not(one_of(is_ident_char))).parse_next(input)
}

/// Parse the qualifiers of one level, in any order.
fn cv<'a>(input: &mut &'a str) -> ModalResult<Cv, InputError<&'a str>> {
    repeat(0.., qualifier)
        .fold(|| Cv::NONE, Cv::union)
        .parse_next(input)
}

/// Parse array extents: ` [2][3]`.
fn extents<'a>(input: &mut &'a str) -> ModalResult<Vec<usize>, InputError<&'a str>> {
    let extent = delimited(literal("["), dec_uint::<_, usize, _>, literal("]"));
    let extents = opt(preceded(literal(" "), repeat(1.., extent))).parse_next(input)?;

    Ok(extents.unwrap_or_default())
}

/// Parse the pointer levels, innermost first.
fn pointers<'a>(input: &mut &'a str) -> ModalResult<Vec<Cv>, InputError<&'a str>> {
    repeat(0.., preceded(literal("*"), cv)).parse_next(input)
}

/// Parse the optional reference marker.
fn reference<'a>(input: &mut &'a str) -> ModalResult<ReferenceKind, InputError<&'a str>> {
    let marker = alt((
        literal("&&").value(ReferenceKind::Rvalue),
        literal("&").value(ReferenceKind::Lvalue),
    ));

    opt(marker)
        .map(Option::unwrap_or_default)
        .parse_next(input)
}

/// Parse a complete type.
fn type_descriptor<'a>(input: &mut &'a str) -> ModalResult<TypeDescriptor, InputError<&'a str>> {
    let base = base_name(input)?;
    let mut ty = TypeDescriptor {
        base: base.to_string(),
        extents: extents(input)?,
        base_cv: cv(input)?,
        pointers: pointers(input)?,
        reference: ReferenceKind::None,
    };

    // Extents after a pointer make an array of pointers, whose element becomes the base.
    loop {
        let extents = extents(input)?;
        if extents.is_empty() {
            break;
        }

        ty = TypeDescriptor {
            base: ty.to_string(),
            extents,
            base_cv: cv(input)?,
            pointers: pointers(input)?,
            reference: ReferenceKind::None,
        };
    }
    ty.reference = reference(input)?;

    Ok(ty)
}

/// Parse a comma-separated list of types.
fn type_list<'a>(input: &mut &'a str) -> ModalResult<Vec<TypeDescriptor>, InputError<&'a str>> {
    separated(1.., type_descriptor, (literal(","), space0)).parse_next(input)
}

/// Parse a single type name.
pub(crate) fn parse_type(input: &str) -> Result<TypeDescriptor, Error> {
    let ty = parse_from_str(input, type_descriptor)?;
    if ty.base.is_empty() {
        return Err(Error::EmptyBaseName);
    }

    Ok(ty)
}

/// Parse a list of type names. An empty input is an empty list.
pub(crate) fn parse_type_list(input: &str) -> Result<Vec<TypeDescriptor>, Error> {
    if input.trim().is_empty() {
        return Ok(Vec::new());
    }

    let types = parse_from_str(input, type_list)?;
    if types.iter().any(|ty| ty.base.is_empty()) {
        return Err(Error::EmptyBaseName);
    }

    Ok(types)
}

/// Helper function to run `parser` on the whole of `input`.
fn parse_from_str<'a, T>(
    input: &'a str,
    parser: impl Fn(&mut &'a str) -> ModalResult<T, InputError<&'a str>>,
) -> Result<T, Error> {
    let mut rest = input.trim();
    match parser(&mut rest) {
        Ok(result) if rest.is_empty() => {
            trace!("parsed type name `{}`", input);
            Ok(result)
        }
        Ok(_) => Err(Error::TrailingInput(String::from(rest.trim_start()))),
        Err(err) => Err(Error::Parse(format!("{err}"))),
    }
}
