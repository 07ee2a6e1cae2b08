/// Normalize a raw cell slice extracted by the tokenizer into its content.
///
/// The slice is trimmed, then exactly one field-delimiting quote is stripped
/// from each end, then escape sequences are collapsed (`\"` first, `""`
/// second, in that order so a backslash escape adjacent to a doubled quote is
/// not collapsed twice).
///
/// A delimiting quote is only recognized when the run of consecutive quotes
/// at that end has length 1 or at least 3: a field like `"""one"""` must lose
/// only its outermost quotes, while a run of exactly 2 is an escaped quote
/// belonging to the content.
pub fn to_content(raw: &str) -> String {
    let mut text = raw.trim();

    let leading = text.bytes().take_while(|&b| b == b'"').count();

    if leading == 1 || leading >= 3 {
        text = &text[1..];
    }

    let trailing = text.bytes().rev().take_while(|&b| b == b'"').count();

    if trailing == 1 || trailing >= 3 {
        text = &text[..text.len() - 1];
    }

    text.replace("\\\"", "\"").replace("\"\"", "\"")
}
