// src/core/html.rs
//
// Tolerant, allocation-light HTML scanning. Lower-casing is ASCII-only so
// byte offsets found in the lowered copy are valid in the input.

pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| {
            if c.is_ascii() {
                c.to_ascii_lowercase()
            } else {
                c
            }
        })
        .collect()
}

/// Inner text of the first `<tag …>…</tag>` element whose `id` attribute
/// equals `id` (case-insensitive). Quoted and bare attribute values both
/// count; `data-id` and friends do not.
pub fn element_inner_by_id<'a>(doc: &'a str, tag: &str, id: &str) -> Option<&'a str> {
    let lc = to_lower(doc);
    let open = join!("<", &to_lower(tag));
    let close = join!("</", &to_lower(tag));
    let want = to_lower(id);

    // Judge each opening tag on its own attributes; only the match looks for
    // its close tag, so an unclosed tag earlier on cannot swallow it.
    let mut from = 0usize;
    while let Some(rel) = lc.get(from..)?.find(&open) {
        let start = from + rel;
        let name_end = start + open.len();
        let open_end = lc[name_end..].find('>')? + name_end;

        // `<scripts>` is not `<script>`
        let boundary = lc[name_end..]
            .chars()
            .next()
            .is_some_and(|c| c == '>' || c == '/' || c.is_ascii_whitespace());

        if boundary && attr_value(&lc[name_end..open_end], "id") == Some(want.as_str()) {
            let inner_start = open_end + 1;
            let inner_end = lc[inner_start..].find(&close)? + inner_start;
            return Some(&doc[inner_start..inner_end]);
        }
        from = open_end + 1;
    }
    None
}

/// Value of `name` inside an (already lower-cased) attribute list.
pub fn attr_value<'a>(attrs: &'a str, name: &str) -> Option<&'a str> {
    let bytes = attrs.as_bytes();
    let mut pos = 0usize;

    while let Some(rel) = attrs[pos..].find(name) {
        let at = pos + rel;
        pos = at + name.len();

        let preceded_ok = at == 0 || bytes[at - 1].is_ascii_whitespace();
        if !preceded_ok {
            continue;
        }
        let rest = attrs[pos..].trim_start();
        let Some(rest) = rest.strip_prefix('=') else { continue };
        let rest = rest.trim_start();

        return match rest.chars().next() {
            Some(q @ ('"' | '\'')) => {
                let body = &rest[1..];
                body.find(q).map(|end| &body[..end])
            }
            Some(_) => {
                let end = rest
                    .find(|c: char| c.is_ascii_whitespace() || c == '/')
                    .unwrap_or(rest.len());
                Some(&rest[..end])
            }
            None => None,
        };
    }
    None
}
