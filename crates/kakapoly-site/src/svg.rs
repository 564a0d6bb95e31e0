//! Small helpers for presenting raw SVG markup.

use std::path::Path;

/// Remove `width` and `height` from the root `<svg>` element so the markup
/// scales to its container. Everything else is left untouched.
pub fn strip_root_size(svg: &str) -> String {
    let Some(start) = find_root_tag(svg) else {
        return svg.to_string();
    };
    let Some(len) = tag_len(&svg[start..]) else {
        return svg.to_string();
    };

    let mut out = String::with_capacity(svg.len());
    out.push_str(&svg[..start]);
    out.push_str(&strip_attrs(&svg[start..start + len], &["width", "height"]));
    out.push_str(&svg[start + len..]);
    out
}

fn find_root_tag(svg: &str) -> Option<usize> {
    svg.match_indices("<svg").map(|(i, _)| i).find(|&i| {
        svg[i + 4..]
            .chars()
            .next()
            .is_some_and(|c| c.is_whitespace() || c == '>' || c == '/')
    })
}

/// Offset of the `>` closing the tag at the start of `s`, skipping any `>`
/// inside quoted attribute values.
fn tag_len(s: &str) -> Option<usize> {
    let mut quote = None;
    for (i, c) in s.char_indices() {
        match (quote, c) {
            (None, '"' | '\'') => quote = Some(c),
            (None, '>') => return Some(i),
            (Some(q), c) if c == q => quote = None,
            _ => {}
        }
    }
    None
}

/// `tag` is an open tag without its closing `>`, e.g. `<svg width="24"`.
fn strip_attrs(tag: &str, names: &[&str]) -> String {
    let (head, mut rest) = tag.split_at(4);
    let mut out = String::from(head);

    loop {
        let trimmed = rest.trim_start();
        let ws = &rest[..rest.len() - trimmed.len()];
        if trimmed.is_empty() || trimmed.starts_with('/') {
            out.push_str(rest);
            break;
        }

        let name_end = trimmed
            .find(|c: char| c == '=' || c == '/' || c.is_whitespace())
            .unwrap_or(trimmed.len());
        let name = &trimmed[..name_end];

        let mut end = name_end;
        if let Some(value) = trimmed[name_end..].strip_prefix('=') {
            end += 1;
            end += match value.chars().next() {
                Some(q @ ('"' | '\'')) => value[1..].find(q).map_or(value.len(), |i| i + 2),
                _ => value
                    .find(|c: char| c == '/' || c.is_whitespace())
                    .unwrap_or(value.len()),
            };
        }

        if !names.iter().any(|n| n.eq_ignore_ascii_case(name)) {
            out.push_str(ws);
            out.push_str(&trimmed[..end]);
        }
        rest = &trimmed[end..];
    }

    out
}

/// File name offered for download: the icon name, reduced to its last path
/// component, with `.svg` appended unless already present.
pub fn download_name(icon_name: &str) -> String {
    let base = Path::new(icon_name)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| "icon".to_string());

    let has_ext = Path::new(&base)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));
    if has_ext {
        base
    } else {
        format!("{base}.svg")
    }
}
