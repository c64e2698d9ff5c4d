//! Coordinate token parsing.

/// Parse an anchored `x,y` prefix of two unsigned decimal integers.
///
/// Returns `None` when the token does not start with `digits,digits`.
/// Characters after the matched prefix are ignored, so `"3,4b"` parses as
/// `(3, 4)`. Callers treat `None` as an absent or invalid coordinate; this
/// function itself never fails.
pub fn parse_coords(token: &str) -> Option<(u32, u32)> {
    let (x, rest) = parse_u32_prefix(token)?;
    let rest = rest.strip_prefix(',')?;
    let (y, _) = parse_u32_prefix(rest)?;
    Some((x, y))
}

/// Parse the leading run of ASCII digits as a `u32`, returning the rest.
fn parse_u32_prefix(s: &str) -> Option<(u32, &str)> {
    let end = s
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(s.len());
    if end == 0 {
        return None;
    }
    let value = s[..end].parse().ok()?;
    Some((value, &s[end..]))
}
