use crate::parse::path::HttpMethod;

/// Turn an arbitrary string into a valid JavaScript identifier.
///
/// Characters outside `[A-Za-z0-9_$]` become underscores, a leading digit
/// gains an underscore prefix, and each separator run followed by a letter
/// collapses into that letter uppercased. Applying it twice changes nothing.
pub fn normalize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len() + 1);
    if raw.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        out.push('_');
    }

    // Underscores accumulated but not yet emitted. A run only collapses
    // when a letter follows it; otherwise it passes through verbatim.
    let mut run = 0usize;
    for ch in raw.chars() {
        let mapped = if ch.is_ascii_alphanumeric() || ch == '_' || ch == '$' {
            ch
        } else {
            '_'
        };
        if mapped == '_' {
            run += 1;
            continue;
        }
        if run > 0 {
            if mapped.is_ascii_alphabetic() {
                out.push(mapped.to_ascii_uppercase());
            } else {
                for _ in 0..run {
                    out.push('_');
                }
                out.push(mapped);
            }
            run = 0;
        } else {
            out.push(mapped);
        }
    }
    for _ in 0..run {
        out.push('_');
    }

    if out.is_empty() {
        out.push('_');
    }
    out
}

/// Derive an operation name from the method token and route, used when no
/// `operationId` is declared.
///
/// - `GET /moment/list` → `getMomentList`
/// - `POST /users/{userId}/messages` → `postUsersUserIdMessages`
/// - `GET /` → `get`
pub fn route_to_name(method: HttpMethod, path: &str) -> String {
    let mut name = method.token().to_string();
    for segment in path.split('/').filter(|s| !s.is_empty()) {
        let cleaned = segment.trim_start_matches('{').trim_end_matches('}');
        let mut chars = cleaned.chars();
        if let Some(first) = chars.next() {
            name.extend(first.to_uppercase());
            name.push_str(chars.as_str());
        }
    }
    name
}
