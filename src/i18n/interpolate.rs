use indexmap::IndexMap;

/// Replaces each `%s` in order with the next argument.
///
/// Placeholders left over once the arguments run out stay as they are.
#[must_use]
pub fn interpolate<S: AsRef<str>>(format: &str, args: &[S]) -> String {
    let mut out = String::with_capacity(format.len());
    let mut args = args.iter();
    let mut rest = format;
    while let Some(position) = rest.find("%s") {
        out.push_str(&rest[..position]);
        match args.next() {
            Some(arg) => out.push_str(arg.as_ref()),
            None => out.push_str("%s"),
        }
        rest = &rest[position + 2..];
    }
    out.push_str(rest);
    out
}

/// Replaces `%(name)s` placeholders with values from `values`.
///
/// Unknown names and malformed placeholders are kept verbatim.
#[must_use]
pub fn interpolate_named<S: AsRef<str>>(format: &str, values: &IndexMap<String, S>) -> String {
    let mut out = String::with_capacity(format.len());
    let mut rest = format;
    while let Some(start) = rest.find("%(") {
        out.push_str(&rest[..start]);
        let tail = &rest[start + 2..];
        let name_len = tail
            .find(|c: char| !(c.is_alphanumeric() || c == '_'))
            .unwrap_or(tail.len());
        let name = &tail[..name_len];
        let after = &tail[name_len..];
        match (name.is_empty(), after.strip_prefix(")s"), values.get(name)) {
            (false, Some(remaining), Some(value)) => {
                out.push_str(value.as_ref());
                rest = remaining;
            }
            _ => {
                out.push_str("%(");
                rest = tail;
            }
        }
    }
    out.push_str(rest);
    out
}
