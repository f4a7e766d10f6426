/// Strips `"<scheme> "` from the start of `authorization`, ignoring ASCII case.
pub(crate) fn strip_scheme<'a>(authorization: &'a str, scheme: &str) -> Option<&'a str> {
    let prefix = authorization.get(..scheme.len())?;

    if !prefix.eq_ignore_ascii_case(scheme) {
        return None;
    }

    authorization[scheme.len()..].strip_prefix(' ')
}
