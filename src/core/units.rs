use crate::models::Units;

/// Shorthand temperature letter for a units token
///
/// "F" for imperial, "C" for metric, "K" for anything else including a
/// missing token.
#[inline]
pub fn units_letter(token: Option<&str>) -> &'static str {
    Units::from_token(token).letter()
}

/// Units for a request, falling back to `default` when the token is absent
///
/// An unrecognised token is passed through as the provider default rather than
/// replaced, matching how the provider itself treats it.
pub fn resolve_units(token: Option<&str>, default: Units) -> Units {
    match token {
        None | Some("") => default,
        Some(_) => Units::from_token(token),
    }
}
