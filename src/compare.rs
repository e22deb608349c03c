/// Total order over URI records. Fields are compared in a fixed precedence
/// (scheme, host, port, path, query, fragment, user, pass) and the first
/// difference decides.
use core::cmp::Ordering;

use crate::types::Component;
use crate::uri::Uri;

/// Compare one string field of two records.
///
/// Present fields compare bytewise; an absent field sorts before any present
/// one, the empty string included; two absent fields are equal.
pub fn compare_field(a: Option<&[u8]>, b: Option<&[u8]>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(b),
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Compare two records. `Ord for Uri` delegates here.
pub fn compare(a: &Uri, b: &Uri) -> Ordering {
    let field = |component| {
        compare_field(a.component_bytes(component), b.component_bytes(component))
    };

    field(Component::Scheme)
        .then_with(|| field(Component::Host))
        .then_with(|| a.port().cmp(&b.port()))
        .then_with(|| field(Component::Path))
        .then_with(|| field(Component::Query))
        .then_with(|| field(Component::Fragment))
        .then_with(|| field(Component::User))
        .then_with(|| field(Component::Pass))
}
