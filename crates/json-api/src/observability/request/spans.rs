//! Route templates for span names and metric labels.

/// Replaces numeric path segments with `{id}` so `/products/42` and
/// `/products/7` share one span name and one metric series.
pub(super) fn route_template(path: &str) -> String {
    let segments: Vec<&str> = path
        .split('/')
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            if segment.parse::<i64>().is_ok() {
                "{id}"
            } else {
                segment
            }
        })
        .collect();

    format!("/{}", segments.join("/"))
}

pub(super) fn span_name(method: &str, route: &str) -> String {
    format!("{method} {route}")
}
