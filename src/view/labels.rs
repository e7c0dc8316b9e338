//! Russian display label helpers shared by the view-models.

/// Format a normalized numeric field: whole values without a fraction,
/// everything else with two digits.
pub(crate) fn fmt_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.2}")
    }
}

pub(crate) fn price_label(base_price: f64) -> String {
    format!("{} ₽ / ночь", fmt_number(base_price))
}

pub(crate) fn area_label(area_sqm: f64) -> String {
    format!("{} м²", fmt_number(area_sqm))
}

pub(crate) fn capacity_label(capacity: u32) -> String {
    format!(
        "{} {}",
        capacity,
        ru_plural(capacity, "гость", "гостя", "гостей")
    )
}

/// Russian plural selection: 1 гость, 2 гостя, 5 гостей, 11 гостей.
fn ru_plural<'a>(n: u32, one: &'a str, few: &'a str, many: &'a str) -> &'a str {
    let tail = n % 100;
    if (11..=14).contains(&tail) {
        return many;
    }
    match n % 10 {
        1 => one,
        2..=4 => few,
        _ => many,
    }
}
