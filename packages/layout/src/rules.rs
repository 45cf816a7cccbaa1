//! The city line layout table.
//!
//! Rules are matched in order and the first rule listing the code wins.
//! The empty string stands for "no country" and belongs to the domestic
//! group alongside `US`, `CA`, and `AU`.

use crate::CityFields;

/// A group of countries sharing one city line layout.
#[derive(Debug)]
pub struct LayoutRule {
    /// Human-readable pattern, for diagnostics.
    pub pattern: &'static str,
    /// Alpha-2 codes using this layout.
    pub codes: &'static [&'static str],
    /// Builds the city line.
    pub format: fn(&CityFields<'_>) -> String,
}

/// Country-specific layouts.
pub static LAYOUT_RULES: &[LayoutRule] = &[
    LayoutRule {
        pattern: "{city}, {region}  {postal_code}",
        codes: &["CN", "IN"],
        format: city_comma_region_postal,
    },
    LayoutRule {
        pattern: "{postal_code} {city}-{region}",
        codes: &["BR"],
        format: postal_city_dash_region,
    },
    LayoutRule {
        pattern: "{postal_code} {city}, {region}",
        codes: &["MX", "SK"],
        format: postal_city_comma_region,
    },
    LayoutRule {
        pattern: "{postal_code} {city} ({region})",
        codes: &["IT"],
        format: postal_city_bracketed_region,
    },
    LayoutRule {
        pattern: "{postal_code} {city}-({region})",
        codes: &["BY"],
        format: postal_city_dash_bracketed_region,
    },
    LayoutRule {
        pattern: "{city} {region}  {postal_code}",
        codes: &["US", "CA", "AU", ""],
        format: city_region_postal,
    },
    LayoutRule {
        pattern: "{postal_code} {city}",
        codes: &[
            "IL", "DK", "FI", "FR", "DE", "GR", "NO", "ES", "SE", "TR", "CY", "PT", "MK", "BA", "XK",
        ],
        format: postal_city,
    },
    LayoutRule {
        pattern: "{postal_code} {city}",
        codes: &[
            "KW", "SY", "OM", "EE", "LU", "BE", "IS", "CH", "AT", "MD", "ME", "RS", "BG", "GE", "PL",
            "AM", "HR", "RO", "AZ",
        ],
        format: postal_city,
    },
    LayoutRule {
        pattern: "{postal_code}  {city}",
        codes: &["NL"],
        format: postal_wide_city,
    },
    LayoutRule {
        pattern: "{city}, {region}\\n{postal_code}",
        codes: &["IE"],
        format: city_comma_region_newline_postal,
    },
    // Postcode stays on the city line so it sits directly above the
    // country line on outbound mail.
    LayoutRule {
        pattern: "{city}  {postal_code}",
        codes: &["GB", "RU", "UA", "JO", "LB", "IR", "SA", "NZ"],
        format: city_wide_postal,
    },
    LayoutRule {
        pattern: "{postal_code} {city}",
        codes: &["EC"],
        format: postal_city,
    },
    LayoutRule {
        pattern: "{city}",
        codes: &["HK", "IQ", "YE", "QA", "AL"],
        format: city_only,
    },
    LayoutRule {
        pattern: "{postal_code}\\n{city}",
        codes: &["AE"],
        format: postal_newline_city,
    },
    LayoutRule {
        pattern: "{city}, {region}\\n{postal_code}",
        codes: &["JP"],
        format: city_comma_region_newline_postal,
    },
    LayoutRule {
        pattern: "{city}\\n{postal_code}",
        codes: &["EG", "ZA", "IM", "KZ", "HU"],
        format: city_newline_postal,
    },
    LayoutRule {
        pattern: "{city}, LV-{postal_code}",
        codes: &["LV"],
        format: latvia,
    },
    LayoutRule {
        pattern: "LT-{postal_code} {city}",
        codes: &["LT"],
        format: lithuania,
    },
    LayoutRule {
        pattern: "SI-{postal_code} {city}",
        codes: &["SI"],
        format: slovenia,
    },
    LayoutRule {
        pattern: "{postal_code} {region}\\n{city}",
        codes: &["CZ"],
        format: postal_region_newline_city,
    },
];

/// Layout for any code without a rule.
pub static DEFAULT_LAYOUT: LayoutRule = LayoutRule {
    pattern: "{city} {region} {postal_code}",
    codes: &[],
    format: city_region_postal_single_spaced,
};

// ── Building blocks ─────────────────────────────────────────────────

/// Joins the non-empty parts with `sep`.
fn join(sep: &str, parts: &[&str]) -> String {
    parts
        .iter()
        .copied()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(sep)
}

/// Joins the non-empty lines with `\n`.
fn lines(parts: &[&str]) -> String {
    join("\n", parts)
}

/// `value` with `prefix` and `suffix`, or empty if `value` is empty.
fn wrap(prefix: &str, value: &str, suffix: &str) -> String {
    if value.is_empty() {
        String::new()
    } else {
        format!("{prefix}{value}{suffix}")
    }
}

// ── Layouts ─────────────────────────────────────────────────────────

fn city_comma_region_postal(f: &CityFields<'_>) -> String {
    join("  ", &[join(", ", &[f.city, f.region]).as_str(), f.postal_code])
}

fn postal_city_dash_region(f: &CityFields<'_>) -> String {
    join(" ", &[f.postal_code, join("-", &[f.city, f.region]).as_str()])
}

fn postal_city_comma_region(f: &CityFields<'_>) -> String {
    join(" ", &[f.postal_code, join(", ", &[f.city, f.region]).as_str()])
}

fn postal_city_bracketed_region(f: &CityFields<'_>) -> String {
    join(" ", &[f.postal_code, f.city, wrap("(", f.region, ")").as_str()])
}

fn postal_city_dash_bracketed_region(f: &CityFields<'_>) -> String {
    let city = join("-", &[f.city, wrap("(", f.region, ")").as_str()]);
    join(" ", &[f.postal_code, city.as_str()])
}

fn city_region_postal(f: &CityFields<'_>) -> String {
    join("  ", &[join(" ", &[f.city, f.region]).as_str(), f.postal_code])
}

fn postal_city(f: &CityFields<'_>) -> String {
    join(" ", &[f.postal_code, f.city])
}

fn postal_wide_city(f: &CityFields<'_>) -> String {
    join("  ", &[f.postal_code, f.city])
}

fn city_comma_region_newline_postal(f: &CityFields<'_>) -> String {
    lines(&[join(", ", &[f.city, f.region]).as_str(), f.postal_code])
}

fn city_wide_postal(f: &CityFields<'_>) -> String {
    join("  ", &[f.city, f.postal_code])
}

fn city_only(f: &CityFields<'_>) -> String {
    f.city.to_string()
}

fn postal_newline_city(f: &CityFields<'_>) -> String {
    lines(&[f.postal_code, f.city])
}

fn city_newline_postal(f: &CityFields<'_>) -> String {
    lines(&[f.city, f.postal_code])
}

fn latvia(f: &CityFields<'_>) -> String {
    join(", ", &[f.city, wrap("LV-", f.postal_code, "").as_str()])
}

fn lithuania(f: &CityFields<'_>) -> String {
    join(" ", &[wrap("LT-", f.postal_code, "").as_str(), f.city])
}

fn slovenia(f: &CityFields<'_>) -> String {
    join(" ", &[wrap("SI-", f.postal_code, "").as_str(), f.city])
}

fn postal_region_newline_city(f: &CityFields<'_>) -> String {
    lines(&[join(" ", &[f.postal_code, f.region]).as_str(), f.city])
}

fn city_region_postal_single_spaced(f: &CityFields<'_>) -> String {
    join(" ", &[f.city, f.region, f.postal_code])
}
