//! Placeholder substitution for message previews.
//!
//! Three fixed tokens are recognized; replacement is whole-token,
//! case-sensitive, global, and single-pass, so replacement text is never
//! rescanned for further tokens.

use serde::{Deserialize, Serialize};

use crate::clock::Clock;

/// Representative name token.
pub const TOKEN_REP_NAME: &str = "{NOME_REP}";
/// Brand name token.
pub const TOKEN_BRAND_NAME: &str = "{MARCA}";
/// Base date token.
pub const TOKEN_BASE_DATE: &str = "{DATA_BASE}";

/// Rendered in place of a missing or empty context value.
pub const MISSING_VALUE: &str = "—";

/// Date format used when the caller supplies no base date: dd/MM/yyyy.
const BASE_DATE_FORMAT: &str = "%d/%m/%Y";

/// Named values substituted into a template. All fields are optional;
/// a missing or empty value renders as the em-dash placeholder, except
/// `base_date` which defaults to today in the panel timezone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateContext {
    #[serde(default)]
    pub rep_name: Option<String>,
    #[serde(default)]
    pub brand_name: Option<String>,
    #[serde(default)]
    pub base_date: Option<String>,
}

/// ## Summary
/// Replaces every occurrence of the three recognized tokens with the
/// corresponding context value. Unknown tokens are left untouched.
///
/// Pure given the clock; rendering the same template and context twice
/// yields identical output.
#[must_use]
pub fn render(template: &str, context: &TemplateContext, clock: &impl Clock) -> String {
    let base_date = context
        .base_date
        .clone()
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| clock.now().format(BASE_DATE_FORMAT).to_string());

    let substitutions = [
        (TOKEN_REP_NAME, value_or_dash(context.rep_name.as_deref())),
        (TOKEN_BRAND_NAME, value_or_dash(context.brand_name.as_deref())),
        (TOKEN_BASE_DATE, base_date.as_str()),
    ];

    let mut rendered = String::with_capacity(template.len());
    let mut rest = template;
    loop {
        // Earliest token occurrence in the unscanned remainder wins.
        let hit = substitutions
            .iter()
            .filter_map(|(token, value)| rest.find(token).map(|pos| (pos, *token, *value)))
            .min_by_key(|(pos, _, _)| *pos);
        match hit {
            Some((pos, token, value)) => {
                rendered.push_str(&rest[..pos]);
                rendered.push_str(value);
                rest = &rest[pos + token.len()..];
            }
            None => {
                rendered.push_str(rest);
                break;
            }
        }
    }
    rendered
}

fn value_or_dash(value: Option<&str>) -> &str {
    match value {
        Some(value) if !value.is_empty() => value,
        _ => MISSING_VALUE,
    }
}
