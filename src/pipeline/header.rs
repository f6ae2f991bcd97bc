//! Metadata header composition
//!
//! The header template is a small `---`-delimited YAML fragment kept
//! under `resources/header.yaml`. It is merged by plain string
//! substitution: `$DATE` becomes a localized "today", and for Chinese
//! output the `mainfont` key is overridden so CJK glyphs render. The
//! composed header is prepended to the intermediate Markdown document.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;

use super::config::BuildConfig;

/// Placeholder the template carries for the build date.
pub const DATE_PLACEHOLDER: &str = "$DATE";

/// Font substituted into the header for Chinese documents.
pub const CJK_MAIN_FONT: &str = "Noto Sans Mono CJK SC Regular";

/// YAML front-matter boundary marker.
const YAML_BOUNDARY: &str = "---";

/// Whether composition found and applied a template.
#[derive(Debug, PartialEq, Eq)]
pub enum HeaderOutcome {
    Applied,
    /// No template under resources/; output will lack cover and
    /// title/author metadata.
    MissingTemplate,
}

/// Format a date for the given language tag.
///
/// Pure so tests can pin "today". Chinese uses the numeric CJK date
/// form; everything else falls back to the long Western form.
pub fn localized_date(lang: &str, date: NaiveDate) -> String {
    use chrono::Datelike;
    match lang {
        "zh" => format!("{}年{}月{}日", date.year(), date.month(), date.day()),
        _ => date.format("%B %-d, %Y").to_string(),
    }
}

/// Substitute the date (and, for Chinese, the main font) into the
/// header template text.
///
/// The font override has to land inside the YAML boundary markers, so
/// the template is split on `---` and reassembled with the `mainfont`
/// key as the last entry before the closing marker. Any `mainfont`
/// already present is replaced, keeping the template shape intact with
/// exactly one field changed.
pub fn compose_header(template: &str, lang: &str, today: NaiveDate) -> String {
    let header = template.replace(DATE_PLACEHOLDER, &localized_date(lang, today));

    if lang != "zh" {
        return header;
    }

    let mut parts = header.splitn(3, YAML_BOUNDARY);
    let _before = parts.next();
    let block = match parts.next() {
        Some(block) => block,
        // No boundary markers at all; leave the text as-is rather
        // than inventing structure.
        None => return header,
    };

    let mut kept: String = block
        .lines()
        .filter(|line| !line.trim_start().starts_with("mainfont:"))
        .collect::<Vec<_>>()
        .join("\n");
    if !kept.ends_with('\n') {
        kept.push('\n');
    }

    format!(
        "{boundary}{block}mainfont: {font}\n{boundary}",
        boundary = YAML_BOUNDARY,
        block = kept,
        font = CJK_MAIN_FONT
    )
}

/// Load the header template, compose it for the configured language,
/// and prepend it to the intermediate document (header, newline, then
/// the original content). A missing template is a non-fatal outcome
/// reported to the caller.
pub fn prepend_header(
    intermediate: &Path,
    config: &BuildConfig,
    today: NaiveDate,
) -> Result<HeaderOutcome> {
    let template_path = config.header_template_path();
    if !template_path.is_file() {
        return Ok(HeaderOutcome::MissingTemplate);
    }

    let template = fs::read_to_string(&template_path)
        .with_context(|| format!("Failed to read header template {}", template_path.display()))?;
    let header = compose_header(&template, &config.lang, today);

    let body = fs::read_to_string(intermediate).with_context(|| {
        format!(
            "Failed to read intermediate document {}",
            intermediate.display()
        )
    })?;
    fs::write(intermediate, format!("{}\n{}", header, body)).with_context(|| {
        format!(
            "Failed to write intermediate document {}",
            intermediate.display()
        )
    })?;

    Ok(HeaderOutcome::Applied)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 24).unwrap()
    }

    const TEMPLATE: &str = "---\ntitle: The Guide\nauthor: The Team\ndate: $DATE\nmainfont: Liberation Serif\n---";

    #[test]
    fn test_localized_date_english() {
        assert_eq!(localized_date("en", fixed_today()), "August 24, 2026");
    }

    #[test]
    fn test_localized_date_chinese() {
        assert_eq!(localized_date("zh", fixed_today()), "2026年8月24日");
    }

    #[test]
    fn test_localized_date_unknown_lang_falls_back_to_western() {
        assert_eq!(localized_date("de", fixed_today()), "August 24, 2026");
    }

    #[test]
    fn test_compose_non_cjk_changes_only_date() {
        let composed = compose_header(TEMPLATE, "en", fixed_today());
        assert_eq!(
            composed,
            TEMPLATE.replace("$DATE", "August 24, 2026"),
            "Non-CJK composition must only substitute the date"
        );
    }

    #[test]
    fn test_compose_zh_overrides_mainfont_inside_boundaries() {
        let composed = compose_header(TEMPLATE, "zh", fixed_today());
        assert!(composed.starts_with("---\n"));
        assert!(composed.ends_with("\n---"));
        assert!(composed.contains(&format!("mainfont: {}", CJK_MAIN_FONT)));
        assert!(!composed.contains("Liberation Serif"));
        // Exactly the opening and closing boundary markers remain.
        assert_eq!(composed.matches("---").count(), 2);
        assert!(composed.contains("date: 2026年8月24日"));
    }

    #[test]
    fn test_compose_zh_without_boundaries_is_left_alone() {
        let raw = "date: $DATE";
        assert_eq!(compose_header(raw, "zh", fixed_today()), "date: 2026年8月24日");
    }
}
