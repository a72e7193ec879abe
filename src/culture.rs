//! Culture identifier syntax
//!
//! Satellite assemblies live in subdirectories named after a culture tag
//! (`de`, `de-DE`, `zh-Hans`, `sr-Latn-RS`, `es-419`). Discovery uses this
//! syntax check to tell culture directories apart from other build output
//! directories without consulting any locale database.

/// Check whether a directory name is a plausible culture identifier
///
/// Accepts `language[-Script][-REGION]` where the language subtag is 2-3
/// lowercase ASCII letters, the script subtag is 4 letters in title case and
/// the region subtag is 2 uppercase letters or 3 digits. This deliberately
/// over-accepts compared to a full BCP 47 parser; discovery additionally
/// requires a matching satellite file inside the directory.
pub fn is_culture_tag(name: &str) -> bool {
    let mut parts = name.split('-');

    let Some(language) = parts.next() else {
        return false;
    };
    if !is_language_subtag(language) {
        return false;
    }

    let mut seen_script = false;
    let mut seen_region = false;
    for part in parts {
        if is_script_subtag(part) && !seen_script && !seen_region {
            seen_script = true;
        } else if is_region_subtag(part) && !seen_region {
            seen_region = true;
        } else {
            return false;
        }
    }

    true
}

fn is_language_subtag(part: &str) -> bool {
    (2..=3).contains(&part.len()) && part.chars().all(|c| c.is_ascii_lowercase())
}

fn is_script_subtag(part: &str) -> bool {
    let mut chars = part.chars();
    part.len() == 4
        && chars.next().is_some_and(|c| c.is_ascii_uppercase())
        && chars.all(|c| c.is_ascii_lowercase())
}

fn is_region_subtag(part: &str) -> bool {
    (part.len() == 2 && part.chars().all(|c| c.is_ascii_uppercase()))
        || (part.len() == 3 && part.chars().all(|c| c.is_ascii_digit()))
}
