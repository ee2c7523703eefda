//! Centralized filename parsing for catalog images.
//!
//! Every jewelry photo is named with lowercase words joined by underscores,
//! and the filename doubles as the catalog key. This module turns those
//! filenames into the pieces the rest of the pipeline needs:
//!
//! - `circle_gold_earrings.jpg` → key `circle_gold_earrings`
//! - `circle_gold_earrings.jpg` → title "Circle Gold Earrings"
//! - `Beaded Collection` → URL slug `beaded-collection`
//!
//! ## Display Titles
//!
//! Titles are built by splitting the stem on `_` and upper-casing the first
//! character of each word. The rest of each word is left as-is, so
//! `blue_PINK_soap.jpeg` becomes "Blue PINK Soap".

/// Image extensions stripped when deriving a catalog key.
const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp"];

/// Result of parsing a catalog image filename like `blue_pink_floral_soap.jpeg`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedFilename {
    /// Filename with the image extension stripped (`blue_pink_floral_soap`).
    pub stem: String,
    /// Display title: underscores → spaces, each word capitalized.
    pub title: String,
}

/// Parse a catalog image filename.
///
/// - `"blue_pink_floral_soap.jpeg"` → stem="blue_pink_floral_soap", title="Blue Pink Floral Soap"
/// - `"circle_gold_earrings.JPG"` → stem="circle_gold_earrings", title="Circle Gold Earrings"
/// - `"silver_earrings"` → stem="silver_earrings", title="Silver Earrings"
/// - `"notes.txt"` → stem="notes.txt" (not an image extension, kept)
pub fn parse_filename(filename: &str) -> ParsedFilename {
    let stem = strip_image_extension(filename).to_string();
    let title = humanize(&stem);
    ParsedFilename { stem, title }
}

/// Strip a trailing image extension (case-insensitive). Other extensions are kept.
pub fn strip_image_extension(filename: &str) -> &str {
    if let Some(dot) = filename.rfind('.') {
        let ext = &filename[dot + 1..];
        if IMAGE_EXTENSIONS
            .iter()
            .any(|known| ext.eq_ignore_ascii_case(known))
        {
            return &filename[..dot];
        }
    }
    filename
}

/// Turn an underscore-separated stem into a display title.
pub fn humanize(stem: &str) -> String {
    stem.split('_')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lowercase, URL-safe slug for a label such as a collection name.
///
/// - Non-alphanumeric characters become dashes
/// - Consecutive dashes collapse into one
/// - Leading and trailing dashes are stripped
pub fn slugify(label: &str) -> String {
    let mut slug = String::with_capacity(label.len());
    let mut prev_dash = true;
    for c in label.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            prev_dash = false;
        } else if !prev_dash {
            slug.push('-');
            prev_dash = true;
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn soap_filename_becomes_title() {
        let p = parse_filename("blue_pink_floral_soap.jpeg");
        assert_eq!(p.stem, "blue_pink_floral_soap");
        assert_eq!(p.title, "Blue Pink Floral Soap");
    }

    #[test]
    fn earring_filename_becomes_title() {
        let p = parse_filename("circle_gold_earrings.jpg");
        assert_eq!(p.stem, "circle_gold_earrings");
        assert_eq!(p.title, "Circle Gold Earrings");
    }

    #[test]
    fn extension_match_is_case_insensitive() {
        assert_eq!(strip_image_extension("silver_earrings.JPG"), "silver_earrings");
        assert_eq!(strip_image_extension("silver_earrings.Jpeg"), "silver_earrings");
    }

    #[test]
    fn unknown_extension_is_kept() {
        let p = parse_filename("notes.txt");
        assert_eq!(p.stem, "notes.txt");
    }

    #[test]
    fn no_extension() {
        let p = parse_filename("silver_earrings");
        assert_eq!(p.stem, "silver_earrings");
        assert_eq!(p.title, "Silver Earrings");
    }

    #[test]
    fn numbered_suffix_kept_in_title() {
        let p = parse_filename("black_blue_earrings_1.jpg");
        assert_eq!(p.title, "Black Blue Earrings 1");
    }

    #[test]
    fn only_first_letter_is_changed() {
        assert_eq!(humanize("blue_PINK_soap"), "Blue PINK Soap");
    }

    #[test]
    fn humanize_is_idempotent_on_titles() {
        let once = humanize("blue_pink_floral_soap");
        assert_eq!(humanize(&once), once);
    }

    #[test]
    fn slugify_collection_labels() {
        assert_eq!(slugify("Beaded Collection"), "beaded-collection");
        assert_eq!(slugify("Dice"), "dice");
        assert_eq!(slugify("lip-balm"), "lip-balm");
    }

    #[test]
    fn slugify_collapses_and_trims() {
        assert_eq!(slugify("  Ocean -- Whispers! "), "ocean-whispers");
        assert_eq!(slugify("@#$"), "");
    }
}
