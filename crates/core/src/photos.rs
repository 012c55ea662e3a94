//! Photo upload filename rules.
//!
//! Uploaded photos land in one flat directory keyed by filename, so the
//! name a browser sends can never be trusted as a path. [`sanitize_filename`]
//! reduces it to a plain ASCII base name; [`stored_photo_name`] combines that
//! with the extension allow-list to decide what (if anything) gets stored.

/// Extensions accepted for registration photos, compared case-insensitively.
pub const ALLOWED_PHOTO_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif"];

/// Fallback stem used when sanitization leaves nothing usable.
const FALLBACK_STEM: &str = "photo";

/// Longest filename most filesystems accept, in bytes.
pub const MAX_FILENAME_BYTES: usize = 255;

/// Return the lowercased extension of `filename` if it is on the allow-list.
///
/// The extension is whatever follows the last `.`; a name without a dot has
/// no extension and is rejected.
pub fn allowed_extension(filename: &str) -> Option<String> {
    let (_, ext) = filename.rsplit_once('.')?;
    let ext = ext.to_ascii_lowercase();
    ALLOWED_PHOTO_EXTENSIONS
        .contains(&ext.as_str())
        .then_some(ext)
}

/// Reduce an untrusted filename to a safe base name.
///
/// - non-ASCII characters are dropped outright; no Unicode normalization
///   is applied, so `flügzeug` becomes `flgzeug`, not `flugzeug`
/// - path separators (`/`, `\`) become whitespace
/// - runs of whitespace collapse to a single `_`
/// - anything outside `[A-Za-z0-9_.-]` is dropped
/// - leading and trailing `.` / `_` are stripped
///
/// The result may be empty.
pub fn sanitize_filename(filename: &str) -> String {
    let spaced: String = filename
        .chars()
        .filter(char::is_ascii)
        .map(|c| if c == '/' || c == '\\' { ' ' } else { c })
        .collect();

    let joined = spaced.split_whitespace().collect::<Vec<_>>().join("_");

    joined
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
        .collect::<String>()
        .trim_matches(|c| c == '.' || c == '_')
        .to_string()
}

/// Whether `name` is already in the form [`sanitize_filename`] produces.
///
/// Only such names can refer to a stored upload.
pub fn is_sanitized(name: &str) -> bool {
    !name.is_empty() && sanitize_filename(name) == name
}

/// Decide the filename a photo upload is stored under.
///
/// Returns `None` when the extension is not allowed (the upload is dropped).
/// If sanitizing strips the stem or the extension, `photo.<ext>` is used.
pub fn stored_photo_name(original: &str) -> Option<String> {
    let ext = allowed_extension(original)?;
    let sanitized = sanitize_filename(original);

    let suffix = format!(".{ext}");
    let keeps_extension = sanitized.len() > suffix.len()
        && sanitized.to_ascii_lowercase().ends_with(&suffix);

    if keeps_extension {
        let stem = &sanitized[..sanitized.len() - suffix.len()];
        Some(fit_name(stem, &sanitized[stem.len()..]))
    } else {
        Some(format!("{FALLBACK_STEM}.{ext}"))
    }
}

/// Build the `n`-th alternative for a name that is already taken:
/// `a320.png` becomes `a320_1.png`, `a320_2.png`, ...
///
/// The stem is shortened when the suffix would push the name past
/// [`MAX_FILENAME_BYTES`].
pub fn numbered_variant(name: &str, n: u32) -> String {
    match name.rsplit_once('.') {
        Some((stem, ext)) => fit_name(stem, &format!("_{n}.{ext}")),
        None => fit_name(name, &format!("_{n}")),
    }
}

/// Join `stem` and `tail`, cutting `stem` so the result fits in
/// [`MAX_FILENAME_BYTES`]. Trailing `.`/`_` left by the cut are dropped.
fn fit_name(stem: &str, tail: &str) -> String {
    let budget = MAX_FILENAME_BYTES.saturating_sub(tail.len());
    let mut end = stem.len().min(budget);
    while !stem.is_char_boundary(end) {
        end -= 1;
    }
    let stem = stem[..end].trim_end_matches(|c| c == '.' || c == '_');
    let stem = if stem.is_empty() { FALLBACK_STEM } else { stem };
    format!("{stem}{tail}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allowed_extension_is_case_insensitive() {
        assert_eq!(allowed_extension("D-AIMA.PNG"), Some("png".into()));
        assert_eq!(allowed_extension("spotting.Jpeg"), Some("jpeg".into()));
        assert_eq!(allowed_extension("anim.gif"), Some("gif".into()));
    }

    #[test]
    fn allowed_extension_rejects_others() {
        assert_eq!(allowed_extension("setup.exe"), None);
        assert_eq!(allowed_extension("noextension"), None);
        assert_eq!(allowed_extension("archive.png.zip"), None);
        assert_eq!(allowed_extension(""), None);
    }

    #[test]
    fn sanitize_keeps_simple_names() {
        assert_eq!(sanitize_filename("a380.png"), "a380.png");
        assert_eq!(sanitize_filename("D-AIMA_2024.jpg"), "D-AIMA_2024.jpg");
    }

    #[test]
    fn sanitize_joins_whitespace() {
        assert_eq!(sanitize_filename("My  Spotting Photo.png"), "My_Spotting_Photo.png");
    }

    #[test]
    fn sanitize_strips_path_components() {
        assert_eq!(sanitize_filename("../../etc/passwd"), "etc_passwd");
        assert_eq!(sanitize_filename("C:\\Users\\me\\pic.png"), "C_Users_me_pic.png");
        assert_eq!(sanitize_filename("/abs/path.gif"), "abs_path.gif");
    }

    #[test]
    fn sanitize_drops_unsafe_and_non_ascii() {
        assert_eq!(sanitize_filename("flügzeug$!.png"), "flgzeug.png");
        assert_eq!(sanitize_filename("..hidden.png"), "hidden.png");
        assert_eq!(sanitize_filename("___"), "");
    }

    #[test]
    fn is_sanitized_matches_sanitizer_output() {
        assert!(is_sanitized("a380.png"));
        assert!(!is_sanitized("../a380.png"));
        assert!(!is_sanitized("with space.png"));
        assert!(!is_sanitized(""));
    }

    #[test]
    fn stored_photo_name_uses_sanitized_name() {
        assert_eq!(
            stored_photo_name("../My Photo.PNG"),
            Some("My_Photo.PNG".into())
        );
    }

    #[test]
    fn stored_photo_name_falls_back_when_stem_is_lost() {
        assert_eq!(stored_photo_name(".png"), Some("photo.png".into()));
        assert_eq!(stored_photo_name("äöü.jpg"), Some("photo.jpg".into()));
    }

    #[test]
    fn stored_photo_name_drops_disallowed() {
        assert_eq!(stored_photo_name("virus.exe"), None);
        assert_eq!(stored_photo_name("README"), None);
    }

    #[test]
    fn numbered_variant_inserts_before_extension() {
        assert_eq!(numbered_variant("a320.png", 1), "a320_1.png");
        assert_eq!(numbered_variant("my.photo.jpg", 3), "my.photo_3.jpg");
    }

    #[test]
    fn stored_photo_name_caps_length() {
        let long = format!("{}.jpeg", "x".repeat(400));
        let stored = stored_photo_name(&long).unwrap();
        assert_eq!(stored.len(), MAX_FILENAME_BYTES);
        assert!(stored.ends_with("x.jpeg"));
    }

    #[test]
    fn numbered_variant_stays_within_filename_limit() {
        let name = format!("{}.png", "a".repeat(MAX_FILENAME_BYTES - 4));
        assert_eq!(name.len(), MAX_FILENAME_BYTES);

        let variant = numbered_variant(&name, 12);
        assert_eq!(variant.len(), MAX_FILENAME_BYTES);
        assert!(variant.ends_with("a_12.png"));
        assert!(is_sanitized(&variant));
    }
}
