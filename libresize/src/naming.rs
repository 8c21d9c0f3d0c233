use std::path::Path;

/// Characters dropped from the end of a file name to remove its extension.
///
/// Only exact for three letter extensions: `photo.jpeg` keeps a trailing `.`.
const EXTENSION_LEN: usize = 4;

/// File name without its last four characters, with every space replaced by a hyphen.
pub fn base_name(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let chars: Vec<char> = name.chars().collect();
    let keep = chars.len().saturating_sub(EXTENSION_LEN);
    chars[..keep]
        .iter()
        .map(|&c| if c == ' ' { '-' } else { c })
        .collect()
}

pub fn output_file_name(base_name: &str, width: u32, height: u32, extension: &str) -> String {
    format!("{}_{}_x_{}.{}", base_name, width, height, extension)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_spaces_and_drops_extension() {
        assert_eq!(base_name(Path::new("images/My Photo.jpg")), "My-Photo");
        assert_eq!(base_name(Path::new("images/a b  c.png")), "a-b--c");
    }

    #[test]
    fn uses_only_the_last_path_segment() {
        assert_eq!(base_name(Path::new("images/trip 2020/day one.png")), "day-one");
    }

    #[test]
    fn four_letter_extension_keeps_the_dot() {
        assert_eq!(base_name(Path::new("images/sunset.jpeg")), "sunset.");
    }

    #[test]
    fn short_names_truncate_to_empty() {
        assert_eq!(base_name(Path::new("images/.png")), "");
        assert_eq!(base_name(Path::new("images/a.j")), "");
    }

    #[test]
    fn output_name_pattern() {
        assert_eq!(
            output_file_name("My-Photo", 1440, 810, "jpg"),
            "My-Photo_1440_x_810.jpg"
        );
    }
}
