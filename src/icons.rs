pub const SIZES: [u32; 4] = [20, 24, 40, 48];

const CDN_BASE: &str = "https://fonts.gstatic.com/s/i/short-term/release/materialsymbolsoutlined";

/// Download URL for one icon at one size. The name is substituted verbatim,
/// with no escaping: a malformed name yields a malformed URL whose failure
/// surfaces at fetch time.
pub fn icon_url(name: &str, size: u32) -> String {
    format!("{CDN_BASE}/{name}/default/{size}px.svg")
}

/// File name an icon size is stored under inside its icon directory.
pub fn size_file_name(size: u32) -> String {
    format!("{size}px.svg")
}
