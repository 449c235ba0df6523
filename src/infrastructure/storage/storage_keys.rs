use crate::constants::PARTICIPANTS_KEY;

pub fn participants_key() -> &'static str {
    PARTICIPANTS_KEY
}

/// File name a key is stored under by the file-backed store.
pub fn file_name_for_key(key: &str) -> String {
    let stem: String = key
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect();
    format!("{}.json", stem.trim_start_matches('_'))
}
