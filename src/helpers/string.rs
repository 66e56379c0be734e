//! Identifier casing for generated source code.
//! Splits snake_case, kebab-case and camelCase names into words and joins them
//! back in Go naming style, upper-casing common initialisms.

/// Words that Go naming conventions keep fully upper-cased (`UserID`, `APIURL`).
const INITIALISMS: &[&str] = &[
    "ACL", "API", "ASCII", "CPU", "CSS", "DNS", "EOF", "GUID", "HTML", "HTTP", "HTTPS", "ID",
    "IP", "JSON", "LHS", "QPS", "RAM", "RHS", "RPC", "SLA", "SMTP", "SQL", "SSH", "TCP", "TLS",
    "TTL", "UDP", "UI", "UID", "UUID", "URI", "URL", "UTF8", "VM", "XML", "XMPP", "XSRF", "XSS",
];

/// Splits an identifier into words at separators and case changes.
/// "user_id" -> ["user", "id"], "HTTPServer" -> ["HTTP", "Server"].
pub(crate) fn split_words(name: &str) -> Vec<String> {
    let chars: Vec<char> = name.chars().collect();
    let mut words = Vec::new();
    let mut word = String::new();
    for (index, &char) in chars.iter().enumerate() {
        if !char.is_alphanumeric() {
            if !word.is_empty() {
                words.push(std::mem::take(&mut word));
            }
            continue;
        }
        if char.is_uppercase() && !word.is_empty() {
            let previous = chars[index - 1];
            let next_is_lower = chars.get(index + 1).map(|c| c.is_lowercase()).unwrap_or(false);
            // "userId" breaks before "I"; "HTTPServer" breaks before "S"
            if previous.is_lowercase() || previous.is_ascii_digit() || (previous.is_uppercase() && next_is_lower) {
                words.push(std::mem::take(&mut word));
            }
        }
        word.push(char);
    }
    if !word.is_empty() {
        words.push(word);
    }
    words
}

/// Joins words in Go style: exported names start upper-case ("UserID"),
/// unexported names start lower-case ("userID").
pub(crate) fn to_go_name(name: &str, exported: bool) -> String {
    split_words(name)
        .iter()
        .enumerate()
        .map(|(index, word)| {
            let upper = word.to_uppercase();
            if index == 0 && !exported {
                word.to_lowercase()
            } else if INITIALISMS.contains(&upper.as_str()) {
                upper
            } else {
                capitalize(word)
            }
        })
        .collect()
}

/// Upper-cases the first character and lower-cases the rest.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
