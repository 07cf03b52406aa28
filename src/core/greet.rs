/// Free-form words win over the flag value; the flag's default only shows up
/// when no words were given.
pub fn resolve_name(flag_value: &str, words: &[String]) -> String {
    if words.is_empty() {
        flag_value.to_string()
    } else {
        words.join(" ")
    }
}

pub fn greeting(name: &str) -> String {
    format!("Hello, {}!", name)
}
