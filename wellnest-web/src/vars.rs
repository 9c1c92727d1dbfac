use wellnest::{SUPABASE_ANON_KEY_KEY, SUPABASE_URL_KEY};

pub const ANALYTICS_SCRIPT: &str = "/_vercel/insights/script.js";
pub const PAGE_TITLE: &str = "Wellnest";
pub const PAGE_DESCRIPTION: &str =
    "Wellnest is your one-stop online marketplace for all things wellness.";

/// Values embedded when the wasm bundle was built.
pub fn build_time_var(key: &'static str) -> Option<String> {
    let value = match key {
        SUPABASE_URL_KEY => option_env!("SUPABASE_URL"),
        SUPABASE_ANON_KEY_KEY => option_env!("SUPABASE_ANON_KEY"),
        _ => None,
    };
    value.map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_key() {
        assert_eq!(build_time_var("SOMETHING_ELSE"), None);
    }
}
