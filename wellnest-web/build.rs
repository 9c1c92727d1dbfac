// The Supabase credentials are embedded with option_env!, so a change to
// either variable has to trigger a rebuild.
const EMBEDDED_VARS: [&str; 2] = ["SUPABASE_URL", "SUPABASE_ANON_KEY"];

fn main() {
    for var in EMBEDDED_VARS {
        println!("cargo:rerun-if-env-changed={}", var);
    }
    if EMBEDDED_VARS.iter().any(|var| std::env::var(var).is_err()) {
        println!(
            "cargo:warning=SUPABASE_URL and SUPABASE_ANON_KEY must be set at \
             build time; the page refuses to start without them"
        );
    }
}
