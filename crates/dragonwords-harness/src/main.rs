#![forbid(unsafe_code)]

fn main() {
    let json = dragonwords_harness::logging::json_requested();
    if let Err(error) = dragonwords_harness::run_from_env() {
        if json {
            eprintln!(
                "{}",
                serde_json::json!({
                    "status": "error",
                    "error": error.to_string(),
                    "exit_code": error.exit_code(),
                })
            );
        } else {
            eprintln!("{error}");
        }
        std::process::exit(error.exit_code());
    }
}
