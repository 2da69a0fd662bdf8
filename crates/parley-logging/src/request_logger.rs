use colored::Colorize;

use crate::{safe_truncate, MAX_LOGGED_BODY_CHARS};

/// Pretty-print a JSON body, falling back to the raw text, truncated for the console
pub fn format_body(body: &str) -> String {
    let rendered = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| serde_json::to_string_pretty(&value).ok())
        .unwrap_or_else(|| body.to_string());

    if rendered.chars().count() > MAX_LOGGED_BODY_CHARS {
        format!(
            "{}\n{}",
            safe_truncate(&rendered, MAX_LOGGED_BODY_CHARS),
            format!("... (truncated, total {} bytes)", rendered.len()).bright_black()
        )
    } else {
        rendered
    }
}

/// Log HTTP request details for debugging (console output)
pub fn log_request(url: &str, body: &str, verbose: bool) {
    if !verbose {
        return;
    }

    println!("\n{}", "═".repeat(80).bright_cyan());
    println!("{}", "🔍 HTTP REQUEST DEBUG".bright_cyan().bold());
    println!("{}", "═".repeat(80).bright_cyan());

    // Parse URL to show host and port
    if let Ok(parsed_url) = reqwest::Url::parse(url) {
        println!("{}: POST {}", "URL".bright_yellow(), url);
        println!("{}: {}", "Host".bright_yellow(), parsed_url.host_str().unwrap_or("unknown"));
        println!(
            "{}: {}",
            "Port".bright_yellow(),
            parsed_url
                .port_or_known_default()
                .map(|p| p.to_string())
                .unwrap_or_else(|| "unknown".to_string())
        );
    } else {
        println!("{}: POST {}", "URL".bright_yellow(), url);
    }

    println!("\n{}", "Headers:".bright_yellow());
    println!("  Content-Type: application/json");

    println!("\n{}", "Request Body:".bright_yellow());
    println!("{}", format_body(body));

    println!("{}", "═".repeat(80).bright_cyan());
    println!();
}

/// Log HTTP response details for debugging (console output)
pub fn log_response(status: reqwest::StatusCode, body: &str, verbose: bool) {
    if !verbose {
        return;
    }

    println!("\n{}", "═".repeat(80).bright_green());
    println!("{}", "📥 HTTP RESPONSE DEBUG".bright_green().bold());
    println!("{}", "═".repeat(80).bright_green());

    let status_line = format!(
        "{} {}",
        status.as_u16(),
        status.canonical_reason().unwrap_or("Unknown")
    );
    if status.is_success() {
        println!("{}: {}", "Status".bright_yellow(), status_line);
    } else {
        println!("{}: {}", "Status".bright_yellow(), status_line.red());
    }

    println!("\n{}", "Response Body:".bright_yellow());
    println!("{}", format_body(body));

    println!("{}", "═".repeat(80).bright_green());
    println!();
}
