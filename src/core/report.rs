//! Console report: banner, model listing, probe progress, and the final tally.
//!
//! Every function returns the text; callers decide where it goes (stdout in the CLI).

use std::fmt::Write;
use std::time::Duration;

use chrono::{DateTime, Local};

use crate::core::app;
use crate::core::config::Config;
use crate::core::gateway::GatewayError;
use crate::core::models::ProviderGroups;
use crate::core::probe::{ProbeResult, ProbeSummary};
use crate::core::util;

const RULE_WIDTH: usize = 60;
const REPLY_PREVIEW_CHARS: usize = 100;

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

/// Blank line, a rule, and optionally a title followed by another rule.
pub fn separator(title: &str) -> String {
    let mut out = format!("\n{}", rule());
    if !title.is_empty() {
        let _ = write!(out, "\n  {}\n{}", title, rule());
    }
    out
}

pub fn banner(config: &Config, started: DateTime<Local>) -> String {
    let rockets = "🚀".repeat(20);
    let mut out = String::new();
    let _ = writeln!(out, "\n{}", rockets);
    let _ = writeln!(out, "     {} {}", app::NAME, app::VERSION);
    let _ = writeln!(out, "{}", rockets);
    let _ = writeln!(out, "\n📡 API base: {}", config.base_url);
    let key = config
        .api_key
        .as_deref()
        .map_or_else(|| "(not set)".to_string(), util::mask_secret);
    let _ = writeln!(out, "🔑 API key:  {}", key);
    let _ = write!(out, "⏰ Started:  {}", started.format("%Y-%m-%d %H:%M:%S"));
    out
}

/// Grouped listing after a successful `/models` call.
pub fn model_list(groups: &ProviderGroups, total: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "✅ Fetched {} models from {} providers:\n",
        total,
        groups.len()
    );
    for (provider, ids) in groups.iter() {
        let _ = writeln!(out, "📦 {} ({}):", provider, ids.len());
        for id in ids {
            let _ = writeln!(out, "   - {}", id);
        }
        let _ = writeln!(out);
    }
    out
}

pub fn model_list_failed(err: &GatewayError) -> String {
    match err {
        GatewayError::Http { status, body } => {
            format!("❌ Failed to fetch models: HTTP {}\n   Response: {}", status, body)
        }
        other => format!("❌ Request error: {}", other),
    }
}

pub fn no_models() -> String {
    "\n⚠️ Could not fetch the model list; check that the gateway is running".to_string()
}

pub fn probe_plan(model_ids: &[String]) -> String {
    let mut out = format!("Probing {} models:\n", model_ids.len());
    for id in model_ids {
        let _ = write!(out, "\n  • {}", id);
    }
    out
}

pub fn probe_started(model_id: &str) -> String {
    format!("\n🔄 Probing model: {}", model_id)
}

pub fn probe_finished(result: &ProbeResult, timeout: Duration) -> String {
    match &result.outcome {
        Ok(content) => format!(
            "   ✅ OK! Reply: {}...",
            util::truncate_chars(content, REPLY_PREVIEW_CHARS)
        ),
        Err(GatewayError::Http { status, body }) => {
            format!("   ❌ Failed: HTTP {}\n      Error: {}", status, body)
        }
        Err(GatewayError::Timeout) => format!("   ⏰ Timed out ({}s)", timeout.as_secs()),
        Err(e) => format!("   ❌ Error: {}", e),
    }
}

pub fn summary(results: &[ProbeResult]) -> String {
    let totals = ProbeSummary::from_results(results);
    let mut out = String::new();
    let _ = writeln!(out, "\n📊 Models probed: {}", totals.total);
    let _ = writeln!(out, "✅ Succeeded: {}", totals.succeeded);
    let _ = writeln!(out, "❌ Failed: {}", totals.failed);
    let _ = write!(out, "\nDetails:");
    for r in results {
        let status = if r.success() { "✅" } else { "❌" };
        let _ = write!(out, "\n  {} {}", status, r.model_id);
    }
    out
}

pub fn finished() -> String {
    format!("\n{}\nDone!\n{}", rule(), rule())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Model;
    use chrono::TimeZone;

    fn result(model_id: &str, outcome: Result<String, GatewayError>) -> ProbeResult {
        ProbeResult {
            model_id: model_id.to_string(),
            outcome,
        }
    }

    #[test]
    fn separator_with_and_without_title() {
        let bare = separator("");
        assert_eq!(bare, format!("\n{}", "=".repeat(60)));
        let titled = separator("Model list");
        assert_eq!(titled.lines().nth(2), Some("  Model list"));
        assert_eq!(titled.lines().count(), 4);
    }

    #[test]
    fn banner_masks_key_and_formats_time() {
        let config = Config::new("http://127.0.0.1:8317/v1", "cliproxy-ag-b9cd9ab23f51968c1afdf8fd2b7a6e26");
        let started = Local.with_ymd_and_hms(2026, 3, 1, 9, 5, 7).unwrap();
        let text = banner(&config, started);
        assert!(text.contains("📡 API base: http://127.0.0.1:8317/v1"));
        assert!(text.contains("cliproxy-ag-b9cd9ab2..."));
        assert!(!text.contains("a6e26"));
        assert!(text.contains("2026-03-01 09:05:07"));
    }

    #[test]
    fn banner_without_key() {
        let config = Config::new("http://127.0.0.1:8317/v1", "");
        let started = Local.with_ymd_and_hms(2026, 3, 1, 9, 5, 7).unwrap();
        assert!(banner(&config, started).contains("🔑 API key:  (not set)"));
    }

    #[test]
    fn model_list_groups_with_counts() {
        let models: Vec<Model> = ["gpt-4o", "claude-b", "claude-a"].into_iter().map(Model::new).collect();
        let text = model_list(&ProviderGroups::from_models(&models), models.len());
        assert!(text.starts_with("✅ Fetched 3 models from 2 providers:"));
        let claude = text.find("📦 Claude (Anthropic) (2):").unwrap();
        let gpt = text.find("📦 GPT (OpenAI/Codex) (1):").unwrap();
        assert!(claude < gpt);
        assert!(text.find("   - claude-a").unwrap() < text.find("   - claude-b").unwrap());
    }

    #[test]
    fn model_list_failed_shows_status_and_body() {
        let text = model_list_failed(&GatewayError::Http {
            status: 502,
            body: "bad gateway".to_string(),
        });
        assert!(text.contains("HTTP 502"));
        assert!(text.contains("Response: bad gateway"));
        let text = model_list_failed(&GatewayError::Transport("dns error".to_string()));
        assert_eq!(text, "❌ Request error: dns error");
    }

    #[test]
    fn probe_finished_truncates_reply_preview() {
        let long = "b".repeat(250);
        let text = probe_finished(&result("m", Ok(long)), Duration::from_secs(60));
        assert_eq!(text, format!("   ✅ OK! Reply: {}...", "b".repeat(100)));
    }

    #[test]
    fn probe_finished_timeout_mentions_seconds() {
        let text = probe_finished(&result("m", Err(GatewayError::Timeout)), Duration::from_secs(60));
        assert_eq!(text, "   ⏰ Timed out (60s)");
    }

    #[test]
    fn summary_tally_and_details() {
        let results = vec![
            result("claude-3-5-sonnet-20241022", Ok("Hi".to_string())),
            result("gpt-4o", Err(GatewayError::Timeout)),
        ];
        let text = summary(&results);
        assert!(text.contains("📊 Models probed: 2"));
        assert!(text.contains("✅ Succeeded: 1"));
        assert!(text.contains("❌ Failed: 1"));
        assert!(text.contains("  ✅ claude-3-5-sonnet-20241022"));
        assert!(text.contains("  ❌ gpt-4o"));
    }

    #[test]
    fn probe_plan_lists_ids() {
        let text = probe_plan(&["gpt-4o".to_string(), "o1".to_string()]);
        assert!(text.starts_with("Probing 2 models:"));
        assert!(text.contains("  • gpt-4o"));
        assert!(text.contains("  • o1"));
    }
}
