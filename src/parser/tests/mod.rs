//! Test fixtures for speedtest output parsing
//!
//! Provides canonical tool output and helpers to replace individual lines.


/// Complete report as printed by the tool, including the leading blank line
pub fn sample_output() -> String {
    [
        "",
        "   Speedtest by Ookla",
        "",
        "     Server: TWL-KOM - Ludwigshafen (id = 10291)",
        "        ISP: Vodafone Germany Cable",
        "    Latency:    12.42 ms   (2.62 ms jitter)",
        "   Download:   103.41 Mbps (data used: 99.3 MB )",
        "     Upload:     9.41 Mbps (data used: 4.7 MB )",
        "Packet Loss:     0.0%",
        " Result URL: https://www.speedtest.net/result/c/8f37ffd1-121d-48cf-808f-dd0d11e0336f",
        "",
    ]
    .join("\n")
}

/// Sample report with the line at `index` replaced
pub fn sample_with_line(index: usize, replacement: &str) -> String {
    let sample = sample_output();
    let mut lines: Vec<&str> = sample.split('\n').collect();
    lines[index] = replacement;
    lines.join("\n")
}

/// Sample report cut after the first `count` lines
pub fn sample_truncated(count: usize) -> String {
    sample_output()
        .split('\n')
        .take(count)
        .collect::<Vec<_>>()
        .join("\n")
}
