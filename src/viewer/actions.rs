//! Desktop actions for the selected monitor
//!
//! Opening URLs and copying text shell out to the platform tools instead
//! of linking GUI libraries into a terminal app.

use std::io::Write;
use std::process::{Command, Stdio};

use anyhow::{Context, Result, bail};

use crate::Monitor;
use crate::status::describe;

/// Dashboard root, also the prefix of every per-monitor page
pub const DASHBOARD_URL: &str = "https://uptimerobot.com/dashboard";

/// Clipboard tools probed in order
const CLIPBOARD_TOOLS: &[(&str, &[&str])] = &[
    ("pbcopy", &[]),
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
];

/// URL of the monitor's page on the UptimeRobot dashboard
pub fn dashboard_url(monitor: &Monitor) -> String {
    format!("{DASHBOARD_URL}#{}", monitor.id)
}

/// Multi-line details block used by the copy action
pub fn format_monitor_details(monitor: &Monitor) -> String {
    let status = describe(monitor.status);

    format!(
        "Monitor: {}\nURL: {}\nStatus: {}\nID: {}\nUptime Ratio: {}%",
        monitor.name, monitor.url, status.label, monitor.id, monitor.uptime_ratio
    )
}

/// Open a URL with the platform opener
pub fn open_in_browser(url: &str) -> Result<()> {
    #[cfg(target_os = "macos")]
    let opener = "open";
    #[cfg(not(target_os = "macos"))]
    let opener = "xdg-open";

    Command::new(opener)
        .arg(url)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .with_context(|| format!("Failed to launch {opener}"))?;

    Ok(())
}

/// Copy text to the system clipboard via the first available tool
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    for (tool, args) in CLIPBOARD_TOOLS {
        let spawned = Command::new(tool)
            .args(*args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();

        let Ok(mut child) = spawned else {
            // Tool not installed, try the next one
            continue;
        };

        // stdin must drop before wait so the tool sees EOF
        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(text.as_bytes())
                .with_context(|| format!("Failed to write to {tool}"))?;
        }

        let status = child
            .wait()
            .with_context(|| format!("{tool} did not exit"))?;
        if status.success() {
            return Ok(());
        }
    }

    bail!("no clipboard tool found (tried pbcopy, wl-copy, xclip, xsel)")
}
