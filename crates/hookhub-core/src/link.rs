// ── Outbound links ──
//
// A hook's repository opens in whatever the platform considers the
// default browser. The opener runs detached with null stdio: it gets the
// URL and nothing else, and HookHub never reads back from it.

use std::process::{Command, Stdio};

use tracing::{debug, info};
use url::Url;

use crate::error::CoreError;

/// Validate a repository URL for hand-off to the opener.
///
/// Only absolute `http`/`https` URLs qualify; anything else (`file:`,
/// `javascript:`, bare paths) is refused rather than executed.
pub fn outbound_url(raw: &str) -> Result<Url, CoreError> {
    let url = Url::parse(raw).map_err(|err| CoreError::UnsupportedLink {
        url: raw.into(),
        reason: err.to_string(),
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(CoreError::UnsupportedLink {
            url: raw.into(),
            reason: format!("scheme '{other}' is not http or https"),
        }),
    }
}

/// Open `raw` in a new browser context via the platform opener.
pub fn open_in_browser(raw: &str) -> Result<(), CoreError> {
    let url = outbound_url(raw)?;
    let mut cmd = opener_command(url.as_str());
    cmd.stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());

    debug!(?cmd, "spawning opener");
    let mut child = cmd.spawn().map_err(|source| CoreError::OpenerFailed {
        url: url.to_string(),
        source,
    })?;

    // Reap the opener in the background so it never lingers as a zombie.
    std::thread::spawn(move || {
        let _ = child.wait();
    });

    info!(url = %url, "opened link");
    Ok(())
}

#[cfg(target_os = "macos")]
fn opener_command(target: &str) -> Command {
    macos_opener(target)
}

#[cfg(target_os = "windows")]
fn opener_command(target: &str) -> Command {
    windows_opener(target)
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn opener_command(target: &str) -> Command {
    xdg_opener(target)
}

#[cfg_attr(not(target_os = "macos"), allow(dead_code))]
fn macos_opener(target: &str) -> Command {
    let mut cmd = Command::new("open");
    cmd.arg(target);
    cmd
}

// rundll32 takes the URL as a single argv entry; nothing re-parses it
// through a shell, so `&` and `|` stay part of the URL.
#[cfg_attr(not(target_os = "windows"), allow(dead_code))]
fn windows_opener(target: &str) -> Command {
    let mut cmd = Command::new("rundll32");
    cmd.args(["url.dll,FileProtocolHandler", target]);
    cmd
}

#[cfg_attr(any(target_os = "macos", target_os = "windows"), allow(dead_code))]
fn xdg_opener(target: &str) -> Command {
    let mut cmd = Command::new("xdg-open");
    cmd.arg(target);
    cmd
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn accepts_http_and_https() {
        assert_eq!(
            outbound_url("https://github.com/example/hook").unwrap().host_str(),
            Some("github.com")
        );
        assert!(outbound_url("http://example.com").is_ok());
    }

    #[test]
    fn refuses_other_schemes() {
        for raw in ["file:///etc/passwd", "javascript:alert(1)", "ftp://example.com/x"] {
            let err = outbound_url(raw).unwrap_err();
            assert!(
                matches!(err, CoreError::UnsupportedLink { .. }),
                "{raw} should be refused"
            );
        }
    }

    #[test]
    fn refuses_relative_urls() {
        assert!(matches!(
            outbound_url("example/hook").unwrap_err(),
            CoreError::UnsupportedLink { .. }
        ));
    }

    #[test]
    fn opener_receives_only_the_url() {
        let cmd = opener_command("https://example.com/x");
        let args: Vec<_> = cmd.get_args().collect();
        assert_eq!(args.last().and_then(|a| a.to_str()), Some("https://example.com/x"));
    }

    #[test]
    fn windows_opener_bypasses_the_shell() {
        let url = "https://example.com/?a=1&calc.exe|dir";
        let cmd = windows_opener(url);
        assert_eq!(cmd.get_program(), "rundll32");
        let args: Vec<_> = cmd.get_args().filter_map(|a| a.to_str()).collect();
        assert_eq!(args, ["url.dll,FileProtocolHandler", url]);
    }

    #[test]
    fn unix_openers_pass_the_url_verbatim() {
        let url = "https://example.com/?a=1&b=2";
        for cmd in [macos_opener(url), xdg_opener(url)] {
            let args: Vec<_> = cmd.get_args().collect();
            assert_eq!(args, [url]);
        }
    }
}
