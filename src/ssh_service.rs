use std::io::{self, BufRead, Write};
use std::process::{Command, Stdio};

use crate::error::{Error, Result};
use crate::i18n::Texts;
use crate::models::{AuthKind, Host};

/// Runs an interactive session against a host. The caller has already
/// released the terminal; the call blocks until the session ends. `texts`
/// is the table currently in use for any banners printed around it.
pub trait SessionLauncher {
    fn launch(&mut self, host: &Host, texts: &Texts) -> Result<()>;
}

/// Launches the system `ssh` client with inherited stdio.
#[derive(Debug, Default)]
pub struct SshLauncher;

impl SessionLauncher for SshLauncher {
    fn launch(&mut self, host: &Host, texts: &Texts) -> Result<()> {
        let args = ssh_args(host);
        tracing::info!("Attempting to connect: ssh {}", args.join(" "));

        println!("{}", Texts::fill(texts.connecting, &host.name));

        let mut cmd = Command::new("ssh");
        cmd.args(&args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        // Blocks until the session ends.
        let status = cmd.status().map_err(|e| Error::Launch {
            host: host.name.clone(),
            reason: e.to_string(),
        })?;

        println!();
        println!("{}", Texts::fill(texts.connection_closed, &host.name));
        print!("{}", texts.press_any_key);
        let _ = io::stdout().flush();
        wait_for_enter();

        if !status.success() {
            tracing::error!("SSH command finished with a non-zero status: {}", status);
            return Err(Error::Launch {
                host: host.name.clone(),
                reason: status.to_string(),
            });
        }

        tracing::info!("SSH session ended normally for {}", host.name);
        Ok(())
    }
}

fn wait_for_enter() {
    let mut line = String::new();
    let _ = io::stdin().lock().read_line(&mut line);
}

/// Arguments for `ssh`: `[-i key] [-p port] user@ip`. Password hosts get
/// no key so the client prompts interactively.
pub fn ssh_args(host: &Host) -> Vec<String> {
    let mut args = Vec::new();

    if host.auth_type == AuthKind::Key {
        if let Some(key) = host.key_path.as_deref().filter(|k| !k.is_empty()) {
            args.push("-i".to_string());
            args.push(expand_home(key));
        }
    }

    if host.port != 22 {
        args.push("-p".to_string());
        args.push(host.port.to_string());
    }

    args.push(format!("{}@{}", host.username, host.ip));
    args
}

fn expand_home(path: &str) -> String {
    match (path.strip_prefix("~/"), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest).to_string_lossy().into_owned(),
        _ => path.to_string(),
    }
}
