use std::process::Stdio;

use anyhow::Context;
use tokio::{io::AsyncWriteExt, process::Command};

const GOFMT_BIN: &str = "gofmt";

/// Pipes `source` through the external `gofmt` binary.
pub(crate) async fn format_with_gofmt(source: &str) -> anyhow::Result<String> {
  let mut child = Command::new(GOFMT_BIN)
    .stdin(Stdio::piped())
    .stdout(Stdio::piped())
    .stderr(Stdio::piped())
    .spawn()
    .with_context(|| format!("failed to start `{GOFMT_BIN}`; is the Go toolchain on PATH?"))?;

  let mut stdin = child.stdin.take().context("gofmt stdin was not captured")?;
  stdin.write_all(source.as_bytes()).await?;
  drop(stdin);

  let output = child.wait_with_output().await?;
  if !output.status.success() {
    let stderr = String::from_utf8_lossy(&output.stderr);
    anyhow::bail!("gofmt rejected the generated source: {}", stderr.trim());
  }

  Ok(String::from_utf8(output.stdout)?)
}
