use rootwalk_domain::HostReport;
use std::io::{self, Write};

/// `host`-style lines: aliases, IPv4, IPv6, then mail exchangers.
pub fn write_text<W: Write>(out: &mut W, report: &HostReport) -> io::Result<()> {
    for alias in &report.aliases {
        writeln!(out, "{} is an alias for {}", alias.alias, alias.name)?;
    }
    for entry in &report.ipv4 {
        writeln!(out, "{} has address {}", entry.name, entry.address)?;
    }
    for entry in &report.ipv6 {
        writeln!(out, "{} has IPv6 address {}", entry.name, entry.address)?;
    }
    for mx in &report.mail {
        writeln!(
            out,
            "{} mail is handled by {} {}",
            mx.name, mx.preference, mx.exchange
        )?;
    }
    Ok(())
}

/// One JSON object per line.
pub fn write_json<W: Write>(out: &mut W, report: &HostReport) -> anyhow::Result<()> {
    serde_json::to_writer(&mut *out, report)?;
    writeln!(out)?;
    Ok(())
}
