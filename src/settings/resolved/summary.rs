use std::fmt::Write;

use super::Settings;
use crate::types::MailDelivery;

pub(super) fn render(settings: &Settings) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Effective settings:");

    let jobs = &settings.jobs;
    if jobs.uses_external_runner() {
        let _ = writeln!(out, "  Job run rate: 0 (external runner)");
    } else {
        let _ = writeln!(out, "  Job run rate: {} per request", jobs.run_rate);
    }

    let mail = &settings.mail;
    let _ = writeln!(
        out,
        "  Emergency contact: {}",
        or_disabled(mail.emergency_contact.as_ref().map(ToString::to_string))
    );
    let _ = writeln!(
        out,
        "  Password sender: {}",
        or_disabled(mail.password_sender.as_ref().map(ToString::to_string))
    );
    match mail.delivery() {
        MailDelivery::Smtp(relay) => {
            let auth = if relay.auth { "with auth" } else { "no auth" };
            let _ = writeln!(
                out,
                "  Mail delivery: SMTP {}:{} ({auth})",
                relay.host, relay.port
            );
        }
        MailDelivery::Local => {
            let _ = writeln!(out, "  Mail delivery: local");
        }
    }

    let cache = &settings.cache;
    let _ = writeln!(out, "  Main cache: {}", cache.main);
    let _ = writeln!(out, "  Parser cache: {}", cache.parser);
    let _ = writeln!(out, "  Message cache: {}", cache.message);
    if !cache.memcached_servers.is_empty() {
        let servers: Vec<String> = cache
            .memcached_servers
            .iter()
            .map(ToString::to_string)
            .collect();
        let _ = writeln!(out, "  Memcached servers: {}", servers.join(", "));
    }

    match &settings.locale.timezone {
        Some(zone) => {
            let _ = writeln!(
                out,
                "  Timezone: {} (UTC{:+} minutes)",
                zone.name(),
                zone.offset_minutes()
            );
        }
        None => {
            let _ = writeln!(out, "  Timezone: (disabled)");
        }
    }
    let _ = writeln!(
        out,
        "  Default language: {}",
        or_disabled(settings.locale.language.as_ref().map(ToString::to_string))
    );

    let extensions = settings.uploads.extensions();
    if extensions.is_empty() {
        let _ = writeln!(out, "  Upload extensions: (none)");
    } else {
        let _ = writeln!(out, "  Upload extensions: {}", extensions.join(", "));
    }

    let rights = &settings.rights;
    for (label, value) in [
        ("Rights page", &rights.page),
        ("Rights URL", &rights.url),
        ("Rights text", &rights.text),
        ("Rights icon", &rights.icon),
    ] {
        if let Some(value) = value {
            let _ = writeln!(out, "  {label}: {value}");
        }
    }

    out
}

fn or_disabled(value: Option<String>) -> String {
    value.unwrap_or_else(|| "(disabled)".to_string())
}
