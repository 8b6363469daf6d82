use std::collections::BTreeMap;
use std::fmt;

/// Parameters for handing outbound mail to an SMTP relay.
#[derive(Clone, PartialEq, Eq)]
pub struct SmtpRelay {
    pub host: String,
    /// Host name announced in `Message-ID` headers.
    pub id_host: String,
    pub port: u16,
    pub username: Option<String>,
    pub password: Option<String>,
    pub auth: bool,
}

impl SmtpRelay {
    /// Key/value form the host reads its relay record in.
    ///
    /// Keys follow the host's casing (`IDHost`), and absent credentials are
    /// omitted rather than written as empty strings.
    pub fn to_host_map(&self) -> BTreeMap<String, String> {
        let mut map = BTreeMap::new();
        map.insert("host".to_string(), self.host.clone());
        map.insert("IDHost".to_string(), self.id_host.clone());
        map.insert("port".to_string(), self.port.to_string());
        if let Some(username) = &self.username {
            map.insert("username".to_string(), username.clone());
        }
        if let Some(password) = &self.password {
            map.insert("password".to_string(), password.clone());
        }
        map.insert("auth".to_string(), self.auth.to_string());
        map
    }
}

impl fmt::Debug for SmtpRelay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmtpRelay")
            .field("host", &self.host)
            .field("id_host", &self.id_host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "********"))
            .field("auth", &self.auth)
            .finish()
    }
}

/// How the host delivers outbound mail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MailDelivery<'a> {
    /// Relay through the configured SMTP server.
    Smtp(&'a SmtpRelay),
    /// Fall back to the local mail transfer agent.
    Local,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn relay() -> SmtpRelay {
        SmtpRelay {
            host: "mail.example.com".into(),
            id_host: "example.com".into(),
            port: 587,
            username: Some("wiki@example.com".into()),
            password: Some("hunter2".into()),
            auth: true,
        }
    }

    #[test]
    fn host_map_uses_host_key_names() {
        let map = relay().to_host_map();
        assert_eq!(map["IDHost"], "example.com");
        assert_eq!(map["port"], "587");
        assert_eq!(map["auth"], "true");
        assert_eq!(map["password"], "hunter2");
    }

    #[test]
    fn debug_output_hides_password() {
        let rendered = format!("{:?}", relay());
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("********"));
    }

    #[test]
    fn anonymous_relays_omit_credentials() {
        let relay = SmtpRelay {
            username: None,
            password: None,
            auth: false,
            ..relay()
        };
        let map = relay.to_host_map();
        assert!(!map.contains_key("username"));
        assert!(!map.contains_key("password"));
    }
}
