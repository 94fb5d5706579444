use reqwest::ClientBuilder;
use reqwest::{Proxy, Result};

/// How the client reaches the list server.
#[derive(Debug, Clone, PartialEq)]
pub enum ProxySetting {
    /// Whatever the environment defines (`HTTP_PROXY` etc.).
    System,
    None,
    Custom {
        url: String,
        user: Option<String>,
        password: Option<String>,
    },
}

impl ProxySetting {
    pub fn set(&self, builder: ClientBuilder) -> Result<ClientBuilder> {
        match self {
            ProxySetting::System => Ok(builder),
            ProxySetting::None => {
                log::debug!("Ignoring any system proxy");
                Ok(builder.no_proxy())
            }
            ProxySetting::Custom {
                url,
                user,
                password,
            } => {
                log::info!("Using proxy: {}", url);
                let proxy = Proxy::all(url)?;
                let proxy = match user {
                    Some(login) => {
                        log::debug!("Use proxy auth: {}/***", login);
                        proxy.basic_auth(login, password.as_deref().unwrap_or_default())
                    }
                    None => proxy,
                };
                Ok(builder.proxy(proxy))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_proxy_url_fails() {
        let setting = ProxySetting::Custom {
            url: "http://[::1".into(),
            user: None,
            password: None,
        };
        assert!(setting.set(ClientBuilder::new()).is_err());
    }

    #[test]
    fn proxy_with_auth_builds() {
        let setting = ProxySetting::Custom {
            url: "http://proxy.example.org:3128".into(),
            user: Some("me".into()),
            password: None,
        };
        let builder = setting.set(ClientBuilder::new()).unwrap();
        assert!(builder.build().is_ok());
    }
}
