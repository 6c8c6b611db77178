use merge::Merge;
use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr};

#[derive(Debug, Deserialize, Clone, Merge)]
pub struct Settings {
  /// Hostname of this instance, used as the JWT issuer.
  pub hostname: Option<String>,
  pub bind: Option<IpAddr>,
  pub port: Option<u16>,
  /// Secret the external auth collaborator signs tokens with.
  pub jwt_secret: Option<String>,
  pub database: Option<DatabaseConfig>,
}

impl Default for Settings {
  fn default() -> Self {
    Self {
      hostname: Some("localhost".into()),
      bind: Some(IpAddr::V4(Ipv4Addr::new(0, 0, 0, 0))),
      port: Some(8188),
      jwt_secret: Some("changeme".into()),
      database: Some(DatabaseConfig::default()),
    }
  }
}

impl Settings {
  pub fn hostname(&self) -> String {
    self
      .hostname
      .clone()
      .unwrap_or_else(|| "localhost".to_string())
  }

  pub fn bind(&self) -> IpAddr {
    self
      .bind
      .unwrap_or(IpAddr::V4(Ipv4Addr::new(0, 0, 0, 0)))
  }

  pub fn port(&self) -> u16 {
    self.port.unwrap_or(8188)
  }

  pub fn jwt_secret(&self) -> String {
    self
      .jwt_secret
      .clone()
      .unwrap_or_else(|| "changeme".to_string())
  }

  pub fn database(&self) -> DatabaseConfig {
    self.database.clone().unwrap_or_default()
  }
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
  pub user: String,
  pub password: String,
  pub host: String,
  pub port: i32,
  pub database: String,
  pub pool_size: usize,
}

impl Default for DatabaseConfig {
  fn default() -> Self {
    Self {
      user: "quill".into(),
      password: "password".into(),
      host: "localhost".into(),
      port: 5432,
      database: "quill".into(),
      pool_size: 5,
    }
  }
}
