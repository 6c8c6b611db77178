use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateComment {
  pub text: Option<String>,
}
