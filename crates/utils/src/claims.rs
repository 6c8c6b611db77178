use crate::settings::SETTINGS;
use jsonwebtoken::{
  decode, encode, Algorithm, DecodingKey, EncodingKey, Header, TokenData, Validation,
};
use serde::{Deserialize, Serialize};

type Jwt = String;

/// The token minted by the external auth collaborator. This core only
/// verifies it and resolves `sub` to a person row.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
  /// Person id, standard claim by RFC 7519.
  pub sub: i32,
  pub iss: String,
  /// Time when this token was issued as UNIX-timestamp in seconds
  pub iat: i64,
}

impl Claims {
  pub fn decode(jwt: &str) -> Result<TokenData<Claims>, jsonwebtoken::errors::Error> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = false;
    validation.required_spec_claims.clear();
    decode::<Claims>(
      jwt,
      &DecodingKey::from_secret(SETTINGS.jwt_secret().as_bytes()),
      &validation,
    )
  }

  pub fn jwt(person_id: i32) -> Result<Jwt, jsonwebtoken::errors::Error> {
    let my_claims = Claims {
      sub: person_id,
      iss: SETTINGS.hostname(),
      iat: chrono::Utc::now().timestamp(),
    };
    encode(
      &Header::default(),
      &my_claims,
      &EncodingKey::from_secret(SETTINGS.jwt_secret().as_bytes()),
    )
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;

  #[test]
  fn test_jwt_round_trip() {
    let jwt = Claims::jwt(42).unwrap();
    let decoded = Claims::decode(&jwt).unwrap();
    assert_eq!(42, decoded.claims.sub);
    assert_eq!(SETTINGS.hostname(), decoded.claims.iss);
  }

  #[test]
  fn test_decode_rejects_garbage() {
    assert!(Claims::decode("not.a.jwt").is_err());
  }

  #[test]
  fn test_decode_rejects_wrong_key() {
    let other_key = EncodingKey::from_secret(b"some other secret");
    let claims = Claims {
      sub: 7,
      iss: "elsewhere".to_string(),
      iat: chrono::Utc::now().timestamp(),
    };
    let forged = encode(&Header::default(), &claims, &other_key).unwrap();
    assert!(Claims::decode(&forged).is_err());
  }
}
