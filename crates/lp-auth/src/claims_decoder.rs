use crate::{AccessClaims, AuthError, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

/// Decodes access tokens without verifying their signature.
///
/// The client never holds the signing key; it only needs the claim values
/// to drive routing. Expiry is evaluated on demand by the session layer
/// rather than at decode time, so an expired token still decodes.
pub struct ClaimsDecoder {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl ClaimsDecoder {
    pub fn new() -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.algorithms = vec![Algorithm::HS256, Algorithm::RS256];
        validation.insecure_disable_signature_validation();
        validation.validate_exp = false;
        validation.validate_aud = false;

        Self {
            decoding_key: DecodingKey::from_secret(&[]),
            validation,
        }
    }

    /// Decode a token into validated, normalized claims
    #[track_caller]
    pub fn decode(&self, token: &str) -> AuthErrorResult<AccessClaims> {
        let token_data =
            decode::<AccessClaims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                AuthError::ClaimDecode {
                    source: e,
                    location: ErrorLocation::from(Location::caller()),
                }
            })?;

        let mut claims = token_data.claims;
        claims.validate()?;
        claims.normalize();

        Ok(claims)
    }
}

impl Default for ClaimsDecoder {
    fn default() -> Self {
        Self::new()
    }
}
